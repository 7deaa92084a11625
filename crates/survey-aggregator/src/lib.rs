//! Survey Aggregator - Per-language salary statistics from a listing source.
//!
//! This crate drains a [`ListingSource`](survey_sources::ListingSource) for
//! each requested language, estimates a salary for every listing and reduces
//! the estimates to one row of statistics per language.
//!
//! # Features
//!
//! - Languages are independent: each one is an isolated task whose finished
//!   statistics are collected back in request order
//! - Configurable parallelism; the default of one language at a time keeps
//!   requests strictly sequential
//! - The first failure aborts the whole aggregation, no partial table
//!
//! # Example
//!
//! ```rust,ignore
//! use survey_aggregator::SalaryAggregator;
//! use std::sync::Arc;
//!
//! let aggregator = SalaryAggregator::new(Arc::new(hh_source))
//!     .with_max_concurrent_languages(config.http.max_concurrent_languages);
//!
//! let table = aggregator.aggregate(&config.general.languages).await?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod aggregator;
#[allow(missing_docs)]
pub mod error;

// Re-export commonly used types
pub use aggregator::{summarize, LanguageOutcome, SalaryAggregator};
pub use error::{AggregateError, Result};
