//! Survey Core - Foundation crate for the salary survey.
//!
//! This crate provides the shared domain types, the salary estimator, error
//! handling and configuration that the listing sources, the aggregator and
//! the command-line driver depend on.
//!
//! # Modules
//!
//! - [`error`] - Central error types using thiserror
//! - [`config`] - TOML-based configuration with XDG paths and env overrides
//! - [`credentials`] - Source API tokens read from the environment
//! - [`types`] - Listings, salary ranges and per-language statistics
//! - [`estimator`] - Single-value salary estimate from a reported range
//!
//! # Example
//!
//! ```rust
//! use survey_core::{estimate, LanguageStats};
//!
//! let estimates = [Some(1000.0), estimate(None, Some(3000.0)), estimate(None, None)];
//! let stats = LanguageStats::from_estimates(5, estimates.into_iter().flatten());
//!
//! assert_eq!(stats.processed, 2);
//! assert_eq!(stats.average_salary, 1700);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod config;
pub mod credentials;
pub mod error;
pub mod estimator;
pub mod types;

// Re-export commonly used types
pub use config::{AppConfig, GeneralConfig, HhConfig, HttpConfig, SuperJobConfig};
pub use credentials::{SuperJobToken, SUPERJOB_TOKEN_VAR};
pub use error::{ConfigError, ConfigResult, Result, SurveyError};
pub use estimator::estimate;
pub use types::{LanguageStats, Listing, RawSalaryRange, StatsRow, StatsTable};
