//! Survey Sources - Job-listing search APIs behind one trait.
//!
//! Each source turns a language keyword into the complete set of listings the
//! API returns for it, walking the API's pagination until it is exhausted.
//!
//! # Sources
//!
//! - [`HhSource`]: hh.ru style listing site, paginated by a declared page count
//! - [`SuperJobSource`]: SuperJob style catalogue, paginated by a `more` flag
//!
//! # Example
//!
//! ```rust,no_run
//! use survey_core::AppConfig;
//! use survey_sources::{HhSource, ListingSource};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::default();
//! let source = HhSource::new(&config.hh, &config.http)?;
//!
//! let result = source.fetch_all("Rust").await?;
//! println!("{} found, {} listings fetched", result.found, result.listings.len());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod error;
pub mod providers;
pub mod source;

// Re-export commonly used types
pub use error::{Result, SourceError};
pub use providers::{HhSource, SuperJobSource};
pub use source::{ListingCollector, ListingSource, SourceListings};
