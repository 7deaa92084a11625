//! Listing source implementations.

pub mod common;
pub mod hh;
pub mod superjob;

pub use hh::HhSource;
pub use superjob::SuperJobSource;
