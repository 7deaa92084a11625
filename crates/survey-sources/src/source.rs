//! Core listing source trait and result types.

use crate::error::Result;
use async_trait::async_trait;
use std::collections::HashSet;
use survey_core::Listing;

/// Trait for job-listing search APIs.
///
/// Implementations must be thread-safe (Send + Sync) so languages can be
/// fetched concurrently by the aggregator.
#[async_trait]
pub trait ListingSource: Send + Sync {
    /// Fetch every listing for a language keyword, following pagination to
    /// the end.
    ///
    /// # Errors
    /// Returns error on any network failure, non-success status or
    /// malformed response. Nothing is retried.
    async fn fetch_all(&self, language: &str) -> Result<SourceListings>;

    /// Currency a listing's salary must be in to count towards the average.
    fn local_currency(&self) -> &str;

    /// Whether a language the API found no listings for is left out of the
    /// report instead of being shown with zeros.
    fn omit_when_none_found(&self) -> bool {
        false
    }

    /// Get the unique identifier for this source.
    fn source_id(&self) -> &str;
}

/// Everything a source returned for one language.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SourceListings {
    /// Total the API declared for the query
    pub found: u64,
    /// Deduplicated listings across all pages
    pub listings: Vec<Listing>,
}

/// Accumulates listings across pages, dropping repeats.
///
/// Results can shift between page requests, so the same listing may show up
/// on two pages. Listings without an id are always kept.
#[derive(Debug, Default)]
pub struct ListingCollector {
    seen: HashSet<String>,
    listings: Vec<Listing>,
    duplicates: usize,
}

impl ListingCollector {
    /// Create an empty collector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one page worth of listings.
    pub fn extend<I>(&mut self, page: I)
    where
        I: IntoIterator<Item = Listing>,
    {
        for listing in page {
            if let Some(id) = &listing.id {
                if !self.seen.insert(id.clone()) {
                    self.duplicates += 1;
                    continue;
                }
            }
            self.listings.push(listing);
        }
    }

    /// Number of repeated listings dropped so far.
    #[must_use]
    pub fn duplicates(&self) -> usize {
        self.duplicates
    }

    /// Finish collecting with the API's declared total.
    #[must_use]
    pub fn finish(self, found: u64) -> SourceListings {
        SourceListings {
            found,
            listings: self.listings,
        }
    }
}
