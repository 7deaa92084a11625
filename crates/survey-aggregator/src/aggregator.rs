//! Salary aggregator for turning listings into per-language statistics.
//!
//! This module provides the `SalaryAggregator` which surveys a list of
//! languages against one listing source, running up to a configured number
//! of languages at the same time and emitting rows in request order.

use crate::error::{AggregateError, Result};
use futures::stream::{FuturesUnordered, StreamExt};
use std::sync::Arc;
use survey_core::{LanguageStats, StatsTable};
use survey_sources::{ListingSource, SourceListings};

/// What surveying a single language produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageOutcome {
    /// Row for the report
    Included(LanguageStats),
    /// The source asked for the language to be left out (nothing found)
    Omitted,
}

/// Reduce one language's listings to statistics.
///
/// Listings without a usable salary are skipped from the average but `found`
/// keeps the total the API declared.
#[must_use]
pub fn summarize<S>(source: &S, result: &SourceListings) -> LanguageOutcome
where
    S: ListingSource + ?Sized,
{
    if result.found == 0 && source.omit_when_none_found() {
        return LanguageOutcome::Omitted;
    }

    let local_currency = source.local_currency();
    let estimates = result
        .listings
        .iter()
        .filter_map(|listing| listing.salary_estimate(local_currency));

    LanguageOutcome::Included(LanguageStats::from_estimates(result.found, estimates))
}

/// Surveys languages against a single listing source.
pub struct SalaryAggregator<S: ?Sized> {
    /// Source the listings come from
    source: Arc<S>,
    /// Maximum languages in flight at once
    max_concurrent_languages: usize,
}

impl<S> SalaryAggregator<S>
where
    S: ListingSource + ?Sized,
{
    /// Create a new aggregator that surveys one language at a time.
    #[must_use]
    pub fn new(source: Arc<S>) -> Self {
        Self {
            source,
            max_concurrent_languages: 1,
        }
    }

    /// Set the maximum number of languages fetched concurrently.
    ///
    /// Values below 1 are raised to 1.
    #[must_use]
    pub fn with_max_concurrent_languages(mut self, max: usize) -> Self {
        self.max_concurrent_languages = max.max(1);
        self
    }

    /// Survey every language and collect the statistics in input order.
    ///
    /// Languages are fetched concurrently (up to `max_concurrent_languages`);
    /// each task hands its finished outcome back together with its position.
    /// The first error is returned immediately and the remaining in-flight
    /// requests are dropped.
    pub async fn aggregate(&self, languages: &[String]) -> Result<StatsTable> {
        let mut futures = FuturesUnordered::new();
        let mut outcomes: Vec<Option<LanguageOutcome>> = vec![None; languages.len()];

        tracing::info!(
            "Surveying {} languages on {}",
            languages.len(),
            self.source.source_id()
        );

        for (index, language) in languages.iter().enumerate() {
            futures.push(self.survey_language(index, language));

            // Respect concurrency limit
            while futures.len() >= self.max_concurrent_languages {
                if let Some(result) = futures.next().await {
                    let (index, outcome) = result?;
                    outcomes[index] = Some(outcome);
                }
            }
        }

        // Collect remaining results
        while let Some(result) = futures.next().await {
            let (index, outcome) = result?;
            outcomes[index] = Some(outcome);
        }

        let mut table = StatsTable::new();
        for (language, outcome) in languages.iter().zip(outcomes) {
            if let Some(LanguageOutcome::Included(stats)) = outcome {
                table.push(language.clone(), stats);
            }
        }

        Ok(table)
    }

    /// Fetch and summarize a single language.
    async fn survey_language(
        &self,
        index: usize,
        language: &str,
    ) -> Result<(usize, LanguageOutcome)> {
        let source_id = self.source.source_id();

        let result = self
            .source
            .fetch_all(language)
            .await
            .map_err(|source| AggregateError::Source {
                source_id: source_id.to_string(),
                language: language.to_string(),
                source,
            })?;

        let outcome = summarize(self.source.as_ref(), &result);
        match &outcome {
            LanguageOutcome::Included(stats) => tracing::info!(
                "{} {}: {} found, {} processed, average {}",
                source_id,
                language,
                stats.found,
                stats.processed,
                stats.average_salary
            ),
            LanguageOutcome::Omitted => {
                tracing::info!("{} {}: nothing found, omitted", source_id, language);
            }
        }

        Ok((index, outcome))
    }
}
