//! Shared types used across the salary survey.
//!
//! Listings arrive from the sources with whatever salary information the API
//! reported; statistics are computed per language and collected into an
//! ordered table for the report.

use crate::estimator::estimate;
use serde::{Deserialize, Serialize};

/// Salary range as reported by a single listing.
///
/// Either bound may be absent. `currency` is `None` when the source does not
/// report one because every listing is already in the requested currency.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawSalaryRange {
    /// Lower bound of the offered salary
    pub lower: Option<f64>,
    /// Upper bound of the offered salary
    pub upper: Option<f64>,
    /// Currency code the bounds are expressed in
    pub currency: Option<String>,
}

impl RawSalaryRange {
    /// Build a range from wire values.
    ///
    /// Listing APIs report "not specified" as `0` as well as `null`, so a
    /// bound of zero is stored as absent. Negative and non-finite bounds are
    /// dropped the same way.
    #[must_use]
    pub fn reported(lower: Option<f64>, upper: Option<f64>, currency: Option<String>) -> Self {
        Self {
            lower: lower.filter(|v| v.is_finite() && *v > 0.0),
            upper: upper.filter(|v| v.is_finite() && *v > 0.0),
            currency,
        }
    }

    /// Estimate this range if it is in `local_currency`.
    ///
    /// A range in any other currency yields no estimate, whatever its bounds.
    #[must_use]
    pub fn estimate_in(&self, local_currency: &str) -> Option<f64> {
        match &self.currency {
            Some(currency) if currency != local_currency => None,
            _ => estimate(self.lower, self.upper),
        }
    }
}

/// One job posting returned by a source API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    /// Source-specific listing id, used to drop duplicates across pages
    pub id: Option<String>,
    /// Reported salary, if the listing has one
    pub salary: Option<RawSalaryRange>,
}

impl Listing {
    /// Create a listing.
    #[must_use]
    pub fn new(id: Option<String>, salary: Option<RawSalaryRange>) -> Self {
        Self { id, salary }
    }

    /// Salary estimate for this listing in `local_currency`, if any.
    #[must_use]
    pub fn salary_estimate(&self, local_currency: &str) -> Option<f64> {
        self.salary.as_ref()?.estimate_in(local_currency)
    }
}

/// Statistics for one language from one source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageStats {
    /// Total listings the API declared for the query
    pub found: u64,
    /// Listings that yielded a salary estimate
    pub processed: u64,
    /// Truncated mean of the estimates, 0 when nothing was processed
    pub average_salary: u64,
}

impl LanguageStats {
    /// Summarize salary estimates for a language.
    ///
    /// `found` is recorded as declared by the API and is independent of how
    /// many estimates are supplied.
    #[must_use]
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    pub fn from_estimates<I>(found: u64, estimates: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let (processed, total) = estimates
            .into_iter()
            .fold((0u64, 0.0f64), |(count, sum), value| (count + 1, sum + value));

        let average_salary = if processed == 0 {
            0
        } else {
            (total / processed as f64).floor() as u64
        };

        Self {
            found,
            processed,
            average_salary,
        }
    }
}

/// One row of a statistics table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsRow {
    /// Language keyword
    pub language: String,
    /// Statistics for the language
    #[serde(flatten)]
    pub stats: LanguageStats,
}

/// Per-language statistics in the order the languages were requested.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatsTable(Vec<StatsRow>);

impl StatsTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a row; rows keep insertion order.
    pub fn push(&mut self, language: impl Into<String>, stats: LanguageStats) {
        self.0.push(StatsRow {
            language: language.into(),
            stats,
        });
    }

    /// Look up the statistics for a language.
    #[must_use]
    pub fn get(&self, language: &str) -> Option<&LanguageStats> {
        self.0
            .iter()
            .find(|row| row.language == language)
            .map(|row| &row.stats)
    }

    /// Iterate rows in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &StatsRow> {
        self.0.iter()
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a StatsTable {
    type Item = &'a StatsRow;
    type IntoIter = std::slice::Iter<'a, StatsRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
