//! hh.ru listing source.
//!
//! The vacancy search reports how many pages a query spans; pages are
//! requested from 0 until the last declared page has been read.

use crate::error::Result;
use crate::providers::common::{build_http_client, normalize_base_url, read_json};
use crate::source::{ListingCollector, ListingSource, SourceListings};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use survey_core::{HhConfig, HttpConfig, Listing, RawSalaryRange};

const SOURCE_ID: &str = "hh";

/// hh.ru vacancy search.
pub struct HhSource {
    client: Client,
    base_url: String,
    area: u32,
    period_days: u32,
    per_page: Option<u32>,
    currency: String,
}

impl HhSource {
    /// Create a source from configuration.
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be created.
    pub fn new(config: &HhConfig, http: &HttpConfig) -> Result<Self> {
        Ok(Self {
            client: build_http_client(http)?,
            base_url: normalize_base_url(&config.base_url),
            area: config.area,
            period_days: config.period_days,
            per_page: config.per_page,
            currency: config.currency.clone(),
        })
    }

    /// Query parameters for one page of a language search.
    fn page_query(&self, language: &str, page: u32) -> Vec<(&'static str, String)> {
        let mut query = vec![
            ("text", language.to_string()),
            ("area", self.area.to_string()),
            ("page", page.to_string()),
            ("period", self.period_days.to_string()),
        ];
        if let Some(per_page) = self.per_page {
            query.push(("per_page", per_page.to_string()));
        }
        query
    }

    async fn fetch_page(&self, language: &str, page: u32) -> Result<HhPage> {
        let response = self
            .client
            .get(format!("{}/vacancies", self.base_url))
            .query(&self.page_query(language, page))
            .send()
            .await?;

        read_json(SOURCE_ID, response).await
    }
}

#[async_trait]
impl ListingSource for HhSource {
    async fn fetch_all(&self, language: &str) -> Result<SourceListings> {
        let mut collector = ListingCollector::new();
        let mut found = 0;

        for page in 0u32.. {
            let response = self.fetch_page(language, page).await?;
            tracing::debug!(
                "hh page {}/{} for {}: {} items, {} found",
                page + 1,
                response.pages,
                language,
                response.items.len(),
                response.found
            );

            found = response.found;
            collector.extend(response.items.into_iter().map(HhItem::into_listing));

            if page + 1 >= response.pages {
                break;
            }
        }

        if collector.duplicates() > 0 {
            tracing::debug!(
                "hh dropped {} repeated listings for {}",
                collector.duplicates(),
                language
            );
        }

        Ok(collector.finish(found))
    }

    fn local_currency(&self) -> &str {
        &self.currency
    }

    fn source_id(&self) -> &'static str {
        SOURCE_ID
    }
}

// hh.ru API types

#[derive(Debug, Deserialize)]
struct HhPage {
    found: u64,
    pages: u32,
    items: Vec<HhItem>,
}

#[derive(Debug, Deserialize)]
struct HhItem {
    id: Option<String>,
    salary: Option<HhSalary>,
}

#[derive(Debug, Deserialize)]
struct HhSalary {
    from: Option<f64>,
    to: Option<f64>,
    currency: Option<String>,
}

impl HhItem {
    /// A salary without a currency code cannot be in the local currency and
    /// is dropped.
    fn into_listing(self) -> Listing {
        let salary = self.salary.and_then(|s| {
            s.currency
                .map(|currency| RawSalaryRange::reported(s.from, s.to, Some(currency)))
        });
        Listing::new(self.id, salary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(per_page: Option<u32>) -> HhSource {
        let config = HhConfig {
            per_page,
            ..HhConfig::default()
        };
        HhSource::new(&config, &HttpConfig::default()).expect("create source")
    }

    #[test]
    fn test_source_creation() {
        let source = source(None);
        assert_eq!(source.source_id(), "hh");
        assert_eq!(source.local_currency(), "RUR");
        assert_eq!(source.base_url, "https://api.hh.ru");
        assert!(!source.omit_when_none_found());
    }

    #[test]
    fn test_page_query() {
        let query = source(None).page_query("Python", 2);
        assert_eq!(
            query,
            vec![
                ("text", "Python".to_string()),
                ("area", "1".to_string()),
                ("page", "2".to_string()),
                ("period", "1".to_string()),
            ]
        );

        let query = source(Some(100)).page_query("Python", 0);
        assert!(query.contains(&("per_page", "100".to_string())));
    }

    #[test]
    fn test_page_deserialization() {
        let body = r#"{
            "found": 2,
            "pages": 1,
            "per_page": 20,
            "items": [
                {"id": "1", "name": "Dev", "salary": {"from": 1000, "to": null, "currency": "RUR", "gross": true}},
                {"id": "2", "name": "Dev", "salary": null}
            ]
        }"#;

        let page: HhPage = serde_json::from_str(body).expect("parse page");
        assert_eq!(page.found, 2);
        let listings: Vec<_> = page.items.into_iter().map(HhItem::into_listing).collect();
        assert_eq!(listings[0].salary_estimate("RUR"), Some(1200.0));
        assert_eq!(listings[1].salary, None);
    }

    #[test]
    fn test_foreign_salary_is_kept_but_not_estimated() {
        let item = HhItem {
            id: Some("7".to_string()),
            salary: Some(HhSalary {
                from: Some(3000.0),
                to: Some(5000.0),
                currency: Some("USD".to_string()),
            }),
        };

        let listing = item.into_listing();
        assert!(listing.salary.is_some());
        assert_eq!(listing.salary_estimate("RUR"), None);
    }

    #[test]
    fn test_salary_without_currency_is_dropped() {
        let item = HhItem {
            id: Some("8".to_string()),
            salary: Some(HhSalary {
                from: Some(1000.0),
                to: None,
                currency: None,
            }),
        };

        let listing = item.into_listing();
        assert_eq!(listing.salary, None);
        assert_eq!(listing.salary_estimate("RUR"), None);
    }
}
