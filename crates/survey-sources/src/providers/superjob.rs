//! SuperJob catalogue source.
//!
//! Every page carries a `more` flag; the page index is advanced until the API
//! reports no further results. Salaries are requested in a fixed currency so
//! the returned listings carry no currency of their own.

use crate::error::Result;
use crate::providers::common::{build_http_client, normalize_base_url, read_json};
use crate::source::{ListingCollector, ListingSource, SourceListings};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use survey_core::{HttpConfig, Listing, RawSalaryRange, SuperJobConfig, SuperJobToken};

const SOURCE_ID: &str = "superjob";

/// Header carrying the application key.
const APP_ID_HEADER: &str = "X-Api-App-Id";

/// SuperJob vacancy catalogue search.
pub struct SuperJobSource {
    client: Client,
    base_url: String,
    token: SuperJobToken,
    town: String,
    catalogue: u32,
    currency: String,
    page_size: u32,
}

impl SuperJobSource {
    /// Create a source from configuration and the application key.
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be created.
    pub fn new(config: &SuperJobConfig, http: &HttpConfig, token: SuperJobToken) -> Result<Self> {
        Ok(Self {
            client: build_http_client(http)?,
            base_url: normalize_base_url(&config.base_url),
            token,
            town: config.town.clone(),
            catalogue: config.catalogue,
            currency: config.currency.clone(),
            page_size: config.page_size,
        })
    }

    /// Query parameters for one page of a language search.
    fn page_query(&self, language: &str, page: u32) -> Vec<(&'static str, String)> {
        vec![
            ("keyword", language.to_string()),
            ("town", self.town.clone()),
            ("catalogues", self.catalogue.to_string()),
            ("page", page.to_string()),
            ("currency", self.currency.clone()),
            ("count", self.page_size.to_string()),
        ]
    }

    async fn fetch_page(&self, language: &str, page: u32) -> Result<SuperJobPage> {
        let response = self
            .client
            .get(format!("{}/vacancies/", self.base_url))
            .header(APP_ID_HEADER, self.token.expose())
            .query(&self.page_query(language, page))
            .send()
            .await?;

        read_json(SOURCE_ID, response).await
    }
}

#[async_trait]
impl ListingSource for SuperJobSource {
    async fn fetch_all(&self, language: &str) -> Result<SourceListings> {
        let mut collector = ListingCollector::new();
        let mut found = 0;

        for page in 0u32.. {
            let response = self.fetch_page(language, page).await?;
            tracing::debug!(
                "superjob page {} for {}: {} objects, {} total, more={}",
                page + 1,
                language,
                response.objects.len(),
                response.total,
                response.more
            );

            found = response.total;
            let received = response.objects.len();
            collector.extend(
                response
                    .objects
                    .into_iter()
                    .map(SuperJobObject::into_listing),
            );

            if !response.more {
                break;
            }
            if received == 0 {
                tracing::warn!(
                    "superjob reported more results for {} but page {} was empty, stopping",
                    language,
                    page
                );
                break;
            }
        }

        if collector.duplicates() > 0 {
            tracing::debug!(
                "superjob dropped {} repeated listings for {}",
                collector.duplicates(),
                language
            );
        }

        Ok(collector.finish(found))
    }

    fn local_currency(&self) -> &str {
        &self.currency
    }

    fn omit_when_none_found(&self) -> bool {
        true
    }

    fn source_id(&self) -> &'static str {
        SOURCE_ID
    }
}

// SuperJob API types

#[derive(Debug, Deserialize)]
struct SuperJobPage {
    total: u64,
    objects: Vec<SuperJobObject>,
    more: bool,
}

#[derive(Debug, Deserialize)]
struct SuperJobObject {
    id: Option<u64>,
    payment_from: Option<f64>,
    payment_to: Option<f64>,
}

impl SuperJobObject {
    fn into_listing(self) -> Listing {
        let salary = RawSalaryRange::reported(self.payment_from, self.payment_to, None);
        Listing::new(self.id.map(|id| id.to_string()), Some(salary))
    }
}
