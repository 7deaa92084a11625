use serde_json::json;
use survey_core::{HttpConfig, SuperJobConfig, SuperJobToken};
use survey_sources::{ListingSource, SourceError, SuperJobSource};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TOKEN: &str = "v3.r.test-token";

fn superjob_source(server: &MockServer) -> SuperJobSource {
    let config = SuperJobConfig {
        base_url: server.uri(),
        ..SuperJobConfig::default()
    };
    SuperJobSource::new(
        &config,
        &HttpConfig::default(),
        SuperJobToken::new(TOKEN).expect("valid token"),
    )
    .expect("create superjob source")
}

fn page_body(total: u64, more: bool, ids: &[u64]) -> serde_json::Value {
    let objects: Vec<_> = ids
        .iter()
        .map(|id| json!({"id": id, "payment_from": 100_000, "payment_to": 0}))
        .collect();
    json!({"total": total, "more": more, "objects": objects})
}

#[tokio::test]
async fn test_sends_token_and_search_filters() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/vacancies/"))
        .and(header("X-Api-App-Id", TOKEN))
        .and(query_param("keyword", "Swift"))
        .and(query_param("town", "Москва"))
        .and(query_param("catalogues", "48"))
        .and(query_param("page", "0"))
        .and(query_param("currency", "rub"))
        .and(query_param("count", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(1, false, &[1])))
        .expect(1)
        .mount(&server)
        .await;

    let source = superjob_source(&server);
    let result = source.fetch_all("Swift").await.expect("fetch");

    assert_eq!(result.found, 1);
    assert_eq!(result.listings.len(), 1);
    assert_eq!(
        result.listings[0].salary_estimate(source.local_currency()),
        Some(120_000.0)
    );
}

#[tokio::test]
async fn test_page_index_advances_until_no_more() {
    let server = MockServer::start().await;

    for (page, more, ids) in [("0", true, [1u64, 2]), ("1", true, [3, 4]), ("2", false, [5, 6])] {
        Mock::given(method("GET"))
            .and(path("/vacancies/"))
            .and(query_param("page", page))
            .respond_with(ResponseTemplate::new(200).set_body_json(page_body(6, more, &ids)))
            .expect(1)
            .mount(&server)
            .await;
    }

    let result = superjob_source(&server)
        .fetch_all("TypeScript")
        .await
        .expect("fetch all pages");

    assert_eq!(result.found, 6);
    assert_eq!(result.listings.len(), 6);
}

#[tokio::test]
async fn test_empty_page_with_more_flag_stops() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/vacancies/"))
        .and(query_param("page", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(10, true, &[1])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/vacancies/"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(10, true, &[])))
        .expect(1)
        .mount(&server)
        .await;

    let result = superjob_source(&server)
        .fetch_all("Ruby")
        .await
        .expect("fetch stops on empty page");

    assert_eq!(result.found, 10);
    assert_eq!(result.listings.len(), 1);
}

#[tokio::test]
async fn test_rejected_token_aborts() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/vacancies/"))
        .respond_with(ResponseTemplate::new(403).set_body_string("invalid app id"))
        .expect(1)
        .mount(&server)
        .await;

    let err = superjob_source(&server).fetch_all("C#").await.unwrap_err();
    assert!(matches!(err, SourceError::ApiError { status: 403, .. }));
}
