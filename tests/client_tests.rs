//! End-to-end tests of the three endpoints against a local mock server.

mod common;

use common::{TEST_API_KEY, mock_base_url, mock_client, query, received_queries};
use newsapi::{API_KEY_HEADER, ApiKeyQuery, Client, NewsApiError, Parameter, SortBy};
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn sources_body() -> serde_json::Value {
    json!({
        "status": "ok",
        "sources": [{
            "id": "ars-technica",
            "name": "Ars Technica",
            "description": "The PC enthusiast's resource.",
            "url": "http://arstechnica.com",
            "category": "technology",
            "language": "en",
            "country": "us"
        }]
    })
}

fn articles_body(total: u64) -> serde_json::Value {
    json!({
        "status": "ok",
        "totalResults": total,
        "articles": [{
            "source": {"id": null, "name": "Example"},
            "author": null,
            "title": "Bitcoin does a thing",
            "publishedAt": "2024-01-31T08:30:00Z",
            "content": "Lorem ipsum"
        }]
    })
}

#[tokio::test]
async fn test_sources_sends_exact_query_and_returns_body_unchanged() {
    let server = MockServer::start().await;
    let body = sources_body();

    Mock::given(method("GET"))
        .and(path("/v2/sources"))
        .and(header(API_KEY_HEADER, TEST_API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .expect(1)
        .mount(&server)
        .await;

    let client = mock_client(&server);
    let response = client
        .sources()
        .with_category("technology")
        .with_language("en")
        .with_country("us")
        .send()
        .await
        .expect("sources request should succeed");

    assert_eq!(serde_json::Value::Object(response), body);
    assert_eq!(
        received_queries(&server).await,
        vec![query(&[
            ("category", "technology"),
            ("language", "en"),
            ("country", "us")
        ])]
    );
}

#[tokio::test]
async fn test_everything_sends_only_supplied_keys() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/everything"))
        .respond_with(ResponseTemplate::new(200).set_body_json(articles_body(1)))
        .expect(1)
        .mount(&server)
        .await;

    let client = mock_client(&server);
    let response = client
        .everything()
        .with_keywords(["bitcoin"])
        .with_page(2)
        .with_page_size(50)
        .send()
        .await
        .expect("everything request should succeed");

    assert_eq!(response["totalResults"], 1);
    assert_eq!(
        received_queries(&server).await,
        vec![query(&[("q", "bitcoin"), ("page", "2"), ("pageSize", "50")])]
    );
}

#[tokio::test]
async fn test_everything_joins_multi_value_fields() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/everything"))
        .and(query_param("sources", "bbc-news,cnn"))
        .and(query_param("domains", "bbc.co.uk,cnn.com"))
        .and(query_param("language", "en,de"))
        .and(query_param("sortBy", "publishedAt"))
        .and(query_param("from", "2024-01-01"))
        .and(query_param("to", "2024-01-31"))
        .respond_with(ResponseTemplate::new(200).set_body_json(articles_body(0)))
        .expect(1)
        .mount(&server)
        .await;

    let client = mock_client(&server);
    client
        .everything()
        .with_sources(["bbc-news", "cnn"])
        .with_domains(["bbc.co.uk", "cnn.com"])
        .with_languages(["en", "de"])
        .with_sort_by(SortBy::PublishedAt)
        .with_from("2024-01-01")
        .with_to("2024-01-31")
        .send()
        .await
        .expect("everything request should succeed");
}

#[tokio::test]
async fn test_top_headlines_full_query() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/top-headlines"))
        .respond_with(ResponseTemplate::new(200).set_body_json(articles_body(1)))
        .expect(1)
        .mount(&server)
        .await;

    let client = mock_client(&server);
    client
        .top_headlines()
        .with_keywords(["election", "results"])
        .with_language("en")
        .with_country("gb")
        .with_category("general")
        .with_page_size(20)
        .with_page(1)
        .send()
        .await
        .expect("top-headlines request should succeed");

    assert_eq!(
        received_queries(&server).await,
        vec![query(&[
            ("q", "election,results"),
            ("language", "en"),
            ("country", "gb"),
            ("category", "general"),
            ("pageSize", "20"),
            ("page", "1"),
        ])]
    );
}

#[tokio::test]
async fn test_top_headlines_invalid_country_makes_no_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(articles_body(0)))
        .expect(0)
        .mount(&server)
        .await;

    let client = mock_client(&server);
    let result = client.top_headlines().with_country("zz").send().await;

    match result {
        Err(NewsApiError::InvalidArgument { parameter, value }) => {
            assert_eq!(parameter, Parameter::Country);
            assert_eq!(value, "zz");
        }
        other => panic!("Expected InvalidArgument, got {other:?}"),
    }
    assert!(received_queries(&server).await.is_empty());
}

#[tokio::test]
async fn test_sources_invalid_language_makes_no_request() {
    let server = MockServer::start().await;
    let client = mock_client(&server);

    let err = client
        .sources()
        .with_language("klingon")
        .send()
        .await
        .unwrap_err();

    assert_eq!(err.invalid_parameter(), Some(Parameter::Language));
    assert!(received_queries(&server).await.is_empty());
}

#[tokio::test]
async fn test_everything_skips_country_and_category_sets() {
    // Overriding the country/category sets to nothing must not affect /everything
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/everything"))
        .respond_with(ResponseTemplate::new(200).set_body_json(articles_body(0)))
        .expect(1)
        .mount(&server)
        .await;

    let client = Client::builder(TEST_API_KEY)
        .base_url(mock_base_url(&server))
        .with_countries(Vec::<String>::new())
        .with_categories(Vec::<String>::new())
        .build()
        .unwrap();

    client
        .everything()
        .with_keyword("rust")
        .with_language("en")
        .send()
        .await
        .expect("everything should not consult country/category sets");
}

#[tokio::test]
async fn test_validation_disabled_forwards_unknown_codes() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/top-headlines"))
        .and(query_param("country", "zz"))
        .respond_with(ResponseTemplate::new(200).set_body_json(articles_body(0)))
        .expect(1)
        .mount(&server)
        .await;

    let client = Client::builder(TEST_API_KEY)
        .base_url(mock_base_url(&server))
        .without_validation()
        .build()
        .unwrap();

    client
        .top_headlines()
        .with_country("zz")
        .send()
        .await
        .expect("unvalidated request should be sent");
}

#[tokio::test]
async fn test_custom_country_set_accepts_new_code() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/sources"))
        .and(query_param("country", "za"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sources_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = Client::builder(TEST_API_KEY)
        .base_url(mock_base_url(&server))
        .with_countries(newsapi::constants::COUNTRIES.iter().copied().chain(["za"]))
        .build()
        .unwrap();

    client
        .sources()
        .with_country("za")
        .send()
        .await
        .expect("extended country set should accept za");
}

#[tokio::test]
async fn test_trailing_slash_base_url() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/sources"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sources_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = Client::builder(TEST_API_KEY)
        .base_url(format!("{}/", mock_base_url(&server)))
        .build()
        .unwrap();

    client.sources().send().await.expect("request should succeed");
    assert_eq!(received_queries(&server).await, vec![query(&[])]);
}

#[tokio::test]
async fn test_query_authenticator_sends_api_key_param() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/sources"))
        .and(query_param("apiKey", "query-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sources_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = Client::builder("unused")
        .base_url(mock_base_url(&server))
        .authenticator(ApiKeyQuery::new("query-key"))
        .build()
        .unwrap();

    client
        .sources()
        .with_country("us")
        .send()
        .await
        .expect("request should succeed");

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].headers.get(API_KEY_HEADER).is_none());
}

#[tokio::test]
async fn test_client_reused_concurrently() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/top-headlines"))
        .respond_with(ResponseTemplate::new(200).set_body_json(articles_body(3)))
        .expect(3)
        .mount(&server)
        .await;

    let client = mock_client(&server);
    let (us, gb, de) = tokio::join!(
        client.top_headlines().with_country("us").send(),
        client.top_headlines().with_country("gb").send(),
        client.top_headlines().with_country("de").send(),
    );

    for response in [us, gb, de] {
        assert_eq!(response.unwrap()["totalResults"], 3);
    }

    let mut countries: Vec<String> = received_queries(&server)
        .await
        .into_iter()
        .map(|q| q["country"].clone())
        .collect();
    countries.sort();
    assert_eq!(countries, vec!["de", "gb", "us"]);
}
