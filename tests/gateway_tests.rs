//! HTTP-level tests for the metrics gateway.

use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use chatlens::api::{MetricsApi, MetricsClient};
use chatlens::error::{ApiError, Error};

#[tokio::test]
async fn requests_carry_the_bearer_token_and_query_fragment() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/sentiment"))
        .and(query_param("today", "true"))
        .and(header("authorization", "Bearer sekrit"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "sentiments": [{"sentiment": "positive", "count": 5}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = MetricsClient::new(server.uri(), "sekrit".into());
    let response = client
        .sentiment_distribution("?today=true")
        .await
        .expect("sentiment fetch");

    assert_eq!(response.sentiments.len(), 1);
    assert_eq!(response.sentiments[0].sentiment, "positive");
    assert_eq!(response.sentiments[0].count, 5.0);
}

#[tokio::test]
async fn enveloped_payloads_are_unwrapped() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/conversion"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "conversion_rate": 12.5,
                "total_appointments": 10,
                "total_chats": 80
            }
        })))
        .mount(&server)
        .await;

    let client = MetricsClient::new(server.uri(), "tok".into());
    let response = client.conversion_rate("").await.expect("conversion fetch");

    assert_eq!(response.conversion_rate, 12.5);
    assert_eq!(response.total_appointments, 10);
    assert_eq!(response.total_chats, 80);
}

#[tokio::test]
async fn bare_payloads_pass_through_unchanged() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/keywords"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "top_keywords": [{"keyword": "pricing", "count": 7}]
        })))
        .mount(&server)
        .await;

    let client = MetricsClient::new(server.uri(), "tok".into());
    let response = client.top_keywords("").await.expect("keywords fetch");

    assert_eq!(response.top_keywords[0].keyword, "pricing");
}

#[tokio::test]
async fn non_2xx_surfaces_status_and_reason() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/channels"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = MetricsClient::new(server.uri(), "tok".into());
    let result = client.channel_distribution("").await;

    match result {
        Err(Error::Api(ApiError::Status {
            endpoint, status, ..
        })) => {
            assert_eq!(endpoint, "/channels");
            assert_eq!(status, 500);
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn sparse_payloads_deserialize_to_defaults() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/conversion-over-time"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "points": [{"bucket_start": "2024-01-01", "bucket_end": "2024-01-07"}]
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/average_execution_time"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let client = MetricsClient::new(server.uri(), "tok".into());

    let series = client.conversion_over_time("").await.expect("series fetch");
    assert_eq!(series.points.len(), 1);
    assert!(series.points[0].conversion_rate.is_none());
    assert!(series.points[0].range_label.is_none());

    let timing = client
        .average_response_time("")
        .await
        .expect("timing fetch");
    assert_eq!(timing.average_execution_time_in_sec, 0.0);
}

#[tokio::test]
async fn summaries_endpoint_takes_no_query_params() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/summaries"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "sample_summaries": [{"user": "ada", "summary": "asked about pricing"}],
            "total_users_with_summary": 41
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = MetricsClient::new(server.uri(), "tok".into());
    let response = client
        .conversation_summaries()
        .await
        .expect("summaries fetch");

    assert_eq!(response.total_users_with_summary, 41);
    assert_eq!(response.sample_summaries[0].user, "ada");
}
