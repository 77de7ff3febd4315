//! End-to-end tests of the proxy router against a mock upstream.

use axum::http::StatusCode;
use axum_test::TestServer;
use gim_proxy::http::{build_router, AppState};
use serde_json::json;
use url::Url;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn proxy_for(upstream: &MockServer) -> TestServer {
    let base = Url::parse(&format!("{}/gim-tec-forecast", upstream.uri())).expect("valid url");
    let state = AppState::builder().with_upstream_url(base).build().expect("valid configuration");
    TestServer::new(build_router(state)).expect("start test server")
}

#[tokio::test]
async fn test_healthz() {
    let upstream = MockServer::start().await;
    let server = proxy_for(&upstream);

    let response = server.get("/healthz").await;
    response.assert_status_ok();
    assert_eq!(response.text(), "ok");
}

#[tokio::test]
async fn test_models_relayed() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/gim-tec-forecast/models"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"code": "m1"}])))
        .expect(1)
        .mount(&upstream)
        .await;

    let server = proxy_for(&upstream);
    let response = server.get("/api/models").await;

    response.assert_status_ok();
    assert_eq!(response.text(), r#"[{"code":"m1"}]"#);
}

#[tokio::test]
async fn test_forecasts_relayed_unmodified() {
    let upstream = MockServer::start().await;
    let body = json!([
        {"id": "f-1", "created": "2024-03-01T00:00:00", "horizon": 24},
        {"id": "f-2", "created": "2024-03-02T00:00:00", "horizon": 48}
    ]);
    Mock::given(method("GET"))
        .and(path("/gim-tec-forecast/get_forecasts/m1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .mount(&upstream)
        .await;

    let server = proxy_for(&upstream);
    let response = server.get("/api/get_forecasts/m1").await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>(), body);
}

#[tokio::test]
async fn test_forecast_size_not_found() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/gim-tec-forecast/get_forecast_size/abc"))
        .respond_with(ResponseTemplate::new(404).set_body_string("\"not found\""))
        .mount(&upstream)
        .await;

    let server = proxy_for(&upstream);
    let response = server.get("/api/get_forecast_size/abc").await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.text(), "\"not found\"");
}

#[tokio::test]
async fn test_forecast_image_streamed() {
    let upstream = MockServer::start().await;
    let image: Vec<u8> = (0..=255u8).cycle().take(64 * 1024).collect();
    Mock::given(method("GET"))
        .and(path("/gim-tec-forecast/get_forecast_image/xyz"))
        .and(query_param("shift", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(image.clone(), "image/png"))
        .expect(1)
        .mount(&upstream)
        .await;

    let server = proxy_for(&upstream);
    let response = server.get("/api/get_forecast_image/xyz").add_query_param("shift", 3).await;

    response.assert_status_ok();
    assert_eq!(response.header("content-type"), "image/png");
    assert_eq!(&response.as_bytes()[..], image.as_slice());
}

#[tokio::test]
async fn test_forecast_image_default_shift() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/gim-tec-forecast/get_forecast_image/xyz"))
        .and(query_param("shift", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![1u8, 2, 3]))
        .expect(1)
        .mount(&upstream)
        .await;

    let server = proxy_for(&upstream);
    let response = server.get("/api/get_forecast_image/xyz").await;

    response.assert_status_ok();
    assert_eq!(response.header("content-type"), "application/octet-stream");
    assert_eq!(&response.as_bytes()[..], &[1u8, 2, 3]);
}

#[tokio::test]
async fn test_forecast_image_rejects_non_integer_shift() {
    let upstream = MockServer::start().await;
    let server = proxy_for(&upstream);

    let response = server.get("/api/get_forecast_image/xyz").add_query_param("shift", "abc").await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let received = upstream.received_requests().await.expect("request recording enabled");
    assert!(received.is_empty());
}

#[tokio::test]
async fn test_metrics_query_forwarded() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/gim-tec-forecast/get_metrics/m1"))
        .and(query_param("start", "2024-01-01"))
        .and(query_param("metric", "rmse"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"rmse": [0.5, 0.7]})))
        .expect(1)
        .mount(&upstream)
        .await;

    let server = proxy_for(&upstream);
    let response = server
        .get("/api/get_metrics/m1")
        .add_query_param("start", "2024-01-01")
        .add_query_param("metric", "rmse")
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>(), json!({"rmse": [0.5, 0.7]}));
}

#[tokio::test]
async fn test_upstream_status_passthrough() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/gim-tec-forecast/models"))
        .respond_with(ResponseTemplate::new(429).set_body_string("slow down"))
        .mount(&upstream)
        .await;

    let server = proxy_for(&upstream);
    let response = server.get("/api/models").await;

    response.assert_status(StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(response.text(), "slow down");
}

#[tokio::test]
async fn test_unreachable_upstream_is_server_error() {
    let base = Url::parse("http://127.0.0.1:1/gim-tec-forecast").expect("valid url");
    let state = AppState::builder().with_upstream_url(base).build().expect("valid configuration");
    let server = TestServer::new(build_router(state)).expect("start test server");

    let response = server.get("/api/models").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert!(response.text().contains("error sending request"));
}

#[tokio::test]
async fn test_unknown_route() {
    let upstream = MockServer::start().await;
    let server = proxy_for(&upstream);

    let response = server.get("/api/unknown").await;
    response.assert_status(StatusCode::NOT_FOUND);
}
