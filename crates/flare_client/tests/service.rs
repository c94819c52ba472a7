use std::time::Duration;

use pretty_assertions::assert_eq;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use flare_client::{HttpJobService, JobService, ServiceError, ServiceSettings, DEFAULT_BASE_URL};

fn settings_for(server: &MockServer) -> ServiceSettings {
    ServiceSettings {
        base_url: server.uri(),
        ..ServiceSettings::default()
    }
}

#[tokio::test]
async fn status_decodes_and_defaults_missing_fields() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/scraping-progress/"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"is_running": true}"#,
            "application/json",
        ))
        .mount(&server)
        .await;

    let service = HttpJobService::new(settings_for(&server)).expect("client");
    let status = service.scrape_status().await.expect("status ok");
    assert!(status.is_running);
    assert_eq!(status.rows_scraped, 0);
}

#[tokio::test]
async fn status_handles_null_fields() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/scraping-progress/"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"is_running": null, "rows_scraped": null}"#,
            "application/json",
        ))
        .mount(&server)
        .await;

    let service = HttpJobService::new(settings_for(&server)).expect("client");
    let status = service.scrape_status().await.expect("status ok");
    assert!(!status.is_running);
    assert_eq!(status.rows_scraped, 0);
}

#[tokio::test]
async fn start_failure_carries_the_server_detail() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/scrape/"))
        .respond_with(ResponseTemplate::new(409).set_body_raw(
            r#"{"detail": "a scrape job is already running"}"#,
            "application/json",
        ))
        .mount(&server)
        .await;

    let service = HttpJobService::new(settings_for(&server)).expect("client");
    let err = service.start_scrape().await.unwrap_err();
    assert_eq!(
        err,
        ServiceError::Status {
            code: 409,
            detail: Some("a scrape job is already running".to_string()),
        }
    );
    assert_eq!(
        err.to_string(),
        "service returned status 409: a scrape job is already running"
    );
}

#[tokio::test]
async fn stop_failure_without_body_has_no_detail() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/stop-scrape/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let service = HttpJobService::new(settings_for(&server)).expect("client");
    let err = service.stop_scrape().await.unwrap_err();
    assert_eq!(
        err,
        ServiceError::Status {
            code: 500,
            detail: None,
        }
    );
}

#[tokio::test]
async fn records_default_missing_and_null_fields() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/flares/"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"[
                {"id": 1, "volume": 3.5, "duration": 2.0, "h2s": 0.1,
                 "date": "2024-05-01", "latitude": 31.9, "longitude": -102.1,
                 "location": "Midland County", "operator": "Acme Oil"},
                {"id": 2, "volume": 1.25, "location": null, "operator": ""}
            ]"#,
            "application/json",
        ))
        .mount(&server)
        .await;

    let service = HttpJobService::new(settings_for(&server)).expect("client");
    let records = service.fetch_records().await.expect("records ok");
    assert_eq!(records.len(), 2);

    assert_eq!(records[0].operator, "Acme Oil");
    assert_eq!(records[0].latitude, 31.9);

    let partial = &records[1];
    assert_eq!(partial.id, 2);
    assert_eq!(partial.volume, 1.25);
    assert_eq!(partial.duration, 0.0);
    assert_eq!(partial.latitude, 0.0);
    assert_eq!(partial.longitude, 0.0);
    assert_eq!(partial.location, "Unknown");
    assert_eq!(partial.operator, "Unknown");
    assert_eq!(partial.date, "");
}

#[tokio::test]
async fn record_fetch_with_undecodable_body_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/flares/"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("not json", "application/json"))
        .mount(&server)
        .await;

    let service = HttpJobService::new(settings_for(&server)).expect("client");
    let err = service.fetch_records().await.unwrap_err();
    assert!(matches!(err, ServiceError::Decode(_)), "got {err:?}");
}

#[tokio::test]
async fn slow_response_maps_to_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/scraping-progress/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_raw(r#"{"is_running": false}"#, "application/json"),
        )
        .mount(&server)
        .await;

    let settings = ServiceSettings {
        request_timeout: Duration::from_millis(50),
        ..settings_for(&server)
    };
    let service = HttpJobService::new(settings).expect("client");
    let err = service.scrape_status().await.unwrap_err();
    assert_eq!(err, ServiceError::Timeout);
}

#[tokio::test]
async fn unreachable_service_maps_to_network_error() {
    // Nothing listens on this port.
    let settings = ServiceSettings::default().with_base_url("http://127.0.0.1:1/api/v1");
    let service = HttpJobService::new(settings).expect("client");
    let err = service.scrape_status().await.unwrap_err();
    assert!(matches!(err, ServiceError::Network(_)), "got {err:?}");
}

#[test]
fn invalid_base_url_keeps_the_default() {
    let settings = ServiceSettings::default().with_base_url("not a url");
    assert_eq!(settings.base_url, DEFAULT_BASE_URL);
}

#[test]
fn trailing_slash_on_base_url_is_trimmed() {
    let settings = ServiceSettings::default().with_base_url("http://example.com/api/v1/");
    assert_eq!(settings.base_url, "http://example.com/api/v1");
}
