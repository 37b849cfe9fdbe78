use std::time::Duration;

use canasta::{BasketSource, CalculatorConfig, CalculatorError, HttpSource, SheetLayout, load_reference};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config(url: String) -> CalculatorConfig {
    CalculatorConfig::default()
        .with_source_url(url)
        .with_timeout(Duration::from_secs(2))
        .with_max_retries(0)
}

#[tokio::test]
async fn test_fetch_returns_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/serie_cba_cbt.xls"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"spreadsheet".to_vec()))
        .expect(1)
        .mount(&server)
        .await;

    let source = HttpSource::new(&config(format!("{}/serie_cba_cbt.xls", server.uri()))).unwrap();
    let body = source.fetch().await.unwrap();
    assert_eq!(body, b"spreadsheet");
}

#[tokio::test]
async fn test_error_status_is_unavailable() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let source = HttpSource::new(&config(format!("{}/missing.xls", server.uri()))).unwrap();
    let err = load_reference(&source, &SheetLayout::default())
        .await
        .unwrap_err();

    assert!(err.is_unavailable());
    assert!(err.to_string().contains("404"));
}

#[tokio::test]
async fn test_non_spreadsheet_body_is_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>mantenimiento</html>"))
        .mount(&server)
        .await;

    let source = HttpSource::new(&config(server.uri())).unwrap();
    let err = load_reference(&source, &SheetLayout::default())
        .await
        .unwrap_err();

    assert!(matches!(err, CalculatorError::ParseError(_)));
}

#[tokio::test]
async fn test_slow_server_is_unavailable_after_retries() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(500)))
        .expect(2)
        .mount(&server)
        .await;

    let config = config(server.uri())
        .with_timeout(Duration::from_millis(50))
        .with_max_retries(1)
        .with_retry_base_delay(Duration::from_millis(1));

    let source = HttpSource::new(&config).unwrap();
    let err = source.fetch().await.unwrap_err();
    assert!(err.is_unavailable());
}
