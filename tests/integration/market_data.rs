//! Integration tests for the dashboard data client

use chrono::NaiveDate;
use serde_json::json;
use stratboard::core::results::{fetch_backtest, BarMarker};
use stratboard::models::market::BacktestQuery;
use stratboard::services::{ApiError, DashboardApiClient, MarketDataProvider};
use url::Url;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::test_utils::{price_rows, trade_rows};

fn query() -> BacktestQuery {
    BacktestQuery::new("AAPL").between(
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
    )
}

fn client_for(server: &MockServer) -> DashboardApiClient {
    DashboardApiClient::new(Url::parse(&server.uri()).expect("mock server URL"))
}

async fn mount_data(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/financial-data"))
        .and(query_param("ticker", "AAPL"))
        .and(query_param("start_date", "2024-01-01"))
        .and(query_param("end_date", "2024-01-31"))
        .respond_with(ResponseTemplate::new(200).set_body_json(price_rows()))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/trades"))
        .and(query_param("ticker", "AAPL"))
        .respond_with(ResponseTemplate::new(200).set_body_json(trade_rows()))
        .mount(server)
        .await;
}

#[tokio::test]
async fn fetches_price_history_with_query() {
    let server = MockServer::start().await;
    mount_data(&server).await;

    let bars = client_for(&server)
        .price_history(&query())
        .await
        .expect("price history");

    assert_eq!(bars.len(), 3);
    assert_eq!(bars[0].date, "2024-01-02");
    assert_eq!(bars[2].close_price, 181.91);
}

#[tokio::test]
async fn fetch_backtest_combines_and_marks() {
    let server = MockServer::start().await;
    mount_data(&server).await;

    let results = fetch_backtest(&client_for(&server), &query())
        .await
        .expect("backtest results");

    assert_eq!(results.trades.len(), 1);
    assert_eq!(
        results.markers(),
        vec![BarMarker::Entry, BarMarker::Plain, BarMarker::Exit]
    );
    assert_eq!(results.trades[0].pnl, Some(-3.73));
}

#[tokio::test]
async fn either_endpoint_failing_fails_the_fetch() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/financial-data"))
        .respond_with(ResponseTemplate::new(200).set_body_json(price_rows()))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/trades"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"error": "db down"})))
        .mount(&server)
        .await;

    let err = fetch_backtest(&client_for(&server), &query())
        .await
        .unwrap_err();

    match err {
        ApiError::Application { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "db down");
        }
        other => panic!("expected application error, got {:?}", other),
    }
}

#[tokio::test]
async fn malformed_rows_are_decode_errors() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/trades"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"rows": []})))
        .mount(&server)
        .await;

    let err = client_for(&server).trades(&query()).await.unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[tokio::test]
async fn base_url_path_prefix_is_kept() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/dashboard/api/trades"))
        .respond_with(ResponseTemplate::new(200).set_body_json(trade_rows()))
        .expect(1)
        .mount(&server)
        .await;

    let base = Url::parse(&format!("{}/dashboard", server.uri())).expect("base URL");
    let client = DashboardApiClient::new(base);
    assert_eq!(client.base_url().path(), "/dashboard/");

    let trades = client.trades(&query()).await.expect("trades");
    assert_eq!(trades[0].symbol, "AAPL");
}
