//! Market data provider interface backing the backtest results screen.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use super::error::{error_message, ApiError};
use crate::models::market::{BacktestQuery, PriceBar, TradeRecord};

pub const FINANCIAL_DATA_PATH: &str = "api/financial-data";
pub const TRADES_PATH: &str = "api/trades";

#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Daily price rows for the query's ticker and date range
    async fn price_history(&self, query: &BacktestQuery) -> Result<Vec<PriceBar>, ApiError>;

    /// Trades produced by the backtest over the same range
    async fn trades(&self, query: &BacktestQuery) -> Result<Vec<TradeRecord>, ApiError>;
}

/// HTTP client for the dashboard data API
pub struct DashboardApiClient {
    base_url: Url,
    http: reqwest::Client,
}

impl DashboardApiClient {
    pub fn new(base_url: Url) -> Self {
        Self::with_client(base_url, reqwest::Client::new())
    }

    pub fn with_client(mut base_url: Url, http: reqwest::Client) -> Self {
        // Url::join drops the last path segment unless it ends in '/'
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Self { base_url, http }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &BacktestQuery,
    ) -> Result<T, ApiError> {
        let url = self.base_url.join(path)?;
        let response = self
            .http
            .get(url.clone())
            .query(&query.query_pairs())
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            let fallback = status.canonical_reason().unwrap_or("request failed");
            return Err(ApiError::Application {
                status: status.as_u16(),
                message: error_message(&body, fallback),
            });
        }

        debug!(url = %url, ticker = %query.ticker, bytes = body.len(), "Fetched dashboard data");
        serde_json::from_str(&body).map_err(|e| ApiError::Decode(format!("{}: {}", path, e)))
    }
}

#[async_trait]
impl MarketDataProvider for DashboardApiClient {
    async fn price_history(&self, query: &BacktestQuery) -> Result<Vec<PriceBar>, ApiError> {
        self.get_json(FINANCIAL_DATA_PATH, query).await
    }

    async fn trades(&self, query: &BacktestQuery) -> Result<Vec<TradeRecord>, ApiError> {
        self.get_json(TRADES_PATH, query).await
    }
}

/// Provider with no data, for running without a data API
pub struct PlaceholderMarketDataProvider;

#[async_trait]
impl MarketDataProvider for PlaceholderMarketDataProvider {
    async fn price_history(&self, _query: &BacktestQuery) -> Result<Vec<PriceBar>, ApiError> {
        Ok(Vec::new())
    }

    async fn trades(&self, _query: &BacktestQuery) -> Result<Vec<TradeRecord>, ApiError> {
        Ok(Vec::new())
    }
}
