//! Price history and trade records served by the dashboard data API

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One daily row of `/api/financial-data`.
///
/// Dates are kept as the API renders them; trades are matched to bars by
/// string equality.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceBar {
    pub date: String,
    pub close_price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ticker: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub high_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub low_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<f64>,
}

/// One row of `/api/trades`. Open trades have no exit yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeRecord {
    pub symbol: String,
    pub entry_date: String,
    pub entry_price: f64,
    #[serde(default)]
    pub exit_date: Option<String>,
    #[serde(default)]
    pub exit_price: Option<f64>,
    #[serde(default)]
    pub pnl: Option<f64>,
}

/// Ticker and date range for a backtest lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BacktestQuery {
    pub ticker: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl BacktestQuery {
    pub fn new(ticker: impl Into<String>) -> Self {
        Self {
            ticker: ticker.into(),
            start_date: None,
            end_date: None,
        }
    }

    pub fn between(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start_date = Some(start);
        self.end_date = Some(end);
        self
    }

    /// Query-string pairs; unset dates are sent empty, like an untouched date input
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let format = |date: &Option<NaiveDate>| {
            date.map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default()
        };
        vec![
            ("ticker", self.ticker.clone()),
            ("start_date", format(&self.start_date)),
            ("end_date", format(&self.end_date)),
        ]
    }
}
