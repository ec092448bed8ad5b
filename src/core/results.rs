//! Backtest results: price history plus trades, with per-bar trade markers

use serde::Serialize;

use crate::models::market::{BacktestQuery, PriceBar, TradeRecord};
use crate::services::error::ApiError;
use crate::services::market_data::MarketDataProvider;

pub const FETCH_FAILED_MESSAGE: &str = "Error fetching data. Please check your API and inputs.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BarMarker {
    Entry,
    Exit,
    Plain,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BacktestResults {
    pub bars: Vec<PriceBar>,
    pub trades: Vec<TradeRecord>,
}

impl BacktestResults {
    pub fn markers(&self) -> Vec<BarMarker> {
        mark_trades(&self.bars, &self.trades)
    }
}

/// Fetch price history and trades together; either failing fails the whole fetch
pub async fn fetch_backtest<P>(provider: &P, query: &BacktestQuery) -> Result<BacktestResults, ApiError>
where
    P: MarketDataProvider + ?Sized,
{
    let (bars, trades) = tokio::try_join!(provider.price_history(query), provider.trades(query))?;
    tracing::info!(
        ticker = %query.ticker,
        bars = bars.len(),
        trades = trades.len(),
        "Loaded backtest results"
    );
    Ok(BacktestResults { bars, trades })
}

/// Classify each bar by whether a trade entered or exited on its date.
/// A date that is both an entry and an exit is marked as an entry.
pub fn mark_trades(bars: &[PriceBar], trades: &[TradeRecord]) -> Vec<BarMarker> {
    bars.iter()
        .map(|bar| {
            if trades.iter().any(|t| t.entry_date == bar.date) {
                BarMarker::Entry
            } else if trades
                .iter()
                .any(|t| t.exit_date.as_deref() == Some(bar.date.as_str()))
            {
                BarMarker::Exit
            } else {
                BarMarker::Plain
            }
        })
        .collect()
}
