//! HTTP collaborators: strategy evaluation and dashboard data.

pub mod error;
pub mod evaluation;
pub mod market_data;

pub use error::ApiError;
pub use evaluation::{EvaluationResponse, EvaluationService, HttpEvaluationClient};
pub use market_data::{DashboardApiClient, MarketDataProvider, PlaceholderMarketDataProvider};
