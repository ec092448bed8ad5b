//! Application state driven by the dashboard UI

pub mod results;
pub mod session;

pub use results::{fetch_backtest, mark_trades, BacktestResults, BarMarker};
pub use session::{BuilderSession, SessionError, SubmissionState, View, SUBMISSION_FAILED_MESSAGE};
