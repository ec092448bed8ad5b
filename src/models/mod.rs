//! Shared data models spanning the builder, session and service layers.

pub mod market;
pub mod payload;
pub mod strategy;

pub use market::{BacktestQuery, PriceBar, TradeRecord};
pub use payload::{ConditionPayload, SubmissionPayload, TermPayload};
pub use strategy::{
    ArithmeticOperator, Comparator, Condition, ConditionSide, IndicatorKind, Slot, StrategySpec,
    Term, TermId,
};
