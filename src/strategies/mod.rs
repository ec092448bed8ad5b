//! Strategy editing, serialization and linting.

pub mod builder;
pub mod expression;
pub mod lint;

pub use builder::StrategyAction;
pub use expression::build_expression;
pub use lint::{lint, LintWarning, OperandPosition};
