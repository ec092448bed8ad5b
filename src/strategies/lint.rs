//! Advisory checks over a strategy before it is submitted.
//!
//! Returns warnings only; submission is never blocked by them.

use std::fmt;

use crate::models::strategy::{ConditionSide, StrategySpec, TermId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LintWarning {
    MissingOperand {
        side: ConditionSide,
        position: OperandPosition,
    },
    MissingComparator(ConditionSide),
    EmptySequence,
    MissingWindowDays(TermId),
    NonNumericWindowDays { id: TermId, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperandPosition {
    Left,
    Right,
}

impl fmt::Display for LintWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LintWarning::MissingOperand { side, position } => {
                write!(f, "{:?} condition has no {:?} operand", side, position)
            }
            LintWarning::MissingComparator(side) => {
                write!(f, "{:?} condition has no comparator", side)
            }
            LintWarning::EmptySequence => f.write_str("strategy expression has no terms"),
            LintWarning::MissingWindowDays(id) => write!(f, "{} has no window days", id),
            LintWarning::NonNumericWindowDays { id, value } => {
                write!(f, "{} window days {:?} is not a positive whole number", id, value)
            }
        }
    }
}

pub fn lint(spec: &StrategySpec) -> Vec<LintWarning> {
    let mut warnings = Vec::new();

    for side in [ConditionSide::Entry, ConditionSide::Exit] {
        let condition = spec.condition(side);
        if condition.left.is_empty() {
            warnings.push(LintWarning::MissingOperand {
                side,
                position: OperandPosition::Left,
            });
        }
        if condition.comparator.is_none() {
            warnings.push(LintWarning::MissingComparator(side));
        }
        if condition.right.is_empty() {
            warnings.push(LintWarning::MissingOperand {
                side,
                position: OperandPosition::Right,
            });
        }
    }

    if spec.terms.is_empty() {
        warnings.push(LintWarning::EmptySequence);
    }

    for term in &spec.terms {
        let Some(days) = term.window_days.as_deref() else {
            continue;
        };
        if days.is_empty() {
            warnings.push(LintWarning::MissingWindowDays(term.id));
        } else if !matches!(days.parse::<u32>(), Ok(n) if n > 0) {
            warnings.push(LintWarning::NonNumericWindowDays {
                id: term.id,
                value: days.to_string(),
            });
        }
    }

    warnings
}
