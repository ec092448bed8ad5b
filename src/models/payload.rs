//! Wire shape of the strategy submission

use serde::{Deserialize, Serialize};

use super::strategy::{Condition, StrategySpec, Term};
use crate::strategies::expression::build_expression;

/// JSON body POSTed to the evaluation service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionPayload {
    pub entry_long: ConditionPayload,
    pub exit_long: ConditionPayload,
    pub strategy: Vec<TermPayload>,
    pub expression: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionPayload {
    pub comparator: String,
    pub left: String,
    pub right: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TermPayload {
    pub operator: String,
    pub indicator: String,
    pub free_text: String,
    pub window_days: Option<String>,
}

impl SubmissionPayload {
    pub fn from_spec(spec: &StrategySpec) -> Self {
        Self {
            entry_long: (&spec.entry).into(),
            exit_long: (&spec.exit).into(),
            strategy: spec.terms.iter().map(Into::into).collect(),
            expression: build_expression(spec),
        }
    }
}

impl From<&StrategySpec> for SubmissionPayload {
    fn from(spec: &StrategySpec) -> Self {
        Self::from_spec(spec)
    }
}

impl From<&Condition> for ConditionPayload {
    fn from(condition: &Condition) -> Self {
        Self {
            comparator: condition.comparator_symbol().to_string(),
            left: condition.left.clone(),
            right: condition.right.clone(),
        }
    }
}

impl From<&Term> for TermPayload {
    fn from(term: &Term) -> Self {
        Self {
            operator: term.trailing_operator.symbol().to_string(),
            indicator: term.label().to_string(),
            free_text: term.free_text.clone(),
            window_days: term.window_days.clone(),
        }
    }
}
