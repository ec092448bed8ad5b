//! Human-readable rendering of a strategy, shown as the preview and sent
//! alongside the structured payload.

use crate::models::strategy::{Condition, StrategySpec, Term};

pub const ENTRY_PREFIX: &str = "Enter Long when";
pub const EXIT_PREFIX: &str = "Exit Long when";
pub const SEQUENCE_PREFIX: &str = "Strategy Expression:";

/// Render the three-line expression for `spec`.
///
/// Empty operands, comparators and window days render as empty text.
pub fn build_expression(spec: &StrategySpec) -> String {
    [
        render_condition(ENTRY_PREFIX, &spec.entry),
        render_condition(EXIT_PREFIX, &spec.exit),
        format!("{} {}", SEQUENCE_PREFIX, render_sequence(&spec.terms)),
    ]
    .join("\n")
}

pub fn render_condition(prefix: &str, condition: &Condition) -> String {
    format!(
        "{} {} {} {}",
        prefix,
        condition.left,
        condition.comparator_symbol(),
        condition.right
    )
}

/// Terms joined by the operator of the term on the left; the last operator is dropped
pub fn render_sequence(terms: &[Term]) -> String {
    let mut out = String::new();
    for (i, term) in terms.iter().enumerate() {
        if i > 0 {
            let joining = &terms[i - 1].trailing_operator;
            out.push(' ');
            out.push_str(joining.symbol());
            out.push(' ');
        }
        out.push_str(&render_term(term));
    }
    out
}

pub fn render_term(term: &Term) -> String {
    let mut out = term.label().to_string();
    if let Some(days) = term.window_days.as_deref().filter(|d| !d.is_empty()) {
        out.push('(');
        out.push_str(days);
        out.push(')');
    }
    out.push_str(&term.free_text);
    out
}
