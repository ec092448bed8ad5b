//! Reducer-style transitions over `StrategySpec`
//!
//! Every transition takes the current spec by reference and returns the next
//! one. Placements with no recognized destination and edits addressed to a
//! missing term return an unchanged copy; nothing here fails.

use serde::{Deserialize, Serialize};

use crate::models::strategy::{
    ArithmeticOperator, Comparator, ConditionSide, IndicatorKind, Slot, StrategySpec, Term, TermId,
};

/// A single user edit, as dispatched by the builder UI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum StrategyAction {
    /// Drop of palette block `block_id` onto drop zone `destination`.
    /// Either may be unknown or missing, in which case the drop is ignored.
    Place {
        block_id: String,
        destination: Option<String>,
    },
    SetWindowDays {
        id: TermId,
        value: String,
    },
    SetTrailingOperator {
        id: TermId,
        operator: ArithmeticOperator,
    },
    SetFreeText {
        id: TermId,
        value: String,
    },
    SetComparator {
        side: ConditionSide,
        comparator: Comparator,
    },
}

impl StrategySpec {
    /// Place an indicator block into a slot.
    ///
    /// Operand slots receive a copy of the label (last write wins). The
    /// sequence slot appends a fresh term.
    pub fn place_term(&self, kind: IndicatorKind, slot: Slot) -> StrategySpec {
        let mut next = self.clone();
        let label = kind.label().to_string();
        match slot {
            Slot::EntryLeft => next.entry.left = label,
            Slot::EntryRight => next.entry.right = label,
            Slot::ExitLeft => next.exit.left = label,
            Slot::ExitRight => next.exit.right = label,
            Slot::Sequence => {
                let id = next.allocate_term_id();
                next.terms.push(Term::new(id, kind));
            }
        }
        next
    }

    /// Place by palette block id and drop-zone name; unknown either way is a no-op
    pub fn place_dropped(&self, block_id: &str, destination: Option<&str>) -> StrategySpec {
        let kind = IndicatorKind::from_block_id(block_id);
        let slot = destination.and_then(Slot::from_zone_name);
        match (kind, slot) {
            (Some(kind), Some(slot)) => self.place_term(kind, slot),
            _ => {
                tracing::debug!(block_id, ?destination, "Ignoring drop with no recognized destination");
                self.clone()
            }
        }
    }

    /// Replace the day-count text of a term. Any text is stored as-is;
    /// `LastPrice` terms never take one.
    pub fn set_window_days(&self, id: TermId, value: impl Into<String>) -> StrategySpec {
        let value = value.into();
        self.edit_term(id, |term| {
            if term.kind.has_window() {
                term.window_days = Some(value);
            }
        })
    }

    pub fn set_trailing_operator(&self, id: TermId, operator: ArithmeticOperator) -> StrategySpec {
        self.edit_term(id, |term| term.trailing_operator = operator)
    }

    pub fn set_free_text(&self, id: TermId, value: impl Into<String>) -> StrategySpec {
        let value = value.into();
        self.edit_term(id, |term| term.free_text = value)
    }

    pub fn set_comparator(&self, side: ConditionSide, comparator: Comparator) -> StrategySpec {
        let mut next = self.clone();
        match side {
            ConditionSide::Entry => next.entry.comparator = Some(comparator),
            ConditionSide::Exit => next.exit.comparator = Some(comparator),
        }
        next
    }

    /// Dispatch a UI action to the matching transition
    pub fn apply(&self, action: &StrategyAction) -> StrategySpec {
        match action {
            StrategyAction::Place {
                block_id,
                destination,
            } => self.place_dropped(block_id, destination.as_deref()),
            StrategyAction::SetWindowDays { id, value } => self.set_window_days(*id, value.clone()),
            StrategyAction::SetTrailingOperator { id, operator } => {
                self.set_trailing_operator(*id, *operator)
            }
            StrategyAction::SetFreeText { id, value } => self.set_free_text(*id, value.clone()),
            StrategyAction::SetComparator { side, comparator } => {
                self.set_comparator(*side, *comparator)
            }
        }
    }

    fn edit_term(&self, id: TermId, edit: impl FnOnce(&mut Term)) -> StrategySpec {
        let mut next = self.clone();
        match next.terms.iter_mut().find(|term| term.id == id) {
            Some(term) => edit(term),
            None => tracing::debug!(term_id = %id, "Ignoring edit of unknown term"),
        }
        next
    }
}
