//! Strategy builder data models

use serde::{Deserialize, Serialize};
use std::fmt;

/// Indicator blocks available in the builder palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IndicatorKind {
    #[serde(rename = "Moving Average")]
    MovingAverage,
    #[serde(rename = "High")]
    High,
    #[serde(rename = "Low")]
    Low,
    #[serde(rename = "Std Dev")]
    StdDev,
    #[serde(rename = "Last Price")]
    LastPrice,
}

impl IndicatorKind {
    /// Palette order
    pub const ALL: [IndicatorKind; 5] = [
        IndicatorKind::MovingAverage,
        IndicatorKind::High,
        IndicatorKind::Low,
        IndicatorKind::StdDev,
        IndicatorKind::LastPrice,
    ];

    /// Display label, also the text copied into condition operands
    pub fn label(&self) -> &'static str {
        match self {
            IndicatorKind::MovingAverage => "Moving Average",
            IndicatorKind::High => "High",
            IndicatorKind::Low => "Low",
            IndicatorKind::StdDev => "Std Dev",
            IndicatorKind::LastPrice => "Last Price",
        }
    }

    /// Whether the block takes a day-count parameter
    pub fn has_window(&self) -> bool {
        !matches!(self, IndicatorKind::LastPrice)
    }

    /// Palette block id ("1".."5")
    pub fn block_id(&self) -> &'static str {
        match self {
            IndicatorKind::MovingAverage => "1",
            IndicatorKind::High => "2",
            IndicatorKind::Low => "3",
            IndicatorKind::StdDev => "4",
            IndicatorKind::LastPrice => "5",
        }
    }

    pub fn from_block_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.block_id() == id)
    }
}

impl fmt::Display for IndicatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Arithmetic operator joining a term to the next one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ArithmeticOperator {
    #[default]
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Subtract,
    #[serde(rename = "*")]
    Multiply,
    #[serde(rename = "/")]
    Divide,
}

impl ArithmeticOperator {
    pub const ALL: [ArithmeticOperator; 4] = [
        ArithmeticOperator::Add,
        ArithmeticOperator::Subtract,
        ArithmeticOperator::Multiply,
        ArithmeticOperator::Divide,
    ];

    pub fn symbol(&self) -> &'static str {
        match self {
            ArithmeticOperator::Add => "+",
            ArithmeticOperator::Subtract => "-",
            ArithmeticOperator::Multiply => "*",
            ArithmeticOperator::Divide => "/",
        }
    }
}

impl fmt::Display for ArithmeticOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Comparison operations for entry/exit conditions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Comparator {
    #[serde(rename = ">")]
    GreaterThan,
    #[serde(rename = "<")]
    LessThan,
    #[serde(rename = ">=")]
    GreaterEqual,
    #[serde(rename = "<=")]
    LessEqual,
    #[serde(rename = "=")]
    Equal,
}

impl Comparator {
    pub const ALL: [Comparator; 5] = [
        Comparator::GreaterThan,
        Comparator::LessThan,
        Comparator::GreaterEqual,
        Comparator::LessEqual,
        Comparator::Equal,
    ];

    pub fn symbol(&self) -> &'static str {
        match self {
            Comparator::GreaterThan => ">",
            Comparator::LessThan => "<",
            Comparator::GreaterEqual => ">=",
            Comparator::LessEqual => "<=",
            Comparator::Equal => "=",
        }
    }
}

impl fmt::Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Identifier of a placed term, unique within its spec
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TermId(pub u64);

impl fmt::Display for TermId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "term-{}", self.0)
    }
}

/// One placed indicator block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    pub id: TermId,
    pub kind: IndicatorKind,
    /// Day-count text as typed; `None` only for `LastPrice`
    pub window_days: Option<String>,
    pub trailing_operator: ArithmeticOperator,
    pub free_text: String,
}

impl Term {
    pub fn new(id: TermId, kind: IndicatorKind) -> Self {
        Self {
            id,
            kind,
            window_days: kind.has_window().then(String::new),
            trailing_operator: ArithmeticOperator::default(),
            free_text: String::new(),
        }
    }

    pub fn label(&self) -> &'static str {
        self.kind.label()
    }
}

/// Which of the two conditions an edit targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConditionSide {
    Entry,
    Exit,
}

/// Left/comparator/right triple. Operands are label copies, not term references.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    pub left: String,
    pub right: String,
    pub comparator: Option<Comparator>,
}

impl Condition {
    pub fn comparator_symbol(&self) -> &'static str {
        self.comparator.as_ref().map(Comparator::symbol).unwrap_or("")
    }
}

/// Drop destination for a palette block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Slot {
    EntryLeft,
    EntryRight,
    ExitLeft,
    ExitRight,
    Sequence,
}

impl Slot {
    pub const ALL: [Slot; 5] = [
        Slot::EntryLeft,
        Slot::EntryRight,
        Slot::ExitLeft,
        Slot::ExitRight,
        Slot::Sequence,
    ];

    /// Drop-zone name used by the builder UI
    pub fn zone_name(&self) -> &'static str {
        match self {
            Slot::EntryLeft => "enterLongLeft",
            Slot::EntryRight => "enterLongRight",
            Slot::ExitLeft => "exitLongLeft",
            Slot::ExitRight => "exitLongRight",
            Slot::Sequence => "strategy",
        }
    }

    pub fn from_zone_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|slot| slot.zone_name() == name)
    }
}

/// Entry condition, exit condition and the ordered term sequence
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategySpec {
    pub entry: Condition,
    pub exit: Condition,
    pub terms: Vec<Term>,
    /// Lower bound for the next id handed out by sequence placement
    #[serde(default)]
    next_term_id: u64,
}

impl StrategySpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn condition(&self, side: ConditionSide) -> &Condition {
        match side {
            ConditionSide::Entry => &self.entry,
            ConditionSide::Exit => &self.exit,
        }
    }

    pub fn term(&self, id: TermId) -> Option<&Term> {
        self.terms.iter().find(|term| term.id == id)
    }

    /// Hand out an id no current term uses. The stored counter may be stale
    /// (or absent in older serialized specs), so it is raised past every id
    /// already in the sequence.
    pub(crate) fn allocate_term_id(&mut self) -> TermId {
        let floor = self
            .terms
            .iter()
            .map(|term| term.id.0.saturating_add(1))
            .max()
            .unwrap_or(0);
        let id = self.next_term_id.max(floor);
        self.next_term_id = id.saturating_add(1);
        TermId(id)
    }
}
