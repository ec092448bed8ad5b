//! Unit tests for expression serialization

use stratboard::models::strategy::{
    ArithmeticOperator, Comparator, ConditionSide, IndicatorKind, Slot, StrategySpec, TermId,
};
use stratboard::strategies::build_expression;
use stratboard::strategies::expression::{render_sequence, render_term};

fn example_spec() -> StrategySpec {
    StrategySpec::new()
        .place_term(IndicatorKind::MovingAverage, Slot::EntryLeft)
        .place_term(IndicatorKind::LastPrice, Slot::EntryRight)
        .set_comparator(ConditionSide::Entry, Comparator::GreaterThan)
        .place_term(IndicatorKind::MovingAverage, Slot::ExitLeft)
        .place_term(IndicatorKind::LastPrice, Slot::ExitRight)
        .set_comparator(ConditionSide::Exit, Comparator::LessThan)
        .place_term(IndicatorKind::MovingAverage, Slot::Sequence)
        .place_term(IndicatorKind::High, Slot::Sequence)
        .set_window_days(TermId(0), "20")
        .set_window_days(TermId(1), "10")
}

#[test]
fn test_example_expression() {
    let expected = "Enter Long when Moving Average > Last Price\n\
                    Exit Long when Moving Average < Last Price\n\
                    Strategy Expression: Moving Average(20) + High(10)";
    assert_eq!(build_expression(&example_spec()), expected);
}

#[test]
fn test_build_is_idempotent() {
    let spec = example_spec();
    assert_eq!(build_expression(&spec), build_expression(&spec));
}

#[test]
fn test_empty_spec_renders_blanks() {
    assert_eq!(
        build_expression(&StrategySpec::new()),
        "Enter Long when   \nExit Long when   \nStrategy Expression: "
    );
}

#[test]
fn test_last_operator_is_never_emitted() {
    let spec = StrategySpec::new()
        .place_term(IndicatorKind::High, Slot::Sequence)
        .set_window_days(TermId(0), "5")
        .set_trailing_operator(TermId(0), ArithmeticOperator::Divide);
    assert_eq!(render_sequence(&spec.terms), "High(5)");
}

#[test]
fn test_joins_use_preceding_operator() {
    let spec = [IndicatorKind::High, IndicatorKind::Low, IndicatorKind::StdDev]
        .into_iter()
        .fold(StrategySpec::new(), |spec, kind| spec.place_term(kind, Slot::Sequence))
        .set_trailing_operator(TermId(0), ArithmeticOperator::Subtract)
        .set_trailing_operator(TermId(1), ArithmeticOperator::Multiply)
        .set_trailing_operator(TermId(2), ArithmeticOperator::Divide);

    assert_eq!(render_sequence(&spec.terms), "High - Low * Std Dev");
}

#[test]
fn test_term_rendering() {
    let spec = StrategySpec::new()
        .place_term(IndicatorKind::StdDev, Slot::Sequence)
        .place_term(IndicatorKind::LastPrice, Slot::Sequence)
        .set_window_days(TermId(0), "14")
        .set_free_text(TermId(0), "*2")
        .set_free_text(TermId(1), " / 100");

    assert_eq!(render_term(&spec.terms[0]), "Std Dev(14)*2");
    assert_eq!(render_term(&spec.terms[1]), "Last Price / 100");
}

#[test]
fn test_partial_condition_renders_inline() {
    let spec = StrategySpec::new()
        .place_term(IndicatorKind::Low, Slot::ExitRight)
        .set_comparator(ConditionSide::Exit, Comparator::GreaterEqual);
    let text = build_expression(&spec);
    assert_eq!(text.lines().nth(1), Some("Exit Long when  >= Low"));
}
