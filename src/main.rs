use dotenvy::dotenv;
use stratboard::config::{get_environment, ServiceConfig};
use stratboard::core::{BuilderSession, View};
use stratboard::logging;
use stratboard::models::{ArithmeticOperator, Comparator, ConditionSide, IndicatorKind, Slot, TermId};
use stratboard::services::HttpEvaluationClient;
use stratboard::strategies::{lint, StrategyAction};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    logging::init_logging();

    let config = ServiceConfig::from_env()?;
    info!(environment = %get_environment(), evaluation_url = %config.evaluation_url, "Starting strategy builder");

    let mut session = BuilderSession::new();
    for action in example_actions() {
        session.dispatch(&action);
    }

    for warning in lint(session.spec()) {
        warn!(%warning, "Strategy lint");
    }

    println!("Generated Expression:");
    println!("{}", session.build_expression());
    println!();

    let client = HttpEvaluationClient::new(config.evaluation_url.clone());
    match session.submit(&client).await {
        Ok(()) => {
            if let View::Results(response) = session.view() {
                println!("Evaluation accepted (HTTP {}):", response.status);
                println!("{}", response.body);
            }
        }
        Err(e) => {
            warn!(error = %e, "Submission failed");
            println!("{}", session.error_message().unwrap_or_default());
        }
    }

    Ok(())
}

/// Moving Average > Last Price to enter, Moving Average < Last Price to exit,
/// over Moving Average(20) + High(10)
fn example_actions() -> Vec<StrategyAction> {
    let place = |kind: IndicatorKind, slot: Slot| StrategyAction::Place {
        block_id: kind.block_id().to_string(),
        destination: Some(slot.zone_name().to_string()),
    };

    vec![
        place(IndicatorKind::MovingAverage, Slot::EntryLeft),
        place(IndicatorKind::LastPrice, Slot::EntryRight),
        StrategyAction::SetComparator {
            side: ConditionSide::Entry,
            comparator: Comparator::GreaterThan,
        },
        place(IndicatorKind::MovingAverage, Slot::ExitLeft),
        place(IndicatorKind::LastPrice, Slot::ExitRight),
        StrategyAction::SetComparator {
            side: ConditionSide::Exit,
            comparator: Comparator::LessThan,
        },
        place(IndicatorKind::MovingAverage, Slot::Sequence),
        place(IndicatorKind::High, Slot::Sequence),
        StrategyAction::SetWindowDays {
            id: TermId(0),
            value: "20".to_string(),
        },
        StrategyAction::SetTrailingOperator {
            id: TermId(0),
            operator: ArithmeticOperator::Add,
        },
        StrategyAction::SetWindowDays {
            id: TermId(1),
            value: "10".to_string(),
        },
    ]
}
