//! Tracing setup for the builder and its demo binary
//!
//! Production emits one JSON object per event for log shipping; any other
//! environment gets coloured text. `RUST_LOG` replaces the default directives.

use crate::config::get_environment;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry,
};

/// Builder events at `info`; the HTTP stack only when it warns
pub const DEFAULT_DIRECTIVES: &str = "info,hyper=warn,reqwest=warn";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Text,
}

impl LogFormat {
    pub fn for_environment(env: &str) -> Self {
        match env {
            "production" | "prod" => LogFormat::Json,
            _ => LogFormat::Text,
        }
    }

    fn layer(self) -> Box<dyn Layer<Registry> + Send + Sync> {
        match self {
            LogFormat::Json => fmt::layer()
                .json()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_writer(std::io::stdout)
                .boxed(),
            LogFormat::Text => fmt::layer()
                .with_target(true)
                .with_ansi(true)
                .with_writer(std::io::stdout)
                .boxed(),
        }
    }
}

/// `RUST_LOG` if set and valid, else [`DEFAULT_DIRECTIVES`]
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES))
}

/// Install the global subscriber for the current `APP_ENV`.
///
/// A second call leaves the first subscriber in place.
pub fn init_logging() {
    let format = LogFormat::for_environment(&get_environment());
    if tracing_subscriber::registry()
        .with(format.layer())
        .with(env_filter())
        .try_init()
        .is_err()
    {
        tracing::debug!("Global subscriber already installed");
    }
}
