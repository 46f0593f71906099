use crate::error::{GreetingsError, GreetingsResult};
pub use tracing::instrument;
pub use tracing::{debug, error, info, trace, warn};
use tracing_error::ErrorLayer;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/* 📖 # Why does log output go to stderr?

Standard output carries exactly one line, the greeting. Everything diagnostic,
including log events at any level, is written to standard error.
*/

pub fn init_tracing() -> GreetingsResult<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(ErrorLayer::default())
        .try_init()
        .map_err(|e| {
            Box::new(GreetingsError::message(format!(
                "Failed to initialize tracing: {}",
                e
            )))
        })
}
