//! Process-wide tracing setup.
//!
//! Call [`init_logging`] once from the entry point. Library code only emits
//! events and never installs a subscriber itself.

use std::sync::Once;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static INIT: Once = Once::new();

/// Install the global subscriber.
///
/// `RUST_LOG` wins over `level`. Later calls are no-ops.
pub fn init_logging(level: &str) {
    INIT.call_once(|| {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .try_init()
            .ok();
    });
}
