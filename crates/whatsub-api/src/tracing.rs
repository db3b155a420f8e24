//! Log subscriber setup.
//!
//! Development gets pretty, human-readable output at DEBUG. Production emits
//! one JSON object per event at INFO so log shippers can index the
//! `request_id` and other span fields. `RUST_LOG` overrides either default.

use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Environment;

const DEVELOPMENT_FILTER: &str = "debug,tower_http=debug,sqlx=warn";
const PRODUCTION_FILTER: &str = "info,tower_http=info,sqlx=warn";

/// Install the global subscriber. Panics if one is already set.
pub fn init_tracing(env: &Environment) {
    let default_filter = if env.is_development() {
        DEVELOPMENT_FILTER
    } else {
        PRODUCTION_FILTER
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let fmt_layer = tracing_subscriber::fmt::layer().with_target(true);
    let layer = if env.is_development() {
        fmt_layer
            .with_file(true)
            .with_line_number(true)
            .pretty()
            .with_filter(env_filter)
            .boxed()
    } else {
        fmt_layer
            .json()
            .with_current_span(true)
            .with_span_list(true)
            .flatten_event(true)
            .with_filter(env_filter)
            .boxed()
    };

    tracing_subscriber::registry().with(layer).init();

    tracing::info!(environment = ?env, "Tracing initialized");
}
