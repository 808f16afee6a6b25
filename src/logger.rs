use tracing_subscriber::prelude::*;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt::{self, format::FmtSpan}};

const DEFAULT_FILTER: &str = "info";

/// Span timings are only interesting when someone asked for debug output or more.
fn span_events_for(env_filter: &EnvFilter) -> FmtSpan {
    let verbose = env_filter
        .max_level_hint()
        .is_some_and(|level| level >= LevelFilter::DEBUG);
    if verbose {
        FmtSpan::CLOSE
    } else {
        FmtSpan::NONE
    }
}

/// Installs the global subscriber. `RUST_LOG` overrides the default `info` level.
pub fn init() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let span_events = span_events_for(&env_filter);

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_timer(fmt::time::uptime())
        .with_span_events(span_events);

    // A second init (tests, embedding applications) keeps the first subscriber
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init();
}
