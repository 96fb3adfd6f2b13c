use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const DEFAULT_FILTER: &str = "info,janken_judge=info,actix_web=info,sqlx=warn,sea_orm=warn";

/// Install the global subscriber.
///
/// `RUST_LOG` overrides the default filter. Output is JSON unless
/// `JANKEN_LOG_FORMAT=pretty`, which is easier to read in a terminal.
pub fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let pretty = std::env::var("JANKEN_LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("pretty"))
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(env_filter);
    if pretty {
        registry.with(fmt::layer().with_target(true)).init();
    } else {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_target(false)
                    .with_current_span(true)
                    .with_ansi(false),
            )
            .init();
    }
}
