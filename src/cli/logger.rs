use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Diagnostics go to stderr so the chart on stdout stays clean.
/// `RUST_LOG` wins over `--debug` when set.
pub fn init_cli_logger(debug: bool) {
    let fallback = if debug {
        "letter_histogram=debug"
    } else {
        "letter_histogram=warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    // a second init (e.g. from an embedding host) keeps the existing subscriber
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .try_init();
}
