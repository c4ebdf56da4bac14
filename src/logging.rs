use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise `verbose` raises the default level
/// from warn to debug. Output goes to stderr so log lines do not corrupt
/// the raw-mode screen.
pub fn init_tracing(verbose: bool) {
    let default_directive = if verbose {
        "typeahead_tui=debug"
    } else {
        "typeahead_tui=warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_directive.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
