use tracing::subscriber::set_global_default;
use tracing_subscriber::{fmt, prelude::*, EnvFilter, Registry};

/// Install a stderr subscriber. The level comes from the `-v` count only.
pub fn setup_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let fmt_layer = fmt::layer()
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr);
    let sub = Registry::default()
        .with(EnvFilter::new(level))
        .with(fmt_layer);
    if let Err(e) = set_global_default(sub) {
        eprintln!("Warning: tracing subscriber already set: {}", e);
    }
}
