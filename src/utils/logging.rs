// file: src/utils/logging.rs
// description: Tracing subscriber initialization on stderr with optional ANSI coloring

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// stdout carries the JSON envelope, so every log line goes to stderr.
/// `RUST_LOG` overrides the level chosen by `verbose`.
pub fn init_logger(colored_output: bool, verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(true)
        .with_line_number(true)
        .compact()
        .with_ansi(colored_output);

    // A second initialisation (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
