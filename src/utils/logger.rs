use std::io;
use tracing_subscriber::fmt::{self, format::DefaultFields, format::Format};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

type StderrLayer<S> = fmt::Layer<S, DefaultFields, Format, fn() -> io::Stderr>;

/// `RUST_LOG` wins over the built-in default.
fn filter_or(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

// stdout belongs to the game, so every log line goes to stderr.
fn stderr_layer<S>() -> StderrLayer<S> {
    fmt::layer()
        .with_writer(io::stderr as fn() -> io::Stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
}

pub fn init_cli_logger(verbose: bool) {
    let filter = if verbose {
        filter_or("guessing_game=debug,info")
    } else {
        filter_or("guessing_game=warn")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer().compact())
        .init();
}

/// JSON lines on stderr, for running the game under a harness that scrapes logs.
pub fn init_json_logger() {
    tracing_subscriber::registry()
        .with(filter_or("guessing_game=info"))
        .with(stderr_layer().json())
        .init();
}
