//! Happy Tummy binary entrypoint kept minimal. The runtime lives in `happytummy::app`.

use std::fmt;
use std::sync::OnceLock;

use clap::Parser;
use happytummy::{app, args, config};

struct HappyTummyTimer;

impl tracing_subscriber::fmt::time::FormatTime for HappyTummyTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        let ts = chrono::Local::now()
            .format("%Y-%m-%d-T %H:%M:%S")
            .to_string();
        w.write_str(&ts)
    }
}

static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// What: Install the global tracing subscriber.
///
/// Inputs:
/// - `level`: Default filter when `RUST_LOG` is unset.
/// - `to_file`: Log to `happytummy.log` under the logs dir; otherwise stderr.
///
/// Details:
/// - Falls back to stderr when the log file cannot be opened.
fn init_logging(level: &str, to_file: bool) {
    let env_filter = || {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level))
    };
    let file = if to_file {
        let mut log_path = config::logs_dir();
        log_path.push("happytummy.log");
        std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)
            .map(|f| (f, log_path))
    } else {
        Err(std::io::Error::other("stderr requested"))
    };
    match file {
        Ok((file, log_path)) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking)
                .with_timer(HappyTummyTimer)
                .init();
            let _ = LOG_GUARD.set(guard);
            tracing::info!(path = %log_path.display(), "logging initialized");
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(true)
                .with_writer(std::io::stderr)
                .with_timer(HappyTummyTimer)
                .init();
            if to_file {
                tracing::warn!(error = %e, "failed to open log file; using stderr");
            }
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = args::Args::parse();
    init_logging(&args::determine_log_level(&cli), !cli.is_one_shot());

    let mut settings = config::settings();
    args::apply_overrides(&cli, &mut settings);

    if let Some(code) = args::process_args(&cli, &settings).await {
        std::process::exit(code);
    }

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "happytummy starting");
    if let Err(err) = app::run(settings).await {
        tracing::error!(error = ?err, "Application error");
        eprintln!("error: {err}");
        std::process::exit(1);
    }
    tracing::info!("happytummy exited");
}
