use tracing_subscriber::{EnvFilter, fmt};

fn main() {
    // Logs go to stderr so stdout carries only the CSV report.
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = daily_ledger::app::run(std::env::args()) {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}
