use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::{non_blocking, rolling};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the global subscriber: human-readable stdout plus a
/// daily-rolling plain file under logs/. The returned guard must stay
/// alive for the lifetime of the process or buffered lines are lost.
pub fn init_logger(service_name: &str) -> WorkerGuard {
    let file_appender = rolling::daily("logs", format!("{service_name}.log"));
    let (file_writer, guard) = non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .with(fmt::layer().with_writer(file_writer).with_ansi(false))
        .init();

    guard
}
