use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn";

fn filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Logs go to stderr so stdout only ever carries the date line.
/// Defaults to `warn`; override with `RUST_LOG`, e.g. `RUST_LOG=nextdate=debug`.
pub fn init_logging() {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    // Already installed is fine
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(directives.as_deref()))
        .with_writer(std::io::stderr)
        .try_init();
}
