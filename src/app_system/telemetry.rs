/// Install the global tracing subscriber.
///
/// Defaults to `info`; override with `RUST_LOG` (e.g.
/// `RUST_LOG=timesheet_dashboard=debug`). Call once, from the binary.
pub fn setup_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .compact()
        .init();
}
