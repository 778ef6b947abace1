// Copyright (C) 2020-2026 Andy Kurnia.

// Log lines go to stderr so stdout stays clean for CSV and JSON.
// RUST_LOG picks the level, default info.
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .try_init();
}
