//! Encodius Site Runtime - Main Entry Point
//!
//! Headless runtime for the marketing site's client-side behavior.

use encodius_site::app::runtime::run_site;

fn main() {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting Encodius site runtime...");

    run_site();
}
