//! Artwork Table - Main Entry Point
//!
//! Paged view of the Art Institute of Chicago catalog with multi-page row
//! selection.

use artwork_table::app::application::run_app;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting Artwork Table...");

    run_app()
}
