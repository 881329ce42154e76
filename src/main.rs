//! Headless prompt gallery.
//!
//! Loads the gallery once and prints the first page as JSON.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use prompt_gallery::errors::Result;
use prompt_gallery::{Config, Gallery, RemoteDataset, Viewport};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting prompt gallery");
    tracing::info!("Dataset host: {}", config.base_url);
    tracing::info!("Page size: {}", config.page_size);

    let source = RemoteDataset::new(&config)?;

    let mut gallery = Gallery::new(config.page_size);
    gallery.reload(&source).await;
    tracing::info!(
        "Gallery ready with {} records ({:?})",
        gallery.records().len(),
        gallery.origin()
    );

    let view = gallery.view(Viewport::Standard);
    println!("{}", serde_json::to_string_pretty(&view)?);

    Ok(())
}
