//! Tienda storefront

use std::{io, process};

use tokio::io::{BufReader, stdin};
use tracing::error;
use tracing_subscriber::EnvFilter;

use tienda_shop::{catalog::CatalogClient, config::ShopConfig, storefront::Storefront};

/// Storefront entry point
#[tokio::main(flavor = "current_thread")]
pub async fn main() {
    let config = ShopConfig::load().unwrap_or_else(|e| {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized yet, must use eprintln for config errors"
        )]
        {
            eprintln!("Configuration error: {e}");
        }

        process::exit(1);
    });

    // Logs go to stderr so they do not interleave with the storefront
    tracing_subscriber::fmt()
        .compact()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .init();

    let mut storefront = Storefront::open(CatalogClient::new(config.catalog_url)).await;

    let mut out = io::stdout().lock();

    if let Err(run_error) = storefront.run(BufReader::new(stdin()), &mut out).await {
        error!("storefront stopped: {run_error}");

        process::exit(1);
    }
}
