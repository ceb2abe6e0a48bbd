//! Storefront configuration

use clap::Parser;

/// Tienda storefront configuration
#[derive(Debug, Parser)]
#[command(name = "tienda-shop", about = "Tienda terminal storefront", long_about = None)]
pub struct ShopConfig {
    /// Catalog Service base URL
    #[arg(long, env = "CATALOG_URL", default_value = "http://localhost:3000")]
    pub catalog_url: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "RUST_LOG", default_value = "warn")]
    pub log_level: String,
}

impl ShopConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }
}
