//! Database Config

use clap::Args;

/// Database settings.
#[derive(Debug, Args)]
pub struct DatabaseConfig {
    /// `SQLite` connection string; the file is created when missing
    #[arg(long, env = "DATABASE_URL", default_value = "sqlite://tienda.db?mode=rwc")]
    pub database_url: String,
}
