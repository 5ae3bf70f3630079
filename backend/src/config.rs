/// Runtime configuration for the catalog binary
use clap::{Args, ValueEnum};
use std::fmt;
use std::path::PathBuf;

/// Deployment environment; development exposes diagnostic traces in error output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Environment {
    Development,
    #[default]
    Production,
}

impl Environment {
    pub fn is_development(self) -> bool {
        self == Environment::Development
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Global options, each with an environment variable fallback
#[derive(Debug, Clone, Args)]
pub struct AppConfig {
    /// Path to the SQLite database file
    #[arg(long, env = "CATALOG_DATABASE", default_value = "catalog.db")]
    pub database: PathBuf,

    /// Deployment environment
    #[arg(long, value_enum, env = "CATALOG_ENV", default_value_t = Environment::Production)]
    pub environment: Environment,

    /// Log filter directives, e.g. `info` or `catalog=debug`
    #[arg(long, env = "RUST_LOG", default_value = "info")]
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            database: PathBuf::from("catalog.db"),
            environment: Environment::default(),
            log_filter: "info".to_string(),
        }
    }
}
