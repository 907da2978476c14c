use std::path::PathBuf;

use crate::db::SeedConfig;
use crate::db::seed::{DEFAULT_ADMIN_EMAIL, DEFAULT_ADMIN_PASSWORD};

/// Kernel configuration
///
/// # Environment variables
///
/// Every field can be overridden from the environment (a `.env` file is
/// read first by [`crate::setup_environment`]):
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | DATA_DIR | ./work_dir/data | directory holding the storage slots |
/// | ENVIRONMENT | development | development / production |
/// | LOG_LEVEL | info | tracing level or filter directive |
/// | LOG_JSON | false | JSON log lines instead of pretty output |
/// | LOG_DIR | (unset) | enables rolling log files |
/// | SEED_ADMIN_EMAIL | admin@example.com | seeded admin login |
/// | SEED_ADMIN_PASSWORD | Password123! | seeded admin password |
///
/// # Example
///
/// ```ignore
/// DATA_DIR=/tmp/staffdesk LOG_LEVEL=debug cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory for [`crate::db::FileStorage`]
    pub data_dir: PathBuf,
    /// development | production
    pub environment: String,
    pub log_level: String,
    pub log_json: bool,
    /// Rolling log file directory; console only when unset
    pub log_dir: Option<String>,
    /// Admin account created on a fresh install
    pub seed: SeedConfig,
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.into())
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Missing or unparsable values fall back to the defaults.
    pub fn from_env() -> Self {
        Self {
            data_dir: PathBuf::from(env_or("DATA_DIR", "./work_dir/data")),
            environment: env_or("ENVIRONMENT", "development"),
            log_level: env_or("LOG_LEVEL", "info"),
            log_json: std::env::var("LOG_JSON")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.trim().is_empty()),
            seed: SeedConfig {
                admin_email: env_or("SEED_ADMIN_EMAIL", DEFAULT_ADMIN_EMAIL),
                admin_password: env_or("SEED_ADMIN_PASSWORD", DEFAULT_ADMIN_PASSWORD),
            },
        }
    }

    /// Environment config with the data directory replaced
    ///
    /// Mostly used by tests.
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        let mut config = Self::from_env();
        config.data_dir = data_dir.into();
        config
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
