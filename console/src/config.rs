use std::path::PathBuf;

use vodca::References;

static LOG_DIR: &str = "CATALOG_LOG_DIR";
static LOG_FILE: &str = "CATALOG_LOG_FILE";
static LOG_FILTER: &str = "RUST_LOG";

static DEFAULT_LOG_DIR: &str = "./logs/";
static DEFAULT_LOG_FILE: &str = "catalog.log";
static DEFAULT_LOG_FILTER: &str = "console=debug";

#[derive(Debug, Clone, References)]
pub struct AppConfig {
    log_dir: PathBuf,
    log_file: String,
    log_filter: String,
}

impl AppConfig {
    /// Reads the process environment, after loading `.env` when one exists.
    pub fn load() -> Self {
        if let Err(error) = dotenvy::dotenv() {
            if !error.not_found() {
                eprintln!("Ignoring unreadable .env file: {error}");
            }
        }
        Self::from_lookup(|key| dotenvy::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let value = |key: &str, default: &str| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };
        Self {
            log_dir: PathBuf::from(value(LOG_DIR, DEFAULT_LOG_DIR)),
            log_file: value(LOG_FILE, DEFAULT_LOG_FILE),
            log_filter: value(LOG_FILTER, DEFAULT_LOG_FILTER),
        }
    }
}

#[cfg(test)]
mod test {
    use std::collections::HashMap;
    use std::path::Path;

    use crate::config::AppConfig;

    #[test]
    fn falls_back_to_defaults() {
        let config = AppConfig::from_lookup(|_| None);
        assert_eq!(config.log_dir(), Path::new("./logs/"));
        assert_eq!(config.log_file(), "catalog.log");
        assert_eq!(config.log_filter(), "console=debug");
    }

    #[test]
    fn reads_overrides_and_skips_blank_values() {
        let env = HashMap::from([
            ("CATALOG_LOG_DIR", "/var/log/catalog"),
            ("CATALOG_LOG_FILE", "  "),
            ("RUST_LOG", "console=trace"),
        ]);
        let config = AppConfig::from_lookup(|key| env.get(key).map(|value| value.to_string()));
        assert_eq!(config.log_dir(), Path::new("/var/log/catalog"));
        assert_eq!(config.log_file(), "catalog.log");
        assert_eq!(config.log_filter(), "console=trace");
    }
}
