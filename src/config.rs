use crate::error::ConfigError;
use crate::models::Route;
use std::path::PathBuf;

pub const DEFAULT_LOG_FILE: &str = "quiz_debug.log";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// SQLite file backing the result store; in-memory when unset.
    pub store_path: Option<PathBuf>,
    pub seed: Option<u64>,
    pub log_path: PathBuf,
    pub start_route: Route,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_path: None,
            seed: None,
            log_path: PathBuf::from(DEFAULT_LOG_FILE),
            start_route: Route::Quiz,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(path) = non_empty(lookup("TIKIRI_STORE")) {
            config.store_path = Some(PathBuf::from(path));
        }

        if let Some(seed) = non_empty(lookup("TIKIRI_SEED")) {
            let parsed = seed
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidSeed(seed.clone()))?;
            config.seed = Some(parsed);
        }

        if let Some(path) = non_empty(lookup("TIKIRI_LOG")) {
            config.log_path = PathBuf::from(path);
        }

        if let Some(route) = non_empty(lookup("TIKIRI_ROUTE")) {
            config.start_route = parse_route(&route)?;
        }

        Ok(config)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn parse_route(value: &str) -> Result<Route, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "quiz" | "/" => Ok(Route::Quiz),
        "result" | "/result" => Ok(Route::Result),
        _ => Err(ConfigError::InvalidRoute(value.to_string())),
    }
}
