use std::env;
use std::num::ParseIntError;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;
use url::Url;

pub const DEFAULT_SOURCE_URL: &str =
    "https://cdn.jsdelivr.net/gh/microlinkhq/top-user-agents@master/src/index.json";
pub const CACHE_DIR: &str = ".cache/useragent-cli";
pub const CACHE_FILE: &str = "cache.json";
pub const DEFAULT_CACHE_TTL_HOURS: i64 = 24;
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 10;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {source}")]
    InvalidNumber {
        var: &'static str,
        #[source]
        source: ParseIntError,
    },

    #[error("{0} must be greater than zero")]
    NotPositive(&'static str),

    #[error("Invalid source URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Source URL scheme not allowed: {0}")]
    InvalidScheme(String),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub source_url: Url,
    /// `None` when no cache directory is configured and the home directory
    /// can't be found; the cache tier is then skipped.
    pub cache_path: Option<PathBuf>,
    pub cache_ttl: chrono::Duration,
    pub fetch_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup.
    ///
    /// Unset variables fall back to the built-in defaults; the cache
    /// directory defaults to `~/.cache/useragent-cli`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::from_lookup_with_home(lookup, home::home_dir())
    }

    pub fn from_lookup_with_home<F>(lookup: F, home: Option<PathBuf>) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_url =
            lookup("USERAGENT_CLI_SOURCE_URL").unwrap_or_else(|| DEFAULT_SOURCE_URL.to_string());
        let source_url = Url::parse(raw_url.trim())?;
        match source_url.scheme() {
            "http" | "https" => {}
            scheme => return Err(ConfigError::InvalidScheme(scheme.to_string())),
        }

        let cache_dir = match lookup("USERAGENT_CLI_CACHE_DIR") {
            Some(dir) if !dir.trim().is_empty() => Some(PathBuf::from(dir)),
            _ => home.map(|home| home.join(CACHE_DIR)),
        };
        if cache_dir.is_none() {
            tracing::warn!("Could not determine the home directory, cache disabled");
        }

        let ttl_hours = parse_positive(
            &lookup,
            "USERAGENT_CLI_CACHE_TTL_HOURS",
            DEFAULT_CACHE_TTL_HOURS as u64,
        )?;
        let timeout_secs = parse_positive(
            &lookup,
            "USERAGENT_CLI_FETCH_TIMEOUT_SECS",
            DEFAULT_FETCH_TIMEOUT_SECS,
        )?;

        Ok(Config {
            source_url,
            cache_path: cache_dir.map(|dir| dir.join(CACHE_FILE)),
            cache_ttl: chrono::Duration::hours(ttl_hours as i64),
            fetch_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

fn parse_positive<F>(lookup: &F, var: &'static str, default: u64) -> Result<u64, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let value = match lookup(var) {
        Some(raw) => raw
            .trim()
            .parse::<u32>()
            .map_err(|source| ConfigError::InvalidNumber { var, source })?
            as u64,
        None => default,
    };

    if value == 0 {
        return Err(ConfigError::NotPositive(var));
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_overrides_are_applied() {
        let config = Config::from_lookup(lookup_from(&[
            ("USERAGENT_CLI_SOURCE_URL", "http://127.0.0.1:8080/ua.json"),
            ("USERAGENT_CLI_CACHE_DIR", "/tmp/ua-cache"),
            ("USERAGENT_CLI_CACHE_TTL_HOURS", "6"),
            ("USERAGENT_CLI_FETCH_TIMEOUT_SECS", "3"),
        ]))
        .unwrap();

        assert_eq!(config.source_url.as_str(), "http://127.0.0.1:8080/ua.json");
        assert_eq!(
            config.cache_path,
            Some(PathBuf::from("/tmp/ua-cache/cache.json"))
        );
        assert_eq!(config.cache_ttl, chrono::Duration::hours(6));
        assert_eq!(config.fetch_timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_defaults() {
        let config =
            Config::from_lookup(lookup_from(&[("USERAGENT_CLI_CACHE_DIR", "/tmp/x")])).unwrap();

        assert_eq!(config.source_url.as_str(), DEFAULT_SOURCE_URL);
        assert_eq!(config.cache_ttl, chrono::Duration::hours(24));
        assert_eq!(config.fetch_timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_default_cache_path_is_under_home() {
        let Some(home) = home::home_dir() else {
            return;
        };
        let config = Config::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(
            config.cache_path,
            Some(home.join(".cache").join("useragent-cli").join("cache.json"))
        );
    }

    #[test]
    fn test_missing_home_disables_cache() {
        let config = Config::from_lookup_with_home(lookup_from(&[]), None).unwrap();
        assert_eq!(config.cache_path, None);

        let config = Config::from_lookup_with_home(
            lookup_from(&[("USERAGENT_CLI_CACHE_DIR", "/tmp/explicit")]),
            None,
        )
        .unwrap();
        assert_eq!(
            config.cache_path,
            Some(PathBuf::from("/tmp/explicit/cache.json"))
        );
    }

    #[test]
    fn test_rejects_non_http_scheme() {
        let err = Config::from_lookup(lookup_from(&[
            ("USERAGENT_CLI_SOURCE_URL", "file:///etc/passwd"),
            ("USERAGENT_CLI_CACHE_DIR", "/tmp/x"),
        ]))
        .unwrap_err();

        assert!(matches!(err, ConfigError::InvalidScheme(ref s) if s == "file"));
    }

    #[test]
    fn test_rejects_bad_numbers() {
        let err = Config::from_lookup(lookup_from(&[
            ("USERAGENT_CLI_CACHE_DIR", "/tmp/x"),
            ("USERAGENT_CLI_CACHE_TTL_HOURS", "soon"),
        ]))
        .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidNumber {
                var: "USERAGENT_CLI_CACHE_TTL_HOURS",
                ..
            }
        ));

        let err = Config::from_lookup(lookup_from(&[
            ("USERAGENT_CLI_CACHE_DIR", "/tmp/x"),
            ("USERAGENT_CLI_FETCH_TIMEOUT_SECS", "0"),
        ]))
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "USERAGENT_CLI_FETCH_TIMEOUT_SECS must be greater than zero"
        );
    }
}
