use crate::config::Config;
use crate::domain::embedded;
use crate::domain::models::{ListOrigin, ResolvedList};
use crate::infrastructure::cache_store::CacheStore;
use crate::infrastructure::ua_fetcher::{FetchError, UserAgentFetcher};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("No user agents available")]
    NoUserAgents,
}

/// Chooses between the cache, the remote list and the embedded list
pub struct SourceResolver {
    cache: CacheStore,
    /// `None` when the HTTP client could not be built; every fetch then fails
    fetcher: Option<UserAgentFetcher>,
    source_url: String,
}

impl SourceResolver {
    pub fn new(
        cache: CacheStore,
        fetcher: Option<UserAgentFetcher>,
        source_url: impl Into<String>,
    ) -> Self {
        Self {
            cache,
            fetcher,
            source_url: source_url.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        let cache = match &config.cache_path {
            Some(path) => CacheStore::new(path.clone(), config.cache_ttl),
            None => CacheStore::disabled(config.cache_ttl),
        };

        let fetcher = match UserAgentFetcher::new(config.fetch_timeout) {
            Ok(fetcher) => Some(fetcher),
            Err(e) => {
                tracing::warn!("Failed to build HTTP client: {}", e);
                None
            }
        };

        Self::new(cache, fetcher, config.source_url.as_str())
    }

    async fn fetch(&self) -> Result<Vec<String>, FetchError> {
        match &self.fetcher {
            Some(fetcher) => fetcher.fetch(&self.source_url).await,
            None => Err(FetchError::ClientUnavailable),
        }
    }

    /// Produce a non-empty user agent list.
    ///
    /// Order: fresh cache (skipped when `refresh`), remote list, fresh cache
    /// again, embedded list.
    pub async fn resolve(&self, refresh: bool) -> Result<ResolvedList, ResolveError> {
        let resolved = self.resolve_any(refresh).await;

        if resolved.user_agents.is_empty() {
            return Err(ResolveError::NoUserAgents);
        }

        tracing::debug!(
            "Using {} user agents from {}",
            resolved.user_agents.len(),
            resolved.origin
        );

        Ok(resolved)
    }

    async fn resolve_any(&self, refresh: bool) -> ResolvedList {
        if !refresh {
            match self.cache.read() {
                Ok(user_agents) => return resolved(user_agents, ListOrigin::Cache),
                Err(e) => tracing::debug!("Cache miss: {}", e),
            }
        }

        let fetch_err = match self.fetch().await {
            Ok(user_agents) => {
                if let Err(e) = self.cache.write(&user_agents) {
                    tracing::warn!("Failed to cache user agents: {}", e);
                }
                return resolved(user_agents, ListOrigin::Remote);
            }
            Err(e) => e,
        };

        match self.cache.read() {
            Ok(user_agents) => {
                tracing::warn!(
                    "Failed to fetch from URL ({}), using cached data",
                    fetch_err
                );
                resolved(user_agents, ListOrigin::CacheFallback)
            }
            Err(cache_err) => {
                tracing::debug!("Cache unavailable for fallback: {}", cache_err);
                tracing::warn!(
                    "Failed to fetch from URL ({}), using embedded data",
                    fetch_err
                );
                resolved(embedded::backup_user_agents(), ListOrigin::Embedded)
            }
        }
    }
}

fn resolved(user_agents: Vec<String>, origin: ListOrigin) -> ResolvedList {
    ResolvedList {
        user_agents,
        origin,
    }
}
