use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// On-disk shape of the user agent cache
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheRecord {
    pub user_agents: Vec<String>,
    pub timestamp: DateTime<Utc>,
}

impl CacheRecord {
    pub fn new(user_agents: Vec<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            user_agents,
            timestamp,
        }
    }

    /// A record is fresh while `now - timestamp <= ttl`
    pub fn is_fresh(&self, now: DateTime<Utc>, ttl: chrono::Duration) -> bool {
        now.signed_duration_since(self.timestamp) <= ttl
    }
}

/// Which tier of the fallback chain produced a list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListOrigin {
    Cache,
    Remote,
    /// Cache read after a failed fetch
    CacheFallback,
    Embedded,
}

impl fmt::Display for ListOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ListOrigin::Cache => "cache",
            ListOrigin::Remote => "remote",
            ListOrigin::CacheFallback => "cache (fallback)",
            ListOrigin::Embedded => "embedded",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone)]
pub struct ResolvedList {
    pub user_agents: Vec<String>,
    pub origin: ListOrigin,
}
