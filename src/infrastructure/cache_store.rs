use crate::domain::models::CacheRecord;
use chrono::{DateTime, Utc};
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[cfg(unix)]
use std::os::unix::fs::{DirBuilderExt, OpenOptionsExt};

#[derive(Error, Debug)]
pub enum CacheError {
    #[error("No cache location available")]
    NoLocation,

    #[error("Cache file not found: {0}")]
    Missing(PathBuf),

    #[error("Failed to read cache file: {0}")]
    ReadFailed(#[source] io::Error),

    #[error("Failed to parse cache file: {0}")]
    ParseFailed(#[source] serde_json::Error),

    #[error("Cache expired (written {0})")]
    Expired(DateTime<Utc>),

    #[error("Cache holds no user agents")]
    Empty,

    #[error("Failed to create cache directory {path}: {source}")]
    CreateDirFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to serialize cache data: {0}")]
    SerializeFailed(#[source] serde_json::Error),

    #[error("Failed to write cache file: {0}")]
    WriteFailed(#[source] io::Error),
}

/// JSON file holding the last successfully fetched list
#[derive(Debug, Clone)]
pub struct CacheStore {
    path: Option<PathBuf>,
    ttl: chrono::Duration,
}

impl CacheStore {
    pub fn new(path: impl Into<PathBuf>, ttl: chrono::Duration) -> Self {
        Self {
            path: Some(path.into()),
            ttl,
        }
    }

    /// A store with nowhere to persist: every read misses, every write fails
    pub fn disabled(ttl: chrono::Duration) -> Self {
        Self { path: None, ttl }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    fn location(&self) -> Result<&Path, CacheError> {
        self.path.as_deref().ok_or(CacheError::NoLocation)
    }

    pub fn read(&self) -> Result<Vec<String>, CacheError> {
        self.read_at(Utc::now())
    }

    /// Load the cached list as seen at `now`.
    ///
    /// Never touches the filesystem beyond reading the file itself.
    pub fn read_at(&self, now: DateTime<Utc>) -> Result<Vec<String>, CacheError> {
        let path = self.location()?;
        let data = fs::read(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => CacheError::Missing(path.to_path_buf()),
            _ => CacheError::ReadFailed(e),
        })?;

        let record: CacheRecord = serde_json::from_slice(&data).map_err(CacheError::ParseFailed)?;

        if !record.is_fresh(now, self.ttl) {
            return Err(CacheError::Expired(record.timestamp));
        }

        if record.user_agents.is_empty() {
            return Err(CacheError::Empty);
        }

        tracing::debug!(
            "Loaded {} user agents from cache {}",
            record.user_agents.len(),
            path.display()
        );

        Ok(record.user_agents)
    }

    pub fn write(&self, user_agents: &[String]) -> Result<(), CacheError> {
        self.write_at(user_agents, Utc::now())
    }

    /// Overwrite the cache file with `user_agents` stamped at `now`
    pub fn write_at(&self, user_agents: &[String], now: DateTime<Utc>) -> Result<(), CacheError> {
        let path = self.location()?;
        if let Some(dir) = path.parent() {
            create_cache_dir(dir).map_err(|source| CacheError::CreateDirFailed {
                path: dir.to_path_buf(),
                source,
            })?;
        }

        let record = CacheRecord::new(user_agents.to_vec(), now);
        let data = serde_json::to_vec(&record).map_err(CacheError::SerializeFailed)?;

        let mut file = open_cache_file(path).map_err(CacheError::WriteFailed)?;
        file.write_all(&data).map_err(CacheError::WriteFailed)?;

        tracing::debug!(
            "Cached {} user agents at {}",
            user_agents.len(),
            path.display()
        );

        Ok(())
    }
}

#[cfg(unix)]
fn create_cache_dir(dir: &Path) -> io::Result<()> {
    fs::DirBuilder::new().recursive(true).mode(0o700).create(dir)
}

#[cfg(not(unix))]
fn create_cache_dir(dir: &Path) -> io::Result<()> {
    fs::create_dir_all(dir)
}

fn open_cache_file(path: &Path) -> io::Result<fs::File> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    options.mode(0o600);
    options.open(path)
}
