//! Local filesystem storage backend.

use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;

use super::StorageBackend;
use crate::error::Result;

/// Filesystem-backed store writing objects under a single root directory.
///
/// The fallback backend when remote object storage is unavailable or
/// explicitly skipped. Object names never contain path separators, so every
/// object lands directly in the root.
pub struct LocalStore {
    root: PathBuf,
}

impl LocalStore {
    /// Create a store rooted at the given directory.
    ///
    /// The directory is ensured at configuration-resolve time; a missing
    /// root surfaces per write, not here.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn object_path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }
}

#[async_trait]
impl StorageBackend for LocalStore {
    async fn put(&self, name: &str, data: &[u8], _content_type: &str) -> Result<()> {
        let path = self.object_path(name);
        tokio::fs::write(&path, data).await?;
        tracing::debug!(path = %path.display(), bytes = data.len(), "wrote avatar to disk");
        Ok(())
    }

    async fn delete(&self, name: &str) -> Result<bool> {
        match tokio::fs::remove_file(self.object_path(name)).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    async fn exists(&self, name: &str) -> Result<bool> {
        match tokio::fs::metadata(self.object_path(name)).await {
            Ok(_) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    fn kind(&self) -> &'static str {
        "local"
    }
}
