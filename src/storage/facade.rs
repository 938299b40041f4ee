//! High-level avatar store coordinating normalization, naming, URL
//! resolution and the active backend.

use super::urls::{build_object_url, extract_object_name};
use super::{LocalStore, RemoteStore, StorageBackend, UploadResult};
use crate::config::{resolve, BackendKind, StorageConfig, StorageSettings};
use crate::error::Result;
use crate::images::ImageNormalizer;
use crate::naming::{content_type_for, object_name};

/// Facade over the avatar storage pipeline.
///
/// The backend is selected exactly once, at construction, from the resolved
/// configuration; a remote outage later does not re-route writes to the
/// local store. The facade is `Send + Sync` and shares fine behind an `Arc`
/// across request handlers.
pub struct AvatarStore {
    config: StorageConfig,
    backend: Box<dyn StorageBackend>,
    normalizer: ImageNormalizer,
}

impl AvatarStore {
    /// Create a store over the backend named by the resolved configuration.
    pub fn new(config: StorageConfig) -> Self {
        let backend: Box<dyn StorageBackend> = match config.backend {
            BackendKind::Remote => Box::new(RemoteStore::new(config.clone())),
            BackendKind::Local => Box::new(LocalStore::new(config.local_root.clone())),
        };
        tracing::info!(backend = backend.kind(), "avatar store ready");

        Self {
            config,
            backend,
            normalizer: ImageNormalizer::default(),
        }
    }

    /// Resolve configuration from the environment and build a store.
    pub fn from_env() -> Self {
        Self::new(resolve(&StorageSettings::from_env()))
    }

    /// Normalize and persist an avatar image for a user.
    ///
    /// Returns the stored object's name and public URL; the caller is
    /// responsible for associating both with the user record. A failed
    /// write fails the upload; no URL is ever returned for bytes that were
    /// not stored.
    pub async fn upload(&self, user_ref: &str, data: &[u8]) -> Result<UploadResult> {
        let normalized = self.normalizer.normalize(data)?;
        let name = object_name(user_ref, self.normalizer.extension());

        self.backend
            .put(&name, &normalized, content_type_for(&name))
            .await?;

        let url = build_object_url(&self.config, &name);
        tracing::info!(
            user = user_ref,
            object = %name,
            backend = self.backend.kind(),
            "avatar uploaded"
        );

        Ok(UploadResult {
            object_name: name,
            url,
        })
    }

    /// Delete an avatar given its URL or bare object name.
    ///
    /// Returns whether an object was actually removed; deleting an avatar
    /// that is already gone is a normal `false`, not an error.
    pub async fn delete(&self, url_or_name: &str) -> Result<bool> {
        let name = extract_object_name(url_or_name);
        let removed = self.backend.delete(&name).await?;
        tracing::info!(object = %name, removed, "avatar delete");
        Ok(removed)
    }
}
