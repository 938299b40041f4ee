//! Storage backends and the avatar store facade.
//!
//! A [`StorageBackend`] persists named byte blobs; the two variants
//! ([`RemoteStore`], [`LocalStore`]) share one contract so the rest of the
//! crate never branches on which is active. [`AvatarStore`] picks the
//! backend once at construction and exposes the upload/delete operations
//! consumed by the HTTP layer.

mod facade;
mod local;
mod remote;
mod urls;

pub use facade::AvatarStore;
pub use local::LocalStore;
pub use remote::RemoteStore;
pub use urls::{build_object_url, extract_object_name};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Uniform put/delete/exists contract over a concrete storage medium.
///
/// Implementations are stateless across calls and safe to share between
/// concurrent requests. Deleting an absent object is a normal `false`
/// result, never an error.
#[async_trait]
pub trait StorageBackend: Send + Sync {
    /// Persist a blob under the given object name.
    async fn put(&self, name: &str, data: &[u8], content_type: &str) -> Result<()>;

    /// Remove an object, reporting whether it existed.
    async fn delete(&self, name: &str) -> Result<bool>;

    /// Check whether an object is present.
    async fn exists(&self, name: &str) -> Result<bool>;

    /// Short backend label for logs.
    fn kind(&self) -> &'static str;
}

/// Outcome of a successful avatar upload.
///
/// The caller owns persisting these values against the user record; this
/// crate keeps no record of past uploads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResult {
    /// Unique name of the stored object, independent of its access URL.
    pub object_name: String,
    /// Externally resolvable URL for the stored avatar.
    pub url: String,
}
