//! Remote object-storage backend.
//!
//! Objects are written and removed over plain HTTP against the same URLs
//! the crate hands out publicly: the pre-authenticated base when one is
//! configured, otherwise the public bucket or synthesized native URL. A
//! bucket that rejects the request surfaces the failure to the caller;
//! there is no fallback to the local store mid-request.

use async_trait::async_trait;
use reqwest::{header, StatusCode};

use super::urls::build_object_url;
use super::StorageBackend;
use crate::config::StorageConfig;
use crate::error::{Error, Result};

/// Object-storage backend speaking HTTP through a shared [`reqwest::Client`].
pub struct RemoteStore {
    client: reqwest::Client,
    config: StorageConfig,
}

impl RemoteStore {
    /// Create a remote store for the given resolved configuration.
    ///
    /// The client carries no request timeout: cancellation propagates from
    /// the caller's execution context instead (dropping an upload future
    /// aborts the in-flight request).
    pub fn new(config: StorageConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    fn object_url(&self, name: &str) -> String {
        build_object_url(&self.config, name)
    }
}

#[async_trait]
impl StorageBackend for RemoteStore {
    async fn put(&self, name: &str, data: &[u8], content_type: &str) -> Result<()> {
        let url = self.object_url(name);
        let response = self
            .client
            .put(&url)
            .header(header::CONTENT_TYPE, content_type)
            .body(data.to_vec())
            .send()
            .await
            .map_err(|e| Error::storage_write(format!("remote put failed for {name}: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%status, object = name, "remote store rejected put");
            return Err(Error::storage_write(format!(
                "remote store returned {status} for {name}"
            )));
        }

        tracing::debug!(object = name, bytes = data.len(), "wrote avatar to remote store");
        Ok(())
    }

    async fn delete(&self, name: &str) -> Result<bool> {
        let response = self.client.delete(self.object_url(name)).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(false);
        }
        response.error_for_status()?;
        Ok(true)
    }

    async fn exists(&self, name: &str) -> Result<bool> {
        let response = self.client.head(self.object_url(name)).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(false);
        }
        response.error_for_status()?;
        Ok(true)
    }

    fn kind(&self) -> &'static str {
        "remote"
    }
}
