//! Common error types for the avatar storage crate.
//!
//! One taxonomy covers the whole upload/delete path: undecodable input,
//! rejected writes, filesystem and transport failures, and settings-file
//! problems. Deleting an object that does not exist is not an error anywhere
//! in this crate; it is reported as a normal `false` result.

/// Error type for avatar storage operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input image could not be decoded, transformed, or re-encoded.
    #[error("Image processing failed: {0}")]
    ImageProcessing(#[from] image::ImageError),

    /// The active backend rejected or could not perform a write.
    #[error("Storage write failed: {0}")]
    StorageWrite(String),

    /// A local filesystem operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// An HTTP call to the remote object store failed.
    #[error("Remote storage error: {0}")]
    Http(#[from] reqwest::Error),

    /// A settings file could not be read or parsed.
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl Error {
    /// Create a new StorageWrite error.
    pub fn storage_write<S: Into<String>>(msg: S) -> Self {
        Self::StorageWrite(msg.into())
    }

    /// Create a new Configuration error.
    pub fn configuration<S: Into<String>>(msg: S) -> Self {
        Self::Configuration(msg.into())
    }
}

/// Result type alias using the crate Error type.
pub type Result<T> = std::result::Result<T, Error>;
