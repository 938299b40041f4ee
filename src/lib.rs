//! Avatarstore - profile picture storage abstraction
//!
//! Persists user-uploaded avatar images to either a remote object store or
//! a local filesystem fallback, normalizing every upload to a canonical
//! square JPEG, naming objects collision-resistantly, and resolving object
//! names to and from public URLs. The HTTP layer, user persistence, and
//! catalog integration consume this crate through [`AvatarStore`].

pub mod config;
pub mod error;
pub mod images;
pub mod naming;
pub mod storage;

pub use config::{resolve, BackendKind, StorageConfig, StorageSettings};
pub use error::{Error, Result};
pub use images::ImageNormalizer;
pub use naming::{content_type_for, object_name};
pub use storage::{
    build_object_url, extract_object_name, AvatarStore, LocalStore, RemoteStore, StorageBackend,
    UploadResult,
};
