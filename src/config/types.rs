use serde::Deserialize;
use std::path::PathBuf;

/// Raw deployment settings for avatar storage.
///
/// Collected from environment variables or a TOML settings file and fed to
/// [`resolve`](super::resolve), which derives the backend verdict. Values
/// here are unvalidated; missing credential files or empty names simply
/// disable the remote backend at resolve time.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    /// Force the local backend regardless of remote configuration.
    #[serde(default)]
    pub skip_remote: bool,

    /// Deployment environment name; "development" forces the local backend.
    #[serde(default = "default_environment")]
    pub environment: String,

    /// Path to the object-store credentials file.
    #[serde(default)]
    pub credentials_file: Option<PathBuf>,

    /// Path to the object-store private key file.
    #[serde(default)]
    pub key_file: Option<PathBuf>,

    /// Object-storage namespace.
    #[serde(default)]
    pub namespace: String,

    /// Bucket that receives avatar objects.
    #[serde(default)]
    pub bucket: String,

    /// Region used when synthesizing object URLs.
    #[serde(default)]
    pub region: String,

    /// Public base URL of the bucket, if it allows anonymous reads.
    #[serde(default)]
    pub base_url: Option<String>,

    /// Pre-authenticated request base URL; preferred for both reads and writes.
    #[serde(default)]
    pub par_base_url: Option<String>,

    /// Directory backing the local filesystem store.
    #[serde(default = "default_local_root")]
    pub local_root: PathBuf,
}

fn default_environment() -> String {
    "production".to_string()
}

fn default_local_root() -> PathBuf {
    PathBuf::from("data/avatars")
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            skip_remote: false,
            environment: default_environment(),
            credentials_file: None,
            key_file: None,
            namespace: String::new(),
            bucket: String::new(),
            region: String::new(),
            base_url: None,
            par_base_url: None,
            local_root: default_local_root(),
        }
    }
}

/// Which storage backend is active for the process lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    /// Remote object-storage service.
    Remote,
    /// Local filesystem fallback.
    Local,
}

impl std::fmt::Display for BackendKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Remote => write!(f, "remote"),
            Self::Local => write!(f, "local"),
        }
    }
}

/// Resolved storage configuration.
///
/// Built once at process startup by [`resolve`](super::resolve) and shared
/// read-only afterwards; the backend choice is never re-evaluated per
/// request.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// The backend selected at startup.
    pub backend: BackendKind,
    /// Object-storage namespace.
    pub namespace: String,
    /// Avatar bucket name.
    pub bucket: String,
    /// Region for synthesized object URLs.
    pub region: String,
    /// Public bucket base URL, if configured non-empty.
    pub base_url: Option<String>,
    /// Pre-authenticated base URL, if configured non-empty.
    pub par_base_url: Option<String>,
    /// Root directory for the local backend.
    pub local_root: PathBuf,
}
