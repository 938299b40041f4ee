//! End-to-end tests for the avatar store over the local filesystem backend.

use std::io::Cursor;
use std::path::PathBuf;

use avatarstore::{resolve, AvatarStore, BackendKind, StorageSettings};
use image::{DynamicImage, ImageFormat, Rgb, RgbImage};

/// Encode a solid-color JPEG of the given dimensions.
fn sample_jpeg(width: u32, height: u32) -> Vec<u8> {
    let mut img = RgbImage::new(width, height);
    for pixel in img.pixels_mut() {
        *pixel = Rgb([40, 90, 200]);
    }
    let mut buf = Cursor::new(Vec::new());
    DynamicImage::ImageRgb8(img)
        .write_to(&mut buf, ImageFormat::Jpeg)
        .unwrap();
    buf.into_inner()
}

fn local_store(dir: &tempfile::TempDir) -> AvatarStore {
    let settings = StorageSettings {
        skip_remote: true,
        base_url: Some("http://localhost:8080/avatars".to_string()),
        local_root: dir.path().join("avatars"),
        ..StorageSettings::default()
    };
    let config = resolve(&settings);
    assert_eq!(config.backend, BackendKind::Local);
    AvatarStore::new(config)
}

/// Assert that a name looks like `profile-{user}-{digits}-{8 hex}.jpg`.
fn assert_object_name_shape(name: &str, user: &str) {
    let stem = name
        .strip_prefix(&format!("profile-{user}-"))
        .unwrap_or_else(|| panic!("unexpected name: {name}"))
        .strip_suffix(".jpg")
        .unwrap_or_else(|| panic!("unexpected name: {name}"));

    let (millis, tag) = stem.rsplit_once('-').unwrap();
    assert!(millis.chars().all(|c| c.is_ascii_digit()), "name: {name}");
    assert_eq!(tag.len(), 8, "name: {name}");
    assert!(tag.chars().all(|c| c.is_ascii_hexdigit()), "name: {name}");
}

// ---------------------------------------------------------------------------
// Upload
// ---------------------------------------------------------------------------

#[tokio::test]
async fn upload_stores_normalized_jpeg() {
    let dir = tempfile::tempdir().unwrap();
    let store = local_store(&dir);

    let result = store.upload("42", &sample_jpeg(640, 480)).await.unwrap();

    assert_object_name_shape(&result.object_name, "42");
    assert_eq!(
        result.url,
        format!("http://localhost:8080/avatars/{}", result.object_name)
    );

    // The stored object is the normalized 400x400 rendition, not the input.
    let stored = std::fs::read(dir.path().join("avatars").join(&result.object_name)).unwrap();
    let img = image::load_from_memory(&stored).unwrap();
    assert_eq!((img.width(), img.height()), (400, 400));
    assert_eq!(image::guess_format(&stored).unwrap(), ImageFormat::Jpeg);
}

#[tokio::test]
async fn upload_rejects_undecodable_input() {
    let dir = tempfile::tempdir().unwrap();
    let store = local_store(&dir);

    let err = store.upload("42", b"definitely not an image").await;
    assert!(matches!(err, Err(avatarstore::Error::ImageProcessing(_))));

    // Nothing partial may be persisted.
    let entries: Vec<_> = std::fs::read_dir(dir.path().join("avatars"))
        .unwrap()
        .collect();
    assert!(entries.is_empty());
}

#[tokio::test]
async fn concurrent_uploads_for_same_user_get_distinct_objects() {
    let dir = tempfile::tempdir().unwrap();
    let store = std::sync::Arc::new(local_store(&dir));
    let data = sample_jpeg(500, 500);

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let store = store.clone();
            let data = data.clone();
            tokio::spawn(async move { store.upload("42", &data).await.unwrap() })
        })
        .collect();

    let mut names = std::collections::HashSet::new();
    for handle in handles {
        names.insert(handle.await.unwrap().object_name);
    }
    assert_eq!(names.len(), 8);
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[tokio::test]
async fn delete_by_url_then_repeat_returns_false() {
    let dir = tempfile::tempdir().unwrap();
    let store = local_store(&dir);

    let result = store.upload("42", &sample_jpeg(800, 600)).await.unwrap();

    assert!(store.delete(&result.url).await.unwrap());
    assert!(!store.delete(&result.url).await.unwrap());
}

#[tokio::test]
async fn delete_accepts_bare_object_name() {
    let dir = tempfile::tempdir().unwrap();
    let store = local_store(&dir);

    let result = store.upload("7", &sample_jpeg(450, 450)).await.unwrap();
    assert!(store.delete(&result.object_name).await.unwrap());
}

#[tokio::test]
async fn delete_ignores_query_string_on_url() {
    let dir = tempfile::tempdir().unwrap();
    let store = local_store(&dir);

    let result = store.upload("7", &sample_jpeg(450, 450)).await.unwrap();
    let url = format!("{}?cache_bust=123", result.url);
    assert!(store.delete(&url).await.unwrap());
}

// ---------------------------------------------------------------------------
// Environment resolution
// ---------------------------------------------------------------------------

#[test]
#[serial_test::serial]
fn settings_from_env_reads_avatar_variables() {
    let dir = tempfile::tempdir().unwrap();
    std::env::set_var("AVATAR_SKIP_REMOTE", "true");
    std::env::set_var("AVATAR_REMOTE_NAMESPACE", "axfoo");
    std::env::set_var("AVATAR_REMOTE_BUCKET", "avatars");
    std::env::set_var("AVATAR_LOCAL_ROOT", dir.path().join("avatars"));

    let settings = StorageSettings::from_env();

    std::env::remove_var("AVATAR_SKIP_REMOTE");
    std::env::remove_var("AVATAR_REMOTE_NAMESPACE");
    std::env::remove_var("AVATAR_REMOTE_BUCKET");
    std::env::remove_var("AVATAR_LOCAL_ROOT");

    assert!(settings.skip_remote);
    assert_eq!(settings.namespace, "axfoo");
    assert_eq!(settings.bucket, "avatars");
    assert_eq!(settings.local_root, dir.path().join("avatars"));
    assert_eq!(settings.credentials_file, None);
}

#[test]
#[serial_test::serial]
fn skip_flag_from_env_wins_over_complete_remote_config() {
    let dir = tempfile::tempdir().unwrap();
    let credentials = dir.path().join("config");
    let key = dir.path().join("key.pem");
    std::fs::write(&credentials, "[DEFAULT]").unwrap();
    std::fs::write(&key, "key").unwrap();

    std::env::set_var("AVATAR_SKIP_REMOTE", "1");
    std::env::set_var("AVATAR_REMOTE_CREDENTIALS", &credentials);
    std::env::set_var("AVATAR_REMOTE_KEY_FILE", &key);
    std::env::set_var("AVATAR_REMOTE_NAMESPACE", "axfoo");
    std::env::set_var("AVATAR_REMOTE_BUCKET", "avatars");
    std::env::set_var("AVATAR_LOCAL_ROOT", dir.path().join("avatars"));

    let config = resolve(&StorageSettings::from_env());

    for key in [
        "AVATAR_SKIP_REMOTE",
        "AVATAR_REMOTE_CREDENTIALS",
        "AVATAR_REMOTE_KEY_FILE",
        "AVATAR_REMOTE_NAMESPACE",
        "AVATAR_REMOTE_BUCKET",
        "AVATAR_LOCAL_ROOT",
    ] {
        std::env::remove_var(key);
    }

    assert_eq!(config.backend, BackendKind::Local);
}

#[test]
fn local_root_default_is_relative_data_dir() {
    let settings = StorageSettings::default();
    assert_eq!(settings.local_root, PathBuf::from("data/avatars"));
}
