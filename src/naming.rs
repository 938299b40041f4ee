//! Object naming and content-type lookup.
//!
//! Object names are collision-resistant tokens of the form
//! `profile-{user}-{millis}-{8 hex chars}{ext}`: the millisecond timestamp
//! keeps names approximately ordered, the random tag makes concurrent
//! uploads for the same user distinct. Callers never retry on collision.

use rand::Rng;

/// Generate a unique object name for a user's avatar.
///
/// The random tag comes from the thread-local CSPRNG, so two calls can not
/// realistically produce the same name even within one millisecond.
pub fn object_name(user_ref: &str, extension: &str) -> String {
    let millis = chrono::Utc::now().timestamp_millis();
    let tag: u32 = rand::thread_rng().gen();
    format!("profile-{user_ref}-{millis}-{tag:08x}{extension}")
}

/// Map a file name to its MIME type by extension.
///
/// Unknown or missing extensions fall back to a generic binary type.
pub fn content_type_for(name: &str) -> &'static str {
    let extension = name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        _ => "application/octet-stream",
    }
}
