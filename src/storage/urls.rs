//! Building public avatar URLs and extracting object names back out of them.
//!
//! The system has produced three URL shapes over time (pre-authenticated
//! base, public bucket base, synthesized native URL), and deletion requests
//! may carry any of them, or a bare object name. Extraction therefore
//! accepts every shape and never fails; malformed input degrades to naive
//! string splitting.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};
use url::Url;

use crate::config::StorageConfig;

/// Characters escaped when an object name is embedded in a URL path segment.
const OBJECT_NAME_ESCAPE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'\\')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Build the public URL for an object name.
///
/// Priority: pre-authenticated base, then public bucket base, then a
/// synthesized conventional object-storage URL from region, namespace and
/// bucket.
pub fn build_object_url(config: &StorageConfig, object_name: &str) -> String {
    let encoded = utf8_percent_encode(object_name, OBJECT_NAME_ESCAPE);

    if let Some(par) = &config.par_base_url {
        return format!("{}/{}", par.trim_end_matches('/'), encoded);
    }
    if let Some(base) = &config.base_url {
        return format!("{}/{}", base.trim_end_matches('/'), encoded);
    }
    format!(
        "https://objectstorage.{}.oraclecloud.com/n/{}/b/{}/o/{}",
        config.region, config.namespace, config.bucket, encoded
    )
}

/// Recover the object name from a URL or bare name.
///
/// A token without separators is already a name and passes through
/// unchanged. Anything else is parsed as a URL: final path segment, query
/// dropped, percent-decoded. Inputs the URL parser rejects fall back to
/// splitting on `/` and `?`.
pub fn extract_object_name(url_or_name: &str) -> String {
    if !url_or_name.contains('/') && !url_or_name.contains('?') {
        return url_or_name.to_string();
    }

    if let Ok(parsed) = Url::parse(url_or_name) {
        let segment = parsed
            .path_segments()
            .and_then(|segments| segments.filter(|s| !s.is_empty()).last());
        if let Some(segment) = segment {
            return percent_decode_str(segment).decode_utf8_lossy().into_owned();
        }
    }

    let tail = url_or_name.rsplit('/').next().unwrap_or(url_or_name);
    let tail = tail.split('?').next().unwrap_or(tail);
    percent_decode_str(tail).decode_utf8_lossy().into_owned()
}
