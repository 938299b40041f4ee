//! Image normalization for uploaded avatars.
//!
//! Every accepted upload is decoded, orientation-corrected, cropped to a
//! fixed square canvas, and re-encoded as JPEG before it reaches a storage
//! backend.

mod normalize;

pub use normalize::ImageNormalizer;
