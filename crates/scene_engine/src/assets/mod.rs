//! Asset loading for scene resources
//!
//! Currently this covers image decoding for the texture registry. Mesh data
//! is not loaded from files; the fixed primitive set comes from the
//! [`GeometryProvider`](crate::render::GeometryProvider) collaborator.

pub mod image_loader;

use std::path::PathBuf;

use thiserror::Error;

pub use image_loader::ImageData;

/// Asset loading errors
#[derive(Error, Debug)]
pub enum AssetError {
    /// The image file could not be read or decoded
    #[error("failed to decode image {path:?}: {source}")]
    Decode {
        /// Path that failed to decode
        path: PathBuf,
        /// Underlying decoder error
        source: image::ImageError,
    },

    /// The image decoded, but with a channel count the renderer does not
    /// handle (only 3-channel RGB and 4-channel RGBA are supported)
    #[error("unsupported channel count {channels} in image {path:?} (expected 3 or 4)")]
    UnsupportedChannels {
        /// Path of the offending image
        path: PathBuf,
        /// Channel count reported by the decoder
        channels: u8,
    },
}
