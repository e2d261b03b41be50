//! Image loading utilities for texture data
//!
//! Decodes PNG, JPEG, and other image formats into CPU-side pixel data ready
//! for upload through a [`TextureDevice`](crate::render::TextureDevice).

use std::path::Path;

use crate::assets::AssetError;

/// Decoded image data ready for GPU upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageData {
    /// Raw interleaved pixel data, `channels` bytes per pixel
    pub pixels: Vec<u8>,
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Number of color channels: 3 (RGB) or 4 (RGBA)
    pub channels: u8,
}

impl ImageData {
    /// Load an image from a file path.
    ///
    /// Images are flipped vertically during decode so that the first row of
    /// pixel data corresponds to UV `v = 0`, matching the convention the
    /// mesh UVs were authored against.
    ///
    /// Only 3-channel and 4-channel images are accepted; grayscale and
    /// grayscale-alpha sources fail with
    /// [`AssetError::UnsupportedChannels`] and are reported to the caller
    /// rather than silently expanded.
    ///
    /// # Errors
    ///
    /// Returns [`AssetError::Decode`] if the file cannot be read or parsed,
    /// or [`AssetError::UnsupportedChannels`] for channel counts other than
    /// 3 and 4.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, AssetError> {
        let path = path.as_ref();

        log::debug!("Loading image from {:?}", path);

        let img = image::open(path).map_err(|source| AssetError::Decode {
            path: path.to_path_buf(),
            source,
        })?;

        let channels = img.color().channel_count();
        let (pixels, width, height) = match channels {
            3 => {
                let rgb = img.flipv().into_rgb8();
                let (width, height) = rgb.dimensions();
                (rgb.into_raw(), width, height)
            }
            4 => {
                let rgba = img.flipv().into_rgba8();
                let (width, height) = rgba.dimensions();
                (rgba.into_raw(), width, height)
            }
            other => {
                return Err(AssetError::UnsupportedChannels {
                    path: path.to_path_buf(),
                    channels: other,
                })
            }
        };

        log::info!(
            "Loaded image {}x{} ({} channels) from {:?}",
            width,
            height,
            channels,
            path
        );

        Ok(Self {
            pixels,
            width,
            height,
            channels,
        })
    }

    /// Create a solid color RGBA image (useful for testing and fallbacks)
    #[must_use]
    pub fn solid_color(width: u32, height: u32, color: [u8; 4]) -> Self {
        let pixel_count = (width * height) as usize;
        let mut pixels = Vec::with_capacity(pixel_count * 4);

        for _ in 0..pixel_count {
            pixels.extend_from_slice(&color);
        }

        Self {
            pixels,
            width,
            height,
            channels: 4,
        }
    }

    /// Whether the image carries an alpha channel
    #[must_use]
    pub const fn has_alpha(&self) -> bool {
        self.channels == 4
    }

    /// Size of the pixel data in bytes
    #[must_use]
    pub fn size_bytes(&self) -> usize {
        self.pixels.len()
    }
}
