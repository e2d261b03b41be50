//! Texture registry: tagged texture resources and slot binding
//!
//! Scene code refers to textures by human-readable tag ("ceramic",
//! "porcelain"), never by raw GPU handle. The registry owns the handles,
//! assigns each registered texture a sequential texture-unit slot at bind
//! time, and releases everything at teardown.
//!
//! Lookup is a linear scan by tag. The registry holds single-digit to
//! low-tens of entries, populated once at scene load and read-only during
//! rendering, so no index structure is warranted.

use std::path::Path;

use thiserror::Error;

use crate::assets::{AssetError, ImageData};

/// Number of texture-unit slots available for scene textures, matching the
/// hardware texture-unit limit
pub const MAX_TEXTURE_SLOTS: usize = 16;

/// Opaque GPU texture resource id issued by a [`TextureDevice`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureHandle(pub u32);

/// Texture registry errors
#[derive(Error, Debug)]
pub enum TextureError {
    /// Decoding the source image failed
    #[error(transparent)]
    Asset(#[from] AssetError),

    /// A texture is already registered under this tag
    #[error("texture tag {0:?} is already registered")]
    DuplicateTag(String),

    /// All texture-unit slots are in use
    #[error("all {max} texture slots are in use")]
    SlotsExhausted {
        /// The slot capacity that was exceeded
        max: usize,
    },

    /// The graphics backend rejected the upload
    #[error("texture device error: {0}")]
    Device(String),
}

/// GPU side of the texture registry.
///
/// Implementations upload decoded pixel data (including mipmap generation),
/// activate a texture on a numbered texture unit, and free GPU resources.
/// The registry drives this seam; scene code never sees it.
pub trait TextureDevice {
    /// Upload an image as a 2D texture and generate its mipmaps.
    ///
    /// # Errors
    ///
    /// Returns [`TextureError::Device`] if the backend rejects the upload.
    fn create_texture(&mut self, image: &ImageData) -> Result<TextureHandle, TextureError>;

    /// Activate `handle` on texture unit `slot`
    fn bind_texture(&mut self, slot: usize, handle: TextureHandle);

    /// Free the GPU resources behind `handle`
    fn destroy_texture(&mut self, handle: TextureHandle);
}

/// One registered texture
#[derive(Debug, Clone)]
struct TextureEntry {
    /// Unique lookup tag
    tag: String,
    /// GPU resource id, owned by the registry
    handle: TextureHandle,
    /// Texture-unit slot, assigned by `bind_all`
    slot: Option<usize>,
}

/// Fixed-capacity table mapping texture tags to GPU handles and bound slots.
///
/// Populated once during scene load: [`register`](Self::register) each
/// texture, then [`bind_all`](Self::bind_all) exactly once before the first
/// draw call that references a texture by tag.
#[derive(Debug, Default)]
pub struct TextureRegistry {
    entries: Vec<TextureEntry>,
}

impl TextureRegistry {
    /// Create an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode an image file and register the uploaded texture under `tag`.
    ///
    /// On failure the registry is unchanged; a scene can keep loading its
    /// remaining textures and render without this one.
    ///
    /// # Errors
    ///
    /// [`TextureError::Asset`] if the file cannot be decoded or has an
    /// unsupported channel count, [`TextureError::DuplicateTag`] if `tag` is
    /// already taken, [`TextureError::SlotsExhausted`] at capacity, or
    /// [`TextureError::Device`] if the upload fails.
    pub fn register<P: AsRef<Path>>(
        &mut self,
        device: &mut dyn TextureDevice,
        path: P,
        tag: &str,
    ) -> Result<(), TextureError> {
        let image = ImageData::from_file(path.as_ref())?;
        self.register_image(device, &image, tag)
    }

    /// Register an already-decoded image under `tag`.
    ///
    /// Useful for procedurally generated textures and fallback colors that
    /// never touch the filesystem.
    ///
    /// # Errors
    ///
    /// Same as [`register`](Self::register), minus the decode failures.
    pub fn register_image(
        &mut self,
        device: &mut dyn TextureDevice,
        image: &ImageData,
        tag: &str,
    ) -> Result<(), TextureError> {
        if self.entries.iter().any(|entry| entry.tag == tag) {
            return Err(TextureError::DuplicateTag(tag.to_string()));
        }
        if self.entries.len() >= MAX_TEXTURE_SLOTS {
            return Err(TextureError::SlotsExhausted {
                max: MAX_TEXTURE_SLOTS,
            });
        }

        let handle = device.create_texture(image)?;
        log::debug!("Registered texture {:?} as {:?}", tag, handle);

        self.entries.push(TextureEntry {
            tag: tag.to_string(),
            handle,
            slot: None,
        });

        Ok(())
    }

    /// Assign each registered texture a sequential texture-unit slot
    /// (`0..count`) in registration order and activate it on the device.
    ///
    /// Call once after all registrations and before any draw that references
    /// a texture by tag. Calling again reassigns the same tag-to-slot
    /// mapping.
    pub fn bind_all(&mut self, device: &mut dyn TextureDevice) {
        for (slot, entry) in self.entries.iter_mut().enumerate() {
            device.bind_texture(slot, entry.handle);
            entry.slot = Some(slot);
        }
        log::info!("Bound {} textures to texture slots", self.entries.len());
    }

    /// Slot index for the texture registered under `tag`.
    ///
    /// Returns `None` for unknown tags and for textures that have not been
    /// through [`bind_all`](Self::bind_all) yet; never panics.
    #[must_use]
    pub fn lookup_slot(&self, tag: &str) -> Option<usize> {
        self.entries
            .iter()
            .find(|entry| entry.tag == tag)
            .and_then(|entry| entry.slot)
    }

    /// GPU handle for the texture registered under `tag`
    #[must_use]
    pub fn lookup_handle(&self, tag: &str) -> Option<TextureHandle> {
        self.entries
            .iter()
            .find(|entry| entry.tag == tag)
            .map(|entry| entry.handle)
    }

    /// Number of registered textures
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry holds no textures
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Free all GPU resources and empty the registry.
    ///
    /// The registry is unusable for lookups afterwards until repopulated.
    pub fn release(&mut self, device: &mut dyn TextureDevice) {
        for entry in self.entries.drain(..) {
            device.destroy_texture(entry.handle);
        }
        log::info!("Released all scene textures");
    }
}
