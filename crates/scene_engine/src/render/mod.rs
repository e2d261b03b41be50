//! Rendering state layer
//!
//! Everything the scene composer needs to set up shader state for a draw
//! call: the uniform sink seam, the texture and material registries, the
//! lighting rig, the per-draw shader state binder, and the geometry provider
//! seam for the fixed primitive set.

pub mod binder;
pub mod geometry;
pub mod lighting;
pub mod material;
pub mod texture;
pub mod uniforms;

pub use binder::{ShaderStateBinder, NO_TEXTURE_SLOT};
pub use geometry::{GeometryProvider, ShapeKind};
pub use lighting::{LightSource, LightingRig, MAX_LIGHT_SOURCES};
pub use material::{Material, MaterialRegistry};
pub use texture::{
    TextureDevice, TextureError, TextureHandle, TextureRegistry, MAX_TEXTURE_SLOTS,
};
pub use uniforms::{UniformRecorder, UniformSink, UniformValue};
