//! Scene description and orchestration
//!
//! The scene layout itself is content, not engine behavior: it lives in a
//! RON file loaded into a [`SceneDescription`]. The [`SceneManager`] turns a
//! description into the one-time setup sequence (textures, materials,
//! lights, meshes) and the per-object draw protocol.

pub mod description;
pub mod scene_manager;

use thiserror::Error;

use crate::render::TextureError;

pub use description::{SceneDescription, SceneObject, Surface, TextureAsset};
pub use scene_manager::SceneManager;

/// Scene loading and setup errors
#[derive(Error, Debug)]
pub enum SceneError {
    /// Reading or writing the scene file failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The scene file did not parse as a scene description
    #[error("scene parse error: {0}")]
    Parse(String),

    /// The scene description could not be serialized
    #[error("scene serialize error: {0}")]
    Serialize(String),

    /// Texture setup failed in a way the scene cannot continue from
    #[error(transparent)]
    Texture(#[from] TextureError),
}
