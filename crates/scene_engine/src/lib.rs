//! # Scene Engine
//!
//! A scene-description layer for a fixed-function style, real-time 3D
//! renderer. The crate owns the pieces that sit between scene content and a
//! graphics backend: tagged texture and material registries, a four-light
//! Phong lighting rig, a model-matrix composer, and the per-draw shader
//! state binder that pushes transform, color-or-texture, UV scale, and
//! material uniforms before each draw call.
//!
//! The graphics API itself stays behind three narrow seams so that scene
//! code never touches a GPU handle directly:
//!
//! - [`render::UniformSink`] — named-uniform writes into the active shader
//! - [`render::TextureDevice`] — texture upload, binding, and teardown
//! - [`render::GeometryProvider`] — primitive mesh upload and draw calls
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use scene_engine::render::UniformRecorder;
//! use scene_engine::scene::{SceneDescription, SceneManager};
//! # use scene_engine::assets::ImageData;
//! # use scene_engine::render::{
//! #     GeometryProvider, ShapeKind, TextureDevice, TextureError, TextureHandle,
//! # };
//! # struct Device(u32);
//! # impl TextureDevice for Device {
//! #     fn create_texture(&mut self, _: &ImageData) -> Result<TextureHandle, TextureError> {
//! #         self.0 += 1;
//! #         Ok(TextureHandle(self.0))
//! #     }
//! #     fn bind_texture(&mut self, _: usize, _: TextureHandle) {}
//! #     fn destroy_texture(&mut self, _: TextureHandle) {}
//! # }
//! # struct Geometry;
//! # impl GeometryProvider for Geometry {
//! #     fn load_mesh(&mut self, _: ShapeKind) {}
//! #     fn draw_mesh(&mut self, _: ShapeKind) {}
//! # }
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut device = Device(0);
//!     let mut geometry = Geometry;
//!     let description = SceneDescription::load_from_file("assets/tabletop.ron")?;
//!
//!     let mut scene = SceneManager::new(UniformRecorder::new());
//!     scene.prepare(&mut device, &mut geometry, &description)?;
//!     scene.render(&mut geometry, &description);
//!     scene.teardown(&mut device);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;
pub mod assets;
pub mod render;
pub mod scene;

/// Commonly used types for downstream code
pub mod prelude {
    pub use crate::foundation::math::{Mat4, Transform, Vec2, Vec3, Vec4};
    pub use crate::render::{
        GeometryProvider, LightSource, LightingRig, Material, MaterialRegistry, ShaderStateBinder,
        ShapeKind, TextureDevice, TextureRegistry, UniformSink,
    };
    pub use crate::scene::{SceneDescription, SceneManager};
}
