//! Scene manager: turns a scene description into renderer state and draws
//!
//! Owns the texture and material registries plus the shader state binder,
//! and enforces the setup-then-render protocol: registries are populated
//! once in [`SceneManager::prepare`] and are read-only while
//! [`SceneManager::render`] walks the draw list.

use crate::render::{
    GeometryProvider, Material, MaterialRegistry, ShaderStateBinder, TextureDevice, TextureError,
    TextureRegistry, UniformSink,
};
use crate::scene::description::{SceneDescription, Surface};
use crate::scene::SceneError;

/// Orchestrates scene setup and per-frame rendering against a description.
///
/// Generic over the uniform sink so a scene can be driven against a real
/// shader program or a recorder in tests.
pub struct SceneManager<S: UniformSink> {
    binder: ShaderStateBinder<S>,
    textures: TextureRegistry,
    materials: MaterialRegistry,
    default_material: Material,
}

impl<S: UniformSink> SceneManager<S> {
    /// Create a scene manager bound to the given shader context
    pub fn new(sink: S) -> Self {
        Self {
            binder: ShaderStateBinder::new(sink),
            textures: TextureRegistry::new(),
            materials: MaterialRegistry::new(),
            default_material: Material::default(),
        }
    }

    /// One-time scene setup: load and bind textures, define materials,
    /// configure lights, and upload each referenced mesh once.
    ///
    /// A texture that fails to decode (unreadable file, unsupported channel
    /// count) is reported and skipped; the scene renders without it.
    /// Registry-level failures (duplicate tags, slot exhaustion, device
    /// rejection) indicate a broken scene description and are returned.
    ///
    /// # Errors
    ///
    /// [`SceneError::Texture`] for non-recoverable texture registration
    /// failures.
    pub fn prepare(
        &mut self,
        device: &mut dyn TextureDevice,
        geometry: &mut dyn GeometryProvider,
        description: &SceneDescription,
    ) -> Result<(), SceneError> {
        for texture in &description.textures {
            match self
                .textures
                .register(device, &texture.path, &texture.tag)
            {
                Ok(()) => {}
                // Decode-level failures are reported and skipped; the scene
                // renders without that texture.
                Err(TextureError::Asset(error)) => {
                    log::warn!("skipping texture {:?}: {}", texture.tag, error);
                }
                Err(error) => return Err(error.into()),
            }
        }
        self.textures.bind_all(device);

        for material in &description.materials {
            self.materials.define(material.clone());
        }

        description.lights.configure(self.binder.sink_mut());

        for shape in description.distinct_shapes() {
            geometry.load_mesh(shape);
        }

        log::info!(
            "Scene prepared: {} textures, {} materials, {} lights, {} objects",
            self.textures.len(),
            self.materials.len(),
            description.lights.lights.len(),
            description.objects.len()
        );
        Ok(())
    }

    /// Draw every object in the description, in order.
    ///
    /// Shader uniform state persists across draws, so each object gets the
    /// full protocol: transform, color-or-texture, UV scale, material, then
    /// the draw call. Color surfaces reset the UV scale to identity rather
    /// than inheriting whatever the previous object set.
    pub fn render(
        &mut self,
        geometry: &mut dyn GeometryProvider,
        description: &SceneDescription,
    ) {
        for object in &description.objects {
            self.binder.set_transform(&object.transform);

            match &object.surface {
                Surface::Color { rgba } => {
                    self.binder.set_solid_color(rgba[0], rgba[1], rgba[2], rgba[3]);
                    self.binder.set_uv_scale(1.0, 1.0);
                }
                Surface::Texture { tag, uv_scale } => {
                    self.binder.set_texture(&self.textures, tag);
                    self.binder.set_uv_scale(uv_scale[0], uv_scale[1]);
                }
            }

            match &object.material {
                Some(tag) => {
                    self.binder.set_material(&self.materials, tag);
                }
                None => self.binder.set_material_record(&self.default_material),
            }

            log::trace!(
                "drawing {:?} ({:?})",
                object.name.as_deref().unwrap_or("<unnamed>"),
                object.shape
            );
            geometry.draw_mesh(object.shape);
        }
    }

    /// Release all GPU-side texture resources
    pub fn teardown(&mut self, device: &mut dyn TextureDevice) {
        self.textures.release(device);
    }

    /// The texture registry populated by `prepare`
    pub fn textures(&self) -> &TextureRegistry {
        &self.textures
    }

    /// The material registry populated by `prepare`
    pub fn materials(&self) -> &MaterialRegistry {
        &self.materials
    }

    /// The shader state binder, for callers that push extra uniform state
    /// (view and projection matrices live outside the scene protocol)
    pub fn binder_mut(&mut self) -> &mut ShaderStateBinder<S> {
        &mut self.binder
    }

    /// Consume the manager and return the uniform sink
    pub fn into_sink(self) -> S {
        self.binder.into_inner()
    }
}
