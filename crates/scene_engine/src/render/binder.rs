//! Per-draw shader state binder
//!
//! The façade the scene composer talks to before every draw call. Each
//! setter resolves tags through the registries and pushes the result into
//! the owned [`UniformSink`]. Shader uniform state persists across draws, so
//! a caller must fully specify color-or-texture, material, transform, and UV
//! scale for each object before issuing its draw.

use crate::foundation::math::{Mat4, Transform, Vec2, Vec4};
use crate::render::material::{Material, MaterialRegistry};
use crate::render::texture::TextureRegistry;
use crate::render::uniforms::{names, UniformSink};

/// Sampler value pushed when a texture tag does not resolve.
///
/// A defined, non-crashing outcome: the render continues with a visually
/// wrong texture rather than aborting the frame.
pub const NO_TEXTURE_SLOT: i32 = -1;

/// Binds per-object shader state ahead of each draw call.
///
/// Owns the uniform sink for the active shader program, making uniform
/// writes scoped to an explicit context instead of ambient globals.
#[derive(Debug)]
pub struct ShaderStateBinder<S: UniformSink> {
    sink: S,
}

impl<S: UniformSink> ShaderStateBinder<S> {
    /// Wrap the uniform sink of an active shader program
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    /// Shared access to the underlying sink
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Mutable access to the underlying sink, for state outside this
    /// binder's protocol (view/projection matrices, for instance)
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Consume the binder and return the sink
    pub fn into_inner(self) -> S {
        self.sink
    }

    /// Compose the model matrix for `transform` and push it as the `model`
    /// uniform. Returns the composed matrix.
    pub fn set_transform(&mut self, transform: &Transform) -> Mat4 {
        let matrix = transform.compose();
        self.sink.set_mat4(names::MODEL, &matrix);
        matrix
    }

    /// Disable texture sampling and set a flat object color
    pub fn set_solid_color(&mut self, r: f32, g: f32, b: f32, a: f32) {
        self.sink.set_bool(names::USE_TEXTURE, false);
        self.sink.set_vec4(names::OBJECT_COLOR, Vec4::new(r, g, b, a));
    }

    /// Enable texture sampling and point the sampler at the slot registered
    /// under `tag`.
    ///
    /// An unresolved tag pushes [`NO_TEXTURE_SLOT`] and logs a warning; the
    /// draw proceeds.
    pub fn set_texture(&mut self, textures: &TextureRegistry, tag: &str) {
        self.sink.set_bool(names::USE_TEXTURE, true);

        let slot = match textures.lookup_slot(tag) {
            Some(slot) => i32::try_from(slot).unwrap_or(NO_TEXTURE_SLOT),
            None => {
                log::warn!("texture tag {:?} not found; sampler set to sentinel", tag);
                NO_TEXTURE_SLOT
            }
        };
        self.sink.set_sampler(names::OBJECT_TEXTURE, slot);
    }

    /// Set the UV scale applied to texture coordinates at sample time
    pub fn set_uv_scale(&mut self, u: f32, v: f32) {
        self.sink.set_vec2(names::UV_SCALE, Vec2::new(u, v));
    }

    /// Resolve `tag` in the material registry and push the five `material.*`
    /// uniforms.
    ///
    /// On a miss no uniforms are touched, so the previously bound material
    /// carries over; returns `false` and logs a warning so the caller can
    /// decide whether that carry-over is acceptable.
    pub fn set_material(&mut self, materials: &MaterialRegistry, tag: &str) -> bool {
        let Some(material) = materials.lookup(tag) else {
            log::warn!("material tag {:?} not found; shader material state unchanged", tag);
            return false;
        };
        self.set_material_record(material);
        true
    }

    /// Push the five `material.*` uniforms from an explicit record,
    /// bypassing the registry (used for defaults and one-off materials)
    pub fn set_material_record(&mut self, material: &Material) {
        self.sink.set_vec3("material.ambientColor", material.ambient_color);
        self.sink.set_float("material.ambientStrength", material.ambient_strength);
        self.sink.set_vec3("material.diffuseColor", material.diffuse_color);
        self.sink.set_vec3("material.specularColor", material.specular_color);
        self.sink.set_float("material.shininess", material.shininess);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::ImageData;
    use crate::foundation::math::Vec3;
    use crate::render::material::Material;
    use crate::render::texture::{TextureDevice, TextureError, TextureHandle};
    use crate::render::uniforms::{UniformRecorder, UniformValue};
    use approx::assert_relative_eq;

    struct NullDevice(u32);

    impl TextureDevice for NullDevice {
        fn create_texture(&mut self, _image: &ImageData) -> Result<TextureHandle, TextureError> {
            let handle = TextureHandle(self.0);
            self.0 += 1;
            Ok(handle)
        }
        fn bind_texture(&mut self, _slot: usize, _handle: TextureHandle) {}
        fn destroy_texture(&mut self, _handle: TextureHandle) {}
    }

    fn binder() -> ShaderStateBinder<UniformRecorder> {
        ShaderStateBinder::new(UniformRecorder::new())
    }

    #[test]
    fn test_set_transform_pushes_model_matrix() {
        let mut binder = binder();
        let transform = Transform::from_position(Vec3::new(5.0, 0.0, 0.0));
        let returned = binder.set_transform(&transform);

        let Some(UniformValue::Mat4(pushed)) = binder.sink().get("model") else {
            panic!("model matrix not pushed");
        };
        assert_relative_eq!(*pushed, returned, epsilon = 1e-6);
        assert_relative_eq!(returned, transform.compose(), epsilon = 1e-6);
    }

    #[test]
    fn test_solid_color_disables_texturing() {
        let mut binder = binder();
        binder.set_solid_color(0.8, 0.6, 0.4, 1.0);

        assert_eq!(binder.sink().get("bUseTexture"), Some(&UniformValue::Bool(false)));
        assert_eq!(
            binder.sink().get("objectColor"),
            Some(&UniformValue::Vec4(Vec4::new(0.8, 0.6, 0.4, 1.0)))
        );
    }

    #[test]
    fn test_set_texture_resolves_slot() {
        let mut device = NullDevice(0);
        let mut textures = TextureRegistry::new();
        textures
            .register_image(&mut device, &ImageData::solid_color(2, 2, [0; 4]), "a")
            .unwrap();
        textures
            .register_image(&mut device, &ImageData::solid_color(2, 2, [0; 4]), "b")
            .unwrap();
        textures.bind_all(&mut device);

        let mut binder = binder();
        binder.set_texture(&textures, "b");

        assert_eq!(binder.sink().get("bUseTexture"), Some(&UniformValue::Bool(true)));
        assert_eq!(
            binder.sink().get("objectTexture"),
            Some(&UniformValue::Sampler(1))
        );
    }

    #[test]
    fn test_set_texture_miss_pushes_sentinel() {
        let textures = TextureRegistry::new();
        let mut binder = binder();
        binder.set_texture(&textures, "missing");

        assert_eq!(
            binder.sink().get("objectTexture"),
            Some(&UniformValue::Sampler(NO_TEXTURE_SLOT))
        );
        // Texturing is still enabled; the wrong-texture outcome is defined.
        assert_eq!(binder.sink().get("bUseTexture"), Some(&UniformValue::Bool(true)));
    }

    #[test]
    fn test_uv_scale_pushed() {
        let mut binder = binder();
        binder.set_uv_scale(8.0, 8.0);
        assert_eq!(
            binder.sink().get("UVscale"),
            Some(&UniformValue::Vec2(Vec2::new(8.0, 8.0)))
        );
    }

    #[test]
    fn test_set_material_pushes_all_fields() {
        let mut materials = MaterialRegistry::new();
        materials.define(Material {
            tag: "metal".to_string(),
            ambient_color: Vec3::new(0.1, 0.1, 0.1),
            ambient_strength: 0.75,
            diffuse_color: Vec3::new(0.25, 0.25, 0.25),
            specular_color: Vec3::new(0.75, 0.75, 0.75),
            shininess: 16.0,
        });

        let mut binder = binder();
        assert!(binder.set_material(&materials, "metal"));

        assert_eq!(
            binder.sink().get("material.ambientStrength"),
            Some(&UniformValue::Float(0.75))
        );
        assert_eq!(
            binder.sink().get("material.specularColor"),
            Some(&UniformValue::Vec3(Vec3::new(0.75, 0.75, 0.75)))
        );
        assert_eq!(
            binder.sink().get("material.shininess"),
            Some(&UniformValue::Float(16.0))
        );
    }

    #[test]
    fn test_set_material_miss_touches_nothing() {
        let mut materials = MaterialRegistry::new();
        materials.define(Material::named("ceramic"));

        let mut binder = binder();
        binder.set_material(&materials, "ceramic");
        let writes_before = binder.sink().write_count();

        assert!(!binder.set_material(&materials, "typo"));
        assert_eq!(binder.sink().write_count(), writes_before);
        // Prior material state persists.
        assert!(binder.sink().get("material.shininess").is_some());
    }
}
