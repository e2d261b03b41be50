//! Scene lighting rig
//!
//! A small fixed set of point lights pushed to shader uniform state once at
//! scene setup. Light values are not recomputed per frame; the rig exists so
//! scene files can describe lights declaratively and so the corner-light
//! arrangement used by tabletop scenes has one authoritative constructor.

use serde::{Deserialize, Serialize};

use crate::foundation::math::Vec3;
use crate::render::uniforms::{names, UniformSink};

/// Size of the shader's `lightSources` array
pub const MAX_LIGHT_SOURCES: usize = 4;

/// Focal exponent for flat fill lights
const FILL_FOCAL_STRENGTH: f32 = 3.0;

/// Specular parameters of the single highlight-producing key light
const KEY_SPECULAR_COLOR: f32 = 0.25;
const KEY_SPECULAR_INTENSITY: f32 = 0.15;
const KEY_FOCAL_STRENGTH: f32 = 25.0;

/// One point light in the scene
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LightSource {
    /// World-space position
    pub position: Vec3,
    /// Ambient contribution color
    pub ambient_color: Vec3,
    /// Diffuse contribution color
    pub diffuse_color: Vec3,
    /// Specular contribution color
    pub specular_color: Vec3,
    /// Scale applied to the specular term
    pub specular_intensity: f32,
    /// Specular focus exponent
    pub focal_strength: f32,
}

impl LightSource {
    /// A flat fill light: no specular contribution, soft focus.
    #[must_use]
    pub fn fill(position: Vec3, ambient: Vec3, diffuse: Vec3) -> Self {
        Self {
            position,
            ambient_color: ambient,
            diffuse_color: diffuse,
            specular_color: Vec3::zeros(),
            specular_intensity: 0.0,
            focal_strength: FILL_FOCAL_STRENGTH,
        }
    }

    /// The key light: same fill terms plus a tight specular highlight.
    ///
    /// One key among otherwise flat fills is what gives glossy objects a
    /// single readable glare spot instead of four competing ones.
    #[must_use]
    pub fn key(position: Vec3, ambient: Vec3, diffuse: Vec3) -> Self {
        Self {
            specular_color: Vec3::new(
                KEY_SPECULAR_COLOR,
                KEY_SPECULAR_COLOR,
                KEY_SPECULAR_COLOR,
            ),
            specular_intensity: KEY_SPECULAR_INTENSITY,
            focal_strength: KEY_FOCAL_STRENGTH,
            ..Self::fill(position, ambient, diffuse)
        }
    }
}

/// Lighting rig for a scene: the ordered set of lights to push to the shader
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LightingRig {
    /// Lights in slot order; only the first [`MAX_LIGHT_SOURCES`] reach the
    /// shader
    pub lights: Vec<LightSource>,
}

impl LightingRig {
    /// Create an empty rig
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a light to the rig
    #[must_use]
    pub fn add_light(mut self, light: LightSource) -> Self {
        self.lights.push(light);
        self
    }

    /// Four lights at the corners of a bounding square, `radius` out from
    /// center at the given `height`, with the last corner as the key light.
    #[must_use]
    pub fn table_corners(height: f32, radius: f32, ambient: Vec3, diffuse: Vec3) -> Self {
        let corners = [
            Vec3::new(radius, height, -radius),
            Vec3::new(radius, height, radius),
            Vec3::new(-radius, height, radius),
            Vec3::new(-radius, height, -radius),
        ];

        let mut rig = Self::new();
        for corner in &corners[..corners.len() - 1] {
            rig = rig.add_light(LightSource::fill(*corner, ambient, diffuse));
        }
        rig.add_light(LightSource::key(corners[corners.len() - 1], ambient, diffuse))
    }

    /// Push every light's parameters to the shader's `lightSources` array
    /// and enable the lighting path.
    ///
    /// One-time setup: call after the shader program is active, before the
    /// render loop. Lights past [`MAX_LIGHT_SOURCES`] have no shader slot
    /// and are dropped with a warning.
    pub fn configure<S: UniformSink>(&self, sink: &mut S) {
        if self.lights.len() > MAX_LIGHT_SOURCES {
            log::warn!(
                "lighting rig has {} lights but the shader supports {}; extra lights dropped",
                self.lights.len(),
                MAX_LIGHT_SOURCES
            );
        }

        for (slot, light) in self.lights.iter().take(MAX_LIGHT_SOURCES).enumerate() {
            let base = format!("lightSources[{slot}]");
            sink.set_vec3(&format!("{base}.position"), light.position);
            sink.set_vec3(&format!("{base}.ambientColor"), light.ambient_color);
            sink.set_vec3(&format!("{base}.diffuseColor"), light.diffuse_color);
            sink.set_vec3(&format!("{base}.specularColor"), light.specular_color);
            sink.set_float(&format!("{base}.specularIntensity"), light.specular_intensity);
            sink.set_float(&format!("{base}.focalStrength"), light.focal_strength);
        }

        sink.set_bool(names::USE_LIGHTING, true);
        log::info!(
            "Configured {} scene lights",
            self.lights.len().min(MAX_LIGHT_SOURCES)
        );
    }
}
