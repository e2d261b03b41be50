//! Serializable scene description
//!
//! Everything that was once hard-coded scene layout lives here as data:
//! which textures to load, which materials to define, where the lights sit,
//! and the per-object transform/surface/material assignments in draw order.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::foundation::math::Transform;
use crate::render::{LightingRig, Material, ShapeKind};
use crate::scene::SceneError;

/// A texture to load at scene setup: image file plus lookup tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextureAsset {
    /// Image file to decode
    pub path: PathBuf,
    /// Tag objects use to reference the texture
    pub tag: String,
}

/// How an object's surface is shaded: flat color or tagged texture
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Surface {
    /// Flat RGBA color, no texture sampling
    Color {
        /// Color components in `[0, 1]`
        rgba: [f32; 4],
    },
    /// Sample the texture registered under `tag`
    Texture {
        /// Texture registry tag
        tag: String,
        /// UV scale applied at sample time
        #[serde(default = "default_uv_scale")]
        uv_scale: [f32; 2],
    },
}

fn default_uv_scale() -> [f32; 2] {
    [1.0, 1.0]
}

/// One drawn object: shape, placement, surface, and material
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneObject {
    /// Optional label for logs and tooling
    #[serde(default)]
    pub name: Option<String>,

    /// Which primitive mesh to draw
    pub shape: ShapeKind,

    /// Scale, rotation (degrees), and position for this draw
    pub transform: Transform,

    /// Color-or-texture selection
    pub surface: Surface,

    /// Material registry tag; a missing field means the neutral default
    #[serde(default)]
    pub material: Option<String>,
}

/// Complete declarative scene: assets, lighting, and draw list
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneDescription {
    /// Textures to register and bind at setup
    #[serde(default)]
    pub textures: Vec<TextureAsset>,

    /// Materials to define at setup
    #[serde(default)]
    pub materials: Vec<Material>,

    /// Scene lighting, pushed once at setup
    #[serde(default)]
    pub lights: LightingRig,

    /// Objects in draw order
    #[serde(default)]
    pub objects: Vec<SceneObject>,
}

impl SceneDescription {
    /// Load a scene description from a RON file.
    ///
    /// # Errors
    ///
    /// [`SceneError::Io`] if the file cannot be read, [`SceneError::Parse`]
    /// if it is not a valid scene description.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, SceneError> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let description =
            ron::from_str(&contents).map_err(|e| SceneError::Parse(e.to_string()))?;
        log::info!("Loaded scene description from {:?}", path.as_ref());
        Ok(description)
    }

    /// Save this description as pretty-printed RON.
    ///
    /// # Errors
    ///
    /// [`SceneError::Serialize`] if serialization fails, [`SceneError::Io`]
    /// if the file cannot be written.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), SceneError> {
        let contents = ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|e| SceneError::Serialize(e.to_string()))?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Distinct shapes referenced by the draw list, each listed once
    #[must_use]
    pub fn distinct_shapes(&self) -> Vec<ShapeKind> {
        let mut shapes = Vec::new();
        for object in &self.objects {
            if !shapes.contains(&object.shape) {
                shapes.push(object.shape);
            }
        }
        shapes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Vec3;
    use crate::render::LightSource;

    fn sample_scene() -> SceneDescription {
        SceneDescription {
            textures: vec![TextureAsset {
                path: PathBuf::from("textures/ceramic.jpg"),
                tag: "ceramic".to_string(),
            }],
            materials: vec![Material::named("ceramic")],
            lights: LightingRig::new().add_light(LightSource::fill(
                Vec3::new(12.0, 6.0, -12.0),
                Vec3::new(0.1, 0.1, 0.1),
                Vec3::new(0.12, 0.12, 0.12),
            )),
            objects: vec![
                SceneObject {
                    name: Some("floor".to_string()),
                    shape: ShapeKind::Plane,
                    transform: Transform::new(
                        Vec3::new(20.0, 20.0, 20.0),
                        Vec3::zeros(),
                        Vec3::zeros(),
                    ),
                    surface: Surface::Texture {
                        tag: "ceramic".to_string(),
                        uv_scale: [8.0, 8.0],
                    },
                    material: Some("ceramic".to_string()),
                },
                SceneObject {
                    name: None,
                    shape: ShapeKind::Box,
                    transform: Transform::default(),
                    surface: Surface::Color {
                        rgba: [0.4, 0.4, 0.4, 1.0],
                    },
                    material: None,
                },
            ],
        }
    }

    #[test]
    fn test_ron_round_trip() {
        let scene = sample_scene();
        let text = ron::ser::to_string_pretty(&scene, ron::ser::PrettyConfig::default()).unwrap();
        let back: SceneDescription = ron::from_str(&text).unwrap();
        assert_eq!(scene, back);
    }

    #[test]
    fn test_file_round_trip() {
        let path = std::env::temp_dir().join(format!(
            "scene_engine_{}_scene.ron",
            std::process::id()
        ));
        let scene = sample_scene();
        scene.save_to_file(&path).unwrap();
        let back = SceneDescription::load_from_file(&path).unwrap();
        assert_eq!(scene, back);
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = SceneDescription::load_from_file("no/such/scene.ron");
        assert!(matches!(result, Err(SceneError::Io(_))));
    }

    #[test]
    fn test_uv_scale_defaults_to_one() {
        let text = r#"(
            objects: [(
                shape: Plane,
                transform: (
                    scale: [1.0, 1.0, 1.0],
                    rotation_degrees: [0.0, 0.0, 0.0],
                    position: [0.0, 0.0, 0.0],
                ),
                surface: Texture(tag: "ceramic"),
            )],
        )"#;
        let scene: SceneDescription = ron::from_str(text).unwrap();
        let Surface::Texture { uv_scale, .. } = &scene.objects[0].surface else {
            panic!("expected a textured surface");
        };
        assert_eq!(*uv_scale, [1.0, 1.0]);
    }

    #[test]
    fn test_distinct_shapes_deduplicates() {
        let mut scene = sample_scene();
        scene.objects.push(scene.objects[1].clone());
        assert_eq!(scene.distinct_shapes(), vec![ShapeKind::Plane, ShapeKind::Box]);
    }
}
