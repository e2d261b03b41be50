//! Phong material records and the tagged material registry
//!
//! Materials are immutable once defined; the collection grows during scene
//! setup and is read-only while rendering. As with textures, scene code
//! names materials by tag and a small linear scan resolves them.

use serde::{Deserialize, Serialize};

use crate::foundation::math::Vec3;

/// Phong material record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Lookup tag, unique by contract
    pub tag: String,

    /// Ambient reflectance color
    pub ambient_color: Vec3,

    /// Scale applied to the ambient term
    pub ambient_strength: f32,

    /// Diffuse reflectance color
    pub diffuse_color: Vec3,

    /// Specular reflectance color
    pub specular_color: Vec3,

    /// Specular exponent; higher is a tighter highlight
    pub shininess: f32,
}

impl Default for Material {
    /// Neutral grey material used when scene content does not specify one
    fn default() -> Self {
        Self {
            tag: String::new(),
            ambient_color: Vec3::new(0.1, 0.1, 0.1),
            ambient_strength: 0.75,
            diffuse_color: Vec3::new(0.25, 0.25, 0.25),
            specular_color: Vec3::new(0.75, 0.75, 0.75),
            shininess: 16.0,
        }
    }
}

impl Material {
    /// Create a neutral material under `tag`
    #[must_use]
    pub fn named(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }
}

/// Append-only table of named materials.
///
/// Re-defining a tag does not overwrite: lookup returns the
/// first-registered match. Duplicates are therefore harmless but useless,
/// and get flagged in the log during scene setup.
#[derive(Debug, Default)]
pub struct MaterialRegistry {
    materials: Vec<Material>,
}

impl MaterialRegistry {
    /// Create an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a named material
    pub fn define(&mut self, material: Material) {
        if self.lookup(&material.tag).is_some() {
            log::warn!(
                "material tag {:?} defined more than once; first definition wins",
                material.tag
            );
        }
        log::debug!("Defined material {:?}", material.tag);
        self.materials.push(material);
    }

    /// Material registered under `tag`, first match wins.
    ///
    /// Returns `None` for unknown tags; never panics. Callers must leave the
    /// current shader material state untouched on a miss.
    #[must_use]
    pub fn lookup(&self, tag: &str) -> Option<&Material> {
        self.materials.iter().find(|material| material.tag == tag)
    }

    /// Number of defined materials, counting duplicates
    #[must_use]
    pub fn len(&self) -> usize {
        self.materials.len()
    }

    /// Whether no materials are defined
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shiny(tag: &str, shininess: f32) -> Material {
        Material {
            tag: tag.to_string(),
            shininess,
            ..Default::default()
        }
    }

    #[test]
    fn test_define_then_lookup_round_trips() {
        let mut registry = MaterialRegistry::new();
        let ceramic = Material {
            tag: "ceramic".to_string(),
            ambient_color: Vec3::new(0.1, 0.1, 0.1),
            ambient_strength: 0.75,
            diffuse_color: Vec3::new(0.25, 0.25, 0.25),
            specular_color: Vec3::new(0.75, 0.75, 0.75),
            shininess: 16.0,
        };
        registry.define(ceramic.clone());

        assert_eq!(registry.lookup("ceramic"), Some(&ceramic));
    }

    #[test]
    fn test_lookup_miss_is_none() {
        let registry = MaterialRegistry::new();
        assert!(registry.lookup("unknown").is_none());
    }

    #[test]
    fn test_first_registered_wins_on_duplicate() {
        let mut registry = MaterialRegistry::new();
        registry.define(shiny("metal", 16.0));
        registry.define(shiny("metal", 99.0));

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.lookup("metal").unwrap().shininess, 16.0);
    }

    #[test]
    fn test_serde_round_trip() {
        let material = shiny("paper", 4.0);
        let text = ron::to_string(&material).unwrap();
        let back: Material = ron::from_str(&text).unwrap();
        assert_eq!(material, back);
    }
}
