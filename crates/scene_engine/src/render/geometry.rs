//! Geometry provider seam for the fixed primitive set
//!
//! Mesh tessellation and vertex upload live outside this crate. Scene code
//! names one of the enumerated primitive shapes; the provider loads each
//! mesh once and issues draw calls against whatever shader, texture, and
//! transform state is currently bound.

use serde::{Deserialize, Serialize};

/// The fixed set of primitive shapes a scene can draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    /// Flat ground/backdrop plane
    Plane,
    /// Axis-aligned unit box
    Box,
    /// Capped cylinder
    Cylinder,
    /// Capped cone
    Cone,
    /// Triangular prism
    Prism,
    /// Four-sided pyramid
    Pyramid4,
    /// UV sphere
    Sphere,
    /// Cylinder with different top and bottom radii
    TaperedCylinder,
    /// Full torus
    Torus,
    /// Half torus, open along the cut
    HalfTorus,
}

impl ShapeKind {
    /// Every primitive shape, in declaration order
    pub const ALL: [Self; 10] = [
        Self::Plane,
        Self::Box,
        Self::Cylinder,
        Self::Cone,
        Self::Prism,
        Self::Pyramid4,
        Self::Sphere,
        Self::TaperedCylinder,
        Self::Torus,
        Self::HalfTorus,
    ];
}

/// Provider of primitive meshes: one-time upload, then per-object draws.
///
/// `load_mesh` uploads a shape's mesh once no matter how many times it will
/// be drawn; `draw_mesh` issues the draw call using the currently bound
/// shader/texture/transform state. Within a frame, all shader-state setters
/// for an object must complete before its `draw_mesh` call.
pub trait GeometryProvider {
    /// Upload the mesh for `shape`; repeat calls for the same shape are
    /// cheap no-ops
    fn load_mesh(&mut self, shape: ShapeKind);

    /// Draw the previously loaded mesh for `shape` with current state
    fn draw_mesh(&mut self, shape: ShapeKind);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_lists_every_shape_once() {
        let mut seen = std::collections::HashSet::new();
        for shape in ShapeKind::ALL {
            assert!(seen.insert(shape));
        }
        assert_eq!(seen.len(), 10);
    }

    #[test]
    fn test_shape_serde_names() {
        assert_eq!(ron::to_string(&ShapeKind::TaperedCylinder).unwrap(), "TaperedCylinder");
        let back: ShapeKind = ron::from_str("HalfTorus").unwrap();
        assert_eq!(back, ShapeKind::HalfTorus);
    }
}
