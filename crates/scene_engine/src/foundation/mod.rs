//! Foundation utilities shared across the engine

pub mod math;

pub use math::{Mat4, Mat4Ext, Point3, Transform, Vec2, Vec3, Vec4};
