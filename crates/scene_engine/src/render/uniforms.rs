//! Shader uniform sink seam
//!
//! The active shader program's uniform set is modeled as an explicit context
//! object rather than ambient global state: every setter takes the sink it
//! writes to, so multiple shader contexts can coexist and be tested in
//! isolation.
//!
//! Uniform names form a fixed protocol shared with the shader source; the
//! [`names`] module is the single place those strings live.

use std::collections::HashMap;

use crate::foundation::math::{Mat4, Vec2, Vec3, Vec4};

/// Uniform names declared by the scene shader program.
///
/// These must match the shader's declared interface exactly; a typo here
/// shows up as a visually wrong render, not a compile error.
pub mod names {
    /// Model matrix for the next draw
    pub const MODEL: &str = "model";
    /// Flat object color, used when texturing is off
    pub const OBJECT_COLOR: &str = "objectColor";
    /// Sampler for the object's texture slot
    pub const OBJECT_TEXTURE: &str = "objectTexture";
    /// Switches the fragment shader between flat color and texture sampling
    pub const USE_TEXTURE: &str = "bUseTexture";
    /// Enables the Phong lighting path
    pub const USE_LIGHTING: &str = "bUseLighting";
    /// Scale applied to texture coordinates at sample time
    pub const UV_SCALE: &str = "UVscale";
}

/// Destination for named uniform writes on an active shader program.
///
/// Implementations wrap a real graphics API (`glUniform*` calls against a
/// bound program, for instance) or record writes for inspection. Setters
/// take `&mut self`: uniform state is mutable shader context, and the type
/// system should say so.
pub trait UniformSink {
    /// Set a boolean uniform
    fn set_bool(&mut self, name: &str, value: bool);

    /// Set an integer uniform
    fn set_int(&mut self, name: &str, value: i32);

    /// Set a float uniform
    fn set_float(&mut self, name: &str, value: f32);

    /// Set a 2-component vector uniform
    fn set_vec2(&mut self, name: &str, value: Vec2);

    /// Set a 3-component vector uniform
    fn set_vec3(&mut self, name: &str, value: Vec3);

    /// Set a 4-component vector uniform
    fn set_vec4(&mut self, name: &str, value: Vec4);

    /// Set a 4x4 matrix uniform
    fn set_mat4(&mut self, name: &str, value: &Mat4);

    /// Set a 2D sampler uniform to a texture slot index.
    ///
    /// A slot of `-1` is the "no texture resolved" sentinel; backends should
    /// pass it through unchanged so the miss stays observable.
    fn set_sampler(&mut self, name: &str, slot: i32);
}

/// A single recorded uniform value
#[derive(Debug, Clone, PartialEq)]
pub enum UniformValue {
    /// Boolean uniform
    Bool(bool),
    /// Integer uniform
    Int(i32),
    /// Float uniform
    Float(f32),
    /// 2-component vector uniform
    Vec2(Vec2),
    /// 3-component vector uniform
    Vec3(Vec3),
    /// 4-component vector uniform
    Vec4(Vec4),
    /// 4x4 matrix uniform
    Mat4(Mat4),
    /// Sampler slot uniform
    Sampler(i32),
}

/// In-memory [`UniformSink`] that keeps the last value written per name.
///
/// Used by tests to assert on binder output and by headless tools to dry-run
/// a frame without a graphics context.
#[derive(Debug, Default)]
pub struct UniformRecorder {
    values: HashMap<String, UniformValue>,
    writes: usize,
}

impl UniformRecorder {
    /// Create an empty recorder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Last value written under `name`, if any
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&UniformValue> {
        self.values.get(name)
    }

    /// Number of distinct uniform names written so far
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether nothing has been written yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Total number of writes, counting overwrites
    #[must_use]
    pub const fn write_count(&self) -> usize {
        self.writes
    }

    fn record(&mut self, name: &str, value: UniformValue) {
        log::trace!("uniform {} <- {:?}", name, value);
        self.values.insert(name.to_string(), value);
        self.writes += 1;
    }
}

impl UniformSink for UniformRecorder {
    fn set_bool(&mut self, name: &str, value: bool) {
        self.record(name, UniformValue::Bool(value));
    }

    fn set_int(&mut self, name: &str, value: i32) {
        self.record(name, UniformValue::Int(value));
    }

    fn set_float(&mut self, name: &str, value: f32) {
        self.record(name, UniformValue::Float(value));
    }

    fn set_vec2(&mut self, name: &str, value: Vec2) {
        self.record(name, UniformValue::Vec2(value));
    }

    fn set_vec3(&mut self, name: &str, value: Vec3) {
        self.record(name, UniformValue::Vec3(value));
    }

    fn set_vec4(&mut self, name: &str, value: Vec4) {
        self.record(name, UniformValue::Vec4(value));
    }

    fn set_mat4(&mut self, name: &str, value: &Mat4) {
        self.record(name, UniformValue::Mat4(*value));
    }

    fn set_sampler(&mut self, name: &str, slot: i32) {
        self.record(name, UniformValue::Sampler(slot));
    }
}
