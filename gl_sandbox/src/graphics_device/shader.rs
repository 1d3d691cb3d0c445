/// Shader-related handle and value types shared by all graphics devices

use std::fmt;
use glam::{Mat4, Vec3};

/// Shader stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    /// Vertex shader
    Vertex,
    /// Fragment/Pixel shader
    Fragment,
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStage::Vertex => write!(f, "Vertex"),
            ShaderStage::Fragment => write!(f, "Fragment"),
        }
    }
}

/// Handle of a per-stage shader object. 0 is the null handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShaderHandle(pub u32);

impl ShaderHandle {
    pub const NULL: ShaderHandle = ShaderHandle(0);

    pub fn is_null(self) -> bool {
        self.0 == 0
    }
}

/// Handle of a linked program object. 0 is the null handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProgramHandle(pub u32);

impl ProgramHandle {
    /// The "no program / deleted" handle
    pub const NULL: ProgramHandle = ProgramHandle(0);

    pub fn is_null(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for ProgramHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Location of a uniform inside a linked program
///
/// Lookups that find nothing return `None` instead of the API's `-1` sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UniformLocation(pub u32);

/// Value written to a uniform
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UniformValue {
    /// Written as an integer (0 or 1), like GLSL expects for `bool` uniforms
    Bool(bool),
    Int(i32),
    Float(f32),
    Vec3(Vec3),
    /// Column-major 4x4 matrix
    Mat4(Mat4),
}

impl From<bool> for UniformValue {
    fn from(value: bool) -> Self {
        UniformValue::Bool(value)
    }
}

impl From<i32> for UniformValue {
    fn from(value: i32) -> Self {
        UniformValue::Int(value)
    }
}

impl From<f32> for UniformValue {
    fn from(value: f32) -> Self {
        UniformValue::Float(value)
    }
}

impl From<Vec3> for UniformValue {
    fn from(value: Vec3) -> Self {
        UniformValue::Vec3(value)
    }
}

impl From<Mat4> for UniformValue {
    fn from(value: Mat4) -> Self {
        UniformValue::Mat4(value)
    }
}
