//! Shader module - program lifecycle, uniforms and the named program library.

mod shader_program;
mod shader_library;
mod source;

pub use shader_program::ShaderProgram;
pub use shader_library::ShaderLibrary;
pub use source::load_shader_source;
