/// GlowGraphicsDevice - OpenGL implementation of the GraphicsDevice trait
///
/// Every call goes straight to the driver through `glow`. The context must be
/// current on the calling thread for the whole lifetime of the device.

use std::ffi::c_void;
use std::num::NonZeroU32;

use glow::HasContext;
use gl_sandbox::sandbox::{Error, Result};
use gl_sandbox::sandbox::device::{
    GraphicsDevice, ShaderStage, ShaderHandle, ProgramHandle, UniformLocation, UniformValue,
};
use gl_sandbox::{sandbox_err, sandbox_info};

const LOG_SOURCE: &str = "gl_sandbox::glow";

// ============================================================================
// Conversions
// ============================================================================

/// OpenGL shader type enum for a stage
pub(crate) fn stage_to_gl(stage: ShaderStage) -> u32 {
    match stage {
        ShaderStage::Vertex => glow::VERTEX_SHADER,
        ShaderStage::Fragment => glow::FRAGMENT_SHADER,
    }
}

/// `None` for the null handle
pub(crate) fn shader_to_native(handle: ShaderHandle) -> Option<glow::NativeShader> {
    NonZeroU32::new(handle.0).map(glow::NativeShader)
}

pub(crate) fn shader_from_native(shader: glow::NativeShader) -> ShaderHandle {
    ShaderHandle(shader.0.get())
}

/// `None` for the null handle
pub(crate) fn program_to_native(handle: ProgramHandle) -> Option<glow::NativeProgram> {
    NonZeroU32::new(handle.0).map(glow::NativeProgram)
}

pub(crate) fn program_from_native(program: glow::NativeProgram) -> ProgramHandle {
    ProgramHandle(program.0.get())
}

pub(crate) fn location_to_native(location: UniformLocation) -> glow::NativeUniformLocation {
    glow::NativeUniformLocation(location.0)
}

pub(crate) fn location_from_native(location: glow::NativeUniformLocation) -> UniformLocation {
    UniformLocation(location.0)
}

// ============================================================================
// GlowGraphicsDevice
// ============================================================================

pub struct GlowGraphicsDevice {
    gl: glow::Context,
}

impl GlowGraphicsDevice {
    /// Wrap a context that is current on this thread
    pub fn new(gl: glow::Context) -> Self {
        let (version, renderer) = unsafe {
            (gl.get_parameter_string(glow::VERSION), gl.get_parameter_string(glow::RENDERER))
        };
        sandbox_info!(LOG_SOURCE, "OpenGL {} on {}", version, renderer);
        Self { gl }
    }

    /// Load the OpenGL entry points and wrap the resulting context.
    ///
    /// # Safety
    ///
    /// A context must be current on this thread and `loader` must return
    /// valid function pointers for it.
    pub unsafe fn from_loader_function<F>(loader: F) -> Self
    where
        F: FnMut(&str) -> *const c_void,
    {
        Self::new(glow::Context::from_loader_function(loader))
    }

    /// Raw context, for draw calls issued by the host
    pub fn gl(&self) -> &glow::Context {
        &self.gl
    }
}

impl GraphicsDevice for GlowGraphicsDevice {
    fn create_shader(&self, stage: ShaderStage) -> Result<ShaderHandle> {
        let shader = unsafe { self.gl.create_shader(stage_to_gl(stage)) }.map_err(|e| {
            sandbox_err!(LOG_SOURCE, Error::BackendError(format!("Failed to create {} shader: {}", stage, e)))
        })?;
        Ok(shader_from_native(shader))
    }

    fn compile_shader(&self, shader: ShaderHandle, source: &str) {
        let Some(shader) = shader_to_native(shader) else { return };
        unsafe {
            self.gl.shader_source(shader, source);
            self.gl.compile_shader(shader);
        }
    }

    fn shader_compile_status(&self, shader: ShaderHandle) -> bool {
        shader_to_native(shader)
            .map(|s| unsafe { self.gl.get_shader_compile_status(s) })
            .unwrap_or(false)
    }

    fn shader_info_log(&self, shader: ShaderHandle) -> String {
        shader_to_native(shader)
            .map(|s| unsafe { self.gl.get_shader_info_log(s) })
            .unwrap_or_default()
    }

    fn delete_shader(&self, shader: ShaderHandle) {
        if let Some(shader) = shader_to_native(shader) {
            unsafe { self.gl.delete_shader(shader) };
        }
    }

    fn create_program(&self) -> Result<ProgramHandle> {
        let program = unsafe { self.gl.create_program() }.map_err(|e| {
            sandbox_err!(LOG_SOURCE, Error::BackendError(format!("Failed to create program: {}", e)))
        })?;
        Ok(program_from_native(program))
    }

    fn attach_shader(&self, program: ProgramHandle, shader: ShaderHandle) {
        if let (Some(program), Some(shader)) = (program_to_native(program), shader_to_native(shader)) {
            unsafe { self.gl.attach_shader(program, shader) };
        }
    }

    fn detach_shader(&self, program: ProgramHandle, shader: ShaderHandle) {
        if let (Some(program), Some(shader)) = (program_to_native(program), shader_to_native(shader)) {
            unsafe { self.gl.detach_shader(program, shader) };
        }
    }

    fn link_program(&self, program: ProgramHandle) {
        if let Some(program) = program_to_native(program) {
            unsafe { self.gl.link_program(program) };
        }
    }

    fn program_link_status(&self, program: ProgramHandle) -> bool {
        program_to_native(program)
            .map(|p| unsafe { self.gl.get_program_link_status(p) })
            .unwrap_or(false)
    }

    fn program_info_log(&self, program: ProgramHandle) -> String {
        program_to_native(program)
            .map(|p| unsafe { self.gl.get_program_info_log(p) })
            .unwrap_or_default()
    }

    fn delete_program(&self, program: ProgramHandle) {
        if let Some(program) = program_to_native(program) {
            unsafe { self.gl.delete_program(program) };
        }
    }

    fn use_program(&self, program: Option<ProgramHandle>) {
        let program = program.and_then(program_to_native);
        unsafe { self.gl.use_program(program) };
    }

    fn uniform_location(&self, program: ProgramHandle, name: &str) -> Option<UniformLocation> {
        let program = program_to_native(program)?;
        unsafe { self.gl.get_uniform_location(program, name) }.map(location_from_native)
    }

    fn write_uniform(&self, location: UniformLocation, value: &UniformValue) {
        let location = location_to_native(location);
        let location = Some(&location);
        unsafe {
            match value {
                UniformValue::Bool(v) => self.gl.uniform_1_i32(location, i32::from(*v)),
                UniformValue::Int(v) => self.gl.uniform_1_i32(location, *v),
                UniformValue::Float(v) => self.gl.uniform_1_f32(location, *v),
                UniformValue::Vec3(v) => self.gl.uniform_3_f32(location, v.x, v.y, v.z),
                UniformValue::Mat4(m) => {
                    self.gl.uniform_matrix_4_f32_slice(location, false, &m.to_cols_array())
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "glow_graphics_device_tests.rs"]
mod tests;
