/// GraphicsDevice trait - the graphics API primitives the sandbox consumes

use crate::error::Result;
use crate::graphics_device::{
    ShaderStage, ShaderHandle, ProgramHandle, UniformLocation, UniformValue,
};

// ============================================================================
// GraphicsDevice trait
// ============================================================================

/// Graphics API primitives for shader compilation, linking and uniform writes
///
/// Implemented by backend-specific devices (e.g., GlowGraphicsDevice) and by
/// the mock device used in unit tests. The methods mirror the underlying
/// OpenGL calls one to one; the compile/link state machine lives in
/// `ShaderProgram`, not here.
///
/// The trait is deliberately not `Send`/`Sync`: an OpenGL context is bound to
/// the thread that made it current, so devices are shared with `Rc`.
pub trait GraphicsDevice {
    /// Create an empty shader object for the given stage
    fn create_shader(&self, stage: ShaderStage) -> Result<ShaderHandle>;

    /// Upload source text and compile it
    fn compile_shader(&self, shader: ShaderHandle, source: &str);

    /// Whether the last compilation succeeded
    fn shader_compile_status(&self, shader: ShaderHandle) -> bool;

    /// Compiler diagnostic text
    fn shader_info_log(&self, shader: ShaderHandle) -> String;

    /// Release a shader object
    fn delete_shader(&self, shader: ShaderHandle);

    /// Create an empty program object
    fn create_program(&self) -> Result<ProgramHandle>;

    fn attach_shader(&self, program: ProgramHandle, shader: ShaderHandle);

    fn detach_shader(&self, program: ProgramHandle, shader: ShaderHandle);

    /// Link all attached shaders
    fn link_program(&self, program: ProgramHandle);

    /// Whether the last link succeeded
    fn program_link_status(&self, program: ProgramHandle) -> bool;

    /// Linker diagnostic text
    fn program_info_log(&self, program: ProgramHandle) -> String;

    /// Release a program object
    fn delete_program(&self, program: ProgramHandle);

    /// Make a program current, or clear the current program with `None`
    fn use_program(&self, program: Option<ProgramHandle>);

    /// Look up a uniform by name. `None` when the program has no such active uniform.
    fn uniform_location(&self, program: ProgramHandle, name: &str) -> Option<UniformLocation>;

    /// Write a value to a uniform of the currently bound program
    fn write_uniform(&self, location: UniformLocation, value: &UniformValue);
}
