/// ShaderProgram - a linked vertex + fragment program and its uniforms.
///
/// Lifecycle: `create()` either returns a linked program or a tagged error
/// (`ShaderCompile` for a stage, `ShaderLink` for the program). A linked
/// program stays usable until `destroy()`, after which its handle is null.
/// Dropping the program destroys it, so the GPU object is released exactly
/// once on every path.

use std::cell::RefCell;
use std::fmt;
use std::path::Path;
use std::rc::Rc;

use glam::{Mat4, Vec3};
use rustc_hash::FxHashMap;

use crate::error::{Error, Result};
use crate::graphics_device::{
    GraphicsDevice, ShaderStage, ShaderHandle, ProgramHandle, UniformLocation, UniformValue,
};
use crate::shader::source::load_shader_source;

const LOG_SOURCE: &str = "gl_sandbox::shader";

// ============================================================================
// Stage guard
// ============================================================================

/// Per-stage shader object, deleted when the guard goes out of scope
struct StageGuard<'a> {
    device: &'a dyn GraphicsDevice,
    handle: ShaderHandle,
}

impl Drop for StageGuard<'_> {
    fn drop(&mut self) {
        self.device.delete_shader(self.handle);
    }
}

fn compile_stage<'a>(
    device: &'a dyn GraphicsDevice,
    stage: ShaderStage,
    source: &str,
) -> Result<StageGuard<'a>> {
    let guard = StageGuard {
        device,
        handle: device.create_shader(stage)?,
    };

    device.compile_shader(guard.handle, source);
    if !device.shader_compile_status(guard.handle) {
        let log = device.shader_info_log(guard.handle);
        crate::sandbox_bail!(LOG_SOURCE, Error::ShaderCompile { stage, log });
    }

    Ok(guard)
}

// ============================================================================
// ShaderProgram
// ============================================================================

pub struct ShaderProgram {
    device: Rc<dyn GraphicsDevice>,
    handle: ProgramHandle,
    /// Uniform name -> location, `None` for names the program does not have
    uniform_cache: RefCell<FxHashMap<String, Option<UniformLocation>>>,
}

impl ShaderProgram {
    /// Compile both stages and link them into a program.
    ///
    /// # Errors
    ///
    /// * `ShaderCompile { stage, log }` - a stage failed to compile. The vertex
    ///   stage is compiled first, so a broken vertex shader is reported even if
    ///   the fragment shader is broken too.
    /// * `ShaderLink(log)` - both stages compiled but linking failed
    /// * `BackendError` - the device could not create an object
    ///
    /// Intermediate shader objects are released on every path.
    pub fn create(
        device: Rc<dyn GraphicsDevice>,
        vertex_source: &str,
        fragment_source: &str,
    ) -> Result<Self> {
        let vertex = compile_stage(&*device, ShaderStage::Vertex, vertex_source)?;
        let fragment = compile_stage(&*device, ShaderStage::Fragment, fragment_source)?;

        // Owned from here on: an early return drops (and deletes) the program
        let program = Self {
            device: Rc::clone(&device),
            handle: device.create_program()?,
            uniform_cache: RefCell::new(FxHashMap::default()),
        };

        device.attach_shader(program.handle, vertex.handle);
        device.attach_shader(program.handle, fragment.handle);
        device.link_program(program.handle);
        device.detach_shader(program.handle, vertex.handle);
        device.detach_shader(program.handle, fragment.handle);

        if !device.program_link_status(program.handle) {
            let log = device.program_info_log(program.handle);
            crate::sandbox_bail!(LOG_SOURCE, Error::ShaderLink(log));
        }

        crate::sandbox_debug!(LOG_SOURCE, "Shader program {} linked", program.handle);
        Ok(program)
    }

    /// Load both stages from disk, then `create()`.
    ///
    /// Unreadable files fail with `Error::SourceLoad` before the device is
    /// touched.
    pub fn from_files(
        device: Rc<dyn GraphicsDevice>,
        vertex_path: impl AsRef<Path>,
        fragment_path: impl AsRef<Path>,
    ) -> Result<Self> {
        let vertex_source = load_shader_source(vertex_path)?;
        let fragment_source = load_shader_source(fragment_path)?;
        Self::create(device, &vertex_source, &fragment_source)
    }

    // ===== STATE =====

    /// Program handle (`ProgramHandle::NULL` once destroyed)
    pub fn handle(&self) -> ProgramHandle {
        self.handle
    }

    pub fn is_destroyed(&self) -> bool {
        self.handle.is_null()
    }

    // ===== BINDING =====

    /// Make this program current for draws and uniform writes
    pub fn bind(&self) {
        if self.warn_if_destroyed("bind") {
            return;
        }
        self.device.use_program(Some(self.handle));
    }

    /// Clear the current program
    pub fn unbind(&self) {
        if self.warn_if_destroyed("unbind") {
            return;
        }
        self.device.use_program(None);
    }

    // ===== UNIFORMS =====

    /// Look up a uniform location, caching the answer.
    pub fn uniform_location(&self, name: &str) -> Option<UniformLocation> {
        if let Some(cached) = self.uniform_cache.borrow().get(name) {
            return *cached;
        }

        let location = self.device.uniform_location(self.handle, name);
        if location.is_none() {
            crate::sandbox_trace!(LOG_SOURCE,
                "Uniform '{}' not active in program {}, writes will be skipped", name, self.handle);
        }
        self.uniform_cache.borrow_mut().insert(name.to_string(), location);
        location
    }

    /// Write a uniform of the program.
    ///
    /// The program must be bound. Names the program does not declare (or that
    /// the compiler optimized away) are ignored.
    pub fn set_uniform(&self, name: &str, value: impl Into<UniformValue>) {
        if self.warn_if_destroyed("set_uniform") {
            return;
        }
        if let Some(location) = self.uniform_location(name) {
            self.device.write_uniform(location, &value.into());
        }
    }

    pub fn set_bool(&self, name: &str, value: bool) {
        self.set_uniform(name, value);
    }

    pub fn set_int(&self, name: &str, value: i32) {
        self.set_uniform(name, value);
    }

    pub fn set_float(&self, name: &str, value: f32) {
        self.set_uniform(name, value);
    }

    pub fn set_vec3(&self, name: &str, value: Vec3) {
        self.set_uniform(name, value);
    }

    pub fn set_mat4(&self, name: &str, value: Mat4) {
        self.set_uniform(name, value);
    }

    // ===== RELEASE =====

    /// Release the GPU program. Calling it again is a no-op.
    pub fn destroy(&mut self) {
        if self.handle.is_null() {
            return;
        }
        self.device.delete_program(self.handle);
        crate::sandbox_debug!(LOG_SOURCE, "Shader program {} destroyed", self.handle);
        self.handle = ProgramHandle::NULL;
        self.uniform_cache.borrow_mut().clear();
    }

    fn warn_if_destroyed(&self, operation: &str) -> bool {
        if self.is_destroyed() {
            crate::sandbox_warn!(LOG_SOURCE, "{} called on a destroyed shader program, ignored", operation);
            return true;
        }
        false
    }
}

impl fmt::Debug for ShaderProgram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShaderProgram")
            .field("handle", &self.handle)
            .field("cached_uniforms", &self.uniform_cache.borrow().len())
            .finish()
    }
}

impl Drop for ShaderProgram {
    fn drop(&mut self) {
        self.destroy();
    }
}

#[cfg(test)]
#[path = "shader_program_tests.rs"]
mod tests;
