/// Mock GraphicsDevice for unit tests (no GPU required)
///
/// This mock device allows testing ShaderProgram and ShaderLibrary without a
/// real OpenGL context. It imitates just enough of a GLSL driver to be useful:
/// - compilation fails for empty sources, sources without `void main` and
///   sources with unbalanced braces
/// - linking fails when a fragment `in` varying has no matching vertex `out`
/// - `uniform <type> <name>;` declarations become active uniforms
///
/// Every call is recorded, and live objects are tracked so tests can check
/// that nothing leaks.

use std::cell::{Cell, RefCell};
use rustc_hash::FxHashMap;

use crate::error::{Error, Result};
use crate::graphics_device::{
    GraphicsDevice, ShaderStage, ShaderHandle, ProgramHandle, UniformLocation, UniformValue,
};

// ============================================================================
// Mock objects
// ============================================================================

#[derive(Debug, Clone)]
pub struct MockShaderObject {
    pub stage: ShaderStage,
    pub source: String,
    pub compiled: bool,
    pub info_log: String,
}

#[derive(Debug, Clone, Default)]
pub struct MockProgramObject {
    pub attached: Vec<u32>,
    pub linked: bool,
    pub info_log: String,
    /// Active uniform names, index = location
    pub uniforms: Vec<String>,
}

/// A uniform write as seen by the device
#[derive(Debug, Clone, PartialEq)]
pub struct MockUniformWrite {
    /// Program bound at the time of the write
    pub bound: Option<ProgramHandle>,
    pub location: UniformLocation,
    pub value: UniformValue,
}

// ============================================================================
// Mock GraphicsDevice
// ============================================================================

#[derive(Default)]
pub struct MockGraphicsDevice {
    next_id: Cell<u32>,
    shaders: RefCell<FxHashMap<u32, MockShaderObject>>,
    programs: RefCell<FxHashMap<u32, MockProgramObject>>,
    program_deletes: RefCell<FxHashMap<u32, u32>>,
    bound: Cell<Option<ProgramHandle>>,
    writes: RefCell<Vec<MockUniformWrite>>,
    calls: RefCell<Vec<String>>,
    fail_create_program: Cell<bool>,
}

impl MockGraphicsDevice {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next `create_program` calls fail
    pub fn set_fail_create_program(&self, fail: bool) {
        self.fail_create_program.set(fail);
    }

    /// Recorded call log
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    /// Number of recorded calls starting with the given prefix
    pub fn call_count(&self, prefix: &str) -> usize {
        self.calls.borrow().iter().filter(|c| c.starts_with(prefix)).count()
    }

    pub fn live_shader_count(&self) -> usize {
        self.shaders.borrow().len()
    }

    pub fn live_program_count(&self) -> usize {
        self.programs.borrow().len()
    }

    pub fn shader(&self, handle: ShaderHandle) -> Option<MockShaderObject> {
        self.shaders.borrow().get(&handle.0).cloned()
    }

    pub fn program(&self, handle: ProgramHandle) -> Option<MockProgramObject> {
        self.programs.borrow().get(&handle.0).cloned()
    }

    /// How many times `delete_program` was called for this handle
    pub fn program_delete_count(&self, handle: ProgramHandle) -> u32 {
        self.program_deletes.borrow().get(&handle.0).copied().unwrap_or(0)
    }

    pub fn bound_program(&self) -> Option<ProgramHandle> {
        self.bound.get()
    }

    pub fn uniform_writes(&self) -> Vec<MockUniformWrite> {
        self.writes.borrow().clone()
    }

    /// Last value written to `name` while `program` was bound
    pub fn uniform_value(&self, program: ProgramHandle, name: &str) -> Option<UniformValue> {
        let location = {
            let programs = self.programs.borrow();
            let index = programs.get(&program.0)?.uniforms.iter().position(|u| u == name)?;
            UniformLocation(index as u32)
        };
        self.writes
            .borrow()
            .iter()
            .rev()
            .find(|w| w.bound == Some(program) && w.location == location)
            .map(|w| w.value)
    }

    fn record(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }

    fn allocate_id(&self) -> u32 {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        id
    }
}

// ============================================================================
// Fake GLSL front-end
// ============================================================================

/// Check a source the way a (very forgiving) compiler would
fn mock_compile(source: &str) -> std::result::Result<(), String> {
    if source.trim().is_empty() {
        return Err("0:1(1): error: empty shader source".to_string());
    }
    if !source.contains("void main") {
        return Err("0:1(1): error: missing entry point 'main'".to_string());
    }

    let mut depth: i64 = 0;
    for (line_no, line) in source.lines().enumerate() {
        for c in line.chars() {
            match c {
                '{' => depth += 1,
                '}' => depth -= 1,
                _ => {}
            }
            if depth < 0 {
                return Err(format!("0:{}(1): error: syntax error, unexpected '}}'", line_no + 1));
            }
        }
    }
    if depth != 0 {
        return Err("0:1(1): error: syntax error, unexpected end of file".to_string());
    }
    Ok(())
}

/// Collect `(type, name)` pairs of declarations using the given qualifier
fn declarations(source: &str, qualifier: &str) -> Vec<(String, String)> {
    let mut result = Vec::new();
    for line in source.lines() {
        let code = line.split("//").next().unwrap_or("").trim();
        if !code.ends_with(';') || (code.contains('=') && !code.starts_with("layout")) {
            continue;
        }
        let tokens: Vec<&str> = code.split_whitespace().collect();
        if let Some(pos) = tokens.iter().position(|t| *t == qualifier) {
            if tokens.len() >= pos + 3 {
                let ty = tokens[pos + 1].to_string();
                let name = tokens[pos + 2].trim_end_matches(';').to_string();
                result.push((ty, name));
            }
        }
    }
    result
}

// ============================================================================
// GraphicsDevice implementation
// ============================================================================

impl GraphicsDevice for MockGraphicsDevice {
    fn create_shader(&self, stage: ShaderStage) -> Result<ShaderHandle> {
        let id = self.allocate_id();
        self.shaders.borrow_mut().insert(id, MockShaderObject {
            stage,
            source: String::new(),
            compiled: false,
            info_log: String::new(),
        });
        self.record(format!("create_shader({}) -> {}", stage, id));
        Ok(ShaderHandle(id))
    }

    fn compile_shader(&self, shader: ShaderHandle, source: &str) {
        self.record(format!("compile_shader({})", shader.0));
        if let Some(object) = self.shaders.borrow_mut().get_mut(&shader.0) {
            object.source = source.to_string();
            match mock_compile(source) {
                Ok(()) => {
                    object.compiled = true;
                    object.info_log.clear();
                }
                Err(log) => {
                    object.compiled = false;
                    object.info_log = log;
                }
            }
        }
    }

    fn shader_compile_status(&self, shader: ShaderHandle) -> bool {
        self.shaders.borrow().get(&shader.0).map(|s| s.compiled).unwrap_or(false)
    }

    fn shader_info_log(&self, shader: ShaderHandle) -> String {
        self.shaders.borrow().get(&shader.0).map(|s| s.info_log.clone()).unwrap_or_default()
    }

    fn delete_shader(&self, shader: ShaderHandle) {
        self.record(format!("delete_shader({})", shader.0));
        self.shaders.borrow_mut().remove(&shader.0);
    }

    fn create_program(&self) -> Result<ProgramHandle> {
        if self.fail_create_program.get() {
            self.record("create_program() -> error".to_string());
            return Err(Error::BackendError("mock device refused to create a program".to_string()));
        }
        let id = self.allocate_id();
        self.programs.borrow_mut().insert(id, MockProgramObject::default());
        self.record(format!("create_program() -> {}", id));
        Ok(ProgramHandle(id))
    }

    fn attach_shader(&self, program: ProgramHandle, shader: ShaderHandle) {
        self.record(format!("attach_shader({}, {})", program.0, shader.0));
        if let Some(object) = self.programs.borrow_mut().get_mut(&program.0) {
            object.attached.push(shader.0);
        }
    }

    fn detach_shader(&self, program: ProgramHandle, shader: ShaderHandle) {
        self.record(format!("detach_shader({}, {})", program.0, shader.0));
        if let Some(object) = self.programs.borrow_mut().get_mut(&program.0) {
            object.attached.retain(|id| *id != shader.0);
        }
    }

    fn link_program(&self, program: ProgramHandle) {
        self.record(format!("link_program({})", program.0));

        let shaders = self.shaders.borrow();
        let mut programs = self.programs.borrow_mut();
        let Some(object) = programs.get_mut(&program.0) else {
            return;
        };

        let stage_source = |stage: ShaderStage| {
            object
                .attached
                .iter()
                .filter_map(|id| shaders.get(id))
                .find(|s| s.stage == stage && s.compiled)
                .map(|s| s.source.clone())
        };

        let (vertex, fragment) = match (stage_source(ShaderStage::Vertex), stage_source(ShaderStage::Fragment)) {
            (Some(v), Some(f)) => (v, f),
            _ => {
                object.linked = false;
                object.info_log = "error: program needs a compiled vertex and fragment shader".to_string();
                return;
            }
        };

        let outputs = declarations(&vertex, "out");
        for (ty, name) in declarations(&fragment, "in") {
            match outputs.iter().find(|(_, out_name)| *out_name == name) {
                None => {
                    object.linked = false;
                    object.info_log = format!(
                        "error: fragment shader input '{}' is not written by the vertex shader",
                        name
                    );
                    return;
                }
                Some((out_ty, _)) if *out_ty != ty => {
                    object.linked = false;
                    object.info_log = format!(
                        "error: type mismatch for varying '{}' ({} vs {})",
                        name, out_ty, ty
                    );
                    return;
                }
                Some(_) => {}
            }
        }

        let mut uniforms = Vec::new();
        for (_, name) in declarations(&vertex, "uniform").into_iter().chain(declarations(&fragment, "uniform")) {
            if !uniforms.contains(&name) {
                uniforms.push(name);
            }
        }

        object.linked = true;
        object.info_log.clear();
        object.uniforms = uniforms;
    }

    fn program_link_status(&self, program: ProgramHandle) -> bool {
        self.programs.borrow().get(&program.0).map(|p| p.linked).unwrap_or(false)
    }

    fn program_info_log(&self, program: ProgramHandle) -> String {
        self.programs.borrow().get(&program.0).map(|p| p.info_log.clone()).unwrap_or_default()
    }

    fn delete_program(&self, program: ProgramHandle) {
        self.record(format!("delete_program({})", program.0));
        *self.program_deletes.borrow_mut().entry(program.0).or_insert(0) += 1;
        self.programs.borrow_mut().remove(&program.0);
        if self.bound.get() == Some(program) {
            self.bound.set(None);
        }
    }

    fn use_program(&self, program: Option<ProgramHandle>) {
        match program {
            Some(handle) => self.record(format!("use_program({})", handle.0)),
            None => self.record("use_program(none)".to_string()),
        }
        self.bound.set(program);
    }

    fn uniform_location(&self, program: ProgramHandle, name: &str) -> Option<UniformLocation> {
        self.record(format!("uniform_location({}, {})", program.0, name));
        let programs = self.programs.borrow();
        let object = programs.get(&program.0)?;
        if !object.linked {
            return None;
        }
        object
            .uniforms
            .iter()
            .position(|u| u == name)
            .map(|index| UniformLocation(index as u32))
    }

    fn write_uniform(&self, location: UniformLocation, value: &UniformValue) {
        self.record(format!("write_uniform({})", location.0));
        self.writes.borrow_mut().push(MockUniformWrite {
            bound: self.bound.get(),
            location,
            value: *value,
        });
    }
}

#[cfg(test)]
#[path = "mock_graphics_device_tests.rs"]
mod tests;
