/// ShaderLibrary - the named set of shader programs used by the render loop.
///
/// Programs are owned by the library and looked up by name. `teardown()`
/// (or dropping the library) destroys them all at once at shutdown.

use std::collections::hash_map::Entry;
use std::path::Path;
use std::rc::Rc;

use rustc_hash::FxHashMap;

use crate::error::Result;
use crate::graphics_device::GraphicsDevice;
use crate::shader::shader_program::ShaderProgram;

#[derive(Debug, Default)]
pub struct ShaderLibrary {
    programs: FxHashMap<String, ShaderProgram>,
}

impl ShaderLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a program under `name`.
    ///
    /// Returns the program previously stored under that name, if any. The
    /// caller decides whether to keep it alive; dropping it releases it.
    pub fn insert(&mut self, name: impl Into<String>, program: ShaderProgram) -> Option<ShaderProgram> {
        let name = name.into();
        crate::sandbox_debug!("gl_sandbox::shader", "Shader library: '{}' -> program {}", name, program.handle());
        self.programs.insert(name, program)
    }

    /// Create a program from sources and store it under `name`.
    ///
    /// On failure the library is left unchanged, including any program
    /// already stored under `name`.
    pub fn load(
        &mut self,
        name: impl Into<String>,
        device: Rc<dyn GraphicsDevice>,
        vertex_source: &str,
        fragment_source: &str,
    ) -> Result<&ShaderProgram> {
        let program = ShaderProgram::create(device, vertex_source, fragment_source)?;
        Ok(self.store(name.into(), program))
    }

    /// Like `load()`, reading both stages from disk
    pub fn load_files(
        &mut self,
        name: impl Into<String>,
        device: Rc<dyn GraphicsDevice>,
        vertex_path: impl AsRef<Path>,
        fragment_path: impl AsRef<Path>,
    ) -> Result<&ShaderProgram> {
        let program = ShaderProgram::from_files(device, vertex_path, fragment_path)?;
        Ok(self.store(name.into(), program))
    }

    fn store(&mut self, name: String, program: ShaderProgram) -> &ShaderProgram {
        crate::sandbox_debug!("gl_sandbox::shader", "Shader library: '{}' -> program {}", name, program.handle());
        match self.programs.entry(name) {
            Entry::Occupied(mut entry) => {
                entry.insert(program);
                entry.into_mut()
            }
            Entry::Vacant(entry) => entry.insert(program),
        }
    }

    pub fn get(&self, name: &str) -> Option<&ShaderProgram> {
        self.programs.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut ShaderProgram> {
        self.programs.get_mut(name)
    }

    /// Take a program out of the library. It is released when dropped.
    pub fn remove(&mut self, name: &str) -> Option<ShaderProgram> {
        self.programs.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.programs.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.programs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.programs.is_empty()
    }

    /// Stored names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.programs.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Destroy every program and empty the library.
    pub fn teardown(&mut self) {
        if self.programs.is_empty() {
            return;
        }
        crate::sandbox_debug!("gl_sandbox::shader", "Shader library teardown ({} programs)", self.programs.len());
        for (_, mut program) in self.programs.drain() {
            program.destroy();
        }
    }
}

impl Drop for ShaderLibrary {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
#[path = "shader_library_tests.rs"]
mod tests;
