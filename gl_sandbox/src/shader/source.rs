/// Shader source loading from disk

use std::path::Path;

use crate::error::{Error, Result};

/// Read a GLSL source file into a string.
///
/// Unreadable or non-UTF-8 files are reported as `Error::SourceLoad`. An
/// empty file is returned as-is and left to fail compilation.
pub fn load_shader_source(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    std::fs::read_to_string(path).map_err(|e| {
        crate::sandbox_err!("gl_sandbox::shader", Error::SourceLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    })
}

#[cfg(test)]
#[path = "source_tests.rs"]
mod tests;
