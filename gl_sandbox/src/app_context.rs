/// AppContext - everything the render loop needs, passed explicitly.
///
/// Holds the active camera, its input controller and the shader library.
/// The host creates one context, hands `&mut AppContext` to its event and
/// render callbacks, and calls `shutdown()` (or drops it) before the graphics
/// context goes away.

use glam::Mat4;

use crate::camera::{Camera, CameraController};
use crate::error::{Error, Result};
use crate::shader::{ShaderLibrary, ShaderProgram};

/// Near clip plane distance used by `frame_matrices()`
pub const Z_NEAR: f32 = 0.1;
/// Far clip plane distance used by `frame_matrices()`
pub const Z_FAR: f32 = 100.0;

/// Per-frame camera matrices
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameMatrices {
    pub projection: Mat4,
    pub view: Mat4,
}

#[derive(Debug, Default)]
pub struct AppContext {
    pub camera: Camera,
    pub controller: CameraController,
    pub shaders: ShaderLibrary,
}

impl AppContext {
    pub fn new(camera: Camera, controller: CameraController) -> Self {
        Self {
            camera,
            controller,
            shaders: ShaderLibrary::new(),
        }
    }

    /// Projection (from the camera zoom) and view matrices for this frame
    pub fn frame_matrices(&self, aspect_ratio: f32) -> FrameMatrices {
        FrameMatrices {
            projection: self.camera.projection_matrix(aspect_ratio, Z_NEAR, Z_FAR),
            view: self.camera.view_matrix(),
        }
    }

    /// Advance held-key movement by one frame
    pub fn update(&mut self, delta_time: f32) {
        self.controller.update(&mut self.camera, delta_time);
    }

    /// Bind a program and upload the camera uniforms.
    ///
    /// Writes `projection`, `view`, `model` and `viewPos`. Uniforms the
    /// program does not declare are skipped. Returns the bound program so the
    /// caller can set material uniforms before drawing.
    ///
    /// # Errors
    ///
    /// `InvalidResource` if no program is stored under `program_name`.
    pub fn upload_camera(
        &self,
        program_name: &str,
        aspect_ratio: f32,
        model: Mat4,
    ) -> Result<&ShaderProgram> {
        let Some(program) = self.shaders.get(program_name) else {
            crate::sandbox_bail!("gl_sandbox::app_context",
                Error::InvalidResource(format!("no shader program named '{}'", program_name)));
        };

        let matrices = self.frame_matrices(aspect_ratio);
        program.bind();
        program.set_mat4("projection", matrices.projection);
        program.set_mat4("view", matrices.view);
        program.set_mat4("model", model);
        program.set_vec3("viewPos", self.camera.position());
        Ok(program)
    }

    /// Release every shader program. The camera state is kept.
    pub fn shutdown(&mut self) {
        crate::sandbox_info!("gl_sandbox::app_context", "Shutting down ({} shader programs)", self.shaders.len());
        self.shaders.teardown();
    }
}

#[cfg(test)]
#[path = "app_context_tests.rs"]
mod tests;
