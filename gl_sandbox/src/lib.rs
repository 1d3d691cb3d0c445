/*!
# GL Sandbox

Core types for small OpenGL scenes: a fly-through camera and a shader program
lifecycle, independent of any particular OpenGL binding.

The graphics API is reached through the [`GraphicsDevice`](sandbox::device::GraphicsDevice)
trait. Backend crates (e.g. `gl_sandbox_backend_glow`) implement it on top of a
real context; unit tests use a mock device.

## Architecture

- **Camera**: Euler-angle camera producing view and projection matrices
- **CameraController**: maps window input (winit events) onto the camera
- **ShaderProgram**: compile/link/uniform/destroy lifecycle, released on drop
- **ShaderLibrary**: named programs with bulk teardown
- **AppContext**: camera + controller + shader library, passed to the render loop

Nothing here is a global except the logger slot (see [`Sandbox`](sandbox::Sandbox)).
*/

// Internal modules
mod error;
mod runtime;
mod app_context;
pub mod log;
pub mod camera;
pub mod graphics_device;
pub mod shader;

#[cfg(test)]
mod test_support;

// Main sandbox namespace module
pub mod sandbox {
    // Error types
    pub use crate::error::{Error, Result};

    // Logger slot
    pub use crate::runtime::Sandbox;

    // Application context
    pub use crate::app_context::{AppContext, FrameMatrices, Z_NEAR, Z_FAR};

    // Logging sub-module (types only, macros live at the crate root)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger, FacadeLogger};
    }

    // Camera sub-module
    pub mod camera {
        pub use crate::camera::*;
    }

    // Shader sub-module
    pub mod shader {
        pub use crate::shader::*;
    }

    // Graphics device sub-module (backend seam)
    pub mod device {
        pub use crate::graphics_device::*;
    }
}

// Re-export math library at crate root
pub use glam;
