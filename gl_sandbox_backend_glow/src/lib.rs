/*!
# GL Sandbox - glow backend

OpenGL implementation of the `GraphicsDevice` trait from `gl_sandbox`, using
the `glow` bindings.

The host creates the window and the OpenGL context (glutin, SDL, ...), makes
the context current, then wraps it:

```no_run
use std::rc::Rc;
use gl_sandbox::sandbox::device::GraphicsDevice;
use gl_sandbox::sandbox::shader::ShaderProgram;
use gl_sandbox_backend_glow::GlowGraphicsDevice;

# fn get_proc_address(_: &str) -> *const std::ffi::c_void { std::ptr::null() }
let device: Rc<dyn GraphicsDevice> =
    Rc::new(unsafe { GlowGraphicsDevice::from_loader_function(get_proc_address) });
let program = ShaderProgram::from_files(device, "shaders/lit.vert", "shaders/lit.frag")?;
# Ok::<(), gl_sandbox::sandbox::Error>(())
```
*/

mod glow_graphics_device;

pub use glow_graphics_device::GlowGraphicsDevice;
