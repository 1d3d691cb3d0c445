/// Graphics device module - the graphics API seam and its value types

// Module declarations
pub mod graphics_device;
pub mod shader;

// Re-export everything from graphics_device.rs
pub use graphics_device::*;

// Re-export from other modules
pub use shader::*;

// Mock graphics device for tests (no GPU required)
#[cfg(test)]
pub mod mock_graphics_device;
