//! Camera module - fly-through camera and its input controller.
//!
//! The sandbox does NOT store or manage cameras. They are plain values
//! owned and driven by the caller (usually through `AppContext`).

mod camera;
mod camera_controller;

pub use camera::{
    Camera, CameraConfig, CameraMovement,
    DEFAULT_YAW, DEFAULT_PITCH, DEFAULT_MOVEMENT_SPEED, DEFAULT_MOUSE_SENSITIVITY, DEFAULT_ZOOM,
    PITCH_LIMIT, MIN_ZOOM, MAX_ZOOM,
};
pub use camera_controller::{CameraController, ControllerConfig, HeldDirections, movement_for_key};
