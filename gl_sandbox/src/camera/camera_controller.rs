/// CameraController - translates window input events into Camera calls.
///
/// Key presses only record which directions are held; the actual translation
/// happens once per frame in `update()` so movement speed does not depend on
/// the keyboard repeat rate. Mouse and scroll input is applied immediately.

use winit::event::{ElementState, MouseScrollDelta};
use winit::keyboard::{KeyCode, PhysicalKey};

use super::camera::{Camera, CameraMovement};

/// Controller tuning
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControllerConfig {
    /// Pixels of touchpad scrolling counted as one wheel line
    pub pixels_per_line: f32,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self { pixels_per_line: 20.0 }
    }
}

/// Movement directions currently held down
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeldDirections {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
}

impl HeldDirections {
    fn set(&mut self, direction: CameraMovement, held: bool) {
        match direction {
            CameraMovement::Forward => self.forward = held,
            CameraMovement::Backward => self.backward = held,
            CameraMovement::Left => self.left = held,
            CameraMovement::Right => self.right = held,
        }
    }

    /// Held directions in a fixed order
    pub fn iter(&self) -> impl Iterator<Item = CameraMovement> {
        [
            (self.forward, CameraMovement::Forward),
            (self.backward, CameraMovement::Backward),
            (self.left, CameraMovement::Left),
            (self.right, CameraMovement::Right),
        ]
        .into_iter()
        .filter_map(|(held, direction)| held.then_some(direction))
    }

    pub fn any(&self) -> bool {
        self.forward || self.backward || self.left || self.right
    }
}

/// Movement direction bound to a key (WASD and arrow keys)
pub fn movement_for_key(key: KeyCode) -> Option<CameraMovement> {
    match key {
        KeyCode::KeyW | KeyCode::ArrowUp => Some(CameraMovement::Forward),
        KeyCode::KeyS | KeyCode::ArrowDown => Some(CameraMovement::Backward),
        KeyCode::KeyA | KeyCode::ArrowLeft => Some(CameraMovement::Left),
        KeyCode::KeyD | KeyCode::ArrowRight => Some(CameraMovement::Right),
        _ => None,
    }
}

/// Input-to-camera adapter owned next to the camera by the host
#[derive(Debug, Clone, Default)]
pub struct CameraController {
    config: ControllerConfig,
    held: HeldDirections,
    last_cursor: Option<(f64, f64)>,
}

impl CameraController {
    pub fn new(config: ControllerConfig) -> Self {
        Self {
            config,
            held: HeldDirections::default(),
            last_cursor: None,
        }
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn held(&self) -> HeldDirections {
        self.held
    }

    /// Record a key press or release.
    ///
    /// Returns `true` when the key is a movement binding.
    pub fn handle_key(&mut self, key: PhysicalKey, state: ElementState) -> bool {
        let PhysicalKey::Code(code) = key else {
            return false;
        };
        match movement_for_key(code) {
            Some(direction) => {
                self.held.set(direction, state.is_pressed());
                true
            }
            None => false,
        }
    }

    /// Release every held direction (e.g. when the window loses focus).
    pub fn release_all(&mut self) {
        self.held = HeldDirections::default();
    }

    /// Apply held movement for one frame.
    pub fn update(&self, camera: &mut Camera, delta_time: f32) {
        for direction in self.held.iter() {
            camera.move_position(direction, delta_time);
        }
    }

    /// Rotate from an absolute cursor position.
    ///
    /// The first sample after construction or `reset_cursor()` only seeds the
    /// reference point. Screen y grows downward, hence the reversed y offset.
    pub fn handle_cursor_moved(&mut self, camera: &mut Camera, x: f64, y: f64) {
        if let Some((last_x, last_y)) = self.last_cursor {
            let x_offset = (x - last_x) as f32;
            let y_offset = (last_y - y) as f32;
            camera.rotate(x_offset, y_offset);
        }
        self.last_cursor = Some((x, y));
    }

    /// Rotate from a raw device motion delta.
    pub fn handle_mouse_motion(&mut self, camera: &mut Camera, dx: f64, dy: f64) {
        camera.rotate(dx as f32, -(dy as f32));
    }

    /// Zoom from a scroll event. Scrolling forward (positive y) zooms in.
    pub fn handle_scroll(&mut self, camera: &mut Camera, delta: MouseScrollDelta) {
        let offset = match delta {
            MouseScrollDelta::LineDelta(_, y) => y,
            MouseScrollDelta::PixelDelta(position) => position.y as f32 / self.config.pixels_per_line,
        };
        camera.adjust_zoom(offset);
    }

    /// Forget the last cursor sample.
    pub fn reset_cursor(&mut self) {
        self.last_cursor = None;
    }
}

#[cfg(test)]
#[path = "camera_controller_tests.rs"]
mod tests;
