/// Camera - fly-through viewpoint driven by player input.
///
/// Holds a position and a yaw/pitch orientation in a right-handed world and
/// derives the `front`, `right` and `up` basis from the angles. The basis is
/// recomputed at construction and after every rotation; translation and zoom
/// leave it untouched.
///
/// The camera is owned by the host (see `AppContext`), never by a global.

use glam::{Mat4, Vec3};

/// Default yaw in degrees (looking down -Z)
pub const DEFAULT_YAW: f32 = -90.0;
/// Default pitch in degrees
pub const DEFAULT_PITCH: f32 = 0.0;
/// Default movement speed in world units per second
pub const DEFAULT_MOVEMENT_SPEED: f32 = 2.5;
/// Default mouse sensitivity in degrees per input unit
pub const DEFAULT_MOUSE_SENSITIVITY: f32 = 0.1;
/// Default (and widest) field of view in degrees
pub const DEFAULT_ZOOM: f32 = 45.0;

/// Pitch bound applied by constrained rotations, in degrees
pub const PITCH_LIMIT: f32 = 89.0;
/// Narrowest field of view in degrees
pub const MIN_ZOOM: f32 = 1.0;
/// Widest field of view in degrees
pub const MAX_ZOOM: f32 = 45.0;

/// Direction of a translation request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CameraMovement {
    /// Along `front`
    Forward,
    /// Against `front`
    Backward,
    /// Against `right`
    Left,
    /// Along `right`
    Right,
}

/// Tunable camera parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraConfig {
    /// World units per second
    pub movement_speed: f32,
    /// Degrees per input unit (usually per pixel of mouse motion)
    pub mouse_sensitivity: f32,
    /// Initial field of view in degrees, clamped to [MIN_ZOOM, MAX_ZOOM]
    pub zoom: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            movement_speed: DEFAULT_MOVEMENT_SPEED,
            mouse_sensitivity: DEFAULT_MOUSE_SENSITIVITY,
            zoom: DEFAULT_ZOOM,
        }
    }
}

/// Euler-angle fly-through camera.
///
/// Invariant: `front`, `right` and `up` are a right-handed orthonormal basis
/// matching the current `yaw`/`pitch`, as long as `world_up` is not collinear
/// with `front`.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    position: Vec3,
    front: Vec3,
    up: Vec3,
    right: Vec3,
    world_up: Vec3,
    yaw: f32,
    pitch: f32,
    movement_speed: f32,
    mouse_sensitivity: f32,
    zoom: f32,
}

impl Camera {
    /// Create a camera with default speed, sensitivity and zoom.
    ///
    /// Angles are in degrees. No input is rejected; `world_up` must simply
    /// not be collinear with the resulting front direction.
    pub fn new(position: Vec3, world_up: Vec3, yaw: f32, pitch: f32) -> Self {
        Self::with_config(position, world_up, yaw, pitch, &CameraConfig::default())
    }

    /// Create a camera with explicit speed, sensitivity and zoom.
    pub fn with_config(
        position: Vec3,
        world_up: Vec3,
        yaw: f32,
        pitch: f32,
        config: &CameraConfig,
    ) -> Self {
        let mut camera = Self {
            position,
            front: Vec3::NEG_Z,
            up: world_up,
            right: Vec3::X,
            world_up,
            yaw,
            pitch,
            movement_speed: config.movement_speed,
            mouse_sensitivity: config.mouse_sensitivity,
            zoom: config.zoom.clamp(MIN_ZOOM, MAX_ZOOM),
        };
        camera.update_vectors();
        camera
    }

    // ===== GETTERS =====

    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Unit view direction.
    pub fn front(&self) -> Vec3 {
        self.front
    }

    /// Unit up direction of the camera (not the world up).
    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Unit right direction.
    pub fn right(&self) -> Vec3 {
        self.right
    }

    /// Reference up direction given at construction.
    pub fn world_up(&self) -> Vec3 {
        self.world_up
    }

    /// Yaw in degrees. Unbounded.
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Pitch in degrees.
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn movement_speed(&self) -> f32 {
        self.movement_speed
    }

    pub fn mouse_sensitivity(&self) -> f32 {
        self.mouse_sensitivity
    }

    /// Field of view in degrees, always within [MIN_ZOOM, MAX_ZOOM].
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    // ===== MATRICES =====

    /// Look-at transform from `position` toward `position + front`.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    /// OpenGL-convention perspective projection using `zoom` as vertical FOV.
    pub fn projection_matrix(&self, aspect_ratio: f32, z_near: f32, z_far: f32) -> Mat4 {
        Mat4::perspective_rh_gl(self.zoom.to_radians(), aspect_ratio, z_near, z_far)
    }

    // ===== MUTATORS =====

    /// Teleport the camera. Orientation is unchanged.
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    pub fn set_movement_speed(&mut self, speed: f32) {
        self.movement_speed = speed;
    }

    pub fn set_mouse_sensitivity(&mut self, sensitivity: f32) {
        self.mouse_sensitivity = sensitivity;
    }

    /// Translate along the current basis by `movement_speed * delta_time`.
    ///
    /// A negative `delta_time` is not rejected and moves the other way.
    pub fn move_position(&mut self, direction: CameraMovement, delta_time: f32) {
        let velocity = self.movement_speed * delta_time;
        match direction {
            CameraMovement::Forward => self.position += self.front * velocity,
            CameraMovement::Backward => self.position -= self.front * velocity,
            CameraMovement::Left => self.position -= self.right * velocity,
            CameraMovement::Right => self.position += self.right * velocity,
        }
    }

    /// Rotate by input offsets with pitch kept within ±PITCH_LIMIT.
    pub fn rotate(&mut self, x_offset: f32, y_offset: f32) {
        self.rotate_with(x_offset, y_offset, true);
    }

    /// Rotate by input offsets scaled by `mouse_sensitivity`.
    ///
    /// `x_offset` turns yaw, `y_offset` turns pitch. With `constrain_pitch`
    /// the pitch is clamped to [-PITCH_LIMIT, PITCH_LIMIT] so the basis never
    /// flips at ±90°.
    pub fn rotate_with(&mut self, x_offset: f32, y_offset: f32, constrain_pitch: bool) {
        self.yaw += x_offset * self.mouse_sensitivity;
        self.pitch += y_offset * self.mouse_sensitivity;

        if constrain_pitch {
            self.pitch = self.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        }

        self.update_vectors();
    }

    /// Narrow (positive offset) or widen (negative offset) the field of view.
    ///
    /// The offset is subtracted, so a forward scroll zooms in. The result is
    /// clamped to [MIN_ZOOM, MAX_ZOOM].
    pub fn adjust_zoom(&mut self, offset: f32) {
        self.zoom = (self.zoom - offset).clamp(MIN_ZOOM, MAX_ZOOM);
    }

    fn update_vectors(&mut self) {
        let (yaw, pitch) = (self.yaw.to_radians(), self.pitch.to_radians());
        let front = Vec3::new(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        );
        self.front = front.normalize();
        self.right = self.front.cross(self.world_up).normalize();
        self.up = self.right.cross(self.front).normalize();
    }
}

impl Default for Camera {
    /// Camera at the origin, Y up, looking down -Z.
    fn default() -> Self {
        Self::new(Vec3::ZERO, Vec3::Y, DEFAULT_YAW, DEFAULT_PITCH)
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
