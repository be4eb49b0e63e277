//! First-person free-look camera.
//!
//! The camera keeps an explicit basis (`look`, `right`, `up`) next to the eye
//! position. Mouse deltas rotate the basis, held keys translate the eye, and
//! the basis is rebuilt from `look` and `up` at the end of every sample so
//! rounding error from repeated rotation never accumulates.

use glam::{Mat4, Quat, Vec3, Vec4};

use crate::input::InputSample;
use crate::traits::CameraController;

/// Pixels of pointer travel per degree of rotation
pub const PIXELS_PER_DEGREE: f32 = 3.0;
/// World units per second
pub const DEFAULT_MOVE_SPEED: f32 = 25.0;

/// Startup values for a [`CameraState`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraConfig {
    pub eye: Vec3,
    pub look: Vec3,
    pub up: Vec3,
    pub move_speed: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            eye: Vec3::new(5.0, 5.0, -5.0),
            look: Vec3::new(-0.5, -0.5, 0.5),
            up: Vec3::Y,
            move_speed: DEFAULT_MOVE_SPEED,
        }
    }
}

/// Mutable camera record, owned by the render loop.
///
/// After [`CameraState::sample_input`] returns, `look`, `right` and `up` are
/// unit length and mutually perpendicular.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraState {
    pub eye: Vec3,
    pub look: Vec3,
    pub up: Vec3,
    pub right: Vec3,
    pub move_speed: f32,
}

impl CameraState {
    /// Seed a camera. `look` and `up` only need to be roughly perpendicular;
    /// the basis is squared up immediately.
    pub fn new(eye: Vec3, look: Vec3, up: Vec3, move_speed: f32) -> Self {
        let mut camera = Self {
            eye,
            look,
            up,
            right: Vec3::X,
            move_speed,
        };
        camera.reorthonormalize();
        camera
    }

    pub fn from_config(config: &CameraConfig) -> Self {
        Self::new(config.eye, config.look, config.up, config.move_speed)
    }

    /// Fold one frame of input into the camera.
    ///
    /// Pitch (about the current `right`) is applied before yaw (about world
    /// up, never the local up, so roll cannot creep in). Translation uses the
    /// rotated but not yet renormalized `look`, and the `right` from the
    /// previous frame. Held keys add up: diagonal motion is not normalized.
    pub fn sample_input(&mut self, input: &InputSample, elapsed_seconds: f32) {
        if input.rotating {
            let delta = input.pointer_delta();

            if delta.y != 0 {
                let pitch = Quat::from_axis_angle(
                    self.right.normalize(),
                    (delta.y as f32 / PIXELS_PER_DEGREE).to_radians(),
                );
                self.look = pitch * self.look;
                self.up = pitch * self.up;
            }

            if delta.x != 0 {
                let yaw = Quat::from_axis_angle(
                    Vec3::Y,
                    (delta.x as f32 / PIXELS_PER_DEGREE).to_radians(),
                );
                self.look = yaw * self.look;
                self.up = yaw * self.up;
            }
        }

        let step = self.move_speed * elapsed_seconds;
        let look = self.look;
        let right = self.right;
        let keys = &input.keys;

        if keys.forward {
            self.eye += look * step;
        }
        if keys.backward {
            self.eye -= look * step;
        }
        if keys.strafe_left {
            self.eye -= right * step;
        }
        if keys.strafe_right {
            self.eye += right * step;
        }
        if keys.up {
            self.eye.y += step;
        }
        if keys.down {
            self.eye.y -= step;
        }

        self.reorthonormalize();

        log::trace!("camera eye={:?} look={:?}", self.eye, self.look);
    }

    /// Rebuild `right` and `up` from `look` and the current `up`.
    pub fn reorthonormalize(&mut self) {
        self.look = self.look.normalize();
        self.right = self.up.cross(self.look).normalize();
        self.up = self.look.cross(self.right).normalize();
    }

    /// View transform for the current basis.
    ///
    /// Laid out the Direct3D way (row vectors, translation in the last row),
    /// which in glam's column-major storage means the columns below:
    /// `to_cols_array_2d()` returns the rows `(rx ux lx 0)`, `(ry uy ly 0)`,
    /// `(rz uz lz 0)`, `(-r.e -u.e -l.e 1)`. `transform_point3` maps a world
    /// point to `(right, up, look)` coordinates relative to the eye.
    pub fn build_view_matrix(&self) -> Mat4 {
        let (r, u, l) = (self.right, self.up, self.look);

        Mat4::from_cols(
            Vec4::new(r.x, u.x, l.x, 0.0),
            Vec4::new(r.y, u.y, l.y, 0.0),
            Vec4::new(r.z, u.z, l.z, 0.0),
            Vec4::new(-self.eye.dot(r), -self.eye.dot(u), -self.eye.dot(l), 1.0),
        )
    }
}

impl Default for CameraState {
    fn default() -> Self {
        Self::from_config(&CameraConfig::default())
    }
}

impl CameraController for CameraState {
    fn update(&mut self, input: &InputSample, delta_time: f32) {
        self.sample_input(input, delta_time);
    }

    fn view_matrix(&self) -> Mat4 {
        self.build_view_matrix()
    }

    fn position(&self) -> Vec3 {
        self.eye
    }

    fn forward(&self) -> Vec3 {
        self.look
    }
}
