use glam::{Mat4, Vec3};

use crate::input::InputSample;

/// Camera movement and control abstraction
pub trait CameraController {
    /// Fold one frame of input into the camera
    fn update(&mut self, input: &InputSample, delta_time: f32);

    /// Get the view matrix for rendering
    fn view_matrix(&self) -> Mat4;

    /// Get the camera position in world space
    fn position(&self) -> Vec3;

    /// Get the camera forward direction
    fn forward(&self) -> Vec3;
}
