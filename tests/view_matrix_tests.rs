use free_look::camera::CameraState;
use free_look::input::{InputSample, MovementKeys};
use free_look::traits::CameraController;
use glam::{IVec2, Vec3};

const EPS: f32 = 1e-5;

#[cfg(test)]
mod view_matrix_tests {
    use super::*;

    #[test]
    fn test_layout_matches_row_vector_table() {
        let camera = CameraState::new(Vec3::new(1.0, 2.0, 3.0), Vec3::Z, Vec3::Y, 1.0);
        let rows = camera.build_view_matrix().to_cols_array_2d();

        let (r, u, l, e) = (camera.right, camera.up, camera.look, camera.eye);
        assert_eq!(rows[0], [r.x, u.x, l.x, 0.0]);
        assert_eq!(rows[1], [r.y, u.y, l.y, 0.0]);
        assert_eq!(rows[2], [r.z, u.z, l.z, 0.0]);
        assert_eq!(rows[3], [-e.dot(r), -e.dot(u), -e.dot(l), 1.0]);
    }

    #[test]
    fn test_eye_maps_to_origin() {
        let camera = CameraState::default();
        let view = camera.build_view_matrix();

        assert!(view.transform_point3(camera.eye).abs_diff_eq(Vec3::ZERO, 1e-4));
    }

    #[test]
    fn test_point_ahead_lands_on_positive_z() {
        let camera = CameraState::default();
        let view = camera.build_view_matrix();

        let ahead = camera.eye + camera.look * 10.0;
        let above = camera.eye + camera.up * 2.0;
        let beside = camera.eye + camera.right * 3.0;

        assert!(view.transform_point3(ahead).abs_diff_eq(Vec3::new(0.0, 0.0, 10.0), 1e-4));
        assert!(view.transform_point3(above).abs_diff_eq(Vec3::new(0.0, 2.0, 0.0), 1e-4));
        assert!(view.transform_point3(beside).abs_diff_eq(Vec3::new(3.0, 0.0, 0.0), 1e-4));
    }

    #[test]
    fn test_rotation_part_is_orthonormal() {
        let mut camera = CameraState::default();
        camera.sample_input(
            &InputSample::new(IVec2::ZERO, IVec2::new(37, -22), true, MovementKeys::default()),
            0.0,
        );

        let view = camera.build_view_matrix();
        let det = glam::Mat3::from_mat4(view).determinant();
        assert!((det.abs() - 1.0).abs() < EPS, "det = {}", det);
    }

    #[test]
    fn test_build_is_pure() {
        let mut camera = CameraState::default();
        camera.sample_input(
            &InputSample::new(
                IVec2::ZERO,
                IVec2::new(5, 7),
                true,
                MovementKeys {
                    forward: true,
                    ..Default::default()
                },
            ),
            0.016,
        );
        let snapshot = camera;

        let first = camera.build_view_matrix();
        let second = camera.build_view_matrix();

        assert_eq!(first.to_cols_array(), second.to_cols_array());
        assert_eq!(camera, snapshot);
    }

    #[test]
    fn test_trait_view_matches_inherent() {
        let camera = CameraState::default();
        assert_eq!(
            CameraController::view_matrix(&camera).to_cols_array(),
            camera.build_view_matrix().to_cols_array()
        );
    }
}
