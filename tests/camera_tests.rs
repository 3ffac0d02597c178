use glam::{Vec3, Vec4};
use stl_viewer::camera::{horizontal_basis, movement_vector, Camera, MovementState};
use stl_viewer::config::{MOVE_SPEED, PITCH_LIMIT, RUN_MULTIPLIER};

#[cfg(test)]
mod camera_tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    fn all_key_combinations() -> impl Iterator<Item = MovementState> {
        (0u8..32).map(|bits| MovementState {
            forward: bits & 1 != 0,
            backward: bits & 2 != 0,
            left: bits & 4 != 0,
            right: bits & 8 != 0,
            run: bits & 16 != 0,
            ..Default::default()
        })
    }

    #[test]
    fn test_pitch_stays_clamped_under_large_deltas() {
        let mut camera = Camera::new(Vec3::ZERO);
        for dy in [5000.0, -12000.0, 900.0, 1e6, -1e6] {
            camera.apply_mouse_delta(0.0, dy, 0.1);
            assert!(camera.pitch.abs() <= PITCH_LIMIT);
        }
        assert_eq!(camera.pitch, -PITCH_LIMIT);
    }

    #[test]
    fn test_yaw_is_unbounded() {
        let mut camera = Camera::new(Vec3::ZERO);
        camera.apply_mouse_delta(-10000.0, 0.0, 0.1);
        assert!((camera.yaw - 1000.0).abs() < 1e-2);
    }

    #[test]
    fn test_horizontal_step_is_zero_or_exact_speed() {
        for yaw in [0.0, 33.0, -127.5, 720.0] {
            for movement in all_key_combinations() {
                let step = movement_vector(&movement, yaw, MOVE_SPEED, RUN_MULTIPLIER);
                let length = step.length();
                let expected = if movement.run {
                    MOVE_SPEED * RUN_MULTIPLIER
                } else {
                    MOVE_SPEED
                };
                assert!(
                    length < EPSILON || (length - expected).abs() < EPSILON,
                    "yaw {} movement {:?} gave length {}",
                    yaw,
                    movement,
                    length
                );
            }
        }
    }

    #[test]
    fn test_opposing_keys_cancel() {
        let movement = MovementState {
            forward: true,
            backward: true,
            left: true,
            right: true,
            run: true,
            ..Default::default()
        };
        assert_eq!(movement_vector(&movement, 45.0, MOVE_SPEED, RUN_MULTIPLIER).length(), 0.0);
    }

    #[test]
    fn test_basis_is_orthonormal() {
        for yaw in [0.0, 10.0, 90.0, 181.0, -45.0] {
            let (forward, right) = horizontal_basis(yaw);
            assert!((forward.length() - 1.0).abs() < EPSILON);
            assert!((right.length() - 1.0).abs() < EPSILON);
            assert!(forward.dot(right).abs() < EPSILON);
        }
    }

    #[test]
    fn test_walking_forward_after_turning_left() {
        // Turning the mouse left by 900 px at 0.1 sensitivity yields yaw 90
        let mut camera = Camera::new(Vec3::new(0.0, 1.6, 5.0));
        camera.apply_mouse_delta(-900.0, 0.0, 0.1);

        let forward = MovementState {
            forward: true,
            ..Default::default()
        };
        camera.update(&forward, MOVE_SPEED, RUN_MULTIPLIER);

        assert!((camera.position.x + 0.1).abs() < EPSILON);
        assert!((camera.position.z - 5.0).abs() < EPSILON);
        assert_eq!(camera.position.y, 1.6);
    }

    #[test]
    fn test_vertical_movement_ignores_run() {
        let mut camera = Camera::new(Vec3::new(0.0, 1.6, 5.0));
        let ascend = MovementState {
            ascend: true,
            run: true,
            ..Default::default()
        };
        camera.update(&ascend, MOVE_SPEED, RUN_MULTIPLIER);
        assert!((camera.position.y - 1.7).abs() < EPSILON);

        let both = MovementState {
            ascend: true,
            descend: true,
            ..Default::default()
        };
        camera.update(&both, MOVE_SPEED, RUN_MULTIPLIER);
        assert!((camera.position.y - 1.7).abs() < EPSILON);
    }

    #[test]
    fn test_view_moves_camera_to_origin() {
        let camera = Camera {
            position: Vec3::new(3.0, 1.6, -2.0),
            yaw: 37.0,
            pitch: -12.0,
        };
        let eye = camera.view_matrix() * camera.position.extend(1.0);
        assert!(eye.truncate().length() < 1e-4);
        assert!((eye.w - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_forward_is_minus_z_in_view_space() {
        let camera = Camera {
            position: Vec3::ZERO,
            yaw: 60.0,
            pitch: 0.0,
        };
        let (forward, _) = horizontal_basis(camera.yaw);
        let ahead = Vec4::new(forward.x, 0.0, forward.y, 1.0);
        let eye = camera.view_matrix() * ahead;
        assert!(eye.x.abs() < 1e-4);
        assert!((eye.z + 1.0).abs() < 1e-4);
    }
}
