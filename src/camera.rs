use glam::{Mat4, Vec2, Vec3};

use crate::config::PITCH_LIMIT;
use crate::core::{Button, Controller};

/// Level-based movement intent read from the held buttons each frame
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MovementState {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    pub run: bool,
    pub descend: bool,
    pub ascend: bool,
}

impl MovementState {
    pub fn from_controller(controller: &dyn Controller) -> Self {
        Self {
            forward: controller.is_down(Button::KeyW),
            backward: controller.is_down(Button::KeyS),
            left: controller.is_down(Button::KeyA),
            right: controller.is_down(Button::KeyD),
            run: controller.is_down(Button::Shift),
            descend: controller.is_down(Button::MouseLeft),
            ascend: controller.is_down(Button::MouseRight),
        }
    }

    const fn to_direction(positive: bool, negative: bool) -> f32 {
        (positive as i32 - negative as i32) as f32
    }

    /// Vertical direction: +1 ascending, -1 descending, 0 when both or neither
    pub const fn vertical(&self) -> f32 {
        Self::to_direction(self.ascend, self.descend)
    }
}

/// Horizontal (x, z) forward and right unit vectors for a yaw in degrees
///
/// Yaw 0 faces -Z; increasing yaw turns left.
pub fn horizontal_basis(yaw_degrees: f32) -> (Vec2, Vec2) {
    let angle = (-yaw_degrees).to_radians();
    let forward = Vec2::new(angle.sin(), -angle.cos());
    let right = Vec2::new(angle.cos(), angle.sin());
    (forward, right)
}

/// Horizontal displacement (x, z) for one frame
///
/// Opposing keys cancel through the vector sum; any non-zero sum is
/// normalized so diagonal movement is no faster than straight movement.
pub fn movement_vector(
    movement: &MovementState,
    yaw_degrees: f32,
    move_speed: f32,
    run_multiplier: f32,
) -> Vec2 {
    let (forward, right) = horizontal_basis(yaw_degrees);

    let mut direction = Vec2::ZERO;
    if movement.forward {
        direction += forward;
    }
    if movement.backward {
        direction -= forward;
    }
    if movement.right {
        direction += right;
    }
    if movement.left {
        direction -= right;
    }

    let speed = if movement.run {
        move_speed * run_multiplier
    } else {
        move_speed
    };

    let length = direction.length();
    if length > 0.0 {
        direction / length * speed
    } else {
        Vec2::ZERO
    }
}

/// First-person camera; angles are in degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    pub yaw: f32,
    /// Positive pitch looks down
    pub pitch: f32,
}

impl Camera {
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            yaw: 0.0,
            pitch: 0.0,
        }
    }

    /// Mouse-look from a pixel delta (screen y grows downward)
    pub fn apply_mouse_delta(&mut self, dx: f32, dy: f32, sensitivity: f32) {
        self.yaw -= dx * sensitivity;
        self.pitch = (self.pitch + dy * sensitivity).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Integrate one frame of movement; nothing constrains the position
    pub fn update(&mut self, movement: &MovementState, move_speed: f32, run_multiplier: f32) {
        let horizontal = movement_vector(movement, self.yaw, move_speed, run_multiplier);
        self.position.x += horizontal.x;
        self.position.z += horizontal.y;
        // Vertical flight ignores the run modifier
        self.position.y += movement.vertical() * move_speed;
    }

    /// World-to-view transform: pitch, then yaw, then the inverse camera translation
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_rotation_x(self.pitch.to_radians())
            * Mat4::from_rotation_y((-self.yaw).to_radians())
            * Mat4::from_translation(-self.position)
    }
}

/// Perspective parameters that stay fixed for a run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub aspect: f32,
    pub z_near: f32,
    pub z_far: f32,
}

impl Projection {
    pub fn new(aspect: f32, z_near: f32, z_far: f32) -> Self {
        Self {
            aspect,
            z_near,
            z_far,
        }
    }

    /// Right-handed perspective with a vertical field of view in degrees
    pub fn matrix(&self, fov_degrees: f32) -> Mat4 {
        Mat4::perspective_rh(fov_degrees.to_radians(), self.aspect, self.z_near, self.z_far)
    }
}
