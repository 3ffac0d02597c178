// config.rs - Viewer tuning constants
use glam::Vec3;

pub const WINDOW_TITLE: &str = "3D STL Viewer";
pub const INITIAL_WINDOW_WIDTH: u32 = 800;
pub const INITIAL_WINDOW_HEIGHT: u32 = 600;

pub const CAMERA_HEIGHT: f32 = 1.6;
pub const MOVE_SPEED: f32 = 0.1;
pub const RUN_MULTIPLIER: f32 = 2.0;
pub const MOUSE_SENSITIVITY: f32 = 0.1;
pub const PITCH_LIMIT: f32 = 89.0;

pub const INITIAL_FOV: f32 = 75.0;
pub const FOV_MIN: f32 = 30.0;
pub const FOV_MAX: f32 = 150.0;
pub const Z_NEAR: f32 = 0.1;
pub const Z_FAR: f32 = 1000.0;

pub const MODEL_SCALE: f32 = 0.05;
pub const ROOM_SIZE: f32 = 10.0;
pub const TARGET_FPS: f32 = 60.0;

/// Slider track rectangle in logical pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl SliderRect {
    pub const fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self { left, top, width, height }
    }

    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    pub fn center_y(&self) -> f32 {
        self.top + self.height * 0.5
    }

    /// Half-open containment: the right and bottom edges are outside
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.left && x < self.right() && y >= self.top && y < self.bottom()
    }
}

pub const SLIDER_RECT: SliderRect = SliderRect::new(20.0, 570.0, 200.0, 10.0);

/// Every tunable the viewer reads, gathered in one place
#[derive(Debug, Clone, Copy)]
pub struct ViewerConfig {
    pub window_width: u32,
    pub window_height: u32,
    pub start_position: Vec3,
    pub move_speed: f32,
    pub run_multiplier: f32,
    pub mouse_sensitivity: f32,
    pub initial_fov: f32,
    pub fov_min: f32,
    pub fov_max: f32,
    pub z_near: f32,
    pub z_far: f32,
    /// Display-only scale applied to STL vertex positions
    pub model_scale: f32,
    pub room_size: f32,
    pub target_fps: f32,
    pub slider_rect: SliderRect,
}

impl ViewerConfig {
    pub fn aspect_ratio(&self) -> f32 {
        self.window_width as f32 / self.window_height as f32
    }
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            window_width: INITIAL_WINDOW_WIDTH,
            window_height: INITIAL_WINDOW_HEIGHT,
            start_position: Vec3::new(0.0, CAMERA_HEIGHT, 5.0),
            move_speed: MOVE_SPEED,
            run_multiplier: RUN_MULTIPLIER,
            mouse_sensitivity: MOUSE_SENSITIVITY,
            initial_fov: INITIAL_FOV,
            fov_min: FOV_MIN,
            fov_max: FOV_MAX,
            z_near: Z_NEAR,
            z_far: Z_FAR,
            model_scale: MODEL_SCALE,
            room_size: ROOM_SIZE,
            target_fps: TARGET_FPS,
            slider_rect: SLIDER_RECT,
        }
    }
}
