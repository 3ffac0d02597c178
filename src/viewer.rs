use glam::Mat4;

use crate::camera::{Camera, MovementState, Projection};
use crate::config::ViewerConfig;
use crate::core::Controller;
use crate::slider::FovSlider;

/// Where mouse input is routed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerMode {
    /// Cursor hidden and confined; motion drives the camera
    Captured,
    /// Cursor visible; the fov slider is interactive
    Free,
}

impl PointerMode {
    pub fn toggled(self) -> Self {
        match self {
            PointerMode::Captured => PointerMode::Free,
            PointerMode::Free => PointerMode::Captured,
        }
    }
}

/// Discrete input the loop reacts to, positions in logical pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Quit,
    ToggleUiMode,
    PointerPressed { x: f32, y: f32 },
    PointerMoved { x: f32, y: f32 },
    PointerReleased,
}

/// What the caller must do after an event was handled
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EventOutcome {
    Continue,
    Quit,
    PointerModeChanged(PointerMode),
}

/// All mutable loop state, advanced once per frame by `step`
#[derive(Debug, Clone)]
pub struct ViewerState {
    config: ViewerConfig,
    camera: Camera,
    projection: Projection,
    slider: FovSlider,
    pointer_mode: PointerMode,
}

impl ViewerState {
    pub fn new(config: ViewerConfig) -> Self {
        Self {
            camera: Camera::new(config.start_position),
            projection: Projection::new(config.aspect_ratio(), config.z_near, config.z_far),
            slider: FovSlider::new(
                config.slider_rect,
                config.fov_min,
                config.fov_max,
                config.initial_fov,
            ),
            pointer_mode: PointerMode::Captured,
            config,
        }
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn slider(&self) -> &FovSlider {
        &self.slider
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    pub fn pointer_mode(&self) -> PointerMode {
        self.pointer_mode
    }

    pub fn is_ui_mode(&self) -> bool {
        self.pointer_mode == PointerMode::Free
    }

    pub fn fov(&self) -> f32 {
        self.slider.fov()
    }

    /// React to one discrete input event
    pub fn handle_event(&mut self, event: InputEvent) -> EventOutcome {
        match event {
            InputEvent::Quit => EventOutcome::Quit,
            InputEvent::ToggleUiMode => {
                self.pointer_mode = self.pointer_mode.toggled();
                // A drag never survives leaving UI mode
                self.slider.release();
                log::debug!("Pointer mode: {:?}", self.pointer_mode);
                EventOutcome::PointerModeChanged(self.pointer_mode)
            }
            InputEvent::PointerPressed { x, y } => {
                if self.is_ui_mode() {
                    self.slider.press(x, y);
                }
                EventOutcome::Continue
            }
            InputEvent::PointerMoved { x, .. } => {
                if self.is_ui_mode() && self.slider.drag_to(x) {
                    log::debug!("FOV set to {:.1}", self.slider.fov());
                }
                EventOutcome::Continue
            }
            InputEvent::PointerReleased => {
                self.slider.release();
                EventOutcome::Continue
            }
        }
    }

    /// Per-frame update: mouse-look (captured mode only), then movement
    pub fn step(&mut self, controller: &dyn Controller, mouse_delta: (f32, f32)) {
        if self.pointer_mode == PointerMode::Captured {
            self.camera.apply_mouse_delta(
                mouse_delta.0,
                mouse_delta.1,
                self.config.mouse_sensitivity,
            );
        }

        let movement = MovementState::from_controller(controller);
        self.camera
            .update(&movement, self.config.move_speed, self.config.run_multiplier);
    }

    pub fn projection_matrix(&self) -> Mat4 {
        self.projection.matrix(self.slider.fov())
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.camera.view_matrix()
    }
}
