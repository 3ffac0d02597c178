use crate::config::SliderRect;

/// Field-of-view slider; the handle position and fov move together
///
/// `fov = fov_min + (handle_x - left) / width * (fov_max - fov_min)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FovSlider {
    rect: SliderRect,
    fov_min: f32,
    fov_max: f32,
    handle_x: f32,
    dragging: bool,
}

impl FovSlider {
    pub fn new(rect: SliderRect, fov_min: f32, fov_max: f32, initial_fov: f32) -> Self {
        let mut slider = Self {
            rect,
            fov_min,
            fov_max,
            handle_x: rect.left,
            dragging: false,
        };
        slider.set_fov(initial_fov);
        slider
    }

    pub fn rect(&self) -> SliderRect {
        self.rect
    }

    pub fn handle_x(&self) -> f32 {
        self.handle_x
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Current field of view in degrees, derived from the handle
    pub fn fov(&self) -> f32 {
        self.fov_for_handle(self.handle_x)
    }

    /// Affine map from a handle position (clamped to the track) to degrees
    pub fn fov_for_handle(&self, handle_x: f32) -> f32 {
        let x = handle_x.clamp(self.rect.left, self.rect.right());
        self.fov_min + (x - self.rect.left) / self.rect.width * (self.fov_max - self.fov_min)
    }

    /// Inverse of `fov_for_handle`
    pub fn handle_for_fov(&self, fov: f32) -> f32 {
        let fov = fov.clamp(self.fov_min, self.fov_max);
        self.rect.left + (fov - self.fov_min) / (self.fov_max - self.fov_min) * self.rect.width
    }

    /// Move the handle to represent `fov`, clamped to the slider's range
    pub fn set_fov(&mut self, fov: f32) {
        self.handle_x = self.handle_for_fov(fov);
    }

    /// A press inside the track starts a drag; returns whether it did
    pub fn press(&mut self, x: f32, y: f32) -> bool {
        if self.rect.contains(x, y) {
            self.dragging = true;
        }
        self.dragging
    }

    /// Pointer motion while dragging moves the handle; returns whether fov changed
    pub fn drag_to(&mut self, x: f32) -> bool {
        if !self.dragging {
            return false;
        }
        let handle_x = x.clamp(self.rect.left, self.rect.right());
        let changed = handle_x != self.handle_x;
        self.handle_x = handle_x;
        changed
    }

    /// Any button release ends the drag
    pub fn release(&mut self) {
        self.dragging = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SLIDER_RECT;

    fn slider() -> FovSlider {
        FovSlider::new(SLIDER_RECT, 30.0, 150.0, 75.0)
    }

    #[test]
    fn test_initial_handle_matches_fov() {
        let slider = slider();
        assert!((slider.handle_x() - 95.0).abs() < 1e-4);
        assert!((slider.fov() - 75.0).abs() < 1e-4);
        assert!(!slider.is_dragging());
    }

    #[test]
    fn test_track_ends_map_to_range_limits() {
        let slider = slider();
        assert_eq!(slider.fov_for_handle(20.0), 30.0);
        assert_eq!(slider.fov_for_handle(220.0), 150.0);
        assert_eq!(slider.fov_for_handle(-500.0), 30.0);
        assert_eq!(slider.fov_for_handle(900.0), 150.0);
    }

    #[test]
    fn test_press_outside_track_does_not_drag() {
        let mut slider = slider();
        assert!(!slider.press(300.0, 575.0));
        assert!(!slider.drag_to(20.0));
        assert!((slider.fov() - 75.0).abs() < 1e-4);
    }

    #[test]
    fn test_drag_clamps_to_track() {
        let mut slider = slider();
        assert!(slider.press(100.0, 575.0));

        assert!(slider.drag_to(1000.0));
        assert_eq!(slider.handle_x(), 220.0);
        assert_eq!(slider.fov(), 150.0);

        slider.drag_to(-40.0);
        assert_eq!(slider.handle_x(), 20.0);
        assert_eq!(slider.fov(), 30.0);
    }

    #[test]
    fn test_release_ends_drag() {
        let mut slider = slider();
        slider.press(100.0, 575.0);
        slider.release();
        assert!(!slider.is_dragging());
        assert!(!slider.drag_to(150.0));
    }

    #[test]
    fn test_set_fov_clamps() {
        let mut slider = slider();
        slider.set_fov(10.0);
        assert_eq!(slider.handle_x(), 20.0);
        slider.set_fov(400.0);
        assert_eq!(slider.handle_x(), 220.0);
    }
}
