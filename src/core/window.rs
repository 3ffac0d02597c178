use winit::window::{CursorGrabMode, Window};

use crate::viewer::PointerMode;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Window dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowDimensions {
    pub width: u32,
    pub height: u32,
}

impl WindowDimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Zero-sized surfaces cannot be configured (minimized windows report this)
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Window abstraction - the pieces of the native window the viewer drives
pub trait WindowContext {
    /// Get window dimensions in physical pixels
    fn dimensions(&self) -> WindowDimensions;

    /// Show or hide the cursor and confine it for mouse-look
    fn apply_pointer_mode(&self, mode: PointerMode) -> Result<()>;
}

impl WindowContext for Window {
    fn dimensions(&self) -> WindowDimensions {
        let size = self.inner_size();
        WindowDimensions::new(size.width, size.height)
    }

    fn apply_pointer_mode(&self, mode: PointerMode) -> Result<()> {
        match mode {
            PointerMode::Captured => {
                self.set_cursor_visible(false);
                // Locked is unsupported on some platforms, Confined on others
                self.set_cursor_grab(CursorGrabMode::Locked)
                    .or_else(|_| self.set_cursor_grab(CursorGrabMode::Confined))?;
            }
            PointerMode::Free => {
                self.set_cursor_grab(CursorGrabMode::None)?;
                self.set_cursor_visible(true);
            }
        }
        Ok(())
    }
}
