pub mod clock;
pub mod controller;
pub mod gpu_context;
pub mod input_adapter;
pub mod timer;
pub mod window;

pub use clock::{Clock, FpsCounter};
pub use controller::{Button, Controller, HeldButtons};
pub use gpu_context::GpuContext;
pub use input_adapter::WinitController;
pub use timer::{FrameLimiter, Throttled};
pub use window::{WindowContext, WindowDimensions};
