pub mod camera;
pub mod config;
pub mod core;
pub mod loaders;
pub mod math;
pub mod overlay;
pub mod renderer;
pub mod scene;
pub mod scenes;
pub mod slider;
pub mod types;
pub mod viewer;

pub use scene::{ModelSource, Renderable};
pub use viewer::{EventOutcome, InputEvent, PointerMode, ViewerState};
