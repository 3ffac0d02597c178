use anyhow::Result;
use std::sync::Arc;
use std::time::Instant;
use winit::{
    application::ApplicationHandler,
    event::{DeviceEvent, DeviceId, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use stl_viewer::config::{ViewerConfig, WINDOW_TITLE};
use stl_viewer::core::{
    Clock, FpsCounter, FrameLimiter, WindowContext, WindowDimensions, WinitController,
};
use stl_viewer::loaders::choose_model_source;
use stl_viewer::renderer::Renderer;
use stl_viewer::scene::Renderable;
use stl_viewer::viewer::{EventOutcome, PointerMode, ViewerState};

struct App {
    config: ViewerConfig,
    renderable: Renderable,
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    state: ViewerState,
    controller: WinitController,
    limiter: FrameLimiter,
    clock: Clock,
    fps: FpsCounter,
    error: Option<anyhow::Error>,
}

impl App {
    fn new(config: ViewerConfig, renderable: Renderable) -> Self {
        Self {
            renderable,
            window: None,
            renderer: None,
            state: ViewerState::new(config),
            controller: WinitController::default(),
            limiter: FrameLimiter::new(config.target_fps, Instant::now()),
            clock: Clock::new(),
            fps: FpsCounter::new(),
            error: None,
            config,
        }
    }

    fn apply_pointer_mode(&self, mode: PointerMode) {
        if let Some(window) = &self.window {
            if let Err(e) = window.apply_pointer_mode(mode) {
                log::warn!("Failed to apply pointer mode {:?}: {}", mode, e);
            }
        }
    }

    fn frame(&mut self) {
        // Platform-initiated redraws (expose, first show) only re-render
        if self.limiter.take_step() {
            let delta = self.clock.tick();
            if let Some(fps) = self.fps.record(delta) {
                log::debug!("FPS: {:.1}", fps);
            }

            self.state.step(&self.controller, self.controller.mouse_delta());
            self.controller.reset_deltas();
        }

        if let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) {
            if let Err(e) = renderer.render(window, &self.state) {
                log::warn!("Render error: {:#}", e);
            }
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attributes = Window::default_attributes()
            .with_title(WINDOW_TITLE)
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.config.window_width,
                self.config.window_height,
            ))
            .with_resizable(false);

        let window = match event_loop.create_window(attributes) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                self.error = Some(anyhow::Error::new(e).context("Failed to create window"));
                event_loop.exit();
                return;
            }
        };

        let renderer = match pollster::block_on(Renderer::new(window.clone(), &self.renderable)) {
            Ok(renderer) => renderer,
            Err(e) => {
                self.error = Some(e.context("Failed to initialize renderer"));
                event_loop.exit();
                return;
            }
        };

        self.controller = WinitController::new(window.scale_factor());
        self.window = Some(window);
        self.renderer = Some(renderer);
        self.apply_pointer_mode(self.state.pointer_mode());
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match &event {
            WindowEvent::Resized(size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(WindowDimensions::new(size.width, size.height));
                }
                return;
            }
            WindowEvent::RedrawRequested => {
                self.frame();
                return;
            }
            _ => {}
        }

        let Some(input) = self.controller.process_event(&event) else {
            return;
        };

        match self.state.handle_event(input) {
            EventOutcome::Quit => event_loop.exit(),
            EventOutcome::PointerModeChanged(mode) => self.apply_pointer_mode(mode),
            EventOutcome::Continue => {}
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        self.controller.process_device_event(&event);
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();
        if self.limiter.is_due(now) {
            if let Some(window) = &self.window {
                window.request_redraw();
            }
            self.limiter.advance(now);
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.limiter.deadline()));
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ViewerConfig::default();

    // The dialog blocks before any window exists
    let source = choose_model_source();
    let renderable = Renderable::load(&source, &config)?;

    let event_loop = EventLoop::new()?;
    let mut app = App::new(config, renderable);

    log::info!("Controls: WASD move, Shift run, mouse buttons down/up, Q toggles FOV slider, Escape quits");
    event_loop.run_app(&mut app)?;

    match app.error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
