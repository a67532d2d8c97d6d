//! winit host: a fixed-size window that replays the heart.

use std::sync::Arc;
use std::time::Instant;

use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use crate::error::HeartError;
use crate::gpu::{GpuState, QuadBatch};
use crate::render::Renderer;
use crate::time::FrameClock;
use crate::{Heart, HeartConfig};

/// Builds the heart described by `config` and animates it until the window
/// is closed.
pub fn run(config: HeartConfig) -> Result<(), HeartError> {
    let heart = Heart::new(config)?;
    run_heart(heart)
}

/// Animates an already built heart until the window is closed.
pub fn run_heart(heart: Heart) -> Result<(), HeartError> {
    let event_loop = EventLoop::new()?;
    let mut app = App::new(heart);
    event_loop.run_app(&mut app)?;
    app.finish()
}

pub struct App {
    heart: Heart,
    renderer: Renderer,
    clock: FrameClock,
    batch: QuadBatch,
    window: Option<Arc<Window>>,
    gpu_state: Option<GpuState>,
    error: Option<HeartError>,
}

impl App {
    pub fn new(heart: Heart) -> Self {
        let config = heart.config();
        let clock = FrameClock::new(config.frame_delay, Instant::now());
        let batch = QuadBatch::new(config.width, config.height);
        Self {
            heart,
            renderer: Renderer::new(),
            clock,
            batch,
            window: None,
            gpu_state: None,
            error: None,
        }
    }

    /// The error that stopped the loop, if any.
    pub fn finish(self) -> Result<(), HeartError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn open_window(&mut self, event_loop: &ActiveEventLoop) -> Result<(), HeartError> {
        let config = self.heart.config();
        let window_attrs = Window::default_attributes()
            .with_title(config.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(config.width, config.height))
            .with_resizable(false);

        let window = Arc::new(event_loop.create_window(window_attrs)?);
        let gpu_state = pollster::block_on(GpuState::new(
            window.clone(),
            (config.width, config.height),
        ))?;

        self.window = Some(window);
        self.gpu_state = Some(gpu_state);
        // Start the animation from the moment the window exists.
        self.clock = FrameClock::new(config.frame_delay, Instant::now());
        Ok(())
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: HeartError) {
        log::error!("{err}");
        self.error = Some(err);
        event_loop.exit();
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        if let Some(frame) = self.clock.tick(Instant::now()) {
            self.renderer.render_frame(&self.heart, &mut self.batch, frame);
        }

        let Some(gpu_state) = &mut self.gpu_state else {
            return;
        };
        match gpu_state.render(&self.batch) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("surface lost, reconfiguring");
                gpu_state.reconfigure();
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("GPU out of memory");
                event_loop.exit();
            }
            Err(e) => log::warn!("render error: {e:?}"),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            if let Err(err) = self.open_window(event_loop) {
                self.fail(event_loop, err);
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(physical_size) => {
                if let Some(gpu_state) = &mut self.gpu_state {
                    gpu_state.resize(physical_size);
                }
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let Some(window) = &self.window else {
            return;
        };
        if self.clock.is_due(Instant::now()) {
            window.request_redraw();
            event_loop.set_control_flow(ControlFlow::Wait);
        } else {
            event_loop.set_control_flow(ControlFlow::WaitUntil(self.clock.deadline()));
        }
    }
}
