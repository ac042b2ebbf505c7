use anyhow::{Context, Result};

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::core::{App, AppControl, FrameCtx, WindowCtx};
use crate::device::{GlDevice, GlInit};
use crate::input::platform::winit::translate_window_event;
use crate::input::InputState;

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
    pub resizable: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "lumen".to_string(),
            initial_size: LogicalSize::new(768.0, 768.0),
            resizable: false,
        }
    }
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Opens the window, drives `app` until it exits, and tears down.
    ///
    /// Startup failures (window, context, `App::on_start`) end the loop and
    /// are returned here.
    pub fn run<A>(config: RuntimeConfig, gl_init: GlInit, app: A) -> Result<()>
    where
        A: 'static + App,
    {
        let event_loop = EventLoop::new().context("windowing system failed to initialize")?;
        let mut state = AppState::new(config, gl_init, app);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        match state.fatal.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

struct WindowEntry {
    // Field order is drop order: the GL surface must go before its window.
    device: GlDevice,
    input_state: InputState,
    window: Window,
}

impl WindowEntry {
    fn ctx(&mut self) -> FrameCtx<'_> {
        FrameCtx {
            window: WindowCtx {
                id: self.window.id(),
                window: &self.window,
            },
            device: &mut self.device,
        }
    }
}

struct AppState<A>
where
    A: App + 'static,
{
    config: RuntimeConfig,
    gl_init: GlInit,
    app: A,

    window: Option<WindowEntry>,
    exit_requested: bool,
    fatal: Option<anyhow::Error>,
}

impl<A> AppState<A>
where
    A: App + 'static,
{
    fn new(config: RuntimeConfig, gl_init: GlInit, app: A) -> Self {
        Self {
            config,
            gl_init,
            app,
            window: None,
            exit_requested: false,
            fatal: None,
        }
    }

    fn request_exit(&mut self, event_loop: &ActiveEventLoop) {
        self.exit_requested = true;
        event_loop.exit();
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        self.fatal = Some(err);
        self.request_exit(event_loop);
    }

    fn create_window_entry(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size)
            .with_resizable(self.config.resizable);

        let (window, device) = GlDevice::create(event_loop, attrs, &self.gl_init)?;

        let info = device.info();
        log::info!(
            "OpenGL [ {} ] with GLSL [ {} ] on renderer [ {} ]",
            info.version,
            info.glsl_version,
            info.renderer
        );

        // Stored before `on_start` so `exiting` tears down whatever it created.
        let entry = self.window.insert(WindowEntry {
            device,
            input_state: InputState::default(),
            window,
        });

        self.app.on_start(&mut entry.ctx())?;

        entry.window.request_redraw();
        Ok(())
    }
}

impl<A> ApplicationHandler for AppState<A>
where
    A: App + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() || self.exit_requested {
            return;
        }

        event_loop.set_control_flow(ControlFlow::Wait);

        if let Err(e) = self.create_window_entry(event_loop) {
            self.fail(event_loop, e);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.exit_requested {
            return;
        }

        // Split borrows so the app can be called while the entry is borrowed.
        let (app, slot) = (&mut self.app, &mut self.window);

        let Some(entry) = slot.as_mut().filter(|e| e.window.id() == window_id) else {
            return;
        };

        let mut control = AppControl::Continue;

        if let Some(ev) = translate_window_event(&entry.input_state, &event) {
            entry.input_state.apply_event(&ev);
            control = app.on_input(&mut entry.ctx(), &ev);
        }

        if control == AppControl::Continue {
            match &event {
                WindowEvent::CloseRequested => control = AppControl::Exit,

                WindowEvent::Resized(new_size) => {
                    entry.device.resize(*new_size);
                    entry.window.request_redraw();
                }

                WindowEvent::ScaleFactorChanged { .. } => {
                    let new_size = entry.window.inner_size();
                    entry.device.resize(new_size);
                    entry.window.request_redraw();
                }

                WindowEvent::RedrawRequested => {
                    let mut ctx = entry.ctx();
                    control = app.on_frame(&mut ctx);
                    ctx.present();
                }

                _ => {}
            }
        }

        if control == AppControl::Exit {
            self.request_exit(event_loop);
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(entry) = self.window.take() {
            self.app.on_exit(&entry.device);
            log::debug!("window closed");
        }
    }
}
