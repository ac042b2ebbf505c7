use anyhow::{Context, Result};

use lumen_engine::core::{App, AppControl, FrameCtx};
use lumen_engine::device::{GlDevice, check_errors};
use lumen_engine::geometry::ScreenQuad;
use lumen_engine::input::InputEvent;
use lumen_engine::shader::{ShaderPaths, ShaderProgram, ShaderSources};

use crate::controller::{Outcome, command_for};
use crate::render::RenderState;
use crate::scene::SceneId;

/// The raytracing demo: one program, one quad, three scenes.
pub struct DemoApp {
    shaders: ShaderPaths,
    initial_scene: Option<SceneId>,
    state: Option<RenderState>,
}

impl DemoApp {
    pub fn new(shaders: ShaderPaths, initial_scene: Option<SceneId>) -> Self {
        Self {
            shaders,
            initial_scene,
            state: None,
        }
    }
}

fn init_shaders(gl: &glow::Context, paths: &ShaderPaths) -> Result<ShaderProgram> {
    let sources = ShaderSources::load(paths)?;
    let program = ShaderProgram::from_sources(gl, &sources)?;
    Ok(program)
}

fn init_geometry(gl: &glow::Context) -> Option<ScreenQuad> {
    match ScreenQuad::create(gl) {
        Ok(quad) => {
            if check_errors(gl) {
                log::error!("errors reported while building the screen quad");
            }
            Some(quad)
        }
        Err(e) => {
            log::error!("failed to initialize geometry: {e:#}");
            None
        }
    }
}

impl App for DemoApp {
    fn on_start(&mut self, ctx: &mut FrameCtx<'_>) -> Result<()> {
        let gl = ctx.gl();
        let program = init_shaders(gl, &self.shaders).context("could not initialize shaders")?;
        let mut state = RenderState::new(program, init_geometry(gl));

        if let Some(id) = self.initial_scene {
            log::info!("starting with {id}");
            state.select_scene(gl, id);
        }

        self.state = Some(state);
        ctx.window.request_redraw();
        Ok(())
    }

    fn on_input(&mut self, ctx: &mut FrameCtx<'_>, event: &InputEvent) -> AppControl {
        let InputEvent::Key { key, state, repeat, .. } = *event else {
            return AppControl::Continue;
        };
        let Some(command) = command_for(key, state, repeat) else {
            return AppControl::Continue;
        };
        let Some(render) = self.state.as_mut() else {
            return AppControl::Continue;
        };

        match render.apply(ctx.gl(), command) {
            Outcome::Exit => AppControl::Exit,
            Outcome::Redraw => {
                render.render(ctx.gl());
                ctx.present();
                AppControl::Continue
            }
        }
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl {
        if let Some(render) = &self.state {
            render.render(ctx.gl());
        }
        AppControl::Continue
    }

    fn on_exit(&mut self, device: &GlDevice) {
        if let Some(mut state) = self.state.take() {
            log::debug!(
                "releasing GL objects (active: {:?}, camera: {:?})",
                state.controller.active(),
                state.controller.camera()
            );
            state.destroy(device.gl());
        }
    }
}
