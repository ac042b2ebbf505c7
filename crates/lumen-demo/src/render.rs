use glow::HasContext;

use lumen_engine::device::check_errors;
use lumen_engine::geometry::ScreenQuad;
use lumen_engine::shader::ShaderProgram;
use lumen_engine::uniforms::GlUniforms;

use crate::controller::{Command, Controller, Outcome};
use crate::scene::SceneId;

/// Everything the render step needs: GL handles plus the controller that
/// keeps uniforms current.
pub struct RenderState {
    pub controller: Controller,
    program: ShaderProgram,
    /// `None` when geometry setup failed; frames then only clear.
    quad: Option<ScreenQuad>,
}

impl RenderState {
    pub fn new(program: ShaderProgram, quad: Option<ScreenQuad>) -> Self {
        Self {
            controller: Controller::new(),
            program,
            quad,
        }
    }

    /// Applies `command` against the program's uniforms.
    pub fn apply(&mut self, gl: &glow::Context, command: Command) -> Outcome {
        let Some(program) = self.program.handle() else {
            log::warn!("shader program is gone; ignoring {command:?}");
            return Outcome::Redraw;
        };
        let mut sink = GlUniforms::new(gl, program);
        self.controller.apply(&mut sink, command)
    }

    pub fn select_scene(&mut self, gl: &glow::Context, id: SceneId) {
        self.apply(gl, Command::SelectScene(id));
    }

    /// Clears, draws the quad through the program, and logs any GL errors.
    pub fn render(&self, gl: &glow::Context) {
        unsafe { gl.clear(glow::COLOR_BUFFER_BIT) };

        self.program.bind(gl);
        if let Some(quad) = &self.quad {
            quad.draw(gl);
        }
        unsafe { gl.use_program(None) };

        check_errors(gl);
    }

    /// Releases the quad and the program. Safe to call more than once.
    pub fn destroy(&mut self, gl: &glow::Context) {
        if let Some(mut quad) = self.quad.take() {
            quad.destroy(gl);
        }
        self.program.destroy(gl);
    }
}
