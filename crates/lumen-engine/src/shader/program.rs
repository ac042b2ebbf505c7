use glow::HasContext;

use crate::device::drain_errors;

use super::{ShaderError, ShaderSources, ShaderStage};

/// A linked vertex + fragment program and the stage objects it was built from.
///
/// Handles are `None` until created and again after [`destroy`](Self::destroy),
/// so teardown is safe on a never-built or already-destroyed program.
#[derive(Debug, Default)]
pub struct ShaderProgram {
    vertex: Option<glow::Shader>,
    fragment: Option<glow::Shader>,
    program: Option<glow::Program>,
}

impl ShaderProgram {
    /// Compiles both stages and links them.
    ///
    /// On failure every object created so far is released before returning.
    pub fn from_sources(gl: &glow::Context, sources: &ShaderSources) -> Result<Self, ShaderError> {
        let mut program = Self::default();

        if let Err(e) = program.build(gl, sources) {
            program.destroy(gl);
            return Err(e);
        }

        Ok(program)
    }

    fn build(&mut self, gl: &glow::Context, sources: &ShaderSources) -> Result<(), ShaderError> {
        let vertex = compile(gl, ShaderStage::Vertex, &sources.vertex)?;
        self.vertex = Some(vertex);

        let fragment = compile(gl, ShaderStage::Fragment, &sources.fragment)?;
        self.fragment = Some(fragment);

        self.program = Some(link(gl, vertex, fragment)?);

        let errors = drain_errors(gl);
        if !errors.is_empty() {
            return Err(ShaderError::Gl(errors));
        }

        Ok(())
    }

    /// The linked program object, if built.
    pub fn handle(&self) -> Option<glow::Program> {
        self.program
    }

    /// Makes this program current.
    pub fn bind(&self, gl: &glow::Context) {
        unsafe { gl.use_program(self.program) };
    }

    /// Unbinds, detaches, and deletes all owned objects.
    pub fn destroy(&mut self, gl: &glow::Context) {
        unsafe {
            gl.use_program(None);

            if let Some(program) = self.program.take() {
                for shader in [self.vertex, self.fragment].into_iter().flatten() {
                    gl.detach_shader(program, shader);
                }
                gl.delete_program(program);
            }
            if let Some(vertex) = self.vertex.take() {
                gl.delete_shader(vertex);
            }
            if let Some(fragment) = self.fragment.take() {
                gl.delete_shader(fragment);
            }
        }
    }
}

fn compile(gl: &glow::Context, stage: ShaderStage, source: &str) -> Result<glow::Shader, ShaderError> {
    unsafe {
        let shader = gl
            .create_shader(stage.gl_kind())
            .map_err(|reason| ShaderError::Create {
                what: "shader object",
                reason,
            })?;

        gl.shader_source(shader, source);
        gl.compile_shader(shader);

        if gl.get_shader_compile_status(shader) {
            return Ok(shader);
        }

        let log = gl.get_shader_info_log(shader);
        gl.delete_shader(shader);

        log::error!("error compiling {stage} shader:\n{log}");
        log::debug!("{stage} shader source:\n{source}");

        Err(ShaderError::Compile { stage, log })
    }
}

fn link(gl: &glow::Context, vertex: glow::Shader, fragment: glow::Shader) -> Result<glow::Program, ShaderError> {
    unsafe {
        let program = gl.create_program().map_err(|reason| ShaderError::Create {
            what: "program object",
            reason,
        })?;

        gl.attach_shader(program, vertex);
        gl.attach_shader(program, fragment);
        gl.link_program(program);

        if gl.get_program_link_status(program) {
            return Ok(program);
        }

        let log = gl.get_program_info_log(program);
        gl.delete_program(program);

        log::error!("error linking shader program:\n{log}");

        Err(ShaderError::Link { log })
    }
}
