use glow::HasContext;

/// Destination for uniform values, addressed by location.
pub trait UniformSink {
    type Location;

    /// Resolves a uniform by name. `None` if the program has no active uniform
    /// with that name.
    fn location(&self, name: &str) -> Option<Self::Location>;

    fn set_f32(&mut self, location: &Self::Location, value: f32);

    fn set_i32(&mut self, location: &Self::Location, value: i32);

    fn set_f32_array(&mut self, location: &Self::Location, values: &[f32]);
}

/// Uniform sink writing into a GL program.
///
/// Binds the program on construction; uniform writes apply to the current
/// program.
pub struct GlUniforms<'a> {
    gl: &'a glow::Context,
    program: glow::Program,
}

impl<'a> GlUniforms<'a> {
    pub fn new(gl: &'a glow::Context, program: glow::Program) -> Self {
        unsafe { gl.use_program(Some(program)) };
        Self { gl, program }
    }
}

impl UniformSink for GlUniforms<'_> {
    type Location = glow::UniformLocation;

    fn location(&self, name: &str) -> Option<Self::Location> {
        unsafe { self.gl.get_uniform_location(self.program, name) }
    }

    fn set_f32(&mut self, location: &Self::Location, value: f32) {
        unsafe { self.gl.uniform_1_f32(Some(location), value) };
    }

    fn set_i32(&mut self, location: &Self::Location, value: i32) {
        unsafe { self.gl.uniform_1_i32(Some(location), value) };
    }

    fn set_f32_array(&mut self, location: &Self::Location, values: &[f32]) {
        unsafe { self.gl.uniform_1_f32_slice(Some(location), values) };
    }
}
