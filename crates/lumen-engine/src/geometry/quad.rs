use anyhow::{anyhow, Result};
use glow::HasContext;

/// Two triangles covering clip space, `[-1, 1]` on both axes.
pub const QUAD_POSITIONS: [[f32; 2]; 6] = [
    [-1.0, -1.0],
    [1.0, -1.0],
    [-1.0, 1.0],
    [1.0, -1.0],
    [-1.0, 1.0],
    [1.0, 1.0],
];

/// Colour attribute data.
///
/// A single RGB triple against six drawn vertices: reads past the first vertex
/// are undefined. The bundled vertex shader does not declare slot 1.
pub const QUAD_COLOURS: [[f32; 3]; 1] = [[0.0, 1.0, 0.0]];

const POSITION_INDEX: u32 = 0;
const COLOUR_INDEX: u32 = 1;

/// Full-screen quad: a position buffer, a colour buffer, and the vertex array
/// that binds them to attribute slots 0 and 1.
#[derive(Debug)]
pub struct ScreenQuad {
    vertex_buffer: Option<glow::Buffer>,
    colour_buffer: Option<glow::Buffer>,
    vertex_array: Option<glow::VertexArray>,
    element_count: i32,
}

impl ScreenQuad {
    /// Allocates and fills both buffers and records the attribute layout.
    pub fn create(gl: &glow::Context) -> Result<Self> {
        let mut quad = Self {
            vertex_buffer: None,
            colour_buffer: None,
            vertex_array: None,
            element_count: QUAD_POSITIONS.len() as i32,
        };

        if let Err(e) = unsafe { quad.upload(gl) } {
            quad.destroy(gl);
            return Err(e);
        }

        Ok(quad)
    }

    unsafe fn upload(&mut self, gl: &glow::Context) -> Result<()> {
        unsafe {
            let vertex_buffer = gl.create_buffer().map_err(|e| anyhow!("vertex buffer: {e}"))?;
            self.vertex_buffer = Some(vertex_buffer);
            gl.bind_buffer(glow::ARRAY_BUFFER, Some(vertex_buffer));
            gl.buffer_data_u8_slice(
                glow::ARRAY_BUFFER,
                bytemuck::cast_slice(&QUAD_POSITIONS),
                glow::STATIC_DRAW,
            );

            let colour_buffer = gl.create_buffer().map_err(|e| anyhow!("colour buffer: {e}"))?;
            self.colour_buffer = Some(colour_buffer);
            gl.bind_buffer(glow::ARRAY_BUFFER, Some(colour_buffer));
            gl.buffer_data_u8_slice(
                glow::ARRAY_BUFFER,
                bytemuck::cast_slice(&QUAD_COLOURS),
                glow::STATIC_DRAW,
            );

            let vertex_array = gl.create_vertex_array().map_err(|e| anyhow!("vertex array: {e}"))?;
            self.vertex_array = Some(vertex_array);
            gl.bind_vertex_array(Some(vertex_array));

            gl.bind_buffer(glow::ARRAY_BUFFER, Some(vertex_buffer));
            gl.vertex_attrib_pointer_f32(POSITION_INDEX, 2, glow::FLOAT, false, 0, 0);
            gl.enable_vertex_attrib_array(POSITION_INDEX);

            gl.bind_buffer(glow::ARRAY_BUFFER, Some(colour_buffer));
            gl.vertex_attrib_pointer_f32(COLOUR_INDEX, 3, glow::FLOAT, false, 0, 0);
            gl.enable_vertex_attrib_array(COLOUR_INDEX);

            gl.bind_buffer(glow::ARRAY_BUFFER, None);
            gl.bind_vertex_array(None);
        }

        Ok(())
    }

    /// Number of vertices issued per draw.
    pub fn element_count(&self) -> i32 {
        self.element_count
    }

    /// Binds the vertex array and issues one triangle-list draw.
    ///
    /// The caller binds the program first.
    pub fn draw(&self, gl: &glow::Context) {
        unsafe {
            gl.bind_vertex_array(self.vertex_array);
            gl.draw_arrays(glow::TRIANGLES, 0, self.element_count);
            gl.bind_vertex_array(None);
        }
    }

    /// Releases the vertex array and both buffers.
    pub fn destroy(&mut self, gl: &glow::Context) {
        unsafe {
            gl.bind_vertex_array(None);
            if let Some(vao) = self.vertex_array.take() {
                gl.delete_vertex_array(vao);
            }
            if let Some(buffer) = self.vertex_buffer.take() {
                gl.delete_buffer(buffer);
            }
            if let Some(buffer) = self.colour_buffer.take() {
                gl.delete_buffer(buffer);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quad_spans_clip_space() {
        for axis in 0..2 {
            let min = QUAD_POSITIONS.iter().map(|p| p[axis]).fold(f32::MAX, f32::min);
            let max = QUAD_POSITIONS.iter().map(|p| p[axis]).fold(f32::MIN, f32::max);
            assert_eq!((min, max), (-1.0, 1.0));
        }
    }

    #[test]
    fn quad_triangles_share_the_diagonal() {
        let first: Vec<_> = QUAD_POSITIONS[..3].to_vec();
        let second: Vec<_> = QUAD_POSITIONS[3..].to_vec();
        assert!(second.contains(&first[1]));
        assert!(second.contains(&first[2]));
    }

    #[test]
    fn position_bytes_cover_six_vertices() {
        let bytes: &[u8] = bytemuck::cast_slice(&QUAD_POSITIONS);
        assert_eq!(bytes.len(), 6 * 2 * std::mem::size_of::<f32>());
    }

    #[test]
    fn colour_buffer_holds_a_single_triple() {
        let bytes: &[u8] = bytemuck::cast_slice(&QUAD_COLOURS);
        assert_eq!(bytes.len(), 3 * std::mem::size_of::<f32>());
    }
}
