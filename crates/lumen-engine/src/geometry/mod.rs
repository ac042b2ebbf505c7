//! Static GPU geometry.

mod quad;

pub use quad::{ScreenQuad, QUAD_COLOURS, QUAD_POSITIONS};
