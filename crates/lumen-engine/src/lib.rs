//! Lumen engine crate.
//!
//! This crate owns the platform + OpenGL runtime pieces used by the demo:
//! window and context creation, input translation, shader programs, the
//! full-screen quad, and best-effort uniform uploads.

pub mod core;
pub mod device;
pub mod geometry;
pub mod input;
pub mod logging;
pub mod shader;
pub mod uniforms;
pub mod window;
