//! GL device + surface management.
//!
//! This module is responsible for:
//! - creating the window together with a GL context and surface
//! - loading GL entry points through `glow`
//! - swapping buffers and reporting GL error flags

mod error;
mod gl;
mod init;

pub use error::{check_errors, drain_errors, GlError};
pub use gl::{GlDevice, GlInfo};
pub use init::GlInit;
