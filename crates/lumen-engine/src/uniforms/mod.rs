//! Named uniform uploads.
//!
//! Uploads go through [`UniformSink`] so the policy in [`UniformUploader`]
//! (best-effort, warn once per missing name) does not depend on a live context.

mod sink;
mod upload;

pub use sink::{GlUniforms, UniformSink};
pub use upload::UniformUploader;
