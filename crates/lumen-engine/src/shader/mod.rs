//! Shader loading, compilation, and linking.
//!
//! Source loading is pure file IO and can be exercised without a context;
//! everything in `program` needs a current GL context.

mod error;
mod program;
mod source;

pub use error::ShaderError;
pub use program::ShaderProgram;
pub use source::{load_source, ShaderPaths, ShaderSources, ShaderStage};
