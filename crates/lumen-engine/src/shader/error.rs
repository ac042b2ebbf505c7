use std::fmt;
use std::path::PathBuf;

use crate::device::GlError;

use super::ShaderStage;

/// Failure while building a shader program.
///
/// Compile and link variants carry the driver's info log verbatim.
#[derive(Debug, Clone, PartialEq)]
pub enum ShaderError {
    /// The source file was missing, unreadable, or empty.
    EmptySource { stage: ShaderStage, path: PathBuf },
    /// The driver refused to allocate a shader or program object.
    Create { what: &'static str, reason: String },
    Compile { stage: ShaderStage, log: String },
    Link { log: String },
    /// GL error flags raised during setup.
    Gl(Vec<GlError>),
}

impl fmt::Display for ShaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySource { stage, path } => {
                write!(f, "no {stage} shader source loaded from {}", path.display())
            }
            Self::Create { what, reason } => write!(f, "failed to create {what}: {reason}"),
            Self::Compile { stage, log } => write!(f, "failed to compile {stage} shader: {}", log.trim_end()),
            Self::Link { log } => write!(f, "failed to link shader program: {}", log.trim_end()),
            Self::Gl(errors) => {
                f.write_str("OpenGL errors during shader setup:")?;
                for err in errors {
                    write!(f, " {err}")?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ShaderError {}
