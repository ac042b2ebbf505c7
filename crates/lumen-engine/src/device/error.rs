use std::fmt;

use glow::HasContext;

/// A single OpenGL error flag as reported by `glGetError`.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum GlError {
    InvalidEnum,
    InvalidValue,
    InvalidOperation,
    InvalidFramebufferOperation,
    OutOfMemory,
    /// Any code outside the core set above.
    Unknown(u32),
}

impl GlError {
    /// Maps a raw error code. `glow::NO_ERROR` has no mapping.
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            glow::NO_ERROR => None,
            glow::INVALID_ENUM => Some(Self::InvalidEnum),
            glow::INVALID_VALUE => Some(Self::InvalidValue),
            glow::INVALID_OPERATION => Some(Self::InvalidOperation),
            glow::INVALID_FRAMEBUFFER_OPERATION => Some(Self::InvalidFramebufferOperation),
            glow::OUT_OF_MEMORY => Some(Self::OutOfMemory),
            other => Some(Self::Unknown(other)),
        }
    }
}

impl fmt::Display for GlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEnum => f.write_str("GL_INVALID_ENUM"),
            Self::InvalidValue => f.write_str("GL_INVALID_VALUE"),
            Self::InvalidOperation => f.write_str("GL_INVALID_OPERATION"),
            Self::InvalidFramebufferOperation => f.write_str("GL_INVALID_FRAMEBUFFER_OPERATION"),
            Self::OutOfMemory => f.write_str("GL_OUT_OF_MEMORY"),
            Self::Unknown(code) => write!(f, "[unknown error code 0x{code:04x}]"),
        }
    }
}

impl std::error::Error for GlError {}

/// Upper bound on drained flags. A lost context can report errors forever.
const MAX_DRAINED: usize = 32;

/// Drains every pending error flag from the context.
pub fn drain_errors(gl: &glow::Context) -> Vec<GlError> {
    let mut errors = Vec::new();
    while errors.len() < MAX_DRAINED {
        let code = unsafe { gl.get_error() };
        match GlError::from_code(code) {
            Some(err) => errors.push(err),
            None => break,
        }
    }
    errors
}

/// Drains and logs pending GL errors. Returns `true` if any were pending.
///
/// GL errors are advisory here: callers decide whether they matter.
pub fn check_errors(gl: &glow::Context) -> bool {
    let errors = drain_errors(gl);
    for err in &errors {
        log::error!("OpenGL error: {err}");
    }
    !errors.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_error_has_no_mapping() {
        assert_eq!(GlError::from_code(glow::NO_ERROR), None);
    }

    #[test]
    fn core_codes_map_to_named_variants() {
        assert_eq!(GlError::from_code(glow::INVALID_ENUM), Some(GlError::InvalidEnum));
        assert_eq!(GlError::from_code(glow::OUT_OF_MEMORY), Some(GlError::OutOfMemory));
        assert_eq!(
            GlError::from_code(glow::INVALID_FRAMEBUFFER_OPERATION),
            Some(GlError::InvalidFramebufferOperation)
        );
    }

    #[test]
    fn display_uses_gl_constant_names() {
        assert_eq!(GlError::InvalidOperation.to_string(), "GL_INVALID_OPERATION");
        assert_eq!(GlError::Unknown(0x0503).to_string(), "[unknown error code 0x0503]");
    }
}
