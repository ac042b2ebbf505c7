use std::fmt;
use std::path::{Path, PathBuf};

use super::ShaderError;

/// Programmable pipeline stage.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    pub(super) fn gl_kind(self) -> u32 {
        match self {
            Self::Vertex => glow::VERTEX_SHADER,
            Self::Fragment => glow::FRAGMENT_SHADER,
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vertex => f.write_str("vertex"),
            Self::Fragment => f.write_str("fragment"),
        }
    }
}

/// Locations of the vertex/fragment source pair.
///
/// Relative paths resolve against the working directory.
#[derive(Debug, Clone, PartialEq)]
pub struct ShaderPaths {
    pub vertex: PathBuf,
    pub fragment: PathBuf,
}

impl ShaderPaths {
    pub const VERTEX_FILE: &'static str = "vertex.glsl";
    pub const FRAGMENT_FILE: &'static str = "fragment.glsl";

    /// Both files inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            vertex: dir.join(Self::VERTEX_FILE),
            fragment: dir.join(Self::FRAGMENT_FILE),
        }
    }
}

impl Default for ShaderPaths {
    fn default() -> Self {
        Self {
            vertex: PathBuf::from(Self::VERTEX_FILE),
            fragment: PathBuf::from(Self::FRAGMENT_FILE),
        }
    }
}

/// Reads a text file, returning an empty string if it cannot be read.
///
/// The failure is logged; callers treat an empty source as "not loaded".
pub fn load_source(path: &Path) -> String {
    match std::fs::read_to_string(path) {
        Ok(source) => source,
        Err(e) => {
            log::error!("could not load shader source from {}: {e}", path.display());
            String::new()
        }
    }
}

/// Loaded vertex and fragment source text.
#[derive(Debug, Clone)]
pub struct ShaderSources {
    pub vertex: String,
    pub fragment: String,
}

impl ShaderSources {
    /// Loads both sources. Fails if either comes back empty.
    pub fn load(paths: &ShaderPaths) -> Result<Self, ShaderError> {
        let vertex = load_source(&paths.vertex);
        let fragment = load_source(&paths.fragment);

        if vertex.is_empty() {
            return Err(ShaderError::EmptySource {
                stage: ShaderStage::Vertex,
                path: paths.vertex.clone(),
            });
        }
        if fragment.is_empty() {
            return Err(ShaderError::EmptySource {
                stage: ShaderStage::Fragment,
                path: paths.fragment.clone(),
            });
        }

        Ok(Self { vertex, fragment })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("lumen-shader-{tag}-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn missing_file_loads_as_empty() {
        let path = scratch_dir("missing").join("does-not-exist.glsl");
        assert_eq!(load_source(&path), "");
    }

    #[test]
    fn missing_vertex_source_fails_setup() {
        let dir = scratch_dir("no-vertex");
        std::fs::write(dir.join(ShaderPaths::FRAGMENT_FILE), "void main() {}").unwrap();

        let err = ShaderSources::load(&ShaderPaths::in_dir(&dir)).unwrap_err();
        assert!(matches!(err, ShaderError::EmptySource { stage: ShaderStage::Vertex, .. }));
    }

    #[test]
    fn empty_fragment_source_fails_setup() {
        let dir = scratch_dir("empty-fragment");
        std::fs::write(dir.join(ShaderPaths::VERTEX_FILE), "void main() {}").unwrap();
        std::fs::write(dir.join(ShaderPaths::FRAGMENT_FILE), "").unwrap();

        let err = ShaderSources::load(&ShaderPaths::in_dir(&dir)).unwrap_err();
        assert!(matches!(err, ShaderError::EmptySource { stage: ShaderStage::Fragment, .. }));
    }

    #[test]
    fn both_sources_present() {
        let dir = scratch_dir("both");
        std::fs::write(dir.join(ShaderPaths::VERTEX_FILE), "// vs").unwrap();
        std::fs::write(dir.join(ShaderPaths::FRAGMENT_FILE), "// fs").unwrap();

        let sources = ShaderSources::load(&ShaderPaths::in_dir(&dir)).unwrap();
        assert_eq!(sources.vertex, "// vs");
        assert_eq!(sources.fragment, "// fs");
    }

    #[test]
    fn default_paths_are_relative_to_working_dir() {
        let paths = ShaderPaths::default();
        assert_eq!(paths.vertex, PathBuf::from("vertex.glsl"));
        assert_eq!(paths.fragment, PathBuf::from("fragment.glsl"));
    }

    #[test]
    fn error_names_stage_and_path() {
        let err = ShaderError::EmptySource {
            stage: ShaderStage::Fragment,
            path: PathBuf::from("fragment.glsl"),
        };
        assert_eq!(err.to_string(), "no fragment shader source loaded from fragment.glsl");
    }
}
