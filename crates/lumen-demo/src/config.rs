use std::path::PathBuf;

use lumen_engine::device::GlInit;
use lumen_engine::shader::ShaderPaths;
use lumen_engine::window::RuntimeConfig;

use crate::scene::SceneId;

/// Directory holding `vertex.glsl` and `fragment.glsl`.
pub const SHADER_DIR_VAR: &str = "LUMEN_SHADER_DIR";
/// Scene to select before the first frame.
pub const SCENE_VAR: &str = "LUMEN_SCENE";

pub const WINDOW_TITLE: &str = "lumen raytracer";

#[derive(Debug, Clone)]
pub struct DemoConfig {
    pub runtime: RuntimeConfig,
    pub gl: GlInit,
    pub shaders: ShaderPaths,
    pub initial_scene: Option<SceneId>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            runtime: RuntimeConfig {
                title: WINDOW_TITLE.to_string(),
                ..RuntimeConfig::default()
            },
            gl: GlInit::default(),
            shaders: ShaderPaths::default(),
            initial_scene: None,
        }
    }
}

impl DemoConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from `lookup`. Unusable values are logged and
    /// ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(dir) = lookup(SHADER_DIR_VAR) {
            if dir.trim().is_empty() {
                log::warn!("{SHADER_DIR_VAR} is empty; using the working directory");
            } else {
                config.shaders = ShaderPaths::in_dir(PathBuf::from(dir));
            }
        }

        if let Some(raw) = lookup(SCENE_VAR) {
            match raw.parse::<SceneId>() {
                Ok(id) => config.initial_scene = Some(id),
                Err(e) => log::warn!("ignoring {SCENE_VAR}: {e}"),
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::path::Path;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_without_overrides() {
        let config = DemoConfig::from_lookup(lookup(&[]));
        assert_eq!(config.shaders, ShaderPaths::default());
        assert_eq!(config.initial_scene, None);
        assert_eq!(config.runtime.title, WINDOW_TITLE);
        assert_eq!(config.runtime.initial_size.width, 768.0);
        assert!(!config.runtime.resizable);
        assert_eq!(config.gl.version, (4, 1));
    }

    #[test]
    fn shader_dir_override() {
        let config = DemoConfig::from_lookup(lookup(&[(SHADER_DIR_VAR, "assets/shaders")]));
        assert_eq!(config.shaders.vertex, Path::new("assets/shaders/vertex.glsl"));
        assert_eq!(config.shaders.fragment, Path::new("assets/shaders/fragment.glsl"));
    }

    #[test]
    fn blank_shader_dir_is_ignored() {
        let config = DemoConfig::from_lookup(lookup(&[(SHADER_DIR_VAR, "  ")]));
        assert_eq!(config.shaders, ShaderPaths::default());
    }

    #[test]
    fn scene_override() {
        let config = DemoConfig::from_lookup(lookup(&[(SCENE_VAR, "2")]));
        assert_eq!(config.initial_scene, Some(SceneId::Two));
    }

    #[test]
    fn invalid_scene_is_ignored() {
        for raw in ["4", "", "one"] {
            let config = DemoConfig::from_lookup(lookup(&[(SCENE_VAR, raw)]));
            assert_eq!(config.initial_scene, None, "{raw:?}");
        }
    }
}
