use std::sync::Once;

use env_logger::WriteStyle;

/// Dependency targets held at `warn` unless the filter says otherwise.
const QUIET_TARGETS: &[&str] = &["winit", "glutin", "glutin_winit"];

/// Logger configuration.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Forced filter in `env_logger` syntax. Takes precedence over `RUST_LOG`.
    pub env_filter: Option<String>,

    /// Level for everything not named by a filter.
    pub default_level: log::LevelFilter,

    pub write_style: WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            default_level: log::LevelFilter::Info,
            write_style: WriteStyle::Auto,
        }
    }
}

impl LoggingConfig {
    /// The filter string handed to `env_logger`.
    ///
    /// `env_filter` wins, then a non-blank `rust_log`, then the default level
    /// with the windowing crates quieted.
    pub fn resolve_filter(&self, rust_log: Option<&str>) -> String {
        if let Some(filter) = &self.env_filter {
            return filter.clone();
        }
        if let Some(filter) = rust_log.map(str::trim).filter(|f| !f.is_empty()) {
            return filter.to_string();
        }

        let mut filter = self.default_level.to_string().to_lowercase();
        for target in QUIET_TARGETS {
            filter.push_str(&format!(",{target}=warn"));
        }
        filter
    }
}

static INIT: Once = Once::new();

/// Installs the global logger. Only the first call has any effect.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let rust_log = std::env::var("RUST_LOG").ok();
        let filter = config.resolve_filter(rust_log.as_deref());

        let installed = env_logger::Builder::new()
            .parse_filters(&filter)
            .write_style(config.write_style)
            .format_timestamp_millis()
            .try_init()
            .is_ok();

        if installed {
            log::debug!("logging initialized with filter `{filter}`");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_quiets_windowing_crates() {
        let filter = LoggingConfig::default().resolve_filter(None);
        assert_eq!(filter, "info,winit=warn,glutin=warn,glutin_winit=warn");
    }

    #[test]
    fn rust_log_replaces_default() {
        let config = LoggingConfig::default();
        assert_eq!(config.resolve_filter(Some(" lumen=trace ")), "lumen=trace");
        assert!(config.resolve_filter(Some("  ")).starts_with("info,"));
    }

    #[test]
    fn explicit_filter_beats_rust_log() {
        let config = LoggingConfig {
            env_filter: Some("debug".into()),
            ..LoggingConfig::default()
        };
        assert_eq!(config.resolve_filter(Some("error")), "debug");
    }

    #[test]
    fn default_level_is_configurable() {
        let config = LoggingConfig {
            default_level: log::LevelFilter::Warn,
            ..LoggingConfig::default()
        };
        assert!(config.resolve_filter(None).starts_with("warn,"));
    }
}
