//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by reference.
//! The CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (applied in `cli::resolve`, not here)
//! 2. `MKCPP_*` environment variables
//! 3. Config file (`config.toml` in the platform config dir)
//! 4. Built-in defaults

use std::path::PathBuf;

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default values for new projects.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Defaults {
    /// Project version when `-v/--version` is not given. The core falls
    /// back to `1.0.0` when this is unset too.
    pub version: Option<String>,
    /// Project description when `-d/--description` is not given.
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl AppConfig {
    /// Load configuration from the default file location (if present) and
    /// `MKCPP_*` environment variables, on top of built-in defaults.
    ///
    /// Example: `MKCPP_DEFAULTS__VERSION=0.2.0` sets `defaults.version`.
    pub fn load() -> anyhow::Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from(Self::config_path()).required(false))
            .add_source(
                config::Environment::with_prefix("MKCPP")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.mkcpp.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "mkcpp", "mkcpp")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".mkcpp.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_empty() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.defaults.version, None);
        assert_eq!(cfg.defaults.description, None);
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn config_path_is_non_empty() {
        let p = AppConfig::config_path();
        assert!(!p.as_os_str().is_empty());
    }
}
