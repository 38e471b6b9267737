//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables (`SKEL_*`, e.g. `SKEL_STAGING__ROOT`)
//! 3. Config file (`--config`, or the default location if it exists)
//! 4. Built-in defaults (always present)

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{CliError, CliResult};

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Template settings.
    pub templates: TemplateConfig,
    /// Staging settings.
    pub staging: StagingConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// Template tree to scaffold from, overriding the bundled one.
    pub dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StagingConfig {
    /// Directory staging areas are created under (default: OS temp dir).
    pub root: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl AppConfig {
    /// Load configuration, starting from defaults.
    ///
    /// `config_file` is the path the user passed via `--config` (or `None`
    /// to probe the default location). A missing default file is fine; a
    /// missing explicit file is a configuration error.
    pub fn load(config_file: Option<&PathBuf>) -> CliResult<Self> {
        let mut builder = config::Config::builder();

        match config_file {
            Some(path) => {
                builder = builder.add_source(config::File::from(path.clone()).required(true));
            }
            None => {
                builder =
                    builder.add_source(config::File::from(Self::config_path()).required(false));
            }
        }

        // SKEL_TEMPLATES__DIR, SKEL_STAGING__ROOT, SKEL_OUTPUT__NO_COLOR
        builder = builder.add_source(
            config::Environment::with_prefix("SKEL")
                .separator("__")
                .try_parsing(true),
        );

        builder
            .build()
            .and_then(config::Config::try_deserialize)
            .map_err(|e| CliError::ConfigError {
                message: e.to_string(),
                source: Some(Box::new(e)),
            })
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.skel.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("dev", "skel", "skel")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".skel.toml"))
    }

    /// Directory the builtin template is provisioned under.
    ///
    /// Falls back to the OS temp dir when no cache directory can be
    /// determined (unusual, but possible in stripped-down environments).
    pub fn template_cache_dir() -> PathBuf {
        directories::ProjectDirs::from("dev", "skel", "skel")
            .map(|d| d.cache_dir().join("templates"))
            .unwrap_or_else(|| std::env::temp_dir().join("skel-templates"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_have_no_overrides() {
        let cfg = AppConfig::default();
        assert!(cfg.templates.dir.is_none());
        assert!(cfg.staging.root.is_none());
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn explicit_missing_file_is_config_error() {
        let missing = PathBuf::from("/definitely/not/here/config.toml");
        let err = AppConfig::load(Some(&missing)).unwrap_err();
        assert!(matches!(err, CliError::ConfigError { .. }));
    }

    #[test]
    fn config_path_is_non_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }

    #[test]
    fn cache_dir_is_non_empty() {
        assert!(!AppConfig::template_cache_dir().as_os_str().is_empty());
    }
}
