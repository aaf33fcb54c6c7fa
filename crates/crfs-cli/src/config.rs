//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only sees the [`Toolchain`] part.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables, e.g. `CREATE_REACT_FS__TOOLCHAIN__NPM=pnpm`
//! 3. Config file (`--config`, or the platform config dir)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crfs_core::domain::Toolchain;

/// Prefix for environment overrides. Nested keys are joined with `__`.
pub const ENV_PREFIX: &str = "CREATE_REACT_FS";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Program names for the external tools.
    pub toolchain: Toolchain,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl AppConfig {
    /// Load configuration from defaults, the config file and the environment.
    ///
    /// The default location is always optional. An explicit `config_file`
    /// must exist when `require_explicit` is set.
    pub fn load(config_file: Option<&Path>, require_explicit: bool) -> Result<Self, ConfigError> {
        let (path, required) = match config_file {
            Some(path) => (path.to_path_buf(), require_explicit),
            None => (Self::config_path(), false),
        };
        debug!(path = %path.display(), required, "Loading configuration");

        Config::builder()
            .add_source(Config::try_from(&Self::default())?)
            .add_source(
                File::from(path)
                    .format(FileFormat::Toml)
                    .required(required),
            )
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.create-react-fs.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "create-react-fs", "create-react-fs")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".create-react-fs.toml"))
    }

    /// Look up a dotted key such as `toolchain.npm`.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "toolchain.npx" => Some(self.toolchain.npx.clone()),
            "toolchain.npm" => Some(self.toolchain.npm.clone()),
            "toolchain.docker" => Some(self.toolchain.docker.clone()),
            "output.no_color" => Some(self.output.no_color.to_string()),
            _ => None,
        }
    }

    /// Every key accepted by [`Self::get`].
    pub const KEYS: [&'static str; 4] = [
        "toolchain.npx",
        "toolchain.npm",
        "toolchain.docker",
        "output.no_color",
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_toolchain_uses_stock_programs() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.toolchain.npx, "npx");
        assert_eq!(cfg.toolchain.npm, "npm");
        assert_eq!(cfg.toolchain.docker, "docker");
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn file_overrides_defaults_per_key() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[toolchain]\nnpm = \"pnpm\"\n").unwrap();

        let cfg = AppConfig::load(Some(&path), true).unwrap();

        assert_eq!(cfg.toolchain.npm, "pnpm");
        assert_eq!(cfg.toolchain.npx, "npx");
    }

    #[test]
    fn explicit_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let absent = dir.path().join("absent.toml");

        assert!(AppConfig::load(Some(&absent), true).is_err());
        assert_eq!(AppConfig::load(Some(&absent), false).unwrap(), AppConfig::default());
    }

    #[test]
    fn malformed_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[toolchain\nnpm = ").unwrap();

        assert!(AppConfig::load(Some(&path), true).is_err());
    }

    #[test]
    fn get_known_and_unknown_keys() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.get("toolchain.docker").as_deref(), Some("docker"));
        assert_eq!(cfg.get("output.no_color").as_deref(), Some("false"));
        assert_eq!(cfg.get("defaults.lang"), None);
    }

    #[test]
    fn every_listed_key_resolves() {
        let cfg = AppConfig::default();
        for key in AppConfig::KEYS {
            assert!(cfg.get(key).is_some(), "missing key {key}");
        }
    }

    #[test]
    fn config_path_is_not_empty() {
        let p = AppConfig::config_path();
        assert!(!p.as_os_str().is_empty());
    }
}
