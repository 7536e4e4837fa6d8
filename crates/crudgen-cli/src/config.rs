//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The
//! CLI layer owns config; the core crate only sees the resulting
//! [`Layout`].
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (applied at the call-site, not here)
//! 2. `--config FILE`
//! 3. `.crudgen.toml` in the current directory
//! 4. The user config file (`directories::ProjectDirs`)
//! 5. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crudgen_core::application::Layout;

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Output path conventions, mirrored 1:1 from the core [`Layout`].
    pub layout: Layout,
    /// Output settings.
    pub output: OutputConfig,
    /// Stub settings.
    pub stubs: StubsConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StubsConfig {
    /// Default stub-override directory; `--stubs` wins over this.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

impl AppConfig {
    /// Load configuration, starting from defaults.
    ///
    /// An explicitly passed `--config` file must exist and parse; the
    /// implicit locations are optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        if let Some(path) = config_file {
            return Self::from_file(path);
        }

        let local = PathBuf::from(".crudgen.toml");
        if local.exists() {
            return Self::from_file(&local);
        }

        let user = Self::config_path();
        if user.exists() {
            return Self::from_file(&user);
        }

        debug!("no config file found, using defaults");
        Ok(Self::default())
    }

    fn from_file(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("cannot read {}: {e}", path.display()))?;
        let config: Self = toml::from_str(&text)
            .map_err(|e| anyhow::anyhow!("cannot parse {}: {e}", path.display()))?;
        debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.crudgen.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "crudgen", "crudgen")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".crudgen.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn default_layout_matches_core_defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.layout.base_path, Path::new("app"));
        assert_eq!(cfg.layout.routes_file, Path::new("routes/api.php"));
        assert!(!cfg.output.no_color);
        assert!(cfg.stubs.dir.is_none());
    }

    #[test]
    fn partial_file_falls_back_to_defaults_per_field() {
        let cfg: AppConfig = toml::from_str(
            r#"
[layout]
base_path = "src"
routes_file = "routes/web.php"

[output]
no_color = true
"#,
        )
        .unwrap();
        assert_eq!(cfg.layout.base_path, Path::new("src"));
        assert_eq!(cfg.layout.routes_file, Path::new("routes/web.php"));
        // untouched layout fields keep their defaults
        assert_eq!(cfg.layout.controllers, Path::new("Http/Controllers"));
        assert!(cfg.output.no_color);
    }

    #[test]
    fn layout_round_trips_through_toml() {
        let cfg = AppConfig::default();
        let text = toml::to_string(&cfg).unwrap();
        let back: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(back.layout, cfg.layout);
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        assert!(AppConfig::load(Some(&PathBuf::from("/no/such/file.toml"))).is_err());
    }

    #[test]
    fn config_path_is_non_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }
}
