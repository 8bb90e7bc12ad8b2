//! Configuration file support for forkmap.
//!
//! forkmap supports two configuration file locations:
//! - Global: `~/.forkmap/config.toml` - User-wide defaults
//! - Project: `.forkmap/config.toml` - Project-specific overrides
//!
//! Project config takes precedence over global config.
//!
//! A relative `paths.source_root` in the global file is relative to the
//! directory holding that file (`~/.forkmap`). In the project file it stays
//! relative and is later resolved against the working directory.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::BundleType;

/// forkmap configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default build target
    pub build: BuildConfig,

    /// Source tree locations
    pub paths: PathsConfig,
}

/// Default build target used when the command line leaves it out.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Bundle type (e.g., "UMD_DEV", "fb-prod")
    pub bundle_type: Option<String>,

    /// Entry point name
    pub entry: Option<String>,

    /// Dependencies of the bundle
    pub dependencies: Vec<String>,
}

/// Source tree settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Directory fork paths are relative to
    pub source_root: Option<PathBuf>,
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    /// Load configuration with fallback to defaults if file doesn't exist.
    pub fn load_or_default(path: &Path) -> Self {
        if path.exists() {
            Self::load(path).unwrap_or_else(|e| {
                tracing::warn!("Failed to load config from {}: {:#}", path.display(), e);
                Self::default()
            })
        } else {
            Self::default()
        }
    }

    /// Save configuration to a file.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("failed to create config directory: {}", parent.display())
            })?;
        }

        let contents =
            toml::to_string_pretty(self).with_context(|| "failed to serialize config")?;

        std::fs::write(path, contents)
            .with_context(|| format!("failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Merge another config into this one (other takes precedence).
    pub fn merge(&mut self, other: Config) {
        if other.build.bundle_type.is_some() {
            self.build.bundle_type = other.build.bundle_type;
        }
        if other.build.entry.is_some() {
            self.build.entry = other.build.entry;
        }
        if !other.build.dependencies.is_empty() {
            self.build.dependencies = other.build.dependencies;
        }

        if other.paths.source_root.is_some() {
            self.paths.source_root = other.paths.source_root;
        }
    }

    /// Make a relative `paths.source_root` relative to `base` instead.
    pub fn anchor_paths(&mut self, base: &Path) {
        if let Some(root) = self.paths.source_root.take() {
            let anchored = if root.is_relative() {
                base.join(root)
            } else {
                root
            };
            self.paths.source_root = Some(anchored);
        }
    }

    /// Parse the configured bundle type.
    pub fn bundle_type(&self) -> Result<Option<BundleType>> {
        self.build
            .bundle_type
            .as_deref()
            .map(|s| s.parse::<BundleType>())
            .transpose()
            .context("invalid `build.bundle_type` in config")
    }
}

/// Load merged configuration from global and project locations.
///
/// Order of precedence (highest to lowest):
/// 1. Project config (.forkmap/config.toml)
/// 2. Global config (~/.forkmap/config.toml)
/// 3. Defaults
pub fn load_config(global_path: &Path, project_path: &Path) -> Config {
    let mut config = Config::default();

    if global_path.exists() {
        let mut global = Config::load_or_default(global_path);
        if let Some(dir) = global_path.parent() {
            global.anchor_paths(dir);
        }
        config.merge(global);
    }

    if project_path.exists() {
        config.merge(Config::load_or_default(project_path));
    }

    config
}
