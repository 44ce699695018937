//! Configuration module for file-tags
//!
//! Optional user settings stored in the user's config directory
//! (`~/.config/file-tags/config.toml` on Linux). Every key can also be set
//! through a `FILE_TAGS_<KEY>` environment variable. A missing file means
//! defaults.
//!
//! ```toml
//! quiet = false
//! interactive = true
//! preview_limit = 20
//! ```

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

use crate::output::PreviewSampler;

/// Application configuration structure
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct FileTagsConfig {
    /// Suppress informational output by default
    pub quiet: bool,

    /// Always ask before renaming files
    pub interactive: bool,

    /// Maximum number of files listed in the rename preview
    pub preview_limit: usize,
}

impl Default for FileTagsConfig {
    fn default() -> Self {
        Self {
            quiet: false,
            interactive: false,
            preview_limit: PreviewSampler::DEFAULT_LIMIT,
        }
    }
}

impl FileTagsConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("file-tags").join("config.toml"))
    }

    /// Load configuration from the default location
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory is unknown or the file
    /// cannot be parsed.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from `path`, falling back to defaults when it
    /// does not exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file or an environment override cannot
    /// be parsed.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        Self::builder(path)
            .add_source(Environment::with_prefix("FILE_TAGS").try_parsing(true))
            .build()?
            .try_deserialize()
    }

    fn builder(path: &Path) -> config::ConfigBuilder<config::builder::DefaultState> {
        Config::builder().add_source(
            File::from(path.to_path_buf())
                .format(FileFormat::Toml)
                .required(false),
        )
    }
}
