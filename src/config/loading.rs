use std::{fs, path::Path};

use tracing::debug;

use super::{Config, ConfigPaths};
use crate::core::{MprisCtlError, Result};

impl Config {
    /// Loads the configuration from the default location.
    ///
    /// A missing file is not an error and yields the defaults.
    ///
    /// # Errors
    /// Returns `MprisCtlError` if the config directory can't be determined,
    /// or the file exists but can't be read or parsed.
    pub fn load() -> Result<Config> {
        let path = ConfigPaths::main_config()?;

        if !path.exists() {
            debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Config::default());
        }

        Self::load_from(&path)
    }

    /// Loads the configuration from `path`.
    ///
    /// # Errors
    /// Returns `MprisCtlError` if the file can't be read or isn't valid TOML
    /// for this schema.
    pub fn load_from(path: &Path) -> Result<Config> {
        let file_content = fs::read_to_string(path).map_err(|e| MprisCtlError::IoError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

        toml::from_str(&file_content).map_err(|e| MprisCtlError::toml_parse(e, Some(path)))
    }
}
