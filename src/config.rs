//! Project-level settings read from an optional asort.toml.
//!
//! The only setting today is which README to sort when no path is given on the command line.
//! Without a config file the legacy target, readme.md in the working directory, is used.

use crate::error::{Error, Result};
use facet::Facet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Name of the config file looked for in the working directory.
pub const CONFIG_FILE: &str = "asort.toml";

/// File sorted when neither the command line nor the config names one.
pub const DEFAULT_PATH: &str = "readme.md";

#[derive(Facet, Clone, Debug, PartialEq, Eq)]
/// Settings from asort.toml, with defaults for anything left out.
pub struct Config {
    #[facet(default = DEFAULT_PATH.to_string())]
    /// README to sort when no path is passed.
    pub path: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            path: DEFAULT_PATH.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from asort.toml in the working directory if present.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    /// Load configuration from `path`, using defaults when it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(Error::file_access(path, e)),
        };
        let config = facet_toml::from_str::<Self>(&contents).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        tracing::debug!(config = %path.display(), readme = %config.path, "loaded config");
        Ok(config)
    }

    #[must_use]
    /// The configured README path.
    pub fn target(&self) -> PathBuf {
        PathBuf::from(&self.path)
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
