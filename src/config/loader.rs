use std::path::Path;

use crate::error::{Result, SubmitGuardError};

use super::{RulesConfig, presets};

/// Default profile applied when neither `--profile` nor `--config` is given.
pub const DEFAULT_PROFILE: &str = "cs2114";

/// Loads rule profiles from built-in presets or explicit JSON files.
pub struct FileConfigLoader;

impl FileConfigLoader {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Load a built-in profile by name.
    ///
    /// # Errors
    /// Returns an error if the profile name is unknown.
    pub fn load_profile(&self, name: &str) -> Result<RulesConfig> {
        presets::load_profile(name)
    }

    /// Load a profile from a JSON file on disk.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not valid JSON.
    pub fn load_from_path(&self, path: &Path) -> Result<RulesConfig> {
        let content =
            std::fs::read_to_string(path).map_err(|source| SubmitGuardError::FileRead {
                path: path.to_path_buf(),
                source,
            })?;

        serde_json::from_str(&content).map_err(|e| {
            SubmitGuardError::Config(format!("Invalid profile {}: {e}", path.display()))
        })
    }
}

impl Default for FileConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
