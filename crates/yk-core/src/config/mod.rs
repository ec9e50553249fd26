//! Configuration management for yakctl

mod profile;

pub use profile::{Profile, Tab};

use crate::error::{ConfigError, ProfileError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File name of the configuration inside the home directory
pub const CONFIG_FILE_NAME: &str = ".yakctl.yml";

/// Root of the YAML configuration file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Defined profiles, addressed by their 1-based position
    #[serde(default, deserialize_with = "deserialize_null_as_empty_vec")]
    pub profiles: Vec<Profile>,
}

/// Deserialize `profiles:` with no value as an empty list
fn deserialize_null_as_empty_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<Vec<T>>::deserialize(deserializer).map(|opt| opt.unwrap_or_default())
}

impl ConfigFile {
    /// Look up a profile by its 1-based id
    pub fn profile(&self, id: i64) -> Result<&Profile, ProfileError> {
        if id <= 0 {
            return Err(ProfileError::NotFound(id));
        }
        usize::try_from(id - 1)
            .ok()
            .and_then(|index| self.profiles.get(index))
            .ok_or(ProfileError::NotFound(id))
    }
}

/// Get the default configuration file path (`~/.yakctl.yml`)
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    dirs::home_dir()
        .map(|home| home.join(CONFIG_FILE_NAME))
        .ok_or(ConfigError::NoHomeDir)
}

/// Load configuration from a file
pub fn load_config(path: &Path) -> Result<ConfigFile, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    parse_config(path, &content)
}

/// Parse configuration content, `path` is only used for error reporting
pub fn parse_config(path: &Path, content: &str) -> Result<ConfigFile, ConfigError> {
    // An empty document is a valid, profile-less configuration
    if content.trim().is_empty() {
        return Ok(ConfigFile::default());
    }

    serde_yaml::from_str(content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Render a profile back to YAML
pub fn profile_to_yaml(profile: &Profile) -> Result<String, ConfigError> {
    Ok(serde_yaml::to_string(profile)?)
}
