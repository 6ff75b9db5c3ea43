//! Application configuration for SchoolDesk.
//!
//! User config lives at `~/.schooldesk/schooldesk.toml`.
//! CLI flags override config file values, which override defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SchoolDeskError};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "schooldesk.toml";

/// Default config directory name under the user's home.
const CONFIG_DIR_NAME: &str = ".schooldesk";

/// Greeting used when neither the config file nor the CLI supplies one.
pub const DEFAULT_GREETING: &str = "Здравствуйте!";

// ---------------------------------------------------------------------------
// Config structs (matching schooldesk.toml schema)
// ---------------------------------------------------------------------------

/// Top-level application config, deserialized from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Assistant settings.
    #[serde(default)]
    pub assistant: AssistantConfig,
}

/// `[assistant]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistantConfig {
    /// First line of every response.
    #[serde(default = "default_greeting")]
    pub greeting: String,

    /// Topic file to use instead of the built-in knowledge base.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub knowledge_base: Option<String>,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            greeting: default_greeting(),
            knowledge_base: None,
        }
    }
}

fn default_greeting() -> String {
    DEFAULT_GREETING.into()
}

// ---------------------------------------------------------------------------
// Config loading
// ---------------------------------------------------------------------------

/// Get the path to the config directory (`~/.schooldesk/`).
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| SchoolDeskError::config("could not determine home directory"))?;
    Ok(home.join(CONFIG_DIR_NAME))
}

/// Get the path to the config file (`~/.schooldesk/schooldesk.toml`).
pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Load the application config from disk. Returns defaults if the file does not exist.
pub fn load_config() -> Result<AppConfig> {
    let path = config_file_path()?;

    if !path.exists() {
        tracing::debug!(?path, "config file not found, using defaults");
        return Ok(AppConfig::default());
    }

    load_config_from(&path)
}

/// Load the application config from a specific file path.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| SchoolDeskError::io(path, e))?;

    let config: AppConfig = toml::from_str(&content).map_err(|e| {
        SchoolDeskError::config(format!("failed to parse {}: {e}", path.display()))
    })?;

    tracing::debug!(?path, "loaded config file");
    Ok(config)
}
