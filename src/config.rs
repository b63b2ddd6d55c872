//! Configuration handling for the TUI

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// User configuration for the TUI
///
/// Display knobs only. Form data is never seeded from configuration.
#[allow(dead_code)]
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Start with the password field masked
    pub mask_password: Option<bool>,
    /// Render the key-hint line under the form
    pub show_hints: Option<bool>,
    /// Wire name of the field to focus on startup (e.g. "email")
    pub initial_focus: Option<String>,
}

#[allow(dead_code)]
impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "enroll", "enroll-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: TuiConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(self)?;
            fs::write(&path, content)?;
        }
        Ok(())
    }

    /// Whether the password field starts masked (default: yes)
    pub fn mask_password(&self) -> bool {
        self.mask_password.unwrap_or(true)
    }

    /// Whether the key-hint line is rendered (default: yes)
    pub fn show_hints(&self) -> bool {
        self.show_hints.unwrap_or(true)
    }
}
