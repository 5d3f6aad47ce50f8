//! Configuration for the tracker widget.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::result::Result;

/// Two-part label shown on the final checkpoint in place of its description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerminalLabel {
    #[serde(default = "default_received")]
    pub received: String,

    #[serde(default = "default_ready")]
    pub ready: String,
}

impl Default for TerminalLabel {
    fn default() -> Self {
        Self {
            received: default_received(),
            ready: default_ready(),
        }
    }
}

/// Configuration for the tracker widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// CSS selector of the container the tracker renders into.
    #[serde(default = "default_container_selector")]
    pub container_selector: String,

    /// Label for the last checkpoint.
    #[serde(default)]
    pub terminal_label: TerminalLabel,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            container_selector: default_container_selector(),
            terminal_label: TerminalLabel::default(),
        }
    }
}

impl TrackerConfig {
    /// Create a new tracker config with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigParseFailed`] for malformed TOML and
    /// [`Error::ConfigInvalid`] if validation fails.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(text).map_err(|e| Error::config_parse_failed(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML config file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FileReadFailed`] if the file cannot be read, otherwise
    /// see [`TrackerConfig::from_toml_str`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| Error::file_read_failed(path, e.to_string()))?;
        tracing::debug!(path = %path.display(), "loaded tracker config");
        Self::from_toml_str(&text)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigInvalid`] if the container selector is blank.
    pub fn validate(&self) -> Result<()> {
        if self.container_selector.trim().is_empty() {
            return Err(Error::config_invalid(
                "container_selector must not be empty",
            ));
        }
        Ok(())
    }
}

fn default_container_selector() -> String {
    ".tracker".to_string()
}

fn default_received() -> String {
    "Received at Store".to_string()
}

fn default_ready() -> String {
    "Ready to Collect".to_string()
}
