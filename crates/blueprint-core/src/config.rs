//! Synthesis configuration.
//!
//! A [`SynthesisConfig`] carries everything about a plan that is not derived
//! from the idea text: the delivery phases and the default estimates copied
//! into every plan. It is read from JSON; missing fields fall back to the
//! defaults, so a config file only needs the values it overrides:
//!
//! ```json
//! {
//!   "phase_names": ["Discovery", "Build", "Launch"],
//!   "budget_estimate": "$20,000 - $40,000"
//! }
//! ```
//!
//! Lookup order (see [`crate::SynthesizerBuilder`]): an explicit path, then
//! `$XDG_CONFIG_HOME/blueprint/config.json`, then built-in defaults.

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    error::{Result, SynthesisError},
    scheduler::DEFAULT_PHASE_NAMES,
};

/// XDG prefix used for the configuration directory.
pub const XDG_PREFIX: &str = "blueprint";

/// Configuration file name inside the XDG configuration directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Defaults applied to every synthesized plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SynthesisConfig {
    /// Delivery phase names; their count is the number of phases
    pub phase_names: Vec<String>,

    pub timeline_estimate: String,

    pub budget_estimate: String,

    pub team_roles: Vec<String>,
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            phase_names: DEFAULT_PHASE_NAMES.iter().map(|s| (*s).to_string()).collect(),
            timeline_estimate: "3-6 months".to_string(),
            budget_estimate: "$50,000 - $150,000".to_string(),
            team_roles: [
                "Project Manager",
                "UI/UX Designer",
                "Frontend Developer",
                "Backend Developer",
                "QA Engineer",
                "DevOps Engineer",
            ]
            .iter()
            .map(|s| (*s).to_string())
            .collect(),
        }
    }
}

impl SynthesisConfig {
    /// Read and validate a configuration file.
    ///
    /// # Errors
    ///
    /// Returns `SynthesisError::FileSystem` if the file cannot be read,
    /// `SynthesisError::Serialization` if it is not valid JSON, and
    /// `SynthesisError::InvalidInput` if a value fails validation.
    pub fn load(path: &Path) -> Result<Self> {
        debug!("loading config from {}", path.display());
        let raw = fs::read_to_string(path).map_err(|e| SynthesisError::FileSystem {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_json(&raw)
    }

    /// Parse and validate configuration from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns `SynthesisError::Serialization` for malformed JSON and
    /// `SynthesisError::InvalidInput` if a value fails validation.
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration for values the pipeline cannot work with.
    ///
    /// # Errors
    ///
    /// Returns `SynthesisError::InvalidInput` when there are no phases or a
    /// phase name is blank.
    pub fn validate(&self) -> Result<()> {
        if self.phase_names.is_empty() {
            return Err(SynthesisError::invalid_input("phase_names")
                .with_reason("at least one phase is required"));
        }
        if let Some(position) = self.phase_names.iter().position(|n| n.trim().is_empty()) {
            return Err(SynthesisError::invalid_input("phase_names")
                .with_reason(format!("phase name at position {position} is blank")));
        }
        Ok(())
    }

    /// Location of the user configuration file, if one exists.
    pub fn find_user_config() -> Option<PathBuf> {
        xdg::BaseDirectories::with_prefix(XDG_PREFIX).find_config_file(CONFIG_FILE_NAME)
    }

    /// Write this configuration to the user configuration location, creating
    /// parent directories as needed. Returns the path written.
    ///
    /// # Errors
    ///
    /// Returns `SynthesisError::XdgDirectory` if the location cannot be
    /// prepared and `SynthesisError::FileSystem` if the write fails.
    pub fn write_user_config(&self) -> Result<PathBuf> {
        let path = xdg::BaseDirectories::with_prefix(XDG_PREFIX)
            .place_config_file(CONFIG_FILE_NAME)
            .map_err(|e| SynthesisError::XdgDirectory(e.to_string()))?;
        self.write_to(&path)?;
        Ok(path)
    }

    /// Write this configuration as pretty JSON to `path`.
    ///
    /// # Errors
    ///
    /// Returns `SynthesisError::FileSystem` if the write fails.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).map_err(|e| SynthesisError::FileSystem {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_defaults() {
        let config = SynthesisConfig::default();
        assert_eq!(config.phase_names.len(), 3);
        assert_eq!(config.timeline_estimate, "3-6 months");
        assert_eq!(config.team_roles.len(), 6);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = SynthesisConfig::from_json(r#"{"budget_estimate": "$10k"}"#).unwrap();
        assert_eq!(config.budget_estimate, "$10k");
        assert_eq!(config.phase_names, SynthesisConfig::default().phase_names);
    }

    #[test]
    fn test_empty_phase_list_rejected() {
        let err = SynthesisConfig::from_json(r#"{"phase_names": []}"#).unwrap_err();
        assert!(err.is_user_error());
    }

    #[test]
    fn test_blank_phase_name_rejected() {
        let err = SynthesisConfig::from_json(r#"{"phase_names": ["Build", "  "]}"#).unwrap_err();
        assert!(err.to_string().contains("position 1"));
    }

    #[test]
    fn test_malformed_json() {
        let err = SynthesisConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, SynthesisError::Serialization { .. }));
    }

    #[test]
    fn test_write_then_load() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("config.json");

        let config = SynthesisConfig {
            phase_names: vec!["One".to_string(), "Two".to_string()],
            ..Default::default()
        };
        config.write_to(&path).unwrap();

        assert_eq!(SynthesisConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let err = SynthesisConfig::load(&temp_dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, SynthesisError::FileSystem { .. }));
    }
}
