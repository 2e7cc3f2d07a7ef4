//! Builder for creating and configuring Synthesizer instances.

use std::path::{Path, PathBuf};

use log::{debug, info};

use super::Synthesizer;
use crate::{
    classifier::{IdeaClassifier, KeywordClassifier},
    config::SynthesisConfig,
    error::Result,
    scheduler::PhaseScheduler,
};

/// Builder for creating and configuring Synthesizer instances.
pub struct SynthesizerBuilder {
    config_path: Option<PathBuf>,
    config: Option<SynthesisConfig>,
    classifier: Option<Box<dyn IdeaClassifier>>,
    use_user_config: bool,
}

impl SynthesizerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            config_path: None,
            config: None,
            classifier: None,
            use_user_config: true,
        }
    }

    /// Sets a configuration file to read.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_CONFIG_HOME/blueprint/config.json` or
    /// `~/.config/blueprint/config.json` when that file exists, and the
    /// built-in defaults otherwise.
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.config_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Uses the given configuration directly, skipping all file lookup.
    pub fn with_config(mut self, config: SynthesisConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Ignore any configuration file in the user's XDG config directory.
    pub fn without_user_config(mut self) -> Self {
        self.use_user_config = false;
        self
    }

    /// Replaces the default keyword classifier.
    pub fn with_classifier<C>(mut self, classifier: C) -> Self
    where
        C: IdeaClassifier + 'static,
    {
        self.classifier = Some(Box::new(classifier));
        self
    }

    /// Builds the configured synthesizer instance.
    ///
    /// # Errors
    ///
    /// Returns `SynthesisError::FileSystem` if an explicit config path cannot
    /// be read, `SynthesisError::Serialization` if the config is not valid
    /// JSON, and `SynthesisError::InvalidInput` if it fails validation.
    pub fn build(self) -> Result<Synthesizer> {
        let config = match (self.config, self.config_path) {
            (Some(config), _) => {
                config.validate()?;
                config
            }
            (None, Some(path)) => {
                info!("Using config file {}", path.display());
                SynthesisConfig::load(&path)?
            }
            (None, None) => Self::user_config(self.use_user_config)?,
        };

        let scheduler = PhaseScheduler::new(config.phase_names.clone())?;
        let classifier: Box<dyn IdeaClassifier> = match self.classifier {
            Some(classifier) => classifier,
            None => Box::new(KeywordClassifier::new()),
        };

        Ok(Synthesizer::new(classifier, scheduler, config))
    }

    /// Reads the XDG user config when enabled and present.
    fn user_config(enabled: bool) -> Result<SynthesisConfig> {
        match SynthesisConfig::find_user_config().filter(|_| enabled) {
            Some(path) => {
                info!("Using user config file {}", path.display());
                SynthesisConfig::load(&path)
            }
            None => {
                debug!("No config file, using defaults");
                Ok(SynthesisConfig::default())
            }
        }
    }
}

impl Default for SynthesizerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
