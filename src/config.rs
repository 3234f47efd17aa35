//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/mathbox/mathbox.toml`
//! 3. Environment variables: `MATHBOX_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::error::ApplicationError;

/// Runtime settings for the interactive session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Tokens that cancel the current prompt (matched case-insensitively)
    pub exit_keywords: Vec<String>,
    /// Factorial sums longer than this many digits are shown truncated
    pub max_result_digits: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            exit_keywords: vec![
                "exit".into(),
                "end".into(),
                "cancel".into(),
                "stop".into(),
                "quit".into(),
            ],
            max_result_digits: 1024,
        }
    }
}

/// Get the XDG config directory for mathbox.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "mathbox").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("mathbox.toml"))
}

impl Settings {
    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `config_file` - Explicit settings file; falls back to the global path
    ///
    /// # Precedence (lowest to highest)
    /// 1. Compiled defaults
    /// 2. Config file (missing file is fine, it just contributes nothing)
    /// 3. Environment variables: `MATHBOX_*` (lists comma-separated)
    pub fn load(config_file: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut builder = Config::builder();

        let file = config_file.map(Path::to_path_buf).or_else(global_config_path);
        if let Some(path) = file {
            builder = builder.add_source(File::from(path).required(false));
        }

        builder = builder.add_source(
            Environment::with_prefix("MATHBOX")
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("exit_keywords"),
        );

        let config = builder.build().map_err(config_err)?;
        let settings: Self = config.try_deserialize().map_err(config_err)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject settings the session cannot run with.
    ///
    /// Without at least one exit keyword the only way out of a prompt is
    /// closing stdin.
    fn validate(&self) -> Result<(), ApplicationError> {
        if self.exit_keywords.is_empty() {
            return Err(ApplicationError::Config {
                message: "exit_keywords must not be empty".into(),
            });
        }
        Ok(())
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
