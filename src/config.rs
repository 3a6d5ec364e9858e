//! Resolver defaults loaded from TOML
//!
//! The CLI fills in any preset axis the user leaves out from these defaults.
//!
//! ```toml
//! [defaults]
//! conference = "neurips"
//! layout = "1col"
//! figure_type = "line"
//! no_latex = true
//! ```

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::catalog::{Conference, FigureType, Layout};
use crate::error::PresetError;

/// Errors that can occur when loading a configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid default: {0}")]
    Preset(#[from] PresetError),
}

/// Default preset axes and stack options
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolverConfig {
    pub conference: Option<Conference>,
    pub layout: Option<Layout>,
    pub figure_type: Option<FigureType>,
    /// Append `no-latex` to every style stack
    pub no_latex: bool,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlConfig {
    defaults: Option<TomlDefaults>,
}

#[derive(Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct TomlDefaults {
    conference: Option<String>,
    layout: Option<String>,
    figure_type: Option<String>,
    no_latex: Option<bool>,
}

impl ResolverConfig {
    /// Create a new configuration with no defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Load configuration from a TOML string. Values may be aliases.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let parsed: TomlConfig = toml::from_str(content)?;
        let defaults = parsed.defaults.unwrap_or_default();

        Ok(ResolverConfig {
            conference: defaults.conference.as_deref().map(Conference::parse).transpose()?,
            layout: defaults.layout.as_deref().map(Layout::parse).transpose()?,
            figure_type: defaults.figure_type.as_deref().map(FigureType::parse).transpose()?,
            no_latex: defaults.no_latex.unwrap_or(false),
        })
    }

    /// Set the default conference
    pub fn with_conference(mut self, conference: Conference) -> Self {
        self.conference = Some(conference);
        self
    }

    /// Set the default layout
    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = Some(layout);
        self
    }

    /// Set the default figure type
    pub fn with_figure_type(mut self, figure_type: FigureType) -> Self {
        self.figure_type = Some(figure_type);
        self
    }

    /// Set whether stacks disable LaTeX
    pub fn with_no_latex(mut self, no_latex: bool) -> Self {
        self.no_latex = no_latex;
        self
    }
}
