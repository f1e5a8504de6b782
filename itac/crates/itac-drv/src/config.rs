//! Configuration loaded from `itac.toml`.
//!
//! Every field has a default, so an empty file (or no file at all) yields
//! [`Config::default`]. Unknown keys are rejected.

use itac_gen::{CodegenOptions, DEFAULT_INCLUDES};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default configuration file name, looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "itac.toml";

/// Error raised while loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An explicitly requested file does not exist.
    #[error("configuration file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The file could not be read.
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid TOML or has unknown keys.
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Compiler configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Log at debug level.
    #[serde(default)]
    pub verbose: bool,

    /// Output layout.
    #[serde(default)]
    pub codegen: CodegenConfig,

    /// Symbol-table report.
    #[serde(default)]
    pub report: ReportConfig,
}

/// `[codegen]` section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CodegenConfig {
    /// Spaces per nesting level.
    #[serde(default = "default_indent_width")]
    pub indent_width: usize,

    /// Headers included at the top of the output.
    #[serde(default = "default_includes")]
    pub includes: Vec<String>,
}

/// `[report]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ReportConfig {
    /// How the symbol table is printed after analysis.
    #[serde(default)]
    pub symbols: SymbolFormat,
}

/// Symbol-table report format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SymbolFormat {
    /// `ID: <name>, Type: <type>` lines
    #[default]
    Text,
    /// JSON document
    Json,
    /// No report
    Off,
}

fn default_indent_width() -> usize {
    4
}

fn default_includes() -> Vec<String> {
    DEFAULT_INCLUDES.iter().map(|s| s.to_string()).collect()
}

impl Default for CodegenConfig {
    fn default() -> Self {
        Self {
            indent_width: default_indent_width(),
            includes: default_includes(),
        }
    }
}

impl Config {
    /// Loads `itac.toml` from the working directory, or the defaults if
    /// there is none.
    pub fn load() -> Result<Self, ConfigError> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        if path.exists() {
            Self::load_from_path(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Loads a specific file.
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parses configuration text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Code generator options described by this configuration.
    pub fn codegen_options(&self) -> CodegenOptions {
        CodegenOptions {
            indent_width: self.codegen.indent_width,
            includes: self.codegen.includes.clone(),
        }
    }
}
