//! Configuration management for the study notes validator.
//!
//! Handles:
//! - Command-line argument parsing
//! - Template selection

use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::template::Template;

/// File validated when no path is given
pub const DEFAULT_NOTES_FILE: &str = "study-notes.md";

/// Report output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Command-line arguments for the validator
#[derive(Debug, Parser)]
#[command(name = "validate-notes")]
#[command(about = "Check podcast study notes against the study-notes template")]
#[command(version)]
pub struct Args {
    /// Study notes file to validate
    #[arg(default_value = DEFAULT_NOTES_FILE)]
    pub path: PathBuf,

    /// Template file overriding the built-in template
    #[arg(long, help = "TOML template with sections, metadata markers and limits")]
    pub template: Option<PathBuf>,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Log level for diagnostics on stderr
    #[arg(
        long,
        default_value = "warn",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: String,
}

/// Resolved configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub notes_path: PathBuf,
    pub template_path: Option<PathBuf>,
    pub format: OutputFormat,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            notes_path: PathBuf::from(DEFAULT_NOTES_FILE),
            template_path: None,
            format: OutputFormat::Text,
            log_level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args_and_env() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    /// Create configuration from explicit arguments (useful for testing)
    pub fn from_args(args: Args) -> Result<Self> {
        let log_level = match args.log_level.trim() {
            "" => "warn".to_string(),
            level => level.to_lowercase(),
        };

        Ok(Config {
            notes_path: args.path,
            template_path: args.template,
            format: args.format,
            log_level,
        })
    }

    /// Load the configured template, or the embedded one
    pub fn load_template(&self) -> Result<Template> {
        match &self.template_path {
            Some(path) => Template::from_path(path),
            None => Ok(Template::embedded()),
        }
    }
}
