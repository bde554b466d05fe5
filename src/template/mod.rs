//! Study Notes Templates
//!
//! The default template is embedded in the binary; a TOML file on disk can
//! override any part of it.

pub mod schema;

pub use schema::{Limits, MetadataMarker, RequiredSection, SectionDef, Template, TemplateFile};

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// The embedded default template
pub const EMBEDDED_TEMPLATE: &str = include_str!("../../resources/templates/study-notes.toml");

const BUILTIN_SECTIONS: &[(&str, &str)] = &[
    ("Title (H1)", r"^# .+"),
    ("Executive Summary", r"^## Executive Summary\b"),
    ("Key Points", r"^## Key Points\b"),
    ("Notable Quotes", r"^## Notable Quotes\b"),
    ("Key Takeaways", r"^## Key Takeaways\b"),
    ("Resources Mentioned", r"^## Resources Mentioned\b"),
];

const BUILTIN_METADATA: &[(&str, &str)] = &[
    ("Podcast name", "**Podcast:**"),
    ("Duration", "**Duration:**"),
    ("Date", "**Date:**"),
];

impl Template {
    /// Load the embedded default template
    pub fn embedded() -> Self {
        let builtin = Self::builtin();

        match Self::from_toml_str(EMBEDDED_TEMPLATE, &builtin) {
            Ok(template) => template,
            Err(e) => {
                log::warn!(
                    "Failed to parse embedded template: {:#}. Using built-in fallback.",
                    e
                );
                builtin
            }
        }
    }

    /// Parse a template from TOML, filling omitted tables from `base`
    pub fn from_toml_str(content: &str, base: &Template) -> Result<Self> {
        let file: TemplateFile = toml::from_str(content).context("failed to parse template TOML")?;
        Self::from_file_over(file, base)
    }

    /// Load a template file from disk, layered over the embedded default
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read template {}", path.display()))?;

        let template = Self::from_toml_str(&content, &Self::embedded())
            .with_context(|| format!("invalid template {}", path.display()))?;

        log::info!("Loaded template '{}' from {}", template.name, path.display());
        Ok(template)
    }

    /// Fallback template used if the embedded TOML cannot be parsed
    fn builtin() -> Self {
        let sections = BUILTIN_SECTIONS
            .iter()
            .filter_map(|(name, pattern)| RequiredSection::new(name, pattern).ok())
            .collect();

        let metadata = BUILTIN_METADATA
            .iter()
            .map(|(name, marker)| MetadataMarker {
                name: name.to_string(),
                marker: marker.to_string(),
            })
            .collect();

        Self {
            name: "study-notes".to_string(),
            description: Some("Built-in fallback template".to_string()),
            sections,
            metadata,
            limits: Limits::default(),
        }
    }
}

impl Default for Template {
    fn default() -> Self {
        Self::embedded()
    }
}
