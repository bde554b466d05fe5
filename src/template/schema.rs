//! Template Schema Types
//!
//! The TOML-facing definition of a study-notes template and the runtime
//! form the validator checks against.

use anyhow::{Context, Result};
use regex::{Regex, RegexBuilder};
use serde::Deserialize;

/// Root template file structure (matches TOML).
///
/// Every table is optional so a user template can override only what it
/// needs; missing tables are taken from the base template.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct TemplateFile {
    pub template: Option<TemplateMeta>,
    pub sections: Option<Vec<SectionDef>>,
    pub metadata: Option<Vec<MetadataMarker>>,
    pub limits: Option<Limits>,
}

/// Template metadata
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct TemplateMeta {
    pub name: String,
    pub description: Option<String>,
}

/// A required section as written in the template file
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SectionDef {
    pub name: String,
    pub pattern: String,
}

/// An inline metadata marker such as `**Podcast:**`
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct MetadataMarker {
    pub name: String,
    pub marker: String,
}

/// Numeric thresholds for the content checks
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Limits {
    pub min_summary_sentences: usize,
    pub min_topics: usize,
    pub max_topics: usize,
    pub min_timestamps: usize,
    pub min_quotes: usize,
    pub max_quotes: usize,
    pub min_takeaways: usize,
    pub max_takeaways: usize,
    pub min_resources_chars: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            min_summary_sentences: 2,
            min_topics: 3,
            max_topics: 7,
            min_timestamps: 5,
            min_quotes: 3,
            max_quotes: 5,
            min_takeaways: 3,
            max_takeaways: 5,
            min_resources_chars: 10,
        }
    }
}

/// Required section with its heading pattern compiled (multi-line mode)
#[derive(Debug, Clone)]
pub struct RequiredSection {
    pub name: String,
    pub pattern: Regex,
}

impl RequiredSection {
    pub fn new(name: &str, pattern: &str) -> Result<Self> {
        let pattern = RegexBuilder::new(pattern)
            .multi_line(true)
            .build()
            .with_context(|| format!("invalid heading pattern for section '{}'", name))?;

        Ok(Self {
            name: name.to_string(),
            pattern,
        })
    }

    /// Whether the section heading occurs anywhere in `content`
    pub fn is_present(&self, content: &str) -> bool {
        self.pattern.is_match(content)
    }
}

impl PartialEq for RequiredSection {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.pattern.as_str() == other.pattern.as_str()
    }
}

/// Runtime template
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    pub name: String,
    pub description: Option<String>,
    pub sections: Vec<RequiredSection>,
    pub metadata: Vec<MetadataMarker>,
    pub limits: Limits,
}

impl Template {
    /// Build a template from a parsed file, taking anything the file leaves
    /// out from `base`.
    pub fn from_file_over(file: TemplateFile, base: &Template) -> Result<Self> {
        let (name, description) = match file.template {
            Some(meta) => (meta.name, meta.description),
            None => (base.name.clone(), base.description.clone()),
        };

        let sections = match file.sections {
            Some(defs) => defs
                .iter()
                .map(|def| RequiredSection::new(&def.name, &def.pattern))
                .collect::<Result<Vec<_>>>()?,
            None => base.sections.clone(),
        };

        Ok(Self {
            name,
            description,
            sections,
            metadata: file.metadata.unwrap_or_else(|| base.metadata.clone()),
            limits: file.limits.unwrap_or(base.limits),
        })
    }

    /// Look up a required section by display name
    pub fn section(&self, name: &str) -> Option<&RequiredSection> {
        self.sections.iter().find(|s| s.name == name)
    }
}
