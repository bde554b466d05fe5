//! Validation Engine
//!
//! Runs the fixed sequence of checks over a study-notes document and
//! collects the findings into a report.

use serde::Serialize;
use std::path::{Path, PathBuf};

use super::checks;
use crate::parser::Document;
use crate::template::Template;

/// Severity of a finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Blocking: the document fails validation
    Error,
    /// Reported but does not fail validation
    Warning,
}

/// A single diagnostic produced by a check
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub severity: Severity,
    pub message: String,
}

/// Counts reported on success
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub topics: usize,
    pub timestamps: usize,
    pub quotes: usize,
    pub takeaways: usize,
}

/// How a validation run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Termination {
    /// Every check ran
    Completed,
    /// The file was missing or unreadable
    DocumentUnavailable,
    /// Required sections were missing, content checks skipped
    MissingSections,
}

/// Result of validating a document
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationReport {
    pub path: PathBuf,
    pub termination: Termination,
    pub findings: Vec<Finding>,
    pub stats: Stats,
}

impl ValidationReport {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            termination: Termination::Completed,
            findings: Vec::new(),
            stats: Stats::default(),
        }
    }

    pub fn add_error(&mut self, message: impl Into<String>) {
        self.findings.push(Finding {
            severity: Severity::Error,
            message: message.into(),
        });
    }

    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.findings.push(Finding {
            severity: Severity::Warning,
            message: message.into(),
        });
    }

    /// Error messages in the order they were found
    pub fn errors(&self) -> impl Iterator<Item = &str> {
        self.messages(Severity::Error)
    }

    /// Warning messages in the order they were found
    pub fn warnings(&self) -> impl Iterator<Item = &str> {
        self.messages(Severity::Warning)
    }

    fn messages(&self, severity: Severity) -> impl Iterator<Item = &str> {
        self.findings
            .iter()
            .filter(move |f| f.severity == severity)
            .map(|f| f.message.as_str())
    }

    pub fn has_errors(&self) -> bool {
        self.findings.iter().any(|f| f.severity == Severity::Error)
    }

    pub fn is_valid(&self) -> bool {
        !self.has_errors()
    }
}

/// Load and validate the file at `path`
///
/// A missing or unreadable file ends the run with a single error; it never
/// surfaces as an `Err`.
pub fn validate_path(path: &Path, template: &Template) -> ValidationReport {
    match Document::load(path) {
        Ok(document) => validate_document(&document, template),
        Err(e) => {
            log::debug!("Document unavailable: {}", e);
            let mut report = ValidationReport::new(path);
            report.termination = Termination::DocumentUnavailable;
            report.add_error(e.to_string());
            report
        }
    }
}

/// Validate a loaded document
pub fn validate_document(document: &Document, template: &Template) -> ValidationReport {
    let content = document.content();
    let mut report = ValidationReport::new(document.path());

    log::debug!(
        "Validating {} ({} bytes) against template '{}'",
        document.path().display(),
        content.len(),
        template.name
    );

    for section in &template.sections {
        if !section.is_present(content) {
            report.add_error(format!("Missing required section: {}", section.name));
        }
    }

    if report.has_errors() {
        report.termination = Termination::MissingSections;
        return report;
    }

    for meta in &template.metadata {
        if !content.contains(&meta.marker) {
            report.add_warning(format!("Missing metadata: {}", meta.name));
        }
    }

    checks::check_executive_summary(content, template, &mut report);
    checks::check_key_points(content, template, &mut report);
    checks::check_notable_quotes(content, template, &mut report);
    checks::check_key_takeaways(content, template, &mut report);
    checks::check_resources(content, template, &mut report);

    log::debug!(
        "Validation finished: {} finding(s), stats {:?}",
        report.findings.len(),
        report.stats
    );

    report
}
