//! Study Notes Validator
//!
//! Checks that a generated podcast study-notes markdown file follows the
//! study-notes template.
//!
//! This library provides:
//! - Template definitions (required sections, metadata markers, limits)
//! - Pattern-based section extraction and counting
//! - The validation pipeline and its report
//! - Text and JSON report rendering

pub mod cli;
pub mod config;
pub mod parser;
pub mod report;
pub mod template;
pub mod validation;

// Re-exports for clean public API
pub use config::{Config, OutputFormat};
pub use parser::{Document, DocumentError};
pub use template::Template;
pub use validation::{validate_document, validate_path, Finding, Severity, Stats, ValidationReport};
