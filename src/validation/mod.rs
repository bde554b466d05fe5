//! Validation Engine
//!
//! Structural and content checks for study notes, separated from loading
//! and reporting.

pub mod checks;
pub mod engine;

pub use engine::{validate_document, validate_path, Finding, Severity, Stats, Termination};

// Re-export common types
pub use engine::ValidationReport;
