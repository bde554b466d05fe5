//! Report rendering
//!
//! Turns a [`ValidationReport`] into the text printed on stdout, or into
//! JSON for tooling.

use anyhow::{Context, Result};
use serde::Serialize;
use std::fmt::Write;

use crate::config::OutputFormat;
use crate::validation::{Stats, Termination, ValidationReport};

/// Render a report in the requested format
pub fn render(report: &ValidationReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(report)),
        OutputFormat::Json => render_json(report),
    }
}

/// Human-readable report
pub fn render_text(report: &ValidationReport) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail
    let _ = write_text(&mut out, report);
    out
}

fn write_text(out: &mut String, report: &ValidationReport) -> std::fmt::Result {
    match report.termination {
        Termination::DocumentUnavailable => {
            for error in report.errors() {
                writeln!(out, "❌ FAIL: {}", error)?;
            }
        }
        Termination::MissingSections => {
            writeln!(out, "❌ FAIL: Missing required sections")?;
            for error in report.errors() {
                writeln!(out, "  - {}", error)?;
            }
        }
        Termination::Completed if report.has_errors() => {
            writeln!(out, "❌ FAIL: Validation errors found")?;
            for error in report.errors() {
                writeln!(out, "  ❌ {}", error)?;
            }
            if report.warnings().next().is_some() {
                writeln!(out, "\nWarnings:")?;
                for warning in report.warnings() {
                    writeln!(out, "  ⚠️  {}", warning)?;
                }
            }
        }
        Termination::Completed => {
            writeln!(out, "✅ PASS: All validation checks passed!")?;
            writeln!(out, "\nStats:")?;
            writeln!(out, "  📝 Topics: {}", report.stats.topics)?;
            writeln!(out, "  ⏱️  Timestamps: {}", report.stats.timestamps)?;
            writeln!(out, "  💬 Quotes: {}", report.stats.quotes)?;
            writeln!(out, "  🎯 Takeaways: {}", report.stats.takeaways)?;

            if report.warnings().next().is_some() {
                writeln!(out, "\n⚠️  Warnings (non-blocking):")?;
                for warning in report.warnings() {
                    writeln!(out, "  - {}", warning)?;
                }
            }

            let file_name = report
                .path
                .file_name()
                .map(|name| name.to_string_lossy())
                .unwrap_or_else(|| report.path.to_string_lossy());
            writeln!(out, "\n✨ {} is ready!", file_name)?;
        }
    }
    Ok(())
}

#[derive(Serialize)]
struct JsonReport<'a> {
    passed: bool,
    termination: Termination,
    path: String,
    errors: Vec<&'a str>,
    warnings: Vec<&'a str>,
    stats: Stats,
}

/// Machine-readable report
pub fn render_json(report: &ValidationReport) -> Result<String> {
    let json = JsonReport {
        passed: report.is_valid(),
        termination: report.termination,
        path: report.path.display().to_string(),
        errors: report.errors().collect(),
        warnings: report.warnings().collect(),
        stats: report.stats,
    };

    let mut out = serde_json::to_string_pretty(&json).context("failed to serialize report")?;
    out.push('\n');
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_report() {
        let mut report = ValidationReport::new("study-notes.md");
        report.termination = Termination::DocumentUnavailable;
        report.add_error("study-notes.md not found");

        assert_eq!(render_text(&report), "❌ FAIL: study-notes.md not found\n");
    }

    #[test]
    fn test_missing_sections_report() {
        let mut report = ValidationReport::new("study-notes.md");
        report.termination = Termination::MissingSections;
        report.add_error("Missing required section: Key Points");
        report.add_error("Missing required section: Notable Quotes");

        assert_eq!(
            render_text(&report),
            "❌ FAIL: Missing required sections\n  \
             - Missing required section: Key Points\n  \
             - Missing required section: Notable Quotes\n"
        );
    }

    #[test]
    fn test_failure_report_lists_warnings_after_errors() {
        let mut report = ValidationReport::new("study-notes.md");
        report.add_warning("Missing metadata: Date");
        report.add_error("Found 2 quotes, need at least 3");

        assert_eq!(
            render_text(&report),
            "❌ FAIL: Validation errors found\n  ❌ Found 2 quotes, need at least 3\n\n\
             Warnings:\n  ⚠️  Missing metadata: Date\n"
        );
    }

    #[test]
    fn test_success_report() {
        let mut report = ValidationReport::new("notes/study-notes.md");
        report.stats = Stats {
            topics: 4,
            timestamps: 6,
            quotes: 3,
            takeaways: 4,
        };
        report.add_warning("Found generic topic names: Topic 1");

        let text = render_text(&report);
        assert!(text.starts_with("✅ PASS: All validation checks passed!\n\nStats:\n"));
        assert!(text.contains("  📝 Topics: 4\n"));
        assert!(text.contains("  ⏱️  Timestamps: 6\n"));
        assert!(text.contains("  💬 Quotes: 3\n"));
        assert!(text.contains("  🎯 Takeaways: 4\n"));
        assert!(text.contains(
            "\n⚠️  Warnings (non-blocking):\n  - Found generic topic names: Topic 1\n"
        ));
        assert!(text.ends_with("\n✨ study-notes.md is ready!\n"));
    }

    #[test]
    fn test_success_without_warnings_has_no_warning_block() {
        let report = ValidationReport::new("study-notes.md");
        assert!(!render_text(&report).contains("Warnings"));
    }

    #[test]
    fn test_json_report() {
        let mut report = ValidationReport::new("study-notes.md");
        report.add_error("Found 1 takeaways, need at least 3");
        report.stats.takeaways = 1;

        let value: serde_json::Value =
            serde_json::from_str(&render_json(&report).expect("render")).expect("valid json");

        assert_eq!(value["passed"], false);
        assert_eq!(value["termination"], "completed");
        assert_eq!(value["path"], "study-notes.md");
        assert_eq!(value["errors"][0], "Found 1 takeaways, need at least 3");
        assert_eq!(value["warnings"].as_array().map(Vec::len), Some(0));
        assert_eq!(value["stats"]["takeaways"], 1);
    }
}
