//! Tests for loading custom templates from disk
use std::fs;

use study_notes_validator::validation::Termination;
use study_notes_validator::{validate_document, Config, Document, Template};

const PASSING_NOTES: &str = include_str!("fixtures/passing-notes.md");

fn write_template(dir: &tempfile::TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("template.toml");
    fs::write(&path, content).expect("write template");
    path
}

#[test]
fn test_custom_limits_change_outcome() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_template(&dir, "[limits]\nmin_topics = 5\nmax_quotes = 2\n");

    let template = Template::from_path(&path).expect("load template");
    assert_eq!(template.limits.min_topics, 5);
    assert_eq!(template.limits.min_timestamps, 5);

    let report = validate_document(&Document::new("study-notes.md", PASSING_NOTES), &template);
    assert_eq!(
        report.errors().collect::<Vec<_>>(),
        vec!["Found 4 topics, need at least 5"]
    );
    assert!(report
        .warnings()
        .any(|w| w == "Found 3 quotes, recommended max is 2"));
}

#[test]
fn test_custom_sections_and_metadata() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_template(
        &dir,
        r#"
[template]
name = "interview-notes"

[[sections]]
name = "Guest Bio"
pattern = '^## Guest Bio\b'

[[metadata]]
name = "Guest"
marker = "**Guest:**"
"#,
    );

    let template = Template::from_path(&path).expect("load template");
    assert_eq!(template.name, "interview-notes");

    let report = validate_document(&Document::new("notes.md", PASSING_NOTES), &template);
    assert_eq!(report.termination, Termination::MissingSections);
    assert_eq!(
        report.errors().collect::<Vec<_>>(),
        vec!["Missing required section: Guest Bio"]
    );

    let with_bio = format!("{}\n## Guest Bio\n\nA guest.\n", PASSING_NOTES);
    let report = validate_document(&Document::new("notes.md", with_bio), &template);
    assert!(report.is_valid());
    assert!(report.warnings().any(|w| w == "Missing metadata: Guest"));
}

#[test]
fn test_dropped_section_keeps_zero_stats() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_template(
        &dir,
        r#"
[[sections]]
name = "Title (H1)"
pattern = "^# .+"
"#,
    );

    let template = Template::from_path(&path).expect("load template");
    let content = "# Just a title\n\n**Podcast:** x **Duration:** y **Date:** z\n";
    let report = validate_document(&Document::new("study-notes.md", content), &template);

    assert!(report.is_valid());
    assert_eq!(report.stats.topics, 0);
    assert_eq!(report.stats.quotes, 0);
    assert_eq!(report.stats.takeaways, 0);
}

#[test]
fn test_relaxed_heading_pattern_checks_matched_body() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_template(
        &dir,
        r#"
[[sections]]
name = "Key Points"
pattern = '^##\s+Key Points\b'
"#,
    );

    let template = Template::from_path(&path).expect("load template");
    let content = "# T\n\n##  Key Points\n\nnothing here\n";
    let report = validate_document(&Document::new("study-notes.md", content), &template);

    assert_eq!(report.termination, Termination::Completed);
    assert!(!report.is_valid());
    assert_eq!(
        report.errors().collect::<Vec<_>>(),
        vec![
            "Found 0 topics, need at least 3",
            "Found 0 timestamps in Key Points, need at least 5",
        ]
    );

    let content = "# T\n\n##  Key Points\n\n### A\n**1:00**\n### B\n**2:00**\n\
                   ### C\n**3:00** **4:00** **5:00**\n";
    let report = validate_document(&Document::new("study-notes.md", content), &template);
    assert!(report.is_valid());
    assert_eq!(report.stats.topics, 3);
    assert_eq!(report.stats.timestamps, 5);
}

#[test]
fn test_invalid_pattern_is_load_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_template(&dir, "[[sections]]\nname = \"Broken\"\npattern = \"^## (\"\n");

    let err = Template::from_path(&path).unwrap_err();
    let message = format!("{:#}", err);
    assert!(message.contains("template.toml"));
    assert!(message.contains("'Broken'"));
}

#[test]
fn test_malformed_toml_is_load_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_template(&dir, "[limits\nmin_topics = ");

    assert!(Template::from_path(&path).is_err());
}

#[test]
fn test_config_loads_embedded_template_by_default() {
    let template = Config::default().load_template().expect("embedded template");
    assert_eq!(template, Template::embedded());
}
