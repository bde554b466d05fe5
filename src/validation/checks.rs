//! Per-section content checks
//!
//! Each check extracts its section body and records findings and stats on
//! the report. Bodies are located with the template's own heading pattern,
//! so a section that passed the required-section gate always has a body. A
//! section the template does not require is skipped and its stats stay at
//! zero.

use super::engine::ValidationReport;
use crate::parser::patterns;
use crate::parser::{find_section, Boundary, Section};
use crate::template::Template;

pub const EXECUTIVE_SUMMARY: &str = "Executive Summary";
pub const KEY_POINTS: &str = "Key Points";
pub const NOTABLE_QUOTES: &str = "Notable Quotes";
pub const KEY_TAKEAWAYS: &str = "Key Takeaways";
pub const RESOURCES_MENTIONED: &str = "Resources Mentioned";

/// Body of the template section called `name`
fn section_body<'a>(
    content: &'a str,
    template: &Template,
    name: &str,
    boundary: Boundary,
) -> Option<Section<'a>> {
    let Some(required) = template.section(name) else {
        log::debug!("{} is not in template '{}', skipping", name, template.name);
        return None;
    };

    let section = find_section(content, &required.pattern, boundary);
    if section.is_none() {
        log::debug!("{} heading not found, skipping", name);
    }
    section
}

pub fn check_executive_summary(content: &str, template: &Template, report: &mut ValidationReport) {
    let Some(section) = section_body(content, template, EXECUTIVE_SUMMARY, Boundary::AnyHeading)
    else {
        return;
    };
    let limits = &template.limits;

    let sentences = patterns::count_sentences(section.body.trim());
    if sentences < limits.min_summary_sentences {
        report.add_warning(format!(
            "Executive Summary seems short ({} sentences)",
            sentences
        ));
    }
}

pub fn check_key_points(content: &str, template: &Template, report: &mut ValidationReport) {
    let Some(section) = section_body(content, template, KEY_POINTS, Boundary::SameLevel) else {
        return;
    };
    let limits = &template.limits;

    let topics = patterns::topic_headings(section.body);
    let topic_count = topics.len();

    if topic_count < limits.min_topics {
        report.add_error(format!(
            "Found {} topics, need at least {}",
            topic_count, limits.min_topics
        ));
    } else if topic_count > limits.max_topics {
        report.add_warning(format!(
            "Found {} topics, recommended max is {}",
            topic_count, limits.max_topics
        ));
    }

    let timestamp_count = patterns::count_timestamps(section.body);
    if timestamp_count < limits.min_timestamps {
        report.add_error(format!(
            "Found {} timestamps in Key Points, need at least {}",
            timestamp_count, limits.min_timestamps
        ));
    }

    let generic: Vec<&str> = topics
        .iter()
        .copied()
        .filter(|t| patterns::is_generic_topic(t))
        .collect();
    if !generic.is_empty() {
        report.add_warning(format!("Found generic topic names: {}", generic.join(", ")));
    }

    log::debug!(
        "{}: {} topics, {} timestamps",
        section.heading,
        topic_count,
        timestamp_count
    );
    report.stats.topics = topic_count;
    report.stats.timestamps = timestamp_count;
}

pub fn check_notable_quotes(content: &str, template: &Template, report: &mut ValidationReport) {
    let Some(section) = section_body(content, template, NOTABLE_QUOTES, Boundary::SameLevel) else {
        return;
    };
    let limits = &template.limits;

    let quote_count = patterns::count_quotes(section.body);
    if quote_count < limits.min_quotes {
        report.add_error(format!(
            "Found {} quotes, need at least {}",
            quote_count, limits.min_quotes
        ));
    } else if quote_count > limits.max_quotes {
        report.add_warning(format!(
            "Found {} quotes, recommended max is {}",
            quote_count, limits.max_quotes
        ));
    }

    // Aggregate count, not matched per quote
    if patterns::count_quote_attributions(section.body) < quote_count {
        report.add_warning("Not all quotes have timestamp attribution");
    }

    report.stats.quotes = quote_count;
}

pub fn check_key_takeaways(content: &str, template: &Template, report: &mut ValidationReport) {
    let Some(section) = section_body(content, template, KEY_TAKEAWAYS, Boundary::SameLevel) else {
        return;
    };
    let limits = &template.limits;

    let takeaway_count = patterns::count_bullets(section.body);
    if takeaway_count < limits.min_takeaways {
        report.add_error(format!(
            "Found {} takeaways, need at least {}",
            takeaway_count, limits.min_takeaways
        ));
    } else if takeaway_count > limits.max_takeaways {
        report.add_warning(format!(
            "Found {} takeaways, recommended max is {}",
            takeaway_count, limits.max_takeaways
        ));
    }

    report.stats.takeaways = takeaway_count;
}

pub fn check_resources(content: &str, template: &Template, report: &mut ValidationReport) {
    let Some(section) =
        section_body(content, template, RESOURCES_MENTIONED, Boundary::EndOfDocument)
    else {
        return;
    };

    if section.body.trim().chars().count() < template.limits.min_resources_chars {
        report.add_warning("Resources section seems empty");
    }
}
