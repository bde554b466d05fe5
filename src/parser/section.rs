//! Section extraction
//!
//! Sections are located with the same heading pattern that decides whether
//! they exist. The body runs from the end of the matched heading line up to
//! a boundary marker or the end of the document.

use regex::Regex;

/// Where a section body stops
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    /// Next line starting with `##`, including deeper headings
    AnyHeading,
    /// Next line starting with `## `
    SameLevel,
    /// Runs to the end of the document
    EndOfDocument,
}

impl Boundary {
    fn marker(self) -> Option<&'static str> {
        match self {
            Boundary::AnyHeading => Some("\n##"),
            Boundary::SameLevel => Some("\n## "),
            Boundary::EndOfDocument => None,
        }
    }
}

/// A section located in a document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section<'a> {
    /// Full heading line, without the line terminator
    pub heading: &'a str,
    /// Text between the heading line and the boundary
    pub body: &'a str,
}

/// Extract the section whose heading is the first match of `heading`
pub fn find_section<'a>(
    content: &'a str,
    heading: &Regex,
    boundary: Boundary,
) -> Option<Section<'a>> {
    let found = heading.find(content)?;

    let line_start = content[..found.start()].rfind('\n').map_or(0, |idx| idx + 1);
    let line_end = content[found.end()..]
        .find('\n')
        .map_or(content.len(), |offset| found.end() + offset);
    let heading_line = content[line_start..line_end].trim_end_matches('\r');

    let rest = &content[line_end..];
    let body_len = boundary
        .marker()
        .and_then(|marker| rest.find(marker))
        .unwrap_or(rest.len());

    Some(Section {
        heading: heading_line,
        body: &rest[..body_len],
    })
}
