//! Content patterns
//!
//! Counters for the markdown conventions study notes use. All of them work
//! on raw section text.

use regex::Regex;
use std::sync::LazyLock;

static SENTENCE_END: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[.!?]+").unwrap());

static TOPIC_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^### ([^\r\n]+)").unwrap());

// `**[1:23]**`, `**12:34**` or `**Timestamp: 5:06**`
static TIMESTAMP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\*\*\[?\d{1,2}:\d{2}\]?\*\*|\*\*Timestamp:?\s*\d{1,2}:\d{2}\*\*").unwrap()
});

static GENERIC_TOPIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:topic|section|part) \d+").unwrap());

static QUOTE_LINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"(?m)^> ".+?""#).unwrap());

static QUOTE_ATTRIBUTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*Timestamp:?\s*\d{1,2}:\d{2}\*").unwrap());

static BULLET: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^[ \t]*- .+").unwrap());

/// Count runs of sentence-ending punctuation
pub fn count_sentences(text: &str) -> usize {
    SENTENCE_END.find_iter(text).count()
}

/// Heading text of every `### ` line
pub fn topic_headings(text: &str) -> Vec<&str> {
    TOPIC_HEADING
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().trim_end())
        .collect()
}

pub fn count_timestamps(text: &str) -> usize {
    TIMESTAMP.find_iter(text).count()
}

/// Placeholder names like "Topic 1", "Section 2" or "Part 3"
pub fn is_generic_topic(heading: &str) -> bool {
    GENERIC_TOPIC.is_match(heading)
}

/// Count single-line quoted blockquotes (`> "..."`)
pub fn count_quotes(text: &str) -> usize {
    QUOTE_LINE.find_iter(text).count()
}

/// Count `*Timestamp: H:MM*` attributions
pub fn count_quote_attributions(text: &str) -> usize {
    QUOTE_ATTRIBUTION.find_iter(text).count()
}

/// Count `- ` bullet lines, indented or not
pub fn count_bullets(text: &str) -> usize {
    BULLET.find_iter(text).count()
}
