//! Study Notes Parser
//!
//! Pattern-based access to a markdown document. There is no document tree:
//! sections and counts are found by searching the raw text.

pub mod document;
pub mod patterns;
pub mod section;

pub use document::{Document, DocumentError};
pub use section::{find_section, Boundary, Section};
