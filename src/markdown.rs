//! Line-oriented markdown rendering.
//!
//! This module provides a small, total markdown-to-HTML converter for
//! dashboard notes: headings (levels 1-3), flat unordered/ordered
//! lists, fenced code blocks, inline code spans, inline links, and
//! paragraphs. Any input produces some HTML output; there are no error
//! outcomes.

mod inline;
mod renderer;

pub use inline::{escape_html, render_inline};
pub use renderer::render;

use std::io::ErrorKind;
use std::path::Path;

/// Reads a markdown file and renders it to an HTML fragment.
///
/// Failures degrade to a muted hint paragraph instead of an error: a
/// permission failure gets a hint pointing at the access restriction,
/// anything else gets a generic message.
pub fn load(path: &Path) -> String {
    match std::fs::read_to_string(path) {
        Ok(text) => render(&text),
        Err(err) => {
            let hint = if err.kind() == ErrorKind::PermissionDenied {
                "Markdown read blocked by file permissions. Re-run from a directory you can read (for example the project root)."
            } else {
                "Unable to load markdown."
            };
            format!("<p class=\"muted small\">{}</p>", hint)
        }
    }
}
