//! Single-pass line renderer.
//!
//! The converter walks lines left to right carrying two pieces of
//! state: whether it is inside a fenced code block, and which list
//! container (if any) is currently open. Everything else is stateless
//! per line.

use super::inline::{escape_html, render_inline};

/// Open list container kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListKind {
    Unordered,
    Ordered,
}

impl ListKind {
    const fn tag(self) -> &'static str {
        match self {
            Self::Unordered => "ul",
            Self::Ordered => "ol",
        }
    }
}

/// Renders markdown text to an HTML fragment.
///
/// Total function: any input produces some output. Unbalanced code
/// fences and dangling lists are closed at end of input rather than
/// reported.
pub fn render(markdown: &str) -> String {
    let normalized = markdown.replace("\r\n", "\n");
    let mut out: Vec<String> = Vec::new();
    let mut in_code = false;
    let mut list: Option<ListKind> = None;

    for raw_line in normalized.split('\n') {
        // Tabs count as two spaces so indentation checks stay uniform.
        let line = raw_line.replace('\t', "  ");

        if line.trim().starts_with("```") {
            if in_code {
                out.push("</code></pre>".to_string());
                in_code = false;
            } else {
                close_list(&mut out, &mut list);
                out.push("<pre><code>".to_string());
                in_code = true;
            }
            continue;
        }

        if in_code {
            out.push(escape_html(&line));
            continue;
        }

        if let Some((level, text)) = heading(&line) {
            close_list(&mut out, &mut list);
            out.push(format!("<h{level}>{}</h{level}>", render_inline(text)));
            continue;
        }

        if let Some(text) = list_item(&line, ListKind::Unordered) {
            open_list(&mut out, &mut list, ListKind::Unordered);
            out.push(format!("<li>{}</li>", render_inline(text)));
            continue;
        }

        if let Some(text) = list_item(&line, ListKind::Ordered) {
            open_list(&mut out, &mut list, ListKind::Ordered);
            out.push(format!("<li>{}</li>", render_inline(text)));
            continue;
        }

        if line.trim().is_empty() {
            close_list(&mut out, &mut list);
            continue;
        }

        close_list(&mut out, &mut list);
        out.push(format!("<p>{}</p>", render_inline(&line)));
    }

    close_list(&mut out, &mut list);
    if in_code {
        out.push("</code></pre>".to_string());
    }
    out.join("\n")
}

fn close_list(out: &mut Vec<String>, list: &mut Option<ListKind>) {
    if let Some(kind) = list.take() {
        out.push(format!("</{}>", kind.tag()));
    }
}

fn open_list(out: &mut Vec<String>, list: &mut Option<ListKind>, kind: ListKind) {
    if *list != Some(kind) {
        close_list(out, list);
        out.push(format!("<{}>", kind.tag()));
        *list = Some(kind);
    }
}

/// Matches `#`, `##`, or `###` at line start followed by whitespace.
/// Four or more hashes, or a missing separator, is not a heading.
fn heading(line: &str) -> Option<(usize, &str)> {
    let hashes = line.bytes().take_while(|&b| b == b'#').count();
    if !(1..=3).contains(&hashes) {
        return None;
    }
    let rest = &line[hashes..];
    let text = rest.trim_start();
    if text.len() == rest.len() {
        return None;
    }
    Some((hashes, text))
}

/// Matches a list item marker (after optional indentation) followed by
/// whitespace, returning the item text.
fn list_item(line: &str, kind: ListKind) -> Option<&str> {
    let rest = line.trim_start();
    let rest = match kind {
        ListKind::Unordered => rest
            .strip_prefix('-')
            .or_else(|| rest.strip_prefix('*'))?,
        ListKind::Ordered => {
            let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
            if digits == 0 {
                return None;
            }
            rest[digits..].strip_prefix('.')?
        }
    };
    let text = rest.trim_start();
    if text.len() == rest.len() {
        return None;
    }
    Some(text)
}
