//! Inline span rendering.
//!
//! Applied to heading, list-item, and paragraph text, never to fenced
//! code content. The text is HTML-escaped first, then backtick code
//! spans and `[label](target)` links are substituted, in that order,
//! so literal markup characters are escaped exactly once and the
//! substituted tags are not re-escaped.

/// Escapes HTML special characters.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Renders inline markup: escape, then code spans, then links.
pub fn render_inline(text: &str) -> String {
    substitute_links(&substitute_code(&escape_html(text)))
}

/// Replaces non-greedy `` `span` `` pairs with `<code>` elements.
///
/// Spans are non-empty and cannot contain backticks; an unmatched or
/// empty pair is emitted literally.
fn substitute_code(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = rest.find('`') {
        match rest[start + 1..].find('`') {
            Some(len) if len > 0 => {
                result.push_str(&rest[..start]);
                result.push_str("<code>");
                result.push_str(&rest[start + 1..start + 1 + len]);
                result.push_str("</code>");
                rest = &rest[start + len + 2..];
            }
            _ => {
                result.push_str(&rest[..=start]);
                rest = &rest[start + 1..];
            }
        }
    }
    result.push_str(rest);
    result
}

/// Replaces `[label](target)` spans with anchor elements.
///
/// The label stops at the first `]`, the target at the first `)`, and
/// both must be non-empty; the target lands in `href` verbatim.
fn substitute_links(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = rest.find('[') {
        let Some((label, target, consumed)) = parse_link(&rest[start..]) else {
            result.push_str(&rest[..=start]);
            rest = &rest[start + 1..];
            continue;
        };
        result.push_str(&rest[..start]);
        result.push_str("<a href=\"");
        result.push_str(target);
        result.push_str("\">");
        result.push_str(label);
        result.push_str("</a>");
        rest = &rest[start + consumed..];
    }
    result.push_str(rest);
    result
}

/// Parses one link span at the start of `text` (which begins with `[`).
/// Returns the label, the target, and the number of bytes consumed.
fn parse_link(text: &str) -> Option<(&str, &str, usize)> {
    let close = text.find(']')?;
    let label = &text[1..close];
    if label.is_empty() {
        return None;
    }
    let after = &text[close + 1..];
    if !after.starts_with('(') {
        return None;
    }
    let end = after.find(')')?;
    let target = &after[1..end];
    if target.is_empty() {
        return None;
    }
    Some((label, target, close + 1 + end + 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html_entities() {
        // Act & Assert
        assert_eq!(
            escape_html("<script>&\"'</script>"),
            "&lt;script&gt;&amp;&quot;&#39;&lt;/script&gt;"
        );
    }

    #[test]
    fn test_code_span_substitution() {
        // Act & Assert
        assert_eq!(render_inline("use `x` here"), "use <code>x</code> here");
        assert_eq!(
            render_inline("`a` and `b`"),
            "<code>a</code> and <code>b</code>"
        );
    }

    #[test]
    fn test_unmatched_and_empty_backticks_stay_literal() {
        // Act & Assert
        assert_eq!(render_inline("lonely ` tick"), "lonely ` tick");
        assert_eq!(render_inline("empty `` pair"), "empty `` pair");
    }

    #[test]
    fn test_escaping_happens_before_code_substitution() {
        // Arrange: markup characters inside a span are escaped once
        let html = render_inline("check `a < b` please");

        // Assert
        assert_eq!(html, "check <code>a &lt; b</code> please");
    }

    #[test]
    fn test_link_substitution() {
        // Act & Assert
        assert_eq!(
            render_inline("see [docs](http://example.com/x)"),
            "see <a href=\"http://example.com/x\">docs</a>"
        );
    }

    #[test]
    fn test_malformed_links_stay_literal() {
        // Act & Assert
        assert_eq!(render_inline("[label] (gap)"), "[label] (gap)");
        assert_eq!(render_inline("[](empty-label)"), "[](empty-label)");
        assert_eq!(render_inline("[label]()"), "[label]()");
        assert_eq!(render_inline("[dangling"), "[dangling");
    }

    #[test]
    fn test_link_after_failed_candidate() {
        // Act & Assert: a failed '[' does not block a later match
        assert_eq!(
            render_inline("[a] then [b](c)"),
            "[a] then <a href=\"c\">b</a>"
        );
    }

    #[test]
    fn test_hostile_field_text_never_unescaped() {
        // Arrange
        let html = render_inline("<img onerror=alert(1)> & [x](javascript:y)");

        // Assert: angle brackets and ampersands are entities everywhere
        assert!(!html.contains("<img"));
        assert!(html.contains("&lt;img"));
        assert!(html.contains("&amp;"));
    }
}
