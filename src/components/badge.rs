//! Status and severity badges

use maud::{Markup, html};

use crate::issue::Issue;

/// Renders a labelled badge, showing "-" for empty text.
pub fn badge(text: &str, class: &str) -> Markup {
    html! {
        span class=(format!("badge {}", class)) {
            (if text.is_empty() { "-" } else { text })
        }
    }
}

/// Renders the status badge for an issue, defaulting to "open".
///
/// The badge keeps the record's raw casing; the CSS class uses the
/// lowercased value.
pub fn status_badge(issue: &Issue) -> Markup {
    let text = issue.status_text();
    let display = if text.is_empty() { "open" } else { text.as_str() };
    badge(display, &format!("status-{}", display.to_lowercase()))
}

/// Renders the severity badge for an issue, defaulting to "minor".
pub fn severity_badge(issue: &Issue) -> Markup {
    let text = issue.severity_text();
    let display = if text.is_empty() { "minor" } else { text.as_str() };
    badge(display, &format!("sev-{}", display.to_lowercase()))
}
