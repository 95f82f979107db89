//! Issue detail panel

use maud::{Markup, html};

use super::badge::{severity_badge, status_badge};
use crate::issue::Issue;

/// Renders the detail panel for the selected issue, or the placeholder
/// state when nothing valid is selected.
pub fn detail_panel(issue: Option<&Issue>) -> Markup {
    html! {
        aside class="card detail" id="detailPanel" {
            @match issue {
                Some(issue) => {
                    (detail_body(issue))
                }
                None => {
                    h2 class="h5" id="detailTitle" { "Issue Details" }
                    p class="muted small" id="detailMeta" { "Select a bug to view details." }
                    div id="detailBadges" {}
                    div id="detailBody" {
                        div class="muted small" { "No issue selected." }
                    }
                }
            }
        }
    }
}

fn detail_body(issue: &Issue) -> Markup {
    let id = issue.id();
    let title = if id.is_empty() { "Issue Details".to_string() } else { id };
    let meta = meta_line(issue);
    let close = issue.closure_note();
    let fields = [
        ("Summary", issue.summary()),
        ("Root cause", issue.root_cause()),
        ("Proposed fix", issue.proposed_fix()),
        ("QA reproduction", issue.qa_repro()),
        ("Owner", issue.owner()),
        ("Opened", issue.opened_at()),
        ("Closed", issue.closed_at()),
        ("Closure note", close),
    ];
    let has_fields = fields.iter().any(|(_, value)| !value.is_empty());

    html! {
        h2 class="h5" id="detailTitle" { (title) }
        p class="muted small" id="detailMeta" {
            (if meta.is_empty() { "Issue metadata".to_string() } else { meta })
        }
        div id="detailBadges" {
            (status_badge(issue))
            " "
            (severity_badge(issue))
        }
        div id="detailBody" {
            @if has_fields {
                @for (label, value) in &fields {
                    (detail_field(label, value))
                }
            } @else {
                div class="muted small" { "No details provided." }
            }
        }
    }
}

/// Renders one labelled field, or nothing when the value is empty.
fn detail_field(label: &str, value: &str) -> Markup {
    if value.is_empty() {
        return html! {};
    }
    html! {
        div class="detail-item" {
            div class="muted small" { (label) }
            div { (value) }
        }
    }
}

/// Joins the present location fields with a separator for the meta line.
fn meta_line(issue: &Issue) -> String {
    let bits = [
        ("Project", issue.project()),
        ("Phase", issue.phase()),
        ("Stage", issue.stage()),
        ("Area", issue.area()),
    ];
    bits.iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(label, value)| format!("{}: {}", label, value))
        .collect::<Vec<_>>()
        .join(" · ")
}
