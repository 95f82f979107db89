//! Issue table components

use maud::{Markup, html};

use super::badge::{severity_badge, status_badge};
use crate::issue::Issue;

/// Wraps issue rows in the table structure with its header row.
///
/// The container handles the card styling while individual rows are
/// rendered by `issue_row`.
pub fn issue_table(rows: Markup) -> Markup {
    html! {
        div class="card" {
            div class="table-wrap" {
                table class="issues" {
                    thead {
                        tr {
                            th { "ID" }
                            th { "Status" }
                            th { "Severity" }
                            th { "Project" }
                            th { "Phase" }
                            th { "Stage" }
                            th { "Area" }
                            th { "Details" }
                        }
                    }
                    tbody id="issues-body" {
                        (rows)
                    }
                }
            }
        }
    }
}

/// Renders a single issue row.
///
/// The selected row carries the `is-selected` class; every row exposes
/// its identifier via `data-id` and is keyboard-reachable.
pub fn issue_row(issue: &Issue, selected: bool) -> Markup {
    let id = issue.id();
    let summary = issue.summary();
    let row_label = if !summary.is_empty() {
        format!("View details for {}", summary)
    } else if !id.is_empty() {
        format!("View details for {}", id)
    } else {
        "View details".to_string()
    };

    html! {
        tr class=[selected.then_some("is-selected")] data-id=(id) tabindex="0"
            role="button" aria-label=(row_label) {
            td class="id" { (id) }
            td { (status_badge(issue)) }
            td { (severity_badge(issue)) }
            td { (issue.project()) }
            td { (issue.phase()) }
            td { (issue.stage()) }
            td {
                div class="fw" { (issue.area()) }
                div class="muted small" { (issue.symptom()) }
            }
            td { (details_cell(issue)) }
        }
    }
}

/// The collapsed details blob: root cause, proposed fix, QA repro,
/// closure note for closed issues, and the opened/closed timestamps.
fn details_cell(issue: &Issue) -> Markup {
    let close = issue.closure_note();
    let closed = issue.closed_at();
    html! {
        div { strong { "Root cause: " } (issue.root_cause()) }
        div { strong { "Proposed fix: " } (issue.proposed_fix()) }
        div { strong { "QA repro: " } (issue.qa_repro()) }
        @if !close.is_empty() {
            div { strong { "Closure note: " } (close) }
        }
        div class="muted small" {
            "Opened: " (issue.opened_at())
            @if !closed.is_empty() {
                " · Closed: " (closed)
            }
        }
    }
}
