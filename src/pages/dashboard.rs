//! Dashboard page generation

use maud::{Markup, PreEscaped, html};

use crate::board::Board;
use crate::components::detail::detail_panel;
use crate::components::filters::filter_controls;
use crate::components::issue_table::{issue_row, issue_table};
use crate::components::layout::page_wrapper;
use crate::components::summary::{summary_cards, total_chip};

/// Data container for dashboard page generation.
pub struct DashboardData<'a> {
    pub board: &'a Board,
    pub title: &'a str,
    /// Display name of the issue store, shown in the filter hint.
    pub source: &'a str,
    /// Pre-rendered markdown notes fragment, if any.
    pub notes_html: Option<&'a str>,
}

/// Generates the dashboard page for one board snapshot.
///
/// The page shows the hero header with summary chip, the filter card
/// reflecting the active filters, status summary cards, the issue
/// table in canonical order with the selected row highlighted, the
/// detail panel, and optional rendered notes.
pub fn generate(data: DashboardData<'_>) -> Markup {
    let board = data.board;
    let summary = board.summary();
    let visible = board.visible();
    let selected_id = board.selected().map(|issue| issue.id()).unwrap_or_default();

    let rows = html! {
        @if visible.is_empty() {
            tr {
                td class="empty-state" colspan="8" { "No issues match the current filters" }
            }
        } @else {
            @for issue in &visible {
                (issue_row(issue, !selected_id.is_empty() && issue.id() == selected_id))
            }
        }
    };

    page_wrapper(
        data.title,
        &["assets/dashboard.css", "assets/markdown.css"],
        html! {
            div class="hero" {
                div {
                    h1 class="h4" { (data.title) }
                    p class="muted small" {
                        "Local issue snapshot · Deterministic sort (status → project → severity → ID)"
                    }
                }
                div class="badges" {
                    (total_chip(&summary))
                }
            }

            (filter_controls(board, data.source))

            (summary_cards(&summary))

            div class="board-grid" {
                (issue_table(rows))
                (detail_panel(board.selected()))
            }

            @if let Some(notes) = data.notes_html {
                section class="notes-section" {
                    div class="card notes-content" {
                        (PreEscaped(notes))
                    }
                }
            }
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Dimension;
    use crate::issue::Issue;
    use serde_json::json;

    fn sample_board() -> Board {
        Board::new(vec![
            Issue::new(json!({
                "id": "BUG-1", "status": "open", "severity": "major",
                "project": "Atlas", "symptom": "login form hangs",
            })),
            Issue::new(json!({
                "id": "BUG-2", "status": "closed", "severity": "critical",
                "project": "Borealis", "close_note": "rolled back",
            })),
        ])
    }

    #[test]
    fn test_dashboard_contains_all_regions() {
        // Arrange
        let board = sample_board();

        // Act
        let html = generate(DashboardData {
            board: &board,
            title: "Issues",
            source: "issues.jsonl",
            notes_html: None,
        })
        .into_string();

        // Assert
        assert!(html.contains("<title>Issues - Bugboard</title>"));
        assert!(html.contains("2 shown / 2 total"));
        assert!(html.contains("id=\"summaryRow\""));
        assert!(html.contains("id=\"issues-body\""));
        assert!(html.contains("id=\"detailPanel\""));
        assert!(html.contains("BUG-1"));
        assert!(html.contains("BUG-2"));
        assert!(!html.contains("notes-section"), "No notes without a file");
    }

    #[test]
    fn test_dashboard_highlights_selection() {
        // Arrange
        let mut board = sample_board();
        board.select("BUG-1");

        // Act
        let html = generate(DashboardData {
            board: &board,
            title: "Issues",
            source: "issues.jsonl",
            notes_html: None,
        })
        .into_string();

        // Assert
        assert!(html.contains("is-selected"));
        assert!(html.contains("Project: Atlas"), "Detail meta line filled in");
        assert!(!html.contains("No issue selected."));
    }

    #[test]
    fn test_dashboard_selection_cleared_by_filter() {
        // Arrange: select an issue, then filter it out
        let mut board = sample_board();
        board.select("BUG-1");
        board.set_filter(Dimension::Status, "closed");

        // Act
        let html = generate(DashboardData {
            board: &board,
            title: "Issues",
            source: "issues.jsonl",
            notes_html: None,
        })
        .into_string();

        // Assert
        assert!(!html.contains("is-selected"));
        assert!(html.contains("No issue selected."));
        assert!(html.contains("1 shown / 2 total"));
    }

    #[test]
    fn test_dashboard_empty_view_state() {
        // Arrange
        let mut board = sample_board();
        board.set_search("no such text anywhere");

        // Act
        let html = generate(DashboardData {
            board: &board,
            title: "Issues",
            source: "issues.jsonl",
            notes_html: None,
        })
        .into_string();

        // Assert
        assert!(html.contains("No issues match the current filters"));
        assert!(html.contains("0 shown / 2 total"));
    }

    #[test]
    fn test_dashboard_inlines_rendered_notes() {
        // Arrange
        let board = sample_board();
        let notes = crate::markdown::render("# Release Notes\n\n- shipped");

        // Act
        let html = generate(DashboardData {
            board: &board,
            title: "Issues",
            source: "issues.jsonl",
            notes_html: Some(&notes),
        })
        .into_string();

        // Assert
        assert!(html.contains("notes-section"));
        assert!(html.contains("<h1>Release Notes</h1>"));
        assert!(html.contains("<li>shipped</li>"));
    }
}
