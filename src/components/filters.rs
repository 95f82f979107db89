//! Filter control components
//!
//! Emits the filter card: one labelled select per dimension (anchor
//! ids `project`, `phase`, `stage`, `status`, `severity`), the free
//! text `search` input, and the `resetFilters` button. The generated
//! snapshot marks the active value of each control.

use maud::{Markup, html};

use crate::board::{Board, Dimension};

/// Renders the filter card for the current board state.
pub fn filter_controls(board: &Board, source: &str) -> Markup {
    html! {
        div class="card filters" {
            div class="filter-grid" {
                @for dimension in Dimension::ALL {
                    (dimension_select(board, dimension))
                }
                label {
                    "Search"
                    input id="search" type="search" value=(board.filters().search)
                        placeholder="Search text...";
                }
                button id="resetFilters" class="btn" { "Reset filters" }
            }
            div class="filter-hint" {
                "Source: " (source) " · Regenerate via " code { "bugboard" }
            }
        }
    }
}

/// Renders one dimension select with an "All" option plus the board's
/// distinct values, marking the active filter value.
fn dimension_select(board: &Board, dimension: Dimension) -> Markup {
    let active = board.filters().get(dimension).to_lowercase();
    html! {
        label {
            (dimension.label())
            select id=(dimension.key()) name=(dimension.key()) {
                option value="" { "All" }
                @for value in board.options(dimension) {
                    option value=(value) selected[!active.is_empty() && value.to_lowercase() == active] {
                        (value)
                    }
                }
            }
        }
    }
}
