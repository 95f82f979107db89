//! Summary count components

use maud::{Markup, html};

use crate::board::Summary;

/// Renders the "N shown / M total" chip for the hero header.
pub fn total_chip(summary: &Summary) -> Markup {
    html! {
        span class="chip" id="totalCount" {
            (summary.shown) " shown / " (summary.total) " total"
        }
    }
}

/// Renders the per-status summary cards over the filtered view.
pub fn summary_cards(summary: &Summary) -> Markup {
    html! {
        div class="summary" id="summaryRow" {
            (summary_card("Open", summary.open))
            (summary_card("In Progress", summary.in_progress))
            (summary_card("Closed", summary.closed))
        }
    }
}

fn summary_card(label: &str, count: usize) -> Markup {
    html! {
        div class="summary-card" {
            div class="muted small" { (label) }
            div class="h6" { (count) }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Summary {
        Summary {
            shown: 2,
            total: 5,
            open: 1,
            in_progress: 0,
            closed: 1,
        }
    }

    #[test]
    fn test_total_chip_content() {
        // Act
        let html = total_chip(&sample()).into_string();

        // Assert
        assert!(html.contains("2 shown / 5 total"), "Got: {}", html);
        assert!(html.contains("id=\"totalCount\""));
    }

    #[test]
    fn test_summary_cards_counts() {
        // Act
        let html = summary_cards(&sample()).into_string();

        // Assert
        assert!(html.contains("id=\"summaryRow\""));
        assert!(html.contains("Open"));
        assert!(html.contains("In Progress"));
        assert!(html.contains("Closed"));
        assert_eq!(html.matches("summary-card").count(), 3);
    }
}
