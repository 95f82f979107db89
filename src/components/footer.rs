//! Page footer component

use maud::{Markup, html};

/// Renders the shared page footer.
pub fn footer() -> Markup {
    html! {
        footer {
            p {
                "Generated by "
                a href="https://github.com/lemorage/bugboard" target="_blank" { "Bugboard" }
            }
        }
    }
}
