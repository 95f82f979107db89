//! Static issue-dashboard generator.

mod assets;
mod board;
pub mod components;
mod config;
mod issue;
pub mod markdown;
pub mod pages;
mod store;

pub use assets::write_css_assets;
pub use board::{Board, Dimension, Filters, Summary};
pub use config::Config;
pub use issue::{Issue, Severity, Status, sort_issues};
pub use store::{fallback_issues, load_issues, parse_issues};
