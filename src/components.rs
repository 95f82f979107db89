//! Reusable HTML components for dashboard generation
//!
//! This module provides Maud component functions shared across the
//! dashboard page: badges, filter controls, summary cards, the issue
//! table, the detail panel, and the page layout wrapper. Components
//! handle specific UI elements with consistent styling and behavior.

pub mod badge;
pub mod detail;
pub mod filters;
pub mod footer;
pub mod issue_table;
pub mod layout;
pub mod summary;
