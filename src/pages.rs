//! Page generation modules
//!
//! Each page module provides a `generate` function assembling
//! components into a complete HTML document.

pub mod dashboard;
