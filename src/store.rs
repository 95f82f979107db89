//! Issue store loading.
//!
//! The store is a local file holding an ordered sequence of issue
//! records: either one JSON array, or JSONL with one record per line.
//! Loading failures are recoverable by design; callers fall back to
//! the embedded collection and keep going.

use anyhow::{Context, Result};
use serde_json::Value;
use std::fs;
use std::path::Path;

use crate::issue::Issue;

const FALLBACK: &str = include_str!("../assets/fallback_issues.json");

/// Loads an issue collection from a JSON array or JSONL file.
///
/// A file whose first non-whitespace byte is `[` parses as a single
/// JSON array; anything else parses line by line with blank lines
/// skipped. Record order is preserved; sorting is the board's job.
///
/// # Errors
///
/// Returns error if the file cannot be read, the payload is not a JSON
/// array, or any JSONL line is invalid JSON.
pub fn load_issues(path: &Path) -> Result<Vec<Issue>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read issue store: {}", path.display()))?;
    parse_issues(&text).with_context(|| format!("Failed to parse issue store: {}", path.display()))
}

/// Parses issue records from JSON array or JSONL text.
///
/// # Errors
///
/// Returns error if the payload is not valid JSON of either shape.
pub fn parse_issues(text: &str) -> Result<Vec<Issue>> {
    if text.trim_start().starts_with('[') {
        let records: Vec<Value> =
            serde_json::from_str(text).context("Expected a JSON array of issue records")?;
        return Ok(records.into_iter().map(Issue::new).collect());
    }

    let mut records = Vec::new();
    for (number, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let value: Value = serde_json::from_str(line)
            .with_context(|| format!("Invalid JSON on line {}", number + 1))?;
        records.push(Issue::new(value));
    }
    Ok(records)
}

/// Returns the embedded fallback collection used when the configured
/// store is unavailable. Never fails; a broken embed yields an empty
/// collection.
pub fn fallback_issues() -> Vec<Issue> {
    parse_issues(FALLBACK).unwrap_or_default()
}
