//! Shared test utilities for integration tests.
//!
//! Provides a small issue corpus and helpers for writing temporary
//! issue stores used across multiple test files.

use std::fs;
use std::path::{Path, PathBuf};

/// A JSON-array issue store covering every status, unknown vocabulary
/// values, synonym fields, and an events history.
pub const SAMPLE_ARRAY: &str = r#"[
  {"id": "AT-2", "status": "open", "severity": "critical", "project": "Atlas",
   "phase": "build", "stage": "qa", "area": "auth",
   "symptom": "login loops forever", "root_cause": "token clock skew",
   "proposed_fix": "allow 30s drift", "owner": "mira", "opened_at": "2025-06-01"},
  {"id": "AT-1", "status": "open", "severity": "minor", "project": "Atlas",
   "phase": "build", "stage": "dev", "area": "ui",
   "symptom": "tooltip flickers", "details": "hover near the edge"},
  {"id": "BO-1", "status": "in_progress", "severity": "major", "project": "Borealis",
   "phase": "design", "stage": "review", "area": "search",
   "symptom": "results unordered", "qa_reproduction": "query for two words"},
  {"id": "AT-3", "status": "closed", "severity": "nit", "project": "Atlas",
   "phase": "release", "stage": "prod", "area": "docs",
   "symptom": "typo in banner", "date": "2025-05-01", "closed_at": "2025-05-02",
   "events": [{"notes": "first pass"}, {"notes": ""}, {"notes": "typo fixed in 2.1"}]},
  {"id": "ZZ-1", "status": "triaged", "severity": "p0", "project": "Atlas",
   "symptom": "unknown vocabulary sorts last"}
]"#;

/// Writes an issue store file into a test directory.
pub fn write_store(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("Should write issue store");
    path
}
