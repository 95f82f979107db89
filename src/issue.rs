//! Issue record model.
//!
//! Records come from a semi-structured JSON store: every field is
//! optional, values may be null or non-string, and several logical
//! attributes appear under synonym field names. Accessors coerce
//! whatever is present into trimmed strings and never fail.

use serde_json::Value;

/// Issue lifecycle status with its canonical sort rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Open,
    InProgress,
    Closed,
    Unknown,
}

impl Status {
    /// Detects status from raw field text. Unrecognized values rank last.
    pub fn detect(text: &str) -> Self {
        match text.trim().to_lowercase().as_str() {
            "open" => Self::Open,
            "in_progress" => Self::InProgress,
            "closed" => Self::Closed,
            _ => Self::Unknown,
        }
    }

    /// Sort rank: open before in_progress before closed before unknown.
    pub const fn rank(self) -> u8 {
        match self {
            Self::Open => 0,
            Self::InProgress => 1,
            Self::Closed => 2,
            Self::Unknown => 3,
        }
    }
}

/// Issue severity with its canonical sort rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Critical,
    Major,
    Minor,
    Nit,
    Unknown,
}

impl Severity {
    /// Detects severity from raw field text. Unrecognized values rank last.
    pub fn detect(text: &str) -> Self {
        match text.trim().to_lowercase().as_str() {
            "critical" => Self::Critical,
            "major" => Self::Major,
            "minor" => Self::Minor,
            "nit" => Self::Nit,
            _ => Self::Unknown,
        }
    }

    /// Sort rank: critical first, unknown last.
    pub const fn rank(self) -> u8 {
        match self {
            Self::Critical => 0,
            Self::Major => 1,
            Self::Minor => 2,
            Self::Nit => 3,
            Self::Unknown => 4,
        }
    }
}

/// One tracked issue backed by its raw JSON record.
///
/// The record is immutable once loaded; all views derive from it.
#[derive(Debug, Clone)]
pub struct Issue {
    raw: Value,
}

/// Coerces an optional JSON value to a trimmed display string.
///
/// Strings are trimmed, numbers and bools use their canonical display
/// form, everything else (missing, null, arrays, objects) is empty.
fn coerce(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.trim().to_string(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

impl Issue {
    /// Wraps a raw JSON record. Non-object values are tolerated; every
    /// field access on them coerces to empty.
    pub fn new(raw: Value) -> Self {
        Self { raw }
    }

    /// The raw record backing this issue.
    pub fn raw(&self) -> &Value {
        &self.raw
    }

    /// Coerced text of a single field.
    pub fn text(&self, key: &str) -> String {
        coerce(self.raw.get(key))
    }

    /// Resolves a synonym chain: the first key that coerces to a
    /// non-empty string wins.
    fn first_text(&self, keys: &[&str]) -> String {
        for key in keys {
            let value = self.text(key);
            if !value.is_empty() {
                return value;
            }
        }
        String::new()
    }

    /// Identifier, empty when absent.
    pub fn id(&self) -> String {
        self.text("id")
    }

    /// Raw status text for badge display.
    pub fn status_text(&self) -> String {
        self.text("status")
    }

    /// Parsed status for ranking and counting.
    pub fn status(&self) -> Status {
        Status::detect(&self.status_text())
    }

    /// Raw severity text for badge display.
    pub fn severity_text(&self) -> String {
        self.text("severity")
    }

    /// Parsed severity for ranking.
    pub fn severity(&self) -> Severity {
        Severity::detect(&self.severity_text())
    }

    pub fn project(&self) -> String {
        self.text("project")
    }

    pub fn phase(&self) -> String {
        self.text("phase")
    }

    pub fn stage(&self) -> String {
        self.text("stage")
    }

    pub fn area(&self) -> String {
        self.text("area")
    }

    pub fn symptom(&self) -> String {
        self.text("symptom")
    }

    pub fn root_cause(&self) -> String {
        self.text("root_cause")
    }

    pub fn proposed_fix(&self) -> String {
        self.text("proposed_fix")
    }

    pub fn owner(&self) -> String {
        self.text("owner")
    }

    /// Summary text, falling back through `details` and `description`.
    pub fn summary(&self) -> String {
        self.first_text(&["summary", "details", "description"])
    }

    /// QA reproduction text under either of its field names.
    pub fn qa_repro(&self) -> String {
        self.first_text(&["qa_reproduction", "qa_repro"])
    }

    /// Opened timestamp as an opaque display string.
    pub fn opened_at(&self) -> String {
        self.first_text(&["opened_at", "date"])
    }

    /// Closed timestamp as an opaque display string.
    pub fn closed_at(&self) -> String {
        self.first_text(&["date_closed", "closed_at", "closed_date"])
    }

    /// Closure explanation for closed issues.
    ///
    /// Prefers the explicit `close_note` field; otherwise scans the
    /// `events` sequence from most recent to oldest for the first entry
    /// with non-empty notes. Empty for issues that are not closed or
    /// carry no note anywhere.
    pub fn closure_note(&self) -> String {
        if self.status() != Status::Closed {
            return String::new();
        }
        let explicit = self.text("close_note");
        if !explicit.is_empty() {
            return explicit;
        }
        if let Some(events) = self.raw.get("events").and_then(Value::as_array) {
            for event in events.iter().rev() {
                let notes = coerce(event.get("notes"));
                if !notes.is_empty() {
                    return notes;
                }
            }
        }
        String::new()
    }

    /// Lowercased JSON serialization of the whole record.
    ///
    /// This is the deliberately permissive search haystack: it includes
    /// field names, so a query like "status" matches every record.
    pub fn search_blob(&self) -> String {
        serde_json::to_string(&self.raw)
            .unwrap_or_default()
            .to_lowercase()
    }
}

/// Applies the canonical ordering: status rank, then case-insensitive
/// project, then severity rank, then case-insensitive identifier.
///
/// Returns a new sorted vector; records themselves are never mutated.
pub fn sort_issues(mut issues: Vec<Issue>) -> Vec<Issue> {
    issues.sort_by(|a, b| {
        a.status()
            .rank()
            .cmp(&b.status().rank())
            .then_with(|| a.project().to_lowercase().cmp(&b.project().to_lowercase()))
            .then_with(|| a.severity().rank().cmp(&b.severity().rank()))
            .then_with(|| a.id().to_lowercase().cmp(&b.id().to_lowercase()))
    });
    issues
}
