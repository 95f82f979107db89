//! Issue board state machine.
//!
//! The board holds the sorted collection plus filter, search, and
//! selection state, and derives the visible view, summary counts, and
//! filter option lists on demand. Derived views always recompute from
//! scratch; the collection is never mutated after load, only replaced
//! wholesale by [`Board::reload`].

use std::collections::BTreeSet;

use crate::issue::{Issue, Status, sort_issues};

/// One independently selectable filter facet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Project,
    Phase,
    Stage,
    Status,
    Severity,
}

impl Dimension {
    /// All dimensions in display order.
    pub const ALL: [Self; 5] = [
        Self::Project,
        Self::Phase,
        Self::Stage,
        Self::Status,
        Self::Severity,
    ];

    /// Record field name, also used as the filter control anchor id.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Project => "project",
            Self::Phase => "phase",
            Self::Stage => "stage",
            Self::Status => "status",
            Self::Severity => "severity",
        }
    }

    /// Human label for the filter control.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Project => "Project",
            Self::Phase => "Phase",
            Self::Stage => "Stage",
            Self::Status => "Status",
            Self::Severity => "Severity",
        }
    }
}

/// Current values of the five filter dimensions plus the search query.
///
/// An empty value means "match all" for that dimension.
#[derive(Debug, Clone, Default)]
pub struct Filters {
    pub project: String,
    pub phase: String,
    pub stage: String,
    pub status: String,
    pub severity: String,
    pub search: String,
}

impl Filters {
    /// Returns the selected value for a dimension.
    pub fn get(&self, dimension: Dimension) -> &str {
        match dimension {
            Dimension::Project => &self.project,
            Dimension::Phase => &self.phase,
            Dimension::Stage => &self.stage,
            Dimension::Status => &self.status,
            Dimension::Severity => &self.severity,
        }
    }

    fn set(&mut self, dimension: Dimension, value: String) {
        match dimension {
            Dimension::Project => self.project = value,
            Dimension::Phase => self.phase = value,
            Dimension::Stage => self.stage = value,
            Dimension::Status => self.status = value,
            Dimension::Severity => self.severity = value,
        }
    }
}

/// Counts derived from the current view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Issues passing the current filters.
    pub shown: usize,
    /// Issues in the unfiltered collection.
    pub total: usize,
    pub open: usize,
    pub in_progress: usize,
    pub closed: usize,
}

/// Filterable, sortable issue board.
#[derive(Debug, Clone, Default)]
pub struct Board {
    issues: Vec<Issue>,
    filters: Filters,
    selected_id: String,
}

impl Board {
    /// Creates a board over a collection, applying the canonical sort.
    pub fn new(records: Vec<Issue>) -> Self {
        Self {
            issues: sort_issues(records),
            filters: Filters::default(),
            selected_id: String::new(),
        }
    }

    /// Replaces the collection wholesale. Filters and selection are
    /// untouched; a selection no longer present simply stops resolving.
    pub fn reload(&mut self, records: Vec<Issue>) {
        self.issues = sort_issues(records);
    }

    /// The full sorted collection.
    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    pub fn filters(&self) -> &Filters {
        &self.filters
    }

    /// Sets one filter dimension; an empty value clears it to "match all".
    pub fn set_filter(&mut self, dimension: Dimension, value: &str) {
        self.filters.set(dimension, value.trim().to_string());
    }

    /// Updates the free-text search query.
    pub fn set_search(&mut self, query: &str) {
        self.filters.search = query.trim().to_string();
    }

    /// Clears every filter dimension and the search query. Selection
    /// is kept.
    pub fn reset_filters(&mut self) {
        self.filters = Filters::default();
    }

    /// Marks an issue identifier for the detail panel.
    pub fn select(&mut self, id: &str) {
        self.selected_id = id.trim().to_string();
    }

    pub fn selected_id(&self) -> &str {
        &self.selected_id
    }

    fn matches(&self, issue: &Issue) -> bool {
        for dimension in Dimension::ALL {
            let wanted = self.filters.get(dimension);
            if wanted.is_empty() {
                continue;
            }
            if issue.text(dimension.key()).to_lowercase() != wanted.to_lowercase() {
                return false;
            }
        }
        let search = self.filters.search.to_lowercase();
        if !search.is_empty() && !issue.search_blob().contains(&search) {
            return false;
        }
        true
    }

    /// Issues passing the current filters, in canonical order.
    pub fn visible(&self) -> Vec<&Issue> {
        self.issues
            .iter()
            .filter(|issue| self.matches(issue))
            .collect()
    }

    /// The selected issue, only while it remains in the filtered view.
    ///
    /// Filtering the selected issue out of the view yields `None`; no
    /// explicit deselect transition exists or is needed.
    pub fn selected(&self) -> Option<&Issue> {
        if self.selected_id.is_empty() {
            return None;
        }
        self.visible()
            .into_iter()
            .find(|issue| issue.id() == self.selected_id)
    }

    /// Status counts over the filtered view plus the unfiltered total.
    pub fn summary(&self) -> Summary {
        let visible = self.visible();
        let count = |status: Status| {
            visible
                .iter()
                .filter(|issue| issue.status() == status)
                .count()
        };
        Summary {
            shown: visible.len(),
            total: self.issues.len(),
            open: count(Status::Open),
            in_progress: count(Status::InProgress),
            closed: count(Status::Closed),
        }
    }

    /// Sorted unique non-empty values of a dimension across the whole
    /// collection. Feeds the filter select options.
    pub fn options(&self, dimension: Dimension) -> Vec<String> {
        let mut values = BTreeSet::new();
        for issue in &self.issues {
            let value = issue.text(dimension.key());
            if !value.is_empty() {
                values.insert(value);
            }
        }
        values.into_iter().collect()
    }
}
