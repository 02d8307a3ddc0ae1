//! Project List View Model
//!
//! Derives what the projects page renders from the catalog, the search query
//! and the sort direction. Pure: no signals, no DOM.

use crate::dates::{parse_date, DateKey};
use crate::models::Project;

/// Ordering of the project list by date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    /// Newest first
    #[default]
    Descending,
    /// Oldest first
    Ascending,
}

impl SortDirection {
    pub fn toggle(self) -> Self {
        match self {
            SortDirection::Descending => SortDirection::Ascending,
            SortDirection::Ascending => SortDirection::Descending,
        }
    }

    /// Label for the toggle button: the ordering a click switches to
    pub fn toggle_label(self) -> &'static str {
        self.toggle().describe()
    }

    /// The ordering this direction produces
    pub fn describe(self) -> &'static str {
        match self {
            SortDirection::Descending => "New → Old",
            SortDirection::Ascending => "Old → New",
        }
    }
}

/// Does the project's haystack contain the (already trimmed and lower-cased) needle?
fn matches(project: &Project, needle: &str) -> bool {
    project.haystack().to_lowercase().contains(needle)
}

/// Filter `catalog` by `query`, then sort the survivors by date.
///
/// An empty (or all-whitespace) query keeps every project. Equal dates keep
/// their catalog order in both directions.
pub fn visible_projects<'a>(
    catalog: &'a [Project],
    query: &str,
    direction: SortDirection,
) -> Vec<&'a Project> {
    let needle = query.trim().to_lowercase();

    let mut keyed: Vec<(DateKey, &Project)> = catalog
        .iter()
        .filter(|project| needle.is_empty() || matches(project, &needle))
        .map(|project| (parse_date(&project.date), project))
        .collect();

    // sort_by is stable
    match direction {
        SortDirection::Descending => keyed.sort_by(|a, b| b.0.cmp(&a.0)),
        SortDirection::Ascending => keyed.sort_by(|a, b| a.0.cmp(&b.0)),
    }

    keyed.into_iter().map(|(_, project)| project).collect()
}
