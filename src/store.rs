//! Project List State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The store lives
//! as long as the projects page is mounted.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::view_model::SortDirection;

/// Search box and sort toggle of the projects page
#[derive(Clone, Debug, Default, Store)]
pub struct ProjectListState {
    /// Raw search box contents
    pub query: String,
    pub sort_direction: SortDirection,
}

/// Type alias for the store
pub type ProjectListStore = Store<ProjectListState>;

// ========================
// Store Helper Functions
// ========================

/// Replace the query with the full contents of the search box
pub fn store_set_query(store: &ProjectListStore, query: String) {
    *store.query().write() = query;
}

/// Flip between newest-first and oldest-first
pub fn store_toggle_sort(store: &ProjectListStore) {
    let field = store.sort_direction();
    let mut direction = field.write();
    *direction = direction.toggle();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_sort_twice_restores_direction() {
        let store = Store::new(ProjectListState::default());
        assert_eq!(store.sort_direction().get_untracked(), SortDirection::Descending);

        store_toggle_sort(&store);
        assert_eq!(store.sort_direction().get_untracked(), SortDirection::Ascending);

        store_toggle_sort(&store);
        assert_eq!(store.sort_direction().get_untracked(), SortDirection::Descending);
    }

    #[test]
    fn test_set_query_replaces_whole_string() {
        let store = Store::new(ProjectListState::default());
        store_set_query(&store, "dock".to_string());
        store_set_query(&store, "docker".to_string());
        assert_eq!(store.query().get_untracked(), "docker");
        assert_eq!(store.sort_direction().get_untracked(), SortDirection::Descending);
    }
}
