//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::models::Portfolio;
use crate::routes::Route;

/// App-wide values provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Portfolio document, loaded once at startup and never mutated
    pub portfolio: StoredValue<Portfolio>,
    /// Page selected by the URL hash
    pub route: ReadSignal<Route>,
}

impl AppContext {
    pub fn new(portfolio: Portfolio, route: ReadSignal<Route>) -> Self {
        Self {
            portfolio: StoredValue::new(portfolio),
            route,
        }
    }
}
