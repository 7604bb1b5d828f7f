//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use bike_core::Table;
use bike_data::filter::ALL_SEASONS;
use bike_data::ViewModel;
use dioxus::prelude::*;

/// Shared application state for the bike dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// The loaded dataset (None until loaded)
    pub table: Signal<Option<Table>>,
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
    /// Start date for date range filtering (YYYY-MM-DD)
    pub start_date: Signal<String>,
    /// End date for date range filtering (YYYY-MM-DD)
    pub end_date: Signal<String>,
    /// Earliest selectable date (YYYY-MM-DD)
    pub min_date: Signal<String>,
    /// Latest selectable date (YYYY-MM-DD)
    pub max_date: Signal<String>,
    /// Currently selected season dropdown value ("All" or a season label)
    pub selected_season: Signal<String>,
    /// Season dropdown options
    pub season_options: Signal<Vec<String>>,
    /// Most recently rendered view
    pub view: Signal<Option<ViewModel>>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            table: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            start_date: Signal::new(String::new()),
            end_date: Signal::new(String::new()),
            min_date: Signal::new(String::new()),
            max_date: Signal::new(String::new()),
            selected_season: Signal::new(ALL_SEASONS.to_string()),
            season_options: Signal::new(vec![ALL_SEASONS.to_string()]),
            view: Signal::new(None),
        }
    }
}
