//! Reusable Dioxus RSX components for the bike dashboard.

mod brand;
mod chart_container;
mod chart_header;
mod date_range_picker;
mod error_display;
mod loading_spinner;
mod metric_card;
mod season_selector;

pub use brand::SidebarBrand;
pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use date_range_picker::DateRangePicker;
pub use error_display::{ErrorDisplay, Notice};
pub use loading_spinner::LoadingSpinner;
pub use metric_card::MetricCard;
pub use season_selector::SeasonSelector;
