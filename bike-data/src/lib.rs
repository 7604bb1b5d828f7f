//! Data processing for the bike usage dashboard.
//!
//! This crate turns a loaded [`bike_core::Table`] plus the user's current
//! selection into everything the charts need:
//!
//! - [`filter`]: date range and season selection over the table
//! - [`aggregate`]: totals, means, correlation and scatter groupings
//! - [`view`]: `render(table, filters) -> ViewModel`, the single entry
//!   point called on every input change
//!
//! Totals and averages follow the user's selection. Seasonal means,
//! correlation and the per-season scatter groups always describe the whole
//! table, whatever is selected.

pub mod aggregate;
pub mod filter;
pub mod view;

pub use filter::{Filters, SeasonFilter};
pub use view::{render, ViewModel};
