//! View model building.
//!
//! `render` is recomputed from scratch on every change of the date range
//! or season selection. Drawing is left to the caller.

use crate::aggregate::{self, ScatterPoint, SeasonGroup, SeasonMean};
use crate::filter::{filter_records, Filters};
use bike_core::Table;
use chrono::NaiveDate;
use serde::Serialize;

/// The two headline numbers for the current selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UsageMetrics {
    pub total_usage: u64,
    /// `None` when the selection is empty.
    pub average_usage: Option<f64>,
}

/// One point of the daily usage line chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyUsage {
    pub date: NaiveDate,
    pub count: u64,
}

/// Everything the dashboard draws, serializable for D3.js and `--json`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewModel {
    pub filters: Filters,
    /// From the filtered records.
    pub metrics: UsageMetrics,
    /// From the filtered records.
    pub daily_usage: Vec<DailyUsage>,
    /// From the full table.
    pub seasonal_usage: Vec<SeasonMean>,
    /// From the full table.
    pub temperature_usage: Vec<ScatterPoint>,
    /// From the full table.
    pub correlation: Option<f64>,
    /// From the full table.
    pub season_scatter: Vec<SeasonGroup>,
}

impl ViewModel {
    pub fn is_selection_empty(&self) -> bool {
        self.daily_usage.is_empty()
    }
}

/// Build the view for `filters` over `table`.
pub fn render(table: &Table, filters: &Filters) -> ViewModel {
    let filtered = filter_records(table, filters);
    log::debug!(
        "[Bike] render: {} of {} records selected ({} to {}, season {})",
        filtered.len(),
        table.records().len(),
        filters.start,
        filters.end,
        filters.season.as_option()
    );

    let full = table.records();
    ViewModel {
        filters: filters.clone(),
        metrics: UsageMetrics {
            total_usage: aggregate::total_usage(&filtered),
            average_usage: aggregate::average_usage(&filtered),
        },
        daily_usage: filtered
            .iter()
            .map(|r| DailyUsage {
                date: r.date,
                count: r.count,
            })
            .collect(),
        seasonal_usage: aggregate::seasonal_means(full),
        temperature_usage: aggregate::scatter_points(full),
        correlation: aggregate::temperature_correlation(full),
        season_scatter: aggregate::season_scatter_groups(full),
    }
}
