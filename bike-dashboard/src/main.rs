//! Bike Sharing Daily Usage Dashboard
//!
//! Data flow:
//! 1. `build.rs` copies `fixtures/all_data.csv` into `OUT_DIR`.
//! 2. `include_str!` embeds the CSV into the WASM binary.
//! 3. On mount: parse the CSV into a `Table` and seed the sidebar with the
//!    dataset's date span and season labels.
//! 4. On any sidebar change: `bike_data::render` rebuilds the view model
//!    from scratch and every chart is redrawn via D3.js.

use bike_chart_ui::charts::{
    self, DAILY_CHART_ID, SEASON_CHART_ID, SEASON_SCATTER_ID, TEMPERATURE_CHART_ID,
};
use bike_chart_ui::components::{
    ChartContainer, ChartHeader, DateRangePicker, ErrorDisplay, LoadingSpinner, MetricCard,
    Notice, SeasonSelector, SidebarBrand,
};
use bike_chart_ui::js_bridge;
use bike_chart_ui::state::AppState;
use bike_data::filter::season_options;
use bike_data::{render, Filters, SeasonFilter};
use bike_utils::dates::{format_date, parse_date};
use bike_utils::error::DateError;
use bike_utils::numbers::format_optional;
use dioxus::prelude::*;

// Embed the daily usage dataset at compile time.
const ALL_DATA_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/all_data.csv"));

const D3_SRC: &str = "https://d3js.org/d3.v7.min.js";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("bike-dashboard-root"))
        .launch(App);
}

/// Turn the raw sidebar values into filters.
fn selected_filters(start: &str, end: &str, season: &str) -> Result<Filters, DateError> {
    Ok(Filters::new(
        parse_date(start)?,
        parse_date(end)?,
        SeasonFilter::from_option(season),
    ))
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // ─── Effect 1: Parse the dataset once on mount ───
    use_effect(move || {
        let table = match bike_core::loader::parse_table(ALL_DATA_CSV) {
            Ok(table) => table,
            Err(e) => {
                log::error!("Failed to load dataset: {}", e);
                state
                    .error_msg
                    .set(Some(format!("Failed to load bike sharing data: {}", e)));
                state.loading.set(false);
                return;
            }
        };

        let bounds = table.date_bounds();
        let first = format_date(&bounds.start());
        let last = format_date(&bounds.end());
        state.min_date.set(first.clone());
        state.max_date.set(last.clone());
        state.start_date.set(first);
        state.end_date.set(last);
        state.season_options.set(season_options(&table));
        state.table.set(Some(table));
        state.loading.set(false);

        js_bridge::init_charts();
    });

    // ─── Effect 2: Re-render on every sidebar change ───
    use_effect(move || {
        let loading = (state.loading)();
        let start = (state.start_date)();
        let end = (state.end_date)();
        let season = (state.selected_season)();

        if loading {
            return;
        }
        let table = match &*state.table.read() {
            Some(table) => table.clone(),
            None => return,
        };

        let filters = match selected_filters(&start, &end, &season) {
            Ok(filters) => filters,
            Err(e) => {
                // Keep the last good view on screen.
                state.error_msg.set(Some(e.to_string()));
                return;
            }
        };
        if state.error_msg.peek().is_some() {
            state.error_msg.set(None);
        }

        let view = render(&table, &filters);
        log::info!(
            "[Bike] dashboard: {} days selected, total {}",
            view.daily_usage.len(),
            view.metrics.total_usage
        );
        charts::draw(&view);
        state.view.set(Some(view));
    });

    let view = state.view.read().clone();

    rsx! {
        document::Script { src: D3_SRC }
        div {
            style: "display: flex; gap: 24px; max-width: 1200px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            if !*state.loading.read() && state.table.read().is_some() {
                Sidebar {}
            }

            div {
                style: "flex: 1; min-width: 0;",
                h2 { "Bike Sharing Dashboard" }

                if let Some(err) = state.error_msg.read().as_ref() {
                    ErrorDisplay { message: err.clone() }
                }

                if *state.loading.read() {
                    LoadingSpinner {}
                } else if let Some(view) = view {
                    ChartHeader {
                        title: "Daily bike rides".to_string(),
                        scope: "selected dates and season".to_string(),
                    }
                    div {
                        style: "display: flex; gap: 12px; margin-bottom: 12px;",
                        MetricCard {
                            label: "Total rides".to_string(),
                            value: view.metrics.total_usage.to_string(),
                        }
                        MetricCard {
                            label: "Average daily rides".to_string(),
                            value: format_optional(view.metrics.average_usage),
                        }
                    }
                    if view.is_selection_empty() {
                        Notice { message: "No rides in the selected range.".to_string() }
                    }
                    ChartContainer { id: DAILY_CHART_ID.to_string(), min_height: 450 }

                    ChartHeader {
                        title: "Average daily rides by season".to_string(),
                        scope: "full dataset".to_string(),
                    }
                    ChartContainer { id: SEASON_CHART_ID.to_string(), min_height: 360 }

                    ChartHeader {
                        title: "Temperature vs bike rides".to_string(),
                        scope: "full dataset".to_string(),
                    }
                    ChartContainer {
                        id: TEMPERATURE_CHART_ID.to_string(),
                        caption: format!(
                            "Correlation coefficient: {}",
                            format_optional(view.correlation)
                        ),
                    }

                    ChartHeader {
                        title: "Temperature vs bike rides by season".to_string(),
                        scope: "full dataset".to_string(),
                    }
                    ChartContainer { id: SEASON_SCATTER_ID.to_string(), min_height: 620 }
                }
            }
        }
    }
}

/// Sidebar with the date range and season inputs.
#[component]
fn Sidebar() -> Element {
    rsx! {
        div {
            style: "width: 240px; flex-shrink: 0; padding: 12px; background: #F0F2F6; border-radius: 4px; align-self: flex-start;",
            SidebarBrand { title: "Bike Sharing".to_string() }
            p {
                style: "font-size: 12px; color: #666; margin: 0 0 4px 0;",
                "Date range:"
            }
            DateRangePicker {}
            SeasonSelector {}
        }
    }
}
