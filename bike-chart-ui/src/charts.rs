//! Hands a rendered [`ViewModel`] to the D3.js chart functions.

use crate::js_bridge;
use bike_data::ViewModel;
use serde_json::json;

/// DOM ids of the chart containers.
pub const DAILY_CHART_ID: &str = "daily-usage-chart";
pub const SEASON_CHART_ID: &str = "season-usage-chart";
pub const TEMPERATURE_CHART_ID: &str = "temperature-usage-chart";
pub const SEASON_SCATTER_ID: &str = "season-scatter-grid";

/// Bar colour of the season with the highest mean.
pub const DOMINANT_COLOR: &str = "#0b3d91";
/// Bar colour of every other season.
pub const SECONDARY_COLOR: &str = "#62a8e5";

/// Draw every chart panel for `view`.
pub fn draw(view: &ViewModel) {
    draw_daily_usage(view);
    draw_seasonal_usage(view);
    draw_temperature_usage(view);
    draw_season_scatter(view);
}

fn draw_daily_usage(view: &ViewModel) {
    if view.is_selection_empty() {
        js_bridge::destroy_chart(DAILY_CHART_ID);
        return;
    }
    // Full resolution: the dataset holds at most a few years of days.
    let data_json = serde_json::to_string(&view.daily_usage).unwrap_or_default();
    let config_json = json!({
        "xAxisLabel": "Date",
        "yAxisLabel": "Bike rides",
        "yUnit": "rides",
        "color": "#90CAF9",
        "height": 450,
    })
    .to_string();
    js_bridge::render_line_chart(DAILY_CHART_ID, &data_json, &config_json);
}

fn draw_seasonal_usage(view: &ViewModel) {
    let data_json = serde_json::to_string(&view.seasonal_usage).unwrap_or_default();
    let config_json = json!({
        "xAxisLabel": "Season",
        "yAxisLabel": "Average daily rides",
        "color": SECONDARY_COLOR,
        "highlightColor": DOMINANT_COLOR,
    })
    .to_string();
    js_bridge::render_bar_chart(SEASON_CHART_ID, &data_json, &config_json);
}

fn draw_temperature_usage(view: &ViewModel) {
    let data_json = serde_json::to_string(&view.temperature_usage).unwrap_or_default();
    let config_json = json!({
        "xAxisLabel": "Temperature (normalized)",
        "yAxisLabel": "Bike rides",
        "color": "blue",
    })
    .to_string();
    js_bridge::render_scatter_chart(TEMPERATURE_CHART_ID, &data_json, &config_json);
}

fn draw_season_scatter(view: &ViewModel) {
    let data_json = serde_json::to_string(&view.season_scatter).unwrap_or_default();
    let config_json = json!({
        "xAxisLabel": "Temperature (normalized)",
        "yAxisLabel": "Bike rides",
        "color": "#1f3fbf",
    })
    .to_string();
    js_bridge::render_scatter_grid(SEASON_SCATTER_ID, &data_json, &config_json);
}
