//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! D3.js chart functions live in `assets/js/*.js` and are embedded at
//! compile time. They are evaluated as globals (no ES modules) and exposed
//! via `window.*`. This module serializes data and calls those globals.

static TOOLTIP_JS: &str = include_str!("../assets/js/tooltip.js");
static LINE_CHART_JS: &str = include_str!("../assets/js/line-chart.js");
static BAR_CHART_JS: &str = include_str!("../assets/js/bar-chart.js");
static SCATTER_CHART_JS: &str = include_str!("../assets/js/scatter-chart.js");

/// Global chart entry points promoted to `window` once D3 has loaded.
const CHART_FUNCTIONS: [&str; 8] = [
    "initTooltip",
    "showTooltip",
    "hideTooltip",
    "renderLineChart",
    "renderBarChart",
    "drawScatter",
    "renderScatterChart",
    "renderScatterGrid",
];

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('Bike JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Initialize chart scripts with a wait-for-D3 polling loop. Call once
/// after the dataset has loaded.
///
/// The scripts are stored on `window` and evaluated at global scope via an
/// indirect `eval()` once `d3` exists, so their `function` declarations
/// become globals rather than locals of the polling callback.
pub fn init_charts() {
    let all_js = [TOOLTIP_JS, LINE_CHART_JS, BAR_CHART_JS, SCATTER_CHART_JS].join("\n");

    let store_js = format!(
        "window.__bikeChartScripts = {};",
        serde_json::to_string(&all_js).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let promote: String = CHART_FUNCTIONS
        .iter()
        .map(|f| format!("if (typeof {f} !== 'undefined') window.{f} = {f};"))
        .collect::<Vec<_>>()
        .join("\n");

    let init_js = format!(
        r#"
        (function() {{
            if (window.__bikeChartsReady) return;
            var waitForD3 = setInterval(function() {{
                if (typeof d3 !== 'undefined') {{
                    clearInterval(waitForD3);
                    (0, eval)(window.__bikeChartScripts);
                    delete window.__bikeChartScripts;
                    {promote}
                    window.__bikeChartsReady = true;
                    console.log('Bike charts initialized');
                }}
            }}, 100);
        }})();
        "#
    );
    let _ = js_sys::eval(&init_js);
}

/// Cancel the draw still waiting on `container_id`, if any. Every draw and
/// clear of a container goes through this first so that only the latest
/// request for that container ever runs.
fn cancel_pending_js(container_id: &str) -> String {
    format!(
        "window.__bikePendingCharts = window.__bikePendingCharts || {{}}; \
         clearInterval(window.__bikePendingCharts['{container_id}']); \
         delete window.__bikePendingCharts['{container_id}'];"
    )
}

/// Script that calls `window.<function>(container_id, data, config)` once the
/// chart scripts are initialized and the container element exists.
fn render_script(
    function: &str,
    container_id: &str,
    data_json: &str,
    config_json: &str,
) -> String {
    let escaped_data = escape_for_js(data_json);
    let escaped_config = escape_for_js(config_json);
    let cancel = cancel_pending_js(container_id);
    format!(
        r#"
        (function() {{
            {cancel}
            var poll = setInterval(function() {{
                if (window.__bikeChartsReady &&
                    typeof window.{function} !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    delete window.__bikePendingCharts['{container_id}'];
                    try {{
                        window.{function}('{container_id}', '{escaped_data}', '{escaped_config}');
                    }} catch(e) {{ console.error('[Bike] {function} error:', e); }}
                }}
            }}, 100);
            window.__bikePendingCharts['{container_id}'] = poll;
        }})();
        "#,
    )
}

/// Script that drops any pending draw for `container_id` and empties it.
fn destroy_script(container_id: &str) -> String {
    format!(
        "{} var el = document.getElementById('{}'); if (el) el.innerHTML = '';",
        cancel_pending_js(container_id),
        container_id
    )
}

fn render_when_ready(function: &str, container_id: &str, data_json: &str, config_json: &str) {
    call_js(&render_script(function, container_id, data_json, config_json));
}

/// Escape a JSON string for embedding inside a single-quoted JS literal.
fn escape_for_js(json: &str) -> String {
    json.replace('\\', "\\\\").replace('\'', "\\'").replace('\n', "")
}

/// Render the daily rides line chart.
pub fn render_line_chart(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderLineChart", container_id, data_json, config_json);
}

/// Render the seasonal mean bar chart.
pub fn render_bar_chart(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderBarChart", container_id, data_json, config_json);
}

/// Render a single temperature vs rides scatter plot.
pub fn render_scatter_chart(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderScatterChart", container_id, data_json, config_json);
}

/// Render the 2x2 grid of per-season scatter plots.
pub fn render_scatter_grid(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderScatterGrid", container_id, data_json, config_json);
}

/// Destroy/clean up a chart in the given container, including a draw that
/// has been requested but not yet run.
pub fn destroy_chart(container_id: &str) {
    call_js(&destroy_script(container_id));
}

#[cfg(test)]
mod tests {
    use super::{destroy_script, escape_for_js, render_script};

    #[test]
    fn test_escape_for_js() {
        assert_eq!(escape_for_js(r#"{"season":"O'Neil"}"#), r#"{"season":"O\'Neil"}"#);
        assert_eq!(escape_for_js("[1,\n2]"), "[1,2]");
        assert_eq!(escape_for_js(r#""a\"b""#), r#""a\\"b""#);
    }

    #[test]
    fn test_render_replaces_pending_draw_for_same_container() {
        let script = render_script("renderLineChart", "daily", "[]", "{}");
        let cancel = script
            .find("clearInterval(window.__bikePendingCharts['daily'])")
            .unwrap();
        let schedule = script.find("setInterval(").unwrap();
        assert!(cancel < schedule);
        assert!(script.contains("window.__bikePendingCharts['daily'] = poll;"));
    }

    #[test]
    fn test_destroy_cancels_pending_draw_before_clearing() {
        let script = destroy_script("daily");
        let cancel = script
            .find("clearInterval(window.__bikePendingCharts['daily'])")
            .unwrap();
        let clear = script.find("el.innerHTML = ''").unwrap();
        assert!(cancel < clear);
    }
}
