//! Chart container component.

use dioxus::prelude::*;

/// Props for ChartContainer
#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// The DOM id D3 renders into
    pub id: String,
    /// Minimum height in pixels, reserved before D3 draws
    #[props(default = 400)]
    pub min_height: u32,
    /// Optional caption under the chart (e.g. the correlation coefficient)
    pub caption: Option<String>,
}

/// A container div for one D3.js chart.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let style = format!("min-height: {}px; width: 100%;", props.min_height);

    rsx! {
        div {
            div {
                id: "{props.id}",
                style: "{style}",
            }
            if let Some(caption) = props.caption.as_ref() {
                p {
                    style: "font-weight: bold; margin-top: 4px;",
                    "{caption}"
                }
            }
        }
    }
}
