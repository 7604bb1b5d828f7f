//! Section header shown above each chart panel.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartHeaderProps {
    /// Section title
    pub title: String,
    /// Which records the panel describes (e.g. "Selected dates and season")
    #[props(default = String::new())]
    pub scope: String,
}

/// Header for chart sections showing a title and the data scope it reflects.
#[component]
pub fn ChartHeader(props: ChartHeaderProps) -> Element {
    rsx! {
        div {
            style: "margin: 24px 0 8px 0;",
            h3 {
                style: "margin: 0 0 4px 0; font-size: 18px;",
                "{props.title}"
            }
            if !props.scope.is_empty() {
                p {
                    style: "margin: 0; font-size: 12px; color: #666;",
                    "Data: {props.scope}"
                }
            }
        }
    }
}
