//! Single headline number.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct MetricCardProps {
    pub label: String,
    /// Already formatted value
    pub value: String,
}

#[component]
pub fn MetricCard(props: MetricCardProps) -> Element {
    rsx! {
        div {
            style: "flex: 1; padding: 12px 16px; background: #F5F9FF; border: 1px solid #D6E4F5; border-radius: 4px;",
            p {
                style: "margin: 0 0 4px 0; font-size: 13px; color: #555;",
                "{props.label}"
            }
            p {
                style: "margin: 0; font-size: 28px; font-weight: bold;",
                "{props.value}"
            }
        }
    }
}
