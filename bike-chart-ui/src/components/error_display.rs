//! Error and notice banners.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
}

/// Displays an error message in a styled box.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            style: "padding: 12px 16px; margin: 8px 0; background: #FFEBEE; color: #C62828; border-radius: 4px; border: 1px solid #EF9A9A;",
            strong { "Error: " }
            "{props.message}"
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct NoticeProps {
    pub message: String,
}

/// Informational banner for states that are not errors, such as an empty selection.
#[component]
pub fn Notice(props: NoticeProps) -> Element {
    rsx! {
        div {
            style: "padding: 12px 16px; margin: 8px 0; background: #E3F2FD; color: #0D47A1; border-radius: 4px; border: 1px solid #90CAF9;",
            "{props.message}"
        }
    }
}
