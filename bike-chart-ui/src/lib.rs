//! Dioxus components and D3.js bridge for the bike usage dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for D3.js chart functions via `js_sys::eval()`
//! - `charts`: feeds a rendered `ViewModel` to each chart panel
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: RSX components (date picker, season dropdown, metric cards, ...)

pub mod charts;
pub mod components;
pub mod js_bridge;
pub mod state;
