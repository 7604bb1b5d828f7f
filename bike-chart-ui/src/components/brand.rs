//! Sidebar branding.

use dioxus::prelude::*;

/// Bicycle mark drawn above the sidebar inputs.
pub const BRAND_LOGO_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 64 40" width="96" height="60" role="img" aria-label="Bike sharing logo"><g fill="none" stroke="#0b3d91" stroke-width="3" stroke-linecap="round" stroke-linejoin="round"><circle cx="14" cy="26" r="10"/><circle cx="50" cy="26" r="10"/><path d="M14 26 L26 10 L40 10 L50 26 M26 10 L32 26 L40 10 M22 6 L30 6 M40 10 L38 4 L44 4"/></g></svg>"##;

/// Logo and title at the top of the sidebar.
#[component]
pub fn SidebarBrand(title: String) -> Element {
    rsx! {
        div {
            style: "display: flex; flex-direction: column; align-items: center; margin-bottom: 12px;",
            div { dangerous_inner_html: BRAND_LOGO_SVG }
            div {
                style: "font-weight: 600; color: #0b3d91; font-size: 14px;",
                "{title}"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::BRAND_LOGO_SVG;

    #[test]
    fn test_logo_is_a_single_labelled_svg() {
        assert!(BRAND_LOGO_SVG.starts_with("<svg "));
        assert!(BRAND_LOGO_SVG.ends_with("</svg>"));
        assert_eq!(BRAND_LOGO_SVG.matches("<svg").count(), 1);
        assert!(BRAND_LOGO_SVG.contains("aria-label=\"Bike sharing logo\""));
        assert_eq!(BRAND_LOGO_SVG.matches("<circle").count(), 2);
    }
}
