//! Reads header geometry from the rendered DOM.
//!
//! Elements are looked up by id; anything missing comes back as `None` so the
//! truncator can treat it as "not laid out yet".

use super::HeaderGeometry;

/// DOM ids of the measured header elements
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeaderElementIds {
    pub container: &'static str,
    pub label: &'static str,
    pub right_section: &'static str,
    /// Wraps the logo link and the "/" divider
    pub brand: &'static str,
    pub menu_button: &'static str,
    pub role_badge: &'static str,
}

impl Default for HeaderElementIds {
    fn default() -> Self {
        Self {
            container: "storefront-header",
            label: "storefront-header-shop-name",
            right_section: "storefront-header-actions",
            brand: "storefront-header-brand",
            menu_button: "storefront-header-menu-button",
            role_badge: "storefront-header-role",
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub fn read_header_geometry(ids: &HeaderElementIds) -> HeaderGeometry {
    use wasm_bindgen::JsCast;

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return HeaderGeometry::default();
    };

    let html_element = |id: &str| {
        document
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
    };

    HeaderGeometry {
        container: html_element(ids.container).map(|el| el.offset_width() as f64),
        // scrollWidth reports the unclamped width even while the ellipsis is applied
        label: html_element(ids.label).map(|el| el.scroll_width() as f64),
        right_section: html_element(ids.right_section).map(|el| el.offset_width() as f64),
        brand: html_element(ids.brand).map(|el| el.offset_width() as f64),
        // Hidden elements report 0
        menu_button: html_element(ids.menu_button).map(|el| el.offset_width() as f64),
        role_badge: html_element(ids.role_badge).map(|el| el.offset_width() as f64),
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn read_header_geometry(_ids: &HeaderElementIds) -> HeaderGeometry {
    // No layout engine on the server
    HeaderGeometry::default()
}
