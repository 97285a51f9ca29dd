use dioxus::prelude::*;

use crate::app::components::{Button, ButtonSize};
use crate::domain::models::{NavAction, NavEntry, NavSurface};
use crate::shared::logging::log_nav_action;

pub const LOGO: Asset = asset!("/assets/logo.svg");

// Horizontal rule between menu groups (BEM: c-separator)
#[component]
pub fn Separator() -> Element {
    rsx! {
        div { class: "c-separator", role: "separator" }
    }
}

// Store logo
#[component]
pub fn Logo(
    #[props(default = "")]
    class: &'static str,
) -> Element {
    rsx! {
        img {
            class: "c-logo {class}",
            src: LOGO,
            alt: "TU Store Logo",
            width: "24",
            height: "24",
        }
    }
}

/// Renders every entry of a navigation surface as ghost buttons.
/// Actions are placeholders: selecting one logs it and notifies `on_select`.
#[component]
pub fn NavActionList(
    surface: NavSurface,
    #[props(default = "")]
    item_class: &'static str,
    #[props(default)]
    on_select: Option<EventHandler<NavAction>>,
) -> Element {
    rsx! {
        for (index, entry) in surface.entries().iter().enumerate() {
            {match *entry {
                NavEntry::Separator => rsx! {
                    Separator { key: "sep-{index}" }
                },
                NavEntry::Action(action) => rsx! {
                    Button {
                        key: "{action.as_str()}",
                        size: ButtonSize::Sm,
                        class: item_class,
                        onclick: move |_| {
                            log_nav_action(action.as_str(), surface.as_str());
                            if let Some(handler) = &on_select {
                                handler.call(action);
                            }
                        },
                        if let Some(icon) = action.icon() {
                            span { class: "c-nav-item__icon", "{icon}" }
                        }
                        span { class: "c-nav-item__label", "{action.label()}" }
                    }
                },
            }}
        }
    }
}
