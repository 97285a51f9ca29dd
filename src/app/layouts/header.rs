use dioxus::prelude::*;

use crate::app::components::{AccountMenu, Button, ButtonSize, Logo, NavActionList, RoleBadge};
use crate::app::layouts::MobileDrawer;
use crate::domain::models::NavSurface;
use crate::shared::hooks::{use_adaptive_truncation, use_header_config};
use crate::shared::layout::dom::HeaderElementIds;

/// Storefront header: logo, shop name, role badge, actions and the mobile drawer.
///
/// The shop name is clamped with an ellipsis only when the measured layout
/// leaves it too little room.
#[component]
pub fn Header() -> Element {
    let ids = HeaderElementIds::default();
    let config = use_header_config();
    let truncation = use_adaptive_truncation(config, ids);
    let mut drawer_open = use_signal(|| false);

    let config_snapshot = config.read().clone();
    let profile = config_snapshot.profile;
    let clamp = config_snapshot.clamp;
    let shop_title = profile.shop_title();

    let shop_name_class = if truncation().is_truncated() {
        "c-header__shop-name c-header__shop-name--truncated"
    } else {
        "c-header__shop-name"
    };

    rsx! {
        header {
            id: ids.container,
            class: "c-header",
            style: "--shop-name-max: {clamp.mobile}px; --shop-name-max-wide: {clamp.wide}px;",

            div { class: "c-header__left",
                // Mobile menu button
                Button {
                    id: ids.menu_button,
                    size: ButtonSize::Icon,
                    class: "c-header__menu-button",
                    aria_label: "Open menu".to_string(),
                    onclick: move |_| drawer_open.set(true),
                    span { class: "c-header__menu-icon", "☰" }
                    span { class: "u-sr-only", "Open menu" }
                }

                div { id: ids.brand, class: "c-header__brand",
                    a { class: "c-header__logo-link", href: "#",
                        Logo { class: "c-header__logo" }
                    }
                    span { class: "c-header__divider", "/" }
                }

                div { class: "c-header__shop",
                    span {
                        id: ids.label,
                        class: "{shop_name_class}",
                        title: "{shop_title}",
                        "{shop_title}"
                    }
                    RoleBadge {
                        id: ids.role_badge,
                        role: profile.role.clone(),
                        class: "c-header__role",
                    }
                }
            }

            div { id: ids.right_section, class: "c-header__actions",
                nav { class: "c-header__nav",
                    NavActionList {
                        surface: NavSurface::DesktopNav,
                        item_class: "c-header__nav-item",
                    }
                }

                Button {
                    size: ButtonSize::Icon,
                    class: "c-header__notifications",
                    aria_label: "Notifications".to_string(),
                    span { "🔔" }
                    span { class: "u-sr-only", "Notifications" }
                }

                AccountMenu { profile: profile.clone() }
            }

            MobileDrawer { profile: profile.clone(), is_open: drawer_open }
        }
    }
}
