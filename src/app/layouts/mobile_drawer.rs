use dioxus::prelude::*;

use crate::app::components::{Avatar, Logo, NavActionList, RoleBadge, Separator};
use crate::domain::models::NavSurface;
use crate::shared::config::ShopProfile;

/// Slide-out drawer mirroring the header navigation on small screens
#[component]
pub fn MobileDrawer(profile: ShopProfile, mut is_open: Signal<bool>) -> Element {
    if !is_open() {
        return rsx! {};
    }

    let title = profile.shop_title();
    let email = profile.display_email();

    rsx! {
        // Backdrop
        div {
            class: "c-drawer__backdrop",
            onclick: move |_| is_open.set(false),
        }

        div { class: "c-drawer", role: "dialog", aria_modal: "true", aria_label: "{title}",
            div { class: "c-drawer__handle" }

            div { class: "c-drawer__header",
                h2 { class: "c-drawer__title",
                    Logo { class: "c-drawer__logo" }
                    "{title}"
                }
                p { class: "c-drawer__description", "Point of Sale System" }
                div { class: "c-drawer__badge",
                    RoleBadge { role: profile.role.clone() }
                }
            }

            div { class: "c-drawer__separator",
                Separator {}
            }

            nav { class: "c-drawer__nav",
                NavActionList {
                    surface: NavSurface::Drawer,
                    item_class: "c-drawer__item",
                    on_select: move |_| is_open.set(false),
                }
            }

            div { class: "c-drawer__footer",
                div { class: "c-drawer__profile",
                    Avatar {
                        name: profile.username.clone(),
                        image_url: profile.avatar_url.clone(),
                    }
                    div { class: "c-drawer__profile-text",
                        p { class: "c-drawer__profile-name", "{profile.username}" }
                        p { class: "c-drawer__profile-email", "{email}" }
                    }
                }
                NavActionList {
                    surface: NavSurface::DrawerFooter,
                    item_class: "c-drawer__logout",
                    on_select: move |_| is_open.set(false),
                }
            }
        }
    }
}
