use dioxus::prelude::*;

use crate::app::components::{Avatar, NavActionList, Separator};
use crate::domain::models::NavSurface;
use crate::shared::config::ShopProfile;

/// Avatar button with the account dropdown (Dashboard, Settings, Log out)
#[component]
pub fn AccountMenu(profile: ShopProfile) -> Element {
    let mut is_open = use_signal(|| false);
    let email = profile.display_email();

    rsx! {
        div { class: "c-account-menu",
            button {
                class: "c-account-menu__trigger",
                r#type: "button",
                aria_haspopup: "menu",
                aria_expanded: "{is_open()}",
                aria_label: "Account menu",
                onclick: move |_| is_open.toggle(),
                Avatar {
                    name: profile.username.clone(),
                    image_url: profile.avatar_url.clone(),
                }
            }

            if is_open() {
                // Backdrop
                div {
                    class: "c-account-menu__backdrop",
                    onclick: move |_| is_open.set(false),
                }

                div { class: "c-account-menu__content", role: "menu",
                    div { class: "c-account-menu__label",
                        p { class: "c-account-menu__name", "{profile.username}" }
                        p { class: "c-account-menu__email", "{email}" }
                    }
                    Separator {}
                    NavActionList {
                        surface: NavSurface::AccountMenu,
                        item_class: "c-account-menu__item",
                        on_select: move |_| is_open.set(false),
                    }
                }
            }
        }
    }
}
