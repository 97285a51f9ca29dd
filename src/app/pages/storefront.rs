use dioxus::prelude::*;

use crate::app::layouts::Header;

#[component]
pub fn App() -> Element {
    use_effect(|| {
        tracing::info!("Storefront header app initialized");
    });

    // Bundled by build.rs from assets/css/
    const BUNDLE_CSS: Asset = asset!("/assets/dist/bundle.css");

    rsx! {
        document::Title { "TU Store" }
        document::Link {
            rel: "stylesheet",
            href: BUNDLE_CSS
        },
        div { class: "c-layout",
            Header {}

            // Placeholder content area; page routing lives elsewhere
            main { class: "c-layout__main" }
        }
    }
}
