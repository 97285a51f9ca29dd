use dioxus::prelude::*;

/// Rounded pill showing the signed-in user's role
#[component]
pub fn RoleBadge(
    role: String,
    #[props(default)]
    id: Option<&'static str>,
    #[props(default = "")]
    class: &'static str,
) -> Element {
    rsx! {
        span { id, class: "c-badge {class}", "{role}" }
    }
}
