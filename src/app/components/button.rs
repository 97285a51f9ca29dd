use dioxus::prelude::*;

#[derive(Clone, PartialEq)]
pub enum ButtonSize {
    Sm,
    Icon,
}

#[component]
pub fn Button(
    size: Option<ButtonSize>,
    /// Extra BEM modifiers or layout classes
    #[props(default = "")]
    class: &'static str,
    #[props(default)]
    id: Option<&'static str>,
    #[props(default)]
    aria_label: Option<String>,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let size = size.unwrap_or(ButtonSize::Sm);

    let size_class = match size {
        ButtonSize::Sm => "c-button--sm",
        ButtonSize::Icon => "c-button--icon",
    };

    rsx! {
        button {
            id: id,
            class: "c-button c-button--ghost {size_class} {class}",
            r#type: "button",
            aria_label: aria_label,
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}
