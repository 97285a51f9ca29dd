use dioxus::prelude::*;

/// Up to two uppercase letters standing in for a missing avatar image.
///
/// Two or more words give the first letter of the first two words; a single
/// word gives its first two letters.
pub fn initials(name: &str) -> String {
    let words: Vec<&str> = name.split_whitespace().collect();

    let letters: String = match words.as_slice() {
        [] => return "?".to_string(),
        [single] => single.chars().take(2).collect(),
        [first, second, ..] => first.chars().take(1).chain(second.chars().take(1)).collect(),
    };

    letters.to_uppercase()
}

#[component]
pub fn Avatar(name: String, image_url: Option<String>) -> Element {
    // Fall back to initials if the image fails to load
    let mut image_failed = use_signal(|| false);
    let fallback = initials(&name);

    rsx! {
        span { class: "c-avatar",
            {match image_url {
                Some(url) if !image_failed() => rsx! {
                    img {
                        class: "c-avatar__image",
                        src: "{url}",
                        alt: "{name}",
                        onerror: move |_| image_failed.set(true),
                    }
                },
                _ => rsx! {
                    span { class: "c-avatar__fallback", "{fallback}" }
                },
            }}
        }
    }
}
