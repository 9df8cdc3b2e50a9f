use dioxus::prelude::*;

/// Applies the page title and description to the document head.
#[component]
pub fn PageMeta(title: String, description: String) -> Element {
    rsx! {
        document::Title { "{title}" }
        document::Meta { name: "description", content: description }
    }
}
