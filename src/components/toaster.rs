use dioxus::prelude::*;

use crate::hooks::use_toast::use_toasts;

/// Renders the shared toast queue bottom-right. Toasts are dismissed by hand.
#[component]
pub fn Toaster() -> Element {
    let toasts = use_toasts();
    let items = toasts.items();

    rsx! {
        div { class: "fixed bottom-4 right-4 z-50 flex flex-col gap-2",
            for (index, toast) in items.into_iter().enumerate() {
                {
                    let mut toasts_for_dismiss = toasts.clone();

                    rsx! {
                        div {
                            key: "{index}",
                            class: "w-72 rounded-lg border border-gray-200 bg-white p-4 shadow-lg",
                            div { class: "flex items-start justify-between",
                                div {
                                    p { class: "font-medium text-gray-900", "{toast.title}" }
                                    p { class: "text-sm text-gray-500 mt-1", "{toast.description}" }
                                }
                                button {
                                    class: "ml-2 text-gray-400 hover:text-gray-600",
                                    onclick: move |_| toasts_for_dismiss.dismiss(index),
                                    "×"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
