use dioxus::logger::tracing::info;
use dioxus::prelude::*;

use crate::hooks::use_auth::{parse_pubkey, use_auth, Login, ProfileMetadata};

/// Login widget shown above the dashboard. Accepts a hex public key; key
/// generation and signing belong to an external signer.
#[component]
pub fn LoginArea() -> Element {
    let auth = use_auth();
    let mut pubkey_input = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);

    if let Some(user) = auth.current_user() {
        let label = user.metadata.name.clone().unwrap_or_else(|| {
            let mut short = user.pubkey.clone();
            short.truncate(8);
            format!("{short}…")
        });
        return rsx! {
            div { class: "max-w-sm rounded-lg border border-gray-200 bg-white p-4",
                p { class: "text-sm text-gray-600",
                    "Signed in as "
                    span { class: "font-medium text-gray-900", "{label}" }
                }
            }
        };
    }

    let error_row = error().map(|message| {
        rsx! {
            p { class: "text-sm text-red-600", "{message}" }
        }
    });

    let mut auth_for_login = auth;

    rsx! {
        div { class: "max-w-sm rounded-lg border border-gray-200 bg-white p-4 space-y-3",
            p { class: "font-medium text-gray-900", "Log in" }
            input {
                class: "w-full rounded-md border border-gray-300 px-3 py-2 text-sm",
                r#type: "text",
                placeholder: "Public key (64 hex characters)",
                value: "{pubkey_input}",
                oninput: move |e| {
                    pubkey_input.set(e.value());
                    error.set(None);
                },
            }
            {error_row}
            button {
                class: "w-full bg-purple-600 hover:bg-purple-700 text-white font-medium rounded-md px-4 py-2 transition-colors",
                onclick: move |_| {
                    match parse_pubkey(&pubkey_input()) {
                        Ok(pubkey) => {
                            info!(%pubkey, "session added");
                            auth_for_login.add_login(Login {
                                id: pubkey.clone(),
                                pubkey,
                                metadata: ProfileMetadata::default(),
                            });
                            pubkey_input.set(String::new());
                        }
                        Err(err) => error.set(Some(err.to_string())),
                    }
                },
                "Log in"
            }
        }
    }
}
