use dioxus::logger::tracing::info;
use dioxus::prelude::*;

use crate::components::icons::{ICON_CHEVRON_DOWN, ICON_LOG_OUT};
use crate::hooks::use_auth::use_auth;
use crate::hooks::use_toast::{use_toasts, Toast};

/// First character of every name token, else the pubkey prefix, else "U".
pub fn initials(name: Option<&str>, pubkey: Option<&str>) -> String {
    if let Some(name) = name.filter(|n| !n.trim().is_empty()) {
        let joined: String = name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .collect();
        return joined.to_uppercase().chars().take(2).collect();
    }
    if let Some(pubkey) = pubkey.filter(|p| !p.is_empty()) {
        return pubkey.chars().take(2).collect::<String>().to_uppercase();
    }
    "U".to_string()
}

#[component]
pub fn ClassroomHeader() -> Element {
    let auth = use_auth();
    let toasts = use_toasts();
    let mut menu_open = use_signal(|| false);

    // Identity is read from the auth context on every render, never cached.
    let current = auth.current_user();

    let user_menu = current.map(|user| {
        let avatar = match user.metadata.picture.clone() {
            Some(src) => rsx! {
                img {
                    class: "h-8 w-8 rounded-full object-cover",
                    src: "{src}",
                    alt: user.metadata.name.clone().unwrap_or_else(|| "User".to_string()),
                }
            },
            None => {
                let short = initials(user.metadata.name.as_deref(), Some(&user.pubkey));
                rsx! {
                    span {
                        class: "h-8 w-8 rounded-full bg-purple-100 text-purple-800 flex items-center justify-center text-sm font-medium",
                        "{short}"
                    }
                }
            }
        };

        let name_row = user.metadata.name.clone().map(|name| {
            rsx! {
                p { class: "font-medium", "{name}" }
            }
        });
        let nip05_row = user.metadata.nip05.clone().map(|nip05| {
            rsx! {
                p { class: "w-48 truncate text-sm text-gray-500", "{nip05}" }
            }
        });

        let mut auth_for_logout = auth.clone();
        let mut toasts_for_logout = toasts.clone();

        rsx! {
            div { class: "relative",
                button {
                    class: "flex items-center rounded-full p-1 hover:bg-gray-100 transition-colors",
                    onclick: move |_| menu_open.set(!menu_open()),
                    {avatar}
                    span { class: "icon ml-1 h-4 w-4 text-gray-400", dangerous_inner_html: ICON_CHEVRON_DOWN }
                }
                if menu_open() {
                    div { class: "absolute right-0 mt-2 w-56 rounded-md border border-gray-200 bg-white shadow-lg z-50",
                        div { class: "flex flex-col space-y-1 p-3 leading-none",
                            {name_row}
                            {nip05_row}
                        }
                        button {
                            class: "flex w-full items-center px-3 py-2 text-sm text-gray-700 hover:bg-gray-100",
                            onclick: move |_| {
                                // Menu closes whether or not a session is left to remove.
                                if let Some(user) = auth_for_logout.current_user() {
                                    auth_for_logout.remove_login(&user.id);
                                    toasts_for_logout.toast(Toast {
                                        title: "Logged out".to_string(),
                                        description: "You have been successfully logged out.".to_string(),
                                    });
                                    info!(pubkey = %user.pubkey, "session removed");
                                }
                                menu_open.set(false);
                            },
                            span { class: "icon mr-2 h-4 w-4", dangerous_inner_html: ICON_LOG_OUT }
                            span { "Log out" }
                        }
                    }
                }
            }
        }
    });

    rsx! {
        header { class: "bg-white border-b border-gray-200",
            div { class: "flex items-center justify-between px-6 py-3",
                div { class: "flex items-center space-x-2",
                    div { class: "w-8 h-8 bg-gradient-to-br from-purple-600 to-purple-800 rounded-lg flex items-center justify-center",
                        span { class: "text-white font-bold text-sm", "NC" }
                    }
                    h1 { class: "text-xl font-bold text-gray-900", "Nostr Classroom" }
                }

                div { class: "flex items-center space-x-4",
                    nav { class: "hidden md:flex items-center space-x-6",
                        a { href: "#", class: "text-purple-600 font-medium hover:text-purple-700 transition-colors", "Home" }
                        a { href: "#", class: "text-gray-600 hover:text-gray-900 transition-colors", "Classes" }
                        a { href: "#", class: "text-gray-600 hover:text-gray-900 transition-colors", "Calendar" }
                        a { href: "#", class: "text-gray-600 hover:text-gray-900 transition-colors", "To-Do" }
                    }
                    {user_menu}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_take_the_first_two_name_tokens() {
        assert_eq!(initials(Some("Dr. Sarah Johnson"), None), "DS");
        assert_eq!(initials(Some("Alice"), Some("abcdef")), "A");
    }

    #[test]
    fn initials_fall_back_to_the_pubkey_prefix() {
        assert_eq!(initials(None, Some("abcdef0123456789")), "AB");
        assert_eq!(initials(Some("   "), Some("abcdef0123456789")), "AB");
    }

    #[test]
    fn initials_default_to_u() {
        assert_eq!(initials(None, None), "U");
        assert_eq!(initials(None, Some("")), "U");
    }
}
