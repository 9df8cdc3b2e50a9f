use dioxus::prelude::*;

// Module Declarations
pub mod components;
pub mod hooks;
pub mod pages;
pub mod types;

use hooks::use_auth::Auth;
use hooks::use_toast::Toasts;
use pages::Index;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Index {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    // Session list and toast queue are shared by every page.
    use_context_provider(Auth::new);
    use_context_provider(Toasts::new);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Script { src: "https://cdn.tailwindcss.com" }

        Router::<Route> {}
    }
}
