use dioxus::prelude::*;

use crate::components::auth::LoginArea;
use crate::components::layout::{ClassroomDashboard, ClassroomLayout};
use crate::components::PageMeta;

#[component]
pub fn Index() -> Element {
    rsx! {
        PageMeta {
            title: "Nostr Classroom",
            description: "A Google Classroom clone with Nostr integration for decentralized learning.",
        }

        ClassroomLayout {
            div { class: "max-w-7xl mx-auto",
                // Login Area
                div { class: "mb-6", LoginArea {} }

                // Main Dashboard
                ClassroomDashboard {}
            }
        }
    }
}
