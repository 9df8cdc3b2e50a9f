use dioxus::prelude::*;

use crate::components::layout::{ClassroomHeader, ClassroomSidebar};
use crate::components::Toaster;

#[component]
pub fn ClassroomLayout(children: Element) -> Element {
    rsx! {
        div { class: "min-h-screen bg-gray-50",
            ClassroomHeader {}
            div { class: "flex",
                ClassroomSidebar {}
                main { class: "flex-1 p-6", {children} }
            }
            Toaster {}
        }
    }
}
