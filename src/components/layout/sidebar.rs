use dioxus::prelude::*;

use crate::components::icons::{
    ICON_BOOK_OPEN, ICON_CALENDAR, ICON_CHEVRON_DOWN, ICON_CHEVRON_RIGHT, ICON_FILE_TEXT,
    ICON_HOME, ICON_MESSAGE_SQUARE, ICON_PLUS, ICON_SETTINGS, ICON_USERS,
};
use crate::types::NavItem;

/// Name of the tree row that starts out expanded.
const DEFAULT_EXPANDED: &str = "My Courses";

/// Names of the tree rows currently rendered expanded. Owned by one sidebar
/// instance; reset on remount, never persisted.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExpansionSet {
    names: Vec<String>,
}

impl ExpansionSet {
    pub fn with_default(name: &str) -> Self {
        Self {
            names: vec![name.to_string()],
        }
    }

    /// Flip membership. Any name is accepted, including names absent from the
    /// tree; membership only matters for rows that have children.
    pub fn toggle(&mut self, name: &str) {
        if let Some(pos) = self.names.iter().position(|n| n == name) {
            self.names.remove(pos);
        } else {
            self.names.push(name.to_string());
        }
    }

    pub fn is_expanded(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// The static navigation table, rebuilt on every sidebar render.
pub fn sidebar_items() -> Vec<NavItem> {
    vec![
        NavItem::leaf("Home", ICON_HOME, "/"),
        NavItem {
            name: "My Courses",
            icon: ICON_BOOK_OPEN,
            href: "/courses",
            badge: None,
            children: vec![
                NavItem::leaf("Mathematics", ICON_BOOK_OPEN, "/courses/math"),
                NavItem::leaf("Science", ICON_BOOK_OPEN, "/courses/science"),
                NavItem::leaf("History", ICON_BOOK_OPEN, "/courses/history"),
                NavItem::leaf("Literature", ICON_BOOK_OPEN, "/courses/literature"),
            ],
        },
        NavItem {
            name: "Calendar",
            icon: ICON_CALENDAR,
            href: "/calendar",
            badge: Some("3"),
            children: Vec::new(),
        },
        NavItem::leaf("Classwork", ICON_FILE_TEXT, "/classwork"),
        NavItem::leaf("People", ICON_USERS, "/people"),
        NavItem {
            name: "Messages",
            icon: ICON_MESSAGE_SQUARE,
            href: "/messages",
            badge: Some("5"),
            children: Vec::new(),
        },
        NavItem::leaf("Settings", ICON_SETTINGS, "/settings"),
    ]
}

#[component]
pub fn ClassroomSidebar() -> Element {
    let expanded = use_signal(|| ExpansionSet::with_default(DEFAULT_EXPANDED));
    let items = sidebar_items();

    rsx! {
        aside { class: "w-64 bg-white border-r border-gray-200 flex flex-col",
            div { class: "p-4",
                button {
                    class: "w-full flex items-center justify-center bg-purple-600 hover:bg-purple-700 text-white font-medium rounded-md px-4 py-2 transition-colors",
                    span { class: "icon mr-2 h-4 w-4", dangerous_inner_html: ICON_PLUS }
                    "Join Class"
                }
            }

            nav { class: "flex-1 px-2 py-4 space-y-1 overflow-y-auto",
                for item in items.iter() {
                    SidebarItemRow { key: "{item.name}", item: item.clone(), level: 0, expanded }
                }
            }

            div { class: "p-4 border-t border-gray-200",
                div { class: "text-xs text-gray-500 text-center", "Nostr Classroom v1.0" }
            }
        }
    }
}

#[component]
fn SidebarItemRow(item: NavItem, level: usize, expanded: Signal<ExpansionSet>) -> Element {
    let name = item.name;
    let has_children = !item.children.is_empty();
    let is_open = expanded.read().is_expanded(name);
    let children = item.children.clone();

    let badge = item.badge.map(|label| {
        rsx! {
            span { class: "bg-purple-100 text-purple-800 text-xs font-medium px-2 py-0.5 rounded-full", "{label}" }
        }
    });

    let mut set_for_toggle = expanded;

    rsx! {
        div {
            button {
                class: if level > 0 {
                    "w-full flex items-center h-10 px-3 ml-4 rounded-md text-gray-700 hover:bg-purple-50 transition-colors"
                } else {
                    "w-full flex items-center h-10 px-3 rounded-md text-gray-700 hover:bg-purple-50 transition-colors"
                },
                onclick: move |_| set_for_toggle.write().toggle(name),
                span { class: "icon mr-3 h-5 w-5 text-gray-500", dangerous_inner_html: item.icon }
                span { class: "flex-1 text-left", "{name}" }
                {badge}
                if has_children {
                    span {
                        class: "icon ml-auto h-4 w-4",
                        dangerous_inner_html: if is_open { ICON_CHEVRON_DOWN } else { ICON_CHEVRON_RIGHT },
                    }
                }
            }

            if has_children && is_open {
                div { class: "mt-1",
                    for child in children.iter() {
                        SidebarItemRow { key: "{child.name}", item: child.clone(), level: level + 1, expanded }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_expansion_is_exactly_the_default_item() {
        let set = ExpansionSet::with_default(DEFAULT_EXPANDED);
        assert!(set.is_expanded("My Courses"));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn toggle_twice_restores_membership() {
        let mut set = ExpansionSet::with_default(DEFAULT_EXPANDED);
        let before = set.clone();
        set.toggle("Messages");
        assert!(set.is_expanded("Messages"));
        set.toggle("Messages");
        assert_eq!(set, before);
    }

    #[test]
    fn toggle_accepts_names_absent_from_the_tree() {
        let mut set = ExpansionSet::default();
        set.toggle("not-a-nav-item");
        assert!(set.is_expanded("not-a-nav-item"));
        set.toggle("not-a-nav-item");
        assert!(set.is_empty());
    }

    #[test]
    fn default_item_exists_in_the_table() {
        assert!(sidebar_items().iter().any(|i| i.name == DEFAULT_EXPANDED));
    }

    #[test]
    fn sibling_names_are_unique() {
        fn check(items: &[NavItem]) {
            for (i, item) in items.iter().enumerate() {
                assert!(
                    items[i + 1..].iter().all(|other| other.name != item.name),
                    "duplicate sidebar name: {}",
                    item.name
                );
                check(&item.children);
            }
        }
        check(&sidebar_items());
    }

    #[test]
    fn only_my_courses_is_expandable() {
        let items = sidebar_items();
        let expandable: Vec<_> = items.iter().filter(|i| !i.children.is_empty()).collect();
        assert_eq!(expandable.len(), 1);
        assert_eq!(expandable[0].name, "My Courses");
        assert_eq!(expandable[0].children.len(), 4);
    }
}
