use serde::{Deserialize, Serialize};

/// One entry in the sidebar navigation tree. An empty `children` list marks a
/// leaf; any row with children can expand and collapse at its own level.
#[derive(Clone, Debug, PartialEq)]
pub struct NavItem {
    pub name: &'static str,
    pub icon: &'static str,
    pub href: &'static str,
    pub badge: Option<&'static str>,
    pub children: Vec<NavItem>,
}

impl NavItem {
    pub fn leaf(name: &'static str, icon: &'static str, href: &'static str) -> Self {
        Self {
            name,
            icon,
            href,
            badge: None,
            children: Vec::new(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: String,
    pub name: String,
    pub code: String,
    pub teacher: String,
    pub time: String,
    pub students: u32,
    pub assignments: u32,
    // Gradient color token, e.g. "from-purple-500 to-purple-700"
    pub color: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    pub id: String,
    pub title: String,
    pub course: String,
    pub due_date: String,
    pub status: String,
    #[serde(rename = "type")]
    pub kind: String,
}
