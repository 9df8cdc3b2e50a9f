use dioxus::prelude::*;

use crate::components::icons::{
    ICON_BOOK_OPEN, ICON_CALENDAR, ICON_CLOCK, ICON_FILE_TEXT, ICON_PLUS, ICON_STAR, ICON_USERS,
};
use crate::types::{Assignment, Course};

pub fn sample_courses() -> Vec<Course> {
    vec![
        Course {
            id: "1".to_string(),
            name: "Advanced Mathematics".to_string(),
            code: "MATH 301".to_string(),
            teacher: "Dr. Sarah Johnson".to_string(),
            time: "Mon, Wed, Fri 10:00 AM".to_string(),
            students: 24,
            assignments: 5,
            color: "from-purple-500 to-purple-700".to_string(),
        },
        Course {
            id: "2".to_string(),
            name: "Physics Fundamentals".to_string(),
            code: "PHYS 201".to_string(),
            teacher: "Prof. Michael Chen".to_string(),
            time: "Tue, Thu 2:00 PM".to_string(),
            students: 32,
            assignments: 3,
            color: "from-blue-500 to-blue-700".to_string(),
        },
        Course {
            id: "3".to_string(),
            name: "World History".to_string(),
            code: "HIST 150".to_string(),
            teacher: "Dr. Emily Rodriguez".to_string(),
            time: "Mon, Wed 1:00 PM".to_string(),
            students: 28,
            assignments: 7,
            color: "from-green-500 to-green-700".to_string(),
        },
        Course {
            id: "4".to_string(),
            name: "English Literature".to_string(),
            code: "ENG 200".to_string(),
            teacher: "Prof. David Wilson".to_string(),
            time: "Tue, Thu 11:00 AM".to_string(),
            students: 19,
            assignments: 4,
            color: "from-red-500 to-red-700".to_string(),
        },
    ]
}

pub fn sample_assignments() -> Vec<Assignment> {
    vec![
        Assignment {
            id: "1".to_string(),
            title: "Calculus Problem Set 5".to_string(),
            course: "Advanced Mathematics".to_string(),
            due_date: "Tomorrow".to_string(),
            status: "upcoming".to_string(),
            kind: "assignment".to_string(),
        },
        Assignment {
            id: "2".to_string(),
            title: "Physics Lab Report".to_string(),
            course: "Physics Fundamentals".to_string(),
            due_date: "2 days".to_string(),
            status: "upcoming".to_string(),
            kind: "assignment".to_string(),
        },
        Assignment {
            id: "3".to_string(),
            title: "History Essay Draft".to_string(),
            course: "World History".to_string(),
            due_date: "Overdue".to_string(),
            status: "overdue".to_string(),
            kind: "assignment".to_string(),
        },
        Assignment {
            id: "4".to_string(),
            title: "Literature Quiz".to_string(),
            course: "English Literature".to_string(),
            due_date: "Next week".to_string(),
            status: "completed".to_string(),
            kind: "quiz".to_string(),
        },
    ]
}

/// Badge colors keyed by assignment status, gray for anything unrecognised.
pub fn status_badge_class(status: &str) -> &'static str {
    match status {
        "upcoming" => "bg-blue-100 text-blue-800",
        "overdue" => "bg-red-100 text-red-800",
        "completed" => "bg-green-100 text-green-800",
        _ => "bg-gray-100 text-gray-800",
    }
}

/// Row icon keyed by assignment kind, document for anything unrecognised.
pub fn type_icon(kind: &str) -> &'static str {
    match kind {
        "quiz" => ICON_STAR,
        "assignment" | "material" => ICON_FILE_TEXT,
        _ => ICON_FILE_TEXT,
    }
}

pub fn upcoming_count(assignments: &[Assignment]) -> usize {
    assignments.iter().filter(|a| a.status == "upcoming").count()
}

#[component]
pub fn ClassroomDashboard() -> Element {
    let courses = sample_courses();
    let assignments = sample_assignments();
    let upcoming = upcoming_count(&assignments);

    rsx! {
        div { class: "space-y-6",
            // Welcome banner
            div { class: "bg-gradient-to-r from-purple-600 to-purple-800 rounded-lg p-6 text-white",
                h1 { class: "text-2xl font-bold mb-2", "Welcome back!" }
                p { class: "text-purple-100", "You have {upcoming} upcoming assignments" }
            }

            // Quick actions
            div { class: "grid grid-cols-1 md:grid-cols-4 gap-4",
                QuickAction { icon: ICON_PLUS, tint: "purple", title: "Join Class", subtitle: "Use class code" }
                QuickAction { icon: ICON_FILE_TEXT, tint: "blue", title: "Create", subtitle: "Assignment" }
                QuickAction { icon: ICON_CALENDAR, tint: "green", title: "Calendar", subtitle: "View schedule" }
                QuickAction { icon: ICON_USERS, tint: "yellow", title: "People", subtitle: "Classmates" }
            }

            // Course cards
            div {
                div { class: "flex items-center justify-between mb-4",
                    h2 { class: "text-xl font-bold text-gray-900", "My Courses" }
                    button { class: "text-sm border border-gray-300 rounded-md px-3 py-1 hover:bg-gray-50 transition-colors", "View all" }
                }

                div { class: "grid grid-cols-1 md:grid-cols-2 gap-4",
                    for course in courses {
                        div {
                            key: "{course.id}",
                            class: "bg-white rounded-lg border border-gray-200 p-4 hover:shadow-md transition-shadow cursor-pointer",
                            div { class: "flex items-start justify-between",
                                div { class: "flex-1",
                                    div { class: "flex items-center space-x-2 mb-2",
                                        div { class: "w-10 h-10 bg-gradient-to-br {course.color} rounded-lg flex items-center justify-center",
                                            span { class: "icon h-5 w-5 text-white", dangerous_inner_html: ICON_BOOK_OPEN }
                                        }
                                        div {
                                            h3 { class: "font-semibold text-gray-900", "{course.name}" }
                                            p { class: "text-sm text-gray-500", "{course.code}" }
                                        }
                                    }
                                    p { class: "text-sm text-gray-600 mb-2", "{course.teacher}" }
                                    div { class: "flex items-center space-x-4 text-xs text-gray-500",
                                        div { class: "flex items-center space-x-1",
                                            span { class: "icon h-3 w-3", dangerous_inner_html: ICON_CLOCK }
                                            span { "{course.time}" }
                                        }
                                        div { class: "flex items-center space-x-1",
                                            span { class: "icon h-3 w-3", dangerous_inner_html: ICON_USERS }
                                            span { "{course.students} students" }
                                        }
                                    }
                                }
                                span { class: "bg-gray-100 text-gray-800 text-xs font-medium px-2 py-0.5 rounded-full h-fit",
                                    "{course.assignments} assignments"
                                }
                            }
                        }
                    }
                }
            }

            // Recent assignments
            div {
                div { class: "flex items-center justify-between mb-4",
                    h2 { class: "text-xl font-bold text-gray-900", "Recent Assignments" }
                    button { class: "text-sm border border-gray-300 rounded-md px-3 py-1 hover:bg-gray-50 transition-colors", "View all" }
                }

                div { class: "bg-white rounded-lg border border-gray-200 divide-y divide-gray-200",
                    for assignment in assignments {
                        {
                            let badge_class = status_badge_class(&assignment.status);
                            let icon = type_icon(&assignment.kind);

                            rsx! {
                                div {
                                    key: "{assignment.id}",
                                    class: "p-4 hover:bg-gray-50 transition-colors",
                                    div { class: "flex items-center justify-between",
                                        div { class: "flex items-center space-x-3",
                                            div { class: "p-2 bg-gray-100 rounded-lg",
                                                span { class: "icon h-4 w-4", dangerous_inner_html: icon }
                                            }
                                            div {
                                                h3 { class: "font-medium text-gray-900", "{assignment.title}" }
                                                p { class: "text-sm text-gray-500", "{assignment.course}" }
                                            }
                                        }
                                        div { class: "flex items-center space-x-3",
                                            span { class: "text-xs font-medium px-2 py-0.5 rounded-full {badge_class}",
                                                "{assignment.due_date}"
                                            }
                                            button { class: "text-sm text-gray-600 hover:text-gray-900 px-2 py-1", "Open" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn QuickAction(
    icon: &'static str,
    tint: &'static str,
    title: &'static str,
    subtitle: &'static str,
) -> Element {
    rsx! {
        div { class: "bg-white rounded-lg border border-gray-200 p-4 text-center hover:shadow-md transition-shadow cursor-pointer",
            div { class: "w-12 h-12 bg-{tint}-100 rounded-lg flex items-center justify-center mx-auto mb-3",
                span { class: "icon h-6 w-6 text-{tint}-600", dangerous_inner_html: icon }
            }
            h3 { class: "font-medium text-gray-900", "{title}" }
            p { class: "text-sm text-gray-500 mt-1", "{subtitle}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_statuses_map_to_their_badge_colors() {
        assert_eq!(status_badge_class("upcoming"), "bg-blue-100 text-blue-800");
        assert_eq!(status_badge_class("overdue"), "bg-red-100 text-red-800");
        assert_eq!(status_badge_class("completed"), "bg-green-100 text-green-800");
    }

    #[test]
    fn unknown_status_falls_back_to_gray() {
        assert_eq!(status_badge_class("archived"), "bg-gray-100 text-gray-800");
        assert_eq!(status_badge_class(""), "bg-gray-100 text-gray-800");
    }

    #[test]
    fn quiz_gets_the_star_icon_everything_else_a_document() {
        assert_eq!(type_icon("quiz"), ICON_STAR);
        assert_eq!(type_icon("assignment"), ICON_FILE_TEXT);
        assert_eq!(type_icon("material"), ICON_FILE_TEXT);
        assert_eq!(type_icon("video"), ICON_FILE_TEXT);
    }

    #[test]
    fn banner_counts_the_upcoming_assignments() {
        assert_eq!(upcoming_count(&sample_assignments()), 2);
    }

    #[test]
    fn upcoming_count_ignores_other_statuses() {
        let assignments = vec![Assignment {
            id: "9".to_string(),
            title: "Closed".to_string(),
            course: "World History".to_string(),
            due_date: "Yesterday".to_string(),
            status: "completed".to_string(),
            kind: "assignment".to_string(),
        }];
        assert_eq!(upcoming_count(&assignments), 0);
        assert_eq!(upcoming_count(&[]), 0);
    }

    #[test]
    fn sample_data_shape() {
        assert_eq!(sample_courses().len(), 4);
        assert_eq!(sample_assignments().len(), 4);
    }
}
