pub mod classroom_layout;
pub mod dashboard;
pub mod header;
pub mod sidebar;

pub use classroom_layout::ClassroomLayout;
pub use dashboard::ClassroomDashboard;
pub use header::ClassroomHeader;
pub use sidebar::ClassroomSidebar;
