pub mod login_area;

pub use login_area::LoginArea;
