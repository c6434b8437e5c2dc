pub mod app_info;
pub mod tabs;
