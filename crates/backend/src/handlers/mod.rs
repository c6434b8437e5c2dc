pub mod app_info;
