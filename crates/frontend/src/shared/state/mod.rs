pub mod navigation;

pub use navigation::{DefaultAction, NavigationError, TabNavigation};
