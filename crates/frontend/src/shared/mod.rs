pub mod dom_event;
pub mod resource;
pub mod state;
