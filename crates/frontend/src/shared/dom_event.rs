//! `DefaultAction` for browser events.

use crate::shared::state::navigation::DefaultAction;

impl DefaultAction for web_sys::Event {
    fn prevent_default(&self) {
        web_sys::Event::prevent_default(self);
    }
}

impl DefaultAction for web_sys::MouseEvent {
    fn prevent_default(&self) {
        // MouseEvent derefs to Event
        web_sys::Event::prevent_default(self);
    }
}
