//! Tab navigation state of the application shell.
//!
//! Owns the ordered tab list and the pointer to the single active tab.
//! All mutation goes through [`TabNavigation::change_tab`]; views only read.

use contracts::shared::tabs::{default_tabs, Tab};
use thiserror::Error;

/// Anything whose default action can be suppressed, e.g. a link click.
///
/// Implementations must not stop propagation.
pub trait DefaultAction {
    fn prevent_default(&self);
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("navigation requires at least one tab")]
    NoTabs,
    #[error("tab index {index} out of range (tabs: {len})")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("navigation state has been disposed")]
    Disposed,
}

/// Exactly one tab is active at any time and `current` always points at it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabNavigation {
    tabs: Vec<Tab>,
    current: usize,
}

impl TabNavigation {
    /// Builds navigation state from tab definitions, activating the first one.
    pub fn new(definitions: Vec<Tab>) -> Result<Self, NavigationError> {
        if definitions.is_empty() {
            return Err(NavigationError::NoTabs);
        }
        Ok(Self::activate_first(definitions))
    }

    fn activate_first(mut tabs: Vec<Tab>) -> Self {
        for (i, tab) in tabs.iter_mut().enumerate() {
            tab.active = i == 0;
        }
        Self { tabs, current: 0 }
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_tab(&self) -> &Tab {
        &self.tabs[self.current]
    }

    /// Makes `tabs[index]` the active tab.
    ///
    /// When `event` is given its default action is suppressed. An out-of-range
    /// index is rejected and leaves both the state and the event untouched.
    pub fn change_tab(
        &mut self,
        index: usize,
        event: Option<&dyn DefaultAction>,
    ) -> Result<(), NavigationError> {
        let len = self.tabs.len();
        if index >= len {
            return Err(NavigationError::IndexOutOfRange { index, len });
        }

        self.tabs[self.current].active = false;
        self.current = index;
        self.tabs[self.current].active = true;

        if let Some(event) = event {
            event.prevent_default();
        }
        Ok(())
    }
}

impl Default for TabNavigation {
    fn default() -> Self {
        Self::activate_first(default_tabs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[derive(Default)]
    struct RecordingEvent {
        prevented: Cell<u32>,
    }

    impl DefaultAction for RecordingEvent {
        fn prevent_default(&self) {
            self.prevented.set(self.prevented.get() + 1);
        }
    }

    fn assert_single_active(nav: &TabNavigation) {
        let active: Vec<usize> = nav
            .tabs()
            .iter()
            .enumerate()
            .filter(|(_, t)| t.active)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(active, vec![nav.current_index()]);
        assert!(std::ptr::eq(
            nav.current_tab(),
            &nav.tabs()[nav.current_index()]
        ));
    }

    #[test]
    fn test_initial_state() {
        let nav = TabNavigation::default();
        assert_eq!(nav.current_tab().name, "Narratives");
        assert!(nav.tabs()[0].active);
        assert!(!nav.tabs()[1].active);
        assert_single_active(&nav);
    }

    #[test]
    fn test_new_normalizes_active_flags() {
        let mut defs = default_tabs();
        defs[1].active = true;
        let nav = TabNavigation::new(defs).unwrap();
        assert_eq!(nav.current_index(), 0);
        assert_single_active(&nav);
    }

    #[test]
    fn test_new_rejects_empty() {
        assert_eq!(TabNavigation::new(vec![]), Err(NavigationError::NoTabs));
    }

    #[test]
    fn test_change_tab_without_event() {
        let mut nav = TabNavigation::default();
        nav.change_tab(1, None).unwrap();
        assert_eq!(nav.current_tab().name, "Processes");
        assert!(!nav.tabs()[0].active);
        assert!(nav.tabs()[1].active);
        assert_single_active(&nav);
    }

    #[test]
    fn test_change_tab_suppresses_default_once() {
        let mut nav = TabNavigation::default();
        let event = RecordingEvent::default();
        nav.change_tab(1, Some(&event)).unwrap();
        assert_eq!(event.prevented.get(), 1);
    }

    #[test]
    fn test_change_tab_is_idempotent() {
        let mut once = TabNavigation::default();
        once.change_tab(1, None).unwrap();

        let mut twice = TabNavigation::default();
        twice.change_tab(1, None).unwrap();
        twice.change_tab(1, None).unwrap();

        assert_eq!(once, twice);
        assert_single_active(&twice);
    }

    #[test]
    fn test_change_tab_back_and_forth() {
        let mut nav = TabNavigation::default();
        nav.change_tab(1, None).unwrap();
        nav.change_tab(0, None).unwrap();
        assert_eq!(nav.current_tab().content_url, "/app/views/narratives.htm");
        assert_single_active(&nav);
    }

    #[test]
    fn test_change_tab_out_of_range_has_no_effect() {
        let mut nav = TabNavigation::default();
        let before = nav.clone();
        let event = RecordingEvent::default();

        let err = nav.change_tab(2, Some(&event)).unwrap_err();

        assert_eq!(err, NavigationError::IndexOutOfRange { index: 2, len: 2 });
        assert_eq!(err.to_string(), "tab index 2 out of range (tabs: 2)");
        assert_eq!(nav, before);
        assert_eq!(event.prevented.get(), 0);
    }
}
