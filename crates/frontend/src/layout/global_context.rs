use crate::shared::resource::{self, ResourceDefaults};
use crate::shared::state::{DefaultAction, NavigationError, TabNavigation};
use contracts::shared::app_info::APP_VERSION;
use contracts::shared::tabs::Tab;
use leptos::prelude::*;

/// Application-wide store, provided once via context by `App`.
///
/// Views read `navigation` freely but change it only through [`Self::change_tab`].
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub navigation: RwSignal<TabNavigation>,
    pub version: &'static str,
    pub resources: ResourceDefaults,
}

impl AppGlobalContext {
    pub fn new(resources: ResourceDefaults) -> Self {
        Self {
            navigation: RwSignal::new(TabNavigation::default()),
            version: APP_VERSION,
            resources,
        }
    }

    pub fn tabs(&self) -> Vec<Tab> {
        self.navigation.with(|nav| nav.tabs().to_vec())
    }

    pub fn current_tab(&self) -> Tab {
        self.navigation.with(|nav| nav.current_tab().clone())
    }

    pub fn change_tab(
        &self,
        index: usize,
        event: Option<&dyn DefaultAction>,
    ) -> Result<(), NavigationError> {
        // subscribers are notified only when the tab actually changed
        let result = self
            .navigation
            .try_maybe_update(|nav| {
                let result = nav.change_tab(index, event);
                (result.is_ok(), result)
            })
            .unwrap_or(Err(NavigationError::Disposed));
        if let Err(e) = &result {
            log::warn!("change_tab rejected: {}", e);
        }
        result
    }

    /// Expands a resource URL template with the defaults installed at startup.
    pub fn resource_url(&self, template: &str, params: &[(&str, &str)]) -> String {
        resource::resource_url(template, params, &self.resources)
    }
}

/// Fetches the store from context.
pub fn use_global_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext context not found")
}
