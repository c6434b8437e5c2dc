use crate::app_shell::AppShell;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::resource::ResourceDefaults;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Don't strip trailing slashes from computed resource URLs
    let resources = ResourceDefaults::application();

    let ctx = AppGlobalContext::new(resources);
    log::info!(
        "Broadway {} started, active tab: {}",
        ctx.version,
        ctx.navigation.with_untracked(|nav| nav.current_tab().name.clone())
    );

    // Provide the AppGlobalContext store to the whole app via context.
    provide_context(ctx);

    view! {
        <AppShell />
    }
}
