//! TabContent component - shows the view of the active tab.

use crate::layout::global_context::use_global_context;
use leptos::prelude::*;

/// Renders `current_tab().content_url` in a frame.
///
/// The view behind the URL is opaque to the shell.
#[component]
pub fn TabContent() -> impl IntoView {
    let ctx = use_global_context();

    let content_url = Memo::new(move |_| ctx.navigation.with(|nav| nav.current_tab().content_url.clone()));
    let title = Memo::new(move |_| ctx.navigation.with(|nav| nav.current_tab().name.clone()));

    view! {
        <div class="tabs__item">
            <iframe
                class="tabs__frame"
                src=move || content_url.get()
                title=move || title.get()
                style="width: 100%; height: 100%; border: none;"
            ></iframe>
        </div>
    }
}
