//! TopHeader component - application title and version marker.

use crate::layout::global_context::use_global_context;
use contracts::shared::app_info::APP_NAME;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_global_context();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <span class="top-header__title">{APP_NAME}</span>
                <span class="top-header__version">{format!("v{}", ctx.version)}</span>
            </div>
        </div>
    }
}
