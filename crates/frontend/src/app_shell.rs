//! Application Shell - root layout of the application

use crate::layout::tabs::{TabBar, TabContent};
use crate::layout::Shell;
use leptos::prelude::*;

#[component]
pub fn AppShell() -> impl IntoView {
    view! {
        <Shell
            nav=|| view! { <TabBar /> }.into_any()
            center=|| view! { <TabContent /> }.into_any()
        />
    }
}
