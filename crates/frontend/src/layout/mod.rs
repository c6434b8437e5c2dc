pub mod global_context;
pub mod tabs;
pub mod top_header;

use leptos::prelude::*;
use top_header::TopHeader;

/// Main application shell.
///
/// ```text
/// +------------------------------------------+
/// |              TopHeader                    |
/// +------------------------------------------+
/// |              Tab bar                      |
/// +------------------------------------------+
/// |              Content                      |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell<N, C>(nav: N, center: C) -> impl IntoView
where
    N: Fn() -> AnyView + 'static + Send,
    C: Fn() -> AnyView + 'static + Send,
{
    view! {
        <div class="app-layout">
            <TopHeader />

            <nav data-zone="tabs" class="app-tabs">
                {nav()}
            </nav>

            <div data-zone="center" class="app-main" style="flex: 1; overflow: auto;">
                {center()}
            </div>
        </div>
    }
}
