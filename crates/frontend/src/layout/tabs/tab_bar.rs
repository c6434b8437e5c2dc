use crate::layout::global_context::use_global_context;
use contracts::shared::tabs::Tab as TabData;
use leptos::ev;
use leptos::prelude::*;

#[component]
fn TabLink(index: usize, tab: TabData) -> impl IntoView {
    let ctx = use_global_context();

    let is_active = Memo::new(move |_| ctx.navigation.with(|nav| nav.current_index() == index));

    // href stays a real link; change_tab suppresses the navigation
    let on_click = move |ev: ev::MouseEvent| {
        let _ = ctx.change_tab(index, Some(&ev));
    };

    view! {
        <a
            class="tab"
            class:active=is_active
            href=tab.content_url
            data-tab-index=index.to_string()
            on:click=on_click
        >
            <img class="tab__icon" src=tab.image_url alt="" />
            <span>{tab.name}</span>
        </a>
    }
}

#[component]
pub fn TabBar() -> impl IntoView {
    let ctx = use_global_context();

    // The tab list is fixed after startup, only `active` changes.
    let tabs = ctx.navigation.with_untracked(|nav| nav.tabs().to_vec());

    view! {
        <div class="tabs">
            {tabs
                .into_iter()
                .enumerate()
                .map(|(index, tab)| view! { <TabLink index=index tab=tab /> })
                .collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    const STYLESHEET: &str = include_str!("../../../style/main.css");
    const INDEX_HTML: &str = include_str!("../../../index.html");

    #[test]
    fn test_active_class_is_styled() {
        assert!(STYLESHEET.contains(".tab.active {"));
        assert!(INDEX_HTML.contains(r#"rel="css" href="style/main.css""#));
    }
}
