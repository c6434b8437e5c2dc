//! Static tab definitions of the application shell.
//!
//! The list is hardcoded; insertion order is display order.

use serde::{Deserialize, Serialize};

/// One navigable section of the UI.
///
/// `content_url` and `image_url` are opaque paths resolved by the views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tab {
    pub name: String,
    #[serde(rename = "contentURL")]
    pub content_url: String,
    #[serde(rename = "imageURL")]
    pub image_url: String,
    pub active: bool,
}

impl Tab {
    pub fn new(name: &str, content_url: &str, image_url: &str) -> Self {
        Self {
            name: name.to_string(),
            content_url: content_url.to_string(),
            image_url: image_url.to_string(),
            active: false,
        }
    }
}

/// Tabs the shell starts with. All of them are inactive here,
/// activation of the first one happens when navigation state is created.
pub fn default_tabs() -> Vec<Tab> {
    vec![
        Tab::new(
            "Narratives",
            "/app/views/narratives.htm",
            "/app/images/tabs/main/inspect-24.png",
        ),
        Tab::new(
            "Processes",
            "/app/views/processes.htm",
            "/app/images/tabs/main/observe-24.png",
        ),
    ]
}
