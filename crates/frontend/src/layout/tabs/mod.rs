//! Tab navigation views
//!
//! - `tab_bar` - one link per tab, clicking switches the active tab
//! - `page` - renders the active tab's content view

pub mod page;
pub mod tab_bar;

pub use page::TabContent;
pub use tab_bar::TabBar;
