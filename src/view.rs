//! Typed view model over the server-rendered dashboard markup.
//!
//! SYSTEM CONTEXT
//! ==============
//! The dashboard pages are rendered by the server; this crate only attaches
//! behavior. `DashboardView` looks every element up once, at controller
//! construction, so the rest of the controller works with named handles
//! instead of scattered selector queries. A missing element turns the
//! feature that needs it into a no-op.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

pub const THEME_TOGGLE_ID: &str = "theme-toggle";
pub const THEME_ICON_SELECTOR: &str = "#theme-toggle i";
pub const FILE_INPUT_ID: &str = "bot_file";
pub const FILE_PREVIEW_ID: &str = "file-preview";
pub const FILE_NAME_ID: &str = "file-name";
pub const LANGUAGE_SELECT_ID: &str = "bot_language";
pub const RUNNING_STAT_SELECTOR: &str = ".stat-value:first-child";
pub const CPU_BAR_SELECTOR: &str = ".progress-bar.cpu";
pub const MEMORY_BAR_SELECTOR: &str = ".progress-bar.memory";
pub const ANCHOR_SELECTOR: &str = "a[href]";
pub const TOOLTIP_ATTR: &str = "data-tooltip";
pub const TOOLTIP_SELECTOR: &str = "[data-tooltip]";

/// Bot action encoded in an anchor's navigation target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkAction {
    Delete,
    Start,
    Stop,
}

impl LinkAction {
    /// Classify an `href` attribute by path substring.
    pub fn from_href(href: &str) -> Option<Self> {
        if href.contains("/delete/") {
            Some(Self::Delete)
        } else if href.contains("/start/") {
            Some(Self::Start)
        } else if href.contains("/stop/") {
            Some(Self::Stop)
        } else {
            None
        }
    }

    /// Whether clicking shows the busy indicator.
    pub fn shows_busy(self) -> bool {
        matches!(self, Self::Start | Self::Stop)
    }
}

#[cfg(feature = "csr")]
pub use bound::DashboardView;

#[cfg(feature = "csr")]
mod bound {
    use web_sys::{Document, Element, HtmlElement, HtmlInputElement, HtmlSelectElement};

    use super::*;
    use crate::util::dom::{by_id, query_all, query_one};

    /// Element handles bound once from the current document.
    pub struct DashboardView {
        pub theme_toggle: Option<HtmlElement>,
        pub theme_icon: Option<Element>,
        pub file_input: Option<HtmlInputElement>,
        pub file_preview: Option<HtmlElement>,
        pub file_name: Option<HtmlElement>,
        pub language_select: Option<HtmlSelectElement>,
        pub running_stat: Option<HtmlElement>,
        pub cpu_bar: Option<HtmlElement>,
        pub memory_bar: Option<HtmlElement>,
        pub delete_links: Vec<HtmlElement>,
        pub action_links: Vec<HtmlElement>,
        pub tooltip_targets: Vec<HtmlElement>,
    }

    impl DashboardView {
        pub fn bind(doc: &Document) -> Self {
            let mut delete_links = Vec::new();
            let mut action_links = Vec::new();
            for anchor in query_all::<HtmlElement>(doc, ANCHOR_SELECTOR) {
                let href = anchor.get_attribute("href").unwrap_or_default();
                match LinkAction::from_href(&href) {
                    Some(LinkAction::Delete) => delete_links.push(anchor),
                    Some(action) if action.shows_busy() => action_links.push(anchor),
                    _ => {}
                }
            }

            let view = Self {
                theme_toggle: by_id(doc, THEME_TOGGLE_ID),
                theme_icon: query_one(doc, THEME_ICON_SELECTOR),
                file_input: by_id(doc, FILE_INPUT_ID),
                file_preview: by_id(doc, FILE_PREVIEW_ID),
                file_name: by_id(doc, FILE_NAME_ID),
                language_select: by_id(doc, LANGUAGE_SELECT_ID),
                running_stat: query_one(doc, RUNNING_STAT_SELECTOR),
                cpu_bar: query_one(doc, CPU_BAR_SELECTOR),
                memory_bar: query_one(doc, MEMORY_BAR_SELECTOR),
                delete_links,
                action_links,
                tooltip_targets: query_all(doc, TOOLTIP_SELECTOR),
            };
            view.log_missing();
            view
        }

        fn log_missing(&self) {
            let missing: Vec<&str> = [
                (self.theme_toggle.is_none(), THEME_TOGGLE_ID),
                (self.file_input.is_none(), FILE_INPUT_ID),
                (self.language_select.is_none(), LANGUAGE_SELECT_ID),
                (self.running_stat.is_none(), RUNNING_STAT_SELECTOR),
            ]
            .into_iter()
            .filter_map(|(absent, name)| absent.then_some(name))
            .collect();
            if !missing.is_empty() {
                leptos::logging::log!("dashboard view: not on this page: {}", missing.join(", "));
            }
        }
    }
}
