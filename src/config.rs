//! Runtime configuration for the dashboard controller.
//!
//! Every field has a default matching the server-rendered pages, so an empty
//! JSON object (or no config element at all) yields the stock behavior.
//! Pages may override individual fields through
//! `<script type="application/json" id="dashboard-config">`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

/// Id of the optional inline JSON config element.
pub const CONFIG_ELEMENT_ID: &str = "dashboard-config";

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// `localStorage` key holding `"light"` or `"dark"`.
    pub storage_key: String,
    pub poll_interval_ms: u32,
    /// Pathnames on which stats polling runs.
    pub poll_paths: Vec<String>,
    pub stats_endpoint: String,
    /// Prefix joined with a bot id to form the log stream URL.
    pub logs_stream_prefix: String,
    /// Delay before a busy start/stop control is restored.
    pub busy_reset_ms: u32,
    pub toast_ttl_ms: u32,
    /// Gap between a tooltip and the top edge of its target.
    pub tooltip_offset_px: f64,
    pub delete_prompt: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            storage_key: "devilcloud-theme".to_owned(),
            poll_interval_ms: 30_000,
            poll_paths: vec!["/dashboard".to_owned(), "/admin".to_owned()],
            stats_endpoint: "/api/stats".to_owned(),
            logs_stream_prefix: "/api/logs/stream/".to_owned(),
            busy_reset_ms: 5_000,
            toast_ttl_ms: 5_000,
            tooltip_offset_px: 10.0,
            delete_prompt: "Are you sure you want to delete this bot?".to_owned(),
        }
    }
}

impl DashboardConfig {
    /// Parse overrides from JSON, falling back to defaults for absent fields.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if `raw` is not a valid config object.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Whether stats polling should run on `pathname`.
    pub fn polls_on(&self, pathname: &str) -> bool {
        self.poll_paths.iter().any(|p| p == pathname)
    }

    /// Load config from the page, or defaults when absent or malformed.
    pub fn load() -> Self {
        #[cfg(feature = "csr")]
        {
            let raw = crate::util::dom::document()
                .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
                .and_then(|el| el.text_content());
            let Some(raw) = raw else {
                return Self::default();
            };
            match Self::from_json(&raw) {
                Ok(config) => config,
                Err(e) => {
                    leptos::logging::warn!("dashboard config ignored: {e}");
                    Self::default()
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            Self::default()
        }
    }
}
