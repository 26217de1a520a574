//! Theme initialization and toggle.
//!
//! Reads the saved theme from `localStorage` and applies it as a
//! `data-theme` attribute on the `<html>` element. Toggle writes back to
//! both. Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort browser-only behavior; native builds no-op so
//! the state machine stays testable without a DOM.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Attribute on `<html>` that stylesheets key off.
pub const THEME_ATTR: &str = "data-theme";

/// Two-valued dashboard theme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Value written to the attribute and to storage.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored value. Anything but `"light"`/`"dark"` is rejected.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// Interpret the current `data-theme` attribute; only `"dark"` is dark.
    pub fn from_attr(attr: Option<&str>) -> Self {
        if attr == Some("dark") { Self::Dark } else { Self::Light }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Icon class for the toggle button.
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Light => "fas fa-sun",
            Self::Dark => "fas fa-moon",
        }
    }
}

/// Read the saved theme from `localStorage`.
pub fn read_saved(storage_key: &str) -> Option<Theme> {
    #[cfg(feature = "csr")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        let raw = storage.get_item(storage_key).ok().flatten()?;
        Theme::parse(&raw)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = storage_key;
        None
    }
}

/// Read the theme currently applied to `<html>`.
pub fn current() -> Theme {
    #[cfg(feature = "csr")]
    {
        let attr = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
            .and_then(|el| el.get_attribute(THEME_ATTR));
        Theme::from_attr(attr.as_deref())
    }
    #[cfg(not(feature = "csr"))]
    {
        Theme::Light
    }
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(theme: Theme) {
    #[cfg(feature = "csr")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let _ = el.set_attribute(THEME_ATTR, theme.as_str());
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = theme;
    }
}

fn persist(storage_key: &str, theme: Theme) {
    #[cfg(feature = "csr")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(storage_key, theme.as_str());
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (storage_key, theme);
    }
}

/// Apply the saved theme, if any. Leaves `<html>` untouched otherwise.
pub fn restore(storage_key: &str) -> Option<Theme> {
    let saved = read_saved(storage_key)?;
    apply(saved);
    Some(saved)
}

/// Flip `current`, apply it, and persist the new value.
pub fn toggle(current: Theme, storage_key: &str) -> Theme {
    let next = current.toggled();
    apply(next);
    persist(storage_key, next);
    next
}
