//! Toast notification state.
//!
//! Toasts are plain records in an append-only list; the `ToastStack`
//! component renders whatever is present. There is no queue, dedup or cap.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// Severity tag for a toast.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

impl ToastKind {
    /// Parse a severity tag; absent or unknown tags fall back to `Info`.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("success") => Self::Success,
            Some("error") => Self::Error,
            Some("warning") => Self::Warning,
            _ => Self::Info,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }

    /// Font Awesome icon name, without the `fa-` prefix.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => "check-circle",
            Self::Error => "exclamation-circle",
            Self::Warning => "exclamation-triangle",
            Self::Info => "info-circle",
        }
    }

    pub fn class_name(self) -> String {
        format!("toast toast-{}", self.as_str())
    }

    pub fn icon_class(self) -> String {
        format!("fas fa-{}", self.icon())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub items: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Append a toast and return its id.
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Toast {
            id,
            kind,
            message: message.into(),
        });
        id
    }

    /// Remove toast `id`. Returns `false` if it was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|t| t.id != id);
        self.items.len() != before
    }

    /// Remove every toast. Ids keep increasing afterwards.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn contains(&self, id: u64) -> bool {
        self.items.iter().any(|t| t.id == id)
    }
}
