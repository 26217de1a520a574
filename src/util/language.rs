//! Bot runtime detection from uploaded file names.

#[cfg(test)]
#[path = "language_test.rs"]
mod language_test;

/// Runtimes a bot can be launched with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BotLanguage {
    Python,
    Php,
    Node,
    Bash,
}

impl BotLanguage {
    /// Option value used by the `#bot_language` selector.
    pub fn select_value(self) -> &'static str {
        match self {
            Self::Python => "python",
            Self::Php => "php",
            Self::Node => "node",
            Self::Bash => "bash",
        }
    }

    /// Map a file extension (without the dot) to a runtime.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "py" => Some(Self::Python),
            "php" => Some(Self::Php),
            "js" => Some(Self::Node),
            "sh" => Some(Self::Bash),
            _ => None,
        }
    }

    /// Infer the runtime from the text after the last `.` of a file name.
    ///
    /// A name without a dot is matched as a whole, so `"py"` still maps to
    /// Python while `"Makefile"` maps to nothing.
    pub fn detect(file_name: &str) -> Option<Self> {
        let ext = file_name.rsplit('.').next().unwrap_or(file_name);
        Self::from_extension(ext)
    }
}
