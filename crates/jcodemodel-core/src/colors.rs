//! ANSI styling for terminal output.

/// Styles for `import` listings and `inspect` reports.
#[derive(Clone, Copy, Debug)]
pub struct Colors {
    /// The `import` keyword
    pub keyword: &'static str,
    /// Qualified class names
    pub class: &'static str,
    /// Report labels and the statement terminator
    pub label: &'static str,
    pub reset: &'static str,
}

impl Default for Colors {
    fn default() -> Self {
        Self::OFF
    }
}

impl Colors {
    pub const ON: Self = Self {
        keyword: "\x1b[34m",
        class: "\x1b[32m",
        label: "\x1b[2m",
        reset: "\x1b[0m",
    };

    pub const OFF: Self = Self {
        keyword: "",
        class: "",
        label: "",
        reset: "",
    };

    pub fn new(enabled: bool) -> Self {
        if enabled { Self::ON } else { Self::OFF }
    }
}
