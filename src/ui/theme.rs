//! Visual theme and styling for the terminal backend.

use console::Style;

/// Nanny's terminal theme.
#[derive(Debug, Clone)]
pub struct NannyTheme {
    /// Style for the advisory title (orange bold).
    pub title: Style,
    /// Style for the `Proceed? [y/N]` question (bold).
    pub question: Style,
    /// Style for the decline notice (dim).
    pub notice: Style,
}

impl Default for NannyTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl NannyTheme {
    /// Create the colored theme.
    ///
    /// Styling is forced on: whether to color is decided by `NO_COLOR`
    /// alone, not by TTY detection.
    pub fn new() -> Self {
        Self {
            title: Style::new().color256(208).bold().force_styling(true),
            question: Style::new().bold().force_styling(true),
            notice: Style::new().dim().force_styling(true),
        }
    }

    /// Create a theme without colors (for `NO_COLOR`).
    pub fn plain() -> Self {
        Self {
            title: Style::new(),
            question: Style::new(),
            notice: Style::new(),
        }
    }

    /// Pick the colored or plain theme.
    pub fn for_colorize(colorize: bool) -> Self {
        if colorize {
            Self::new()
        } else {
            Self::plain()
        }
    }

    /// Format the advisory title.
    pub fn format_title(&self, title: &str) -> String {
        format!("{}", self.title.apply_to(title))
    }
}
