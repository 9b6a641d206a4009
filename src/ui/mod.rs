//! Advisory presentation.
//!
//! This module provides:
//! - [`Presenter`] trait, the single capability the advisory workflow needs
//! - [`Presentation`], the graphical-or-terminal backend chosen once per run
//! - [`TerminalPresenter`] for headless sessions and `-c`
//! - [`DialogPresenter`] for graphical sessions
//! - [`MockPresenter`] for tests
//! - [`richtext`] and [`render`] for turning advisory markup into terminal text
//!
//! # Example
//!
//! ```
//! use nanny::config::Settings;
//! use nanny::ui::Presentation;
//!
//! let settings = Settings { graphical_session: true, ..Settings::default() };
//! assert!(Presentation::select(&settings, false).is_graphical());
//! assert!(!Presentation::select(&settings, true).is_graphical());
//! ```

pub mod dialog;
pub mod mock;
pub mod render;
pub mod richtext;
pub mod terminal;
pub mod theme;

use std::io::StdinLock;

use console::Term;

pub use dialog::{DialogPresenter, DialogTool};
pub use mock::MockPresenter;
pub use render::to_terminal_text;
pub use richtext::RichText;
pub use terminal::TerminalPresenter;
pub use theme::NannyTheme;

use crate::advisory::RichMessage;
use crate::config::Settings;
use crate::error::{NannyError, Result};

/// Something that can show an advisory and collect the user's decision.
pub trait Presenter {
    /// Show `message`.
    ///
    /// Returns `None` for acknowledgment-only messages (empty prompt) and
    /// `Some(accepted)` otherwise.
    fn present(&mut self, message: &RichMessage) -> Result<Option<bool>>;
}

/// Whether the graphical backend should be used.
pub fn use_graphical(settings: &Settings, force_text: bool) -> bool {
    !force_text && settings.graphical_session
}

/// The presentation backend for this run.
pub enum Presentation {
    /// Modal dialog, with the terminal as a fallback when no helper runs.
    Graphical {
        dialog: DialogPresenter,
        fallback: TerminalPresenter<StdinLock<'static>, Term>,
    },
    /// Standard streams.
    Terminal(TerminalPresenter<StdinLock<'static>, Term>),
}

impl Presentation {
    /// Pick the backend from the session type and the `-c` flag.
    pub fn select(settings: &Settings, force_text: bool) -> Self {
        let terminal = TerminalPresenter::stdio(settings.colorize);
        if use_graphical(settings, force_text) {
            tracing::debug!("using graphical presentation");
            Self::Graphical {
                dialog: DialogPresenter::new(),
                fallback: terminal,
            }
        } else {
            tracing::debug!("using terminal presentation");
            Self::Terminal(terminal)
        }
    }

    /// Whether the graphical backend was selected.
    pub fn is_graphical(&self) -> bool {
        matches!(self, Self::Graphical { .. })
    }
}

impl Presenter for Presentation {
    fn present(&mut self, message: &RichMessage) -> Result<Option<bool>> {
        match self {
            Self::Graphical { dialog, fallback } => match dialog.present(message) {
                Err(NannyError::DialogUnavailable { message: reason }) => {
                    tracing::warn!("{}; falling back to terminal", reason);
                    fallback.present(message)
                }
                result => result,
            },
            Self::Terminal(terminal) => terminal.present(message),
        }
    }
}
