//! Mock presenter for testing.
//!
//! `MockPresenter` implements [`Presenter`] and records every message it is
//! asked to show. Questions are answered with a pre-configured decision.
//!
//! # Example
//!
//! ```
//! use nanny::advisory::RichMessage;
//! use nanny::ui::{MockPresenter, Presenter};
//!
//! let mut presenter = MockPresenter::with_answer(true);
//! let decision = presenter
//!     .present(&RichMessage::question("Warning", "body", "Proceed?"))
//!     .unwrap();
//!
//! assert_eq!(decision, Some(true));
//! assert_eq!(presenter.presented().len(), 1);
//! ```

use crate::advisory::RichMessage;
use crate::error::{NannyError, Result};

use super::Presenter;

/// Recording presenter with a fixed answer.
#[derive(Debug, Default)]
pub struct MockPresenter {
    answer: bool,
    error: Option<NannyError>,
    presented: Vec<RichMessage>,
}

impl MockPresenter {
    /// Create a presenter that declines every question.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a presenter that answers every question with `answer`.
    pub fn with_answer(answer: bool) -> Self {
        Self {
            answer,
            ..Default::default()
        }
    }

    /// Create a presenter whose first presentation fails with `error`.
    pub fn with_error(error: NannyError) -> Self {
        Self {
            error: Some(error),
            ..Default::default()
        }
    }

    /// Messages presented so far, in order.
    pub fn presented(&self) -> &[RichMessage] {
        &self.presented
    }
}

impl Presenter for MockPresenter {
    fn present(&mut self, message: &RichMessage) -> Result<Option<bool>> {
        if let Some(error) = self.error.take() {
            return Err(error);
        }
        self.presented.push(message.clone());
        if message.is_acknowledgment() {
            Ok(None)
        } else {
            Ok(Some(self.answer))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn acknowledgment_returns_none() {
        let mut presenter = MockPresenter::with_answer(true);
        let decision = presenter
            .present(&RichMessage::acknowledgment("Warning", "body"))
            .unwrap();
        assert_eq!(decision, None);
    }

    #[test]
    fn default_declines() {
        let mut presenter = MockPresenter::new();
        let decision = presenter
            .present(&RichMessage::question("Warning", "body", "ok?"))
            .unwrap();
        assert_eq!(decision, Some(false));
    }

    #[test]
    fn error_is_returned_once() {
        let mut presenter = MockPresenter::with_error(NannyError::StdoutUnavailable);
        let message = RichMessage::acknowledgment("Warning", "body");
        assert!(presenter.present(&message).is_err());
        assert!(presenter.presented().is_empty());
        assert!(presenter.present(&message).is_ok());
        assert_eq!(presenter.presented().len(), 1);
    }
}
