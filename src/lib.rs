//! Nanny - pre-installation advisory gate.
//!
//! Nanny runs before a package is installed or launched and decides whether
//! it may proceed. It can check that the processor supports a required
//! instruction-set feature, and it can warn about opt-out telemetry and
//! remember the user's consent per package.
//!
//! # Modules
//!
//! - [`advisory`] - Request validation, message formatting, and sequencing
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Settings resolved from the environment
//! - [`error`] - Error types and result aliases
//! - [`probe`] - Processor feature detection
//! - [`state`] - The consent ledger
//! - [`ui`] - Terminal and graphical presentation
//!
//! # Example
//!
//! ```
//! use nanny::advisory::{AdvisoryCommand, AdvisoryRequest, Outcome};
//! use nanny::probe::CapabilityProbe;
//! use nanny::state::ConsentLedger;
//! use nanny::ui::MockPresenter;
//!
//! struct Everything;
//!
//! impl CapabilityProbe for Everything {
//!     fn supports(&self, _feature: &str) -> bool {
//!         true
//!     }
//! }
//!
//! let mut request = AdvisoryRequest::new("foo");
//! request.feature = Some("avx2".to_string());
//!
//! let command = AdvisoryCommand::new(request, Box::new(Everything), ConsentLedger::detached());
//! let outcome = command.execute(&mut MockPresenter::new()).unwrap();
//! assert_eq!(outcome, Outcome::NothingToDo);
//! ```

pub mod advisory;
pub mod cli;
pub mod config;
pub mod error;
pub mod probe;
pub mod state;
pub mod ui;

pub use error::{NannyError, Result};
