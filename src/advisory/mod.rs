//! The advisory workflow.
//!
//! - [`request`] - the validated invocation ([`AdvisoryRequest`])
//! - [`message`] - wording of the advisories ([`RichMessage`])
//! - [`command`] - probe → ledger → present → record sequencing
//! - [`exit`] - process exit statuses

pub mod command;
pub mod exit;
pub mod message;
pub mod request;

pub use command::{AdvisoryCommand, Outcome};
pub use message::{
    baseline_error, format_cpu_baseline_error, format_telemetry_warning, telemetry_advisory,
    RichMessage, ADVISORY_TITLE, CONSENT_PROMPT, DEFAULT_LEGAL_DOC_NAME,
};
pub use request::AdvisoryRequest;
