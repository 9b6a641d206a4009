//! Advisory sequencing.
//!
//! [`AdvisoryCommand::execute`] runs the whole decision for one invocation:
//!
//! 1. If a processor feature was requested and the probe does not confirm
//!    it, show the baseline error and stop with [`Outcome::BaselineUnsupported`].
//! 2. If a description was requested, skip silently when the ledger already
//!    holds consent; otherwise present the telemetry advisory and record
//!    consent on acceptance.
//! 3. With neither, there is nothing to do.
//!
//! The ledger is only read before and written after the presentation, never
//! held open while waiting for the user.

use crate::error::Result;
use crate::probe::CapabilityProbe;
use crate::state::ConsentLedger;
use crate::ui::Presenter;

use super::{baseline_error, exit, telemetry_advisory, AdvisoryRequest};

/// Terminal state of an advisory run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Neither a feature nor a description was requested past the probe.
    NothingToDo,
    /// Consent was recorded by an earlier run.
    AlreadyConsented,
    /// The user accepted the advisory.
    Accepted,
    /// The user declined the advisory.
    Declined,
    /// The processor lacks the required feature.
    BaselineUnsupported,
}

impl Outcome {
    /// Process exit status for this outcome.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::NothingToDo | Self::AlreadyConsented | Self::Accepted => exit::SUCCESS,
            Self::Declined | Self::BaselineUnsupported => exit::DECLINED,
        }
    }

    /// Whether the package may be launched.
    pub fn may_launch(&self) -> bool {
        self.exit_code() == exit::SUCCESS
    }
}

/// One advisory invocation with its collaborators.
pub struct AdvisoryCommand {
    request: AdvisoryRequest,
    probe: Box<dyn CapabilityProbe>,
    ledger: ConsentLedger,
}

impl AdvisoryCommand {
    /// Create a command for `request`.
    pub fn new(
        request: AdvisoryRequest,
        probe: Box<dyn CapabilityProbe>,
        ledger: ConsentLedger,
    ) -> Self {
        Self {
            request,
            probe,
            ledger,
        }
    }

    /// The request being processed.
    pub fn request(&self) -> &AdvisoryRequest {
        &self.request
    }

    /// Run the advisory, presenting through `presenter` when needed.
    pub fn execute(&self, presenter: &mut dyn Presenter) -> Result<Outcome> {
        let request = &self.request;

        // The feature check is independent of the consent path.
        if let Some(feature) = &request.feature {
            if !self.probe.supports(feature) {
                tracing::info!(feature = %feature, name = %request.name, "processor baseline not met");
                presenter.present(&baseline_error(feature, &request.name))?;
                return Ok(Outcome::BaselineUnsupported);
            }
        }

        if request.description.is_none() {
            return Ok(Outcome::NothingToDo);
        }

        if self.ledger.already_consented(&request.name) {
            tracing::debug!(name = %request.name, "consent already on record");
            return Ok(Outcome::AlreadyConsented);
        }

        let message = telemetry_advisory(request)?;
        match presenter.present(&message)? {
            Some(true) => {
                self.ledger.record_consent(&request.name);
                tracing::info!(name = %request.name, "advisory accepted");
                Ok(Outcome::Accepted)
            }
            _ => {
                tracing::info!(name = %request.name, "advisory declined");
                Ok(Outcome::Declined)
            }
        }
    }
}
