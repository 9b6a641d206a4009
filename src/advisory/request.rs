//! Validated advisory request.

use crate::error::{NannyError, Result};

/// One invocation's worth of advisory parameters.
///
/// Built once by the CLI layer and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdvisoryRequest {
    /// Package name; the ledger key.
    pub name: String,
    /// Telemetry-free alternative software, if any.
    pub alt_software: Option<String>,
    /// Package providing the alternative.
    pub alt_package: Option<String>,
    /// Human-readable description ("pretty name") of the package.
    pub description: Option<String>,
    /// URL of the licensing terms.
    pub eula_url: Option<String>,
    /// Processor feature the package requires.
    pub feature: Option<String>,
    /// Display name of the licensing document.
    pub legal_doc_name: Option<String>,
    /// Skip the graphical backend even in a graphical session.
    pub force_text: bool,
}

impl AdvisoryRequest {
    /// Create a request for `name` with every optional field unset.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Check the invariants that do not depend on the ledger.
    ///
    /// The name must be usable as a ledger line and at least one of
    /// description or feature must be requested.
    pub fn validate(&self) -> Result<()> {
        validate_package_name(&self.name).map_err(NannyError::usage)?;
        if self.description.is_none() && self.feature.is_none() {
            return Err(NannyError::usage(
                "either a description (-d) or a processor feature (-f) is required",
            ));
        }
        Ok(())
    }
}

/// Reject names that cannot be stored as a single ledger line.
pub fn validate_package_name(name: &str) -> std::result::Result<(), String> {
    if name.trim().is_empty() {
        return Err("package name must not be empty".to_string());
    }
    if name.contains(['\n', '\r']) {
        return Err("package name must not contain line breaks".to_string());
    }
    Ok(())
}
