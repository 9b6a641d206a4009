//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::Parser;
use std::path::PathBuf;

use crate::advisory::request::validate_package_name;
use crate::advisory::AdvisoryRequest;
use crate::config::Settings;
use crate::error::{NannyError, Result};
use crate::state::ConsentLedger;

/// Nanny - pre-installation advisories for packages with telemetry or
/// processor feature requirements.
#[derive(Debug, Parser)]
#[command(name = "nanny")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Package name, recorded in the consent ledger
    #[arg(short = 'n', long = "name", value_parser = parse_package_name)]
    pub name: Option<String>,

    /// Alternative software without telemetry
    #[arg(short = 'a', long = "alt-software", value_name = "SOFTWARE")]
    pub alt_software: Option<String>,

    /// Package providing the alternative software
    #[arg(short = 'k', long = "alt-package", value_name = "PACKAGE")]
    pub alt_package: Option<String>,

    /// Human-readable package description; shows the telemetry advisory
    #[arg(short = 'd', long = "description", value_name = "PRETTY_NAME")]
    pub description: Option<String>,

    /// URL of the licensing terms
    #[arg(short = 'l', long = "eula", value_name = "EULA_URL")]
    pub eula: Option<String>,

    /// Processor feature the package requires
    #[arg(short = 'f', long = "feature")]
    pub feature: Option<String>,

    /// Always use the terminal, even in a graphical session
    #[arg(short = 'c', long = "text")]
    pub text: bool,

    /// Consent ledger location
    #[arg(long, env = "NANNY_LEDGER", hide = true)]
    pub ledger: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Build the advisory request for this invocation.
    ///
    /// A missing name, or neither description nor feature, is a usage
    /// error. A description without a licensing URL is left for the
    /// advisory itself to reject, after the ledger has been consulted.
    pub fn to_request(&self, settings: &Settings) -> Result<AdvisoryRequest> {
        let name = self
            .name
            .clone()
            .ok_or_else(|| NannyError::usage("a package name (-n) is required"))?;

        let request = AdvisoryRequest {
            name,
            alt_software: self.alt_software.clone(),
            alt_package: self.alt_package.clone(),
            description: self.description.clone(),
            eula_url: self.eula.clone(),
            feature: self.feature.clone(),
            legal_doc_name: settings.legal_doc_name.clone(),
            force_text: self.text,
        };
        request.validate()?;
        Ok(request)
    }

    /// The consent ledger selected by `--ledger`, or the default one.
    pub fn consent_ledger(&self) -> ConsentLedger {
        match &self.ledger {
            Some(path) => ConsentLedger::new(path.clone()),
            None => ConsentLedger::open_default(),
        }
    }
}

/// clap value parser for `-n`.
pub fn parse_package_name(value: &str) -> std::result::Result<String, String> {
    validate_package_name(value)?;
    Ok(value.to_string())
}
