//! Advisory wording.
//!
//! Messages are built as rich text (see [`crate::ui::richtext`]) so the
//! same payload can drive either presentation backend. Request fields are
//! escaped before interpolation.

use crate::error::{NannyError, Result};
use crate::ui::richtext::escape;

use super::AdvisoryRequest;

/// Title of every advisory.
pub const ADVISORY_TITLE: &str = "Warning";

/// Link text used when no legal document name is supplied.
pub const DEFAULT_LEGAL_DOC_NAME: &str = "Licensing Terms";

/// Consent question shown below the telemetry advisory.
pub const CONSENT_PROMPT: &str = "By selecting \"Yes,\" you agree to the licensing terms \
    referenced above and consent launching an application which violates our packaging \
    guidelines.";

const STYLING_MANUAL_URL: &str =
    "https://wiki.aosc.io/developer/packaging/package-styling-manual/#package-features";

/// A titled rich-text message, optionally ending in a yes/no question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RichMessage {
    /// Window or banner title (plain text).
    pub title: String,
    /// Rich-text body.
    pub body: String,
    /// Rich-text question; empty for acknowledgment-only messages.
    pub prompt: String,
}

impl RichMessage {
    /// A message that is only dismissed, never answered.
    pub fn acknowledgment(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            prompt: String::new(),
        }
    }

    /// A message that asks the user to accept or decline.
    pub fn question(
        title: impl Into<String>,
        body: impl Into<String>,
        prompt: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            prompt: prompt.into(),
        }
    }

    /// Whether presenting this message yields no decision.
    pub fn is_acknowledgment(&self) -> bool {
        self.prompt.is_empty()
    }
}

/// Body of the telemetry advisory.
pub fn format_telemetry_warning(
    name: &str,
    alt_software: Option<&str>,
    alt_package: Option<&str>,
    description: &str,
    eula_url: &str,
    legal_doc_name: Option<&str>,
) -> String {
    let legal_doc_name = legal_doc_name
        .filter(|n| !n.is_empty())
        .unwrap_or(DEFAULT_LEGAL_DOC_NAME);

    let mut text = format!(
        "{} may collect your usage data on an opt-out basis, per the <a href=\"{}\">{}</a>.\
         <br><br>This default setting does not comply with our guidelines on telemetry in \
         packaged software, per section 5 of the <a href=\"{}\">AOSC OS Packaging Styling \
         Manual</a>. ",
        escape(description),
        escape(eula_url),
        escape(legal_doc_name),
        STYLING_MANUAL_URL,
    );

    match (alt_software.filter(|s| !s.is_empty()), alt_package) {
        (Some(software), Some(package)) if !package.is_empty() => text.push_str(&format!(
            "We offer a Telemetry-free alternative, {} (package: {}).<br><br>",
            escape(software),
            escape(package)
        )),
        (Some(software), _) => text.push_str(&format!(
            "We offer a Telemetry-free alternative, {}.<br><br>",
            escape(software)
        )),
        (None, _) => text.push_str("<br><br>"),
    }

    text.push_str(&format!(
        "Would you like to proceed with launching {}?",
        escape(name)
    ));
    text
}

/// Body of the processor baseline error.
pub fn format_cpu_baseline_error(feature: &str, name: &str) -> String {
    format!(
        "Your processor does not support the \"{}\" feature, which is required by {}. \
         This application will therefore not function correctly on your device and will \
         now terminate.",
        escape(feature),
        escape(name)
    )
}

/// The telemetry advisory for a request, with its consent question.
///
/// Both the description and the licensing URL are required.
pub fn telemetry_advisory(request: &AdvisoryRequest) -> Result<RichMessage> {
    let (Some(description), Some(eula_url)) = (&request.description, &request.eula_url) else {
        return Err(NannyError::usage(
            "a description (-d) requires the licensing terms URL (-l)",
        ));
    };

    let body = format_telemetry_warning(
        &request.name,
        request.alt_software.as_deref(),
        request.alt_package.as_deref(),
        description,
        eula_url,
        request.legal_doc_name.as_deref(),
    );
    Ok(RichMessage::question(ADVISORY_TITLE, body, escape(CONSENT_PROMPT)))
}

/// The acknowledgment-only message for a missing processor feature.
pub fn baseline_error(feature: &str, name: &str) -> RichMessage {
    RichMessage::acknowledgment(ADVISORY_TITLE, format_cpu_baseline_error(feature, name))
}
