//! Environment-derived settings.

use std::env::VarError;

/// X11 session indicator.
pub const ENV_DISPLAY: &str = "DISPLAY";

/// Wayland session indicator.
pub const ENV_WAYLAND_DISPLAY: &str = "WAYLAND_DISPLAY";

/// Color suppression (<https://no-color.org/>).
pub const ENV_NO_COLOR: &str = "NO_COLOR";

/// Override for the licensing document's display name.
pub const ENV_LEGAL_DOC_NAME: &str = "LEGAL_DOC_NAME";

/// Settings resolved from the environment.
///
/// # Example
///
/// ```
/// use nanny::config::Settings;
///
/// let settings = Settings::from_env_fn(|key| match key {
///     "DISPLAY" => Ok(":0".to_string()),
///     _ => Err(std::env::VarError::NotPresent),
/// });
/// assert!(settings.graphical_session);
/// assert!(settings.colorize);
/// assert_eq!(settings.legal_doc_name, None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// A graphical session indicator is present.
    pub graphical_session: bool,
    /// Terminal output may use ANSI styling and hyperlink escapes.
    pub colorize: bool,
    /// Display name of the licensing document, when overridden.
    pub legal_doc_name: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            graphical_session: false,
            colorize: true,
            legal_doc_name: None,
        }
    }
}

impl Settings {
    /// Resolve settings from the real process environment.
    pub fn from_env() -> Self {
        Self::from_env_fn(|key: &str| std::env::var(key))
    }

    /// Resolve settings with a custom env var lookup function.
    ///
    /// Presence is what matters for the indicators: a variable set to an
    /// empty string (or to non-UTF-8 bytes) still counts as set.
    pub fn from_env_fn<F>(env_fn: F) -> Self
    where
        F: Fn(&str) -> Result<String, VarError>,
    {
        let present = |key: &str| !matches!(env_fn(key), Err(VarError::NotPresent));

        let legal_doc_name = env_fn(ENV_LEGAL_DOC_NAME)
            .ok()
            .filter(|name| !name.is_empty());

        let settings = Self {
            graphical_session: present(ENV_DISPLAY) || present(ENV_WAYLAND_DISPLAY),
            colorize: !present(ENV_NO_COLOR),
            legal_doc_name,
        };
        tracing::debug!(?settings, "resolved settings");
        settings
    }
}
