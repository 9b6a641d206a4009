//! File-backed consent ledger.
//!
//! The ledger is plain UTF-8 text, one package name per line. It is only
//! ever appended to; nothing here rewrites, deduplicates or deletes it.
//!
//! Consent lookup is a raw substring search for `"<name>\n"` over the whole
//! file, not a per-line comparison. Names are validated upstream to contain
//! no line terminators. A name that is a suffix of another recorded name
//! (`bar` vs. `foobar`) therefore matches; see the
//! `suffix_of_recorded_name_matches` test.
//!
//! No locking is done. Concurrent invocations may both append the same
//! name, which only produces a harmless duplicate line.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// File name of the ledger inside the user configuration directory.
pub const LEDGER_FILE_NAME: &str = "nanny.db";

/// Default ledger location: `<user config dir>/nanny.db`.
///
/// Returns `None` when the platform has no notion of a config directory.
pub fn default_ledger_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(LEDGER_FILE_NAME))
}

/// Append-only record of accepted advisories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsentLedger {
    path: Option<PathBuf>,
}

impl ConsentLedger {
    /// Open a ledger at an explicit path. Nothing is touched on disk.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// Open the ledger at [`default_ledger_path`].
    ///
    /// Without a config directory the ledger is detached: nothing is ever
    /// consented and nothing can be recorded.
    pub fn open_default() -> Self {
        match default_ledger_path() {
            Some(path) => Self::new(path),
            None => {
                tracing::warn!("no user config directory; consent will not be remembered");
                Self::detached()
            }
        }
    }

    /// A ledger with no backing file.
    pub fn detached() -> Self {
        Self { path: None }
    }

    /// Path of the ledger file, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Whether consent for `name` was previously recorded.
    ///
    /// An absent or unreadable ledger counts as "not consented" so the
    /// advisory is shown rather than skipped.
    pub fn already_consented(&self, name: &str) -> bool {
        let Some(path) = &self.path else {
            return false;
        };
        let contents = match fs::read(path) {
            Ok(contents) => contents,
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "ledger not readable");
                return false;
            }
        };

        let needle = format!("{}\n", name);
        let found = contains_bytes(&contents, needle.as_bytes());
        tracing::debug!(name, found, "ledger lookup");
        found
    }

    /// Append `name` to the ledger, creating the file and its directory.
    ///
    /// Returns whether the write succeeded. Failures are logged and
    /// otherwise ignored.
    pub fn record_consent(&self, name: &str) -> bool {
        let Some(path) = &self.path else {
            tracing::warn!(name, "ledger is detached; consent not recorded");
            return false;
        };
        match append_line(path, name) {
            Ok(()) => {
                tracing::debug!(name, path = %path.display(), "consent recorded");
                true
            }
            Err(e) => {
                tracing::warn!(
                    name,
                    path = %path.display(),
                    error = %e,
                    "failed to record consent"
                );
                false
            }
        }
    }
}

fn append_line(path: &Path, name: &str) -> std::io::Result<()> {
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir)?;
        }
    }

    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(format!("{}\n", name).as_bytes())?;
    file.flush()
}

fn contains_bytes(haystack: &[u8], needle: &[u8]) -> bool {
    needle.is_empty() || haystack.windows(needle.len()).any(|window| window == needle)
}
