//! `/proc/cpuinfo` text-scan strategy.
//!
//! Every architecture without auxiliary-vector masks falls back to scanning
//! the textual processor description for its feature line. The key of that
//! line differs per instruction-set family (see [`native_label`]).

use std::fs;
use std::path::{Path, PathBuf};

use super::CapabilityProbe;

/// Location of the kernel's processor description.
pub const CPUINFO_PATH: &str = "/proc/cpuinfo";

/// The feature-line key used by this target's `/proc/cpuinfo`.
pub const fn native_label() -> &'static str {
    if cfg!(any(
        target_arch = "aarch64",
        target_arch = "arm",
        target_arch = "loongarch64"
    )) {
        "Features"
    } else if cfg!(any(target_arch = "mips", target_arch = "mips64")) {
        "ASEs implemented"
    } else {
        "flags"
    }
}

/// Probe that scans a cpuinfo-style text file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CpuinfoProbe {
    path: PathBuf,
    label: String,
}

impl CpuinfoProbe {
    /// Create a probe reading `path` and looking for the `label` line.
    pub fn new(path: impl Into<PathBuf>, label: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            label: label.into(),
        }
    }

    /// Probe `/proc/cpuinfo` with this target's label.
    pub fn native() -> Self {
        Self::new(CPUINFO_PATH, native_label())
    }

    /// Path being scanned.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Feature-line key being searched for.
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl CapabilityProbe for CpuinfoProbe {
    fn supports(&self, feature: &str) -> bool {
        let text = match fs::read(&self.path) {
            Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
            Err(e) => {
                tracing::debug!(path = %self.path.display(), error = %e, "cannot read cpuinfo");
                return false;
            }
        };

        let Some(features) = feature_list(&text, &self.label) else {
            tracing::debug!(label = %self.label, "no feature line in cpuinfo");
            return false;
        };

        let supported = list_contains(features, feature);
        tracing::debug!(feature, supported, "cpuinfo probe");
        supported
    }
}

/// Extract the value of the first line whose key equals `label`.
///
/// Keys are compared after trimming, so `flags\t\t: fpu vme` matches
/// `flags` while `vmx flags : ept` does not.
pub fn feature_list<'a>(text: &'a str, label: &str) -> Option<&'a str> {
    text.lines().find_map(|line| {
        let (key, value) = line.split_once(':')?;
        (key.trim() == label).then(|| value.trim())
    })
}

/// Whether `feature` is one of the whitespace-separated entries of `list`.
///
/// Comparison is case-sensitive, as the kernel prints it.
pub fn list_contains(list: &str, feature: &str) -> bool {
    !feature.is_empty() && list.split_whitespace().any(|entry| entry == feature)
}
