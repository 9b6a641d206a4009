//! Processor capability probing.
//!
//! Kernels report processor features in two incompatible shapes: structured
//! hardware-capability bitmasks in the auxiliary vector, or free text in
//! `/proc/cpuinfo`. Each target uses exactly one of them, so the strategy is
//! picked at compile time by [`native_probe`] rather than branched at runtime.
//!
//! Both strategies answer "not supported" for anything they cannot confirm:
//! unknown feature names, unreadable sources and missing labels are never
//! errors.
//!
//! # Example
//!
//! ```
//! use nanny::probe::{CapabilityProbe, HwcapProbe};
//!
//! // Pretend the kernel reported only the RISC-V vector extension.
//! let probe = HwcapProbe::from_words(1 << 21, 0);
//! assert!(probe.supports("V"));
//! assert!(!probe.supports("zfh"));
//! assert!(!probe.supports("no-such-feature"));
//! ```

pub mod cpuinfo;
pub mod hwcap;

pub use cpuinfo::CpuinfoProbe;
pub use hwcap::HwcapProbe;

/// A source of truth for "does this processor implement `feature`?".
pub trait CapabilityProbe {
    /// Returns whether the running processor exposes the named feature.
    fn supports(&self, feature: &str) -> bool;
}

/// The probe strategy compiled in for this target.
#[cfg(all(
    target_os = "linux",
    any(
        target_arch = "riscv64",
        target_arch = "riscv32",
        target_arch = "powerpc64"
    )
))]
pub type NativeProbe = HwcapProbe;

/// The probe strategy compiled in for this target.
#[cfg(not(all(
    target_os = "linux",
    any(
        target_arch = "riscv64",
        target_arch = "riscv32",
        target_arch = "powerpc64"
    )
)))]
pub type NativeProbe = CpuinfoProbe;

/// Build the probe for the running machine.
pub fn native_probe() -> NativeProbe {
    NativeProbe::native()
}
