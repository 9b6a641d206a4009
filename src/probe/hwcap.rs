//! Auxiliary-vector bitmask strategy.
//!
//! Used on RISC-V and POWER, where the kernel publishes features as bits in
//! the `AT_HWCAP` and `AT_HWCAP2` words. Bit positions come from the kernel
//! uapi headers (`arch/powerpc/include/uapi/asm/cputable.h` and
//! `arch/riscv/include/asm/hwcap.h`).

use super::CapabilityProbe;

/// Masks tested against `AT_HWCAP`.
const PRIMARY_MASKS: &[(&str, u64)] = &[
    // powerpc64
    ("altivec", 0x1000_0000),
    ("vsx", 0x0000_0080),
    ("spe", 0x0080_0000),
    // riscv: single-letter extensions sit at `letter - 'a'`
    ("v", 1 << 21),
    ("h", 1 << 7),
    ("zicsr", 1 << 40),
    ("zifencei", 1 << 41),
];

/// Masks tested against `AT_HWCAP2`.
const SECONDARY_MASKS: &[(&str, u64)] = &[
    // powerpc64
    ("mma", 0x0002_0000),
    ("vec_crypto", 0x0200_0000),
    // riscv: bit numbers continue from 64 in the second word
    ("zfh", 1 << (66 - 64)),
    ("zvfh", 1 << (69 - 64)),
];

/// Which auxiliary-vector word a feature lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HwcapWord {
    Primary,
    Secondary,
}

/// Probe backed by a snapshot of the two hardware-capability words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HwcapProbe {
    primary: u64,
    secondary: u64,
}

impl HwcapProbe {
    /// Create a probe from explicit capability words.
    pub fn from_words(primary: u64, secondary: u64) -> Self {
        Self { primary, secondary }
    }

    /// Read the capability words of the running process.
    #[cfg(all(
        target_os = "linux",
        any(
            target_arch = "riscv64",
            target_arch = "riscv32",
            target_arch = "powerpc64"
        )
    ))]
    pub fn native() -> Self {
        // SAFETY: getauxval only reads the process auxiliary vector and
        // returns 0 for absent entries.
        let (primary, secondary) =
            unsafe { (libc::getauxval(libc::AT_HWCAP), libc::getauxval(libc::AT_HWCAP2)) };
        tracing::debug!(primary, secondary, "read hardware capability words");
        Self::from_words(primary as u64, secondary as u64)
    }

    /// Look up the word and mask for a feature name (case-insensitive).
    ///
    /// The primary table wins when a name appears in both.
    pub fn mask_for(feature: &str) -> Option<(HwcapWord, u64)> {
        let feature = feature.to_lowercase();
        let find = |table: &[(&str, u64)]| {
            table
                .iter()
                .find(|(name, _)| *name == feature)
                .map(|(_, mask)| *mask)
        };

        find(PRIMARY_MASKS)
            .map(|mask| (HwcapWord::Primary, mask))
            .or_else(|| find(SECONDARY_MASKS).map(|mask| (HwcapWord::Secondary, mask)))
    }
}

impl CapabilityProbe for HwcapProbe {
    fn supports(&self, feature: &str) -> bool {
        let supported = match Self::mask_for(feature) {
            Some((HwcapWord::Primary, mask)) => self.primary & mask != 0,
            Some((HwcapWord::Secondary, mask)) => self.secondary & mask != 0,
            None => {
                tracing::debug!(feature, "feature has no known capability bit");
                false
            }
        };
        tracing::debug!(feature, supported, "hwcap probe");
        supported
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: u64 = u64::MAX;

    #[test]
    fn unknown_feature_is_unsupported() {
        let probe = HwcapProbe::from_words(ALL, ALL);
        assert!(!probe.supports("avx512"));
        assert!(!probe.supports(""));
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let probe = HwcapProbe::from_words(1 << 21, 0);
        assert_eq!(probe.supports("V"), probe.supports("v"));
        assert!(probe.supports("V"));

        let probe = HwcapProbe::from_words(0, 0);
        assert_eq!(probe.supports("V"), probe.supports("v"));
        assert!(!probe.supports("V"));
    }

    #[test]
    fn primary_features_test_first_word_only() {
        let probe = HwcapProbe::from_words(0, ALL);
        assert!(!probe.supports("altivec"));
        assert!(!probe.supports("zicsr"));

        let probe = HwcapProbe::from_words(0x1000_0080, 0);
        assert!(probe.supports("altivec"));
        assert!(probe.supports("vsx"));
        assert!(!probe.supports("spe"));
    }

    #[test]
    fn secondary_features_test_second_word_only() {
        let probe = HwcapProbe::from_words(ALL, 0);
        assert!(!probe.supports("mma"));
        assert!(!probe.supports("zfh"));

        let probe = HwcapProbe::from_words(0, 1 << 2);
        assert!(probe.supports("zfh"));
        assert!(!probe.supports("zvfh"));
    }

    #[test]
    fn high_riscv_bits_are_in_upper_half_of_primary() {
        let probe = HwcapProbe::from_words(1 << 40, 0);
        assert!(probe.supports("Zicsr"));
        assert!(!probe.supports("zifencei"));
    }

    #[test]
    fn mask_for_reports_word() {
        assert_eq!(
            HwcapProbe::mask_for("VSX"),
            Some((HwcapWord::Primary, 0x80))
        );
        assert_eq!(
            HwcapProbe::mask_for("vec_crypto"),
            Some((HwcapWord::Secondary, 0x0200_0000))
        );
        assert_eq!(HwcapProbe::mask_for("sse2"), None);
    }

    #[test]
    fn tables_have_no_zero_masks() {
        for (name, mask) in PRIMARY_MASKS.iter().chain(SECONDARY_MASKS) {
            assert_ne!(*mask, 0, "{} has an empty mask", name);
            assert_eq!(name.to_lowercase(), *name);
        }
    }
}
