//! Named presets for iterated finalization

/// Total digest applications requested from `finalize_passes`.
///
/// Iterated hashing is a stretching technique only; it is no substitute for a
/// dedicated password hash.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HashPasses {
    /// Plain digest, no rehashing
    #[default]
    Single,

    /// 100 applications
    Fast,

    /// 1,000 applications
    Moderate,

    /// 10,000 applications
    Standard,

    /// 100,000 applications
    Strong,

    /// 1,000,000 applications
    Maximum,
}

impl HashPasses {
    /// Number of digest applications, as passed to `finalize_times`
    #[must_use]
    pub const fn times(self) -> i32 {
        match self {
            Self::Single => 1,
            Self::Fast => 100,
            Self::Moderate => 1_000,
            Self::Standard => 10_000,
            Self::Strong => 100_000,
            Self::Maximum => 1_000_000,
        }
    }

    /// Whether the preset stretches at all
    #[must_use]
    pub const fn is_iterated(self) -> bool {
        self.times() > 1
    }
}

impl From<HashPasses> for i32 {
    fn from(passes: HashPasses) -> Self {
        passes.times()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_are_increasing() {
        let presets = [
            HashPasses::Single,
            HashPasses::Fast,
            HashPasses::Moderate,
            HashPasses::Standard,
            HashPasses::Strong,
            HashPasses::Maximum,
        ];
        assert!(presets.windows(2).all(|w| w[0].times() < w[1].times()));
        assert!(!HashPasses::default().is_iterated());
        assert_eq!(i32::from(HashPasses::Standard), 10_000);
    }
}
