//! Syllable weights.
//!
//! A declared pattern uses three symbols per syllable:
//!
//! - `L` — *laghu*, a light syllable
//! - `G` — *guru*, a heavy syllable
//! - `.` — unknown, either weight is accepted
//!
//! Inside the compiler each position is a [`WeightSet`]: the set of weights
//! a syllable at that position may have. Wildcards and relaxed line-final
//! positions are both [`WeightSet::ANY`].

bitflags::bitflags! {
    /// The weights allowed at a single syllable position.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct WeightSet: u8 {
        const LAGHU = 1 << 0;
        const GURU  = 1 << 1;
        const ANY   = Self::LAGHU.bits() | Self::GURU.bits();
    }
}

impl WeightSet {
    /// Map a declaration symbol to its weight set.
    ///
    /// Returns `None` for anything outside `L`, `G` and `.`.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'L' => Some(WeightSet::LAGHU),
            'G' => Some(WeightSet::GURU),
            '.' => Some(WeightSet::ANY),
            _ => None,
        }
    }

    /// True when `symbol` is one of the three declaration symbols.
    pub fn is_symbol(symbol: char) -> bool {
        Self::from_symbol(symbol).is_some()
    }

    /// Whether a scanned weight (`L` or `G`) is allowed at this position.
    pub fn accepts(self, weight: char) -> bool {
        match weight {
            'L' => self.contains(WeightSet::LAGHU),
            'G' => self.contains(WeightSet::GURU),
            _ => false,
        }
    }

    /// Regex fragment matching exactly one syllable of this set.
    pub fn regex_fragment(self) -> &'static str {
        match (self.contains(WeightSet::LAGHU), self.contains(WeightSet::GURU)) {
            (true, true) => "[LG]",
            (true, false) => "L",
            (false, true) => "G",
            // An empty set matches nothing.
            (false, false) => r"[^\s\S]",
        }
    }
}
