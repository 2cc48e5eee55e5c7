//! Line match expressions.
//!
//! A [`LineExpr`] is the compiled form of a single pāda: one [`WeightSet`] per
//! syllable position. It renders to a regex fragment where each position is a
//! single unit (`L`, `G` or `[LG]`), so a line of `n` syllables always matches
//! exactly `n` characters of a scan.

use crate::WeightSet;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct LineExpr {
    units: Vec<WeightSet>,
}

impl LineExpr {
    /// Build the expression for a cleaned line, turning each `.` into a
    /// two-way alternative. `L` and `G` stay literal.
    ///
    /// Characters that are not weight symbols are skipped, so passing an
    /// uncleaned line gives the same result as cleaning it first.
    pub fn expand_wildcards(cleaned: &str) -> Self {
        LineExpr { units: cleaned.chars().filter_map(WeightSet::from_symbol).collect() }
    }

    /// Free the line-final syllable so that it accepts either weight.
    ///
    /// A line that already ends in a two-way alternative is returned as is.
    /// An empty line has no final syllable and is also returned unchanged.
    pub fn relax_final_syllable(mut self) -> Self {
        if self.is_relaxed() {
            return self;
        }
        if let Some(last) = self.units.last_mut() {
            *last = WeightSet::ANY;
        }
        self
    }

    /// True when the last position already accepts either weight
    /// (vacuously true for an empty line).
    pub fn is_relaxed(&self) -> bool {
        self.units.last().is_none_or(|&u| u == WeightSet::ANY)
    }

    /// Number of syllable positions.
    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn units(&self) -> &[WeightSet] {
        &self.units
    }

    /// Append the regex fragment for this line to `out`.
    pub(crate) fn write_regex(&self, out: &mut String) {
        for unit in &self.units {
            out.push_str(unit.regex_fragment());
        }
    }
}

impl fmt::Display for LineExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for unit in &self.units {
            f.write_str(unit.regex_fragment())?;
        }
        Ok(())
    }
}
