//! Meter descriptors.
//!
//! A [`Meter`] is a named metrical form normalized to four pādas. The family
//! ([`MeterKind`]) decides how the declared line patterns expand:
//!
//! ```text
//! Samavrtta       [a]           -> a a a a
//! Ardhasamavrtta  [a, b]        -> a b a b
//! Vishamavrtta    [a, b, c, d]  -> a b c d
//! Jati            [a] + counts  -> a a a a
//! ```
//!
//! Matchers are compiled on first use and kept for the descriptor's lifetime.
//! Each slot is written once; concurrent first callers all observe the same
//! compiled instance.

use crate::compiler::{self, Matcher, clean};
use crate::MeterError;
use once_cell::sync::OnceCell;
use std::fmt;

/// Structural family of a meter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MeterKind {
    /// All four pādas share one pattern.
    Samavrtta,
    /// Odd and even pādas alternate between two patterns.
    Ardhasamavrtta,
    /// Four independent pādas.
    Vishamavrtta,
    /// Moraic meter. `counts` are the per-pāda mātrā groupings, kept verbatim.
    Jati { counts: Vec<u32> },
}

impl MeterKind {
    /// Number of line patterns a declaration of this family must provide.
    pub fn declared_lines(&self) -> usize {
        match self {
            MeterKind::Samavrtta | MeterKind::Jati { .. } => 1,
            MeterKind::Ardhasamavrtta => 2,
            MeterKind::Vishamavrtta => 4,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MeterKind::Samavrtta => "Samavrtta",
            MeterKind::Ardhasamavrtta => "Ardhasamavrtta",
            MeterKind::Vishamavrtta => "Vishamavrtta",
            MeterKind::Jati { .. } => "Jati",
        }
    }
}

/// A named meter with its four cleaned pāda patterns.
#[derive(Clone)]
pub struct Meter {
    name: String,
    kind: MeterKind,
    lines: [String; 4],
    num_syllables: usize,
    full: OnceCell<Matcher>,
    partial: OnceCell<Matcher>,
}

impl Meter {
    /// Build a meter from a family tag and its declared line patterns.
    ///
    /// Fails if `pattern` does not hold exactly [`MeterKind::declared_lines`]
    /// entries. Non-weight characters in the patterns are discarded.
    pub fn new<S: AsRef<str>>(name: impl Into<String>, kind: MeterKind, pattern: &[S]) -> Result<Self, MeterError> {
        let name = name.into();
        let expected = kind.declared_lines();
        if pattern.len() != expected {
            return Err(MeterError::LineCount { name, kind, expected, found: pattern.len() });
        }

        // 1, 2 and 4 all divide 4: cycling gives aaaa, abab or abcd.
        let declared: Vec<String> = pattern.iter().map(|p| clean(p.as_ref())).collect();
        let lines = std::array::from_fn(|i| declared[i % expected].clone());

        Ok(Self::from_lines(name, kind, lines))
    }

    pub fn samavrtta(name: impl Into<String>, line: &str) -> Self {
        let line = clean(line);
        Self::from_lines(name.into(), MeterKind::Samavrtta, [line.clone(), line.clone(), line.clone(), line])
    }

    /// `odd` is used for pādas 1 and 3, `even` for pādas 2 and 4.
    pub fn ardhasamavrtta(name: impl Into<String>, odd: &str, even: &str) -> Self {
        let (odd, even) = (clean(odd), clean(even));
        Self::from_lines(name.into(), MeterKind::Ardhasamavrtta, [odd.clone(), even.clone(), odd, even])
    }

    pub fn vishamavrtta(name: impl Into<String>, lines: [&str; 4]) -> Self {
        Self::from_lines(name.into(), MeterKind::Vishamavrtta, lines.map(clean))
    }

    pub fn jati(name: impl Into<String>, line: &str, counts: Vec<u32>) -> Self {
        let line = clean(line);
        Self::from_lines(name.into(), MeterKind::Jati { counts }, [line.clone(), line.clone(), line.clone(), line])
    }

    fn from_lines(name: String, kind: MeterKind, lines: [String; 4]) -> Self {
        let num_syllables = lines.iter().map(String::len).sum();
        Meter { name, kind, lines, num_syllables, full: OnceCell::new(), partial: OnceCell::new() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &MeterKind {
        &self.kind
    }

    /// The four normalized, cleaned pāda patterns.
    pub fn lines(&self) -> &[String; 4] {
        &self.lines
    }

    /// Total syllables across all four pādas.
    pub fn num_syllables(&self) -> usize {
        self.num_syllables
    }

    /// Mātrā counts for a jāti; `None` for syllabic meters.
    pub fn counts(&self) -> Option<&[u32]> {
        match &self.kind {
            MeterKind::Jati { counts } => Some(counts),
            _ => None,
        }
    }

    /// Exact matcher for the whole verse, compiled on first call.
    pub fn full_matcher(&self) -> Result<&Matcher, MeterError> {
        self.full.get_or_try_init(|| {
            let matcher = compiler::compile_full(&self.lines)?;
            log::debug!("{self}: compiled full matcher {}", matcher.as_str());
            Ok(matcher)
        })
    }

    /// Matcher for the opening of a verse, compiled on first call.
    ///
    /// For a viṣamavṛtta this is the full matcher.
    pub fn partial_matcher(&self) -> Result<&Matcher, MeterError> {
        if self.kind == MeterKind::Vishamavrtta {
            return self.full_matcher();
        }

        self.partial.get_or_try_init(|| {
            let matcher = compiler::compile_partial(&self.lines, &self.kind)?;
            log::debug!("{self}: compiled partial matcher {}", matcher.as_str());
            Ok(matcher)
        })
    }

    /// Whether `weights` scans as a complete verse of this meter.
    pub fn matches(&self, weights: &str) -> bool {
        match self.full_matcher() {
            Ok(m) => m.is_match(weights),
            Err(err) => {
                log::warn!("{self}: {err}");
                false
            }
        }
    }

    /// Whether `weights` opens like this meter (first pāda, or first half for
    /// an ardhasamavṛtta). Trailing syllables are ignored except for a
    /// viṣamavṛtta, which has to match in full.
    pub fn matches_partially(&self, weights: &str) -> bool {
        match self.partial_matcher() {
            Ok(m) => m.is_match(weights),
            Err(err) => {
                log::warn!("{self}: {err}");
                false
            }
        }
    }
}

impl fmt::Display for Meter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}('{}')>", self.kind.label(), self.name)
    }
}

impl fmt::Debug for Meter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Meter")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("lines", &self.lines)
            .field("num_syllables", &self.num_syllables)
            .finish()
    }
}
