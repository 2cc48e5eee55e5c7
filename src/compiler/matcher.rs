//! Anchored matchers over whole verses and verse openings.
//!
//! Only the ends of the second and fourth pādas are treated as free in a full
//! matcher; the ends of the first and third are matched as declared. Partial
//! matchers relax the last line they include, since a quotation usually stops
//! at a line end.

use super::line_expr::LineExpr;
use crate::{MeterError, MeterKind};
use regex::Regex;

/// How a matcher's pattern is anchored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchMode {
    /// The whole scan must match (`^…$`).
    Exact,
    /// The scan must start with the pattern (`^…`); trailing syllables are ignored.
    Prefix,
}

/// A compiled weight-pattern matcher.
///
/// Cheap to clone: the underlying `Regex` shares its program.
#[derive(Debug, Clone)]
pub struct Matcher {
    regex: Regex,
    mode: MatchMode,
    syllables: usize,
}

impl Matcher {
    /// Join `lines` in order and anchor the result according to `mode`.
    pub fn from_lines(lines: &[LineExpr], mode: MatchMode) -> Result<Self, MeterError> {
        let syllables = lines.iter().map(LineExpr::len).sum();
        let mut pattern = String::with_capacity(syllables * 4 + 2);

        pattern.push('^');
        for line in lines {
            log::trace!("line expr: {line}");
            line.write_regex(&mut pattern);
        }
        if mode == MatchMode::Exact {
            pattern.push('$');
        }

        let regex = Regex::new(&pattern)?;
        Ok(Matcher { regex, mode, syllables })
    }

    /// Test a scan made of `L`/`G` weights. Any other character never matches.
    pub fn is_match(&self, weights: &str) -> bool {
        self.regex.is_match(weights)
    }

    /// The regex source, including anchors.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// Number of syllable positions the pattern consumes.
    pub fn syllables(&self) -> usize {
        self.syllables
    }
}

/// Compile the exact matcher for a full four-line verse.
pub fn compile_full(lines: &[String; 4]) -> Result<Matcher, MeterError> {
    let exprs: Vec<LineExpr> = lines
        .iter()
        .enumerate()
        .map(|(idx, line)| {
            let expr = LineExpr::expand_wildcards(line);
            if idx % 2 == 1 { expr.relax_final_syllable() } else { expr }
        })
        .collect();

    Matcher::from_lines(&exprs, MatchMode::Exact)
}

/// Compile the matcher for the opening of a verse.
///
/// - Samavṛtta and jāti: the first line alone, its end relaxed.
/// - Ardhasamavṛtta: the first two lines, the second one's end relaxed.
/// - Viṣamavṛtta: every line differs, so this is the full matcher.
pub fn compile_partial(lines: &[String; 4], kind: &MeterKind) -> Result<Matcher, MeterError> {
    match kind {
        MeterKind::Samavrtta | MeterKind::Jati { .. } => {
            let first = LineExpr::expand_wildcards(&lines[0]).relax_final_syllable();
            Matcher::from_lines(&[first], MatchMode::Prefix)
        }
        MeterKind::Ardhasamavrtta => {
            let odd = LineExpr::expand_wildcards(&lines[0]);
            let even = LineExpr::expand_wildcards(&lines[1]).relax_final_syllable();
            Matcher::from_lines(&[odd, even], MatchMode::Prefix)
        }
        MeterKind::Vishamavrtta => compile_full(lines),
    }
}
