//! Pattern compiler.
//!
//! Turns declared weight patterns into reusable [`Matcher`]s. Compilation is a
//! short, pure pipeline over the four normalized lines of a meter:
//!
//! ```text
//! declared line ── clean ──> "LGL.G"                       (clean.rs)
//!                              │
//!                              v
//!                    LineExpr::expand_wildcards            (line_expr.rs)
//!                      [L][G][L][LG][G]
//!                              │  lines 2 and 4 only
//!                              v
//!                    LineExpr::relax_final_syllable
//!                      [L][G][L][LG][LG]
//!                              │
//!                              v
//!                    concatenate + anchor -> Matcher       (matcher.rs)
//! ```
//!
//! ## Responsibilities by module
//!
//! - `clean.rs`: strips everything that is not a weight symbol.
//! - `line_expr.rs`: the per-position expression for one line, wildcard
//!   expansion and line-final relaxation.
//! - `matcher.rs`: joins line expressions into an anchored `Regex` and decides
//!   which lines take part for each meter family.
//!
//! ## Anchoring
//!
//! Full matchers are anchored at both ends: a scan matches only if it has
//! exactly the meter's syllable count. Partial matchers are anchored at the
//! start only, so a quotation of the first line (or first half) of a verse
//! matches regardless of what follows.

#[path = "compiler/clean.rs"]
mod clean;
#[path = "compiler/line_expr.rs"]
mod line_expr;
#[path = "compiler/matcher.rs"]
mod matcher;

pub use clean::clean;
pub use line_expr::LineExpr;
pub use matcher::{MatchMode, Matcher, compile_full, compile_partial};
