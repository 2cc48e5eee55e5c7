//! Error types for meter construction and matcher compilation.

use crate::MeterKind;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum MeterError {
    /// The declared pattern has the wrong number of lines for its family.
    #[error("{label} '{name}' declares {found} line pattern(s), expected {expected}", label = .kind.label())]
    LineCount { name: String, kind: MeterKind, expected: usize, found: usize },

    /// The compiled pattern was rejected by the regex engine.
    #[error("failed to compile weight pattern: {0}")]
    Regex(#[from] regex::Error),
}
