//! Pattern matching for Sanskrit metrical forms.
//!
//! Meters are declared one pāda (line) at a time in weight notation: `L` for a
//! light syllable, `G` for a heavy one and `.` where either is allowed. A
//! [`Meter`] normalizes its declaration to four lines and compiles it into a
//! [`Matcher`] on demand.
//!
//! ```
//! use chandas::Meter;
//!
//! let indravajra = Meter::samavrtta("Indravajra", "GGLGGLLGLGG");
//! assert!(indravajra.matches("GGLGGLLGLGGGGLGGLLGLGLGGLGGLLGLGGGGLGGLLGLGL"));
//! assert!(indravajra.matches_partially("GGLGGLLGLGL"));
//! ```
//!
//! Scanning raw verse text into `L`/`G` sequences is left to the caller.

#[macro_use]
mod macros;
mod compiler;
mod error;
mod meter;
mod weight;

pub use compiler::{LineExpr, MatchMode, Matcher, clean, compile_full, compile_partial};
pub use error::MeterError;
pub use meter::{Meter, MeterKind};
pub use weight::WeightSet;
