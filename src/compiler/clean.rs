//! Declaration cleaning.
//!
//! Catalogs are free to decorate a weight pattern with spacing, gaṇa
//! separators or other annotation (`"GGL GGL LGL GG"`, `"LGL|GG"`). Anything
//! that is not `L`, `G` or `.` is dropped without complaint.

use crate::WeightSet;

/// Remove every character that is not a weight symbol, keeping order.
///
/// Never fails: an input with no weight symbols yields an empty line.
pub fn clean(raw: &str) -> String {
    raw.chars().filter(|&c| WeightSet::is_symbol(c)).collect()
}
