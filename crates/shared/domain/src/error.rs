use serde::Serialize;
use strum_macros::{AsRefStr, Display};

/// Classification shared by every slice error.
///
/// Slices keep their own error enums with precise variants; `ErrorKind` is the
/// coarse bucket a caller matches on when it only cares about the category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, AsRefStr)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ErrorKind {
    /// An argument had the wrong type (e.g. a textual side count).
    Type,
    /// An argument was outside its valid domain (e.g. a negative side count).
    Value,
    /// Two sequences that must be paired have different lengths.
    LengthMismatch,
    /// A division had a zero divisor.
    DivideByZero,
}
