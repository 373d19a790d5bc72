use kata_domain::error::ErrorKind;
use std::borrow::Cow;

/// Error types specific to the dice feature.
#[kata_derive::kata_error]
pub enum DieError {
    /// The side count was not an integer (text, float, boolean, ...).
    #[error("The number of sides must be an integer{}: got {found}", format_context(.context))]
    InvalidType { found: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("The number of sides cannot be negative{}: {sides}", format_context(.context))]
    NegativeSides { sides: i64, context: Option<Cow<'static, str>> },

    /// An integer side count that does not fit the supported range.
    #[error("The number of sides is out of range{}: {found}", format_context(.context))]
    OutOfRange { found: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Rolled a die constructed with zero sides; `[1, 0]` has no outcome.
    #[error("A die with no sides cannot be rolled{}", format_context(.context))]
    NoSides { context: Option<Cow<'static, str>> },
}

impl DieError {
    /// Coarse classification of the error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidType { .. } => ErrorKind::Type,
            Self::NegativeSides { .. } | Self::OutOfRange { .. } | Self::NoSides { .. } => {
                ErrorKind::Value
            },
        }
    }
}
