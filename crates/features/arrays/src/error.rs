use crate::op::Operation;
use kata_domain::error::ErrorKind;
use std::borrow::Cow;

/// Error types specific to the pairwise array operations.
#[kata_derive::kata_error]
pub enum ArrayError {
    #[error("Both arrays must have the same length{}: {left} != {right}", format_context(.context))]
    LengthMismatch { left: usize, right: usize, context: Option<Cow<'static, str>> },

    #[error("Division by zero at index {index}{}", format_context(.context))]
    DivideByZero { index: usize, context: Option<Cow<'static, str>> },

    /// The exact result does not fit the element type.
    #[error("Arithmetic overflow in {operation} at index {index}{}", format_context(.context))]
    Overflow { operation: Operation, index: usize, context: Option<Cow<'static, str>> },
}

impl ArrayError {
    /// Coarse classification of the error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::LengthMismatch { .. } => ErrorKind::LengthMismatch,
            Self::DivideByZero { .. } => ErrorKind::DivideByZero,
            Self::Overflow { .. } => ErrorKind::Value,
        }
    }
}
