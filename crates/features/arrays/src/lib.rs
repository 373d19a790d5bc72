//! # Arrays
//!
//! Pairwise arithmetic over two equal-length slices: element `i` of the result is
//! `x[i] op y[i]`.
//!
//! All inputs are validated before anything is computed, so a call either returns the
//! full result or an [`ArrayError`]:
//!
//! 1. the slices must have the same length ([`ArrayError::LengthMismatch`]);
//! 2. a division needs every divisor to be non-zero ([`ArrayError::DivideByZero`]);
//! 3. an integer result must fit the element type ([`ArrayError::Overflow`]).
//!
//! Division is floor division, matching the mathematical `⌊x / y⌋`:
//!
//! ```rust
//! use kata_arrays::{add_arrays, divide_arrays, subtract_arrays};
//!
//! assert_eq!(add_arrays(&[1, 4, 5], &[4, 3, 5]).unwrap(), vec![5, 7, 10]);
//! assert_eq!(subtract_arrays(&[1, 4, 5], &[4, 3, 5]).unwrap(), vec![-3, 1, 0]);
//! assert_eq!(divide_arrays(&[3, 12, -25], &[3, -4, 5]).unwrap(), vec![1, -3, -5]);
//! assert_eq!(divide_arrays(&[-7], &[2]).unwrap(), vec![-4]);
//! ```

mod element;
mod error;
mod op;

pub use crate::element::Element;
pub use crate::error::{ArrayError, ArrayErrorExt};
pub use crate::op::Operation;
use tracing::debug;

/// Applies `operation` to each pair of corresponding elements.
///
/// # Errors
/// * [`ArrayError::LengthMismatch`] if `x` and `y` differ in length.
/// * [`ArrayError::DivideByZero`] for [`Operation::Divide`] with a zero in `y`
///   (the first offending index is reported).
/// * [`ArrayError::Overflow`] if an integer result does not fit `T`.
pub fn pairwise<T: Element>(operation: Operation, x: &[T], y: &[T]) -> Result<Vec<T>, ArrayError> {
    if x.len() != y.len() {
        debug!(%operation, left = x.len(), right = y.len(), "Array length mismatch");
        return Err(ArrayError::LengthMismatch { left: x.len(), right: y.len(), context: None });
    }

    if operation == Operation::Divide {
        if let Some(index) = y.iter().position(|divisor| divisor.is_zero()) {
            debug!(index, "Division by zero");
            return Err(ArrayError::DivideByZero { index, context: None });
        }
    }

    x.iter()
        .zip(y)
        .enumerate()
        .map(|(index, (&a, &b))| {
            operation.apply(a, b).ok_or_else(|| {
                debug!(%operation, index, "Arithmetic overflow");
                ArrayError::Overflow { operation, index, context: None }
            })
        })
        .collect()
}

/// Pairwise sum of `x` and `y`.
///
/// # Errors
/// See [`pairwise`].
pub fn add_arrays<T: Element>(x: &[T], y: &[T]) -> Result<Vec<T>, ArrayError> {
    pairwise(Operation::Add, x, y)
}

/// Pairwise difference `x[i] - y[i]`.
///
/// # Errors
/// See [`pairwise`].
pub fn subtract_arrays<T: Element>(x: &[T], y: &[T]) -> Result<Vec<T>, ArrayError> {
    pairwise(Operation::Subtract, x, y)
}

/// Pairwise product of `x` and `y`.
///
/// # Errors
/// See [`pairwise`].
pub fn multiply_arrays<T: Element>(x: &[T], y: &[T]) -> Result<Vec<T>, ArrayError> {
    pairwise(Operation::Multiply, x, y)
}

/// Pairwise floor quotient `⌊x[i] / y[i]⌋`.
///
/// # Errors
/// See [`pairwise`].
pub fn divide_arrays<T: Element>(x: &[T], y: &[T]) -> Result<Vec<T>, ArrayError> {
    pairwise(Operation::Divide, x, y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kata_domain::error::ErrorKind;
    use strum::IntoEnumIterator;

    #[test]
    fn empty_inputs_give_empty_output() {
        for operation in Operation::iter() {
            assert_eq!(pairwise::<i32>(operation, &[], &[]).unwrap(), Vec::<i32>::new());
        }
    }

    #[test]
    fn every_operation_checks_length() {
        for operation in Operation::iter() {
            let err = pairwise(operation, &[1, 2, 3], &[1, 2]).unwrap_err();
            assert!(matches!(err, ArrayError::LengthMismatch { left: 3, right: 2, .. }));
            assert_eq!(err.kind(), ErrorKind::LengthMismatch);
        }
    }

    #[test]
    fn length_is_checked_before_zero_divisors() {
        let err = divide_arrays(&[1, 2], &[0]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::LengthMismatch);
    }

    #[test]
    fn first_zero_divisor_is_reported() {
        let err = divide_arrays(&[1, 2, 3, 4], &[1, 0, 5, 0]).unwrap_err();
        assert!(matches!(err, ArrayError::DivideByZero { index: 1, .. }));
        assert_eq!(err.kind(), ErrorKind::DivideByZero);
        assert_eq!(err.to_string(), "Division by zero at index 1");
    }

    #[test]
    fn overflow_names_operation_and_index() {
        let err = add_arrays(&[1_i8, i8::MAX], &[1, 1]).unwrap_err();
        assert!(matches!(err, ArrayError::Overflow { operation: Operation::Add, index: 1, .. }));
        assert_eq!(err.kind(), ErrorKind::Value);
        assert_eq!(err.to_string(), "Arithmetic overflow in add at index 1");
    }

    #[test]
    fn context_can_be_attached() {
        let err = multiply_arrays(&[1], &[1, 2]).context("scaling weights").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Both arrays must have the same length (scaling weights): 1 != 2"
        );
    }
}
