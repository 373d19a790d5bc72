//! # Dice
//!
//! A fair n-sided [`Die`] that owns its own pseudo-random generator.
//!
//! * **Seeding**: pass `Some(seed)` for a reproducible sequence of rolls, `None` to seed
//!   from OS entropy. No process-wide generator is involved.
//! * **Validation**: the side count is checked once, at construction. Negative counts are
//!   rejected; untyped input (text or JSON) that is not an integer is rejected as a type
//!   error through [`Sides`].
//! * **Zero sides**: a zero-sided die can be constructed, but [`Die::roll`] fails with
//!   [`DieError::NoSides`].
//!
//! ## Example
//!
//! ```rust
//! use kata_dice::{Die, Sides};
//!
//! let sides: Sides = "20".parse().unwrap();
//! let mut die = Die::from_sides(sides, Some(7));
//!
//! assert_eq!(die.last_roll(), None);
//! let value = die.roll().unwrap();
//! assert!((1..=20).contains(&value));
//! assert_eq!(die.last_roll(), Some(value));
//! ```

mod die;
mod error;
mod sides;

pub use crate::die::Die;
pub use crate::error::{DieError, DieErrorExt};
pub use crate::sides::Sides;
