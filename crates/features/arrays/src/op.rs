use crate::element::Element;
use strum_macros::{AsRefStr, Display, EnumIter};

/// The pairwise operations offered by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    /// Floor division.
    Divide,
}

impl Operation {
    pub(crate) fn apply<T: Element>(self, a: T, b: T) -> Option<T> {
        match self {
            Self::Add => a.checked_add(b),
            Self::Subtract => a.checked_sub(b),
            Self::Multiply => a.checked_mul(b),
            Self::Divide => a.checked_floor_div(b),
        }
    }
}
