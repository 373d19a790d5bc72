use crate::error::DieError;
use serde_json::Value;
use std::fmt;
use std::num::IntErrorKind;
use std::str::FromStr;

/// A validated, non-negative number of faces.
///
/// Zero is representable: such a die can be built but never rolled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Sides(u64);

impl Sides {
    /// The conventional six-sided die.
    pub const D6: Self = Self(6);

    /// Returns the number of faces.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Returns `true` for a zero-sided die.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl Default for Sides {
    fn default() -> Self {
        Self::D6
    }
}

impl fmt::Display for Sides {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "d{}", self.0)
    }
}

impl From<u32> for Sides {
    fn from(sides: u32) -> Self {
        Self(u64::from(sides))
    }
}

impl TryFrom<i64> for Sides {
    type Error = DieError;

    fn try_from(sides: i64) -> Result<Self, Self::Error> {
        u64::try_from(sides)
            .map(Self)
            .map_err(|_| DieError::NegativeSides { sides, context: None })
    }
}

/// Parses a side count from untyped text, e.g. a command argument or form field.
///
/// Surrounding whitespace is ignored. Anything that is not an integer literal is
/// a type error; an integer literal that is negative or does not fit `u64` is a
/// value error.
impl FromStr for Sides {
    type Err = DieError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        match trimmed.parse::<i64>() {
            Ok(sides) => Self::try_from(sides),
            Err(e) if *e.kind() == IntErrorKind::PosOverflow => trimmed
                .parse::<u64>()
                .map(Self)
                .map_err(|_| DieError::OutOfRange { found: trimmed.to_owned().into(), context: None }),
            Err(e) if *e.kind() == IntErrorKind::NegOverflow => {
                Err(DieError::OutOfRange { found: trimmed.to_owned().into(), context: None })
            },
            Err(_) => Err(DieError::InvalidType { found: format!("{raw:?}").into(), context: None }),
        }
    }
}

/// Reads a side count from a JSON value.
///
/// Only integral numbers are accepted; `6.0` is a float and is rejected like `"6"`.
impl TryFrom<&Value> for Sides {
    type Error = DieError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Number(n) => {
                if let Some(sides) = n.as_i64() {
                    Self::try_from(sides)
                } else if let Some(sides) = n.as_u64() {
                    Ok(Self(sides))
                } else {
                    Err(DieError::InvalidType { found: format!("float {n}").into(), context: None })
                }
            },
            other => Err(DieError::InvalidType { found: json_type(other).into(), context: None }),
        }
    }
}

const fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kata_domain::error::ErrorKind;
    use serde_json::json;

    #[test]
    fn integers_are_accepted() {
        assert_eq!(Sides::try_from(20_i64).map(Sides::get).ok(), Some(20));
        assert_eq!(Sides::try_from(0_i64).map(Sides::get).ok(), Some(0));
        assert_eq!(Sides::from(8_u32).get(), 8);
    }

    #[test]
    fn negative_is_a_value_error() {
        let err = Sides::try_from(-1_i64).unwrap_err();
        assert!(matches!(err, DieError::NegativeSides { sides: -1, .. }));
        assert_eq!(err.kind(), ErrorKind::Value);
    }

    #[test]
    fn text_is_parsed() {
        assert_eq!(" 12 ".parse::<Sides>().map(Sides::get).ok(), Some(12));
        assert_eq!("six".parse::<Sides>().unwrap_err().kind(), ErrorKind::Type);
        assert_eq!("6.5".parse::<Sides>().unwrap_err().kind(), ErrorKind::Type);
        assert_eq!("".parse::<Sides>().unwrap_err().kind(), ErrorKind::Type);
        assert_eq!("-3".parse::<Sides>().unwrap_err().kind(), ErrorKind::Value);
    }

    #[test]
    fn text_and_json_accept_the_same_range() {
        let max = u64::MAX.to_string();
        assert_eq!(max.parse::<Sides>().map(Sides::get).ok(), Some(u64::MAX));
        assert_eq!(Sides::try_from(&json!(u64::MAX)).map(Sides::get).ok(), Some(u64::MAX));

        let err = "-18446744073709551615".parse::<Sides>().unwrap_err();
        assert!(matches!(err, DieError::OutOfRange { .. }));
    }

    #[test]
    fn huge_literal_is_out_of_range() {
        let err = "123456789012345678901234567890".parse::<Sides>().unwrap_err();
        assert!(matches!(err, DieError::OutOfRange { .. }));
        assert_eq!(err.kind(), ErrorKind::Value);
    }

    #[test]
    fn json_values_are_checked() {
        assert_eq!(Sides::try_from(&json!(6)).map(Sides::get).ok(), Some(6));
        assert_eq!(Sides::try_from(&json!(u64::MAX)).map(Sides::get).ok(), Some(u64::MAX));
        assert_eq!(Sides::try_from(&json!(-2)).unwrap_err().kind(), ErrorKind::Value);

        for bad in [json!("six"), json!(6.0), json!(6.5), json!(true), json!(null), json!([6])] {
            let err = Sides::try_from(&bad).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Type, "{bad} should be a type error");
        }
    }

    #[test]
    fn error_messages_name_the_input() {
        let err = Sides::try_from(&json!("six")).unwrap_err();
        assert_eq!(err.to_string(), "The number of sides must be an integer: got string");

        let err = "six".parse::<Sides>().unwrap_err();
        assert_eq!(err.to_string(), "The number of sides must be an integer: got \"six\"");
    }

    #[test]
    fn display_uses_dice_notation() {
        assert_eq!(Sides::D6.to_string(), "d6");
    }
}
