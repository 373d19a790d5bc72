use std::fmt::Debug;

/// Numeric types accepted by the pairwise operations.
///
/// Integer implementations are checked: a result that does not fit the type is
/// `None` instead of wrapping or panicking. Float arithmetic follows IEEE 754
/// and never reports overflow.
pub trait Element: Copy + PartialEq + Debug {
    fn checked_add(self, rhs: Self) -> Option<Self>;

    fn checked_sub(self, rhs: Self) -> Option<Self>;

    fn checked_mul(self, rhs: Self) -> Option<Self>;

    /// Quotient rounded toward negative infinity (`-7 / 2 == -4`).
    ///
    /// Callers guarantee `rhs` is not zero.
    fn checked_floor_div(self, rhs: Self) -> Option<Self>;

    fn is_zero(self) -> bool;
}

macro_rules! impl_checked_common {
    ($t:ty) => {
        fn checked_add(self, rhs: Self) -> Option<Self> {
            <$t>::checked_add(self, rhs)
        }

        fn checked_sub(self, rhs: Self) -> Option<Self> {
            <$t>::checked_sub(self, rhs)
        }

        fn checked_mul(self, rhs: Self) -> Option<Self> {
            <$t>::checked_mul(self, rhs)
        }

        fn is_zero(self) -> bool {
            self == 0
        }
    };
}

macro_rules! impl_signed {
    ($($t:ty),* $(,)?) => {$(
        impl Element for $t {
            impl_checked_common!($t);

            fn checked_floor_div(self, rhs: Self) -> Option<Self> {
                let quotient = self.checked_div(rhs)?;
                let remainder = self.checked_rem(rhs)?;
                // Truncation rounded toward zero; step down when the signs differ.
                if remainder != 0 && ((remainder < 0) != (rhs < 0)) {
                    Some(quotient - 1)
                } else {
                    Some(quotient)
                }
            }
        }
    )*};
}

macro_rules! impl_unsigned {
    ($($t:ty),* $(,)?) => {$(
        impl Element for $t {
            impl_checked_common!($t);

            fn checked_floor_div(self, rhs: Self) -> Option<Self> {
                self.checked_div(rhs)
            }
        }
    )*};
}

macro_rules! impl_float {
    ($($t:ty),* $(,)?) => {$(
        impl Element for $t {
            fn checked_add(self, rhs: Self) -> Option<Self> {
                Some(self + rhs)
            }

            fn checked_sub(self, rhs: Self) -> Option<Self> {
                Some(self - rhs)
            }

            fn checked_mul(self, rhs: Self) -> Option<Self> {
                Some(self * rhs)
            }

            /// Derived from the exact remainder, so `1.0 / 0.1` floors to `9.0`
            /// even though the rounded quotient is exactly `10.0`.
            fn checked_floor_div(self, rhs: Self) -> Option<Self> {
                let remainder = self % rhs;
                let mut quotient = (self - remainder) / rhs;
                if remainder != 0.0 && ((remainder < 0.0) != (rhs < 0.0)) {
                    quotient -= 1.0;
                }

                if quotient == 0.0 {
                    return Some(<$t>::copysign(0.0, self / rhs));
                }

                // `quotient` is within one ulp of an integer; snap to it.
                let floored = quotient.floor();
                Some(if quotient - floored > 0.5 { floored + 1.0 } else { floored })
            }

            fn is_zero(self) -> bool {
                self == 0.0
            }
        }
    )*};
}

impl_signed!(i8, i16, i32, i64, i128, isize);
impl_unsigned!(u8, u16, u32, u64, u128, usize);
impl_float!(f32, f64);

#[cfg(test)]
mod tests {
    use super::Element;

    #[test]
    fn floor_division_rounds_down() {
        assert_eq!(Element::checked_floor_div(7_i32, 2), Some(3));
        assert_eq!(Element::checked_floor_div(-7_i32, 2), Some(-4));
        assert_eq!(Element::checked_floor_div(7_i32, -2), Some(-4));
        assert_eq!(Element::checked_floor_div(-7_i32, -2), Some(3));
        assert_eq!(Element::checked_floor_div(-8_i32, 2), Some(-4));
        assert_eq!(Element::checked_floor_div(7_u8, 2), Some(3));
        assert_eq!(Element::checked_floor_div(-7.0_f64, 2.0), Some(-4.0));
    }

    #[test]
    fn float_floor_division_uses_the_exact_remainder() {
        assert_eq!(Element::checked_floor_div(1.0_f64, 0.1), Some(9.0));
        assert_eq!(Element::checked_floor_div(-1.0_f64, 0.1), Some(-10.0));
        assert_eq!(Element::checked_floor_div(0.3_f64, 0.1), Some(2.0));
        assert_eq!(Element::checked_floor_div(7.0_f32, -2.0), Some(-4.0));
    }

    #[test]
    fn float_zero_quotient_keeps_its_sign() {
        let positive = Element::checked_floor_div(0.0_f64, 3.0).unwrap();
        let negative = Element::checked_floor_div(-0.0_f64, 3.0).unwrap();
        assert!(positive == 0.0 && positive.is_sign_positive());
        assert!(negative == 0.0 && negative.is_sign_negative());
    }

    #[test]
    fn floor_division_overflow_is_detected() {
        assert_eq!(Element::checked_floor_div(i64::MIN, -1), None);
        assert_eq!(Element::checked_floor_div(i8::MIN, 1), Some(i8::MIN));
    }

    #[test]
    fn integer_overflow_is_none() {
        assert_eq!(Element::checked_add(i32::MAX, 1), None);
        assert_eq!(Element::checked_sub(0_u32, 1), None);
        assert_eq!(Element::checked_mul(u8::MAX, 2), None);
    }

    #[test]
    fn floats_never_overflow() {
        assert_eq!(Element::checked_mul(f64::MAX, 2.0), Some(f64::INFINITY));
    }

    #[test]
    fn zero_detection() {
        assert!(Element::is_zero(0_i16));
        assert!(Element::is_zero(-0.0_f32));
        assert!(!Element::is_zero(1_usize));
    }
}
