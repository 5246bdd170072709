// This file is part of Nitrogen.
//
// Nitrogen is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// Nitrogen is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with Nitrogen.  If not, see <http://www.gnu.org/licenses/>.
use crate::LengthError;
use num_traits::FromPrimitive;
use rust_decimal::Decimal;

/// A plain number that can become the exact magnitude of a `Length`.
///
/// Integers and decimals convert losslessly. Floats are taken at their
/// shortest decimal representation, so `2.2f64` becomes exactly `2.2`; NaN,
/// infinities, and values outside the decimal range are rejected.
pub trait Magnitude: Copy {
    fn to_magnitude(self) -> Result<Decimal, LengthError>;
}

impl Magnitude for Decimal {
    fn to_magnitude(self) -> Result<Decimal, LengthError> {
        Ok(self)
    }
}

impl Magnitude for &Decimal {
    fn to_magnitude(self) -> Result<Decimal, LengthError> {
        Ok(*self)
    }
}

macro_rules! impl_magnitude_for_integers {
    ($($Num:ty),*) => {
        $(
            impl Magnitude for $Num {
                fn to_magnitude(self) -> Result<Decimal, LengthError> {
                    Ok(Decimal::from(self))
                }
            }
        )*
    };
}
impl_magnitude_for_integers!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

macro_rules! impl_magnitude_for_floats {
    ($($Num:ty => $from:ident),*) => {
        $(
            impl Magnitude for $Num {
                fn to_magnitude(self) -> Result<Decimal, LengthError> {
                    Decimal::$from(self).ok_or(LengthError::Unrepresentable(self as f64))
                }
            }
        )*
    };
}
impl_magnitude_for_floats!(f32 => from_f32, f64 => from_f64);

#[cfg(test)]
mod test {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_integers_are_exact() {
        assert_eq!(5i8.to_magnitude(), Ok(dec!(5)));
        assert_eq!((-5i64).to_magnitude(), Ok(dec!(-5)));
        assert_eq!(u64::MAX.to_magnitude(), Ok(Decimal::from(u64::MAX)));
        assert_eq!(7usize.to_magnitude(), Ok(dec!(7)));
    }

    #[test]
    fn test_decimals_pass_through() {
        assert_eq!(dec!(1.10).to_magnitude().unwrap().to_string(), "1.10");
        assert_eq!((&dec!(3.3)).to_magnitude(), Ok(dec!(3.3)));
    }

    #[test]
    fn test_exact_binary_floats() {
        assert_eq!(0.5f64.to_magnitude(), Ok(dec!(0.5)));
        assert_eq!(0.5f32.to_magnitude(), Ok(dec!(0.5)));
        assert_eq!((-2f64).to_magnitude(), Ok(dec!(-2)));
    }

    #[test]
    fn test_non_finite_floats_are_rejected() {
        assert!(matches!(
            f64::NAN.to_magnitude(),
            Err(LengthError::Unrepresentable(_))
        ));
        assert_eq!(
            f64::INFINITY.to_magnitude(),
            Err(LengthError::Unrepresentable(f64::INFINITY))
        );
        assert!(f32::NEG_INFINITY.to_magnitude().is_err());
        assert!(1e300f64.to_magnitude().is_err());
    }
}
