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
use crate::{
    conversion::{self, ExactTenths},
    LengthError, LengthUnit, LinearUnit, Magnitude,
};
use approx::AbsDiffEq;
use num_traits::{ToPrimitive, Zero};
use rust_decimal::Decimal;
use std::{
    cmp::Ordering,
    convert::TryFrom,
    fmt,
    hash::{Hash, Hasher},
    iter::Sum,
    ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign},
    str::FromStr,
};

/// The unit two lengths are brought into before they are compared or combined.
///
/// Lengths in the same unit are used as-is. Two imperial lengths meet in
/// inches, the finest unit both can be expressed in exactly. Anything
/// involving a metric unit meets in meters.
pub fn reconciling_unit(a: LengthUnit, b: LengthUnit) -> LengthUnit {
    if a == b {
        a
    } else if !a.is_metric() && !b.is_metric() {
        LengthUnit::Inches
    } else {
        LengthUnit::Meters
    }
}

/// An exact distance, kept in the unit it was created in.
///
/// Conversions to other units happen on demand, through the conversion
/// matrix. Sums and differences are reported in the unit of the left-hand
/// operand.
#[derive(Clone, Copy, Debug)]
pub struct Length {
    magnitude: Decimal,
    unit: LengthUnit,
}

impl Length {
    pub const ZERO: Length = Length {
        magnitude: Decimal::ZERO,
        unit: LengthUnit::Meters,
    };

    /// Sentinel bounds; these are the decimal extremes, in meters.
    pub const MIN: Length = Length {
        magnitude: Decimal::MIN,
        unit: LengthUnit::Meters,
    };
    pub const MAX: Length = Length {
        magnitude: Decimal::MAX,
        unit: LengthUnit::Meters,
    };

    pub fn new<N: Magnitude>(magnitude: N, unit: LengthUnit) -> Result<Self, LengthError> {
        // Rejects the sentinel.
        unit.index()?;
        Ok(Self {
            magnitude: magnitude.to_magnitude()?,
            unit,
        })
    }

    pub fn of<U: LinearUnit, N: Magnitude>(magnitude: N) -> Self {
        Self::from_unit(magnitude, U::LENGTH_UNIT)
    }

    /// Coerce a plain number into a length. Plain numbers are always meters.
    pub fn from_plain_number<N: Magnitude>(meters: N) -> Self {
        Self::from_meters(meters)
    }

    /// The meters equivalent, as a plain number.
    ///
    /// # Panics
    ///
    /// If the meters equivalent does not fit the decimal range. Use
    /// `Decimal::try_from` to handle that case.
    pub fn to_plain_number(&self) -> Decimal {
        self.meters()
    }

    fn from_unit<N: Magnitude>(magnitude: N, unit: LengthUnit) -> Self {
        match magnitude.to_magnitude() {
            Ok(magnitude) => Self { magnitude, unit },
            Err(e) => panic!("cannot create a length in {}: {}", unit.unit_name(), e),
        }
    }

    pub fn magnitude(&self) -> Decimal {
        self.magnitude
    }

    pub fn unit(&self) -> LengthUnit {
        self.unit
    }

    pub fn is_metric(&self) -> bool {
        self.unit.is_metric()
    }

    pub fn as_unit(&self, unit: LengthUnit) -> Result<Decimal, LengthError> {
        conversion::convert(self.magnitude, self.unit, unit)
    }

    pub fn in_unit<U: LinearUnit>(&self) -> Decimal {
        self.expect_in(U::LENGTH_UNIT)
    }

    /// The same distance, re-expressed in `unit`.
    pub fn to_unit(&self, unit: LengthUnit) -> Result<Length, LengthError> {
        Ok(Self {
            magnitude: self.as_unit(unit)?,
            unit,
        })
    }

    // Every length holds a real unit, so this can only fail on overflow.
    fn expect_in(&self, unit: LengthUnit) -> Decimal {
        match self.as_unit(unit) {
            Ok(v) => v,
            Err(e) => panic!("{} in {}: {}", self, unit.unit_name(), e),
        }
    }

    pub fn f64(&self) -> f64 {
        f64::from(*self)
    }

    // Every length holds a real unit, so this cannot fail.
    fn exact(&self) -> ExactTenths {
        match ExactTenths::new(self.magnitude, self.unit) {
            Ok(v) => v,
            Err(e) => panic!("{:?}: {}", self, e),
        }
    }

    pub fn abs(&self) -> Length {
        Self {
            magnitude: self.magnitude.abs(),
            unit: self.unit,
        }
    }

    fn combine(
        &self,
        other: &Length,
        op: fn(Decimal, Decimal) -> Option<Decimal>,
    ) -> Result<Length, LengthError> {
        let common = reconciling_unit(self.unit, other.unit);
        let v = op(self.as_unit(common)?, other.as_unit(common)?).ok_or(LengthError::Overflow)?;
        Ok(Self {
            magnitude: conversion::convert(v, common, self.unit)?,
            unit: self.unit,
        })
    }

    pub fn checked_add(&self, other: &Length) -> Result<Length, LengthError> {
        self.combine(other, Decimal::checked_add)
    }

    pub fn checked_sub(&self, other: &Length) -> Result<Length, LengthError> {
        self.combine(other, Decimal::checked_sub)
    }

    pub fn multiply_by<N: Magnitude>(&self, factor: N) -> Result<Length, LengthError> {
        let factor = factor.to_magnitude()?;
        Ok(Self {
            magnitude: self
                .magnitude
                .checked_mul(factor)
                .ok_or(LengthError::Overflow)?,
            unit: self.unit,
        })
    }

    pub fn divide_by<N: Magnitude>(&self, divisor: N) -> Result<Length, LengthError> {
        let divisor = divisor.to_magnitude()?;
        if divisor.is_zero() {
            return Err(LengthError::DivideByZero);
        }
        Ok(Self {
            magnitude: self
                .magnitude
                .checked_div(divisor)
                .ok_or(LengthError::Overflow)?,
            unit: self.unit,
        })
    }
}

macro_rules! impl_unit_accessors {
    ($($Unit:ident: $from:ident, $get:ident);* $(;)?) => {
        impl Length {
            $(
                #[doc = concat!("A length of `n` ", stringify!($get), ".")]
                ///
                /// # Panics
                ///
                /// If `n` is a NaN, infinite, or out of range float.
                pub fn $from<N: Magnitude>(n: N) -> Self {
                    Self::from_unit(n, LengthUnit::$Unit)
                }

                #[doc = concat!("This length in ", stringify!($get), ".")]
                ///
                /// # Panics
                ///
                /// If the converted magnitude does not fit the decimal range.
                pub fn $get(&self) -> Decimal {
                    self.expect_in(LengthUnit::$Unit)
                }
            )*
        }
    };
}
impl_unit_accessors! {
    Millimeters: from_millimeters, millimeters;
    Centimeters: from_centimeters, centimeters;
    Meters: from_meters, meters;
    Kilometers: from_kilometers, kilometers;
    Inches: from_inches, inches;
    Feet: from_feet, feet;
    Yards: from_yards, yards;
    Miles: from_miles, miles;
}

impl Ord for Length {
    /// Lengths compare by their exact distance, so equality is transitive
    /// even where converting to the common unit would round.
    fn cmp(&self, other: &Self) -> Ordering {
        if self.unit == other.unit {
            self.magnitude.cmp(&other.magnitude)
        } else {
            self.exact().cmp(&other.exact())
        }
    }
}

impl PartialOrd for Length {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Length {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Length {}

impl Hash for Length {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.exact().reduced().hash(state);
    }
}

impl AbsDiffEq for Length {
    type Epsilon = Decimal;

    fn default_epsilon() -> Self::Epsilon {
        // One nanometer.
        Decimal::new(1, 9)
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        match (self.as_unit(LengthUnit::Meters), other.as_unit(LengthUnit::Meters)) {
            (Ok(a), Ok(b)) => a
                .checked_sub(b)
                .map(|d| d.abs() <= epsilon)
                .unwrap_or(false),
            _ => self == other,
        }
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.magnitude.normalize(), f)?;
        write!(f, " {}", self.unit.abbreviation())
    }
}

impl FromStr for Length {
    type Err = LengthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        // Split at the first letter where both sides parse, so an exponent
        // (`1e3 m`) stays with the number.
        let mut unsupported = None;
        for (split, c) in s.char_indices() {
            if !(c.is_alphabetic() || c == '\'' || c == '"') {
                continue;
            }
            let (number, unit) = s.split_at(split);
            let number = number.trim();
            let parsed = Decimal::from_str(number).or_else(|_| Decimal::from_scientific(number));
            let magnitude = match parsed {
                Ok(magnitude) => magnitude,
                Err(_) => continue,
            };
            match unit.parse() {
                Ok(unit) => return Self::new(magnitude, unit),
                Err(e) => {
                    unsupported.get_or_insert(e);
                }
            }
        }
        Err(unsupported.unwrap_or_else(|| LengthError::InvalidLength(s.to_owned())))
    }
}

/// # Panics
///
/// If the sum does not fit the decimal range. See `Length::checked_add`.
impl Add<Length> for Length {
    type Output = Length;

    fn add(self, rhs: Length) -> Self::Output {
        match self.checked_add(&rhs) {
            Ok(v) => v,
            Err(e) => panic!("{} + {}: {}", self, rhs, e),
        }
    }
}

impl AddAssign<Length> for Length {
    fn add_assign(&mut self, rhs: Length) {
        *self = *self + rhs;
    }
}

/// # Panics
///
/// If the difference does not fit the decimal range. See `Length::checked_sub`.
impl Sub<Length> for Length {
    type Output = Length;

    fn sub(self, rhs: Length) -> Self::Output {
        match self.checked_sub(&rhs) {
            Ok(v) => v,
            Err(e) => panic!("{} - {}: {}", self, rhs, e),
        }
    }
}

impl SubAssign<Length> for Length {
    fn sub_assign(&mut self, rhs: Length) {
        *self = *self - rhs;
    }
}

impl Neg for Length {
    type Output = Length;

    fn neg(self) -> Self::Output {
        Self {
            magnitude: -self.magnitude,
            unit: self.unit,
        }
    }
}

/// # Panics
///
/// If the product does not fit the decimal range. See `Length::multiply_by`.
impl Mul<Decimal> for Length {
    type Output = Length;

    fn mul(self, rhs: Decimal) -> Self::Output {
        match self.multiply_by(rhs) {
            Ok(v) => v,
            Err(e) => panic!("{} * {}: {}", self, rhs, e),
        }
    }
}

/// # Panics
///
/// If `rhs` is zero or the quotient does not fit the decimal range. See
/// `Length::divide_by`.
impl Div<Decimal> for Length {
    type Output = Length;

    fn div(self, rhs: Decimal) -> Self::Output {
        match self.divide_by(rhs) {
            Ok(v) => v,
            Err(e) => panic!("{} / {}: {}", self, rhs, e),
        }
    }
}

/// The total carries the unit of the first length; an empty sum is zero meters.
impl Sum<Length> for Length {
    fn sum<I: Iterator<Item = Length>>(mut iter: I) -> Self {
        match iter.next() {
            Some(first) => iter.fold(first, |acc, v| acc + v),
            None => Length::ZERO,
        }
    }
}

impl<'a> Sum<&'a Length> for Length {
    fn sum<I: Iterator<Item = &'a Length>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl Zero for Length {
    fn zero() -> Self {
        Length::ZERO
    }

    fn is_zero(&self) -> bool {
        self.magnitude.is_zero()
    }
}

impl From<Decimal> for Length {
    fn from(meters: Decimal) -> Self {
        Self::from_plain_number(meters)
    }
}

macro_rules! impl_length_from_integer {
    ($($Num:ty),*) => {
        $(
            impl From<$Num> for Length {
                fn from(meters: $Num) -> Self {
                    Self::from_plain_number(meters)
                }
            }
        )*
    };
}
impl_length_from_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl TryFrom<f64> for Length {
    type Error = LengthError;

    fn try_from(meters: f64) -> Result<Self, Self::Error> {
        Self::new(meters, LengthUnit::Meters)
    }
}

impl TryFrom<f32> for Length {
    type Error = LengthError;

    fn try_from(meters: f32) -> Result<Self, Self::Error> {
        Self::new(meters, LengthUnit::Meters)
    }
}

/// The meters equivalent, or `Overflow` when it does not fit the decimal range.
impl TryFrom<Length> for Decimal {
    type Error = LengthError;

    fn try_from(v: Length) -> Result<Self, Self::Error> {
        v.as_unit(LengthUnit::Meters)
    }
}

/// The meters equivalent. Lengths beyond the decimal range in meters are
/// converted in floating point instead.
impl From<Length> for f64 {
    fn from(v: Length) -> Self {
        let meters = match v.as_unit(LengthUnit::Meters) {
            Ok(meters) => meters.to_f64(),
            Err(_) => conversion::conversion_factor(v.unit, LengthUnit::Meters)
                .ok()
                .and_then(|factor| factor.apply_f64(v.magnitude.to_f64()?)),
        };
        meters.unwrap_or(f64::NAN)
    }
}

/// Whole meters, rounding half to even.
impl TryFrom<Length> for i64 {
    type Error = LengthError;

    fn try_from(v: Length) -> Result<Self, Self::Error> {
        v.as_unit(LengthUnit::Meters)?
            .round()
            .to_i64()
            .ok_or(LengthError::Overflow)
    }
}
