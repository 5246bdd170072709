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

// The conversion constants of NIST Handbook 44 (2019), appendix C, page C-8.
//
// Everything is derived from a single exact relationship between the systems,
// 1 inch = 25.4 millimeters, and the integer relationships within each system.
// Every derived factor is a terminating decimal, so the matrix is exact.
use crate::{LengthError, LengthUnit};
use num_traits::ToPrimitive;
use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::{cmp::Ordering, fmt};

pub const MILLIMETERS_PER_INCH: Decimal = dec!(25.4);

pub const INCHES_PER_FOOT: u32 = 12;
pub const FEET_PER_YARD: u32 = 3;
pub const YARDS_PER_MILE: u32 = 1_760;

pub const MILLIMETERS_PER_CENTIMETER: u32 = 10;
pub const MILLIMETERS_PER_METER: u32 = 1_000;
pub const METERS_PER_KILOMETER: u32 = 1_000;

// Size of each unit, counted in the finest unit of its own system: millimeters
// for metric units, inches for imperial units. Ordered as `LengthUnit::ALL`.
const EXTENTS: [(LengthUnit, u32); 8] = [
    (LengthUnit::Millimeters, 1),
    (LengthUnit::Centimeters, MILLIMETERS_PER_CENTIMETER),
    (LengthUnit::Meters, MILLIMETERS_PER_METER),
    (
        LengthUnit::Kilometers,
        MILLIMETERS_PER_METER * METERS_PER_KILOMETER,
    ),
    (LengthUnit::Inches, 1),
    (LengthUnit::Feet, INCHES_PER_FOOT),
    (LengthUnit::Yards, INCHES_PER_FOOT * FEET_PER_YARD),
    (
        LengthUnit::Miles,
        INCHES_PER_FOOT * FEET_PER_YARD * YARDS_PER_MILE,
    ),
];

/// How to carry a magnitude from one unit to another.
///
/// The constant inside `Multiply` and `Divide` is always the exact count of
/// the finer unit in the coarser one, or, across systems, of the metric unit
/// in the imperial one. Inverting an exact multiplication therefore never
/// requires a non-terminating constant.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ConversionFactor {
    Identity,
    Multiply(Decimal),
    Divide(Decimal),
}

impl ConversionFactor {
    pub fn apply(self, value: Decimal) -> Result<Decimal, LengthError> {
        match self {
            Self::Identity => Ok(value),
            Self::Multiply(c) => value.checked_mul(c).ok_or(LengthError::Overflow),
            Self::Divide(c) => value.checked_div(c).ok_or(LengthError::Overflow),
        }
    }

    /// Apply the factor in floating point, for magnitudes past the decimal range.
    pub fn apply_f64(self, value: f64) -> Option<f64> {
        match self {
            Self::Identity => Some(value),
            Self::Multiply(c) => Some(value * c.to_f64()?),
            Self::Divide(c) => Some(value / c.to_f64()?),
        }
    }

    pub fn inverse(self) -> Self {
        match self {
            Self::Identity => Self::Identity,
            Self::Multiply(c) => Self::Divide(c),
            Self::Divide(c) => Self::Multiply(c),
        }
    }
}

impl fmt::Display for ConversionFactor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Identity => write!(f, "* 1"),
            Self::Multiply(c) => write!(f, "* {}", c.normalize()),
            Self::Divide(c) => write!(f, "/ {}", c.normalize()),
        }
    }
}

struct ConversionMatrix {
    factors: [[ConversionFactor; 8]; 8],
}

impl ConversionMatrix {
    fn derive() -> Self {
        let mut factors = [[ConversionFactor::Identity; 8]; 8];
        for (i, &(from, from_extent)) in EXTENTS.iter().enumerate() {
            for (j, &(to, to_extent)) in EXTENTS.iter().enumerate() {
                factors[i][j] = derive_factor(
                    (from, Decimal::from(from_extent)),
                    (to, Decimal::from(to_extent)),
                );
            }
        }
        Self { factors }
    }
}

fn derive_factor(
    (from, from_extent): (LengthUnit, Decimal),
    (to, to_extent): (LengthUnit, Decimal),
) -> ConversionFactor {
    if from == to {
        return ConversionFactor::Identity;
    }
    match (from.is_metric(), to.is_metric()) {
        (false, true) => ConversionFactor::Multiply(from_extent * MILLIMETERS_PER_INCH / to_extent),
        (true, false) => ConversionFactor::Divide(to_extent * MILLIMETERS_PER_INCH / from_extent),
        _ if from_extent > to_extent => ConversionFactor::Multiply(from_extent / to_extent),
        _ => ConversionFactor::Divide(to_extent / from_extent),
    }
}

static MATRIX: Lazy<ConversionMatrix> = Lazy::new(ConversionMatrix::derive);

/// Look up the factor that carries a magnitude in `from` to `to`.
pub fn conversion_factor(
    from: LengthUnit,
    to: LengthUnit,
) -> Result<ConversionFactor, LengthError> {
    Ok(MATRIX.factors[from.index()?][to.index()?])
}

/// Convert `value`, measured in `from`, into `to`.
///
/// Converting a unit to itself returns `value` untouched, including its scale.
/// Fails with `UnsupportedUnit` if either unit is `Unknown` and with `Overflow`
/// if the result leaves the decimal range.
pub fn convert(value: Decimal, from: LengthUnit, to: LengthUnit) -> Result<Decimal, LengthError> {
    conversion_factor(from, to)?.apply(value)
}

// Tenths of a millimeter are the coarsest unit that every unit is a whole
// number of: one inch is 254 of them.
const TENTHS_PER_MILLIMETER: u32 = 10;
const TENTHS_PER_INCH: u32 = 254;

/// A magnitude held as the exact fraction `numer / denom` of tenths of a
/// millimeter, where `denom` is the power of ten given by the decimal's scale.
///
/// A 96 bit mantissa times the largest extent (one mile is 16,093,440 tenths)
/// stays below 2^120, so nothing here can overflow an `i128`.
#[derive(Clone, Copy, Debug)]
pub(crate) struct ExactTenths {
    numer: i128,
    denom: i128,
}

impl ExactTenths {
    pub(crate) fn new(value: Decimal, unit: LengthUnit) -> Result<Self, LengthError> {
        let (_, extent) = EXTENTS[unit.index()?];
        let tenths = if unit.is_metric() {
            TENTHS_PER_MILLIMETER
        } else {
            TENTHS_PER_INCH
        };
        Ok(Self {
            numer: value.mantissa() * i128::from(extent) * i128::from(tenths),
            denom: 10i128.pow(value.scale()),
        })
    }

    /// The fraction in lowest terms. Equal lengths reduce to the same pair.
    pub(crate) fn reduced(self) -> (i128, i128) {
        let (mut numer, mut denom) = (self.numer, self.denom);
        if numer == 0 {
            return (0, 1);
        }
        for p in [2, 5] {
            while numer % p == 0 && denom % p == 0 {
                numer /= p;
                denom /= p;
            }
        }
        (numer, denom)
    }
}

impl Ord for ExactTenths {
    fn cmp(&self, other: &Self) -> Ordering {
        // Compare whole parts first. On a tie, the fractional parts compare
        // opposite to their reciprocals, which shrink at every step.
        let (mut a, mut b) = (*self, *other);
        let mut reversed = false;
        loop {
            let (qa, ra) = (a.numer.div_euclid(a.denom), a.numer.rem_euclid(a.denom));
            let (qb, rb) = (b.numer.div_euclid(b.denom), b.numer.rem_euclid(b.denom));
            let ordering = match (qa.cmp(&qb), ra, rb) {
                (Ordering::Equal, 0, 0) => Ordering::Equal,
                (Ordering::Equal, 0, _) => Ordering::Less,
                (Ordering::Equal, _, 0) => Ordering::Greater,
                (Ordering::Equal, _, _) => {
                    a = Self {
                        numer: a.denom,
                        denom: ra,
                    };
                    b = Self {
                        numer: b.denom,
                        denom: rb,
                    };
                    reversed = !reversed;
                    continue;
                }
                (ordering, _, _) => ordering,
            };
            return if reversed { ordering.reverse() } else { ordering };
        }
    }
}

impl PartialOrd for ExactTenths {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for ExactTenths {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ExactTenths {}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_extents_follow_unit_order() {
        let units = EXTENTS.iter().map(|(u, _)| *u).collect::<Vec<_>>();
        assert_eq!(units, LengthUnit::ALL.to_vec());
    }

    #[test]
    fn test_identity_preserves_scale() {
        let v = convert(dec!(1.500), LengthUnit::Feet, LengthUnit::Feet).unwrap();
        assert_eq!(v.to_string(), "1.500");
        assert_eq!(
            conversion_factor(LengthUnit::Meters, LengthUnit::Meters),
            Ok(ConversionFactor::Identity)
        );
    }

    #[test]
    fn test_handbook_constants() {
        let cases = [
            (LengthUnit::Inches, LengthUnit::Millimeters, dec!(25.4)),
            (LengthUnit::Inches, LengthUnit::Centimeters, dec!(2.54)),
            (LengthUnit::Inches, LengthUnit::Meters, dec!(0.0254)),
            (LengthUnit::Feet, LengthUnit::Meters, dec!(0.3048)),
            (LengthUnit::Yards, LengthUnit::Meters, dec!(0.9144)),
            (LengthUnit::Miles, LengthUnit::Meters, dec!(1609.344)),
            (LengthUnit::Kilometers, LengthUnit::Meters, dec!(1000)),
            (LengthUnit::Meters, LengthUnit::Millimeters, dec!(1000)),
            (LengthUnit::Meters, LengthUnit::Centimeters, dec!(100)),
            (LengthUnit::Feet, LengthUnit::Inches, dec!(12)),
            (LengthUnit::Yards, LengthUnit::Feet, dec!(3)),
            (LengthUnit::Miles, LengthUnit::Yards, dec!(1760)),
        ];
        for (from, to, expect) in cases {
            assert_eq!(
                conversion_factor(from, to),
                Ok(ConversionFactor::Multiply(expect)),
                "{} -> {}",
                from,
                to
            );
            assert_eq!(convert(Decimal::ONE, from, to), Ok(expect));
        }
    }

    #[test]
    fn test_matrix_is_antisymmetric() {
        for from in LengthUnit::ALL {
            for to in LengthUnit::ALL {
                assert_eq!(
                    conversion_factor(from, to).unwrap(),
                    conversion_factor(to, from).unwrap().inverse()
                );
            }
        }
    }

    #[test]
    fn test_cross_system_factors_are_metric_per_imperial() {
        assert_eq!(
            conversion_factor(LengthUnit::Kilometers, LengthUnit::Inches),
            Ok(ConversionFactor::Divide(dec!(0.0000254)))
        );
        assert_eq!(
            conversion_factor(LengthUnit::Millimeters, LengthUnit::Miles),
            Ok(ConversionFactor::Divide(dec!(1609344)))
        );
    }

    #[test]
    fn test_mile_feet_round_trip() {
        let feet = convert(Decimal::ONE, LengthUnit::Miles, LengthUnit::Feet).unwrap();
        assert_eq!(feet, dec!(5280));
        assert_eq!(
            convert(feet, LengthUnit::Feet, LengthUnit::Miles),
            Ok(Decimal::ONE)
        );
    }

    #[test]
    fn test_unknown_is_rejected() {
        for unit in LengthUnit::ALL {
            assert!(matches!(
                convert(Decimal::ONE, unit, LengthUnit::Unknown),
                Err(LengthError::UnsupportedUnit(_))
            ));
            assert!(matches!(
                convert(Decimal::ONE, LengthUnit::Unknown, unit),
                Err(LengthError::UnsupportedUnit(_))
            ));
        }
        assert!(convert(Decimal::ONE, LengthUnit::Unknown, LengthUnit::Unknown).is_err());
    }

    #[test]
    fn test_overflow() {
        assert_eq!(
            convert(Decimal::MAX, LengthUnit::Kilometers, LengthUnit::Millimeters),
            Err(LengthError::Overflow)
        );
        assert!(convert(Decimal::MAX, LengthUnit::Millimeters, LengthUnit::Kilometers).is_ok());
    }

    #[test]
    fn test_exact_tenths() {
        let tenths = |v, u| ExactTenths::new(v, u).unwrap();
        assert_eq!(tenths(dec!(1), LengthUnit::Inches).reduced(), (254, 1));
        assert_eq!(tenths(dec!(1), LengthUnit::Miles).reduced(), (16_093_440, 1));
        assert_eq!(tenths(dec!(0.0000), LengthUnit::Feet).reduced(), (0, 1));
        assert_eq!(
            tenths(dec!(0.3048), LengthUnit::Meters).reduced(),
            tenths(dec!(1.000), LengthUnit::Feet).reduced()
        );
        assert_eq!(tenths(dec!(-0.05), LengthUnit::Millimeters).reduced(), (-1, 2));
        assert!(ExactTenths::new(Decimal::ONE, LengthUnit::Unknown).is_err());
    }

    #[test]
    fn test_exact_tenths_order() {
        let tenths = |v, u| ExactTenths::new(v, u).unwrap();
        let fine = dec!(1.0000000000000000000000000001);
        assert!(tenths(fine, LengthUnit::Millimeters) > tenths(dec!(0.001), LengthUnit::Meters));
        assert!(tenths(-fine, LengthUnit::Millimeters) < tenths(dec!(-0.001), LengthUnit::Meters));
        assert_eq!(
            tenths(dec!(0.001), LengthUnit::Meters),
            tenths(Decimal::ONE, LengthUnit::Millimeters)
        );
        // 1/3 of an inch against 8.466... mm, either side of the exact value.
        let third = Decimal::ONE / dec!(3);
        assert!(tenths(third, LengthUnit::Inches) > tenths(dec!(8.4666), LengthUnit::Millimeters));
        assert!(tenths(third, LengthUnit::Inches) < tenths(dec!(8.4667), LengthUnit::Millimeters));
        assert!(tenths(Decimal::MAX, LengthUnit::Miles) > tenths(Decimal::MAX, LengthUnit::Kilometers));
        assert!(tenths(Decimal::MIN, LengthUnit::Miles) < tenths(Decimal::MIN, LengthUnit::Kilometers));
    }

    #[test]
    fn test_display() {
        assert_eq!(ConversionFactor::Identity.to_string(), "* 1");
        assert_eq!(ConversionFactor::Multiply(dec!(25.40)).to_string(), "* 25.4");
        assert_eq!(ConversionFactor::Divide(dec!(12)).to_string(), "/ 12");
    }
}
