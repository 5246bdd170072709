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
use linear_measure::{conversion_factor, convert, ConversionFactor, Length, LengthUnit};
use proptest::prelude::*;
use rust_decimal::Decimal;
use std::{
    cmp::Ordering,
    collections::hash_map::DefaultHasher,
    hash::{Hash, Hasher},
};

fn magnitude() -> impl Strategy<Value = Decimal> {
    (-1_000_000_000i64..1_000_000_000, 0u32..5).prop_map(|(m, scale)| Decimal::new(m, scale))
}

// Magnitudes out to the full 28 digit scale, where conversions round.
fn fine_magnitude() -> impl Strategy<Value = Decimal> {
    (-10i128.pow(22)..10i128.pow(22), 0u32..=28)
        .prop_map(|(m, scale)| Decimal::from_i128_with_scale(m, scale))
}

fn unit() -> impl Strategy<Value = LengthUnit> {
    prop::sample::select(LengthUnit::ALL.to_vec())
}

fn length() -> impl Strategy<Value = Length> {
    (magnitude(), unit()).prop_map(|(m, u)| Length::new(m, u).unwrap())
}

fn hash_of(l: &Length) -> u64 {
    let mut hasher = DefaultHasher::new();
    l.hash(&mut hasher);
    hasher.finish()
}

// Pairs where the forward leg multiplies; the return leg then divides out an
// exact product.
fn widening(from: LengthUnit, to: LengthUnit) -> bool {
    !matches!(conversion_factor(from, to), Ok(ConversionFactor::Divide(_)))
}

proptest! {
    #[test]
    fn round_trip_is_exact(m in magnitude(), from in unit(), to in unit()) {
        prop_assume!(widening(from, to));
        let there = convert(m, from, to).unwrap();
        prop_assert_eq!(convert(there, to, from).unwrap(), m);
    }

    #[test]
    fn ordering_is_total(a in length(), b in length()) {
        let outcomes = [a < b, a == b, a > b];
        prop_assert_eq!(outcomes.iter().filter(|&&o| o).count(), 1);
        prop_assert_eq!(a.cmp(&b), b.cmp(&a).reverse());
        let expect = if a < b {
            Ordering::Less
        } else if a == b {
            Ordering::Equal
        } else {
            Ordering::Greater
        };
        prop_assert_eq!(a.cmp(&b), expect);
        prop_assert_eq!(a.partial_cmp(&b), Some(expect));
    }

    #[test]
    fn converted_lengths_stay_equal(a in length(), to in unit()) {
        prop_assume!(widening(a.unit(), to));
        let b = a.to_unit(to).unwrap();
        prop_assert_eq!(a, b);
        prop_assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn same_unit_arithmetic_is_exact(a in magnitude(), b in magnitude(), u in unit()) {
        let (la, lb) = (Length::new(a, u).unwrap(), Length::new(b, u).unwrap());
        let sum = la + lb;
        let diff = la - lb;
        prop_assert_eq!(sum.unit(), u);
        prop_assert_eq!(sum.magnitude(), a + b);
        prop_assert_eq!(diff.magnitude(), a - b);
    }

    #[test]
    fn results_carry_the_left_unit(a in length(), b in length()) {
        prop_assert_eq!((a + b).unit(), a.unit());
        prop_assert_eq!((a - b).unit(), a.unit());
        prop_assert_eq!(a.checked_add(&b).unwrap().unit(), a.unit());
    }

    #[test]
    fn scaling_by_one_is_identity(a in length()) {
        prop_assert_eq!(a.multiply_by(1).unwrap().magnitude(), a.magnitude());
        prop_assert_eq!(a.divide_by(1).unwrap().magnitude(), a.magnitude());
        prop_assert_eq!(a.multiply_by(1).unwrap().unit(), a.unit());
        prop_assert!(a.divide_by(0).is_err());
    }

    #[test]
    fn ordering_is_transitive_through_rounded_conversions(
        m in fine_magnitude(),
        from in unit(),
        to in unit(),
    ) {
        let a = Length::new(m, from).unwrap();
        let b = a.to_unit(to).unwrap();
        let c = b.to_unit(from).unwrap();
        if a.cmp(&b) == b.cmp(&c) {
            prop_assert_eq!(a.cmp(&c), a.cmp(&b));
        }
        for (x, y) in [(a, b), (b, c), (a, c)] {
            if x == y {
                prop_assert_eq!(hash_of(&x), hash_of(&y));
            }
        }
    }
}
