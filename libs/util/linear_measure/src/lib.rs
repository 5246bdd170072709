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

//! Exact lengths in the units of NIST Handbook 44.
//!
//! A `Length` remembers the unit it was created in and converts on demand
//! through an exact decimal conversion matrix derived from 1 in = 25.4 mm.
//!
//! ```
//! use linear_measure::{feet, inches, LengthUnit};
//! use rust_decimal_macros::dec;
//!
//! let l = feet!(1) + inches!(6);
//! assert_eq!(l.unit(), LengthUnit::Feet);
//! assert_eq!(l.magnitude(), dec!(1.5));
//! assert_eq!(l.to_string(), "1.5 ft");
//! ```
pub(crate) mod conversion;
pub(crate) mod error;
pub(crate) mod length;
pub(crate) mod length_unit;
pub(crate) mod magnitude;
pub(crate) mod unit;

pub use crate::{
    conversion::{
        conversion_factor, convert, ConversionFactor, FEET_PER_YARD, INCHES_PER_FOOT,
        METERS_PER_KILOMETER, MILLIMETERS_PER_CENTIMETER, MILLIMETERS_PER_INCH,
        MILLIMETERS_PER_METER, YARDS_PER_MILE,
    },
    error::LengthError,
    length::{reconciling_unit, Length},
    length_unit::{LengthUnit, MeasurementSystem},
    magnitude::Magnitude,
    unit::{
        centimeters::Centimeters, feet::Feet, inches::Inches, kilometers::Kilometers,
        meters::Meters, miles::Miles, millimeters::Millimeters, yards::Yards, Imperial,
        LinearUnit, Metric, System,
    },
};

pub use rust_decimal;
