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
use std::{convert::TryFrom, fmt, str::FromStr};

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum MeasurementSystem {
    Metric,
    Imperial,
}

/// The units a `Length` may be expressed in.
///
/// The discriminants are stable and may be persisted; `Unknown` is the
/// default and is never a valid operand.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[repr(u8)]
pub enum LengthUnit {
    #[default]
    Unknown = 0,
    Meters = 1,
    Millimeters = 2,
    Centimeters = 3,
    Kilometers = 4,
    Inches = 5,
    Feet = 6,
    Yards = 7,
    Miles = 8,
}

impl LengthUnit {
    /// Every real unit, finest metric first, then finest imperial first.
    pub const ALL: [LengthUnit; 8] = [
        LengthUnit::Millimeters,
        LengthUnit::Centimeters,
        LengthUnit::Meters,
        LengthUnit::Kilometers,
        LengthUnit::Inches,
        LengthUnit::Feet,
        LengthUnit::Yards,
        LengthUnit::Miles,
    ];

    pub fn system(self) -> Option<MeasurementSystem> {
        match self {
            Self::Millimeters | Self::Centimeters | Self::Meters | Self::Kilometers => {
                Some(MeasurementSystem::Metric)
            }
            Self::Inches | Self::Feet | Self::Yards | Self::Miles => {
                Some(MeasurementSystem::Imperial)
            }
            Self::Unknown => None,
        }
    }

    pub fn is_metric(self) -> bool {
        self.system() == Some(MeasurementSystem::Metric)
    }

    pub fn is_imperial(self) -> bool {
        self.system() == Some(MeasurementSystem::Imperial)
    }

    pub fn abbreviation(self) -> &'static str {
        match self {
            Self::Millimeters => "mm",
            Self::Centimeters => "cm",
            Self::Meters => "m",
            Self::Kilometers => "km",
            Self::Inches => "in",
            Self::Feet => "ft",
            Self::Yards => "yd",
            Self::Miles => "mi",
            Self::Unknown => "?",
        }
    }

    pub fn unit_name(self) -> &'static str {
        match self {
            Self::Millimeters => "millimeters",
            Self::Centimeters => "centimeters",
            Self::Meters => "meters",
            Self::Kilometers => "kilometers",
            Self::Inches => "inches",
            Self::Feet => "feet",
            Self::Yards => "yards",
            Self::Miles => "miles",
            Self::Unknown => "unknown",
        }
    }

    pub fn code(self) -> u8 {
        self as u8
    }

    /// Position of this unit in `ALL`; the sentinel has none.
    pub(crate) fn index(self) -> Result<usize, LengthError> {
        Self::ALL
            .iter()
            .position(|&u| u == self)
            .ok_or_else(|| LengthError::UnsupportedUnit(self.unit_name().to_owned()))
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

impl TryFrom<u8> for LengthUnit {
    type Error = LengthError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Ok(match code {
            0 => Self::Unknown,
            1 => Self::Meters,
            2 => Self::Millimeters,
            3 => Self::Centimeters,
            4 => Self::Kilometers,
            5 => Self::Inches,
            6 => Self::Feet,
            7 => Self::Yards,
            8 => Self::Miles,
            _ => return Err(LengthError::UnsupportedUnit(format!("unit code {}", code))),
        })
    }
}

impl FromStr for LengthUnit {
    type Err = LengthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_lowercase().as_str() {
            "mm" | "millimeter" | "millimeters" | "millimetre" | "millimetres" => {
                Self::Millimeters
            }
            "cm" | "centimeter" | "centimeters" | "centimetre" | "centimetres" => {
                Self::Centimeters
            }
            "m" | "meter" | "meters" | "metre" | "metres" => Self::Meters,
            "km" | "kilometer" | "kilometers" | "kilometre" | "kilometres" => Self::Kilometers,
            "in" | "\"" | "inch" | "inches" => Self::Inches,
            "ft" | "'" | "foot" | "feet" => Self::Feet,
            "yd" | "yard" | "yards" => Self::Yards,
            "mi" | "mile" | "miles" => Self::Miles,
            _ => return Err(LengthError::UnsupportedUnit(s.to_owned())),
        })
    }
}
