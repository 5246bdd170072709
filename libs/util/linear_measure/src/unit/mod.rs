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
use crate::{LengthUnit, MeasurementSystem};
use std::fmt::Debug;

// Metric
pub(crate) mod centimeters;
pub(crate) mod kilometers;
pub(crate) mod meters;
pub(crate) mod millimeters;

// Imperial
pub(crate) mod feet;
pub(crate) mod inches;
pub(crate) mod miles;
pub(crate) mod yards;

pub trait System: Copy + Debug + 'static {
    const MEASUREMENT_SYSTEM: MeasurementSystem;
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Metric;
impl System for Metric {
    const MEASUREMENT_SYSTEM: MeasurementSystem = MeasurementSystem::Metric;
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Imperial;
impl System for Imperial {
    const MEASUREMENT_SYSTEM: MeasurementSystem = MeasurementSystem::Imperial;
}

/// A unit of length named in the type system, tagged with the system it
/// belongs to.
pub trait LinearUnit: Copy + Debug + Default + Eq + 'static {
    type System: System;
    const LENGTH_UNIT: LengthUnit;
}
