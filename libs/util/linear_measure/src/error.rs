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
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum LengthError {
    /// The Unknown sentinel, an undecodable unit code, or unrecognised unit text.
    #[error("unsupported length unit: {0}")]
    UnsupportedUnit(String),

    #[error("attempted to divide a length by zero")]
    DivideByZero,

    /// The result does not fit in the decimal representation.
    #[error("length arithmetic overflowed the decimal range")]
    Overflow,

    #[error("{0} cannot be represented as an exact decimal magnitude")]
    Unrepresentable(f64),

    #[error("invalid length: {0:?}")]
    InvalidLength(String),
}
