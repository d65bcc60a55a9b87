// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! SI prefix handling for unit assignment

use ids_lite_model::MeasureKind;

/// SI unit prefix
///
/// Covers the full prefix range a unit assignment can declare.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SiPrefix {
    Exa,
    Peta,
    Tera,
    Giga,
    Mega,
    Kilo,
    Hecto,
    Deca,
    /// No prefix (base unit)
    None,
    Deci,
    Centi,
    Milli,
    Micro,
    Nano,
    Pico,
    Femto,
    Atto,
}

impl SiPrefix {
    /// Linear scale factor of this prefix
    pub fn factor(&self) -> f64 {
        match self {
            SiPrefix::Exa => 1e18,
            SiPrefix::Peta => 1e15,
            SiPrefix::Tera => 1e12,
            SiPrefix::Giga => 1e9,
            SiPrefix::Mega => 1e6,
            SiPrefix::Kilo => 1e3,
            SiPrefix::Hecto => 1e2,
            SiPrefix::Deca => 1e1,
            SiPrefix::None => 1.0,
            SiPrefix::Deci => 1e-1,
            SiPrefix::Centi => 1e-2,
            SiPrefix::Milli => 1e-3,
            SiPrefix::Micro => 1e-6,
            SiPrefix::Nano => 1e-9,
            SiPrefix::Pico => 1e-12,
            SiPrefix::Femto => 1e-15,
            SiPrefix::Atto => 1e-18,
        }
    }
}

/// Conversion factor to SI base units for a prefixed unit of `kind`
///
/// The prefix scales each length dimension the measure carries, so a
/// milli-prefixed area unit converts by (1e-3)².
pub fn si_factor(prefix: SiPrefix, kind: MeasureKind) -> f64 {
    prefix.factor().powi(kind.dimension_exponent())
}

/// Common unit scales for reference
pub mod scales {
    /// Metres to metres (identity)
    pub const METRE: f64 = 1.0;
    /// Millimetres to metres
    pub const MILLIMETRE: f64 = 0.001;
    /// Centimetres to metres
    pub const CENTIMETRE: f64 = 0.01;
    /// Kilometres to metres
    pub const KILOMETRE: f64 = 1000.0;
    /// Inches to metres
    pub const INCH: f64 = 0.0254;
    /// Feet to metres
    pub const FOOT: f64 = 0.3048;
}
