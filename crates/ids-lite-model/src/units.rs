// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Measure kinds and SI unit scales

use serde::{Deserialize, Serialize};

/// Measure kinds a property value can declare
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MeasureKind {
    /// Linear measurement
    Length,
    /// Area measurement
    Area,
    /// Volume measurement
    Volume,
    /// Mass measurement
    Mass,
    /// Time measurement
    Time,
    /// Count
    Count,
}

impl MeasureKind {
    /// Get the SI base unit symbol for this measure kind
    pub fn si_unit(&self) -> &'static str {
        match self {
            MeasureKind::Length => "m",
            MeasureKind::Area => "m²",
            MeasureKind::Volume => "m³",
            MeasureKind::Mass => "kg",
            MeasureKind::Time => "s",
            MeasureKind::Count => "",
        }
    }

    /// Power the length dimension carries in this measure
    ///
    /// A milli prefix on an area unit scales by (1e-3)², not 1e-3.
    pub fn dimension_exponent(&self) -> i32 {
        match self {
            MeasureKind::Area => 2,
            MeasureKind::Volume => 3,
            _ => 1,
        }
    }
}

/// Conversion factors from model units to SI base units
///
/// One factor per measure kind; a model authored in millimetres carries
/// `length = 0.001`. Missing assignments default to 1.0 (already SI).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct UnitScales {
    /// Length unit to metres
    pub length: f64,
    /// Area unit to square metres
    pub area: f64,
    /// Volume unit to cubic metres
    pub volume: f64,
    /// Mass unit to kilograms
    pub mass: f64,
    /// Time unit to seconds
    pub time: f64,
}

impl Default for UnitScales {
    fn default() -> Self {
        Self {
            length: 1.0,
            area: 1.0,
            volume: 1.0,
            mass: 1.0,
            time: 1.0,
        }
    }
}

impl UnitScales {
    /// Get the SI conversion factor for a measure kind
    pub fn get(&self, kind: MeasureKind) -> f64 {
        match kind {
            MeasureKind::Length => self.length,
            MeasureKind::Area => self.area,
            MeasureKind::Volume => self.volume,
            MeasureKind::Mass => self.mass,
            MeasureKind::Time => self.time,
            MeasureKind::Count => 1.0,
        }
    }

    /// Set the SI conversion factor for a measure kind
    pub fn set(&mut self, kind: MeasureKind, factor: f64) {
        match kind {
            MeasureKind::Length => self.length = factor,
            MeasureKind::Area => self.area = factor,
            MeasureKind::Volume => self.volume = factor,
            MeasureKind::Mass => self.mass = factor,
            MeasureKind::Time => self.time = factor,
            MeasureKind::Count => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_identity() {
        let scales = UnitScales::default();
        assert_eq!(scales.get(MeasureKind::Length), 1.0);
        assert_eq!(scales.get(MeasureKind::Count), 1.0);
    }

    #[test]
    fn dimension_exponents() {
        assert_eq!(MeasureKind::Length.dimension_exponent(), 1);
        assert_eq!(MeasureKind::Area.dimension_exponent(), 2);
        assert_eq!(MeasureKind::Volume.dimension_exponent(), 3);
    }
}
