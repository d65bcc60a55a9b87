// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Property sets attached to model entities

use crate::{MeasureKind, TypedValue};
use serde::{Deserialize, Serialize};

/// A single property with a typed value and optional declared measure
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PropertyValue {
    /// Property name
    pub name: String,
    /// Property value
    pub value: TypedValue,
    /// Declared measure kind (if the value is a physical quantity)
    pub measure: Option<MeasureKind>,
}

impl PropertyValue {
    /// Create a new property
    pub fn new(name: impl Into<String>, value: impl Into<TypedValue>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            measure: None,
        }
    }

    /// Create a property carrying a measured quantity
    ///
    /// The value is stored in the model's own units; consumers convert to
    /// SI through the model's unit scales.
    pub fn with_measure(
        name: impl Into<String>,
        value: f64,
        measure: MeasureKind,
    ) -> Self {
        Self {
            name: name.into(),
            value: TypedValue::Float(value),
            measure: Some(measure),
        }
    }
}

/// A named property set containing multiple properties
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PropertySet {
    /// Property set name (e.g., "Pset_WallCommon")
    pub name: String,
    /// Properties in this set
    pub properties: Vec<PropertyValue>,
}

impl PropertySet {
    /// Create a new property set
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: Vec::new(),
        }
    }

    /// Add a property to this set
    pub fn add(&mut self, property: PropertyValue) {
        self.properties.push(property);
    }

    /// Add a property, builder style
    pub fn with(mut self, property: PropertyValue) -> Self {
        self.properties.push(property);
        self
    }

    /// Get a property by name
    pub fn get(&self, name: &str) -> Option<&PropertyValue> {
        self.properties.iter().find(|p| p.name == name)
    }
}
