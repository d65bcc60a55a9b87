// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Property facet
//!
//! Matches a property inside a named property set, with optional value and
//! measure conditions. Occurrence property sets shadow type property sets
//! of the same name at set granularity.

use crate::facet::FacetParam;
use crate::location::{type_scope_target, Location};
use ids_lite_model::{
    EntityId, MeasureKind, ModelAccessor, PropertySet, PropertyValue, Result, TypedValue,
};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// Matches a property resolved through property-set and property name
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PropertyFacet {
    /// Property-set name; a restriction may match several sets, and every
    /// matched set must contain a passing property
    pub property_set: FacetParam,
    /// Property name within the set; restrictions are conjunctive across
    /// all matched properties
    pub name: FacetParam,
    /// Required value; absent means "present, non-null, non-empty"
    pub value: Option<FacetParam>,
    /// Required measure kind; implies SI unit conversion before comparison
    pub measure: Option<MeasureKind>,
    /// Lookup scope
    pub location: Location,
    /// Authoring note, irrelevant to matching
    pub instructions: Option<String>,
}

impl PropertyFacet {
    /// Create a property facet for a set and property name
    pub fn new(property_set: impl Into<FacetParam>, name: impl Into<FacetParam>) -> Self {
        Self {
            property_set: property_set.into(),
            name: name.into(),
            value: None,
            measure: None,
            location: Location::default(),
            instructions: None,
        }
    }

    /// Require a value, builder style
    pub fn with_value(mut self, value: impl Into<FacetParam>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Require a measure kind, builder style
    ///
    /// The candidate property must declare exactly this measure; its value
    /// is converted to SI base units before comparison, and the facet's
    /// value condition is expressed in SI units.
    pub fn with_measure(mut self, measure: MeasureKind) -> Self {
        self.measure = Some(measure);
        self
    }

    /// Set the lookup scope, builder style
    pub fn at(mut self, location: Location) -> Self {
        self.location = location;
        self
    }

    /// Attach an authoring note, builder style
    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = Some(instructions.into());
        self
    }

    pub(crate) fn matches(&self, model: &dyn ModelAccessor, id: EntityId) -> Result<bool> {
        let sets = self.scoped_sets(model, id)?;
        let matched: Vec<&PropertySet> = sets
            .iter()
            .filter(|pset| self.property_set.matches_str(&pset.name))
            .collect();
        if matched.is_empty() {
            return Ok(false);
        }
        // Every matched set must hold a passing property; every matched
        // property must pass.
        for pset in matched {
            let properties: Vec<&PropertyValue> = pset
                .properties
                .iter()
                .filter(|prop| self.name.matches_str(&prop.name))
                .collect();
            if properties.is_empty() {
                return Ok(false);
            }
            for property in properties {
                if !self.check_property(model, property) {
                    return Ok(false);
                }
            }
        }
        Ok(true)
    }

    /// Property sets visible at this facet's location
    ///
    /// For `any`, an occurrence set hides a type set of the same name
    /// entirely; sets do not merge per property.
    fn scoped_sets(&self, model: &dyn ModelAccessor, id: EntityId) -> Result<Vec<PropertySet>> {
        match self.location {
            Location::Instance => model.property_sets(id),
            Location::Type => match type_scope_target(model, id) {
                Some(type_id) => model.property_sets(type_id),
                None => Ok(Vec::new()),
            },
            Location::Any => {
                let mut sets = model.property_sets(id)?;
                if let Some(type_id) = model.type_of(id) {
                    let shadowed: FxHashSet<String> =
                        sets.iter().map(|pset| pset.name.clone()).collect();
                    for pset in model.property_sets(type_id)? {
                        if !shadowed.contains(&pset.name) {
                            sets.push(pset);
                        }
                    }
                }
                Ok(sets)
            }
        }
    }

    fn check_property(&self, model: &dyn ModelAccessor, property: &PropertyValue) -> bool {
        if let Some(kind) = self.measure {
            // The declared measure must match exactly; only then does the
            // value convert into SI base units.
            if property.measure != Some(kind) {
                return false;
            }
            let Some(raw) = property.value.as_float() else {
                return false;
            };
            let si = raw * model.unit_scale(kind);
            return match &self.value {
                Some(param) => param.matches_value(&TypedValue::Float(si)),
                None => true,
            };
        }

        match &self.value {
            None => property.value.is_present(),
            Some(param) => match &property.value {
                TypedValue::Object(_)
                | TypedValue::List(_)
                | TypedValue::Null
                | TypedValue::Derived => false,
                value => param.matches_value(value),
            },
        }
    }

    pub(crate) fn describe(&self) -> String {
        let mut out = format!("property {} in set {}", self.name, self.property_set);
        if let Some(value) = &self.value {
            out.push_str(&format!(" shall be {value}"));
            if let Some(kind) = self.measure {
                out.push_str(&format!(" {}", kind.si_unit()));
            }
        } else {
            out.push_str(" shall be provided");
        }
        out
    }
}
