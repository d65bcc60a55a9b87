// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Material facet
//!
//! Matches material assignments by name or category. Composite sets
//! contribute their items' own labels in addition to the labels of the
//! materials the items carry.

use crate::facet::FacetParam;
use crate::location::{union_scope, Location};
use ids_lite_model::{EntityId, ModelAccessor, Result};
use serde::{Deserialize, Serialize};

/// Matches material assignments on an entity
///
/// With no value set, matches any present material assignment. Location
/// `any` is the union of instance-level and type-level assignments.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MaterialFacet {
    /// Required material name or category
    pub value: Option<FacetParam>,
    /// Lookup scope
    pub location: Location,
    /// Authoring note, irrelevant to matching
    pub instructions: Option<String>,
}

impl MaterialFacet {
    /// Create a facet that matches any material assignment
    pub fn new() -> Self {
        Self::default()
    }

    /// Require a material name or category, builder style
    pub fn with_value(mut self, value: impl Into<FacetParam>) -> Self {
        self.value = Some(value.into());
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
        let assignments = union_scope(model, id, self.location, |m, e| m.materials(e))?;
        match &self.value {
            None => Ok(!assignments.is_empty()),
            Some(param) => Ok(assignments
                .iter()
                .flat_map(|assignment| assignment.labels())
                .any(|label| param.matches_str(label))),
        }
    }

    pub(crate) fn describe(&self) -> String {
        match &self.value {
            Some(value) => format!("a material identified as {value}"),
            None => String::from("a material assignment"),
        }
    }
}
