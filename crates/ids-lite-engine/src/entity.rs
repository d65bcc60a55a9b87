// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Entity facet
//!
//! Matches an entity's schema class, and optionally its resolved
//! predefined type.

use crate::facet::FacetParam;
use ids_lite_model::{EntityId, ModelAccessor, Result, TypedValue};
use serde::{Deserialize, Serialize};

/// The reserved enumerant that redirects to the free-text type fields.
/// Never matched directly.
const USERDEFINED: &str = "USERDEFINED";

/// The schema's "no value" enumerant. Treated as unset so type values can
/// be inherited past it.
const NOTDEFINED: &str = "NOTDEFINED";

/// Matches the entity's schema class and predefined type
///
/// Class matching is exact: an entity of a subtype of the named class does
/// not match. A literal class name compares case-insensitively; a
/// restriction is evaluated against the schema's own capitalization.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EntityFacet {
    /// Required schema class
    pub name: FacetParam,
    /// Required predefined type, resolved through the override/inheritance
    /// rules before comparison
    pub predefined_type: Option<FacetParam>,
    /// Authoring note, irrelevant to matching
    pub instructions: Option<String>,
}

impl EntityFacet {
    /// Create an entity facet for a class name
    pub fn new(name: impl Into<FacetParam>) -> Self {
        Self {
            name: name.into(),
            predefined_type: None,
            instructions: None,
        }
    }

    /// Require a predefined type, builder style
    pub fn with_predefined_type(mut self, predefined_type: impl Into<FacetParam>) -> Self {
        self.predefined_type = Some(predefined_type.into());
        self
    }

    /// Attach an authoring note, builder style
    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = Some(instructions.into());
        self
    }

    pub(crate) fn matches(&self, model: &dyn ModelAccessor, id: EntityId) -> Result<bool> {
        let Some(class) = model.class_of(id) else {
            return Ok(false);
        };
        let name_ok = match &self.name {
            FacetParam::Literal(TypedValue::String(name)) => class.matches(name),
            FacetParam::Literal(_) => false,
            FacetParam::Restriction(restriction) => restriction.satisfies_str(class.name()),
        };
        if !name_ok {
            return Ok(false);
        }

        let Some(target) = &self.predefined_type else {
            return Ok(true);
        };
        // USERDEFINED as a target signals "look at free text instead";
        // the free text is reached through resolution, never the keyword.
        if target.as_literal_str() == Some(USERDEFINED) {
            return Ok(false);
        }
        match resolve_predefined_type(model, id) {
            Some(resolved) => Ok(target.matches_str(&resolved)),
            None => Ok(false),
        }
    }

    pub(crate) fn describe(&self) -> String {
        let mut out = format!("an entity of class {}", self.name);
        if let Some(predefined_type) = &self.predefined_type {
            out.push_str(&format!(" with predefined type {predefined_type}"));
        }
        out
    }
}

/// Resolve an entity's effective predefined type
///
/// Priority: the entity's own recognized enumerant; for USERDEFINED, the
/// free-text object type (element type on type definitions); otherwise the
/// associated type entity's resolved value. NOTDEFINED counts as unset, so
/// an occurrence's own enumerant always overrides its type's.
fn resolve_predefined_type(model: &dyn ModelAccessor, id: EntityId) -> Option<String> {
    match model.predefined_type(id).as_deref() {
        Some(USERDEFINED) => {
            if model.is_type_entity(id) {
                model.element_type(id)
            } else {
                model.object_type(id)
            }
        }
        Some(NOTDEFINED) | None => model
            .type_of(id)
            .and_then(|type_id| resolve_predefined_type(model, type_id)),
        Some(value) => Some(value.to_string()),
    }
}
