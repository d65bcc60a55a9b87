// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Facet variants and dispatch
//!
//! A facet is a single typed condition evaluated against a model entity.
//! The six variants share one evaluation contract; dispatch is an explicit
//! match over the tagged variant type.

use crate::attribute::AttributeFacet;
use crate::classification::ClassificationFacet;
use crate::entity::EntityFacet;
use crate::material::MaterialFacet;
use crate::partof::PartOfFacet;
use crate::property::PropertyFacet;
use crate::restriction::Restriction;
use ids_lite_model::{EntityId, ModelAccessor, Result, TypedValue};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A facet match field: either a literal value or a restriction
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum FacetParam {
    /// A literal scalar, compared against candidates of the same kind
    Literal(TypedValue),
    /// A restriction evaluated against the candidate
    Restriction(Restriction),
}

impl FacetParam {
    /// Whether a typed candidate matches this field
    ///
    /// Literal comparison is strict per kind: strings case-sensitively,
    /// numbers numerically across integer/float, booleans exactly. There
    /// is no implicit casting between strings and numbers.
    pub fn matches_value(&self, candidate: &TypedValue) -> bool {
        match self {
            FacetParam::Literal(literal) => match (literal, candidate) {
                (TypedValue::String(a), TypedValue::String(b))
                | (TypedValue::String(a), TypedValue::Enum(b)) => a == b,
                (TypedValue::Bool(a), TypedValue::Bool(b)) => a == b,
                (
                    TypedValue::Integer(_) | TypedValue::Float(_),
                    TypedValue::Integer(_) | TypedValue::Float(_),
                ) => literal.as_float() == candidate.as_float(),
                _ => false,
            },
            FacetParam::Restriction(restriction) => restriction.satisfies(candidate),
        }
    }

    /// Whether a plain string candidate matches this field
    pub fn matches_str(&self, candidate: &str) -> bool {
        match self {
            FacetParam::Literal(TypedValue::String(s)) => s == candidate,
            FacetParam::Literal(_) => false,
            FacetParam::Restriction(restriction) => restriction.satisfies_str(candidate),
        }
    }

    /// The literal string, if this field is one
    pub fn as_literal_str(&self) -> Option<&str> {
        match self {
            FacetParam::Literal(TypedValue::String(s)) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for FacetParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FacetParam::Literal(value) => write!(f, "'{value}'"),
            FacetParam::Restriction(restriction) => write!(f, "{restriction}"),
        }
    }
}

impl From<&str> for FacetParam {
    fn from(s: &str) -> Self {
        FacetParam::Literal(TypedValue::String(s.to_string()))
    }
}

impl From<String> for FacetParam {
    fn from(s: String) -> Self {
        FacetParam::Literal(TypedValue::String(s))
    }
}

impl From<f64> for FacetParam {
    fn from(f: f64) -> Self {
        FacetParam::Literal(TypedValue::Float(f))
    }
}

impl From<i64> for FacetParam {
    fn from(i: i64) -> Self {
        FacetParam::Literal(TypedValue::Integer(i))
    }
}

impl From<bool> for FacetParam {
    fn from(b: bool) -> Self {
        FacetParam::Literal(TypedValue::Bool(b))
    }
}

impl From<Restriction> for FacetParam {
    fn from(restriction: Restriction) -> Self {
        FacetParam::Restriction(restriction)
    }
}

/// A single typed condition evaluated against a model entity
///
/// Constructed once at authoring time and immutable thereafter. A facet
/// with a restriction in a match field requires that all simultaneously
/// matched targets satisfy the paired condition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Facet {
    /// Match the entity's schema class and predefined type
    Entity(EntityFacet),
    /// Match an attribute's presence or value
    Attribute(AttributeFacet),
    /// Match classification references
    Classification(ClassificationFacet),
    /// Match a property inside a property set
    Property(PropertyFacet),
    /// Match material assignments
    Material(MaterialFacet),
    /// Match membership in an aggregation, group or system
    PartOf(PartOfFacet),
}

impl Facet {
    /// Evaluate this facet against one entity
    ///
    /// Pure with respect to the model: never mutates, and only structural
    /// accessor failures surface as errors.
    pub fn matches(&self, model: &dyn ModelAccessor, entity: EntityId) -> Result<bool> {
        match self {
            Facet::Entity(facet) => facet.matches(model, entity),
            Facet::Attribute(facet) => facet.matches(model, entity),
            Facet::Classification(facet) => facet.matches(model, entity),
            Facet::Property(facet) => facet.matches(model, entity),
            Facet::Material(facet) => facet.matches(model, entity),
            Facet::PartOf(facet) => facet.matches(model, entity),
        }
    }

    /// Human-readable sentence of what this facet checks, for reports
    pub fn describe(&self) -> String {
        match self {
            Facet::Entity(facet) => facet.describe(),
            Facet::Attribute(facet) => facet.describe(),
            Facet::Classification(facet) => facet.describe(),
            Facet::Property(facet) => facet.describe(),
            Facet::Material(facet) => facet.describe(),
            Facet::PartOf(facet) => facet.describe(),
        }
    }
}

impl From<EntityFacet> for Facet {
    fn from(facet: EntityFacet) -> Self {
        Facet::Entity(facet)
    }
}

impl From<AttributeFacet> for Facet {
    fn from(facet: AttributeFacet) -> Self {
        Facet::Attribute(facet)
    }
}

impl From<ClassificationFacet> for Facet {
    fn from(facet: ClassificationFacet) -> Self {
        Facet::Classification(facet)
    }
}

impl From<PropertyFacet> for Facet {
    fn from(facet: PropertyFacet) -> Self {
        Facet::Property(facet)
    }
}

impl From<MaterialFacet> for Facet {
    fn from(facet: MaterialFacet) -> Self {
        Facet::Material(facet)
    }
}

impl From<PartOfFacet> for Facet {
    fn from(facet: PartOfFacet) -> Self {
        Facet::PartOf(facet)
    }
}
