// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! IDS-Lite Engine - facet matching and specification validation
//!
//! This crate implements the core of an information-delivery-specification
//! checker: restrictions, the six facet kinds, and the specification
//! engine that aggregates per-entity verdicts into pass/fail results. It
//! reads the model exclusively through the `ids-lite-model` accessor
//! traits and never mutates it; any backend implementing those traits can
//! be validated.
//!
//! # Architecture
//!
//! - [`Restriction`] - enumeration/bounds/pattern conditions, validated at
//!   construction, total at evaluation
//! - [`Facet`] - the tagged variant type with one evaluator per kind:
//!   [`EntityFacet`], [`AttributeFacet`], [`ClassificationFacet`],
//!   [`PropertyFacet`], [`MaterialFacet`], [`PartOfFacet`]
//! - [`Specification`] / [`SpecificationSet`] - applicability/requirement
//!   grouping and pass/fail aggregation
//! - [`ReportSink`] - consumer of per-facet verdict records
//!
//! # Example
//!
//! ```ignore
//! use ids_lite_engine::{AttributeFacet, EntityFacet, Specification};
//!
//! let mut spec = Specification::new("Walls are named");
//! spec.add_applicability(EntityFacet::new("IfcWall"));
//! spec.add_requirement(AttributeFacet::new("Name"));
//! let status = spec.validate(&model)?;
//! ```
//!
//! Facet evaluation is a pure function of (facet, entity, model snapshot).
//! Independent specifications may run against the same model from parallel
//! workers without coordination, provided no writer touches the model
//! during the pass.

pub mod attribute;
pub mod classification;
pub mod entity;
pub mod error;
pub mod facet;
pub mod location;
pub mod material;
pub mod partof;
pub mod property;
pub mod reporter;
pub mod restriction;
pub mod specification;

// Re-export all public types
pub use attribute::AttributeFacet;
pub use classification::ClassificationFacet;
pub use entity::EntityFacet;
pub use error::{ConfigurationError, ValidationError};
pub use facet::{Facet, FacetParam};
pub use location::Location;
pub use material::MaterialFacet;
pub use partof::PartOfFacet;
pub use property::PropertyFacet;
pub use reporter::{DiscardSink, LogReporter, Record, ReportSink, SimpleReporter};
pub use restriction::{BaseType, Bound, Pattern, Restriction};
pub use specification::{SetInfo, Specification, SpecificationSet};
