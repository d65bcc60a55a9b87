// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Specifications and their validation against a model
//!
//! A specification groups facets into applicability (which entities it
//! talks about) and requirements (what those entities must satisfy).
//! Validation walks the model's enumerable universe once, then tests every
//! applicable entity against every requirement.

use crate::error::ValidationError;
use crate::facet::Facet;
use crate::reporter::{DiscardSink, Record, ReportSink};
use ids_lite_model::{EntityId, ModelAccessor};
use serde::{Deserialize, Serialize};

/// A single specification: applicability plus requirements
///
/// Authoring state is immutable once built; the derived fields (`status`,
/// applicable and failed entities) are populated by [`Specification::validate`]
/// and overwritten on re-validation.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Specification {
    /// Specification name, quoted in reports and errors
    pub name: String,
    /// Optional identifier for cross-referencing
    pub identifier: Option<String>,
    /// Optional prose description
    pub description: Option<String>,
    /// Optional authoring note
    pub instructions: Option<String>,
    applicability: Vec<Facet>,
    requirements: Vec<Facet>,
    #[serde(skip)]
    status: Option<bool>,
    #[serde(skip)]
    applicable_entities: Vec<EntityId>,
    #[serde(skip)]
    failed_entities: Vec<EntityId>,
}

impl Specification {
    /// Create a named, empty specification
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            identifier: None,
            description: None,
            instructions: None,
            applicability: Vec::new(),
            requirements: Vec::new(),
            status: None,
            applicable_entities: Vec::new(),
            failed_entities: Vec::new(),
        }
    }

    /// Set the identifier, builder style
    pub fn with_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = Some(identifier.into());
        self
    }

    /// Set the description, builder style
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Add a facet that selects the entities this specification applies to
    pub fn add_applicability(&mut self, facet: impl Into<Facet>) {
        self.applicability.push(facet.into());
    }

    /// Add a facet that applicable entities must satisfy
    pub fn add_requirement(&mut self, facet: impl Into<Facet>) {
        self.requirements.push(facet.into());
    }

    /// The applicability facets, in authoring order
    pub fn applicability(&self) -> &[Facet] {
        &self.applicability
    }

    /// The requirement facets, in authoring order
    pub fn requirements(&self) -> &[Facet] {
        &self.requirements
    }

    /// Overall verdict: `None` before validation, then whether every
    /// applicable entity passed every requirement
    pub fn status(&self) -> Option<bool> {
        self.status
    }

    /// Entities selected by the applicability facets, in the model's own
    /// enumeration order
    pub fn applicable_entities(&self) -> &[EntityId] {
        &self.applicable_entities
    }

    /// Applicable entities that failed at least one requirement, each at
    /// most once, in the order they were found
    pub fn failed_entities(&self) -> &[EntityId] {
        &self.failed_entities
    }

    /// Validate against a model, discarding per-facet records
    pub fn validate(&mut self, model: &dyn ModelAccessor) -> Result<bool, ValidationError> {
        self.validate_with(model, &mut DiscardSink)
    }

    /// Validate against a model, streaming one record per
    /// (entity, requirement facet) verdict into the sink
    ///
    /// All-or-nothing: a model access failure aborts this specification's
    /// pass, leaves it unvalidated and reports which entity triggered the
    /// failure. The caller guarantees the model is quiescent for the
    /// duration of the pass.
    pub fn validate_with(
        &mut self,
        model: &dyn ModelAccessor,
        sink: &mut dyn ReportSink,
    ) -> Result<bool, ValidationError> {
        self.status = None;
        self.applicable_entities.clear();
        self.failed_entities.clear();

        let mut applicable = Vec::new();
        for id in model.entities() {
            let mut selected = true;
            for facet in &self.applicability {
                match facet.matches(model, id) {
                    Ok(true) => {}
                    Ok(false) => {
                        selected = false;
                        break;
                    }
                    Err(source) => {
                        return Err(ValidationError::model(&self.name, id, source));
                    }
                }
            }
            if selected {
                applicable.push(id);
            }
        }

        let mut failed = Vec::new();
        for &id in &applicable {
            let mut already_failed = false;
            for facet in &self.requirements {
                let passed = facet
                    .matches(model, id)
                    .map_err(|source| ValidationError::model(&self.name, id, source))?;
                if !passed && !already_failed {
                    failed.push(id);
                    already_failed = true;
                }
                sink.record(Record {
                    specification: self.name.clone(),
                    entity: id,
                    facet: facet.describe(),
                    passed,
                });
            }
        }

        let status = failed.is_empty();
        log::debug!(
            "specification '{}': {} applicable, {} failed",
            self.name,
            applicable.len(),
            failed.len()
        );
        self.applicable_entities = applicable;
        self.failed_entities = failed;
        self.status = Some(status);
        Ok(status)
    }
}

/// Document metadata of a specification set
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SetInfo {
    /// Document title
    pub title: String,
    /// Optional copyright statement
    pub copyright: Option<String>,
    /// Optional document version
    pub version: Option<String>,
    /// Optional prose description
    pub description: Option<String>,
    /// Optional author contact
    pub author: Option<String>,
    /// Optional publication date
    pub date: Option<String>,
    /// Optional purpose statement
    pub purpose: Option<String>,
    /// Optional project milestone
    pub milestone: Option<String>,
}

impl Default for SetInfo {
    fn default() -> Self {
        Self {
            title: String::from("Untitled"),
            copyright: None,
            version: None,
            description: None,
            author: None,
            date: None,
            purpose: None,
            milestone: None,
        }
    }
}

/// A named collection of specifications validated as a unit
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SpecificationSet {
    /// Document metadata
    pub info: SetInfo,
    /// The specifications, in authoring order
    pub specifications: Vec<Specification>,
}

impl SpecificationSet {
    /// Create a set with a title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            info: SetInfo {
                title: title.into(),
                ..SetInfo::default()
            },
            specifications: Vec::new(),
        }
    }

    /// Add a specification
    pub fn add(&mut self, specification: Specification) {
        self.specifications.push(specification);
    }

    /// Validate every specification independently against one model
    ///
    /// A model access failure aborts only the specification that hit it;
    /// the others still validate. Outcomes are returned in specification
    /// order.
    pub fn validate_all(
        &mut self,
        model: &dyn ModelAccessor,
        sink: &mut dyn ReportSink,
    ) -> Vec<Result<bool, ValidationError>> {
        log::debug!(
            "validating {} specifications of '{}'",
            self.specifications.len(),
            self.info.title
        );
        self.specifications
            .iter_mut()
            .map(|specification| specification.validate_with(model, sink))
            .collect()
    }
}
