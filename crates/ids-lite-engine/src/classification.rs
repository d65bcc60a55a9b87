// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Classification facet
//!
//! Matches classification references by identifier and/or system name.
//! An identifier search is hierarchical: a coarse code matches any of its
//! finer subdivisions through the reference's ancestor chain.

use crate::facet::FacetParam;
use crate::location::{union_scope, Location};
use ids_lite_model::{EntityId, ModelAccessor, Result};
use serde::{Deserialize, Serialize};

/// Matches classification references on an entity
///
/// With no fields set, matches any present classification reference.
/// `instance` and `type` scopes examine one side only; `any` is the union
/// of both sides, since multiple distinct references may coexist.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassificationFacet {
    /// Required reference identifier (hierarchical match)
    pub value: Option<FacetParam>,
    /// Required root classification system name
    pub system: Option<FacetParam>,
    /// Lookup scope
    pub location: Location,
    /// Authoring note, irrelevant to matching
    pub instructions: Option<String>,
}

impl ClassificationFacet {
    /// Create a facet that matches any classification reference
    pub fn new() -> Self {
        Self::default()
    }

    /// Require a reference identifier, builder style
    pub fn with_value(mut self, value: impl Into<FacetParam>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Require a system name, builder style
    pub fn with_system(mut self, system: impl Into<FacetParam>) -> Self {
        self.system = Some(system.into());
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
        let references = union_scope(model, id, self.location, |m, e| m.classifications(e))?;
        if self.value.is_none() && self.system.is_none() {
            return Ok(!references.is_empty());
        }
        // Both conditions must hold on the same reference.
        Ok(references.iter().any(|reference| {
            let value_ok = self.value.as_ref().map_or(true, |param| {
                reference.identifiers().any(|code| param.matches_str(code))
            });
            let system_ok = self.system.as_ref().map_or(true, |param| {
                reference
                    .system
                    .as_deref()
                    .is_some_and(|name| param.matches_str(name))
            });
            value_ok && system_ok
        }))
    }

    pub(crate) fn describe(&self) -> String {
        let mut out = String::from("a classification reference");
        if let Some(value) = &self.value {
            out.push_str(&format!(" with identifier {value}"));
        }
        if let Some(system) = &self.system {
            out.push_str(&format!(" in system {system}"));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::restriction::Restriction;
    use ids_lite_graph::MemoryGraph;
    use ids_lite_model::ClassificationRef;

    /// The fixture mirrors a "Foobar" classification with references
    /// 1, 11 (lightweight, no ancestor chain) and 22 under 2 (full chain).
    fn fixture() -> (MemoryGraph, EntityId, EntityId, EntityId, EntityId) {
        let mut graph = MemoryGraph::new();
        let bare = graph.add_entity("IfcWall");
        let one = graph.add_entity("IfcWall");
        graph.add_classification(one, ClassificationRef::new("1", "Foobar"));
        let eleven = graph.add_entity("IfcWall");
        graph.add_classification(eleven, ClassificationRef::new("11", "Foobar"));
        let twenty_two = graph.add_entity("IfcWall");
        graph.add_classification(
            twenty_two,
            ClassificationRef::new("22", "Foobar").with_ancestors(vec!["2".to_string()]),
        );
        (graph, bare, one, eleven, twenty_two)
    }

    #[test]
    fn no_fields_matches_any_reference() {
        let (graph, bare, one, ..) = fixture();
        let facet = ClassificationFacet::new();
        assert!(!facet.matches(&graph, bare).unwrap());
        assert!(facet.matches(&graph, one).unwrap());
    }

    #[test]
    fn identifier_matches_hierarchically() {
        let (graph, _, one, _, twenty_two) = fixture();
        assert!(ClassificationFacet::new()
            .with_value("1")
            .matches(&graph, one)
            .unwrap());
        // "2" matches its finer subdivision "22" through the ancestor chain.
        assert!(ClassificationFacet::new()
            .with_value("2")
            .matches(&graph, twenty_two)
            .unwrap());
    }

    #[test]
    fn system_matches_regardless_of_reference_style() {
        let (graph, bare, one, eleven, twenty_two) = fixture();
        let facet = ClassificationFacet::new().with_system("Foobar");
        assert!(!facet.matches(&graph, bare).unwrap());
        assert!(facet.matches(&graph, one).unwrap());
        assert!(facet.matches(&graph, eleven).unwrap());
        assert!(facet.matches(&graph, twenty_two).unwrap());
    }

    #[test]
    fn value_and_system_are_conjunctive() {
        let (graph, _, one, eleven, _) = fixture();
        let facet = ClassificationFacet::new().with_system("Foobar").with_value("1");
        assert!(facet.matches(&graph, one).unwrap());
        // The lightweight "11" reference has no ancestor chain to "1".
        assert!(!facet.matches(&graph, eleven).unwrap());
    }

    #[test]
    fn restrictions_on_value_and_system() {
        let (graph, bare, one, eleven, twenty_two) = fixture();
        let value = ClassificationFacet::new()
            .with_value(Restriction::pattern("1.*").unwrap());
        assert!(value.matches(&graph, one).unwrap());
        assert!(value.matches(&graph, eleven).unwrap());
        assert!(!value.matches(&graph, twenty_two).unwrap());

        let system = ClassificationFacet::new()
            .with_system(Restriction::pattern("Foo.*").unwrap());
        assert!(!system.matches(&graph, bare).unwrap());
        assert!(system.matches(&graph, one).unwrap());
    }

    #[test]
    fn location_scoping_unions_instance_and_type() {
        let mut graph = MemoryGraph::new();
        let wall = graph.add_entity("IfcWall");
        let wall_type = graph.add_type("IfcWallType");
        graph.assign_type(wall, wall_type);
        graph.add_classification(
            wall,
            ClassificationRef::new("11", "Foobar").with_ancestors(vec!["1".to_string()]),
        );
        graph.add_classification(
            wall_type,
            ClassificationRef::new("22", "Foobar").with_ancestors(vec!["2".to_string()]),
        );

        // Instance scope sees only direct references, even on a type.
        let instance = ClassificationFacet::new().with_value("11").at(Location::Instance);
        assert!(instance.matches(&graph, wall).unwrap());
        assert!(!instance.matches(&graph, wall_type).unwrap());

        // Type scope resolves to the associated type entity, or to the
        // entity itself when it already is one.
        let type_scope = ClassificationFacet::new().with_value("22").at(Location::Type);
        assert!(type_scope.matches(&graph, wall).unwrap());
        assert!(type_scope.matches(&graph, wall_type).unwrap());
        let type_own = ClassificationFacet::new().with_value("11").at(Location::Type);
        assert!(!type_own.matches(&graph, wall).unwrap());
        assert!(!type_own.matches(&graph, wall_type).unwrap());

        // Any is the union: both sides' references remain visible.
        let any_own = ClassificationFacet::new().with_value("11");
        assert!(any_own.matches(&graph, wall).unwrap());
        assert!(!any_own.matches(&graph, wall_type).unwrap());
        let any_inherited = ClassificationFacet::new().with_value("22");
        assert!(any_inherited.matches(&graph, wall).unwrap());
        assert!(any_inherited.matches(&graph, wall_type).unwrap());
    }
}
