// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Attribute facet
//!
//! Matches the presence or value of a schema attribute, scoped by
//! location. An unset attribute, a null and an empty string are
//! indistinguishable and never match.

use crate::facet::FacetParam;
use crate::location::{type_scope_target, Location};
use ids_lite_model::{EntityId, ModelAccessor, Result, TypedValue};
use serde::{Deserialize, Serialize};

/// Matches an attribute's presence or value
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AttributeFacet {
    /// Attribute name; a restriction may resolve to several names, and
    /// every resolved attribute must pass
    pub name: FacetParam,
    /// Required value; absent means "present and non-empty"
    pub value: Option<FacetParam>,
    /// Lookup scope
    pub location: Location,
    /// Authoring note, irrelevant to matching
    pub instructions: Option<String>,
}

impl AttributeFacet {
    /// Create an attribute facet for a name
    pub fn new(name: impl Into<FacetParam>) -> Self {
        Self {
            name: name.into(),
            value: None,
            location: Location::default(),
            instructions: None,
        }
    }

    /// Require a value, builder style
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
        let names = self.resolve_names(model, id);
        if names.is_empty() {
            return Ok(false);
        }
        // All resolved names must pass, not any.
        Ok(names.iter().all(|name| self.check_one(model, id, name)))
    }

    /// The attribute names this facet inspects on the given entity
    ///
    /// A literal names exactly one attribute; a restriction names every
    /// schema attribute of the scoped entity it matches.
    fn resolve_names(&self, model: &dyn ModelAccessor, id: EntityId) -> Vec<String> {
        match &self.name {
            FacetParam::Literal(TypedValue::String(name)) => vec![name.clone()],
            FacetParam::Literal(_) => Vec::new(),
            FacetParam::Restriction(restriction) => {
                let scoped = match self.location {
                    Location::Type => type_scope_target(model, id),
                    _ => Some(id),
                };
                scoped
                    .map(|entity| model.attribute_names(entity))
                    .unwrap_or_default()
                    .into_iter()
                    .filter(|name| restriction.satisfies_str(name))
                    .collect()
            }
        }
    }

    fn check_one(&self, model: &dyn ModelAccessor, id: EntityId, name: &str) -> bool {
        let value = match self.location {
            Location::Instance => model.attribute(id, name),
            Location::Type => type_scope_target(model, id)
                .and_then(|type_id| model.attribute(type_id, name)),
            Location::Any => {
                // The occurrence's value wins when present; otherwise fall
                // back to the type's.
                let own = model.attribute(id, name);
                if own.as_ref().is_some_and(TypedValue::is_present) {
                    own
                } else {
                    model
                        .type_of(id)
                        .and_then(|type_id| model.attribute(type_id, name))
                        .or(own)
                }
            }
        };

        match (&self.value, value) {
            (None, Some(value)) => value.is_present(),
            (Some(param), Some(value)) => match value {
                // Objects, selects, collections and derived attributes
                // carry no comparable payload.
                TypedValue::Object(_)
                | TypedValue::List(_)
                | TypedValue::Null
                | TypedValue::Derived => false,
                value => param.matches_value(&value),
            },
            (_, None) => false,
        }
    }

    pub(crate) fn describe(&self) -> String {
        match &self.value {
            Some(value) => format!("attribute {} shall be {value}", self.name),
            None => format!("attribute {} shall be provided", self.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::restriction::{BaseType, Restriction};
    use ids_lite_graph::MemoryGraph;

    #[test]
    fn missing_null_and_empty_never_match() {
        let mut graph = MemoryGraph::new();
        let wall = graph.add_entity("IfcWall");
        graph.declare_attributes(wall, &["Name"]);

        assert!(!AttributeFacet::new("Foobar").matches(&graph, wall).unwrap());
        let facet = AttributeFacet::new("Name");
        assert!(!facet.matches(&graph, wall).unwrap());
        graph.set_attribute(wall, "Name", "");
        assert!(!facet.matches(&graph, wall).unwrap());
        graph.set_attribute(wall, "Name", "Foobar");
        assert!(facet.matches(&graph, wall).unwrap());
    }

    #[test]
    fn zero_is_a_value_and_objects_are_truthy() {
        let mut graph = MemoryGraph::new();
        let conversion = graph.add_entity("IfcMapConversion");
        graph.set_attribute(conversion, "Eastings", 0i64);
        assert!(AttributeFacet::new("Eastings").matches(&graph, conversion).unwrap());

        let wall = graph.add_entity("IfcWall");
        graph.declare_attributes(wall, &["OwnerHistory"]);
        let facet = AttributeFacet::new("OwnerHistory");
        assert!(!facet.matches(&graph, wall).unwrap());
        let history = graph.add_entity("IfcOwnerHistory");
        graph.set_attribute(wall, "OwnerHistory", TypedValue::Object(history));
        assert!(facet.matches(&graph, wall).unwrap());
    }

    #[test]
    fn empty_collections_are_absent() {
        let mut graph = MemoryGraph::new();
        let style = graph.add_entity("IfcSurfaceStyle");
        graph.set_attribute(style, "Styles", TypedValue::List(vec![]));
        assert!(!AttributeFacet::new("Styles").matches(&graph, style).unwrap());
        graph.set_attribute(
            style,
            "Styles",
            TypedValue::List(vec![TypedValue::Integer(1)]),
        );
        assert!(AttributeFacet::new("Styles").matches(&graph, style).unwrap());
    }

    #[test]
    fn literal_values_match_case_sensitively_without_casting() {
        let mut graph = MemoryGraph::new();
        let wall = graph.add_entity("IfcWall");
        graph.set_attribute(wall, "Name", "Foobar");

        let facet = AttributeFacet::new("Name").with_value("Foobar");
        assert!(facet.matches(&graph, wall).unwrap());
        graph.set_attribute(wall, "Name", "foobar");
        assert!(!facet.matches(&graph, wall).unwrap());

        // No implicit casting between strings and numbers.
        let conversion = graph.add_entity("IfcMapConversion");
        graph.set_attribute(conversion, "Eastings", 42i64);
        let as_string = AttributeFacet::new("Eastings").with_value("42");
        assert!(!as_string.matches(&graph, conversion).unwrap());
    }

    #[test]
    fn value_checks_fail_on_objects() {
        let mut graph = MemoryGraph::new();
        let wall = graph.add_entity("IfcWall");
        let history = graph.add_entity("IfcOwnerHistory");
        graph.set_attribute(wall, "OwnerHistory", TypedValue::Object(history));
        let facet = AttributeFacet::new("OwnerHistory").with_value("Foobar");
        assert!(!facet.matches(&graph, wall).unwrap());
    }

    #[test]
    fn typed_values_need_typed_restrictions() {
        let mut graph = MemoryGraph::new();
        let conversion = graph.add_entity("IfcMapConversion");
        graph.set_attribute(conversion, "Eastings", 42i64);

        let facet = AttributeFacet::new("Eastings")
            .with_value(Restriction::enumeration([42.0], BaseType::Decimal).unwrap());
        assert!(facet.matches(&graph, conversion).unwrap());
    }

    #[test]
    fn name_restrictions_are_conjunctive() {
        let mut graph = MemoryGraph::new();
        let wall = graph.add_entity("IfcWall");
        graph.declare_attributes(wall, &["Name", "Description"]);
        graph.set_attribute(wall, "Name", "Foo");

        let facet = AttributeFacet::new(
            Restriction::enumeration(["Name", "Description"], BaseType::String).unwrap(),
        );
        assert!(!facet.matches(&graph, wall).unwrap());
        graph.set_attribute(wall, "Description", "Bar");
        assert!(facet.matches(&graph, wall).unwrap());
    }

    #[test]
    fn name_patterns_resolve_against_the_schema() {
        let mut graph = MemoryGraph::new();
        let layer_set = graph.add_entity("IfcMaterialLayerSet");
        graph.set_attribute(layer_set, "LayerSetName", "Foo");

        let facet = AttributeFacet::new(Restriction::pattern(".*Name.*").unwrap());
        assert!(facet.matches(&graph, layer_set).unwrap());

        // No matching schema attribute at all resolves to no match.
        let wall = graph.add_entity("IfcWall");
        assert!(!facet.matches(&graph, wall).unwrap());
    }

    #[test]
    fn value_restrictions() {
        let mut graph = MemoryGraph::new();
        let foo = graph.add_entity("IfcWall");
        graph.set_attribute(foo, "Name", "Foo");
        let foobar = graph.add_entity("IfcWall");
        graph.set_attribute(foobar, "Name", "Foobar");

        let facet = AttributeFacet::new("Name")
            .with_value(Restriction::enumeration(["Foo", "Bar"], BaseType::String).unwrap());
        assert!(facet.matches(&graph, foo).unwrap());
        assert!(!facet.matches(&graph, foobar).unwrap());
    }

    #[test]
    fn location_scoping() {
        let mut graph = MemoryGraph::new();
        let wall = graph.add_entity("IfcWall");
        let wall_type = graph.add_type("IfcWallType");
        graph.assign_type(wall, wall_type);
        graph.set_attribute(wall_type, "Name", "Foobar");

        let instance = AttributeFacet::new("Name").with_value("Foobar").at(Location::Instance);
        assert!(!instance.matches(&graph, wall).unwrap());

        let type_scope = AttributeFacet::new("Name").with_value("Foobar").at(Location::Type);
        assert!(type_scope.matches(&graph, wall).unwrap());

        let named = graph.add_entity("IfcWall");
        graph.set_attribute(named, "Name", "Foobar");
        assert!(instance.matches(&graph, named).unwrap());
        assert!(!type_scope.matches(&graph, named).unwrap());
    }

    #[test]
    fn any_inherits_from_the_type_and_honours_overrides() {
        let mut graph = MemoryGraph::new();
        let wall = graph.add_entity("IfcWall");
        let wall_type = graph.add_type("IfcWallType");
        graph.assign_type(wall, wall_type);
        graph.set_attribute(wall_type, "Description", "Foobar");

        let facet = AttributeFacet::new("Description").with_value("Foobar");
        assert!(facet.matches(&graph, wall).unwrap());

        // The occurrence's own value shadows the type's.
        graph.set_attribute(wall_type, "Description", "Foobaz");
        graph.set_attribute(wall, "Description", "Foobar");
        assert!(facet.matches(&graph, wall).unwrap());
    }
}
