// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! PartOf facet
//!
//! Matches membership in a whole of a named class: either a direct group
//! or system assignment, or containment in an aggregation whose (possibly
//! transitive) parent is of the named class.

use ids_lite_model::{EntityId, ModelAccessor, ModelError, Result};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// Matches entities that are part of a whole of a named class
///
/// Group and system assignments are direct relationships and are never
/// transitive; aggregation containment is followed through nesting to
/// arbitrary depth. The named class matches exactly. The original lenient
/// behavior of also accepting subtypes of group/system classes is a
/// documented deviation behind [`PartOfFacet::with_subtype_leniency`],
/// off by default.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PartOfFacet {
    /// Class the relating whole must have
    pub entity: String,
    /// Accept subtypes of the named class on group/system assignments
    pub subtype_leniency: bool,
    /// Authoring note, irrelevant to matching
    pub instructions: Option<String>,
}

impl Default for PartOfFacet {
    fn default() -> Self {
        Self {
            entity: String::from("IfcSystem"),
            subtype_leniency: false,
            instructions: None,
        }
    }
}

impl PartOfFacet {
    /// Create a part-of facet for a whole of the given class
    pub fn new(entity: impl Into<String>) -> Self {
        Self {
            entity: entity.into(),
            ..Self::default()
        }
    }

    /// Accept subtypes of the named class on group/system assignments
    pub fn with_subtype_leniency(mut self, leniency: bool) -> Self {
        self.subtype_leniency = leniency;
        self
    }

    /// Attach an authoring note, builder style
    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = Some(instructions.into());
        self
    }

    pub(crate) fn matches(&self, model: &dyn ModelAccessor, id: EntityId) -> Result<bool> {
        // Direct group/system assignments, no transitivity.
        for group in model.group_memberships(id)? {
            let matched = if self.subtype_leniency {
                model.is_kind_of(group, &self.entity)
            } else {
                model
                    .class_of(group)
                    .is_some_and(|class| class.matches(&self.entity))
            };
            if matched {
                return Ok(true);
            }
        }

        // Aggregation containment, transitive to arbitrary depth.
        let mut visited: FxHashSet<u32> = FxHashSet::default();
        visited.insert(id.0);
        let mut cursor = model.aggregation_parent(id)?;
        while let Some(parent) = cursor {
            if !visited.insert(parent.0) {
                return Err(ModelError::corrupt(parent, "aggregation cycle"));
            }
            if model
                .class_of(parent)
                .is_some_and(|class| class.matches(&self.entity))
            {
                return Ok(true);
            }
            cursor = model.aggregation_parent(parent)?;
        }
        Ok(false)
    }

    pub(crate) fn describe(&self) -> String {
        format!("part of a {}", self.entity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ids_lite_graph::MemoryGraph;

    #[test]
    fn aggregation_matches_the_related_side_only() {
        let mut graph = MemoryGraph::new();
        let assembly = graph.add_entity("IfcElementAssembly");
        let wall = graph.add_entity("IfcWall");
        graph.aggregate(wall, assembly);

        let facet = PartOfFacet::new("IfcElementAssembly");
        assert!(!facet.matches(&graph, assembly).unwrap());
        assert!(facet.matches(&graph, wall).unwrap());
    }

    #[test]
    fn the_relating_class_is_checked_strictly() {
        let mut graph = MemoryGraph::new();
        let slab = graph.add_entity("IfcSlab");
        let beam = graph.add_entity("IfcBeam");
        graph.aggregate(beam, slab);

        let facet = PartOfFacet::new("IfcElementAssembly");
        assert!(!facet.matches(&graph, beam).unwrap());
    }

    #[test]
    fn nested_aggregation_is_transitive() {
        let mut graph = MemoryGraph::new();
        let assembly = graph.add_entity("IfcElementAssembly");
        let slab = graph.add_entity("IfcSlab");
        let beam = graph.add_entity("IfcBeam");
        graph.aggregate(slab, assembly);
        graph.aggregate(beam, slab);

        let facet = PartOfFacet::new("IfcElementAssembly");
        assert!(facet.matches(&graph, beam).unwrap());
    }

    #[test]
    fn group_assignment_is_direct_and_exact() {
        let mut graph = MemoryGraph::new();
        let element = graph.add_entity("IfcElementAssembly");
        let group = graph.add_entity("IfcGroup");

        let facet = PartOfFacet::new("IfcGroup");
        assert!(!facet.matches(&graph, element).unwrap());
        graph.assign_group(element, group);
        assert!(facet.matches(&graph, element).unwrap());
    }

    #[test]
    fn subtype_leniency_is_an_explicit_deviation() {
        let mut graph = MemoryGraph::new();
        let element = graph.add_entity("IfcElementAssembly");
        let inventory = graph.add_entity("IfcInventory");
        graph.register_subclass("IfcInventory", "IfcGroup");
        graph.assign_group(element, inventory);

        let strict = PartOfFacet::new("IfcGroup");
        assert!(!strict.matches(&graph, element).unwrap());

        let lenient = PartOfFacet::new("IfcGroup").with_subtype_leniency(true);
        assert!(lenient.matches(&graph, element).unwrap());
    }

    #[test]
    fn system_assignment_uses_the_default_class() {
        let mut graph = MemoryGraph::new();
        let element = graph.add_entity("IfcElementAssembly");
        let system = graph.add_entity("IfcSystem");

        let facet = PartOfFacet::default();
        assert!(!facet.matches(&graph, element).unwrap());
        graph.assign_group(element, system);
        assert!(facet.matches(&graph, element).unwrap());
    }

    #[test]
    fn aggregation_cycles_are_a_model_error() {
        let mut graph = MemoryGraph::new();
        let a = graph.add_entity("IfcElementAssembly");
        let b = graph.add_entity("IfcSlab");
        graph.aggregate(a, b);
        graph.aggregate(b, a);

        let facet = PartOfFacet::new("IfcBuilding");
        assert!(matches!(
            facet.matches(&graph, a),
            Err(ModelError::CorruptRelationship { .. })
        ));
    }
}
