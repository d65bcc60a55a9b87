// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! MemoryGraph - in-memory `ModelAccessor` implementation
//!
//! Holds a semantic building-model graph entirely in memory, with a builder
//! surface for authoring it entity by entity. Primarily used to author
//! fixture models for validation tests, but any caller that already has the
//! model in decoded form can load it here.

use crate::units::{si_factor, SiPrefix};
use ids_lite_model::{
    ClassificationRef, EntityClass, EntityId, MaterialAssignment, MeasureKind, ModelAccessor,
    ModelError, PropertySet, Result, TypedValue, UnitScales,
};
use rustc_hash::FxHashMap;
use serde::Serialize;

/// Everything the graph records about one entity
#[derive(Clone, Debug, Default, Serialize)]
struct EntityRecord {
    class: String,
    is_type: bool,
    predefined_type: Option<String>,
    object_type: Option<String>,
    element_type: Option<String>,
    /// Declared attributes in schema order; unset slots hold Null
    attributes: Vec<(String, TypedValue)>,
    type_of: Option<EntityId>,
    property_sets: Vec<PropertySet>,
    classifications: Vec<ClassificationRef>,
    materials: Vec<MaterialAssignment>,
    aggregation_parent: Option<EntityId>,
    groups: Vec<EntityId>,
}

/// In-memory building-model graph
///
/// Entity ids are handed out in creation order, which is also the
/// enumeration order [`ModelAccessor::entities`] reports.
#[derive(Default, Serialize)]
pub struct MemoryGraph {
    order: Vec<EntityId>,
    records: FxHashMap<u32, EntityRecord>,
    /// Schema subtype table: uppercase child class -> uppercase parent class
    supertypes: FxHashMap<String, String>,
    scales: UnitScales,
    next_id: u32,
}

impl MemoryGraph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entities in the graph
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the graph holds no entities
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn insert(&mut self, class: &str, is_type: bool) -> EntityId {
        self.next_id += 1;
        let id = EntityId(self.next_id);
        self.order.push(id);
        self.records.insert(
            id.0,
            EntityRecord {
                class: class.to_string(),
                is_type,
                ..Default::default()
            },
        );
        id
    }

    /// Add an occurrence entity of the given class
    pub fn add_entity(&mut self, class: &str) -> EntityId {
        self.insert(class, false)
    }

    /// Add a type-definition entity of the given class
    pub fn add_type(&mut self, class: &str) -> EntityId {
        self.insert(class, true)
    }

    /// Remove an entity, leaving any references to it dangling
    ///
    /// Dangling references surface as [`ModelError::CorruptRelationship`]
    /// when a relationship lookup crosses them.
    pub fn remove(&mut self, id: EntityId) {
        self.records.remove(&id.0);
    }

    /// Declare a schema subtype relationship between two classes
    pub fn register_subclass(&mut self, child: &str, parent: &str) {
        self.supertypes
            .insert(child.to_uppercase(), parent.to_uppercase());
    }

    fn record(&self, id: EntityId) -> Option<&EntityRecord> {
        self.records.get(&id.0)
    }

    /// # Panics
    /// Panics if `id` is not in the graph; builder misuse is a programming
    /// error in the fixture, not a model condition.
    fn record_mut(&mut self, id: EntityId) -> &mut EntityRecord {
        match self.records.get_mut(&id.0) {
            Some(record) => record,
            None => panic!("unknown entity {id}"),
        }
    }

    /// Declare attributes without setting them (slots read as Null)
    pub fn declare_attributes(&mut self, id: EntityId, names: &[&str]) {
        let record = self.record_mut(id);
        for name in names {
            if !record.attributes.iter().any(|(n, _)| n == name) {
                record.attributes.push((name.to_string(), TypedValue::Null));
            }
        }
    }

    /// Set an attribute value, declaring the attribute if needed
    pub fn set_attribute(&mut self, id: EntityId, name: &str, value: impl Into<TypedValue>) {
        let value = value.into();
        let record = self.record_mut(id);
        match record.attributes.iter_mut().find(|(n, _)| n == name) {
            Some((_, slot)) => *slot = value,
            None => record.attributes.push((name.to_string(), value)),
        }
    }

    /// Set the entity's predefined-type enumerant
    pub fn set_predefined_type(&mut self, id: EntityId, value: &str) {
        self.record_mut(id).predefined_type = Some(value.to_string());
    }

    /// Set the entity's free-text object type
    pub fn set_object_type(&mut self, id: EntityId, value: &str) {
        self.record_mut(id).object_type = Some(value.to_string());
    }

    /// Set the entity's free-text element type
    pub fn set_element_type(&mut self, id: EntityId, value: &str) {
        self.record_mut(id).element_type = Some(value.to_string());
    }

    /// Associate an occurrence with its type entity
    pub fn assign_type(&mut self, occurrence: EntityId, type_entity: EntityId) {
        self.record_mut(occurrence).type_of = Some(type_entity);
    }

    /// Attach a property set to an entity
    pub fn add_property_set(&mut self, id: EntityId, pset: PropertySet) {
        self.record_mut(id).property_sets.push(pset);
    }

    /// Attach a classification reference to an entity
    pub fn add_classification(&mut self, id: EntityId, reference: ClassificationRef) {
        self.record_mut(id).classifications.push(reference);
    }

    /// Attach a material assignment to an entity
    pub fn assign_material(&mut self, id: EntityId, material: MaterialAssignment) {
        self.record_mut(id).materials.push(material);
    }

    /// Make `child` an aggregated part of `parent`
    pub fn aggregate(&mut self, child: EntityId, parent: EntityId) {
        self.record_mut(child).aggregation_parent = Some(parent);
    }

    /// Assign an entity to a group or system
    pub fn assign_group(&mut self, member: EntityId, group: EntityId) {
        self.record_mut(member).groups.push(group);
    }

    /// Declare the model's unit for a measure kind via an SI prefix
    pub fn set_unit(&mut self, kind: MeasureKind, prefix: SiPrefix) {
        self.scales.set(kind, si_factor(prefix, kind));
    }

    /// Set the SI conversion factor for a measure kind directly
    pub fn set_unit_scale(&mut self, kind: MeasureKind, factor: f64) {
        self.scales.set(kind, factor);
    }

    /// Serialize the graph to JSON for debugging
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    fn require(&self, id: EntityId) -> Result<&EntityRecord> {
        self.record(id).ok_or(ModelError::EntityNotFound(id))
    }
}

impl ModelAccessor for MemoryGraph {
    fn entities(&self) -> Vec<EntityId> {
        self.order
            .iter()
            .copied()
            .filter(|id| self.records.contains_key(&id.0))
            .collect()
    }

    fn class_of(&self, id: EntityId) -> Option<EntityClass> {
        self.record(id).map(|r| EntityClass::new(r.class.clone()))
    }

    fn is_kind_of(&self, id: EntityId, class: &str) -> bool {
        let Some(record) = self.record(id) else {
            return false;
        };
        let target = class.to_uppercase();
        let mut cursor = record.class.to_uppercase();
        loop {
            if cursor == target {
                return true;
            }
            match self.supertypes.get(&cursor) {
                Some(parent) => cursor = parent.clone(),
                None => return false,
            }
        }
    }

    fn is_type_entity(&self, id: EntityId) -> bool {
        self.record(id).is_some_and(|r| r.is_type)
    }

    fn type_of(&self, id: EntityId) -> Option<EntityId> {
        self.record(id).and_then(|r| r.type_of)
    }

    fn predefined_type(&self, id: EntityId) -> Option<String> {
        self.record(id).and_then(|r| r.predefined_type.clone())
    }

    fn object_type(&self, id: EntityId) -> Option<String> {
        self.record(id).and_then(|r| r.object_type.clone())
    }

    fn element_type(&self, id: EntityId) -> Option<String> {
        self.record(id).and_then(|r| r.element_type.clone())
    }

    fn attribute_names(&self, id: EntityId) -> Vec<String> {
        self.record(id)
            .map(|r| r.attributes.iter().map(|(n, _)| n.clone()).collect())
            .unwrap_or_default()
    }

    fn attribute(&self, id: EntityId, name: &str) -> Option<TypedValue> {
        self.record(id)?
            .attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.clone())
    }

    fn property_sets(&self, id: EntityId) -> Result<Vec<PropertySet>> {
        Ok(self.require(id)?.property_sets.clone())
    }

    fn classifications(&self, id: EntityId) -> Result<Vec<ClassificationRef>> {
        Ok(self.require(id)?.classifications.clone())
    }

    fn materials(&self, id: EntityId) -> Result<Vec<MaterialAssignment>> {
        Ok(self.require(id)?.materials.clone())
    }

    fn aggregation_parent(&self, id: EntityId) -> Result<Option<EntityId>> {
        let record = self.require(id)?;
        match record.aggregation_parent {
            Some(parent) if !self.records.contains_key(&parent.0) => Err(ModelError::corrupt(
                id,
                format!("aggregation parent {parent} does not exist"),
            )),
            parent => Ok(parent),
        }
    }

    fn group_memberships(&self, id: EntityId) -> Result<Vec<EntityId>> {
        let record = self.require(id)?;
        for group in &record.groups {
            if !self.records.contains_key(&group.0) {
                return Err(ModelError::corrupt(
                    id,
                    format!("assigned group {group} does not exist"),
                ));
            }
        }
        Ok(record.groups.clone())
    }

    fn unit_scale(&self, kind: MeasureKind) -> f64 {
        self.scales.get(kind)
    }
}
