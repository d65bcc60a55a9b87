// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Model accessor trait for reading the semantic building-model graph

use crate::{
    ClassificationRef, EntityClass, EntityId, MaterialAssignment, MeasureKind, PropertySet,
    Result, TypedValue,
};

/// Read-only access to a semantic building-model graph
///
/// This trait is the boundary between the validation engine and whatever
/// owns the model data (a parsed file, an authoring database, an in-memory
/// fixture). All lookups return *direct* data only: inheritance from an
/// entity's associated type and occurrence/type override rules are the
/// consumer's concern, so different scoping policies can share one model.
///
/// Implementations must be safe for concurrent read-only access; no writer
/// may run during a validation pass (the caller guarantees a quiescent
/// model — this contract enforces no locking itself).
///
/// # Example
///
/// ```ignore
/// use ids_lite_model::{ModelAccessor, EntityId};
///
/// fn show_entity(model: &dyn ModelAccessor, id: EntityId) {
///     if let Some(class) = model.class_of(id) {
///         println!("{id} is an {class}");
///     }
///     for name in model.attribute_names(id) {
///         println!("  {name} = {:?}", model.attribute(id, &name));
///     }
/// }
/// ```
pub trait ModelAccessor: Send + Sync {
    /// All entities in the model, in discovery order
    ///
    /// This is the enumerable universe a specification's applicability
    /// facets select from. The order is stable but not sorted.
    fn entities(&self) -> Vec<EntityId>;

    /// Schema class of an entity
    ///
    /// Returns `None` for dangling ids.
    fn class_of(&self, id: EntityId) -> Option<EntityClass>;

    /// Subtype-aware class test, case-insensitive
    ///
    /// True if the entity's class is `class` or a declared subtype of it.
    fn is_kind_of(&self, id: EntityId, class: &str) -> bool;

    /// Whether the entity is a type definition (as opposed to an occurrence)
    fn is_type_entity(&self, id: EntityId) -> bool;

    /// The entity's associated type entity, if any
    ///
    /// At most one type per occurrence.
    fn type_of(&self, id: EntityId) -> Option<EntityId>;

    /// The entity's own predefined-type enumerant, unresolved
    ///
    /// Returns the raw enumerant ("SOLIDWALL", "USERDEFINED", ...); the
    /// resolution rules (user-defined text, type inheritance) live with the
    /// consumer.
    fn predefined_type(&self, id: EntityId) -> Option<String>;

    /// The entity's free-text object type (occurrences)
    fn object_type(&self, id: EntityId) -> Option<String>;

    /// The entity's free-text element type (type definitions)
    fn element_type(&self, id: EntityId) -> Option<String>;

    /// Names of the entity's schema-declared attributes, in schema order
    fn attribute_names(&self, id: EntityId) -> Vec<String>;

    /// Get a single attribute value by name
    ///
    /// Returns `None` when the name is not a schema attribute of the
    /// entity's class; a declared-but-unset attribute reads as
    /// [`TypedValue::Null`].
    fn attribute(&self, id: EntityId, name: &str) -> Option<TypedValue>;

    /// Property sets directly attached to the entity
    fn property_sets(&self, id: EntityId) -> Result<Vec<PropertySet>>;

    /// Classification references directly attached to the entity
    fn classifications(&self, id: EntityId) -> Result<Vec<ClassificationRef>>;

    /// Material assignments directly attached to the entity
    fn materials(&self, id: EntityId) -> Result<Vec<MaterialAssignment>>;

    /// The entity's direct aggregation parent (the relating whole), if any
    fn aggregation_parent(&self, id: EntityId) -> Result<Option<EntityId>>;

    /// Groups and systems the entity is directly assigned to
    fn group_memberships(&self, id: EntityId) -> Result<Vec<EntityId>>;

    /// SI conversion factor for a measure kind
    ///
    /// Defaults to 1.0 (model already in SI base units).
    fn unit_scale(&self, _kind: MeasureKind) -> f64 {
        1.0
    }

    /// Short human-readable description of an entity, for reports
    fn describe(&self, id: EntityId) -> String {
        match self.class_of(id) {
            Some(class) => format!("{class} {id}"),
            None => id.to_string(),
        }
    }
}
