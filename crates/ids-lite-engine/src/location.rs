// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Location scoping of facet lookups

use ids_lite_model::{EntityId, ModelAccessor, Result};
use serde::{Deserialize, Serialize};

/// Where a facet looks for its data
///
/// Scopes a lookup to an entity's own data, its associated type's data, or
/// their combination. How the combination works differs per facet kind:
/// attributes and property sets override per key, while classification and
/// material references union.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    /// Only the entity's own data
    Instance,
    /// Only the associated type entity's data
    Type,
    /// Both, combined per the facet's override/union rule
    #[default]
    Any,
}

/// The entity the `type` scope resolves to
///
/// An occurrence's type scope is its associated type entity; an entity
/// that is itself a type definition is its own type scope.
pub(crate) fn type_scope_target(model: &dyn ModelAccessor, id: EntityId) -> Option<EntityId> {
    if model.is_type_entity(id) {
        Some(id)
    } else {
        model.type_of(id)
    }
}

/// Gather location-scoped reference collections as a union
///
/// `instance` reads only the given entity, `type` only the type scope
/// (see [`type_scope_target`]), and `any` the union of the entity and its
/// associated type. Used by the classification and material facets, where
/// multiple distinct references may coexist across the occurrence/type
/// split.
pub(crate) fn union_scope<T>(
    model: &dyn ModelAccessor,
    id: EntityId,
    location: Location,
    get: impl Fn(&dyn ModelAccessor, EntityId) -> Result<Vec<T>>,
) -> Result<Vec<T>> {
    match location {
        Location::Instance => get(model, id),
        Location::Type => match type_scope_target(model, id) {
            Some(type_id) => get(model, type_id),
            None => Ok(Vec::new()),
        },
        Location::Any => {
            let mut out = get(model, id)?;
            if let Some(type_id) = model.type_of(id) {
                out.extend(get(model, type_id)?);
            }
            Ok(out)
        }
    }
}
