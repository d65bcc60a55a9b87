// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for model access operations

use crate::EntityId;
use thiserror::Error;

/// Result type alias for model access operations
pub type Result<T> = std::result::Result<T, ModelError>;

/// Errors that can occur while reading the model graph
///
/// These are structural failures only. Policy outcomes of facet matching
/// (absent attributes, type mismatches) are never errors.
#[derive(Error, Debug)]
pub enum ModelError {
    /// Entity not found
    #[error("Entity {0} not found")]
    EntityNotFound(EntityId),

    /// The model's schema cannot answer the requested operation
    #[error("Entity {entity} has no schema support for {operation}")]
    UnsupportedOperation { entity: EntityId, operation: String },

    /// A relationship points at missing or inconsistent data
    #[error("Corrupt relationship at entity {entity}: {message}")]
    CorruptRelationship { entity: EntityId, message: String },

    /// Generic error with message
    #[error("{0}")]
    Other(String),
}

impl ModelError {
    /// Create a new unsupported-operation error
    pub fn unsupported(entity: EntityId, operation: impl Into<String>) -> Self {
        ModelError::UnsupportedOperation {
            entity,
            operation: operation.into(),
        }
    }

    /// Create a new corrupt-relationship error
    pub fn corrupt(entity: EntityId, msg: impl Into<String>) -> Self {
        ModelError::CorruptRelationship {
            entity,
            message: msg.into(),
        }
    }

    /// Create a generic error
    pub fn other(msg: impl Into<String>) -> Self {
        ModelError::Other(msg.into())
    }
}
