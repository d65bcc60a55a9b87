// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for specification authoring and validation

use ids_lite_model::{EntityId, ModelError};
use thiserror::Error;

/// Errors raised while constructing a restriction
///
/// These surface at authoring time only. Evaluating a well-formed
/// restriction is total and never fails.
#[derive(Error, Debug)]
pub enum ConfigurationError {
    /// Enumeration restriction with no options
    #[error("enumeration restriction requires at least one option")]
    EmptyEnumeration,

    /// Bounds restriction without any bound
    #[error("bounds restriction requires at least one bound")]
    EmptyBounds,

    /// Bounds restriction with min greater than max
    #[error("bounds restriction has min {min} greater than max {max}")]
    InvertedBounds { min: f64, max: f64 },

    /// Pattern restriction that does not compile
    #[error("invalid pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },
}

/// Errors raised while validating a specification
///
/// Only structural model failures abort a validation pass; facet-level
/// policy mismatches resolve to `false` and are never errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// The model accessor failed while a specification was being validated
    #[error("specification '{specification}' aborted on entity {entity}: {source}")]
    Model {
        specification: String,
        entity: EntityId,
        #[source]
        source: ModelError,
    },
}

impl ValidationError {
    /// Wrap a model error with the specification/entity that hit it
    pub fn model(specification: impl Into<String>, entity: EntityId, source: ModelError) -> Self {
        ValidationError::Model {
            specification: specification.into(),
            entity,
            source,
        }
    }
}
