// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Classification references attached to model entities

use serde::{Deserialize, Serialize};

/// A classification reference on an entity
///
/// Carries the reference's own identifier plus the identifier chain of its
/// parent references up to the classification system, already walked by the
/// model side. Lightweight references that point straight at the system
/// simply have an empty ancestor chain.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClassificationRef {
    /// The reference's own identification code (e.g., "EF_25_10_25")
    pub identification: Option<String>,
    /// Ancestor identification codes, nearest parent first
    pub ancestors: Vec<String>,
    /// Name of the root classification system (e.g., "Uniclass")
    pub system: Option<String>,
}

impl ClassificationRef {
    /// Create a reference with an identification and system name
    pub fn new(identification: impl Into<String>, system: impl Into<String>) -> Self {
        Self {
            identification: Some(identification.into()),
            ancestors: Vec::new(),
            system: Some(system.into()),
        }
    }

    /// Create a bare system association without a reference code
    pub fn system_only(system: impl Into<String>) -> Self {
        Self {
            identification: None,
            ancestors: Vec::new(),
            system: Some(system.into()),
        }
    }

    /// Attach the ancestor identification chain, nearest parent first
    pub fn with_ancestors(mut self, ancestors: Vec<String>) -> Self {
        self.ancestors = ancestors;
        self
    }

    /// All identification codes this reference answers to
    ///
    /// The reference's own code first, then its ancestors, so a search for
    /// a coarse code matches any of its finer subdivisions.
    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.identification
            .as_deref()
            .into_iter()
            .chain(self.ancestors.iter().map(String::as_str))
    }
}
