// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! IDS-Lite Model - Trait definitions and shared types for model access
//!
//! This crate provides the core abstractions for reading a semantic
//! building-model graph. It defines the accessor trait the validation
//! engine consumes, allowing different model backends (parsed files,
//! in-memory fixtures) to be validated in a backend-agnostic way.
//!
//! # Architecture
//!
//! The crate is organized around one key trait and its value types:
//!
//! - [`ModelAccessor`] - Read-only access to entities, attributes,
//!   property sets, classifications, materials and relationships
//! - [`TypedValue`] - Decoded attribute/property values with explicit kinds
//! - [`PropertySet`] / [`PropertyValue`] - Named property collections
//! - [`ClassificationRef`] - Classification references with their
//!   identifier hierarchy
//! - [`MaterialAssignment`] - Single and composite material assignments
//! - [`UnitScales`] / [`MeasureKind`] - SI conversion of measured values
//!
//! # Example
//!
//! ```ignore
//! use ids_lite_model::{ModelAccessor, EntityId};
//!
//! fn count_walls(model: &dyn ModelAccessor) -> usize {
//!     model
//!         .entities()
//!         .into_iter()
//!         .filter(|id| model.class_of(*id).is_some_and(|c| c.matches("IfcWall")))
//!         .count()
//! }
//! ```

pub mod accessor;
pub mod classification;
pub mod error;
pub mod material;
pub mod properties;
pub mod types;
pub mod units;

// Re-export all public types
pub use accessor::*;
pub use classification::*;
pub use error::*;
pub use material::*;
pub use properties::*;
pub use types::*;
pub use units::*;
