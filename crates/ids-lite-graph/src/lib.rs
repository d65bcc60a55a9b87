// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! IDS-Lite Graph - in-memory building-model graph
//!
//! An implementation of the `ids-lite-model` accessor traits backed by
//! plain in-memory tables, with a builder surface for authoring models
//! entity by entity: occurrences and types, attributes, property sets,
//! classifications, materials, aggregation, group membership and unit
//! assignment.
//!
//! # Example
//!
//! ```
//! use ids_lite_graph::MemoryGraph;
//! use ids_lite_model::ModelAccessor;
//!
//! let mut graph = MemoryGraph::new();
//! let wall = graph.add_entity("IfcWall");
//! graph.set_attribute(wall, "Name", "Waldo");
//!
//! assert_eq!(graph.entities(), vec![wall]);
//! assert!(graph.class_of(wall).unwrap().matches("IFCWALL"));
//! ```

pub mod graph;
pub mod units;

pub use graph::MemoryGraph;
pub use units::{si_factor, SiPrefix};
