// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Core types for the semantic building-model graph
//!
//! This module defines the fundamental types shared between the model
//! accessor contract and its consumers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Type-safe entity identifier
///
/// Wraps the raw entity ID (e.g., #123 becomes EntityId(123))
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize, Default)]
pub struct EntityId(pub u32);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<u32> for EntityId {
    fn from(id: u32) -> Self {
        EntityId(id)
    }
}

impl From<EntityId> for u32 {
    fn from(id: EntityId) -> Self {
        id.0
    }
}

/// Schema class of an entity
///
/// Stores the class name in the schema's own capitalization (e.g.,
/// `IfcWallType`). Name comparison against user input is case-insensitive;
/// consumers that need the exact schema spelling read [`EntityClass::name`].
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct EntityClass(String);

impl EntityClass {
    /// Create a class from its schema-capitalized name
    pub fn new(name: impl Into<String>) -> Self {
        EntityClass(name.into())
    }

    /// The schema-capitalized class name
    pub fn name(&self) -> &str {
        &self.0
    }

    /// Case-insensitive name comparison
    pub fn matches(&self, name: &str) -> bool {
        self.0.eq_ignore_ascii_case(name)
    }
}

impl fmt::Display for EntityClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for EntityClass {
    fn from(name: &str) -> Self {
        EntityClass(name.to_string())
    }
}

impl From<String> for EntityClass {
    fn from(name: String) -> Self {
        EntityClass(name)
    }
}

/// Decoded attribute or property value
///
/// Represents any value that can appear on an entity, with the schema's
/// value kinds modeled explicitly instead of recovered by introspection.
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub enum TypedValue {
    /// Null value (attribute declared but unset)
    #[default]
    Null,
    /// Derived value (computed by the schema, not stored)
    Derived,
    /// Reference to another entity (objects and selects)
    Object(EntityId),
    /// Boolean value
    Bool(bool),
    /// Integer value
    Integer(i64),
    /// Floating point value
    Float(f64),
    /// String value
    String(String),
    /// Enumeration value
    Enum(String),
    /// List of values
    List(Vec<TypedValue>),
}

impl TypedValue {
    /// Try to get as entity reference
    pub fn as_object(&self) -> Option<EntityId> {
        match self {
            TypedValue::Object(id) => Some(*id),
            _ => None,
        }
    }

    /// Try to get as string (enumeration values read as their text)
    pub fn as_str(&self) -> Option<&str> {
        match self {
            TypedValue::String(s) | TypedValue::Enum(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get as float
    pub fn as_float(&self) -> Option<f64> {
        match self {
            TypedValue::Float(f) => Some(*f),
            TypedValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Try to get as integer
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            TypedValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get as boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            TypedValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get as list
    pub fn as_list(&self) -> Option<&[TypedValue]> {
        match self {
            TypedValue::List(list) => Some(list),
            _ => None,
        }
    }

    /// Check if this is a null value
    pub fn is_null(&self) -> bool {
        matches!(self, TypedValue::Null)
    }

    /// Check if this is a derived value
    pub fn is_derived(&self) -> bool {
        matches!(self, TypedValue::Derived)
    }

    /// Whether the value counts as present
    ///
    /// Unset, null and empty string are indistinguishable to downstream
    /// checks; empty collections and derived markers also count as absent.
    /// Numeric zero and boolean false are values.
    pub fn is_present(&self) -> bool {
        match self {
            TypedValue::Null | TypedValue::Derived => false,
            TypedValue::String(s) => !s.is_empty(),
            TypedValue::List(list) => !list.is_empty(),
            _ => true,
        }
    }
}

impl From<&str> for TypedValue {
    fn from(s: &str) -> Self {
        TypedValue::String(s.to_string())
    }
}

impl From<String> for TypedValue {
    fn from(s: String) -> Self {
        TypedValue::String(s)
    }
}

impl From<f64> for TypedValue {
    fn from(f: f64) -> Self {
        TypedValue::Float(f)
    }
}

impl From<i64> for TypedValue {
    fn from(i: i64) -> Self {
        TypedValue::Integer(i)
    }
}

impl From<bool> for TypedValue {
    fn from(b: bool) -> Self {
        TypedValue::Bool(b)
    }
}

impl fmt::Display for TypedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypedValue::Null => write!(f, "null"),
            TypedValue::Derived => write!(f, "derived"),
            TypedValue::Object(id) => write!(f, "{id}"),
            TypedValue::Bool(b) => write!(f, "{b}"),
            TypedValue::Integer(i) => write!(f, "{i}"),
            TypedValue::Float(v) => write!(f, "{v}"),
            TypedValue::String(s) | TypedValue::Enum(s) => write!(f, "{s}"),
            TypedValue::List(list) => {
                write!(f, "(")?;
                for (i, item) in list.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, ")")
            }
        }
    }
}
