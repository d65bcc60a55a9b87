// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Restriction evaluation
//!
//! A restriction is a secondary condition attachable to a facet's match
//! field in place of a literal: an enumeration of allowed values, numeric
//! bounds, or a regular expression pattern. Restrictions are validated at
//! construction; evaluation is total and resolves type mismatches to
//! `false` rather than raising.

use crate::error::ConfigurationError;
use ids_lite_model::TypedValue;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Declared base type of a restriction's literals
///
/// Governs coercion and comparison: strings compare case-sensitively,
/// decimals numerically across integer/float candidates, integers and
/// booleans strictly against candidates of their own kind.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BaseType {
    /// Case-sensitive string comparison
    #[default]
    String,
    /// Numeric comparison across integer and float candidates
    Decimal,
    /// Integer-only comparison
    Integer,
    /// Boolean-only comparison
    Boolean,
}

impl BaseType {
    /// Whether `candidate` equals `option` under this base type
    fn literal_eq(&self, option: &TypedValue, candidate: &TypedValue) -> bool {
        match self {
            BaseType::String => match (option.as_str(), candidate.as_str()) {
                (Some(a), Some(b)) => a == b,
                _ => false,
            },
            BaseType::Decimal => match (option.as_float(), candidate.as_float()) {
                (Some(a), Some(b)) => a == b,
                _ => false,
            },
            BaseType::Integer => match (option.as_integer(), candidate.as_integer()) {
                (Some(a), Some(b)) => a == b,
                _ => false,
            },
            BaseType::Boolean => match (option.as_bool(), candidate.as_bool()) {
                (Some(a), Some(b)) => a == b,
                _ => false,
            },
        }
    }
}

/// One side of a bounds restriction
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bound {
    /// Bound value
    pub value: f64,
    /// Whether the bound itself is allowed
    pub inclusive: bool,
}

impl Bound {
    /// An inclusive bound
    pub fn inclusive(value: f64) -> Self {
        Self {
            value,
            inclusive: true,
        }
    }

    /// An exclusive bound
    pub fn exclusive(value: f64) -> Self {
        Self {
            value,
            inclusive: false,
        }
    }
}

/// A compiled pattern restriction
///
/// Patterns follow the XSD regex flavour: the expression is implicitly
/// anchored to the full candidate string and operates on Unicode code
/// points. The source text is kept for serialization and display; the
/// compiled form is rebuilt (and re-validated) on deserialization.
#[derive(Clone, Debug)]
pub struct Pattern {
    source: String,
    regex: Regex,
}

impl Pattern {
    /// Compile a pattern, anchoring it to the full string
    pub fn new(source: &str) -> Result<Self, ConfigurationError> {
        let regex = Regex::new(&format!("^(?:{source})$")).map_err(|e| {
            ConfigurationError::InvalidPattern {
                pattern: source.to_string(),
                message: e.to_string(),
            }
        })?;
        Ok(Self {
            source: source.to_string(),
            regex,
        })
    }

    /// The original pattern text
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Whether the whole candidate matches
    pub fn is_match(&self, candidate: &str) -> bool {
        self.regex.is_match(candidate)
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Serialize for Pattern {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.source)
    }
}

impl<'de> Deserialize<'de> for Pattern {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let source = String::deserialize(deserializer)?;
        Pattern::new(&source).map_err(serde::de::Error::custom)
    }
}

/// A restriction attachable to a facet's match field
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Restriction {
    /// The value must equal one of the listed options
    Enumeration {
        /// Allowed values, in authoring order
        options: Vec<TypedValue>,
        /// Base type governing comparison
        base: BaseType,
    },
    /// The value must fall inside numeric bounds
    Bounds {
        /// Lower bound, open-ended if absent
        min: Option<Bound>,
        /// Upper bound, open-ended if absent
        max: Option<Bound>,
        /// Base type governing authoring-side literal typing
        base: BaseType,
    },
    /// The value must match a pattern in full
    Pattern(Pattern),
}

impl Restriction {
    /// Create an enumeration restriction
    ///
    /// Fails with [`ConfigurationError::EmptyEnumeration`] when no options
    /// are given.
    pub fn enumeration<I, V>(options: I, base: BaseType) -> Result<Self, ConfigurationError>
    where
        I: IntoIterator<Item = V>,
        V: Into<TypedValue>,
    {
        let options: Vec<TypedValue> = options.into_iter().map(Into::into).collect();
        if options.is_empty() {
            return Err(ConfigurationError::EmptyEnumeration);
        }
        Ok(Restriction::Enumeration { options, base })
    }

    /// Create a bounds restriction
    ///
    /// At least one bound must be present and the bounds must not be
    /// inverted.
    pub fn bounds(
        min: Option<Bound>,
        max: Option<Bound>,
        base: BaseType,
    ) -> Result<Self, ConfigurationError> {
        match (&min, &max) {
            (None, None) => return Err(ConfigurationError::EmptyBounds),
            (Some(lo), Some(hi)) if lo.value > hi.value => {
                return Err(ConfigurationError::InvertedBounds {
                    min: lo.value,
                    max: hi.value,
                })
            }
            _ => {}
        }
        Ok(Restriction::Bounds { min, max, base })
    }

    /// Create a pattern restriction
    pub fn pattern(source: &str) -> Result<Self, ConfigurationError> {
        Ok(Restriction::Pattern(Pattern::new(source)?))
    }

    /// Whether a candidate value satisfies the restriction
    ///
    /// Total: absent or incompatible value kinds evaluate to `false`.
    pub fn satisfies(&self, candidate: &TypedValue) -> bool {
        match self {
            Restriction::Enumeration { options, base } => {
                options.iter().any(|opt| base.literal_eq(opt, candidate))
            }
            Restriction::Bounds { min, max, .. } => {
                let Some(value) = candidate.as_float() else {
                    return false;
                };
                let lo_ok = min.map_or(true, |b| {
                    if b.inclusive {
                        value >= b.value
                    } else {
                        value > b.value
                    }
                });
                let hi_ok = max.map_or(true, |b| {
                    if b.inclusive {
                        value <= b.value
                    } else {
                        value < b.value
                    }
                });
                lo_ok && hi_ok
            }
            Restriction::Pattern(pattern) => match candidate.as_str() {
                Some(s) => pattern.is_match(s),
                None => false,
            },
        }
    }

    /// Convenience check against a plain string candidate
    pub fn satisfies_str(&self, candidate: &str) -> bool {
        self.satisfies(&TypedValue::String(candidate.to_string()))
    }
}

impl fmt::Display for Restriction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Restriction::Enumeration { options, .. } => {
                write!(f, "one of [")?;
                for (i, opt) in options.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{opt}")?;
                }
                write!(f, "]")
            }
            Restriction::Bounds { min, max, .. } => {
                write!(f, "in range ")?;
                match min {
                    Some(b) if b.inclusive => write!(f, "[{}", b.value)?,
                    Some(b) => write!(f, "({}", b.value)?,
                    None => write!(f, "(-inf")?,
                }
                write!(f, ", ")?;
                match max {
                    Some(b) if b.inclusive => write!(f, "{}]", b.value),
                    Some(b) => write!(f, "{})", b.value),
                    None => write!(f, "inf)"),
                }
            }
            Restriction::Pattern(pattern) => write!(f, "matching '{}'", pattern.source()),
        }
    }
}
