// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Material assignments attached to model entities

use serde::{Deserialize, Serialize};

/// A material with its identifying labels
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct MaterialInfo {
    /// Material name
    pub name: Option<String>,
    /// Material category
    pub category: Option<String>,
}

impl MaterialInfo {
    /// Create an unnamed material
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a named material
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            category: None,
        }
    }

    /// Set the category, builder style
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

/// One layer, profile or constituent inside a composite material set
///
/// The item has its own name/category labels in addition to the labels of
/// the material it carries, and both identify it.
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct MaterialItem {
    /// The item's own name (e.g., a layer name)
    pub name: Option<String>,
    /// The item's own category
    pub category: Option<String>,
    /// The material the item is made of
    pub material: Option<MaterialInfo>,
}

impl MaterialItem {
    /// Create an item around a material
    pub fn of(material: MaterialInfo) -> Self {
        Self {
            name: None,
            category: None,
            material: Some(material),
        }
    }

    /// Set the item's own name, builder style
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the item's own category, builder style
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

/// A material assignment on an entity
///
/// Either a single material or one of the composite set styles. Composite
/// items contribute two candidate labels each (their own and their
/// material's).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum MaterialAssignment {
    /// Single material
    Single(MaterialInfo),
    /// Unordered material list
    List(Vec<MaterialInfo>),
    /// Layer set (each layer wraps a material)
    LayerSet(Vec<MaterialItem>),
    /// Profile set (each profile wraps a material)
    ProfileSet(Vec<MaterialItem>),
    /// Constituent set (each constituent wraps a material)
    ConstituentSet(Vec<MaterialItem>),
}

impl MaterialAssignment {
    /// All name/category labels this assignment answers to
    pub fn labels(&self) -> Vec<&str> {
        fn push_info<'a>(out: &mut Vec<&'a str>, info: &'a MaterialInfo) {
            out.extend(info.name.as_deref());
            out.extend(info.category.as_deref());
        }

        let mut out = Vec::new();
        match self {
            MaterialAssignment::Single(info) => push_info(&mut out, info),
            MaterialAssignment::List(infos) => {
                for info in infos {
                    push_info(&mut out, info);
                }
            }
            MaterialAssignment::LayerSet(items)
            | MaterialAssignment::ProfileSet(items)
            | MaterialAssignment::ConstituentSet(items) => {
                for item in items {
                    out.extend(item.name.as_deref());
                    out.extend(item.category.as_deref());
                    if let Some(info) = &item.material {
                        push_info(&mut out, info);
                    }
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composite_items_contribute_both_labels() {
        let layer = MaterialItem::of(MaterialInfo::named("Concrete").with_category("CONCRETE"))
            .with_name("Core");
        let assignment = MaterialAssignment::LayerSet(vec![layer]);
        let labels = assignment.labels();
        assert!(labels.contains(&"Core"));
        assert!(labels.contains(&"Concrete"));
        assert!(labels.contains(&"CONCRETE"));
    }

    #[test]
    fn empty_set_has_no_labels() {
        assert!(MaterialAssignment::List(vec![]).labels().is_empty());
    }
}
