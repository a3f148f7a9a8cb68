//! Component records and the categorized catalog produced by a run.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::categories::Category;

/// A single declared prop from a component's `<Name>Props` interface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentProp {
    pub name: String,
    /// Raw type expression as written in source, trimmed.
    #[serde(rename = "type")]
    pub ty: String,
    /// False only when the field carried a `?` marker.
    pub required: bool,
    /// Body of the `/** ... */` comment directly above the field, if any.
    #[serde(default)]
    pub description: String,
}

impl ComponentProp {
    pub fn new(name: impl Into<String>, ty: impl Into<String>, required: bool) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            required,
            description: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Everything extracted about one component directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentInfo {
    pub name: String,
    pub category: Category,
    pub props: Vec<ComponentProp>,
    /// At most ten notes, in document order.
    pub accessibility_notes: Vec<String>,
    pub storybook_url: String,
    pub import_statement: String,
    /// At most three short `jsx` snippets, in document order.
    pub examples: Vec<String>,
}

/// Components grouped by category.
///
/// Categories keep the order in which they were first seen, and so do the
/// components inside each category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    categories: IndexMap<Category, Vec<ComponentInfo>>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a component under its own category, creating the list on first use.
    pub fn insert(&mut self, info: ComponentInfo) {
        self.categories.entry(info.category).or_default().push(info);
    }

    /// Components recorded under a category, in encounter order.
    pub fn get(&self, category: Category) -> Option<&[ComponentInfo]> {
        self.categories.get(&category).map(Vec::as_slice)
    }

    /// Iterate categories in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[ComponentInfo])> {
        self.categories
            .iter()
            .map(|(category, components)| (*category, components.as_slice()))
    }

    /// Populated categories, in first-seen order.
    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.categories.keys().copied()
    }

    pub fn total_components(&self) -> usize {
        self.categories.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Find a component by name across all categories.
    pub fn component(&self, name: &str) -> Option<&ComponentInfo> {
        self.categories
            .values()
            .flat_map(|components| components.iter())
            .find(|c| c.name == name)
    }
}
