use serde::{Deserialize, Serialize};

/// A recipe as served by the recipe source.
///
/// Recipes are read-only once loaded; filtering only borrows and regroups them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub description: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub prep_time: String,
    /// Number of servings
    pub portion: String,
    pub image: String,
    /// Tags in display order, compared case-sensitively
    pub tags: Vec<String>,
}

impl Recipe {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// A tag and the number of recipes carrying it.
///
/// Counts are always derived from a recipe collection, never edited in place.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
    pub count: usize,
}

impl Tag {
    pub fn new(name: impl Into<String>, count: usize) -> Self {
        Self {
            name: name.into(),
            count,
        }
    }
}
