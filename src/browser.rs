//! Page-level state tying the recipe list to the filters.

use log::info;

use crate::error::Result;
use crate::filter::{filter_recipes, filter_recipes_by_tags_inclusive, update_tag_counts};
use crate::model::{Recipe, Tag};
use crate::source::RecipeSource;
use crate::tags::{filter_tags, get_tags_from_recipes};

/// The recipe collection plus the committed search term and selected tags.
#[derive(Debug, Clone, Default)]
pub struct RecipeBrowser {
    recipes: Vec<Recipe>,
    search_term: String,
    selected_tags: Vec<String>,
}

impl RecipeBrowser {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self {
            recipes,
            ..Default::default()
        }
    }

    /// Fetch the recipe list once from `source`
    pub async fn load(source: &dyn RecipeSource) -> Result<Self> {
        let recipes = source.fetch_all_recipes().await?;
        info!("Browsing {} recipes", recipes.len());
        Ok(Self::new(recipes))
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn selected_tags(&self) -> &[String] {
        &self.selected_tags
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Select `tag` if it is not selected, otherwise deselect it.
    ///
    /// Returns whether the tag is selected afterwards.
    pub fn toggle_tag(&mut self, tag: &str) -> bool {
        if let Some(pos) = self.selected_tags.iter().position(|t| t == tag) {
            self.selected_tags.remove(pos);
            false
        } else {
            self.selected_tags.push(tag.to_string());
            true
        }
    }

    pub fn clear_filters(&mut self) {
        self.search_term.clear();
        self.selected_tags.clear();
    }

    /// Recipes matching the search term and every selected tag
    pub fn visible_recipes(&self) -> Vec<&Recipe> {
        filter_recipes(&self.recipes, &self.search_term, &self.selected_tags)
    }

    /// Tag counts over the visible recipes
    pub fn tag_counts(&self) -> Vec<Tag> {
        update_tag_counts(&self.recipes, &self.search_term, &self.selected_tags)
    }

    /// Tag counts over the whole collection, ignoring filters
    pub fn all_tags(&self) -> Vec<Tag> {
        get_tags_from_recipes(Some(&self.recipes))
    }

    /// Visible tag counts whose name contains `term`
    pub fn search_tags(&self, term: &str) -> Vec<Tag> {
        filter_tags(&self.tag_counts(), term)
    }

    pub fn recipe_by_id(&self, id: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|recipe| recipe.id == id)
    }

    /// Other recipes sharing tags with `id`, most shared tags first
    pub fn related_recipes(&self, id: &str) -> Vec<&Recipe> {
        let Some(recipe) = self.recipe_by_id(id) else {
            return Vec::new();
        };

        filter_recipes_by_tags_inclusive(&self.recipes, &recipe.tags)
            .into_iter()
            .filter(|related| related.id != id)
            .collect()
    }
}
