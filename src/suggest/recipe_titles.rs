use async_trait::async_trait;
use log::debug;

use crate::error::Result;
use crate::filter::filter_recipes;
use crate::model::Recipe;
use crate::suggest::SuggestionProvider;

/// Suggests titles from an in-memory recipe collection.
pub struct RecipeTitleProvider {
    recipes: Vec<Recipe>,
    max_results: Option<usize>,
}

impl RecipeTitleProvider {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self {
            recipes,
            max_results: None,
        }
    }

    /// Cap the number of suggestions returned per query
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = Some(max_results);
        self
    }
}

#[async_trait]
impl SuggestionProvider for RecipeTitleProvider {
    fn provider_name(&self) -> &str {
        "recipe_titles"
    }

    async fn suggest(&self, query: &str) -> Result<Vec<String>> {
        let limit = self.max_results.unwrap_or(usize::MAX);
        let titles: Vec<String> = filter_recipes(&self.recipes, query, &[])
            .into_iter()
            .take(limit)
            .map(|recipe| recipe.title.clone())
            .collect();

        debug!("{} title suggestions for {:?}", titles.len(), query);
        Ok(titles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> RecipeTitleProvider {
        let recipes = ["Apple Pie", "Apricot Jam", "Banana Bread", "Avocado Toast"]
            .iter()
            .enumerate()
            .map(|(i, title)| Recipe {
                id: i.to_string(),
                title: title.to_string(),
                ..Default::default()
            })
            .collect();
        RecipeTitleProvider::new(recipes)
    }

    #[tokio::test]
    async fn test_suggests_matching_titles_in_order() {
        let titles = provider().suggest("ap").await.unwrap();
        assert_eq!(titles, vec!["Apple Pie", "Apricot Jam"]);
    }

    #[tokio::test]
    async fn test_respects_max_results() {
        let titles = provider().with_max_results(2).suggest("a").await.unwrap();
        assert_eq!(titles, vec!["Apple Pie", "Apricot Jam"]);
    }

    #[tokio::test]
    async fn test_no_match_yields_empty_list() {
        assert!(provider().suggest("zucchini").await.unwrap().is_empty());
    }
}
