//! Recipe filtering and tag aggregation over an in-memory collection.

use std::collections::HashMap;

use crate::model::{Recipe, Tag};

/// Keep recipes whose title contains `search_term` (case-insensitive) and
/// which carry every tag in `selected_tags`.
///
/// An empty term or an empty tag list disables that half of the match, so
/// both empty returns the whole input in its original order.
pub fn filter_recipes<'a>(
    recipes: &'a [Recipe],
    search_term: &str,
    selected_tags: &[String],
) -> Vec<&'a Recipe> {
    let term = search_term.to_lowercase();
    recipes
        .iter()
        .filter(|recipe| matches(recipe, &term, selected_tags))
        .collect()
}

/// Keep recipes sharing at least one tag with `selected_tags`, most matching
/// tags first.
///
/// Recipes with the same number of matches keep their input order.
pub fn filter_recipes_by_tags_inclusive<'a>(
    recipes: &'a [Recipe],
    selected_tags: &[String],
) -> Vec<&'a Recipe> {
    let mut scored: Vec<(&Recipe, usize)> = recipes
        .iter()
        .map(|recipe| (recipe, matching_tag_count(recipe, selected_tags)))
        .filter(|(_, score)| *score > 0)
        .collect();

    // sort_by is stable
    scored.sort_by(|a, b| b.1.cmp(&a.1));
    scored.into_iter().map(|(recipe, _)| recipe).collect()
}

/// Count tags across the recipes that survive [`filter_recipes`].
///
/// Tags are listed in the order they are first seen.
pub fn update_tag_counts(recipes: &[Recipe], search_term: &str, selected_tags: &[String]) -> Vec<Tag> {
    count_tags(filter_recipes(recipes, search_term, selected_tags))
}

/// Flatten the tags of `recipes` and count occurrences per name.
pub(crate) fn count_tags<'a, I>(recipes: I) -> Vec<Tag>
where
    I: IntoIterator<Item = &'a Recipe>,
{
    let mut index: HashMap<&'a str, usize> = HashMap::new();
    let mut tags: Vec<Tag> = Vec::new();

    for tag in recipes.into_iter().flat_map(|r| r.tags.iter()) {
        match index.get(tag.as_str()) {
            Some(&i) => tags[i].count += 1,
            None => {
                index.insert(tag.as_str(), tags.len());
                tags.push(Tag::new(tag.clone(), 1));
            }
        }
    }

    tags
}

/// Case-insensitive substring test; `needle_lower` must already be lowercase.
pub(crate) fn contains_ignore_case(haystack: &str, needle_lower: &str) -> bool {
    needle_lower.is_empty() || haystack.to_lowercase().contains(needle_lower)
}

fn matches(recipe: &Recipe, term_lower: &str, selected_tags: &[String]) -> bool {
    contains_ignore_case(&recipe.title, term_lower)
        && selected_tags.iter().all(|tag| recipe.has_tag(tag))
}

fn matching_tag_count(recipe: &Recipe, selected_tags: &[String]) -> usize {
    recipe
        .tags
        .iter()
        .filter(|tag| selected_tags.contains(tag))
        .count()
}
