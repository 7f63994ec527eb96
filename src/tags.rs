use crate::filter::{contains_ignore_case, count_tags};
use crate::model::{Recipe, Tag};

/// Count every tag across `recipes`. A missing collection yields no tags.
pub fn get_tags_from_recipes(recipes: Option<&[Recipe]>) -> Vec<Tag> {
    match recipes {
        Some(recipes) => count_tags(recipes),
        None => Vec::new(),
    }
}

/// Keep tags whose name contains `search_term`, ignoring case.
pub fn filter_tags(tags: &[Tag], search_term: &str) -> Vec<Tag> {
    let term = search_term.to_lowercase();
    tags.iter()
        .filter(|tag| contains_ignore_case(&tag.name, &term))
        .cloned()
        .collect()
}
