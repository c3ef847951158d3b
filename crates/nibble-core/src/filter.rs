//! List transforms for the browsing view
//!
//! Pure functions over an in-memory record list: meal-type restriction,
//! free-text search, and pagination math. Filtering and pagination are
//! entirely a client-side concern; the API always serves the full list.

use crate::models::FoodIdea;

/// Meal categories shown in the browsing view
pub const LISTED_MEALS: [&str; 3] = ["breakfast", "lunch", "dinner"];

/// Whether a meal value belongs to one of the listed categories
/// (case-insensitive, whitespace-trimmed)
#[must_use]
pub fn is_listed_meal(meal: &str) -> bool {
    let meal = meal.trim().to_lowercase();
    LISTED_MEALS.contains(&meal.as_str())
}

/// Keep only records whose meal type is one of the listed categories
#[must_use]
pub fn restrict_to_meals(ideas: Vec<FoodIdea>) -> Vec<FoodIdea> {
    ideas
        .into_iter()
        .filter(|idea| is_listed_meal(&idea.meal))
        .collect()
}

/// Case-insensitive substring match against every text field, with the
/// recipe steps joined by spaces. An empty query matches everything.
#[must_use]
pub fn matches_query(idea: &FoodIdea, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let query = query.to_lowercase();
    let fields = [
        &idea.food,
        &idea.meal,
        &idea.done_by,
        &idea.social_media,
        &idea.link,
    ];
    fields
        .iter()
        .any(|field| field.to_lowercase().contains(&query))
        || idea.recipe.join(" ").to_lowercase().contains(&query)
}

/// Number of pages for a filtered count: `max(1, ceil(count / page_size))`
#[must_use]
pub fn total_pages(count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    count.div_ceil(page_size).max(1)
}

/// Clamp a 1-based page number into `[1, total]`
#[must_use]
pub fn clamp_page(page: usize, total: usize) -> usize {
    page.clamp(1, total.max(1))
}

/// The slice of items visible on a 1-based page
#[must_use]
pub fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    if page_size == 0 {
        return &[];
    }
    let start = (page.max(1) - 1) * page_size;
    if start >= items.len() {
        return &[];
    }
    let end = (start + page_size).min(items.len());
    &items[start..end]
}
