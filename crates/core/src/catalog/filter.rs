//! Pure filtering over the in-memory catalog.

use super::slug::ALL_CATEGORIES;
use super::types::{Category, CategoryId, Game};

/// Name shown for a game whose category cannot be resolved.
pub const UNCATEGORIZED: &str = "uncategorized";

/// Resolve a category slug. `"all"` never resolves.
pub fn resolve_category<'a>(categories: &'a [Category], slug: &str) -> Option<&'a Category> {
    if slug == ALL_CATEGORIES {
        return None;
    }
    categories.iter().find(|c| c.slug == slug)
}

/// Games visible under the given category slug and search query, in insertion order.
///
/// An unknown slug applies no category filter at all (fail-open), the same
/// as `"all"`. A non-empty query matches the game name or any of its keys,
/// case-insensitively.
pub fn visible_games<'a>(
    games: &'a [Game],
    categories: &[Category],
    active_category: &str,
    search_query: &str,
) -> Vec<&'a Game> {
    let category_id = resolve_category(categories, active_category).map(|c| c.id);
    let query = search_query.to_lowercase();

    games
        .iter()
        .filter(|g| category_id.map_or(true, |id| g.category_id == id))
        .filter(|g| query.is_empty() || matches_query(g, &query))
        .collect()
}

/// `query` must already be lowercase.
fn matches_query(game: &Game, query: &str) -> bool {
    game.name.to_lowercase().contains(query)
        || game.keys.iter().any(|k| k.to_lowercase().contains(query))
}

/// Name of the category with `id`, or [`UNCATEGORIZED`].
pub fn category_name(categories: &[Category], id: CategoryId) -> &str {
    categories
        .iter()
        .find(|c| c.id == id)
        .map(|c| c.name.as_str())
        .unwrap_or(UNCATEGORIZED)
}
