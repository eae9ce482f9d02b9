//! Game catalog model, wire codec and client-side filtering.
//!
//! Everything here is synchronous and free of I/O. The [`CatalogState`]
//! holds the local cache of the backend's collections together with the
//! active category and search text.

mod filter;
pub mod keys;
mod slug;
mod state;
mod types;

pub use filter::{category_name, resolve_category, visible_games, UNCATEGORIZED};
pub use slug::{derive_slug, is_reserved, ALL_CATEGORIES};
pub use state::{CatalogState, CategoryTab, GameCard, GridView, ALL_CATEGORIES_LABEL};
pub use types::*;

use thiserror::Error;

/// Local checks that fail before any request is made.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required input was empty.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid size: {0} (expected small, medium or large)")]
    InvalidSize(String),

    /// The selected category does not exist locally.
    #[error("Unknown category: {0}")]
    UnknownCategory(CategoryId),

    /// The edited game does not exist locally.
    #[error("Unknown game: {0}")]
    UnknownGame(GameId),

    #[error("A category with slug '{0}' already exists")]
    DuplicateSlug(String),

    #[error("The slug '{0}' is reserved")]
    ReservedSlug(String),

    /// Deleting the category would orphan games.
    #[error("Category {category_id} still contains {games} game(s)")]
    CategoryInUse { category_id: CategoryId, games: usize },
}
