//! Testing utilities and a mock backend.
//!
//! This module provides an in-memory implementation of the backend trait,
//! allowing controller and view tests without a running server.
//!
//! # Example
//!
//! ```rust,ignore
//! use portal_core::testing::{fixtures, MockBackend};
//!
//! let backend = Arc::new(MockBackend::with_scenario());
//! let mut portal = Portal::load(backend.clone(), fixtures::site_fallback(), gate).await;
//!
//! portal.create_category("Action Games").await?;
//! assert_eq!(backend.call_count().await, 4);
//! ```

mod mock_backend;

pub use mock_backend::{CallKind, MockBackend, RecordedCall};

/// Test fixtures and helper functions.
pub mod fixtures {
    use crate::catalog::{
        derive_slug, Category, CategoryId, Game, GameDraft, GameId, GameSize, SiteConfig,
    };
    use crate::config::SiteDefaultsConfig;

    /// Create a test game with reasonable defaults.
    pub fn game(id: GameId, name: &str, category_id: CategoryId) -> Game {
        let slug = derive_slug(name);
        Game {
            id,
            name: name.to_string(),
            cover: format!("covers/{}.png", slug),
            url: format!("https://games.example/{}", slug),
            video_preview: None,
            keys: Vec::new(),
            category_id,
            size: GameSize::Medium,
        }
    }

    /// Create a test category; the slug is derived from the name.
    pub fn category(id: CategoryId, name: &str) -> Category {
        Category {
            id,
            name: name.to_string(),
            slug: derive_slug(name),
        }
    }

    /// Create a complete admin draft for a new game.
    pub fn game_draft(name: &str, category_id: CategoryId) -> GameDraft {
        let slug = derive_slug(name);
        GameDraft {
            name: name.to_string(),
            cover: format!("covers/{}.png", slug),
            url: format!("https://games.example/{}", slug),
            video_preview: String::new(),
            keys: String::new(),
            category_id: Some(category_id),
            size: GameSize::Medium,
        }
    }

    /// Zelda (adventure) and Mario Kart (racing).
    pub fn scenario_games() -> Vec<Game> {
        vec![game(1, "Zelda", 1), game(2, "Mario Kart", 2)]
    }

    pub fn scenario_categories() -> Vec<Category> {
        vec![category(1, "adventure"), category(2, "racing")]
    }

    /// The built-in site fallback.
    pub fn site_fallback() -> SiteConfig {
        SiteConfig::from(&SiteDefaultsConfig::default())
    }
}
