//! The portal controller.
//!
//! [`Portal`] owns the [`CatalogState`], the backend handle and the access
//! gate. Filtering goes straight to the state; admin mutations follow one
//! protocol:
//!
//! 1. validate locally, returning [`PortalError::Validation`] without any request;
//! 2. send the request, returning [`PortalError::Operation`] on failure;
//! 3. merge the backend's canonical record into the state.
//!
//! Mutations take `&mut self`, so at most one is in flight at a time.

mod command;
mod error;

pub use command::{Command, CommandError, Outcome};
pub use error::{AdminAction, PortalError};

use std::sync::Arc;

use tracing::{info, warn};

use crate::access::AccessGate;
use crate::backend::{BackendError, CatalogBackend, HttpBackend};
use crate::catalog::{
    derive_slug, is_reserved, CatalogState, Category, CategoryId, Game, GameDraft, GameId,
    GamePayload, NewCategory, SiteConfig, ValidationError,
};
use crate::config::Config;

pub struct Portal {
    backend: Arc<dyn CatalogBackend>,
    state: CatalogState,
    site_fallback: SiteConfig,
    gate: AccessGate,
}

impl Portal {
    /// Wrap an already loaded state.
    pub fn new(
        backend: Arc<dyn CatalogBackend>,
        state: CatalogState,
        site_fallback: SiteConfig,
        gate: AccessGate,
    ) -> Self {
        Self {
            backend,
            state,
            site_fallback,
            gate,
        }
    }

    /// Fetch games, categories and site config concurrently.
    ///
    /// All three must succeed. If any request fails the portal starts with
    /// empty collections and `site_fallback` as its site config.
    pub async fn load(
        backend: Arc<dyn CatalogBackend>,
        site_fallback: SiteConfig,
        gate: AccessGate,
    ) -> Self {
        let loaded = tokio::try_join!(
            backend.list_games(),
            backend.list_categories(),
            backend.get_site_config(),
        );

        let state = match loaded {
            Ok((games, categories, site_config)) => {
                info!(
                    "Loaded catalog: {} games, {} categories",
                    games.len(),
                    categories.len()
                );
                CatalogState::new(games, categories, site_config)
            }
            Err(e) => {
                warn!("Failed to load catalog, starting empty: {}", e);
                CatalogState::new(Vec::new(), Vec::new(), site_fallback.clone())
            }
        };

        Self::new(backend, state, site_fallback, gate)
    }

    /// Build an HTTP backend from `config` and load through it.
    pub async fn connect(config: &Config) -> Result<Self, BackendError> {
        let backend: Arc<dyn CatalogBackend> = Arc::new(HttpBackend::new(&config.backend)?);
        info!("Using backend at {}", config.backend.base_url);
        Ok(Self::load(
            backend,
            SiteConfig::from(&config.site),
            AccessGate::new(config.admin.pin.clone()),
        )
        .await)
    }

    pub fn state(&self) -> &CatalogState {
        &self.state
    }

    pub fn gate(&self) -> &AccessGate {
        &self.gate
    }

    pub fn gate_mut(&mut self) -> &mut AccessGate {
        &mut self.gate
    }

    /// Site config with fallbacks applied to missing or blank fields.
    pub fn site_config(&self) -> SiteConfig {
        self.state.site_config().with_fallback(&self.site_fallback)
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.state.set_search_query(query);
    }

    pub fn select_category(&mut self, slug: impl Into<String>) {
        self.state.select_category(slug);
    }

    // ========================================================================
    // Games
    // ========================================================================

    pub async fn create_game(&mut self, draft: GameDraft) -> Result<Game, PortalError> {
        let action = AdminAction::CreateGame;
        let payload = self.validate_game(action, draft)?;

        let game = self
            .backend
            .create_game(&payload)
            .await
            .map_err(|e| operation_failed(action, e))?;

        info!("Created game {} '{}'", game.id, game.name);
        self.state.push_game(game.clone());
        Ok(game)
    }

    pub async fn update_game(&mut self, id: GameId, draft: GameDraft) -> Result<Game, PortalError> {
        let action = AdminAction::UpdateGame;
        if self.state.game(id).is_none() {
            return Err(rejected(action, ValidationError::UnknownGame(id)));
        }
        let payload = self.validate_game(action, draft)?;

        let game = self
            .backend
            .update_game(id, &payload)
            .await
            .map_err(|e| operation_failed(action, e))?;

        info!("Updated game {} '{}'", id, game.name);
        self.state.replace_game(id, game.clone());
        Ok(game)
    }

    pub async fn delete_game(&mut self, id: GameId) -> Result<(), PortalError> {
        let action = AdminAction::DeleteGame;
        self.backend
            .delete_game(id)
            .await
            .map_err(|e| operation_failed(action, e))?;

        info!("Deleted game {}", id);
        self.state.remove_game(id);
        Ok(())
    }

    fn validate_game(
        &self,
        action: AdminAction,
        draft: GameDraft,
    ) -> Result<GamePayload, PortalError> {
        let payload = draft.into_payload().map_err(|e| rejected(action, e))?;
        if self.state.category(payload.category_id).is_none() {
            return Err(rejected(
                action,
                ValidationError::UnknownCategory(payload.category_id),
            ));
        }
        Ok(payload)
    }

    // ========================================================================
    // Categories
    // ========================================================================

    pub async fn create_category(&mut self, name: &str) -> Result<Category, PortalError> {
        let action = AdminAction::CreateCategory;
        let name = name.trim();
        if name.is_empty() {
            return Err(rejected(action, ValidationError::MissingField("name")));
        }

        let slug = derive_slug(name);
        if is_reserved(&slug) {
            return Err(rejected(action, ValidationError::ReservedSlug(slug)));
        }
        if self.state.slug_taken(&slug) {
            return Err(rejected(action, ValidationError::DuplicateSlug(slug)));
        }

        let request = NewCategory {
            name: name.to_string(),
            slug,
        };
        let category = self
            .backend
            .create_category(&request)
            .await
            .map_err(|e| operation_failed(action, e))?;

        info!("Created category {} '{}'", category.id, category.slug);
        self.state.push_category(category.clone());
        Ok(category)
    }

    pub async fn delete_category(&mut self, id: CategoryId) -> Result<(), PortalError> {
        let action = AdminAction::DeleteCategory;
        let games = self.state.games_in_category(id);
        if games > 0 {
            return Err(rejected(
                action,
                ValidationError::CategoryInUse {
                    category_id: id,
                    games,
                },
            ));
        }

        self.backend
            .delete_category(id)
            .await
            .map_err(|e| operation_failed(action, e))?;

        info!("Deleted category {}", id);
        self.state.remove_category(id);
        Ok(())
    }

    // ========================================================================
    // Site configuration
    // ========================================================================

    /// Save the site config. Blank or missing fields in `update` keep their
    /// current effective value.
    pub async fn update_site_config(
        &mut self,
        update: SiteConfig,
    ) -> Result<SiteConfig, PortalError> {
        let action = AdminAction::UpdateSiteConfig;
        let request = update.with_fallback(&self.site_config());

        let saved = self
            .backend
            .update_site_config(&request)
            .await
            .map_err(|e| operation_failed(action, e))?;

        info!("Saved site configuration");
        self.state.replace_site_config(saved.clone());
        Ok(saved)
    }
}

fn rejected(action: AdminAction, source: ValidationError) -> PortalError {
    warn!("Rejected {}: {}", action, source);
    PortalError::Validation { action, source }
}

fn operation_failed(action: AdminAction, source: BackendError) -> PortalError {
    warn!("Failed to {}: {}", action, source);
    PortalError::Operation { action, source }
}
