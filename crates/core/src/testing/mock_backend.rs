//! Mock portal backend for testing.

use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::backend::{BackendError, CatalogBackend};
use crate::catalog::{Category, CategoryId, Game, GameId, GamePayload, NewCategory, SiteConfig};

/// Kind of backend call, used to inject failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CallKind {
    ListGames,
    ListCategories,
    GetSiteConfig,
    CreateGame,
    UpdateGame,
    DeleteGame,
    CreateCategory,
    DeleteCategory,
    UpdateSiteConfig,
}

/// A recorded backend call for test assertions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedCall {
    ListGames,
    ListCategories,
    GetSiteConfig,
    CreateGame(GamePayload),
    UpdateGame(GameId, GamePayload),
    DeleteGame(GameId),
    CreateCategory(NewCategory),
    DeleteCategory(CategoryId),
    UpdateSiteConfig(SiteConfig),
}

impl RecordedCall {
    pub fn kind(&self) -> CallKind {
        match self {
            RecordedCall::ListGames => CallKind::ListGames,
            RecordedCall::ListCategories => CallKind::ListCategories,
            RecordedCall::GetSiteConfig => CallKind::GetSiteConfig,
            RecordedCall::CreateGame(_) => CallKind::CreateGame,
            RecordedCall::UpdateGame(..) => CallKind::UpdateGame,
            RecordedCall::DeleteGame(_) => CallKind::DeleteGame,
            RecordedCall::CreateCategory(_) => CallKind::CreateCategory,
            RecordedCall::DeleteCategory(_) => CallKind::DeleteCategory,
            RecordedCall::UpdateSiteConfig(_) => CallKind::UpdateSiteConfig,
        }
    }
}

/// Mock implementation of the CatalogBackend trait.
///
/// Behaves like a small in-memory backend:
/// - Assigns ids on create and returns the canonical record
/// - Answers 404 for updates/deletes of unknown ids
/// - Records every call for assertions
/// - Fails on demand, once or for every call of a kind
///
/// # Example
///
/// ```rust,ignore
/// use portal_core::testing::{MockBackend, CallKind};
///
/// let backend = MockBackend::with_scenario();
/// backend.fail_on(CallKind::DeleteGame).await;
///
/// let portal = Portal::load(Arc::new(backend), fallback, gate).await;
/// ```
#[derive(Debug, Default)]
pub struct MockBackend {
    games: Arc<RwLock<Vec<Game>>>,
    categories: Arc<RwLock<Vec<Category>>>,
    site_config: Arc<RwLock<SiteConfig>>,
    /// Recorded calls.
    calls: Arc<RwLock<Vec<RecordedCall>>>,
    /// If set, the next call will fail with this error.
    next_error: Arc<RwLock<Option<BackendError>>>,
    /// Call kinds that always fail.
    failing: Arc<RwLock<HashSet<CallKind>>>,
}

impl MockBackend {
    /// Create a new empty mock backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend holding the two-game, two-category scenario from
    /// [`super::fixtures`], with a site config that only sets a title.
    pub fn with_scenario() -> Self {
        Self {
            games: Arc::new(RwLock::new(super::fixtures::scenario_games())),
            categories: Arc::new(RwLock::new(super::fixtures::scenario_categories())),
            site_config: Arc::new(RwLock::new(SiteConfig {
                site_title: Some("Arcade".to_string()),
                ..Default::default()
            })),
            ..Self::default()
        }
    }

    // =========================================================================
    // Data
    // =========================================================================

    pub async fn set_games(&self, games: Vec<Game>) {
        *self.games.write().await = games;
    }

    pub async fn set_categories(&self, categories: Vec<Category>) {
        *self.categories.write().await = categories;
    }

    pub async fn set_site_config(&self, site_config: SiteConfig) {
        *self.site_config.write().await = site_config;
    }

    /// Current server-side games.
    pub async fn games(&self) -> Vec<Game> {
        self.games.read().await.clone()
    }

    /// Current server-side categories.
    pub async fn categories(&self) -> Vec<Category> {
        self.categories.read().await.clone()
    }

    // =========================================================================
    // Call Recording
    // =========================================================================

    /// Get all recorded calls.
    pub async fn recorded_calls(&self) -> Vec<RecordedCall> {
        self.calls.read().await.clone()
    }

    /// Clear recorded calls.
    pub async fn clear_recorded(&self) {
        self.calls.write().await.clear();
    }

    /// Get the number of calls made.
    pub async fn call_count(&self) -> usize {
        self.calls.read().await.len()
    }

    // =========================================================================
    // Error Injection
    // =========================================================================

    /// Configure the next call to fail with the given error.
    pub async fn set_next_error(&self, error: BackendError) {
        *self.next_error.write().await = Some(error);
    }

    /// Make every call of `kind` fail with a 503 until [`Self::clear_failures`].
    pub async fn fail_on(&self, kind: CallKind) {
        self.failing.write().await.insert(kind);
    }

    pub async fn clear_failures(&self) {
        self.failing.write().await.clear();
        *self.next_error.write().await = None;
    }

    /// Record the call, then return the injected error if any.
    async fn enter(&self, call: RecordedCall) -> Result<(), BackendError> {
        let kind = call.kind();
        self.calls.write().await.push(call);

        if let Some(err) = self.next_error.write().await.take() {
            return Err(err);
        }
        if self.failing.read().await.contains(&kind) {
            return Err(BackendError::ApiError {
                status: 503,
                message: format!("injected failure for {:?}", kind),
            });
        }
        Ok(())
    }
}

fn not_found(what: &str, id: u64) -> BackendError {
    BackendError::ApiError {
        status: 404,
        message: format!("{} {} not found", what, id),
    }
}

#[async_trait]
impl CatalogBackend for MockBackend {
    async fn list_games(&self) -> Result<Vec<Game>, BackendError> {
        self.enter(RecordedCall::ListGames).await?;
        Ok(self.games.read().await.clone())
    }

    async fn list_categories(&self) -> Result<Vec<Category>, BackendError> {
        self.enter(RecordedCall::ListCategories).await?;
        Ok(self.categories.read().await.clone())
    }

    async fn get_site_config(&self) -> Result<SiteConfig, BackendError> {
        self.enter(RecordedCall::GetSiteConfig).await?;
        Ok(self.site_config.read().await.clone())
    }

    async fn create_game(&self, game: &GamePayload) -> Result<Game, BackendError> {
        self.enter(RecordedCall::CreateGame(game.clone())).await?;

        let mut games = self.games.write().await;
        let id = games.iter().map(|g| g.id).max().unwrap_or(0) + 1;
        let created = game.clone().into_game(id);
        games.push(created.clone());
        Ok(created)
    }

    async fn update_game(&self, id: GameId, game: &GamePayload) -> Result<Game, BackendError> {
        self.enter(RecordedCall::UpdateGame(id, game.clone())).await?;

        let mut games = self.games.write().await;
        let slot = games
            .iter_mut()
            .find(|g| g.id == id)
            .ok_or_else(|| not_found("Game", id))?;
        *slot = game.clone().into_game(id);
        Ok(slot.clone())
    }

    async fn delete_game(&self, id: GameId) -> Result<(), BackendError> {
        self.enter(RecordedCall::DeleteGame(id)).await?;

        let mut games = self.games.write().await;
        let before = games.len();
        games.retain(|g| g.id != id);
        if games.len() == before {
            return Err(not_found("Game", id));
        }
        Ok(())
    }

    async fn create_category(&self, category: &NewCategory) -> Result<Category, BackendError> {
        self.enter(RecordedCall::CreateCategory(category.clone()))
            .await?;

        let mut categories = self.categories.write().await;
        let id = categories.iter().map(|c| c.id).max().unwrap_or(0) + 1;
        let created = Category {
            id,
            name: category.name.clone(),
            slug: category.slug.clone(),
        };
        categories.push(created.clone());
        Ok(created)
    }

    async fn delete_category(&self, id: CategoryId) -> Result<(), BackendError> {
        self.enter(RecordedCall::DeleteCategory(id)).await?;

        let mut categories = self.categories.write().await;
        let before = categories.len();
        categories.retain(|c| c.id != id);
        if categories.len() == before {
            return Err(not_found("Category", id));
        }
        Ok(())
    }

    async fn update_site_config(&self, config: &SiteConfig) -> Result<SiteConfig, BackendError> {
        self.enter(RecordedCall::UpdateSiteConfig(config.clone()))
            .await?;

        *self.site_config.write().await = config.clone();
        Ok(config.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::fixtures;

    #[tokio::test]
    async fn test_create_assigns_next_id() {
        let backend = MockBackend::with_scenario();
        let payload = fixtures::game_draft("Tetris", 1).into_payload().unwrap();

        let game = backend.create_game(&payload).await.unwrap();
        assert_eq!(game.id, 3);
        assert_eq!(backend.games().await.len(), 3);
    }

    #[tokio::test]
    async fn test_unknown_ids_are_not_found() {
        let backend = MockBackend::new();

        let result = backend.delete_game(5).await;
        assert!(matches!(
            result,
            Err(BackendError::ApiError { status: 404, .. })
        ));

        let result = backend.delete_category(5).await;
        assert!(matches!(
            result,
            Err(BackendError::ApiError { status: 404, .. })
        ));
    }

    #[tokio::test]
    async fn test_recorded_calls() {
        let backend = MockBackend::with_scenario();

        backend.list_games().await.ok();
        backend.delete_game(1).await.ok();

        let calls = backend.recorded_calls().await;
        assert_eq!(calls, vec![RecordedCall::ListGames, RecordedCall::DeleteGame(1)]);
    }

    #[tokio::test]
    async fn test_error_injection() {
        let backend = MockBackend::with_scenario();
        backend
            .set_next_error(BackendError::ParseError("bad json".to_string()))
            .await;

        assert!(backend.list_games().await.is_err());
        // Error should be consumed
        assert!(backend.list_games().await.is_ok());

        backend.fail_on(CallKind::ListCategories).await;
        assert!(backend.list_categories().await.is_err());
        assert!(backend.list_categories().await.is_err());
        assert!(backend.list_games().await.is_ok());

        backend.clear_failures().await;
        assert!(backend.list_categories().await.is_ok());
    }
}
