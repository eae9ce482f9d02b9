//! Backend resource contract for games, categories and site configuration.
//!
//! The backend is the source of truth. Reads return full snapshots; writes
//! return the canonical record the local cache is reconciled with.

mod http;

pub use http::HttpBackend;

use async_trait::async_trait;
use thiserror::Error;

use crate::catalog::{Category, CategoryId, Game, GameId, GamePayload, NewCategory, SiteConfig};

/// Errors talking to the backend.
#[derive(Debug, Error)]
pub enum BackendError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Backend answered with a non-success status.
    #[error("Backend error: {status} - {message}")]
    ApiError { status: u16, message: String },

    /// Failed to parse response.
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Client could not be built from its configuration.
    #[error("Backend not configured: {0}")]
    NotConfigured(String),
}

/// Access to the portal backend.
#[async_trait]
pub trait CatalogBackend: Send + Sync {
    /// `GET /games`
    async fn list_games(&self) -> Result<Vec<Game>, BackendError>;

    /// `GET /categories`
    async fn list_categories(&self) -> Result<Vec<Category>, BackendError>;

    /// `GET /config`
    async fn get_site_config(&self) -> Result<SiteConfig, BackendError>;

    /// `POST /games`
    async fn create_game(&self, game: &GamePayload) -> Result<Game, BackendError>;

    /// `PUT /games/{id}`
    async fn update_game(&self, id: GameId, game: &GamePayload) -> Result<Game, BackendError>;

    /// `DELETE /games/{id}`
    async fn delete_game(&self, id: GameId) -> Result<(), BackendError>;

    /// `POST /categories`
    async fn create_category(&self, category: &NewCategory) -> Result<Category, BackendError>;

    /// `DELETE /categories/{id}`
    async fn delete_category(&self, id: CategoryId) -> Result<(), BackendError>;

    /// `PUT /config`
    async fn update_site_config(&self, config: &SiteConfig) -> Result<SiteConfig, BackendError>;
}
