//! JSON-over-HTTP backend client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::debug;

use super::{BackendError, CatalogBackend};
use crate::catalog::{Category, CategoryId, Game, GameId, GamePayload, NewCategory, SiteConfig};
use crate::config::BackendConfig;

/// Backend client over `reqwest`.
///
/// Paths are resolved against the configured base URL, e.g. a base of
/// `http://host/api` gives `http://host/api/games`.
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    /// Create a new client. Without `timeout_secs` requests never time out.
    pub fn new(config: &BackendConfig) -> Result<Self, BackendError> {
        if config.base_url.trim().is_empty() {
            return Err(BackendError::NotConfigured(
                "backend.base_url is required".to_string(),
            ));
        }

        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}

/// Turn a non-success status into [`BackendError::ApiError`].
async fn check_status(response: Response) -> Result<Response, BackendError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(BackendError::ApiError {
            status: status.as_u16(),
            message: body,
        });
    }
    Ok(response)
}

async fn decode<T: DeserializeOwned>(response: Response, what: &str) -> Result<T, BackendError> {
    let response = check_status(response).await?;
    response.json().await.map_err(|e| {
        BackendError::ParseError(format!("Failed to parse {} response: {}", what, e))
    })
}

#[async_trait]
impl CatalogBackend for HttpBackend {
    async fn list_games(&self) -> Result<Vec<Game>, BackendError> {
        debug!("GET games");
        let response = self.client.get(self.url("games")).send().await?;
        decode(response, "games").await
    }

    async fn list_categories(&self) -> Result<Vec<Category>, BackendError> {
        debug!("GET categories");
        let response = self.client.get(self.url("categories")).send().await?;
        decode(response, "categories").await
    }

    async fn get_site_config(&self) -> Result<SiteConfig, BackendError> {
        debug!("GET config");
        let response = self.client.get(self.url("config")).send().await?;
        decode(response, "config").await
    }

    async fn create_game(&self, game: &GamePayload) -> Result<Game, BackendError> {
        debug!("POST games: name='{}'", game.name);
        let response = self
            .client
            .post(self.url("games"))
            .json(game)
            .send()
            .await?;
        decode(response, "created game").await
    }

    async fn update_game(&self, id: GameId, game: &GamePayload) -> Result<Game, BackendError> {
        debug!("PUT games/{}", id);
        let response = self
            .client
            .put(self.url(&format!("games/{}", id)))
            .json(game)
            .send()
            .await?;
        decode(response, "updated game").await
    }

    async fn delete_game(&self, id: GameId) -> Result<(), BackendError> {
        debug!("DELETE games/{}", id);
        let response = self
            .client
            .delete(self.url(&format!("games/{}", id)))
            .send()
            .await?;
        check_status(response).await?;
        Ok(())
    }

    async fn create_category(&self, category: &NewCategory) -> Result<Category, BackendError> {
        debug!("POST categories: slug='{}'", category.slug);
        let response = self
            .client
            .post(self.url("categories"))
            .json(category)
            .send()
            .await?;
        decode(response, "created category").await
    }

    async fn delete_category(&self, id: CategoryId) -> Result<(), BackendError> {
        debug!("DELETE categories/{}", id);
        let response = self
            .client
            .delete(self.url(&format!("categories/{}", id)))
            .send()
            .await?;
        check_status(response).await?;
        Ok(())
    }

    async fn update_site_config(&self, config: &SiteConfig) -> Result<SiteConfig, BackendError> {
        debug!("PUT config");
        let response = self
            .client
            .put(self.url("config"))
            .json(config)
            .send()
            .await?;
        decode(response, "config").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(base_url: &str) -> BackendConfig {
        BackendConfig {
            base_url: base_url.to_string(),
            timeout_secs: None,
        }
    }

    #[test]
    fn test_trailing_slash_is_dropped() {
        let backend = HttpBackend::new(&config("http://localhost:8080/api/")).unwrap();
        assert_eq!(backend.base_url(), "http://localhost:8080/api");
        assert_eq!(backend.url("games"), "http://localhost:8080/api/games");
    }

    #[test]
    fn test_empty_base_url_rejected() {
        let result = HttpBackend::new(&config("  "));
        assert!(matches!(result, Err(BackendError::NotConfigured(_))));
    }
}
