//! Catalog records as exchanged with the backend.

use serde::{Deserialize, Deserializer, Serialize};

use super::keys::{self, split_keys};
use super::ValidationError;

/// Backend-assigned game identifier.
pub type GameId = u64;

/// Backend-assigned category identifier.
pub type CategoryId = u64;

// ============================================================================
// Games
// ============================================================================

/// Grid tile size of a game card.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum GameSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl GameSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameSize::Small => "small",
            GameSize::Medium => "medium",
            GameSize::Large => "large",
        }
    }
}

impl std::str::FromStr for GameSize {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "small" => Ok(GameSize::Small),
            "" | "medium" => Ok(GameSize::Medium),
            "large" => Ok(GameSize::Large),
            other => Err(ValidationError::InvalidSize(other.to_string())),
        }
    }
}

/// `null` and a missing size both read as the default size.
fn size_or_default<'de, D>(deserializer: D) -> Result<GameSize, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<GameSize>::deserialize(deserializer)?.unwrap_or_default())
}

/// A game as stored by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: GameId,
    pub name: String,
    /// Cover image reference.
    pub cover: String,
    /// Launch URL.
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_preview: Option<String>,
    /// Search keys, in entry order.
    #[serde(default, with = "keys::wire")]
    pub keys: Vec<String>,
    pub category_id: CategoryId,
    #[serde(default, deserialize_with = "size_or_default")]
    pub size: GameSize,
}

/// Body of `POST /games` and `PUT /games/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GamePayload {
    pub name: String,
    pub cover: String,
    pub url: String,
    #[serde(default)]
    pub video_preview: Option<String>,
    #[serde(default, with = "keys::wire")]
    pub keys: Vec<String>,
    pub category_id: CategoryId,
    #[serde(default, deserialize_with = "size_or_default")]
    pub size: GameSize,
}

impl GamePayload {
    /// Build the canonical record the backend would return for this payload.
    pub fn into_game(self, id: GameId) -> Game {
        Game {
            id,
            name: self.name,
            cover: self.cover,
            url: self.url,
            video_preview: self.video_preview,
            keys: self.keys,
            category_id: self.category_id,
            size: self.size,
        }
    }
}

/// Raw admin form input for a game.
///
/// Text fields hold whatever the user typed; `keys` is the comma-separated
/// entry. `category_id` is `None` until a category is selected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameDraft {
    pub name: String,
    pub cover: String,
    pub url: String,
    pub video_preview: String,
    pub keys: String,
    pub category_id: Option<CategoryId>,
    pub size: GameSize,
}

impl GameDraft {
    /// Trim the inputs and check required fields.
    pub fn into_payload(self) -> Result<GamePayload, ValidationError> {
        let name = required(&self.name, "name")?;
        let cover = required(&self.cover, "cover")?;
        let url = required(&self.url, "url")?;
        let category_id = self
            .category_id
            .ok_or(ValidationError::MissingField("category"))?;

        let video_preview = self.video_preview.trim();

        Ok(GamePayload {
            name,
            cover,
            url,
            video_preview: (!video_preview.is_empty()).then(|| video_preview.to_string()),
            keys: split_keys(&self.keys),
            category_id,
            size: self.size,
        })
    }
}

/// Prefill for an edit form.
impl From<&Game> for GameDraft {
    fn from(game: &Game) -> Self {
        Self {
            name: game.name.clone(),
            cover: game.cover.clone(),
            url: game.url.clone(),
            video_preview: game.video_preview.clone().unwrap_or_default(),
            keys: game.keys.join(", "),
            category_id: Some(game.category_id),
            size: game.size,
        }
    }
}

fn required(value: &str, field: &'static str) -> Result<String, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::MissingField(field));
    }
    Ok(value.to_string())
}

/// Where a game card click leads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchTarget {
    pub title: String,
    pub url: String,
}

// ============================================================================
// Categories
// ============================================================================

/// A game category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub slug: String,
}

/// Body of `POST /categories`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewCategory {
    pub name: String,
    pub slug: String,
}

// ============================================================================
// Site configuration
// ============================================================================

/// Site branding record. Every field is optional; see [`SiteConfig::with_fallback`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site_title: Option<String>,
}

impl SiteConfig {
    /// Field by field, keep non-blank values from `self` and take the rest from `fallback`.
    pub fn with_fallback(&self, fallback: &SiteConfig) -> SiteConfig {
        fn pick(own: &Option<String>, other: &Option<String>) -> Option<String> {
            match own.as_deref().map(str::trim) {
                Some(v) if !v.is_empty() => Some(v.to_string()),
                _ => other.clone(),
            }
        }

        SiteConfig {
            logo_url: pick(&self.logo_url, &fallback.logo_url),
            primary_color: pick(&self.primary_color, &fallback.primary_color),
            secondary_color: pick(&self.secondary_color, &fallback.secondary_color),
            text_color: pick(&self.text_color, &fallback.text_color),
            site_title: pick(&self.site_title, &fallback.site_title),
        }
    }
}
