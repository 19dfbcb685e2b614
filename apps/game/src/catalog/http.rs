//! REST adapter for the live creature catalog.
//!
//! Speaks the PokeAPI v2 shape: `GET {base_url}/pokemon/{id}` returns a
//! creature document; the adapter keeps only the fields the core needs and
//! maps the sprite chain down to a single best image URL.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::catalog::provider::CatalogProvider;
use crate::domain::Entity;
use crate::errors::CatalogError;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP-backed [`CatalogProvider`].
pub struct HttpCatalog {
    client: reqwest::Client,
    base_url: String,
}

impl HttpCatalog {
    /// Public instance of the catalog this adapter was written against.
    pub const DEFAULT_BASE_URL: &'static str = "https://pokeapi.co/api/v2";

    /// Build an adapter for the catalog at `base_url` (no trailing slash).
    pub fn new(base_url: impl Into<String>) -> Result<Self, CatalogError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| CatalogError::transport(format!("failed to build HTTP client: {e}")))?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }
}

#[async_trait]
impl CatalogProvider for HttpCatalog {
    async fn fetch_entity(&self, id: u32) -> Result<Entity, CatalogError> {
        let url = format!("{}/pokemon/{id}", self.base_url);
        debug!(id, "fetching catalog entity");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| CatalogError::transport(format!("request to {url} failed: {e}")))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(CatalogError::NotFound { id });
        }
        if !response.status().is_success() {
            return Err(CatalogError::transport(format!(
                "catalog answered {} for {url}",
                response.status()
            )));
        }

        let dto: CreatureDto = response
            .json()
            .await
            .map_err(|e| CatalogError::transport(format!("undecodable catalog payload: {e}")))?;

        Ok(dto.into())
    }
}

// Wire DTOs, trimmed to the fields the core reads.

#[derive(Debug, Deserialize)]
struct CreatureDto {
    id: u32,
    name: String,
    sprites: SpritesDto,
}

#[derive(Debug, Deserialize)]
struct SpritesDto {
    front_default: Option<String>,
    other: Option<OtherSpritesDto>,
}

#[derive(Debug, Deserialize)]
struct OtherSpritesDto {
    #[serde(rename = "official-artwork")]
    official_artwork: Option<ArtworkDto>,
}

#[derive(Debug, Deserialize)]
struct ArtworkDto {
    front_default: Option<String>,
}

impl From<CreatureDto> for Entity {
    fn from(dto: CreatureDto) -> Self {
        // Prefer the official artwork, fall back to the plain front sprite.
        let artwork = dto
            .sprites
            .other
            .and_then(|o| o.official_artwork)
            .and_then(|a| a.front_default);
        Entity {
            id: dto.id,
            name: dto.name,
            image_url: artwork.or(dto.sprites.front_default),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::CreatureDto;
    use crate::domain::Entity;

    #[test]
    fn prefers_official_artwork() {
        let dto: CreatureDto = serde_json::from_str(
            r#"{
                "id": 1,
                "name": "bulbasaur",
                "sprites": {
                    "front_default": "https://img.example/front/1.png",
                    "other": {
                        "official-artwork": {
                            "front_default": "https://img.example/art/1.png"
                        }
                    }
                }
            }"#,
        )
        .expect("valid payload");

        let entity = Entity::from(dto);
        assert_eq!(entity.id, 1);
        assert_eq!(entity.name, "bulbasaur");
        assert_eq!(
            entity.image_url.as_deref(),
            Some("https://img.example/art/1.png")
        );
    }

    #[test]
    fn falls_back_to_front_sprite() {
        let dto: CreatureDto = serde_json::from_str(
            r#"{
                "id": 25,
                "name": "pikachu",
                "sprites": {
                    "front_default": "https://img.example/front/25.png",
                    "other": { "official-artwork": { "front_default": null } }
                }
            }"#,
        )
        .expect("valid payload");

        let entity = Entity::from(dto);
        assert_eq!(
            entity.image_url.as_deref(),
            Some("https://img.example/front/25.png")
        );
    }

    #[test]
    fn tolerates_missing_sprites() {
        let dto: CreatureDto = serde_json::from_str(
            r#"{
                "id": 132,
                "name": "ditto",
                "sprites": { "front_default": null }
            }"#,
        )
        .expect("valid payload");

        let entity = Entity::from(dto);
        assert_eq!(entity.image_url, None);
    }

    #[test]
    fn ignores_fields_the_core_does_not_read() {
        let dto: CreatureDto = serde_json::from_str(
            r#"{
                "id": 7,
                "name": "squirtle",
                "base_experience": 63,
                "height": 5,
                "sprites": {
                    "front_default": "https://img.example/front/7.png",
                    "back_default": "https://img.example/back/7.png"
                }
            }"#,
        )
        .expect("extra fields are ignored");

        assert_eq!(dto.name, "squirtle");
    }
}
