//! Rick and Morty API client

use serde::Deserialize;
use url::Url;

use crate::state::{Character, Episode, EpisodePage};

/// Public API root. Joins below rely on the trailing slash.
pub const DEFAULT_BASE_URL: &str = "https://rickandmortyapi.com/api/";

#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("{url} returned {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),
}

// ============================================================================
// Wire types
// ============================================================================

#[derive(Debug, Deserialize)]
struct EpisodeListResponse {
    info: ListInfo,
    results: Vec<Episode>,
}

#[derive(Debug, Deserialize)]
struct ListInfo {
    next: Option<String>,
}

/// `/character/{ids}` answers a bare object for one id and an array otherwise.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CharacterPayload {
    Many(Vec<Character>),
    One(Box<Character>),
}

impl From<CharacterPayload> for Vec<Character> {
    fn from(payload: CharacterPayload) -> Self {
        match payload {
            CharacterPayload::Many(characters) => characters,
            CharacterPayload::One(character) => vec![*character],
        }
    }
}

// ============================================================================
// Character references
// ============================================================================

/// Numeric id at the end of a character resource URL.
pub fn character_id(reference: &str) -> Option<u32> {
    reference
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .and_then(|segment| segment.parse().ok())
}

/// Comma-joined ids for a batch lookup, in reference order.
///
/// References without a numeric suffix are skipped.
pub fn character_batch_key(references: &[String]) -> String {
    references
        .iter()
        .filter_map(|reference| {
            let id = character_id(reference);
            if id.is_none() {
                tracing::warn!(reference = %reference, "skipping character reference without id");
            }
            id
        })
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

// ============================================================================
// Client
// ============================================================================

#[derive(Clone, Debug)]
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: Url,
}

impl CatalogClient {
    pub fn new(base_url: Url) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// First page of the episode listing
    pub async fn fetch_episodes(&self) -> Result<EpisodePage, ApiError> {
        let url = self.base_url.join("episode")?;
        self.fetch_episode_page(url).await
    }

    /// A listing page by the absolute URL the API reported as `next`
    pub async fn fetch_episodes_at(&self, url: &str) -> Result<EpisodePage, ApiError> {
        let url = Url::parse(url)?;
        self.fetch_episode_page(url).await
    }

    /// Characters for a comma-joined id list
    pub async fn fetch_characters(&self, ids: &str) -> Result<Vec<Character>, ApiError> {
        let url = self.base_url.join(&format!("character/{ids}"))?;
        let payload: CharacterPayload = self.get_json(url).await?;
        Ok(payload.into())
    }

    async fn fetch_episode_page(&self, url: Url) -> Result<EpisodePage, ApiError> {
        let response: EpisodeListResponse = self.get_json(url).await?;
        Ok(EpisodePage {
            episodes: response.results,
            next: response.info.next,
        })
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: Url) -> Result<T, ApiError> {
        tracing::debug!(url = %url, "GET");
        let response = self.http.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                url: url.to_string(),
                status,
            });
        }
        Ok(response.json().await?)
    }
}
