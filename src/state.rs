//! Application state - single source of truth

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::pagination;

/// Characters shown per grid page.
pub const PAGE_SIZE: usize = 8;

/// An episode from the catalog listing
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Episode {
    pub id: u32,
    pub name: String,
    /// Episode code, e.g. `S01E01`
    #[serde(default, rename = "episode")]
    pub code: String,
    #[serde(default)]
    pub air_date: String,
    /// Character resource URLs, in the order the API lists them
    #[serde(default)]
    pub characters: Vec<String>,
}

/// A character card
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Character {
    pub id: u32,
    pub name: String,
    pub image: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub species: String,
}

/// One page of the episode listing
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct EpisodePage {
    pub episodes: Vec<Episode>,
    /// URL of the following listing page, if any
    pub next: Option<String>,
}

/// View state for the episode browser
#[derive(Clone, Debug, tui_dispatch::DebugState, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppState {
    // --- Catalog ---
    /// Episodes in listing order
    #[debug(skip)]
    pub episodes: Vec<Episode>,

    /// Whether an episode listing request is in flight
    #[debug(section = "Catalog", label = "Loading")]
    pub episodes_loading: bool,

    /// Next listing page reported by the API
    #[debug(section = "Catalog", label = "Next page", debug_fmt)]
    pub episodes_next: Option<String>,

    /// Highlighted row in the sidebar
    #[debug(section = "Catalog", label = "Cursor", debug_fmt)]
    pub episode_cursor: usize,

    // --- Selection ---
    #[debug(section = "Selection", label = "Episode", debug_fmt)]
    pub selected_episode: Option<u32>,

    /// Characters of the selected episode
    #[debug(skip)]
    pub characters: Vec<Character>,

    /// Whether the character batch for the selection is in flight
    #[debug(section = "Selection", label = "Loading")]
    pub characters_loading: bool,

    // --- Pagination ---
    /// 1-based page into `characters`
    #[debug(section = "Pagination", label = "Page", debug_fmt)]
    pub page: usize,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            episodes: Vec::new(),
            episodes_loading: false,
            episodes_next: None,
            episode_cursor: 0,
            selected_episode: None,
            characters: Vec::new(),
            characters_loading: false,
            page: 1,
        }
    }
}

impl AppState {
    /// State with an already loaded catalog
    pub fn with_episodes(episodes: Vec<Episode>) -> Self {
        Self {
            episodes,
            ..Default::default()
        }
    }

    pub fn episode(&self, id: u32) -> Option<&Episode> {
        self.episodes.iter().find(|episode| episode.id == id)
    }

    pub fn selected(&self) -> Option<&Episode> {
        self.selected_episode.and_then(|id| self.episode(id))
    }

    /// Characters in the current selection; zero when nothing matched
    pub fn character_count(&self) -> usize {
        self.characters.len()
    }

    pub fn total_pages(&self) -> usize {
        pagination::total_pages(self.characters.len(), PAGE_SIZE)
    }

    /// The slice of characters the grid shows
    pub fn visible_characters(&self) -> &[Character] {
        pagination::page_slice(&self.characters, self.page, PAGE_SIZE)
    }

    pub fn has_next_page(&self) -> bool {
        self.page < self.total_pages()
    }

    pub fn has_prev_page(&self) -> bool {
        self.page > 1
    }
}
