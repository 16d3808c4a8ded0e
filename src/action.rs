//! Actions - every event the reducer understands

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::state::{Character, EpisodePage};

#[derive(tui_dispatch::Action, Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[action(infer_categories)]
pub enum Action {
    // ===== Episodes category =====
    /// Intent: load the first page of the episode listing
    EpisodesFetch,

    /// Intent: append the next page of the episode listing
    EpisodesFetchMore,

    /// Result: first listing page loaded
    EpisodesDidLoad(EpisodePage),

    /// Result: a following listing page loaded
    EpisodesDidAppend(EpisodePage),

    /// Result: listing request failed
    EpisodesDidError(String),

    // ===== Episode category =====
    /// Move the sidebar cursor to a row
    EpisodeHighlight(usize),

    /// Select an episode by id (triggers the character fetch)
    EpisodeSelect(u32),

    // ===== Characters category =====
    /// Result: characters for an episode loaded
    CharactersDidLoad {
        episode_id: u32,
        characters: Vec<Character>,
    },

    /// Result: character request for an episode failed
    CharactersDidError { episode_id: u32, error: String },

    // ===== Page category =====
    PageNext,
    PagePrev,

    // ===== Uncategorized (global) =====
    /// Exit the application
    Quit,
}
