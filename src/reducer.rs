//! Reducer - pure function: (state, action) -> DispatchResult

use tui_dispatch::DispatchResult;

use crate::action::Action;
use crate::api;
use crate::effect::Effect;
use crate::pagination;
use crate::state::AppState;

pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        // ===== Catalog =====
        Action::EpisodesFetch => {
            if state.episodes_loading {
                return DispatchResult::unchanged();
            }
            state.episodes_loading = true;
            DispatchResult::changed_with(Effect::LoadEpisodes)
        }

        Action::EpisodesFetchMore => {
            if state.episodes_loading {
                return DispatchResult::unchanged();
            }
            let Some(url) = state.episodes_next.clone() else {
                return DispatchResult::unchanged();
            };
            state.episodes_loading = true;
            DispatchResult::changed_with(Effect::LoadMoreEpisodes { url })
        }

        Action::EpisodesDidLoad(page) => {
            state.episodes = page.episodes;
            state.episodes_next = page.next;
            state.episodes_loading = false;
            state.episode_cursor = 0;
            DispatchResult::changed()
        }

        Action::EpisodesDidAppend(page) => {
            state.episodes.extend(page.episodes);
            state.episodes_next = page.next;
            state.episodes_loading = false;
            DispatchResult::changed()
        }

        Action::EpisodesDidError(_) => {
            state.episodes_loading = false;
            DispatchResult::changed()
        }

        // ===== Selection =====
        Action::EpisodeHighlight(index) => {
            if index < state.episodes.len() && index != state.episode_cursor {
                state.episode_cursor = index;
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        Action::EpisodeSelect(episode_id) => {
            state.selected_episode = Some(episode_id);
            state.characters.clear();
            state.page = 1;

            let Some(index) = state.episodes.iter().position(|e| e.id == episode_id) else {
                state.characters_loading = false;
                return DispatchResult::changed();
            };
            state.episode_cursor = index;

            let ids = api::character_batch_key(&state.episodes[index].characters);
            if ids.is_empty() {
                state.characters_loading = false;
                return DispatchResult::changed();
            }

            state.characters_loading = true;
            DispatchResult::changed_with(Effect::LoadCharacters { episode_id, ids })
        }

        Action::CharactersDidLoad {
            episode_id,
            characters,
        } => {
            if state.selected_episode != Some(episode_id) {
                tracing::debug!(episode_id, "dropping characters for superseded selection");
                return DispatchResult::unchanged();
            }
            state.characters = characters;
            state.characters_loading = false;
            state.page = 1;
            DispatchResult::changed()
        }

        Action::CharactersDidError { episode_id, .. } => {
            if state.selected_episode != Some(episode_id) {
                return DispatchResult::unchanged();
            }
            state.characters_loading = false;
            DispatchResult::changed()
        }

        // ===== Pagination =====
        Action::PageNext => {
            let next = pagination::next_page(state.page, state.total_pages());
            if next == state.page {
                return DispatchResult::unchanged();
            }
            state.page = next;
            DispatchResult::changed()
        }

        Action::PagePrev => {
            let prev = pagination::prev_page(state.page);
            if prev == state.page {
                return DispatchResult::unchanged();
            }
            state.page = prev;
            DispatchResult::changed()
        }

        Action::Quit => DispatchResult::unchanged(),
    }
}
