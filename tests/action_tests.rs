//! Store and reducer tests driven through EffectStore

use pretty_assertions::assert_eq;
use tui_dispatch::testing::*;
use tui_dispatch::{EffectStore, NumericComponentId, assert_emitted, assert_not_emitted};
use episode_browser::{
    action::Action,
    components::{BrowserScreen, BrowserScreenProps, Component},
    effect::Effect,
    reducer::reducer,
    state::{AppState, Character, Episode, EpisodePage},
};

fn catalog(count: u32) -> Vec<Episode> {
    (1..=count)
        .map(|id| Episode {
            id,
            name: format!("Episode {id}"),
            code: format!("S01E{id:02}"),
            air_date: String::new(),
            characters: (1..=id)
                .map(|c| format!("https://rickandmortyapi.com/api/character/{c}"))
                .collect(),
        })
        .collect()
}

fn characters(count: u32) -> Vec<Character> {
    (1..=count)
        .map(|id| Character {
            id,
            name: format!("Character {id}"),
            image: format!("https://rickandmortyapi.com/api/character/avatar/{id}.jpeg"),
            ..Default::default()
        })
        .collect()
}

#[test]
fn test_startup_fetch_loads_catalog() {
    let mut store = EffectStore::new(AppState::default(), reducer);

    let result = store.dispatch(Action::EpisodesFetch);
    assert!(result.changed);
    assert_eq!(result.effects, vec![Effect::LoadEpisodes]);

    store.dispatch(Action::EpisodesDidLoad(EpisodePage {
        episodes: catalog(3),
        next: Some("https://rickandmortyapi.com/api/episode?page=2".into()),
    }));

    assert_eq!(store.state().episodes.len(), 3);
    assert!(!store.state().episodes_loading);
    assert!(store.state().episodes_next.is_some());
}

#[test]
fn test_selecting_each_episode_sets_selection() {
    let episodes = catalog(5);
    for episode in &episodes {
        let mut store = EffectStore::new(AppState::with_episodes(episodes.clone()), reducer);
        store.dispatch(Action::EpisodeSelect(episode.id));
        assert_eq!(store.state().selected_episode, Some(episode.id));
    }
}

#[test]
fn test_selection_resets_page_regardless_of_prior_page() {
    let mut store = EffectStore::new(AppState::with_episodes(catalog(3)), reducer);

    store.dispatch(Action::EpisodeSelect(1));
    store.dispatch(Action::CharactersDidLoad {
        episode_id: 1,
        characters: characters(30),
    });
    store.dispatch(Action::PageNext);
    store.dispatch(Action::PageNext);
    store.dispatch(Action::PageNext);
    assert_eq!(store.state().page, 4);

    store.dispatch(Action::EpisodeSelect(2));
    assert_eq!(store.state().page, 1);

    store.dispatch(Action::CharactersDidLoad {
        episode_id: 2,
        characters: characters(2),
    });
    assert_eq!(store.state().page, 1);
    assert_eq!(store.state().character_count(), 2);
}

#[test]
fn test_total_pages_for_page_size_eight() {
    for (len, pages) in [(0, 0), (8, 1), (9, 2)] {
        let state = AppState {
            characters: characters(len),
            ..Default::default()
        };
        assert_eq!(state.total_pages(), pages, "len = {len}");
    }
}

#[test]
fn test_last_page_next_is_noop() {
    let mut store = EffectStore::new(AppState::with_episodes(catalog(1)), reducer);
    store.dispatch(Action::EpisodeSelect(1));
    store.dispatch(Action::CharactersDidLoad {
        episode_id: 1,
        characters: characters(16),
    });

    assert!(store.dispatch(Action::PageNext).changed);
    let result = store.dispatch(Action::PageNext);
    assert!(!result.changed);
    assert_eq!(store.state().page, 2);
}

#[test]
fn test_keyboard_select_flow() {
    let mut harness = TestHarness::<AppState, Action>::new(AppState::with_episodes(catalog(3)));
    let mut component = BrowserScreen::new();

    let actions = harness.send_keys::<NumericComponentId, _, _>("j j k", |state, event| {
        let props = BrowserScreenProps {
            state,
            is_focused: true,
        };
        component
            .handle_event(&event.kind, props)
            .into_iter()
            .collect::<Vec<_>>()
    });

    actions.assert_count(3);
    actions.assert_first(Action::EpisodeHighlight(1));
}

#[test]
fn test_assert_emitted_macro() {
    let actions = vec![
        Action::EpisodesFetch,
        Action::EpisodesDidLoad(EpisodePage::default()),
    ];

    assert_emitted!(actions, Action::EpisodesFetch);
    assert_emitted!(actions, Action::EpisodesDidLoad(_));
    assert_not_emitted!(actions, Action::Quit);
    assert_not_emitted!(actions, Action::EpisodesDidError(_));
}
