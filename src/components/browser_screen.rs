use crossterm::event::KeyCode;
use ratatui::layout::{Constraint, Layout};
use ratatui::prelude::{Frame, Rect};
use tui_dispatch::EventKind;
use tui_dispatch_components::{
    StatusBar, StatusBarHint, StatusBarProps, StatusBarSection, StatusBarStyle,
};

use super::{CharacterGrid, CharacterGridProps, Component, EpisodeList, EpisodeListProps};
use crate::action::Action;
use crate::state::AppState;

/// Sidebar width as a share of the screen.
const SIDEBAR_PERCENT: u16 = 28;
/// Below this width the sidebar stacks above the grid.
const STACKED_WIDTH: u16 = 80;

pub struct BrowserScreenProps<'a> {
    pub state: &'a AppState,
    pub is_focused: bool,
}

/// Root screen: episode sidebar, character grid and key hints
pub struct BrowserScreen {
    episodes: EpisodeList,
    grid: CharacterGrid,
}

impl Default for BrowserScreen {
    fn default() -> Self {
        Self {
            episodes: EpisodeList::new(),
            grid: CharacterGrid,
        }
    }
}

impl BrowserScreen {
    pub fn new() -> Self {
        Self::default()
    }

    fn episode_props<'a>(state: &'a AppState, is_focused: bool) -> EpisodeListProps<'a> {
        EpisodeListProps {
            episodes: &state.episodes,
            cursor: state.episode_cursor,
            selected: state.selected_episode,
            loading: state.episodes_loading,
            has_more: state.episodes_next.is_some(),
            is_focused,
        }
    }
}

impl Component<Action> for BrowserScreen {
    type Props<'a> = BrowserScreenProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return Vec::new();
        }

        if let EventKind::Key(key) = event {
            if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
                return vec![Action::Quit];
            }
        }

        let actions: Vec<Action> = self
            .episodes
            .handle_event(event, Self::episode_props(props.state, true))
            .into_iter()
            .collect();
        if !actions.is_empty() {
            return actions;
        }

        self.grid
            .handle_event(
                event,
                CharacterGridProps {
                    state: props.state,
                    is_focused: true,
                },
            )
            .into_iter()
            .collect()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let rows = Layout::vertical([
            Constraint::Min(1),    // Content
            Constraint::Length(1), // Help bar
        ])
        .split(area);

        let panes = if rows[0].width < STACKED_WIDTH {
            Layout::vertical([Constraint::Percentage(35), Constraint::Percentage(65)])
                .split(rows[0])
        } else {
            Layout::horizontal([
                Constraint::Percentage(SIDEBAR_PERCENT),
                Constraint::Percentage(100 - SIDEBAR_PERCENT),
            ])
            .split(rows[0])
        };

        self.episodes.render(
            frame,
            panes[0],
            Self::episode_props(props.state, props.is_focused),
        );
        self.grid.render(
            frame,
            panes[1],
            CharacterGridProps {
                state: props.state,
                is_focused: props.is_focused,
            },
        );

        let mut status_bar = StatusBar::new();
        <StatusBar as Component<Action>>::render(
            &mut status_bar,
            frame,
            rows[1],
            StatusBarProps {
                left: StatusBarSection::empty(),
                center: StatusBarSection::hints(&[
                    StatusBarHint::new("j/k", "move"),
                    StatusBarHint::new("enter", "select"),
                    StatusBarHint::new("p/n", "page"),
                    StatusBarHint::new("m", "more"),
                    StatusBarHint::new("q", "quit"),
                ]),
                right: StatusBarSection::empty(),
                style: StatusBarStyle::default(),
                is_focused: false,
            },
        );
    }
}
