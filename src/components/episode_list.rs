use crossterm::event::KeyCode;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use tui_dispatch::EventKind;
use tui_dispatch_components::{
    BaseStyle, Padding, ScrollbarStyle, SelectList, SelectListBehavior, SelectListProps,
    SelectListStyle, SelectionStyle,
};

use super::Component;
use crate::action::Action;
use crate::state::Episode;

const SELECTED_BG: Color = Color::Blue;
const TEXT_DIM: Color = Color::DarkGray;

/// Sidebar listing every loaded episode
pub struct EpisodeList {
    list: SelectList,
}

pub struct EpisodeListProps<'a> {
    pub episodes: &'a [Episode],
    pub cursor: usize,
    pub selected: Option<u32>,
    pub loading: bool,
    pub has_more: bool,
    pub is_focused: bool,
}

impl Default for EpisodeList {
    fn default() -> Self {
        Self {
            list: SelectList::new(),
        }
    }
}

impl EpisodeList {
    pub fn new() -> Self {
        Self::default()
    }

    fn items(episodes: &[Episode], selected: Option<u32>) -> Vec<Line<'static>> {
        episodes
            .iter()
            .map(|episode| {
                let style = if selected == Some(episode.id) {
                    Style::default()
                        .bg(SELECTED_BG)
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                let mut spans = Vec::with_capacity(2);
                if !episode.code.is_empty() {
                    spans.push(Span::styled(
                        format!("{} ", episode.code),
                        Style::default().fg(TEXT_DIM),
                    ));
                }
                spans.push(Span::styled(episode.name.clone(), style));
                Line::from(spans)
            })
            .collect()
    }
}

impl Component<Action> for EpisodeList {
    type Props<'a> = EpisodeListProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return None;
        }
        let EventKind::Key(key) = event else {
            return None;
        };

        let Some(last) = props.episodes.len().checked_sub(1) else {
            return None;
        };
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                Some(Action::EpisodeHighlight((props.cursor + 1).min(last)))
            }
            KeyCode::Up | KeyCode::Char('k') => {
                Some(Action::EpisodeHighlight(props.cursor.saturating_sub(1)))
            }
            KeyCode::Home | KeyCode::Char('g') => Some(Action::EpisodeHighlight(0)),
            KeyCode::End | KeyCode::Char('G') => Some(Action::EpisodeHighlight(last)),
            KeyCode::Enter | KeyCode::Char(' ') => props
                .episodes
                .get(props.cursor)
                .map(|episode| Action::EpisodeSelect(episode.id)),
            KeyCode::Char('m') if props.has_more => Some(Action::EpisodesFetchMore),
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let block = Block::default()
            .title(" Episodes ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(if props.is_focused {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().fg(TEXT_DIM)
            });
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if props.episodes.is_empty() {
            let text = if props.loading {
                "Loading episodes..."
            } else {
                "No episodes"
            };
            frame.render_widget(
                Paragraph::new(text)
                    .alignment(Alignment::Center)
                    .style(Style::default().fg(TEXT_DIM)),
                inner,
            );
            return;
        }

        let chunks = Layout::vertical([
            Constraint::Min(1),    // List
            Constraint::Length(1), // More
        ])
        .split(inner);

        let items = Self::items(props.episodes, props.selected);
        let list_props = SelectListProps {
            items: &items,
            count: items.len(),
            selected: props.cursor,
            is_focused: props.is_focused,
            style: SelectListStyle {
                base: BaseStyle {
                    border: None,
                    padding: Padding::xy(1, 0),
                    bg: None,
                    fg: None,
                },
                selection: SelectionStyle::default(),
                scrollbar: ScrollbarStyle::default(),
            },
            behavior: SelectListBehavior::default(),
            on_select: Action::EpisodeHighlight,
            render_item: &|item| item.clone(),
        };
        self.list.render(frame, chunks[0], list_props);

        let footer = if props.loading {
            "Loading more..."
        } else if props.has_more {
            "m  load more"
        } else {
            ""
        };
        frame.render_widget(
            Paragraph::new(footer)
                .alignment(Alignment::Center)
                .style(Style::default().fg(TEXT_DIM)),
            chunks[1],
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyModifiers};
    use tui_dispatch::testing::*;

    fn episodes() -> Vec<Episode> {
        vec![
            Episode {
                id: 1,
                name: "Pilot".into(),
                code: "S01E01".into(),
                ..Default::default()
            },
            Episode {
                id: 2,
                name: "Lawnmower Dog".into(),
                code: "S01E02".into(),
                ..Default::default()
            },
        ]
    }

    fn props(episodes: &[Episode], cursor: usize) -> EpisodeListProps<'_> {
        EpisodeListProps {
            episodes,
            cursor,
            selected: None,
            loading: false,
            has_more: false,
            is_focused: true,
        }
    }

    #[test]
    fn test_navigation_keys_move_cursor() {
        let mut component = EpisodeList::new();
        let episodes = episodes();

        let actions: Vec<_> = component
            .handle_event(&EventKind::Key(key("j")), props(&episodes, 0))
            .into_iter()
            .collect();
        actions.assert_first(Action::EpisodeHighlight(1));

        // clamps at the last row
        let actions: Vec<_> = component
            .handle_event(&EventKind::Key(key("j")), props(&episodes, 1))
            .into_iter()
            .collect();
        actions.assert_first(Action::EpisodeHighlight(1));

        let actions: Vec<_> = component
            .handle_event(&EventKind::Key(key("k")), props(&episodes, 0))
            .into_iter()
            .collect();
        actions.assert_first(Action::EpisodeHighlight(0));
    }

    #[test]
    fn test_enter_selects_highlighted_episode() {
        let mut component = EpisodeList::new();
        let episodes = episodes();
        let enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);

        let actions: Vec<_> = component
            .handle_event(&EventKind::Key(enter), props(&episodes, 1))
            .into_iter()
            .collect();
        actions.assert_count(1);
        actions.assert_first(Action::EpisodeSelect(2));
    }

    #[test]
    fn test_load_more_only_with_next_page() {
        let mut component = EpisodeList::new();
        let episodes = episodes();

        let actions: Vec<_> = component
            .handle_event(&EventKind::Key(key("m")), props(&episodes, 0))
            .into_iter()
            .collect();
        actions.assert_empty();

        let mut with_more = props(&episodes, 0);
        with_more.has_more = true;
        let actions: Vec<_> = component
            .handle_event(&EventKind::Key(key("m")), with_more)
            .into_iter()
            .collect();
        actions.assert_first(Action::EpisodesFetchMore);
    }

    #[test]
    fn test_empty_list_ignores_keys() {
        let mut component = EpisodeList::new();

        let actions: Vec<_> = component
            .handle_event(&EventKind::Key(key("j")), props(&[], 0))
            .into_iter()
            .collect();
        actions.assert_empty();
    }

    #[test]
    fn test_render_lists_episode_names() {
        let mut render = RenderHarness::new(40, 10);
        let mut component = EpisodeList::new();
        let episodes = episodes();

        let output = render.render_to_string_plain(|frame| {
            component.render(frame, frame.area(), props(&episodes, 0));
        });

        assert!(output.contains("Episodes"));
        assert!(output.contains("Pilot"));
        assert!(output.contains("S01E02"));
    }

    #[test]
    fn test_render_loading_placeholder() {
        let mut render = RenderHarness::new(40, 10);
        let mut component = EpisodeList::new();

        let output = render.render_to_string_plain(|frame| {
            let mut loading = props(&[], 0);
            loading.loading = true;
            component.render(frame, frame.area(), loading);
        });

        assert!(output.contains("Loading episodes..."));
    }
}
