use crossterm::event::KeyCode;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use tui_dispatch::EventKind;

use super::Component;
use crate::action::Action;
use crate::state::{AppState, Character};

/// Columns on a regular terminal.
pub const GRID_COLUMNS_WIDE: usize = 4;
/// Columns when the grid is narrower than [`NARROW_WIDTH`].
pub const GRID_COLUMNS_NARROW: usize = 2;
pub const NARROW_WIDTH: u16 = 60;

/// Card height: border + name + species/status + image.
const CARD_HEIGHT: u16 = 5;

const TEXT_DIM: Color = Color::DarkGray;
const ACCENT: Color = Color::Cyan;

pub const SELECT_PROMPT: &str = "Please select an episode to see its characters";

/// Paginated grid of the selected episode's characters
#[derive(Default)]
pub struct CharacterGrid;

pub struct CharacterGridProps<'a> {
    pub state: &'a AppState,
    pub is_focused: bool,
}

pub fn grid_columns(width: u16) -> usize {
    if width < NARROW_WIDTH {
        GRID_COLUMNS_NARROW
    } else {
        GRID_COLUMNS_WIDE
    }
}

impl Component<Action> for CharacterGrid {
    type Props<'a> = CharacterGridProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return None;
        }

        match event {
            EventKind::Key(key) => match key.code {
                KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('n') | KeyCode::PageDown => {
                    Some(Action::PageNext)
                }
                KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('p') | KeyCode::PageUp => {
                    Some(Action::PagePrev)
                }
                _ => None,
            },
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let state = props.state;
        let block = Block::default()
            .title(" Rick and Morty Characters ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(TEXT_DIM));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::vertical([
            Constraint::Length(1), // Summary
            Constraint::Length(1), // Spacer
            Constraint::Min(1),    // Cards
            Constraint::Length(1), // Pager
        ])
        .split(inner);

        frame.render_widget(summary_line(state), chunks[0]);

        if state.characters_loading {
            frame.render_widget(
                Paragraph::new("Loading characters...")
                    .alignment(Alignment::Center)
                    .style(Style::default().fg(TEXT_DIM)),
                chunks[2],
            );
        } else {
            render_cards(frame, chunks[2], state.visible_characters());
        }

        if state.selected_episode.is_some() {
            frame.render_widget(pager_line(state), chunks[3]);
        }
    }
}

fn summary_line(state: &AppState) -> Paragraph<'static> {
    match state.selected() {
        Some(episode) => Paragraph::new(Line::from(vec![
            Span::raw(format!(
                "{} characters in Episode - ",
                state.character_count()
            )),
            Span::styled(
                episode.name.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ])),
        None => Paragraph::new(Span::styled(
            SELECT_PROMPT,
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
    }
}

fn pager_line(state: &AppState) -> Paragraph<'static> {
    let enabled = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);
    let disabled = Style::default().fg(TEXT_DIM);

    let prev_style = if state.has_prev_page() { enabled } else { disabled };
    let next_style = if state.has_next_page() { enabled } else { disabled };

    Paragraph::new(Line::from(vec![
        Span::styled("< Previous", prev_style),
        Span::raw(format!(
            "    Page {} of {}    ",
            state.page,
            state.total_pages()
        )),
        Span::styled("Next >", next_style),
    ]))
    .alignment(Alignment::Center)
}

fn render_cards(frame: &mut Frame, area: Rect, characters: &[Character]) {
    if characters.is_empty() {
        return;
    }

    let columns = grid_columns(area.width);
    let rows = characters.len().div_ceil(columns);
    let row_areas = Layout::vertical(vec![Constraint::Length(CARD_HEIGHT); rows]).split(area);

    for (row_area, row) in row_areas.iter().zip(characters.chunks(columns)) {
        let cell_areas =
            Layout::horizontal(vec![Constraint::Ratio(1, columns as u32); columns]).split(*row_area);
        for (cell, character) in cell_areas.iter().zip(row) {
            frame.render_widget(character_card(character), *cell);
        }
    }
}

fn character_card(character: &Character) -> Paragraph<'static> {
    let details = [character.species.as_str(), character.status.as_str()]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" - ");

    Paragraph::new(vec![
        Line::from(Span::styled(
            character.name.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(details, Style::default().fg(TEXT_DIM))),
        Line::from(Span::styled(
            character.image.clone(),
            Style::default().fg(TEXT_DIM),
        )),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(TEXT_DIM)),
    )
}
