use tui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Span, Spans},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::models::Section;

pub const PORTAL_NAME: &str = "Gujarat RIMS";

pub fn render_sidebar<B: Backend>(frame: &mut Frame<B>, area: Rect, active: Section) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)].as_ref())
        .split(area);

    let header = Paragraph::new(Spans::from(vec![
        Span::styled("◉ ", Style::default().fg(Color::Blue)),
        Span::styled(PORTAL_NAME, Style::default().add_modifier(Modifier::BOLD)),
    ]))
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, chunks[0]);

    let items: Vec<ListItem> = Section::ALL
        .iter()
        .enumerate()
        .map(|(i, section)| {
            ListItem::new(Spans::from(vec![
                Span::styled(format!("{} ", i + 1), Style::default().fg(Color::DarkGray)),
                Span::raw(section.icon()),
                Span::raw(" "),
                Span::raw(section.title()),
            ]))
        })
        .collect();

    let menu = List::new(items)
        .block(Block::default().borders(Borders::ALL))
        .highlight_style(
            Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        );

    let mut list_state = ListState::default();
    list_state.select(Some(active.index()));
    frame.render_stateful_widget(menu, chunks[1], &mut list_state);
}
