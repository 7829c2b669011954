use tui::{
    backend::Backend,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Span, Spans},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// A single dashboard figure with its caption.
pub struct StatCard<'a> {
    pub title: &'a str,
    pub value: String,
    pub icon: &'a str,
    pub color: Color,
}

pub fn render_stat_card<B: Backend>(frame: &mut Frame<B>, area: Rect, card: &StatCard) {
    let text = vec![
        Spans::from(Span::styled(card.icon, Style::default().fg(card.color))),
        Spans::from(Span::styled(card.title, Style::default().fg(Color::Gray))),
        Spans::from(Span::styled(
            card.value.clone(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
    ];

    let tile = Paragraph::new(text)
        .alignment(Alignment::Left)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(tile, area);
}
