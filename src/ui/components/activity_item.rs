use tui::{
    style::{Color, Modifier, Style},
    text::{Span, Spans},
    widgets::ListItem,
};

/// Three-line feed entry: icon and title, description, then the time label.
pub fn activity_item<'a>(
    title: &'a str,
    description: &'a str,
    time: &'a str,
    icon: &'a str,
    color: Color,
) -> ListItem<'a> {
    ListItem::new(vec![
        Spans::from(vec![
            Span::styled(icon, Style::default().fg(color)),
            Span::raw("  "),
            Span::styled(title, Style::default().add_modifier(Modifier::BOLD)),
        ]),
        Spans::from(vec![Span::raw("   "), Span::styled(description, Style::default().fg(Color::Gray))]),
        Spans::from(vec![Span::raw("   "), Span::styled(time, Style::default().fg(Color::DarkGray))]),
    ])
}
