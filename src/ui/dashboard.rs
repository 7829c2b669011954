use crossterm::event::KeyCode;
use tui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::models::ActivityKind;
use crate::store::Store;
use crate::ui::components::activity_item::activity_item;
use crate::ui::components::stat_card::{render_stat_card, StatCard};

pub struct DashboardState {
    activity_list: ListState,
}

impl DashboardState {
    pub fn new() -> Self {
        let mut activity_list = ListState::default();
        activity_list.select(Some(0));
        Self { activity_list }
    }

    #[cfg(test)]
    pub fn selected_activity(&self) -> Option<usize> {
        self.activity_list.selected()
    }

    pub fn next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let i = match self.activity_list.selected() {
            Some(i) if i + 1 < len => i + 1,
            Some(_) => len - 1,
            None => 0,
        };
        self.activity_list.select(Some(i));
    }

    pub fn previous(&mut self) {
        let i = self.activity_list.selected().map_or(0, |i| i.saturating_sub(1));
        self.activity_list.select(Some(i));
    }

    /// New activities are prepended, so the feed jumps back to the top.
    pub fn reset_scroll(&mut self) {
        self.activity_list.select(Some(0));
    }
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new()
    }
}

fn kind_icon(kind: ActivityKind) -> (&'static str, Color) {
    match kind {
        ActivityKind::Research => ("⚗", Color::Blue),
        ActivityKind::Patent => ("⚖", Color::Green),
        ActivityKind::Startup => ("▲", Color::Magenta),
    }
}

pub fn render_dashboard<B: Backend>(
    frame: &mut Frame<B>,
    area: Rect,
    store: &Store,
    state: &mut DashboardState,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(5),
            Constraint::Min(3),
        ].as_ref())
        .split(area);

    let heading = Paragraph::new("Overview Dashboard")
        .style(Style::default().add_modifier(Modifier::BOLD));
    frame.render_widget(heading, chunks[0]);

    let stats = store.stats();
    let cards = [
        StatCard {
            title: "Active Research Projects",
            value: stats.active_projects.to_string(),
            icon: "⚗",
            color: Color::Blue,
        },
        StatCard {
            title: "Patent Applications",
            value: stats.patent_applications.to_string(),
            icon: "▤",
            color: Color::Green,
        },
        StatCard {
            title: "Registered Startups",
            value: stats.registered_startups.to_string(),
            icon: "▲",
            color: Color::Magenta,
        },
        StatCard {
            title: "Active Researchers",
            value: stats.active_researchers.to_string(),
            icon: "☺",
            color: Color::Yellow,
        },
    ];

    let tiles = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4].as_ref())
        .split(chunks[1]);
    for (card, tile) in cards.iter().zip(tiles.iter()) {
        render_stat_card(frame, *tile, card);
    }

    let items: Vec<ListItem> = store
        .activities()
        .iter()
        .map(|activity| {
            let (icon, color) = kind_icon(activity.kind);
            activity_item(&activity.title, &activity.description, &activity.time, icon, color)
        })
        .collect();

    let feed = List::new(items)
        .block(Block::default().title("Recent Activities").borders(Borders::ALL))
        .highlight_style(Style::default().bg(Color::DarkGray));

    frame.render_stateful_widget(feed, chunks[2], &mut state.activity_list);
}

pub fn handle_key(state: &mut DashboardState, activity_count: usize, key: KeyCode) {
    match key {
        KeyCode::Down => state.next(activity_count),
        KeyCode::Up => state.previous(),
        _ => {}
    }
}
