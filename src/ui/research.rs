use crossterm::event::KeyCode;
use tracing::debug;
use tui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Span, Spans},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::models::ProjectStatus;
use crate::store::Store;

const SEARCH_PLACEHOLDER: &str = "Search projects...";

// Represents the state of the research projects panel
pub struct ResearchState {
    search: String,
    searching: bool,
    table_state: TableState,
}

pub enum ResearchAction {
    AddProject,
    DeleteProject(String), // Contains project id
}

impl ResearchState {
    pub fn new() -> Self {
        let mut table_state = TableState::default();
        table_state.select(Some(0));
        Self {
            search: String::new(),
            searching: false,
            table_state,
        }
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    /// True while keystrokes go to the search input.
    pub fn is_searching(&self) -> bool {
        self.searching
    }

    #[cfg(test)]
    pub fn selected_row(&self) -> Option<usize> {
        self.table_state.selected()
    }

    pub fn next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let i = match self.table_state.selected() {
            Some(i) if i + 1 < len => i + 1,
            Some(_) => 0,
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    pub fn previous(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let i = match self.table_state.selected() {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        };
        self.table_state.select(Some(i));
    }

    /// Keep the row cursor on an existing row of a `len`-row table.
    pub fn clamp(&mut self, len: usize) {
        let selected = match (len, self.table_state.selected()) {
            (0, _) => None,
            (_, Some(i)) => Some(i.min(len - 1)),
            (_, None) => Some(0),
        };
        self.table_state.select(selected);
    }
}

impl Default for ResearchState {
    fn default() -> Self {
        Self::new()
    }
}

fn status_style(status: ProjectStatus) -> Style {
    let color = match status {
        ProjectStatus::Active => Color::Green,
        ProjectStatus::Completed => Color::Blue,
        ProjectStatus::Pending => Color::Yellow,
    };
    Style::default().fg(color)
}

pub fn render_research<B: Backend>(
    frame: &mut Frame<B>,
    area: Rect,
    store: &Store,
    state: &mut ResearchState,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(2),
        ].as_ref())
        .split(area);

    let heading = Paragraph::new("Research Projects")
        .style(Style::default().add_modifier(Modifier::BOLD));
    frame.render_widget(heading, chunks[0]);

    let toolbar = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(22)].as_ref())
        .split(chunks[1]);

    let search_text = if state.search.is_empty() && !state.searching {
        Span::styled(SEARCH_PLACEHOLDER, Style::default().fg(Color::DarkGray))
    } else if state.searching {
        Span::raw(format!("{}|", state.search))
    } else {
        Span::raw(state.search.as_str())
    };
    let search_border = if state.searching {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let search = Paragraph::new(Spans::from(search_text))
        .block(Block::default().borders(Borders::ALL).border_style(search_border));
    frame.render_widget(search, toolbar[0]);

    let add_button = Paragraph::new(Span::styled(
        "Add New Project",
        Style::default().fg(Color::White).bg(Color::Blue),
    ))
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(add_button, toolbar[1]);

    let filtered = store.filter_projects(&state.search);
    state.clamp(filtered.len());

    let header = Row::new(vec![
        "Project Name",
        "Principal Investigator",
        "Status",
        "Start Date",
        "Actions",
    ])
    .style(Style::default().add_modifier(Modifier::BOLD))
    .bottom_margin(1);

    let rows: Vec<Row> = filtered
        .iter()
        .map(|project| {
            Row::new(vec![
                Cell::from(project.name.as_str()),
                Cell::from(project.investigator.as_str()),
                Cell::from(project.status.label()).style(status_style(project.status)),
                Cell::from(project.start_date.format("%Y-%m-%d").to_string()),
                Cell::from("Delete").style(Style::default().fg(Color::Red)),
            ])
        })
        .collect();

    let widths = [
        Constraint::Percentage(30),
        Constraint::Percentage(25),
        Constraint::Percentage(15),
        Constraint::Percentage(15),
        Constraint::Percentage(15),
    ];
    let table = Table::new(rows)
        .header(header)
        .block(Block::default().borders(Borders::ALL))
        .widths(&widths)
        .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
        .highlight_symbol("> ");

    frame.render_stateful_widget(table, chunks[2], &mut state.table_state);

    let help_text = if state.searching {
        "Type to filter | <Enter>/<Esc> Done"
    } else {
        "</> Search | <N> Add New Project | <D> Delete | <Up>/<Down> Select"
    };
    let help = Paragraph::new(help_text)
        .block(Block::default().borders(Borders::TOP))
        .style(Style::default().fg(Color::Gray));
    frame.render_widget(help, chunks[3]);
}

pub fn handle_key(state: &mut ResearchState, store: &Store, key: KeyCode) -> Option<ResearchAction> {
    if state.searching {
        match key {
            KeyCode::Enter | KeyCode::Esc => state.searching = false,
            KeyCode::Backspace => {
                state.search.pop();
            }
            KeyCode::Char(c) => state.search.push(c),
            _ => return None,
        }
        debug!(term = %state.search, "search updated");
        let len = store.filter_projects(&state.search).len();
        state.clamp(len);
        return None;
    }

    let filtered = store.filter_projects(&state.search);
    match key {
        KeyCode::Char('/') => {
            state.searching = true;
        }
        KeyCode::Char('n') | KeyCode::Char('a') => {
            return Some(ResearchAction::AddProject);
        }
        KeyCode::Char('d') | KeyCode::Delete => {
            let selected = state.table_state.selected().and_then(|i| filtered.get(i));
            if let Some(project) = selected {
                return Some(ResearchAction::DeleteProject(project.id.clone()));
            }
        }
        KeyCode::Down => state.next(filtered.len()),
        KeyCode::Up => state.previous(filtered.len()),
        _ => {}
    }
    None
}
