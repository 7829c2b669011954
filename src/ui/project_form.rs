use chrono::NaiveDate;
use crossterm::event::KeyCode;
use tracing::warn;
use tui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Span, Spans},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

use crate::models::{Draft, DraftField, ProjectStatus};
use crate::ui::components::centered_rect;
use crate::ui::components::date_input::DateInputState;

pub enum ProjectFormAction {
    Cancel,
    Submit(Draft),
}

const FIELDS: [DraftField; 5] = [
    DraftField::Name,
    DraftField::Investigator,
    DraftField::Description,
    DraftField::Status,
    DraftField::StartDate,
];

/// The add-project overlay and the draft behind it.
pub struct ProjectFormState {
    pub draft: Draft,
    pub current_field: DraftField,
    pub editing: bool,
    pub start_date_state: DateInputState,
    pub error: Option<String>,
}

impl ProjectFormState {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            draft: Draft::blank(today),
            current_field: DraftField::Name,
            editing: false,
            start_date_state: DateInputState::new(today),
            error: None,
        }
    }

    pub fn toggle_editing(&mut self) {
        self.editing = !self.editing;
        let editing_date = self.editing && self.current_field == DraftField::StartDate;
        self.start_date_state.set_editing(editing_date);
    }

    pub fn next_field(&mut self) {
        self.current_field = self.current_field.next();
    }

    pub fn previous_field(&mut self) {
        self.current_field = self.current_field.previous();
    }

    pub fn edit_current_field(&mut self, key: KeyCode) {
        if !self.editing {
            return;
        }

        let text = match self.current_field {
            DraftField::Name => &mut self.draft.name,
            DraftField::Investigator => &mut self.draft.investigator,
            DraftField::Description => &mut self.draft.description,
            DraftField::Status => {
                match key {
                    KeyCode::Right | KeyCode::Char(' ') => {
                        self.draft.status = self.draft.status.next();
                    }
                    KeyCode::Left => {
                        self.draft.status = self.draft.status.previous();
                    }
                    _ => {}
                }
                return;
            }
            DraftField::StartDate => {
                self.start_date_state.handle_input(key);
                self.draft.start_date = self.start_date_state.date;
                return;
            }
        };

        match key {
            KeyCode::Char(c) => text.push(c),
            KeyCode::Backspace => {
                text.pop();
            }
            _ => {}
        }
    }

    /// Validates the draft; on failure the message is kept for display.
    pub fn submit(&mut self) -> Option<Draft> {
        match self.draft.missing_field() {
            Some(field) => {
                warn!(field = field.label(), "add project refused: missing field");
                self.error = Some(format!("{} is required", field.label()));
                self.current_field = field;
                None
            }
            None => {
                self.error = None;
                Some(self.draft.clone())
            }
        }
    }

    fn display_value(&self, field: DraftField) -> String {
        let editing_this = self.editing && self.current_field == field;
        let cursor = if editing_this { "|" } else { "" };
        match field {
            DraftField::Name => format!("{}{}", self.draft.name, cursor),
            DraftField::Investigator => format!("{}{}", self.draft.investigator, cursor),
            DraftField::Description => format!("{}{}", self.draft.description, cursor),
            DraftField::Status => {
                let options: Vec<String> = ProjectStatus::OPTIONS
                    .iter()
                    .map(|status| {
                        if *status == self.draft.status {
                            format!("({})", status.label())
                        } else {
                            status.label().to_string()
                        }
                    })
                    .collect();
                options.join("  ")
            }
            DraftField::StartDate => self.start_date_state.display(),
        }
    }
}

pub fn render_project_form<B: Backend>(f: &mut Frame<B>, state: &ProjectFormState) {
    let area = centered_rect(60, 60, f.size());
    f.render_widget(Clear, area);

    let outer = Block::default()
        .title(Spans::from(vec![
            Span::styled("Add New Project", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw("  [×]"),
        ]))
        .borders(Borders::ALL);
    let inner = outer.inner(area);
    f.render_widget(outer, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints(
            [
                Constraint::Min(7),
                Constraint::Length(1),
                Constraint::Length(3),
            ]
            .as_ref(),
        )
        .split(inner);

    render_fields(f, state, chunks[0]);

    if let Some(error) = &state.error {
        let message = Paragraph::new(Span::styled(error.as_str(), Style::default().fg(Color::Red)));
        f.render_widget(message, chunks[1]);
    }

    let help_text = if state.editing {
        match state.current_field {
            DraftField::Status => "Left/Right - Change status | Enter/Esc - Done",
            DraftField::StartDate => "Digits - Set part | Left/Right - Switch part | Enter/Esc - Done",
            _ => "Type to edit | Enter/Esc - Done",
        }
    } else {
        "Enter - Edit field | Up/Down - Navigate | S - Add Project | Esc - Cancel"
    };

    let help = Paragraph::new(help_text)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::TOP));
    f.render_widget(help, chunks[2]);
}

fn render_fields<B: Backend>(f: &mut Frame<B>, state: &ProjectFormState, area: Rect) {
    let items: Vec<ListItem> = FIELDS
        .iter()
        .map(|field| {
            let label_style = if *field == state.current_field {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default()
            };
            let value_style = if *field == state.current_field && state.editing {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };

            ListItem::new(Spans::from(vec![
                Span::styled(format!("{}: ", field.label()), label_style),
                Span::styled(state.display_value(*field), value_style),
            ]))
        })
        .collect();

    let form_list = List::new(items);
    f.render_widget(form_list, area);
}

pub fn handle_key(state: &mut ProjectFormState, key: KeyCode) -> Option<ProjectFormAction> {
    match key {
        KeyCode::Esc | KeyCode::Enter if state.editing => {
            state.toggle_editing();
        }
        KeyCode::Esc => {
            return Some(ProjectFormAction::Cancel);
        }
        KeyCode::Enter => {
            state.toggle_editing();
        }
        KeyCode::Up if !state.editing => {
            state.previous_field();
        }
        KeyCode::Down if !state.editing => {
            state.next_field();
        }
        KeyCode::Char('s') if !state.editing => {
            return state.submit().map(ProjectFormAction::Submit);
        }
        _ if state.editing => {
            state.edit_current_field(key);
        }
        _ => {}
    }

    None
}
