pub mod components;
pub mod dashboard;
pub mod project_form;
pub mod research;
pub mod sidebar;

use tui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::models::Section;

pub fn render_app<B: Backend>(frame: &mut Frame<B>, app: &mut App) {
    let size = frame.size();
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(28), Constraint::Min(20)].as_ref())
        .split(size);

    let sidebar_rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(2)].as_ref())
        .split(columns[0]);
    sidebar::render_sidebar(frame, sidebar_rows[0], app.section);
    render_global_help(frame, sidebar_rows[1]);

    let content = Layout::default()
        .margin(1)
        .constraints([Constraint::Min(1)].as_ref())
        .split(columns[1])[0];

    match app.section {
        Section::Dashboard => {
            dashboard::render_dashboard(frame, content, &app.store, &mut app.dashboard_state)
        }
        Section::Research => {
            research::render_research(frame, content, &app.store, &mut app.research_state)
        }
        // No panels yet for these sections.
        Section::Ipr
        | Section::Innovation
        | Section::Startups
        | Section::Resources
        | Section::Analytics => {}
    }

    if let Some(form) = &app.project_form_state {
        project_form::render_project_form(frame, form);
    }
}

fn render_global_help<B: Backend>(frame: &mut Frame<B>, area: Rect) {
    let help = Paragraph::new("1-7/Tab Navigate | q Quit")
        .block(Block::default().borders(Borders::TOP))
        .style(Style::default().fg(Color::Gray));
    frame.render_widget(help, area);
}
