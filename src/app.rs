use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{debug, info};

use crate::models::Section;
use crate::store::Store;
use crate::ui::{
    dashboard::{self, DashboardState},
    project_form::{self, ProjectFormAction, ProjectFormState},
    research::{self, ResearchAction, ResearchState},
};

// Main application state
pub struct App {
    pub store: Store,
    pub section: Section,
    pub dashboard_state: DashboardState,
    pub research_state: ResearchState,
    /// The add-project overlay; open while `Some`.
    pub project_form_state: Option<ProjectFormState>,
    today: NaiveDate,
    should_quit: bool,
}

impl App {
    pub fn new(store: Store, section: Section, today: NaiveDate) -> Self {
        Self {
            store,
            section,
            dashboard_state: DashboardState::new(),
            research_state: ResearchState::new(),
            project_form_state: None,
            today,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    #[cfg(test)]
    pub fn is_add_project_open(&self) -> bool {
        self.project_form_state.is_some()
    }

    pub fn select_section(&mut self, section: Section) {
        if section != self.section {
            debug!(section = section.title(), "section selected");
        }
        self.section = section;
    }

    /// True while keys are text for an input field.
    fn is_typing(&self) -> bool {
        match &self.project_form_state {
            Some(form) => form.editing,
            None => self.section == Section::Research && self.research_state.is_searching(),
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        if let Some(form) = &mut self.project_form_state {
            match project_form::handle_key(form, key.code) {
                Some(ProjectFormAction::Cancel) => self.close_add_project(),
                Some(ProjectFormAction::Submit(draft)) => {
                    if self.store.add_project(draft).is_ok() {
                        self.dashboard_state.reset_scroll();
                        self.close_add_project();
                    }
                }
                None => {}
            }
            return;
        }

        if !self.is_typing() && self.handle_global_key(key.code) {
            return;
        }

        match self.section {
            Section::Dashboard => {
                let count = self.store.activities().len();
                dashboard::handle_key(&mut self.dashboard_state, count, key.code);
            }
            Section::Research => {
                match research::handle_key(&mut self.research_state, &self.store, key.code) {
                    Some(ResearchAction::AddProject) => self.open_add_project(),
                    Some(ResearchAction::DeleteProject(id)) => self.delete_project(&id),
                    None => {}
                }
            }
            Section::Ipr
            | Section::Innovation
            | Section::Startups
            | Section::Resources
            | Section::Analytics => {}
        }
    }

    // Navigation and quit; returns whether the key was consumed.
    fn handle_global_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Tab => self.select_section(self.section.next()),
            KeyCode::BackTab => self.select_section(self.section.previous()),
            KeyCode::Char(c) => {
                match c.to_digit(10).and_then(|d| Section::from_position(d as usize)) {
                    Some(section) => self.select_section(section),
                    None => return false,
                }
            }
            _ => return false,
        }
        true
    }

    fn open_add_project(&mut self) {
        debug!("add project overlay opened");
        self.project_form_state = Some(ProjectFormState::new(self.today));
    }

    // Dropping the form discards the draft; the next open starts blank.
    fn close_add_project(&mut self) {
        debug!("add project overlay closed");
        self.project_form_state = None;
    }

    fn delete_project(&mut self, id: &str) {
        if self.store.delete_project(id).is_none() {
            info!(id, "delete requested for unknown project");
        }
        let remaining = self.store.filter_projects(self.research_state.search()).len();
        self.research_state.clamp(remaining);
        self.dashboard_state.reset_scroll();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn press(app: &mut App, codes: &[KeyCode]) {
        for code in codes {
            app.handle_key(key(*code));
        }
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
    }

    fn app() -> App {
        App::new(
            Store::seeded(),
            Section::Dashboard,
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
        )
    }

    fn fill_field(app: &mut App, text: &str) {
        press(app, &[KeyCode::Enter]);
        type_text(app, text);
        press(app, &[KeyCode::Enter, KeyCode::Down]);
    }

    #[test]
    fn number_keys_and_tab_select_sections() {
        let mut app = app();
        press(&mut app, &[KeyCode::Char('3')]);
        assert_eq!(app.section, Section::Ipr);
        press(&mut app, &[KeyCode::Tab]);
        assert_eq!(app.section, Section::Innovation);
        press(&mut app, &[KeyCode::BackTab, KeyCode::BackTab]);
        assert_eq!(app.section, Section::Research);
        assert!(!app.should_quit());
    }

    #[test]
    fn selecting_a_section_changes_nothing_else() {
        let mut app = app();
        press(&mut app, &[KeyCode::Char('2'), KeyCode::Char('/')]);
        type_text(&mut app, "shah");
        press(&mut app, &[KeyCode::Esc, KeyCode::Char('1'), KeyCode::Char('2')]);

        assert_eq!(app.research_state.search(), "shah");
        assert_eq!(app.store.projects().len(), 2);
    }

    #[test]
    fn add_project_through_the_overlay() {
        let mut app = app();
        press(&mut app, &[KeyCode::Char('2'), KeyCode::Char('n')]);
        assert!(app.is_add_project_open());

        fill_field(&mut app, "X");
        fill_field(&mut app, "Dr. Y");
        fill_field(&mut app, "Test bed");
        press(&mut app, &[KeyCode::Enter, KeyCode::Right, KeyCode::Enter]);
        press(&mut app, &[KeyCode::Char('s')]);

        assert!(!app.is_add_project_open());
        assert_eq!(app.store.projects().len(), 3);
        assert_eq!(app.store.stats().active_projects, 2);
        assert_eq!(app.store.activities()[0].title, "New Research Project Registered");
        assert_eq!(app.store.activities()[0].description, "X");
        assert_eq!(app.store.projects()[2].start_date, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
    }

    #[test]
    fn cancelling_the_overlay_discards_the_draft() {
        let mut app = app();
        press(&mut app, &[KeyCode::Char('2'), KeyCode::Char('a')]);
        fill_field(&mut app, "Abandoned");
        press(&mut app, &[KeyCode::Esc]);

        assert!(!app.is_add_project_open());
        assert_eq!(app.store.projects().len(), 2);

        press(&mut app, &[KeyCode::Char('n')]);
        let form = app.project_form_state.as_ref().unwrap();
        assert!(form.draft.name.is_empty());
    }

    #[test]
    fn overlay_swallows_navigation_keys() {
        let mut app = app();
        press(&mut app, &[KeyCode::Char('2'), KeyCode::Char('n'), KeyCode::Char('1'), KeyCode::Char('q')]);

        assert_eq!(app.section, Section::Research);
        assert!(app.is_add_project_open());
        assert!(!app.should_quit());
    }

    #[test]
    fn delete_removes_the_selected_project_immediately() {
        let mut app = app();
        press(&mut app, &[KeyCode::Char('2'), KeyCode::Char('d')]);

        assert_eq!(app.store.projects().len(), 1);
        assert_eq!(app.store.activities()[0].title, "Project Deleted");
        assert_eq!(app.store.activities()[0].description, "Smart Agriculture System");
        assert_eq!(app.research_state.selected_row(), Some(0));
    }

    #[test]
    fn quit_keys() {
        let mut app = app();
        press(&mut app, &[KeyCode::Char('2'), KeyCode::Char('/'), KeyCode::Char('q')]);
        assert!(!app.should_quit());
        assert_eq!(app.research_state.search(), "q");

        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit());

        let mut app = self::app();
        press(&mut app, &[KeyCode::Char('q')]);
        assert!(app.should_quit());
    }
}
