mod seed;
mod stats;

use thiserror::Error;
use tracing::info;

use crate::models::{Activity, ActivityKind, Draft, DraftField, Project};

pub use stats::DashboardStats;

const JUST_NOW: &str = "Just now";
const PROJECT_REGISTERED: &str = "New Research Project Registered";
const PROJECT_DELETED: &str = "Project Deleted";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("{} is required", .0.label())]
    MissingField(DraftField),
}

/// In-memory project registry and activity feed
///
/// Projects are appended, activities are prepended (newest first). Ids come
/// from counters kept next to each collection so a deleted project's id is
/// never handed out again.
#[derive(Debug)]
pub struct Store {
    projects: Vec<Project>,
    activities: Vec<Activity>,
    next_project_id: u64,
    next_activity_id: u64,
}

impl Store {
    /// Store holding the portal's demo projects and activities
    pub fn seeded() -> Self {
        Self::with(seed::projects(), seed::activities())
    }

    pub fn with(projects: Vec<Project>, activities: Vec<Activity>) -> Self {
        Self {
            next_project_id: next_id(projects.iter().map(|p| p.id.as_str())),
            next_activity_id: next_id(activities.iter().map(|a| a.id.as_str())),
            projects,
            activities,
        }
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    /// Register a new project from a completed draft.
    ///
    /// Records a "New Research Project Registered" activity naming it.
    pub fn add_project(&mut self, draft: Draft) -> Result<&Project, StoreError> {
        if let Some(field) = draft.missing_field() {
            return Err(StoreError::MissingField(field));
        }

        let project = Project {
            id: self.allocate_project_id(),
            name: draft.name,
            investigator: draft.investigator,
            status: draft.status,
            description: draft.description,
            start_date: draft.start_date,
        };
        info!(id = %project.id, name = %project.name, status = project.status.label(), "project registered");

        self.record(PROJECT_REGISTERED, project.name.clone());
        self.projects.push(project);

        let index = self.projects.len() - 1;
        Ok(&self.projects[index])
    }

    /// Remove the project with `id`, returning it if it existed.
    ///
    /// A "Project Deleted" activity is recorded either way; for an unknown
    /// id its description is empty.
    pub fn delete_project(&mut self, id: &str) -> Option<Project> {
        let removed = self
            .projects
            .iter()
            .position(|p| p.id == id)
            .map(|index| self.projects.remove(index));

        let name = removed.as_ref().map(|p| p.name.clone()).unwrap_or_default();
        info!(id, name = %name, found = removed.is_some(), "project deleted");
        self.record(PROJECT_DELETED, name);

        removed
    }

    /// Projects whose name or investigator contains `term`, ignoring case,
    /// in registry order.
    pub fn filter_projects(&self, term: &str) -> Vec<&Project> {
        let needle = term.to_lowercase();
        self.projects.iter().filter(|p| p.matches(&needle)).collect()
    }

    pub fn stats(&self) -> DashboardStats {
        DashboardStats::from_projects(&self.projects)
    }

    fn record(&mut self, title: &str, description: String) {
        let activity = Activity {
            id: self.next_activity_id.to_string(),
            title: title.to_string(),
            description,
            time: JUST_NOW.to_string(),
            kind: ActivityKind::Research,
        };
        self.next_activity_id += 1;
        self.activities.insert(0, activity);
    }

    fn allocate_project_id(&mut self) -> String {
        let id = self.next_project_id.to_string();
        self.next_project_id += 1;
        id
    }
}

// First counter value above every numeric id already present.
fn next_id<'a>(ids: impl Iterator<Item = &'a str>) -> u64 {
    ids.filter_map(|id| id.parse::<u64>().ok())
        .max()
        .map_or(1, |max| max + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProjectStatus;
    use chrono::NaiveDate;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    fn draft(name: &str, investigator: &str, status: ProjectStatus) -> Draft {
        Draft {
            name: name.to_string(),
            investigator: investigator.to_string(),
            description: "Test description".to_string(),
            status,
            start_date: today(),
        }
    }

    fn names<'a>(projects: &[&'a Project]) -> Vec<&'a str> {
        projects.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn seeded_store_has_two_projects_and_three_activities() {
        let store = Store::seeded();
        assert_eq!(store.projects().len(), 2);
        assert_eq!(store.activities().len(), 3);
        assert_eq!(store.stats().active_projects, 1);
        assert_eq!(store.activities()[0].time, "2 hours ago");
    }

    #[test]
    fn adding_a_project_registers_it_and_records_activity() {
        let mut store = Store::seeded();
        let project = store
            .add_project(draft("X", "Dr. Y", ProjectStatus::Active))
            .unwrap()
            .clone();

        assert_eq!(project.id, "3");
        assert_eq!(store.projects().len(), 3);
        assert_eq!(store.projects().last(), Some(&project));
        assert_eq!(store.stats().active_projects, 2);
        assert_eq!(store.activities().len(), 4);

        let latest = &store.activities()[0];
        assert_eq!(latest.title, "New Research Project Registered");
        assert_eq!(latest.description, "X");
        assert_eq!(latest.time, "Just now");
        assert_eq!(latest.kind, ActivityKind::Research);
    }

    #[test]
    fn incomplete_draft_is_rejected_without_side_effects() {
        let mut store = Store::seeded();
        let mut incomplete = draft("X", "", ProjectStatus::Pending);
        incomplete.description.clear();

        let err = store.add_project(incomplete).unwrap_err();
        assert_eq!(err, StoreError::MissingField(DraftField::Investigator));
        assert_eq!(err.to_string(), "Principal Investigator is required");
        assert_eq!(store.projects().len(), 2);
        assert_eq!(store.activities().len(), 3);
    }

    #[test]
    fn deleting_a_project_records_its_name() {
        let mut store = Store::seeded();
        let removed = store.delete_project("1");

        assert_eq!(removed.map(|p| p.name), Some("Smart Agriculture System".to_string()));
        assert_eq!(store.projects().len(), 1);
        assert_eq!(store.activities()[0].title, "Project Deleted");
        assert_eq!(store.activities()[0].description, "Smart Agriculture System");
    }

    #[test]
    fn deleting_an_unknown_id_still_records_an_activity() {
        let mut store = Store::seeded();
        assert!(store.delete_project("42").is_none());

        assert_eq!(store.projects().len(), 2);
        assert_eq!(store.activities().len(), 4);
        assert_eq!(store.activities()[0].title, "Project Deleted");
        assert_eq!(store.activities()[0].description, "");
    }

    #[test]
    fn ids_are_not_reused_after_deletion() {
        let mut store = Store::seeded();
        store.delete_project("2");
        let id = store
            .add_project(draft("Fresh", "Dr. New", ProjectStatus::Pending))
            .unwrap()
            .id
            .clone();

        assert_eq!(id, "3");
        let activity_ids: Vec<&str> = store.activities().iter().map(|a| a.id.as_str()).collect();
        assert_eq!(activity_ids, vec!["5", "4", "1", "2", "3"]);
    }

    #[test]
    fn search_matches_name_or_investigator_ignoring_case() {
        let store = Store::seeded();

        assert_eq!(names(&store.filter_projects("patel")), vec!["Smart Agriculture System"]);
        assert_eq!(names(&store.filter_projects("ENERGY")), vec!["Renewable Energy Storage"]);
        assert!(store.filter_projects("zzz").is_empty());
        assert_eq!(
            names(&store.filter_projects("")),
            vec!["Smart Agriculture System", "Renewable Energy Storage"]
        );
    }

    #[test]
    fn search_results_are_an_ordered_subset() {
        let mut store = Store::seeded();
        store.add_project(draft("Ocean Sensors", "Dr. Rao", ProjectStatus::Completed)).unwrap();
        store.add_project(draft("Solar Mapping", "Dr. Shah", ProjectStatus::Active)).unwrap();

        for term in ["", "dr", "sh", "s", "R", "o", "nothing"] {
            let filtered = store.filter_projects(term);
            let needle = term.to_lowercase();
            assert!(filtered.iter().all(|p| p.matches(&needle)));

            let positions: Vec<usize> = filtered
                .iter()
                .map(|f| store.projects().iter().position(|p| p.id == f.id).unwrap())
                .collect();
            assert!(positions.windows(2).all(|w| w[0] < w[1]), "order broken for {term:?}");
        }
    }

    #[test]
    fn active_stat_tracks_add_and_delete() {
        let mut store = Store::seeded();
        store.add_project(draft("A", "Dr. A", ProjectStatus::Active)).unwrap();
        store.add_project(draft("B", "Dr. B", ProjectStatus::Completed)).unwrap();
        store.delete_project("1");

        let stats = store.stats();
        assert_eq!(stats.active_projects, 1);
        assert_eq!(stats.active_researchers, 3);
        assert_eq!(stats.patent_applications, 156);
        assert_eq!(stats.registered_startups, 892);
    }
}
