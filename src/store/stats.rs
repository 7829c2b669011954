use crate::models::{Project, ProjectStatus};

/// Placeholder figures shown on the dashboard; not derived from any state.
pub const PATENT_APPLICATIONS: usize = 156;
pub const REGISTERED_STARTUPS: usize = 892;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardStats {
    pub active_projects: usize,
    pub patent_applications: usize,
    pub registered_startups: usize,
    /// Stand-in figure: the total number of registered projects.
    pub active_researchers: usize,
}

impl DashboardStats {
    pub fn from_projects(projects: &[Project]) -> Self {
        Self {
            active_projects: projects
                .iter()
                .filter(|p| p.status == ProjectStatus::Active)
                .count(),
            patent_applications: PATENT_APPLICATIONS,
            registered_startups: REGISTERED_STARTUPS,
            active_researchers: projects.len(),
        }
    }
}
