use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectStatus {
    Active,
    Completed,
    #[default]
    Pending,
}

impl ProjectStatus {
    /// Order used by the status select in the add form.
    pub const OPTIONS: [ProjectStatus; 3] = [
        ProjectStatus::Pending,
        ProjectStatus::Active,
        ProjectStatus::Completed,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ProjectStatus::Active => "Active",
            ProjectStatus::Completed => "Completed",
            ProjectStatus::Pending => "Pending",
        }
    }

    pub fn next(self) -> Self {
        match self {
            ProjectStatus::Pending => ProjectStatus::Active,
            ProjectStatus::Active => ProjectStatus::Completed,
            ProjectStatus::Completed => ProjectStatus::Pending,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            ProjectStatus::Pending => ProjectStatus::Completed,
            ProjectStatus::Active => ProjectStatus::Pending,
            ProjectStatus::Completed => ProjectStatus::Active,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub investigator: String,
    pub status: ProjectStatus,
    pub description: String,
    pub start_date: NaiveDate,
}

impl Project {
    /// Case-insensitive substring match against name or investigator.
    /// `needle` must already be lowercased.
    pub fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.investigator.to_lowercase().contains(needle)
    }
}
