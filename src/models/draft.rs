use chrono::NaiveDate;

use super::ProjectStatus;

/// Fields of the add-project form, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Name,
    Investigator,
    Description,
    Status,
    StartDate,
}

impl DraftField {
    pub fn label(self) -> &'static str {
        match self {
            DraftField::Name => "Project Name",
            DraftField::Investigator => "Principal Investigator",
            DraftField::Description => "Description",
            DraftField::Status => "Status",
            DraftField::StartDate => "Start Date",
        }
    }

    pub fn next(self) -> Self {
        match self {
            DraftField::Name => DraftField::Investigator,
            DraftField::Investigator => DraftField::Description,
            DraftField::Description => DraftField::Status,
            DraftField::Status => DraftField::StartDate,
            DraftField::StartDate => DraftField::Name,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            DraftField::Name => DraftField::StartDate,
            DraftField::Investigator => DraftField::Name,
            DraftField::Description => DraftField::Investigator,
            DraftField::Status => DraftField::Description,
            DraftField::StartDate => DraftField::Status,
        }
    }
}

/// A project that has not been registered yet.
#[derive(Debug, Clone, PartialEq)]
pub struct Draft {
    pub name: String,
    pub investigator: String,
    pub description: String,
    pub status: ProjectStatus,
    pub start_date: NaiveDate,
}

impl Draft {
    pub fn blank(today: NaiveDate) -> Self {
        Self {
            name: String::new(),
            investigator: String::new(),
            description: String::new(),
            status: ProjectStatus::default(),
            start_date: today,
        }
    }

    /// First required text field that is still empty.
    pub fn missing_field(&self) -> Option<DraftField> {
        [
            (DraftField::Name, &self.name),
            (DraftField::Investigator, &self.investigator),
            (DraftField::Description, &self.description),
        ]
        .into_iter()
        .find(|(_, value)| value.is_empty())
        .map(|(field, _)| field)
    }
}
