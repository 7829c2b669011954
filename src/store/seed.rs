use chrono::NaiveDate;

use crate::models::{Activity, ActivityKind, Project, ProjectStatus};

pub fn projects() -> Vec<Project> {
    vec![
        Project {
            id: "1".to_string(),
            name: "Smart Agriculture System".to_string(),
            investigator: "Dr. Patel".to_string(),
            status: ProjectStatus::Active,
            description: "AI-powered system for crop yield optimization".to_string(),
            start_date: date(2024, 1, 15),
        },
        Project {
            id: "2".to_string(),
            name: "Renewable Energy Storage".to_string(),
            investigator: "Dr. Shah".to_string(),
            status: ProjectStatus::Pending,
            description: "Advanced battery technology research".to_string(),
            start_date: date(2024, 2, 1),
        },
    ]
}

pub fn activities() -> Vec<Activity> {
    vec![
        Activity {
            id: "1".to_string(),
            title: "New Research Project Registered".to_string(),
            description: "AI-based crop yield prediction system".to_string(),
            time: "2 hours ago".to_string(),
            kind: ActivityKind::Research,
        },
        Activity {
            id: "2".to_string(),
            title: "Patent Granted".to_string(),
            description: "Smart irrigation control system".to_string(),
            time: "5 hours ago".to_string(),
            kind: ActivityKind::Patent,
        },
        Activity {
            id: "3".to_string(),
            title: "Startup Milestone Achieved".to_string(),
            description: "EcoTech Solutions secured Series A funding".to_string(),
            time: "1 day ago".to_string(),
            kind: ActivityKind::Startup,
        },
    ]
}

// Seed dates are literals known to be valid.
fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}
