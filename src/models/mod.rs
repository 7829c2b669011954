mod project;
mod activity;
mod draft;
mod section;

pub use project::{Project, ProjectStatus};
pub use activity::{Activity, ActivityKind};
pub use draft::{Draft, DraftField};
pub use section::Section;
