#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    Research,
    Patent,
    Startup,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Activity {
    pub id: String,
    pub title: String,
    pub description: String,
    pub time: String,
    pub kind: ActivityKind,
}
