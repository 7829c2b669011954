use clap::ValueEnum;

/// Sidebar entries, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Section {
    #[default]
    Dashboard,
    Research,
    Ipr,
    Innovation,
    Startups,
    Resources,
    Analytics,
}

impl Section {
    pub const ALL: [Section; 7] = [
        Section::Dashboard,
        Section::Research,
        Section::Ipr,
        Section::Innovation,
        Section::Startups,
        Section::Resources,
        Section::Analytics,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Section::Dashboard => "Dashboard",
            Section::Research => "Research Projects",
            Section::Ipr => "IPR Management",
            Section::Innovation => "Innovation Hub",
            Section::Startups => "Startups",
            Section::Resources => "Resources",
            Section::Analytics => "Analytics",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Section::Dashboard => "▦",
            Section::Research => "⚗",
            Section::Ipr => "⚖",
            Section::Innovation => "✦",
            Section::Startups => "▲",
            Section::Resources => "❐",
            Section::Analytics => "▥",
        }
    }

    pub fn index(self) -> usize {
        Section::ALL
            .iter()
            .position(|s| *s == self)
            .unwrap_or(0)
    }

    /// Section bound to a 1-based menu position.
    pub fn from_position(position: usize) -> Option<Self> {
        position
            .checked_sub(1)
            .and_then(|i| Section::ALL.get(i).copied())
    }

    pub fn next(self) -> Self {
        Section::ALL[(self.index() + 1) % Section::ALL.len()]
    }

    pub fn previous(self) -> Self {
        let len = Section::ALL.len();
        Section::ALL[(self.index() + len - 1) % len]
    }
}
