mod app;
mod config;
mod logging;
mod models;
mod store;
mod ui;

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use tracing::info;
use tui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};

use crate::app::App;
use crate::models::Section;
use crate::store::Store;
use crate::ui::render_app;

/// Research and innovation management dashboard
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Section shown at startup
    #[arg(long, value_enum, default_value_t = Section::Dashboard)]
    section: Section,

    /// Log file (overrides RIMS_LOG_FILE)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log filter such as `info` or `rims_dashboard=debug` (overrides RIMS_LOG_LEVEL)
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let mut config = config::init()?;
    config.override_with(cli.log_file, cli.log_level);
    logging::init(&config)?;
    info!(section = cli.section.title(), "starting dashboard");

    // Setup terminal
    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let today = chrono::Local::now().date_naive();
    let mut app = App::new(Store::seeded(), cli.section, today);

    // Run the main app loop
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    terminal::disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        tracing::error!(error = %err, "dashboard stopped with an error");
    }
    info!("dashboard closed");

    result
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|f| render_app(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                app.handle_key(key);
            }
        }
    }

    Ok(())
}
