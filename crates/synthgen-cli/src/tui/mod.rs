pub mod events;
pub mod state;
pub mod ui;
pub mod utils;

use std::io;
use std::time::Duration;

use crossterm::{
    event, execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::CliError;
use crate::workspace::{Settings, WorkspacePaths};
use events::{finish_generation, handle_key};
use state::{App, AppEvent};
use ui::draw_ui;

pub fn run(
    runtime: tokio::runtime::Handle,
    paths: WorkspacePaths,
    settings: Settings,
) -> Result<(), CliError> {
    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
    let mut app = App::new(runtime, paths, settings, tx);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_loop(&mut terminal, &mut app, &mut rx);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_loop<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    rx: &mut tokio::sync::mpsc::UnboundedReceiver<AppEvent>,
) -> Result<(), CliError> {
    while !app.should_quit {
        terminal.draw(|frame| draw_ui(frame, app))?;

        while let Ok(event) = rx.try_recv() {
            match event {
                AppEvent::GenerationDone(outcome) => finish_generation(app, outcome),
            }
        }

        app.spinner_idx = app.spinner_idx.wrapping_add(1);

        if event::poll(Duration::from_millis(100))? {
            if let event::Event::Key(key) = event::read()? {
                if key.kind == event::KeyEventKind::Press {
                    handle_key(app, key)?;
                }
            }
        }
    }
    Ok(())
}
