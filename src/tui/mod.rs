// File: ./src/tui/mod.rs
// Entry point and main loop for the TUI application.
pub mod action;
pub mod handlers;
pub mod state;
pub mod view;

use crate::config::Config;
use crate::context::SharedContext;
use crate::controller::ListController;
use crate::repository::Outcome;
use crate::storage::{FileStore, SnapshotStore};
use crate::tui::action::Action;
use crate::tui::state::{AppState, ListView};
use crate::tui::view::draw;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Runs the interactive list until the user quits.
///
/// Everything happens on this thread: read a key, apply it, redraw. Each
/// action finishes (persisted and re-rendered) before the next key is read.
pub fn run(ctx: SharedContext, cfg: &Config) -> Result<()> {
    let store = FileStore::open(ctx.as_ref(), &cfg.storage_file)?;
    log::info!("Using storage file {:?}", store.path());
    let mut controller = ListController::new(
        SnapshotStore::new(Box::new(store)),
        ListView::default(),
    );

    let mut app_state = AppState::new();
    app_state.strikethrough_completed = cfg.strikethrough_completed;
    app_state.sync_with(controller.renderer());

    // Panic Hook: give the terminal back before the message is printed.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        log::error!("PANIC: {}", info);
        default_hook(info);
    }));

    // --- TERMINAL SETUP ---
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, &mut controller, &mut app_state);

    // --- CLEANUP ---
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    controller: &mut ListController<ListView>,
    app_state: &mut AppState,
) -> Result<()> {
    loop {
        terminal.draw(|f| draw(f, app_state, controller.renderer()))?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        // Filter out KeyRelease events to prevent double input on Windows
        if key.kind == KeyEventKind::Release {
            continue;
        }

        match handlers::handle_key_event(key, app_state, controller.renderer()) {
            Some(Action::Quit) => break,
            Some(Action::List(action)) => {
                let is_submit = matches!(action, crate::action::UserAction::Submit(_));
                let outcome = controller.dispatch(action);
                app_state.message = match outcome {
                    Outcome::Applied => String::new(),
                    Outcome::Ignored if is_submit => "Nothing to add.".to_string(),
                    Outcome::Ignored => "Item no longer exists.".to_string(),
                };
                if is_submit && outcome == Outcome::Applied {
                    app_state.select_last(controller.repository().len());
                }
                app_state.sync_with(controller.renderer());
            }
            None => {}
        }
    }
    Ok(())
}
