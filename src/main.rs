mod app;
mod config;
mod logging;
mod session;
mod ui;

use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::handler;
use crate::app::state::AppState;
use crate::config::guest::generate_guest_name;
use crate::logging::SessionLogger;
use crate::session::action::SessionAction;
use crate::session::context::SessionContext;
use crate::session::state::SessionState;
use crate::session::store::SessionStore;
use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::prelude::*;
use std::cell::RefCell;
use std::io;
use std::rc::Rc;
use tokio::sync::mpsc;

#[tokio::main]
async fn main() -> Result<()> {
    // Install panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    // Load config
    let cfg = config::load_config()?;
    logging::init_tracing(&cfg.logging)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, cfg).await;

    // Restore terminal
    restore_terminal()?;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    cfg: config::AppConfig,
) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<AppEvent>();

    // Build the store and register the two observers: a change queue the
    // loop drains into the activity log, and the shared redraw flag.
    let mut store = SessionStore::new();
    let changes: Rc<RefCell<Vec<SessionState>>> = Rc::new(RefCell::new(Vec::new()));
    {
        let changes = changes.clone();
        store.subscribe(move |record| changes.borrow_mut().push(record.clone()));
    }
    let session = SessionContext::new(store);

    let mut state = AppState::new(cfg.clone(), session.clone());
    {
        let dirty = state.dirty_flag();
        session.subscribe(move |_| dirty.set(true))?;
    }

    let mut session_logger = SessionLogger::new(&cfg.logging);

    // Spawn terminal input task
    let term_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut reader = EventStream::new();
        loop {
            match reader.next().await {
                Some(Ok(event)) => {
                    if term_tx.send(AppEvent::Terminal(event)).is_err() {
                        break;
                    }
                }
                Some(Err(_)) => break,
                None => break,
            }
        }
    });

    // Spawn tick task (20 FPS = 50ms)
    let tick_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(std::time::Duration::from_millis(50));
        loop {
            interval.tick().await;
            if tick_tx.send(AppEvent::Tick).is_err() {
                break;
            }
        }
    });

    state.system_message("Welcome to sessiontui.".to_string());
    state.system_message(
        "One shared record, a pure reducer, and synchronous observers.".to_string(),
    );
    state.system_message(String::new());
    state.system_message("Try: /username alice, /email a@x.com, /login".to_string());
    state.system_message("Help: /help".to_string());

    // Config-supplied startup values arrive as ordinary dispatches; the
    // store itself starts at the default record.
    let mut startup: Vec<SessionAction> = Vec::new();
    match cfg.session.username.clone() {
        Some(name) => startup.push(SessionAction::SetUsername(name)),
        None if cfg.session.suggest_guest => {
            startup.push(SessionAction::SetUsername(generate_guest_name()))
        }
        None => {}
    }
    if let Some(addr) = cfg.session.email.clone() {
        startup.push(SessionAction::SetEmail(addr));
    }
    for action in &startup {
        session.dispatch(action)?;
    }
    drain_changes(&mut state, &changes, &mut session_logger);

    // Initial render
    terminal.draw(|f| ui::render(f, &state))?;
    state.take_dirty();

    // Main event loop
    loop {
        let event = event_rx.recv().await;
        let Some(event) = event else { break };

        let actions = handler::handle_event(&mut state, event);

        // Process actions
        for action in actions {
            match action {
                Action::Dispatch(request) => {
                    if let Err(e) = state.session.dispatch(&request) {
                        state.error_message(format!("Dispatch failed: {}", e));
                    }
                }
                Action::Quit => state.should_quit = true,
            }
        }

        // Drain broadcast records into the activity log and transition log
        drain_changes(&mut state, &changes, &mut session_logger);

        if state.should_quit {
            break;
        }

        // Conditional render (only if dirty)
        if state.take_dirty() {
            terminal.draw(|f| ui::render(f, &state))?;
        }
    }

    Ok(())
}

/// Move records collected by the change-queue observer into the activity
/// log and the on-disk transition log.
fn drain_changes(
    state: &mut AppState,
    changes: &Rc<RefCell<Vec<SessionState>>>,
    logger: &mut SessionLogger,
) {
    let drained: Vec<SessionState> = changes.borrow_mut().drain(..).collect();
    for record in drained {
        state.transitions += 1;
        state.change_message(format!(
            "logged_in={}, username={:?}, email={:?}",
            record.logged_in, record.username, record.email
        ));
        logger.log_transition(&record);
    }
}
