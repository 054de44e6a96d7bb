use crate::app::action::Action;
use crate::app::commands::{parse_command, ParsedCommand};
use crate::app::event::AppEvent;
use crate::app::state::*;
use crate::session::action::SessionAction;
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyModifiers};

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => {
            state.mark_dirty();
            handle_terminal(state, cevent)
        }
        AppEvent::Tick => {
            state.expire_status();
            vec![]
        }
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) => handle_key(state, key),
        CEvent::Resize(_, _) => {
            state.mark_dirty();
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    // Global keybindings
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    // F2 toggles the login flag from anywhere
    if key.code == KeyCode::F(2) {
        return toggle_login(state);
    }

    if key.code == KeyCode::Tab {
        state.cycle_focus();
        return vec![];
    }

    match state.focus {
        FocusPanel::Input => handle_input_key(state, key),
        FocusPanel::Activity => handle_activity_key(state, key),
        FocusPanel::Session => handle_session_key(state, key),
    }
}

/// Read the current record through the context and request the opposite
/// login flag. A detached store surfaces as an error entry, not a crash.
fn toggle_login(state: &mut AppState) -> Vec<Action> {
    match state.session.get_state() {
        Ok(current) => vec![Action::Dispatch(SessionAction::SetLoggedIn(
            !current.logged_in,
        ))],
        Err(e) => {
            state.error_message(format!("Cannot toggle login: {}", e));
            vec![]
        }
    }
}

fn handle_input_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Char(c) => {
            state.input.insert_char(c);
            vec![]
        }
        KeyCode::Backspace => {
            state.input.delete_back();
            vec![]
        }
        KeyCode::Left => {
            state.input.move_left();
            vec![]
        }
        KeyCode::Right => {
            state.input.move_right();
            vec![]
        }
        KeyCode::Home => {
            state.input.move_home();
            vec![]
        }
        KeyCode::End => {
            state.input.move_end();
            vec![]
        }
        KeyCode::Up => {
            state.input.history_up();
            vec![]
        }
        KeyCode::Down => {
            state.input.history_down();
            vec![]
        }
        KeyCode::Enter => submit_input(state),
        _ => vec![],
    }
}

fn submit_input(state: &mut AppState) -> Vec<Action> {
    let line = state.input.take_text();
    if line.trim().is_empty() {
        return vec![];
    }

    if !line.trim_start().starts_with('/') {
        state.set_status("Commands start with /. Try /help".to_string());
        return vec![];
    }

    match parse_command(&line) {
        Some(cmd) => run_command(state, cmd),
        None => {
            // Unrecognized request kind: the store treats it as a no-op,
            // which is worth demonstrating rather than swallowing here.
            state.set_status(format!("Unknown command: {}", line.trim()));
            vec![Action::Dispatch(SessionAction::Unknown)]
        }
    }
}

fn run_command(state: &mut AppState, cmd: ParsedCommand) -> Vec<Action> {
    match cmd {
        ParsedCommand::Login => vec![Action::Dispatch(SessionAction::SetLoggedIn(true))],
        ParsedCommand::Logout => vec![Action::Dispatch(SessionAction::SetLoggedIn(false))],
        ParsedCommand::Username { name } => {
            vec![Action::Dispatch(SessionAction::SetUsername(name))]
        }
        ParsedCommand::Email { addr } => vec![Action::Dispatch(SessionAction::SetEmail(addr))],
        ParsedCommand::Reset => vec![
            Action::Dispatch(SessionAction::SetLoggedIn(false)),
            Action::Dispatch(SessionAction::SetUsername(String::new())),
            Action::Dispatch(SessionAction::SetEmail(String::new())),
        ],
        ParsedCommand::Whoami => {
            match state.session.get_state() {
                Ok(s) => {
                    let email = if s.email.is_empty() {
                        "(unset)"
                    } else {
                        s.email.as_str()
                    };
                    state.system_message(format!(
                        "You are {} <{}>, {}",
                        s.display_name(),
                        email,
                        if s.logged_in { "logged in" } else { "logged out" }
                    ));
                }
                Err(e) => state.error_message(format!("whoami failed: {}", e)),
            }
            vec![]
        }
        ParsedCommand::Help => {
            show_help(state);
            vec![]
        }
        ParsedCommand::Quit => vec![Action::Quit],
    }
}

fn show_help(state: &mut AppState) {
    state.system_message("Commands:".to_string());
    state.system_message("  /login              set the login flag".to_string());
    state.system_message("  /logout             clear the login flag".to_string());
    state.system_message("  /username <name>    set the username (empty clears)".to_string());
    state.system_message("  /email <addr>       set the email (empty clears)".to_string());
    state.system_message("  /reset              back to the default record".to_string());
    state.system_message("  /whoami             print the current record".to_string());
    state.system_message("  /quit               exit".to_string());
    state.system_message("Keys: Tab cycles focus, F2 toggles login, Ctrl+C quits".to_string());
}

fn handle_activity_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Up => state.activity.scroll_up(1),
        KeyCode::Down => state.activity.scroll_down(1),
        KeyCode::PageUp => state.activity.scroll_up(10),
        KeyCode::PageDown => state.activity.scroll_down(10),
        KeyCode::End => state.activity.scroll_offset = 0,
        _ => {}
    }
    vec![]
}

fn handle_session_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        // Enter on the session panel toggles login, same as F2
        KeyCode::Enter | KeyCode::Char(' ') => toggle_login(state),
        _ => vec![],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::session::context::SessionContext;
    use crate::session::store::SessionStore;

    fn test_state() -> AppState {
        let session = SessionContext::new(SessionStore::new());
        AppState::new(AppConfig::default(), session)
    }

    fn type_line(state: &mut AppState, line: &str) -> Vec<Action> {
        for c in line.chars() {
            state.input.insert_char(c);
        }
        submit_input(state)
    }

    #[test]
    fn test_login_line_yields_dispatch() {
        let mut state = test_state();
        let actions = type_line(&mut state, "/login");
        assert!(matches!(
            actions.as_slice(),
            [Action::Dispatch(SessionAction::SetLoggedIn(true))]
        ));
    }

    #[test]
    fn test_unknown_command_dispatches_unknown() {
        let mut state = test_state();
        let actions = type_line(&mut state, "/frobnicate");
        assert!(matches!(
            actions.as_slice(),
            [Action::Dispatch(SessionAction::Unknown)]
        ));
        assert!(state.status_message.is_some());
    }

    #[test]
    fn test_plain_text_produces_no_action() {
        let mut state = test_state();
        let actions = type_line(&mut state, "hello");
        assert!(actions.is_empty());
        assert!(state.status_message.is_some());
    }

    #[test]
    fn test_f2_requests_opposite_flag() {
        let mut state = test_state();
        let key = KeyEvent::new(KeyCode::F(2), KeyModifiers::NONE);
        let actions = handle_key(&mut state, key);
        assert!(matches!(
            actions.as_slice(),
            [Action::Dispatch(SessionAction::SetLoggedIn(true))]
        ));
    }

    #[test]
    fn test_toggle_on_detached_store_is_an_error_entry() {
        let mut state = AppState::new(AppConfig::default(), SessionContext::detached());
        let actions = toggle_login(&mut state);
        assert!(actions.is_empty());
        assert!(matches!(
            state.activity.entries.last().map(|e| &e.kind),
            Some(EntryKind::Error)
        ));
    }
}
