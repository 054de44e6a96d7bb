use crate::config::AppConfig;
use crate::session::context::SessionContext;
use chrono::Local;
use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// How long a transient status-bar message stays visible.
const STATUS_MESSAGE_TTL: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, PartialEq)]
pub enum EntryKind {
    System,
    Change,
    Error,
}

#[derive(Debug, Clone)]
pub struct ActivityEntry {
    pub timestamp: String,
    pub text: String,
    pub kind: EntryKind,
}

/// Scrollback of session activity: transition records as they are
/// broadcast, plus system and error lines from the app itself.
#[derive(Debug)]
pub struct ActivityLog {
    pub entries: Vec<ActivityEntry>,
    pub scroll_offset: usize,
}

impl ActivityLog {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            scroll_offset: 0,
        }
    }

    pub fn push(&mut self, entry: ActivityEntry, max_scrollback: usize) {
        self.entries.push(entry);
        if self.entries.len() > max_scrollback {
            self.entries.remove(0);
            if self.scroll_offset > 0 {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
            }
        }
    }

    pub fn scroll_up(&mut self, lines: usize) {
        let max = self.entries.len().saturating_sub(1);
        self.scroll_offset = (self.scroll_offset + lines).min(max);
    }

    pub fn scroll_down(&mut self, lines: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(lines);
    }
}

/// Single-line input editor with history. Cursor is a byte offset, always
/// on a char boundary.
#[derive(Debug)]
pub struct InputState {
    pub text: String,
    pub cursor: usize,
    pub history: Vec<String>,
    pub history_index: Option<usize>,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            text: String::new(),
            cursor: 0,
            history: Vec::new(),
            history_index: None,
        }
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn delete_back(&mut self) {
        if self.cursor > 0 {
            let prev = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.text.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.text.len() {
            self.cursor = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    /// Take the current line, pushing it onto the history.
    pub fn take_text(&mut self) -> String {
        let text = self.text.clone();
        self.text.clear();
        self.cursor = 0;
        self.history_index = None;
        if !text.is_empty() {
            self.history.push(text.clone());
        }
        text
    }

    pub fn history_up(&mut self) {
        if self.history.is_empty() {
            return;
        }
        let idx = match self.history_index {
            Some(i) if i > 0 => i - 1,
            Some(_) => return,
            None => self.history.len() - 1,
        };
        self.history_index = Some(idx);
        self.text = self.history[idx].clone();
        self.cursor = self.text.len();
    }

    pub fn history_down(&mut self) {
        match self.history_index {
            Some(i) if i + 1 < self.history.len() => {
                let idx = i + 1;
                self.history_index = Some(idx);
                self.text = self.history[idx].clone();
                self.cursor = self.text.len();
            }
            Some(_) => {
                self.history_index = None;
                self.text.clear();
                self.cursor = 0;
            }
            None => {}
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FocusPanel {
    Session,
    Activity,
    Input,
}

pub struct AppState {
    pub config: AppConfig,
    /// Handle to the shared session store. Every panel reads through this;
    /// controls dispatch through it.
    pub session: SessionContext,
    pub activity: ActivityLog,
    pub input: InputState,
    pub focus: FocusPanel,
    pub should_quit: bool,
    pub status_message: Option<String>,
    pub transitions: usize,
    pub timestamp_format: String,
    status_expires_at: Option<Instant>,
    dirty: Rc<Cell<bool>>,
}

impl AppState {
    pub fn new(config: AppConfig, session: SessionContext) -> Self {
        let timestamp_format = config.ui.timestamp_format.clone();
        Self {
            config,
            session,
            activity: ActivityLog::new(),
            input: InputState::new(),
            focus: FocusPanel::Input,
            should_quit: false,
            status_message: None,
            transitions: 0,
            timestamp_format,
            status_expires_at: None,
            dirty: Rc::new(Cell::new(true)),
        }
    }

    /// Shared redraw flag. A clone of this is subscribed to the store so
    /// any transition marks the UI dirty, wherever it was dispatched from.
    pub fn dirty_flag(&self) -> Rc<Cell<bool>> {
        self.dirty.clone()
    }

    pub fn mark_dirty(&self) {
        self.dirty.set(true);
    }

    /// Read and clear the redraw flag.
    pub fn take_dirty(&self) -> bool {
        self.dirty.replace(false)
    }

    fn timestamp(&self) -> String {
        Local::now().format(&self.timestamp_format).to_string()
    }

    fn push_entry(&mut self, text: String, kind: EntryKind) {
        let entry = ActivityEntry {
            timestamp: self.timestamp(),
            text,
            kind,
        };
        let max = self.config.ui.max_scrollback;
        self.activity.push(entry, max);
        self.mark_dirty();
    }

    pub fn system_message(&mut self, text: String) {
        self.push_entry(text, EntryKind::System);
    }

    pub fn change_message(&mut self, text: String) {
        self.push_entry(text, EntryKind::Change);
    }

    pub fn error_message(&mut self, text: String) {
        self.push_entry(text, EntryKind::Error);
    }

    /// Transient status-bar message, cleared after a few seconds.
    pub fn set_status(&mut self, text: String) {
        self.status_message = Some(text);
        self.status_expires_at = Some(Instant::now() + STATUS_MESSAGE_TTL);
        self.mark_dirty();
    }

    /// Expire the status message if its TTL has passed. Called on tick.
    pub fn expire_status(&mut self) {
        if let Some(at) = self.status_expires_at {
            if Instant::now() >= at {
                self.status_message = None;
                self.status_expires_at = None;
                self.mark_dirty();
            }
        }
    }

    pub fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            FocusPanel::Input => FocusPanel::Session,
            FocusPanel::Session => FocusPanel::Activity,
            FocusPanel::Activity => FocusPanel::Input,
        };
        self.mark_dirty();
    }

    pub fn status_line(&self) -> String {
        if let Some(ref msg) = self.status_message {
            return msg.clone();
        }
        let logged = match self.session.get_state() {
            Ok(s) if s.logged_in => "logged in",
            Ok(_) => "logged out",
            Err(_) => "store not initialized",
        };
        format!("{} | {} transitions", logged, self.transitions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_editing_roundtrip() {
        let mut input = InputState::new();
        for c in "/login".chars() {
            input.insert_char(c);
        }
        assert_eq!(input.text, "/login");
        assert_eq!(input.cursor, 6);

        input.delete_back();
        assert_eq!(input.text, "/logi");

        input.move_home();
        input.move_right();
        assert_eq!(input.cursor, 1);

        let taken = input.take_text();
        assert_eq!(taken, "/logi");
        assert_eq!(input.text, "");
        assert_eq!(input.history, vec!["/logi".to_string()]);
    }

    #[test]
    fn test_input_cursor_multibyte() {
        let mut input = InputState::new();
        input.insert_char('é');
        input.insert_char('x');
        input.move_left();
        input.move_left();
        assert_eq!(input.cursor, 0);
        input.move_right();
        assert_eq!(input.cursor, 'é'.len_utf8());
    }

    #[test]
    fn test_activity_log_trims_to_scrollback() {
        let mut log = ActivityLog::new();
        for i in 0..10 {
            log.push(
                ActivityEntry {
                    timestamp: String::new(),
                    text: format!("entry {}", i),
                    kind: EntryKind::System,
                },
                5,
            );
        }
        assert_eq!(log.entries.len(), 5);
        assert_eq!(log.entries[0].text, "entry 5");
    }

    #[test]
    fn test_scroll_clamps() {
        let mut log = ActivityLog::new();
        for i in 0..3 {
            log.push(
                ActivityEntry {
                    timestamp: String::new(),
                    text: format!("{}", i),
                    kind: EntryKind::System,
                },
                100,
            );
        }
        log.scroll_up(10);
        assert_eq!(log.scroll_offset, 2);
        log.scroll_down(10);
        assert_eq!(log.scroll_offset, 0);
    }
}
