/// A transition request against the session record. Each variant names the
/// field it replaces; `Unknown` is the fallback for requests the store does
/// not recognize and reduces to a no-op rather than an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionAction {
    SetLoggedIn(bool),
    SetUsername(String),
    SetEmail(String),
    Unknown,
}

impl SessionAction {
    /// Short label for activity/log lines.
    pub fn describe(&self) -> String {
        match self {
            SessionAction::SetLoggedIn(true) => "logged in".to_string(),
            SessionAction::SetLoggedIn(false) => "logged out".to_string(),
            SessionAction::SetUsername(name) => format!("username set to \"{}\"", name),
            SessionAction::SetEmail(addr) => format!("email set to \"{}\"", addr),
            SessionAction::Unknown => "unknown request (ignored)".to_string(),
        }
    }
}
