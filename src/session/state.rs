/// The session record shared across every panel.
///
/// A value type: transitions never mutate a record in place, they build a
/// complete replacement via struct-update syntax. Every field is always
/// populated; the empty string is the "unset" value for the text fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub logged_in: bool,
    pub username: String,
    pub email: String,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            logged_in: false,
            username: String::new(),
            email: String::new(),
        }
    }
}

impl SessionState {
    /// Display name for UI surfaces: the username, or a placeholder when unset.
    pub fn display_name(&self) -> &str {
        if self.username.is_empty() {
            "(unset)"
        } else {
            &self.username
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_record() {
        let s = SessionState::default();
        assert!(!s.logged_in);
        assert_eq!(s.username, "");
        assert_eq!(s.email, "");
    }

    #[test]
    fn test_display_name_placeholder() {
        let mut s = SessionState::default();
        assert_eq!(s.display_name(), "(unset)");
        s.username = "alice".into();
        assert_eq!(s.display_name(), "alice");
    }
}
