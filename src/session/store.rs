//! The store: canonical record, pure reducer, synchronous broadcast.

use crate::session::action::SessionAction;
use crate::session::state::SessionState;

/// Compute the next record from the current one and a request.
///
/// Pure and total: every variant is defined, `Unknown` returns the current
/// record unchanged. Field contents are not validated; arbitrary strings
/// (including empty) are accepted.
pub fn transition(current: &SessionState, action: &SessionAction) -> SessionState {
    match action {
        SessionAction::SetLoggedIn(v) => SessionState {
            logged_in: *v,
            ..current.clone()
        },
        SessionAction::SetUsername(name) => SessionState {
            username: name.clone(),
            ..current.clone()
        },
        SessionAction::SetEmail(addr) => SessionState {
            email: addr.clone(),
            ..current.clone()
        },
        SessionAction::Unknown => current.clone(),
    }
}

type Observer = Box<dyn FnMut(&SessionState)>;

/// Owns the canonical [`SessionState`] and the observer registration list.
///
/// `dispatch` replaces the record and notifies every observer, in
/// registration order, before returning. There is no batching: each request
/// produces exactly one broadcast, and with back-to-back requests the last
/// write wins.
pub struct SessionStore {
    state: SessionState,
    observers: Vec<Observer>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            state: SessionState::default(),
            observers: Vec::new(),
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Register an observer. Called synchronously with the post-transition
    /// record after every dispatch. Observers stay registered for the life
    /// of the store.
    pub fn subscribe<F>(&mut self, observer: F)
    where
        F: FnMut(&SessionState) + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    /// Apply a transition request and broadcast the new record.
    pub fn dispatch(&mut self, action: &SessionAction) {
        let next = transition(&self.state, action);
        tracing::debug!(?action, ?next, "session transition");
        self.state = next;
        for observer in &mut self.observers {
            observer(&self.state);
        }
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn sample() -> SessionState {
        SessionState {
            logged_in: true,
            username: "alice".into(),
            email: "a@x.com".into(),
        }
    }

    #[test]
    fn test_set_logged_in_replaces_only_flag() {
        let s = sample();
        let next = transition(&s, &SessionAction::SetLoggedIn(false));
        assert!(!next.logged_in);
        assert_eq!(next.username, s.username);
        assert_eq!(next.email, s.email);
    }

    #[test]
    fn test_set_username_replaces_only_username() {
        let s = sample();
        let next = transition(&s, &SessionAction::SetUsername("bob".into()));
        assert_eq!(next.username, "bob");
        assert_eq!(next.logged_in, s.logged_in);
        assert_eq!(next.email, s.email);
    }

    #[test]
    fn test_set_email_replaces_only_email() {
        let s = sample();
        let next = transition(&s, &SessionAction::SetEmail("b@y.org".into()));
        assert_eq!(next.email, "b@y.org");
        assert_eq!(next.logged_in, s.logged_in);
        assert_eq!(next.username, s.username);
    }

    #[test]
    fn test_unknown_is_identity() {
        let s = sample();
        assert_eq!(transition(&s, &SessionAction::Unknown), s);
    }

    #[test]
    fn test_set_is_idempotent() {
        let s = sample();
        let req = SessionAction::SetUsername("carol".into());
        let once = transition(&s, &req);
        let twice = transition(&once, &req);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_empty_strings_accepted() {
        let s = sample();
        let next = transition(&s, &SessionAction::SetUsername(String::new()));
        assert_eq!(next.username, "");
    }

    #[test]
    fn test_store_starts_at_default() {
        let store = SessionStore::new();
        assert_eq!(*store.state(), SessionState::default());
    }

    #[test]
    fn test_login_scenario() {
        let mut store = SessionStore::new();

        store.dispatch(&SessionAction::SetUsername("alice".into()));
        assert_eq!(
            *store.state(),
            SessionState {
                logged_in: false,
                username: "alice".into(),
                email: String::new(),
            }
        );

        store.dispatch(&SessionAction::SetEmail("a@x.com".into()));
        assert_eq!(
            *store.state(),
            SessionState {
                logged_in: false,
                username: "alice".into(),
                email: "a@x.com".into(),
            }
        );

        store.dispatch(&SessionAction::SetLoggedIn(true));
        assert!(store.state().logged_in);

        store.dispatch(&SessionAction::SetLoggedIn(false));
        assert_eq!(
            *store.state(),
            SessionState {
                logged_in: false,
                username: "alice".into(),
                email: "a@x.com".into(),
            }
        );
    }

    #[test]
    fn test_broadcast_reaches_every_observer_in_order() {
        let mut store = SessionStore::new();
        let seen: Rc<RefCell<Vec<(u8, SessionState)>>> = Rc::new(RefCell::new(Vec::new()));

        for tag in [1u8, 2] {
            let seen = seen.clone();
            store.subscribe(move |s| seen.borrow_mut().push((tag, s.clone())));
        }

        store.dispatch(&SessionAction::SetLoggedIn(true));

        let seen = seen.borrow();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].0, 1);
        assert_eq!(seen[1].0, 2);
        assert!(seen.iter().all(|(_, s)| s.logged_in));
    }

    #[test]
    fn test_observer_sees_post_transition_record() {
        let mut store = SessionStore::new();
        let seen: Rc<RefCell<Vec<SessionState>>> = Rc::new(RefCell::new(Vec::new()));
        {
            let seen = seen.clone();
            store.subscribe(move |s| seen.borrow_mut().push(s.clone()));
        }

        store.dispatch(&SessionAction::SetUsername("dave".into()));
        store.dispatch(&SessionAction::Unknown);

        let seen = seen.borrow();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].username, "dave");
        // Unknown still broadcasts the (unchanged) record.
        assert_eq!(seen[1], seen[0]);
    }
}
