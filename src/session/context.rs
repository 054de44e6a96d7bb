//! The shared handle components use to reach the store.
//!
//! Where a UI framework would propagate the store ambiently through a
//! provider/context mechanism, here the handle is passed explicitly to
//! whatever needs it. A handle built with [`SessionContext::detached`] has
//! no store behind it and every access fails with
//! [`SessionError::NotInitialized`], mirroring the "used outside a provider"
//! failure such frameworks raise.

use crate::session::action::SessionAction;
use crate::session::state::SessionState;
use crate::session::store::SessionStore;
use std::cell::RefCell;
use std::rc::Rc;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("session store is not initialized")]
    NotInitialized,
}

/// Cloneable handle over a [`SessionStore`]. Clones share the same store.
///
/// Single-threaded by design: the store sits behind one `RefCell`, so
/// observers must not dispatch or read back through the context from inside
/// a notification. They already receive the post-transition record as their
/// argument.
#[derive(Clone, Default)]
pub struct SessionContext {
    store: Option<Rc<RefCell<SessionStore>>>,
}

impl SessionContext {
    pub fn new(store: SessionStore) -> Self {
        Self {
            store: Some(Rc::new(RefCell::new(store))),
        }
    }

    /// A handle with no store attached. Accessors fail with
    /// [`SessionError::NotInitialized`].
    pub fn detached() -> Self {
        Self { store: None }
    }

    pub fn is_initialized(&self) -> bool {
        self.store.is_some()
    }

    /// Read the current record.
    pub fn get_state(&self) -> Result<SessionState, SessionError> {
        let store = self.store.as_ref().ok_or(SessionError::NotInitialized)?;
        Ok(store.borrow().state().clone())
    }

    /// Submit a transition request. The store updates and notifies every
    /// observer before this returns.
    pub fn dispatch(&self, action: &SessionAction) -> Result<(), SessionError> {
        let store = self.store.as_ref().ok_or(SessionError::NotInitialized)?;
        store.borrow_mut().dispatch(action);
        Ok(())
    }

    pub fn subscribe<F>(&self, observer: F) -> Result<(), SessionError>
    where
        F: FnMut(&SessionState) + 'static,
    {
        let store = self.store.as_ref().ok_or(SessionError::NotInitialized)?;
        store.borrow_mut().subscribe(observer);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detached_get_state_fails() {
        let ctx = SessionContext::detached();
        assert_eq!(ctx.get_state(), Err(SessionError::NotInitialized));
    }

    #[test]
    fn test_detached_dispatch_fails() {
        let ctx = SessionContext::detached();
        assert_eq!(
            ctx.dispatch(&SessionAction::SetLoggedIn(true)),
            Err(SessionError::NotInitialized)
        );
    }

    #[test]
    fn test_default_is_detached() {
        assert!(!SessionContext::default().is_initialized());
    }

    #[test]
    fn test_clones_share_one_store() {
        let ctx = SessionContext::new(SessionStore::new());
        let other = ctx.clone();

        other
            .dispatch(&SessionAction::SetUsername("alice".into()))
            .unwrap();
        assert_eq!(ctx.get_state().unwrap().username, "alice");
    }

    #[test]
    fn test_subscribe_through_context() {
        use std::cell::Cell;

        let ctx = SessionContext::new(SessionStore::new());
        let hits = Rc::new(Cell::new(0u32));
        {
            let hits = hits.clone();
            ctx.subscribe(move |_| hits.set(hits.get() + 1)).unwrap();
        }

        ctx.dispatch(&SessionAction::SetLoggedIn(true)).unwrap();
        ctx.dispatch(&SessionAction::Unknown).unwrap();
        assert_eq!(hits.get(), 2);
    }
}
