use crate::session::action::SessionAction;

/// Side-effecting work the main loop performs after event handling. The
/// handler itself only mutates [`crate::app::state::AppState`] and returns
/// these.
#[derive(Debug)]
pub enum Action {
    /// Submit a transition request to the session store.
    Dispatch(SessionAction),
    Quit,
}
