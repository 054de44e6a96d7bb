//! The session store core: record type, transition requests, the reducer,
//! and the shared context handle components go through to reach the store.
//!
//! Nothing in here knows about the terminal. The rest of the application is
//! one possible host; the store only promises a current record, a pure
//! transition function, and a synchronous broadcast to subscribers.

pub mod action;
pub mod context;
pub mod state;
pub mod store;
