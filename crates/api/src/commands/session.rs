//! Session exclusivity
//!
//! These bypass the blocked-session check: they are how a blocked window
//! finds out and takes the session back.

use std::time::Instant;

use rizzmaster_domain::{Result as DomainResult, SessionState};
use tokio::sync::watch;

use crate::context::AppContext;
use crate::utils::logging::log_command_execution;

/// Current state as last applied by the session listener.
pub fn session_state(ctx: &AppContext) -> SessionState {
    ctx.monitor.state()
}

/// Watch for `Active`/`Blocked` changes.
pub fn watch_session(ctx: &AppContext) -> watch::Receiver<SessionState> {
    ctx.monitor.subscribe()
}

/// Make this window the active session again; others become blocked.
pub fn reclaim_session(ctx: &AppContext) -> DomainResult<SessionState> {
    let start = Instant::now();
    let result = ctx.monitor.reclaim().map(|()| ctx.monitor.state());
    log_command_execution("session::reclaim_session", start.elapsed(), result.as_ref().err());
    result
}
