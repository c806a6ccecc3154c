//! Command execution wrapper
//!
//! Every command except the session ones goes through [`execute_command`]:
//! it refuses to run while another window owns the session, then times and
//! logs the call.

use std::future::Future;
use std::time::Instant;

use rizzmaster_domain::Result as DomainResult;

use crate::context::AppContext;
use crate::utils::logging::log_command_execution;

pub async fn execute_command<F, Fut, T>(
    ctx: &AppContext,
    command_name: &str,
    command_fn: F,
) -> DomainResult<T>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = DomainResult<T>>,
{
    let start = Instant::now();

    let result = match ctx.monitor.ensure_active() {
        Ok(()) => command_fn().await,
        Err(err) => Err(err),
    };

    log_command_execution(command_name, start.elapsed(), result.as_ref().err());
    result
}
