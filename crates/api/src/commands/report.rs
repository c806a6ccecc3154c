use rizzmaster_domain::{ContentReport, Result as DomainResult};

use crate::context::AppContext;
use crate::utils::command_helpers::execute_command;

/// Report a generated line or an app problem. `reason` is the wire name
/// (`offensive`, `harmful`, `low_quality`, `bug`, `other`).
pub async fn submit_report(
    ctx: &AppContext,
    reason: &str,
    details: &str,
    content: Option<String>,
) -> DomainResult<ContentReport> {
    execute_command(ctx, "report::submit_report", || ctx.reports.submit(reason, details, content))
        .await
}
