//! Report sink that writes each report as a structured log event

use async_trait::async_trait;
use rizzmaster_core::ReportSink;
use rizzmaster_domain::{ContentReport, Result as DomainResult};
use tracing::warn;

#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReportSink;

#[async_trait]
impl ReportSink for TracingReportSink {
    async fn record(&self, report: &ContentReport) -> DomainResult<()> {
        warn!(
            reason = %report.reason,
            user_id = %report.user_id,
            reported_at = %report.reported_at,
            details = %report.details,
            content = report.content.as_deref().unwrap_or(""),
            "report.submitted"
        );
        Ok(())
    }
}
