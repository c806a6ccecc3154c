//! Content reports

use std::sync::Arc;

use async_trait::async_trait;
use rizzmaster_domain::{ContentReport, ReportReason, Result, RizzError};

use crate::clock::Clock;
use crate::state::SessionHandle;

/// Destination for submitted reports
#[async_trait]
pub trait ReportSink: Send + Sync {
    async fn record(&self, report: &ContentReport) -> Result<()>;
}

pub struct ReportService {
    session: SessionHandle,
    sink: Arc<dyn ReportSink>,
    clock: Arc<dyn Clock>,
}

impl ReportService {
    pub fn new(session: SessionHandle, sink: Arc<dyn ReportSink>, clock: Arc<dyn Clock>) -> Self {
        Self { session, sink, clock }
    }

    /// Validate and record a report. `reason` is the wire name.
    pub async fn submit(
        &self,
        reason: &str,
        details: &str,
        content: Option<String>,
    ) -> Result<ContentReport> {
        let reason: ReportReason = reason.parse().map_err(RizzError::InvalidInput)?;
        let details = details.trim();
        if details.is_empty() {
            return Err(RizzError::InvalidInput("Please describe the problem".to_string()));
        }
        let profile = self.session.require_profile()?;

        let report = ContentReport {
            reason,
            details: details.to_string(),
            content,
            user_id: profile.id,
            reported_at: self.clock.now(),
        };
        self.sink.record(&report).await?;
        Ok(report)
    }
}
