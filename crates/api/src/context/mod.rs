//! Application context - dependency injection container
//!
//! One `AppContext` per window/tab. The storage backend is chosen once here
//! and never revisited; every service shares the same [`SessionHandle`].

use std::sync::Arc;
use std::time::Duration;

use once_cell::sync::OnceCell;
use parking_lot::Mutex;
use rizzmaster_core::{
    AccountService, BillingService, Clock, CreditLedger, GenerationService, GenerationWorkflow,
    PurchaseProvider, ReportService, ReportSink, RewardAdProvider, SavedItemsService,
    SessionChannel, SessionHandle, SessionMonitor, UserConfirmation,
};
use rizzmaster_domain::{Config, Result, SessionState};
use rizzmaster_infra::{
    config, init_logging, Backend, BackendKind, GeminiClient, SessionHub, SimulatedAds,
    SimulatedPurchases, SystemClock, TracingReportSink,
};
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::utils::health::{ComponentHealth, HealthStatus};

/// Type alias for generation port trait object
type DynGenerationPort = dyn GenerationService + Send + Sync + 'static;

/// Type alias for rewarded-ad port trait object
type DynRewardAdPort = dyn RewardAdProvider + Send + Sync + 'static;

/// Type alias for purchase port trait object
type DynPurchasePort = dyn PurchaseProvider + Send + Sync + 'static;

/// Type alias for report sink port trait object
type DynReportSinkPort = dyn ReportSink + Send + Sync + 'static;

/// Type alias for clock port trait object
type DynClockPort = dyn Clock;

/// Type alias for session channel port trait object
type DynSessionChannelPort = dyn SessionChannel + Send + Sync + 'static;

/// Session topics shared by every context in this process.
static SESSION_HUB: OnceCell<SessionHub> = OnceCell::new();

/// Collaborators an [`AppContext`] is assembled from.
pub struct AppDependencies {
    pub backend: Backend,
    pub generator: Arc<DynGenerationPort>,
    pub ads: Arc<DynRewardAdPort>,
    pub purchases: Arc<DynPurchasePort>,
    pub reports: Arc<DynReportSinkPort>,
    pub clock: Arc<DynClockPort>,
    pub channel: Arc<DynSessionChannelPort>,
}

impl AppDependencies {
    /// Production adapters for `config`: selected backend, Gemini, simulated
    /// billing, system clock and the process-wide session hub.
    pub fn from_config(config: &Config, confirmation: Arc<dyn UserConfirmation>) -> Result<Self> {
        let hub = SESSION_HUB.get_or_init(|| SessionHub::from_config(&config.session));
        Ok(Self {
            backend: Backend::select(config)?,
            generator: Arc::new(GeminiClient::from_config(&config.generation)?),
            ads: Arc::new(SimulatedAds::new(confirmation)),
            purchases: Arc::new(SimulatedPurchases::from_config(&config.credits)),
            reports: Arc::new(TracingReportSink),
            clock: Arc::new(SystemClock::new(config.credits.day_zone)),
            channel: hub.join(&config.session.topic),
        })
    }
}

/// Application context - holds all services and dependencies
pub struct AppContext {
    pub config: Config,
    pub session: SessionHandle,
    pub monitor: Arc<SessionMonitor>,
    pub account: AccountService,
    pub ledger: CreditLedger,
    pub generation: GenerationWorkflow,
    pub saved: SavedItemsService,
    pub billing: BillingService,
    pub reports: ReportService,
    backend: Backend,
    monitor_task: Mutex<Option<JoinHandle<()>>>,
}

impl AppContext {
    /// Load configuration from the environment and files, then build.
    pub async fn new(confirmation: Arc<dyn UserConfirmation>) -> Result<Self> {
        Self::new_with_config(config::load()?, confirmation).await
    }

    /// Install the log subscriber (first call only), then build with
    /// production adapters.
    pub async fn new_with_config(
        config: Config,
        confirmation: Arc<dyn UserConfirmation>,
    ) -> Result<Self> {
        init_logging(&config.logging);
        let deps = AppDependencies::from_config(&config, confirmation)?;
        Self::from_dependencies(config, deps).await
    }

    /// Wire services over `deps`, claim the session and start listening for
    /// other windows. Must run inside a tokio runtime.
    pub async fn from_dependencies(config: Config, deps: AppDependencies) -> Result<Self> {
        let session = SessionHandle::new();
        let backend = deps.backend;

        let ledger = CreditLedger::new(session.clone(), Arc::clone(&backend.profiles));

        let mut account = AccountService::new(
            session.clone(),
            Arc::clone(&backend.profiles),
            Arc::clone(&backend.saved),
            Arc::clone(&deps.clock),
        );
        if let Some(auth) = &backend.auth {
            account = account.with_auth(Arc::clone(auth));
        }

        let generation = GenerationWorkflow::new(session.clone(), ledger.clone(), deps.generator)
            .with_free_tier_delay(Duration::from_millis(config.credits.free_tier_delay_ms));
        let saved =
            SavedItemsService::new(session.clone(), Arc::clone(&backend.saved), Arc::clone(&deps.clock));
        let billing = BillingService::new(ledger.clone(), deps.ads, deps.purchases);
        let reports = ReportService::new(session.clone(), deps.reports, deps.clock);

        let monitor = Arc::new(SessionMonitor::new(deps.channel));
        monitor.start()?;
        let listener = Arc::clone(&monitor);
        let monitor_task = tokio::spawn(async move {
            if let Err(err) = listener.run().await {
                warn!(error = %err, "session.monitor_stopped");
            }
        });

        info!(backend = backend.kind.as_str(), "app.context_ready");

        Ok(Self {
            config,
            session,
            monitor,
            account,
            ledger,
            generation,
            saved,
            billing,
            reports,
            backend,
            monitor_task: Mutex::new(Some(monitor_task)),
        })
    }

    pub fn backend_kind(&self) -> BackendKind {
        self.backend.kind
    }

    /// Check the store and the session monitor.
    pub async fn health_check(&self) -> HealthStatus {
        let mut status = HealthStatus::new()
            .add_component(self.check_backend_health().await)
            .add_component(self.check_session_health());
        status.calculate_score();
        status
    }

    async fn check_backend_health(&self) -> ComponentHealth {
        let backend = self.backend.clone();
        match tokio::task::spawn_blocking(move || backend.health_check()).await {
            Ok(Ok(())) => ComponentHealth::healthy("backend"),
            Ok(Err(e)) => {
                warn!(error = %e, "health.backend_failed");
                ComponentHealth::unhealthy("backend", format!("check failed: {e}"))
            }
            Err(e) => ComponentHealth::unhealthy("backend", format!("task panic: {e}")),
        }
    }

    fn check_session_health(&self) -> ComponentHealth {
        let listening = self.monitor_task.lock().as_ref().is_some_and(|task| !task.is_finished());
        match (listening, self.monitor.state()) {
            (false, _) => ComponentHealth::unhealthy("session", "monitor is not running"),
            (true, SessionState::Blocked) => {
                ComponentHealth::unhealthy("session", "open in another window")
            }
            (true, SessionState::Active) => ComponentHealth::healthy("session"),
        }
    }

    /// Stop listening on the session topic. Idempotent.
    pub async fn shutdown(&self) -> Result<()> {
        if let Some(task) = self.monitor_task.lock().take() {
            task.abort();
            info!("app.shutdown");
        }
        Ok(())
    }
}

impl Drop for AppContext {
    fn drop(&mut self) {
        if let Some(task) = self.monitor_task.get_mut().take() {
            task.abort();
        }
    }
}
