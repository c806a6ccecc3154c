//! Shared harness for `rizzmaster-app` integration tests.
//!
//! Builds real contexts over a temporary guest database and an in-process
//! session hub; only the model and the clock are scripted.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use parking_lot::Mutex;
use rizzmaster_app::{AppContext, AppDependencies};
use rizzmaster_core::{Clock, GenerationService};
use rizzmaster_domain::{
    BioDraft, Config, CreditsConfig, GenerationRequest, GenerationResult, ReplySuggestions,
    Result as DomainResult, RizzError, SessionState, StorageConfig,
};
use rizzmaster_infra::{
    Backend, FixedConfirmation, SessionHub, SimulatedAds, SimulatedPurchases, TracingReportSink,
};
use tempfile::TempDir;

pub const TOPIC: &str = "rizz_session_sync";

#[derive(Clone)]
pub struct PinnedClock(pub NaiveDate);

impl Clock for PinnedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }

    fn now(&self) -> DateTime<Utc> {
        Utc.from_utc_datetime(&self.0.and_hms_opt(9, 30, 0).unwrap())
    }
}

/// Model stand-in; queued `true` entries fail the next calls.
#[derive(Clone, Default)]
pub struct ScriptedModel {
    failures: Arc<Mutex<VecDeque<bool>>>,
    calls: Arc<Mutex<u32>>,
}

impl ScriptedModel {
    pub fn fail_next(&self) {
        self.failures.lock().push_back(true);
    }

    pub fn calls(&self) -> u32 {
        *self.calls.lock()
    }
}

#[async_trait]
impl GenerationService for ScriptedModel {
    async fn generate(&self, request: &GenerationRequest) -> DomainResult<GenerationResult> {
        *self.calls.lock() += 1;
        if self.failures.lock().pop_front().unwrap_or(false) {
            return Err(RizzError::Generation("503 from model".into()));
        }
        Ok(match request {
            GenerationRequest::Chat { .. } => GenerationResult::Chat(ReplySuggestions {
                tease: "You type like you're winning.".into(),
                smooth: "Coffee, Thursday?".into(),
                chaotic: "I've already named our goldfish.".into(),
                analysis: "Playful and open.".into(),
                love_score: 72,
                potential_status: "Spark Detected".into(),
            }),
            GenerationRequest::Bio { about } => GenerationResult::Bio(BioDraft {
                bio: format!("{about}, but make it cinematic."),
                analysis: "Specific details land.".into(),
            }),
        })
    }
}

pub fn test_config(dir: &TempDir) -> Config {
    Config {
        storage: StorageConfig {
            path: dir.path().join("guest.db").to_string_lossy().to_string(),
            pool_size: 2,
        },
        credits: CreditsConfig { free_tier_delay_ms: 0, purchase_delay_ms: 0, ..Default::default() },
        ..Config::default()
    }
}

/// One window: its context plus handles to the scripted parts.
pub struct Window {
    pub ctx: AppContext,
    pub model: ScriptedModel,
}

pub struct Harness {
    pub hub: SessionHub,
    pub config: Config,
    pub today: NaiveDate,
    _dir: TempDir,
}

impl Harness {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        Self {
            hub: SessionHub::new(8),
            config: test_config(&dir),
            today: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            _dir: dir,
        }
    }

    /// Open another window on the same topic and database.
    pub async fn open_window(&self, watch_ads: bool) -> Window {
        let model = ScriptedModel::default();
        let backend =
            Backend::local(&self.config.storage.path, self.config.storage.pool_size).unwrap();
        let deps = AppDependencies {
            backend,
            generator: Arc::new(model.clone()),
            ads: Arc::new(SimulatedAds::new(Arc::new(FixedConfirmation(watch_ads)))),
            purchases: Arc::new(SimulatedPurchases::new(Duration::ZERO)),
            reports: Arc::new(TracingReportSink),
            clock: Arc::new(PinnedClock(self.today)),
            channel: self.hub.join(TOPIC),
        };
        let ctx = AppContext::from_dependencies(self.config.clone(), deps).await.unwrap();
        Window { ctx, model }
    }
}

/// Wait until `ctx` reaches `state` or give up after a second.
pub async fn wait_for_state(ctx: &AppContext, state: SessionState) -> bool {
    let mut rx = ctx.monitor.subscribe();
    tokio::time::timeout(Duration::from_secs(1), rx.wait_for(|s| *s == state))
        .await
        .map(|r| r.is_ok())
        .unwrap_or(false)
}
