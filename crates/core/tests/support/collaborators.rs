//! Scripted collaborators: clock, generator, ads, billing, auth, reports and
//! an in-memory session topic.

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use parking_lot::Mutex;
use rizzmaster_core::{
    AuthGateway, AuthUser, Clock, GenerationService, PurchaseProvider, ReportSink,
    RewardAdProvider, SessionChannel, SessionHandle,
};
use rizzmaster_domain::{
    BioDraft, ContentReport, EndpointId, EntitlementStatus, GenerationRequest, GenerationResult,
    OAuthProvider, ReplySuggestions, Result as DomainResult, RewardOutcome, RizzError,
    SessionMessage,
};
use tokio::sync::mpsc;

/* ---------------------------------------------------------------------- */
/* Clock                                                                  */
/* ---------------------------------------------------------------------- */

#[derive(Clone)]
pub struct FixedClock {
    today: Arc<Mutex<NaiveDate>>,
}

impl FixedClock {
    pub fn new(today: NaiveDate) -> Self {
        Self { today: Arc::new(Mutex::new(today)) }
    }

    pub fn set_today(&self, today: NaiveDate) {
        *self.today.lock() = today;
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        *self.today.lock()
    }

    fn now(&self) -> DateTime<Utc> {
        let date = self.today();
        Utc.from_utc_datetime(&date.and_hms_opt(12, 0, 0).unwrap_or_default())
    }
}

/* ---------------------------------------------------------------------- */
/* Generation                                                             */
/* ---------------------------------------------------------------------- */

pub fn sample_replies() -> ReplySuggestions {
    ReplySuggestions {
        tease: "Bold of you to assume I cook.".into(),
        smooth: "Dinner's on me if you pick the place.".into(),
        chaotic: "I already told my mom about us.".into(),
        analysis: "She's testing you.".into(),
        love_score: 64,
        potential_status: "Spark Detected".into(),
    }
}

/// Generator that fails on demand and optionally observes the session's
/// balance at call time.
#[derive(Clone, Default)]
pub struct ScriptedGenerator {
    failures: Arc<Mutex<VecDeque<bool>>>,
    calls: Arc<Mutex<u32>>,
    observed_credits: Arc<Mutex<Vec<u32>>>,
    observe: Option<SessionHandle>,
}

impl ScriptedGenerator {
    pub fn succeeding() -> Self {
        Self::default()
    }

    pub fn failing_once() -> Self {
        let generator = Self::default();
        generator.failures.lock().push_back(true);
        generator
    }

    /// Record the session's credits whenever the model is called.
    pub fn observing(mut self, session: SessionHandle) -> Self {
        self.observe = Some(session);
        self
    }

    pub fn calls(&self) -> u32 {
        *self.calls.lock()
    }

    pub fn observed_credits(&self) -> Vec<u32> {
        self.observed_credits.lock().clone()
    }
}

#[async_trait]
impl GenerationService for ScriptedGenerator {
    async fn generate(&self, request: &GenerationRequest) -> DomainResult<GenerationResult> {
        *self.calls.lock() += 1;
        if let Some(session) = &self.observe {
            if let Some(profile) = session.profile() {
                self.observed_credits.lock().push(profile.credits);
            }
        }
        if self.failures.lock().pop_front().unwrap_or(false) {
            return Err(RizzError::Generation("model overloaded".into()));
        }
        Ok(match request {
            GenerationRequest::Chat { .. } => GenerationResult::Chat(sample_replies()),
            GenerationRequest::Bio { about } => GenerationResult::Bio(BioDraft {
                bio: format!("Certified {about}."),
                analysis: "Shows instead of tells.".into(),
            }),
        })
    }
}

/* ---------------------------------------------------------------------- */
/* Billing                                                                */
/* ---------------------------------------------------------------------- */

pub struct ScriptedAds(pub DomainResult<RewardOutcome>);

#[async_trait]
impl RewardAdProvider for ScriptedAds {
    async fn show_rewarded_ad(&self) -> DomainResult<RewardOutcome> {
        self.0.clone()
    }
}

pub struct ScriptedPurchases {
    pub purchase: EntitlementStatus,
    pub restore: EntitlementStatus,
}

#[async_trait]
impl PurchaseProvider for ScriptedPurchases {
    async fn purchase_premium(&self) -> DomainResult<EntitlementStatus> {
        Ok(self.purchase)
    }

    async fn restore_purchases(&self) -> DomainResult<EntitlementStatus> {
        Ok(self.restore)
    }
}

/* ---------------------------------------------------------------------- */
/* Auth                                                                   */
/* ---------------------------------------------------------------------- */

#[derive(Clone, Default)]
pub struct MockAuth {
    pub require_confirmation: bool,
    pub sign_outs: Arc<Mutex<u32>>,
}

impl MockAuth {
    pub fn sign_outs(&self) -> u32 {
        *self.sign_outs.lock()
    }
}

#[async_trait]
impl AuthGateway for MockAuth {
    async fn sign_in(&self, email: &str, password: &str) -> DomainResult<AuthUser> {
        if password != "hunter22" {
            return Err(RizzError::Auth("Invalid login credentials".into()));
        }
        Ok(AuthUser { id: format!("uid-{email}"), email: email.to_string() })
    }

    async fn sign_up(&self, email: &str, _password: &str) -> DomainResult<Option<AuthUser>> {
        if self.require_confirmation {
            return Ok(None);
        }
        Ok(Some(AuthUser { id: format!("uid-{email}"), email: email.to_string() }))
    }

    async fn sign_out(&self) -> DomainResult<()> {
        *self.sign_outs.lock() += 1;
        Ok(())
    }

    fn oauth_authorize_url(&self, provider: OAuthProvider, redirect_to: &str) -> DomainResult<String> {
        Ok(format!("https://auth.test/authorize?provider={provider}&redirect_to={redirect_to}"))
    }

    async fn complete_oauth(&self, access_token: &str) -> DomainResult<AuthUser> {
        match access_token {
            "google-jwt" => Ok(AuthUser { id: "uid-google".into(), email: "g@example.com".into() }),
            _ => Err(RizzError::Auth("invalid JWT".into())),
        }
    }
}

/* ---------------------------------------------------------------------- */
/* Reports                                                                */
/* ---------------------------------------------------------------------- */

#[derive(Clone, Default)]
pub struct RecordingSink {
    reports: Arc<Mutex<Vec<ContentReport>>>,
}

impl RecordingSink {
    pub fn reports(&self) -> Vec<ContentReport> {
        self.reports.lock().clone()
    }
}

#[async_trait]
impl ReportSink for RecordingSink {
    async fn record(&self, report: &ContentReport) -> DomainResult<()> {
        self.reports.lock().push(report.clone());
        Ok(())
    }
}

/* ---------------------------------------------------------------------- */
/* Session topic                                                          */
/* ---------------------------------------------------------------------- */

/// In-memory topic delivering to every endpoint except the sender.
#[derive(Clone, Default)]
pub struct LoopbackTopic {
    endpoints: Arc<Mutex<Vec<(EndpointId, mpsc::UnboundedSender<SessionMessage>)>>>,
    last_seq: Arc<Mutex<u64>>,
}

impl LoopbackTopic {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn endpoint(&self) -> Arc<LoopbackEndpoint> {
        let (tx, rx) = mpsc::unbounded_channel();
        let id = EndpointId::new();
        self.endpoints.lock().push((id, tx));
        Arc::new(LoopbackEndpoint {
            id,
            topic: self.clone(),
            rx: tokio::sync::Mutex::new(rx),
        })
    }
}

pub struct LoopbackEndpoint {
    id: EndpointId,
    topic: LoopbackTopic,
    rx: tokio::sync::Mutex<mpsc::UnboundedReceiver<SessionMessage>>,
}

#[async_trait]
impl SessionChannel for LoopbackEndpoint {
    fn endpoint_id(&self) -> EndpointId {
        self.id
    }

    fn announce(&self) -> DomainResult<u64> {
        let seq = {
            let mut last = self.topic.last_seq.lock();
            *last += 1;
            *last
        };
        let message = SessionMessage::SessionStarted { origin: self.id, seq };
        for (id, tx) in self.topic.endpoints.lock().iter() {
            if *id != self.id {
                let _ = tx.send(message);
            }
        }
        Ok(seq)
    }

    async fn recv(&self) -> DomainResult<Option<SessionMessage>> {
        Ok(self.rx.lock().await.recv().await)
    }

    fn try_recv(&self) -> DomainResult<Option<SessionMessage>> {
        match self.rx.try_lock() {
            Ok(mut rx) => Ok(rx.try_recv().ok()),
            Err(_) => Ok(None),
        }
    }
}
