//! AppContext construction, health and shutdown

mod support;

use rizzmaster_app::commands;
use rizzmaster_domain::SessionState;
use rizzmaster_infra::BackendKind;
use support::{wait_for_state, Harness};

#[tokio::test(flavor = "multi_thread")]
async fn fresh_context_is_active_on_the_local_backend() {
    let harness = Harness::new();
    let window = harness.open_window(true).await;

    assert_eq!(window.ctx.backend_kind(), BackendKind::Local);
    assert_eq!(commands::session_state(&window.ctx), SessionState::Active);
    assert!(window.ctx.session.profile().is_none());
    assert!(!commands::accounts_enabled(&window.ctx));
}

#[tokio::test(flavor = "multi_thread")]
async fn health_check_reports_every_component() -> anyhow::Result<()> {
    let harness = Harness::new();
    let window = harness.open_window(true).await;

    let health = window.ctx.health_check().await;

    assert!(health.is_healthy, "unexpected health: {health:?}");
    let names: Vec<&str> = health.components.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["backend", "session"]);

    let json = serde_json::to_value(&health)?;
    assert_eq!(json["score"], 1.0);
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn blocked_window_is_unhealthy() {
    let harness = Harness::new();
    let first = harness.open_window(true).await;
    let _second = harness.open_window(true).await;

    assert!(wait_for_state(&first.ctx, SessionState::Blocked).await);
    let health = first.ctx.health_check().await;

    assert!(!health.is_healthy);
    assert_eq!(health.message.as_deref(), Some("unhealthy: session"));
}

#[tokio::test(flavor = "multi_thread")]
async fn shutdown_stops_the_session_listener() {
    let harness = Harness::new();
    let window = harness.open_window(true).await;

    window.ctx.shutdown().await.unwrap();
    window.ctx.shutdown().await.unwrap();

    let health = window.ctx.health_check().await;
    let session = health.components.iter().find(|c| c.name == "session").unwrap();
    assert!(!session.is_healthy);
    assert_eq!(session.message.as_deref(), Some("monitor is not running"));
}
