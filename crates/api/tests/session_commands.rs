//! One active window per topic

mod support;

use rizzmaster_app::commands;
use rizzmaster_domain::{RizzError, SessionState};
use support::{wait_for_state, Harness};

#[tokio::test(flavor = "multi_thread")]
async fn opening_a_second_window_blocks_the_first() {
    let harness = Harness::new();
    let first = harness.open_window(true).await;
    commands::login_guest(&first.ctx).await.unwrap();

    let second = harness.open_window(true).await;

    assert!(wait_for_state(&first.ctx, SessionState::Blocked).await);
    assert_eq!(commands::session_state(&second.ctx), SessionState::Active);
}

#[tokio::test(flavor = "multi_thread")]
async fn blocked_window_refuses_commands() {
    let harness = Harness::new();
    let first = harness.open_window(true).await;
    commands::login_guest(&first.ctx).await.unwrap();
    let _second = harness.open_window(true).await;
    assert!(wait_for_state(&first.ctx, SessionState::Blocked).await);

    let err = commands::generate_bio(&first.ctx, "painter".into()).await.unwrap_err();
    assert!(matches!(err, RizzError::SessionBlocked(_)));
    assert!(matches!(commands::watch_ad(&first.ctx).await, Err(RizzError::SessionBlocked(_))));
    assert!(matches!(commands::list_saved(&first.ctx).await, Err(RizzError::SessionBlocked(_))));

    assert_eq!(first.model.calls(), 0);
    assert_eq!(first.ctx.session.profile().unwrap().credits, 5);
}

#[tokio::test(flavor = "multi_thread")]
async fn reclaiming_flips_which_window_is_blocked() {
    let harness = Harness::new();
    let first = harness.open_window(true).await;
    let second = harness.open_window(true).await;
    assert!(wait_for_state(&first.ctx, SessionState::Blocked).await);

    assert_eq!(commands::reclaim_session(&first.ctx).unwrap(), SessionState::Active);

    assert!(wait_for_state(&second.ctx, SessionState::Blocked).await);
    assert_eq!(commands::session_state(&first.ctx), SessionState::Active);
    commands::login_guest(&first.ctx).await.unwrap();
}

#[tokio::test(flavor = "multi_thread")]
async fn watchers_see_the_block() {
    let harness = Harness::new();
    let first = harness.open_window(true).await;
    let mut states = commands::watch_session(&first.ctx);
    assert_eq!(*states.borrow(), SessionState::Active);

    let _second = harness.open_window(true).await;

    tokio::time::timeout(std::time::Duration::from_secs(1), states.changed())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(*states.borrow(), SessionState::Blocked);
}

#[tokio::test(flavor = "multi_thread")]
async fn reclaim_right_after_another_window_opens_leaves_one_owner() {
    let harness = Harness::new();
    let first = harness.open_window(true).await;
    let second = harness.open_window(true).await;
    let third = harness.open_window(true).await;

    commands::reclaim_session(&first.ctx).unwrap();

    assert!(wait_for_state(&second.ctx, SessionState::Blocked).await);
    assert!(wait_for_state(&third.ctx, SessionState::Blocked).await);
    tokio::time::sleep(std::time::Duration::from_millis(50)).await;
    assert_eq!(commands::session_state(&first.ctx), SessionState::Active);
}
