//! Login, registration, logout and session persistence, end to end.

mod common;

use common::{DEADLINE, logged_in, logged_out, quiesce, runtime, started};
use tweetline_app::{App, REGISTERED, Screen, TimelineStatus};
use tweetline_client::{Endpoint, validate};
use tweetline_core::{MemoryStore, PushState, Severity, Theme};
use tweetline_harness::{SimDriver, SimServer};
use tweetline_proto::Token;

#[tokio::test]
async fn no_token_starts_on_login_screen() {
    let server = SimServer::new();
    let runtime = started(logged_out(&server)).await;

    assert_eq!(runtime.app().screen(), Screen::Login);
    assert!(server.requests().is_empty());
    assert_eq!(server.subscriber_count(), 1);
    assert_eq!(runtime.app().push_state(), PushState::Idle);
}

#[tokio::test]
async fn scripted_login_sends_bearer_on_every_later_request() {
    let server = SimServer::new().with_account("ana", "secret");
    server.seed_post("bo", "hi");
    let driver = SimDriver::new().type_line("/login ana secret").quit_when(|app: &App| {
        app.screen() == Screen::Timeline && app.timeline_status() == &TimelineStatus::Ready
    });

    let run = runtime(&server, driver, MemoryStore::new()).run();
    tokio::time::timeout(DEADLINE, run).await.unwrap().unwrap();

    let requests = server.requests();
    assert_eq!(requests[0].endpoint, Endpoint::Login);
    assert_eq!(requests[0].bearer, None);
    assert!(requests.len() > 1);
    for request in &requests[1..] {
        assert!(request.bearer.is_some(), "{:?} sent without token", request.endpoint);
    }
}

#[tokio::test]
async fn wrong_password_stores_nothing_and_shows_server_text() {
    let server = SimServer::new().with_account("ana", "secret");
    let mut runtime = started(logged_out(&server)).await;

    runtime.apply(|app| app.login("ana".into(), "nope".into())).unwrap();
    quiesce(&mut runtime).await;

    assert_eq!(runtime.session().token(), None);
    assert_eq!(runtime.app().screen(), Screen::Login);
    let status = runtime.app().status().unwrap();
    assert_eq!(status.severity, Severity::Inline);
    assert_eq!(status.message, "Incorrect username or password");
}

#[tokio::test]
async fn missing_credentials_send_nothing() {
    let server = SimServer::new();
    let mut runtime = started(logged_out(&server)).await;

    runtime.apply(|app| app.login("ana".into(), String::new())).unwrap();
    runtime
        .apply(|app| app.register("ana".into(), String::new(), "pw".into()))
        .unwrap();
    quiesce(&mut runtime).await;

    assert!(server.requests().is_empty());
    assert_eq!(
        runtime.app().status().map(|r| r.message.as_str()),
        Some(validate::MISSING_REGISTRATION_FIELDS)
    );
}

#[tokio::test]
async fn register_then_login_reaches_timeline() {
    let server = SimServer::new();
    let mut runtime = started(logged_out(&server)).await;

    runtime
        .apply(|app| app.register("cy".into(), "cy@example.com".into(), "pw".into()))
        .unwrap();
    quiesce(&mut runtime).await;
    assert_eq!(runtime.app().status().map(|r| r.message.as_str()), Some(REGISTERED));
    assert_eq!(runtime.app().screen(), Screen::Login);

    runtime.apply(|app| app.login("cy".into(), "pw".into())).unwrap();
    quiesce(&mut runtime).await;

    assert_eq!(runtime.app().screen(), Screen::Timeline);
    assert!(runtime.session().token().is_some());
    assert_eq!(runtime.app().push_state(), PushState::Open);
    assert_eq!(runtime.app().timeline_status(), &TimelineStatus::Ready);
}

#[tokio::test]
async fn duplicate_registration_shows_server_text() {
    let server = SimServer::new().with_account("ana", "secret");
    let mut runtime = started(logged_out(&server)).await;

    runtime
        .apply(|app| app.register("ana".into(), "a@example.com".into(), "pw".into()))
        .unwrap();
    quiesce(&mut runtime).await;

    assert_eq!(
        runtime.app().status().map(|r| r.message.as_str()),
        Some("Username already registered")
    );
}

#[tokio::test]
async fn logout_clears_session_and_closes_push() {
    let server = SimServer::new();
    server.seed_post("ana", "hi");
    let mut runtime = started(logged_in(&server, "ana")).await;
    runtime.apply(App::toggle_theme).unwrap();
    assert_eq!(runtime.session().theme(), Theme::Dark);

    runtime.apply(App::logout).unwrap();
    quiesce(&mut runtime).await;

    assert_eq!(runtime.app().screen(), Screen::Login);
    assert_eq!(runtime.session().token(), None);
    assert_eq!(runtime.session().theme(), Theme::Light);
    assert_eq!(runtime.app().theme(), Theme::Light);
    assert_eq!(runtime.app().push_state(), PushState::Closed);
    assert!(runtime.app().posts().is_empty());
}

#[tokio::test]
async fn late_listing_after_logout_is_dropped() {
    let server = SimServer::new();
    server.seed_post("ana", "hi");
    let mut runtime = started(logged_in(&server, "ana")).await;

    let release = server.hold_next_listing();
    runtime.apply(App::refresh).unwrap();
    runtime.apply(App::logout).unwrap();
    release.release();
    quiesce(&mut runtime).await;

    assert_eq!(runtime.app().screen(), Screen::Login);
    assert!(runtime.app().posts().is_empty());
}

#[tokio::test]
async fn theme_survives_a_restart() {
    let server = SimServer::new();
    let mut first = started(logged_out(&server)).await;
    first.apply(App::toggle_theme).unwrap();
    let store = first.session().store().clone();

    let second = started(runtime(&server, SimDriver::new(), store)).await;

    assert_eq!(second.app().theme(), Theme::Dark);
}

#[tokio::test]
async fn timeline_operations_wait_for_login() {
    let server = SimServer::new();
    server.seed_post("ana", "hi");
    let mut runtime = started(logged_out(&server)).await;

    runtime.apply(|app| app.create_post("hello".into())).unwrap();
    runtime.apply(App::refresh).unwrap();
    quiesce(&mut runtime).await;

    assert!(server.requests().is_empty());
}

#[tokio::test]
async fn stored_token_is_sent_verbatim() {
    let server = SimServer::new();
    let runtime = started(logged_in(&server, "ana")).await;

    let token = runtime.session().token().unwrap();
    assert!(server.requests().iter().all(|r| r.bearer.as_ref() == Some(&token)));
    assert_ne!(token, Token::new(""));
}
