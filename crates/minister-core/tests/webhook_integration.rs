//! Webhook delivery against a local mock Slack endpoint.

use chrono::NaiveDate;
use minister_core::storage::WEBHOOK_ENDPOINT_KEY;
use minister_core::{
    Action, DispatchOutcome, GoingHome, HttpConfig, LeaveDuration, MemoryStore, NotifyError,
    SlackWebhook, StateStore, Status, StatusDispatcher,
};
use mockito::Matcher;
use serde_json::json;

fn dispatcher_for(endpoint: &str) -> StatusDispatcher<MemoryStore, SlackWebhook> {
    let store = MemoryStore::with_values([(WEBHOOK_ENDPOINT_KEY, endpoint)]);
    let notifier = SlackWebhook::new(&HttpConfig::default()).unwrap();
    StatusDispatcher::new(store, notifier)
}

#[tokio::test]
async fn posts_text_payload_and_records_status() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/services/T/B/X")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({ "text": "🌙 おつかれさまでした！" })))
        .with_status(200)
        .with_body("ok")
        .create_async()
        .await;

    let dispatcher = dispatcher_for(&format!("{}/services/T/B/X", server.url()));
    dispatcher.store().set_status(Status::Online).unwrap();

    let now = NaiveDate::from_ymd_opt(2024, 6, 14)
        .unwrap()
        .and_hms_opt(18, 0, 0)
        .unwrap();
    let outcome = dispatcher
        .perform(
            Action::GoingHome {
                kind: GoingHome::Weekday,
            },
            now,
        )
        .await
        .unwrap();

    mock.assert_async().await;
    assert!(matches!(outcome, DispatchOutcome::Delivered(Status::Offline)));
    assert_eq!(dispatcher.store().current_status().unwrap(), Status::Offline);
}

#[tokio::test]
async fn leave_message_is_sent_verbatim() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/hook")
        .match_body(Matcher::Json(json!({ "text": "🕧 12:30 ごろまで 退室 します" })))
        .with_status(200)
        .create_async()
        .await;

    let dispatcher = dispatcher_for(&format!("{}/hook", server.url()));
    let now = NaiveDate::from_ymd_opt(2024, 6, 14)
        .unwrap()
        .and_hms_opt(10, 5, 0)
        .unwrap();

    let outcome = dispatcher
        .perform(
            Action::Leave {
                duration: LeaveDuration::TwoHours,
            },
            now,
        )
        .await
        .unwrap();

    mock.assert_async().await;
    assert!(outcome.is_delivered());
    assert_eq!(dispatcher.store().current_status().unwrap(), Status::Leave);
}

#[tokio::test]
async fn rejected_message_leaves_status_alone() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/hook")
        .with_status(403)
        .with_body("invalid_token")
        .expect(1)
        .create_async()
        .await;

    let dispatcher = dispatcher_for(&format!("{}/hook", server.url()));
    dispatcher.store().set_status(Status::Leave).unwrap();

    let outcome = dispatcher
        .change_status(Status::Online, "😎 Huddle に 入室 しました")
        .await
        .unwrap();

    mock.assert_async().await;
    match outcome {
        DispatchOutcome::NotDelivered(NotifyError::Rejected { status, body }) => {
            assert_eq!(status, 403);
            assert_eq!(body, "invalid_token");
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
    assert_eq!(dispatcher.store().current_status().unwrap(), Status::Leave);
}

#[tokio::test]
async fn unreachable_endpoint_leaves_status_alone() {
    // Port 9 (discard) on loopback is not expected to accept connections.
    let dispatcher = dispatcher_for("http://127.0.0.1:9/hook");

    let outcome = dispatcher
        .change_status(Status::Online, "hello")
        .await
        .unwrap();

    assert!(matches!(
        outcome,
        DispatchOutcome::NotDelivered(NotifyError::Http(_))
    ));
    assert_eq!(dispatcher.store().current_status().unwrap(), Status::Offline);
}

#[tokio::test]
async fn malformed_endpoint_is_not_delivered() {
    let dispatcher = dispatcher_for("not a url");

    let outcome = dispatcher.change_status(Status::Online, "hello").await.unwrap();

    assert!(matches!(
        outcome,
        DispatchOutcome::NotDelivered(NotifyError::InvalidEndpoint(_))
    ));
    assert_eq!(dispatcher.store().current_status().unwrap(), Status::Offline);
}
