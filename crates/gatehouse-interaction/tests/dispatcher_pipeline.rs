mod support;

use gatehouse_core::envelope::Envelope;
use gatehouse_core::transport::{GENERIC_FAILURE_MESSAGE, HttpMethod, TransportError};
use gatehouse_interaction::{GetOptions, RequestDispatcher};
use serde_json::json;
use std::sync::Arc;
use support::{ScriptedTransport, broker};

fn dispatcher(
    transport: ScriptedTransport,
) -> (
    RequestDispatcher,
    Arc<ScriptedTransport>,
    Arc<support::RecordingDisplay>,
) {
    let transport = Arc::new(transport);
    let (notifications, display) = broker();
    (
        RequestDispatcher::new(transport.clone(), notifications),
        transport,
        display,
    )
}

#[tokio::test]
async fn test_success_is_returned_unmodified_without_notification() {
    let body = json!({ "users": [{ "name": "Ada" }] });
    let (dispatcher, _, display) = dispatcher(ScriptedTransport::replying([Ok(body.clone())]));

    let envelope = dispatcher.get("/users", GetOptions::new()).await.unwrap();

    assert_eq!(envelope, Envelope::Success(body));
    assert!(display.toasts().is_empty());
}

#[tokio::test]
async fn test_application_error_raises_one_warning() {
    let (dispatcher, _, display) = dispatcher(ScriptedTransport::replying([Ok(
        json!({ "status": "error", "message": "M" }),
    )]));

    let envelope = dispatcher.get("/users", GetOptions::new()).await.unwrap();

    assert_eq!(envelope.error_message(), Some("M"));
    assert_eq!(display.warnings(), vec!["M"]);
}

#[tokio::test]
async fn test_allow_listed_error_is_silent() {
    let (dispatcher, _, display) = dispatcher(ScriptedTransport::replying([Ok(
        json!({ "status": "error", "message": "user already exists" }),
    )]));

    let envelope = dispatcher
        .get(
            "/users/check?email=a@b.c",
            GetOptions::new().allow_error("user already exists"),
        )
        .await
        .unwrap();

    assert!(envelope.is_error());
    assert!(display.toasts().is_empty());
}

#[tokio::test]
async fn test_error_not_on_allow_list_still_notifies() {
    let (dispatcher, _, display) = dispatcher(ScriptedTransport::replying([Ok(
        json!({ "status": "error", "message": "M" }),
    )]));

    dispatcher
        .get("/users", GetOptions::new().allow_error("something else"))
        .await
        .unwrap();

    assert_eq!(display.warnings(), vec!["M"]);
}

#[tokio::test]
async fn test_write_methods_check_envelopes_too() {
    let error = json!({ "status": "error", "message": "forbidden" });
    let (dispatcher, transport, display) = dispatcher(ScriptedTransport::replying([
        Ok(json!({ "id": 1 })),
        Ok(error.clone()),
        Ok(error),
    ]));

    dispatcher.post("/items", &json!({ "name": "x" })).await.unwrap();
    dispatcher.put("/items/1", &json!({ "name": "y" })).await.unwrap();
    dispatcher.delete("/items/1").await.unwrap();

    assert_eq!(display.warnings(), vec!["forbidden", "forbidden"]);

    let requests = transport.requests();
    let methods: Vec<HttpMethod> = requests.iter().map(|r| r.method).collect();
    assert_eq!(
        methods,
        vec![HttpMethod::Post, HttpMethod::Put, HttpMethod::Delete]
    );
    assert_eq!(requests[0].body, Some(json!({ "name": "x" })));
    assert_eq!(requests[2].body, None);
    assert_eq!(requests[1].path, "/items/1");
}

#[tokio::test]
async fn test_network_failure_is_generic_and_only_logged() {
    let (dispatcher, _, display) = dispatcher(ScriptedTransport::replying([Err(
        TransportError::Network("connection refused (os error 111)".to_string()),
    )]));

    let failure = dispatcher.get("/users", GetOptions::new()).await.unwrap_err();

    assert_eq!(failure.to_string(), GENERIC_FAILURE_MESSAGE);
    assert!(display.toasts().is_empty());
}

#[tokio::test]
async fn test_server_failure_notifies_stringified_body() {
    let (dispatcher, _, display) = dispatcher(ScriptedTransport::replying([
        Err(TransportError::Status {
            status: 500,
            body: json!({ "error": "db down" }),
        }),
        Err(TransportError::Status {
            status: 502,
            body: json!("Bad Gateway"),
        }),
    ]));

    let first = dispatcher.get("/a", GetOptions::new()).await.unwrap_err();
    let second = dispatcher.delete("/b").await.unwrap_err();

    assert_eq!(first.to_string(), GENERIC_FAILURE_MESSAGE);
    assert_eq!(second.to_string(), GENERIC_FAILURE_MESSAGE);
    assert_eq!(
        display.warnings(),
        vec![r#"{"error":"db down"}"#, r#""Bad Gateway""#]
    );
}

#[tokio::test]
async fn test_allow_list_does_not_apply_to_transport_failures() {
    let (dispatcher, _, display) = dispatcher(ScriptedTransport::replying([Err(
        TransportError::Malformed {
            status: 200,
            body: json!("<html>"),
        },
    )]));

    let result = dispatcher
        .get("/page", GetOptions::new().allow_error("<html>"))
        .await;

    assert!(result.is_err());
    assert_eq!(display.warnings(), vec![r#""<html>""#]);
}

#[tokio::test]
async fn test_unencodable_body_fails_before_sending() {
    use std::collections::HashMap;

    // JSON object keys must be strings.
    let mut body = HashMap::new();
    body.insert((1, 2), "pair");

    let (dispatcher, transport, display) = dispatcher(ScriptedTransport::default());
    let failure = dispatcher.post("/items", &body).await.unwrap_err();

    assert_eq!(failure.message(), GENERIC_FAILURE_MESSAGE);
    assert!(transport.requests().is_empty());
    assert!(display.toasts().is_empty());
}
