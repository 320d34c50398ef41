//! Failure classification: timeouts reject as request errors, cancellations
//! reject as aborts, and the two never blur.

mod common;

use common::MockTransport;
use mimicnet::{AbortController, Client, Error, FetchOptions, RequestError};
use std::time::Duration;

#[tokio::test(start_paused = true)]
async fn handles_timeout_errors() {
    let mock = MockTransport::echo().delayed(Duration::from_secs(10));
    let client = Client::builder().transport(mock.clone()).build();

    let err = client
        .fetch(
            "http://localhost/delay/10",
            FetchOptions {
                browser: Some("chrome_142".into()),
                timeout: Some(Duration::from_secs(1)),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();

    assert!(err.is_timeout());
    assert!(matches!(
        err,
        Error::Request(RequestError::Timeout(d)) if d == Duration::from_secs(1)
    ));
}

#[tokio::test]
async fn rejects_already_aborted_requests_without_touching_the_transport() {
    let controller = AbortController::new();
    controller.abort();

    let mock = MockTransport::echo();
    let client = Client::builder().transport(mock.clone()).build();

    let err = client
        .fetch(
            "http://localhost/get",
            FetchOptions {
                browser: Some("chrome_142".into()),
                signal: Some(controller.signal()),
                timeout: Some(Duration::from_secs(1)),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();

    assert!(err.is_abort());
    assert_eq!(mock.calls(), 0, "transport was never invoked");
}

#[tokio::test(start_paused = true)]
async fn aborts_in_flight_requests() {
    let controller = AbortController::new();
    let mock = MockTransport::never();
    let client = Client::builder().transport(mock.clone()).build();

    tokio::spawn({
        let controller = controller.clone();
        async move {
            tokio::time::sleep(Duration::from_millis(50)).await;
            controller.abort();
        }
    });

    let err = client
        .fetch(
            "http://localhost/get",
            FetchOptions {
                browser: Some("chrome_142".into()),
                signal: Some(controller.signal()),
                timeout: Some(Duration::from_secs(30)),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();

    assert!(err.is_abort(), "abort is reported even mid-flight");
    assert_eq!(mock.calls(), 1, "the exchange had started");
}

#[tokio::test]
async fn abort_outranks_a_simultaneously_expired_timeout() {
    let controller = AbortController::new();
    controller.abort();

    let mock = MockTransport::never();
    let client = Client::builder().transport(mock.clone()).build();

    let err = client
        .fetch(
            "http://localhost/get",
            FetchOptions {
                signal: Some(controller.signal()),
                timeout: Some(Duration::ZERO),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();

    assert!(err.is_abort(), "abort outranks an expired timeout");
}

#[tokio::test]
async fn transport_failures_classify_as_request_errors() {
    let mock = MockTransport::refused();
    let client = Client::builder().transport(mock.clone()).build();

    let err = client
        .fetch("http://localhost/get", FetchOptions::default())
        .await
        .unwrap_err();

    assert!(err.is_transport());
    assert!(matches!(err, Error::Request(RequestError::Transport(_))));
    assert!(!err.is_abort());
}
