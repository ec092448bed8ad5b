//! Integration tests for the evaluation HTTP client

use serde_json::{json, Value};
use stratboard::models::payload::SubmissionPayload;
use stratboard::models::strategy::StrategySpec;
use stratboard::services::{ApiError, EvaluationService, HttpEvaluationClient};
use wiremock::{MockServer, ResponseTemplate};

use crate::test_utils::{closed_url, evaluation_url, example_spec, mock_evaluation};

#[tokio::test]
async fn posts_payload_as_json() {
    let server = MockServer::start().await;
    mock_evaluation(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({"status": "queued"})),
        1,
    )
    .await;

    let client = HttpEvaluationClient::new(evaluation_url(&server));
    let payload = SubmissionPayload::from_spec(&example_spec());
    let response = client.evaluate(&payload).await.expect("submission succeeds");

    assert_eq!(response.status, 200);
    assert_eq!(response.json(), Some(json!({"status": "queued"})));

    let requests = server.received_requests().await.expect("wiremock requests");
    assert_eq!(requests.len(), 1);
    let body: Value = serde_json::from_slice(&requests[0].body).expect("JSON body");
    assert_eq!(
        body["entryLong"],
        json!({"comparator": ">", "left": "Moving Average", "right": "Last Price"})
    );
    assert_eq!(body["strategy"][0]["windowDays"], "20");
    assert_eq!(body["strategy"][1]["indicator"], "High");
    assert_eq!(
        body["expression"],
        "Enter Long when Moving Average > Last Price\nExit Long when Moving Average < Last Price\nStrategy Expression: Moving Average(20) + High(10)"
    );
}

#[tokio::test]
async fn non_json_success_body_is_kept_verbatim() {
    let server = MockServer::start().await;
    mock_evaluation(&server, ResponseTemplate::new(201).set_body_string("accepted"), 1).await;

    let client = HttpEvaluationClient::new(evaluation_url(&server));
    let response = client
        .evaluate(&SubmissionPayload::from_spec(&StrategySpec::new()))
        .await
        .expect("submission succeeds");

    assert_eq!(response.status, 201);
    assert_eq!(response.body, "accepted");
    assert_eq!(response.json(), None);
}

#[tokio::test]
async fn error_status_is_application_failure() {
    let server = MockServer::start().await;
    mock_evaluation(
        &server,
        ResponseTemplate::new(500).set_body_json(json!({"error": "unknown indicator"})),
        1,
    )
    .await;

    let client = HttpEvaluationClient::new(evaluation_url(&server));
    let err = client
        .evaluate(&SubmissionPayload::from_spec(&example_spec()))
        .await
        .unwrap_err();

    assert!(err.is_application());
    assert_eq!(err.status(), Some(500));
    match err {
        ApiError::Application { message, .. } => assert_eq!(message, "unknown indicator"),
        other => panic!("expected application error, got {:?}", other),
    }
}

#[tokio::test]
async fn empty_error_body_falls_back_to_reason() {
    let server = MockServer::start().await;
    mock_evaluation(&server, ResponseTemplate::new(404), 1).await;

    let client = HttpEvaluationClient::new(evaluation_url(&server));
    let err = client
        .evaluate(&SubmissionPayload::from_spec(&StrategySpec::new()))
        .await
        .unwrap_err();

    match err {
        ApiError::Application { status, message } => {
            assert_eq!(status, 404);
            assert_eq!(message, "Not Found");
        }
        other => panic!("expected application error, got {:?}", other),
    }
}

#[tokio::test]
async fn unreachable_service_is_transport_failure() {
    let client = HttpEvaluationClient::new(closed_url());
    let err = client
        .evaluate(&SubmissionPayload::from_spec(&StrategySpec::new()))
        .await
        .unwrap_err();

    assert!(err.is_transport());
    assert!(!err.is_application());
}
