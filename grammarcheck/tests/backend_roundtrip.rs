//! Integration tests for the backend client and checker.
//!
//! Each test stands up an `httpmock` server playing the suggestion backend:
//! the mock only matches when the request carries the expected JSON fields,
//! and answers with a canned body, so no real backend is needed.

use httpmock::Method::POST;
use httpmock::MockServer;

use grammarcheck::{
    BackendClient, BackendError, CheckMode, CheckRequest, Checker, CheckerConfig, Segment,
};

fn config_for(server: &MockServer) -> CheckerConfig {
    let mut config = CheckerConfig::default();
    config.backend_url = server.base_url();
    config.api_key = Some("sk-test".to_string());
    config.timeout_ms = 5_000;
    config
}

#[test]
fn test_check_sends_request_and_decodes_suggestions() {
    let server = MockServer::start();
    let backend = server.mock(|when, then| {
        when.method(POST)
            .path("/check_grammar")
            .json_body_partial(
                r#"{"text":"The dog run fast","key":"sk-test","suggestionType":"spelling"}"#,
            );
        then.status(200)
            .header("content-type", "application/json")
            .body(
                r#"{"spelling_suggestions":[{"word_index":2,"word_correction":"runs","explanation":"subject-verb agreement"}],"grammar_suggestions":[]}"#,
            );
    });

    let config = config_for(&server);
    let client = BackendClient::from_config(&config).unwrap();
    let request = CheckRequest::from_config("The dog run fast", CheckMode::Spelling, &config);

    let response = client.check(&request).unwrap();
    assert_eq!(response.spelling_suggestions.len(), 1);
    assert_eq!(response.spelling_suggestions[0].word_correction, "runs");
    backend.assert();
}

#[test]
fn test_server_error_maps_to_status() {
    let server = MockServer::start();
    let backend = server.mock(|when, then| {
        when.method(POST).path("/check_grammar");
        then.status(500)
            .header("content-type", "application/json")
            .body(r#"{"message":"Failed to get suggestions from the server"}"#);
    });

    let config = config_for(&server);
    let client = BackendClient::from_config(&config).unwrap();
    let request = CheckRequest::from_config("text", CheckMode::Grammar, &config);

    match client.check(&request) {
        Err(BackendError::Status { status, message }) => {
            assert_eq!(status, 500);
            assert_eq!(message, "Failed to get suggestions from the server");
        }
        other => panic!("expected status error, got {:?}", other),
    }
    backend.assert();
}

#[test]
fn test_malformed_body_maps_to_decode() {
    let server = MockServer::start();
    let backend = server.mock(|when, then| {
        when.method(POST).path("/check_grammar");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"grammar_suggestions":[{"first_word_index":0}]}"#);
    });

    let config = config_for(&server);
    let client = BackendClient::from_config(&config).unwrap();
    let request = CheckRequest::from_config("text", CheckMode::Grammar, &config);

    assert!(matches!(client.check(&request), Err(BackendError::Decode(_))));
    backend.assert();
}

#[test]
fn test_checker_annotates_backend_answer() {
    let server = MockServer::start();
    let backend = server.mock(|when, then| {
        when.method(POST)
            .path("/check_grammar")
            .json_body_partial(
                r#"{"text":"I is happy today","provider":"OpenAI","suggestionType":"grammar"}"#,
            );
        then.status(200)
            .header("content-type", "application/json")
            .body(
                r#"{"spelling_suggestions":[],"grammar_suggestions":[{"first_word_index":0,"last_word_index":1,"improved_sentence":"I am","explanation":"verb agreement"}]}"#,
            );
    });
    let checker = Checker::new(config_for(&server)).unwrap();

    let segments = checker
        .check("I is happy today", CheckMode::Grammar)
        .unwrap()
        .unwrap();
    assert_eq!(
        segments,
        vec![
            Segment::highlighted("I is", "I am (verb agreement)"),
            Segment::plain("happy today"),
        ]
    );
    assert_eq!(checker.session().latest(), segments);
    backend.assert();
}
