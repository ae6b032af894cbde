use mosdac_chat::{
    ChatController, ChatError, ClientConfig, HttpTransport, RequestState, Sender, SubmitOutcome,
};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn controller_for(server: &MockServer) -> ChatController<HttpTransport> {
    let config = ClientConfig::new(format!("{}/chat", server.uri())).unwrap();
    ChatController::new(config, HttpTransport::new())
}

fn pairs(ctl: &ChatController<HttpTransport>) -> Vec<(Sender, String)> {
    ctl.transcript().iter().map(|m| (m.sender, m.text.clone())).collect()
}

#[tokio::test]
async fn test_success_round_trip() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({ "message": "What is MOSDAC?" })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "answer": "MOSDAC is a satellite data portal." })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let mut ctl = controller_for(&server);
    ctl.set_draft("What is MOSDAC?");
    let outcome = ctl.submit().await;

    assert!(matches!(outcome, SubmitOutcome::Answered(_)));
    assert_eq!(
        pairs(&ctl),
        vec![
            (Sender::User, "What is MOSDAC?".to_string()),
            (Sender::Bot, "MOSDAC is a satellite data portal.".to_string()),
        ]
    );
    assert_eq!(ctl.draft(), "");
    assert_eq!(ctl.state(), RequestState::Idle);
}

#[tokio::test]
async fn test_http_500_is_normalized() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let mut ctl = controller_for(&server);
    ctl.set_draft("What is MOSDAC?");
    let outcome = ctl.submit().await;

    match outcome {
        SubmitOutcome::Failed { error, .. } => assert_eq!(error, ChatError::Status { status: 500 }),
        other => panic!("expected failure, got {other:?}"),
    }
    let transcript = pairs(&ctl);
    assert_eq!(transcript.len(), 2);
    assert_eq!(transcript[0], (Sender::User, "What is MOSDAC?".to_string()));
    assert_eq!(transcript[1].0, Sender::Bot);
    assert!(transcript[1].1.starts_with("Error: Could not connect to AI."));
    assert!(transcript[1].1.contains("500"));
    assert_eq!(ctl.draft(), "");
    assert_eq!(ctl.state(), RequestState::Idle);
}

#[tokio::test]
async fn test_missing_answer_renders_explicit_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "ok" })))
        .mount(&server)
        .await;

    let mut ctl = controller_for(&server);
    ctl.set_draft("hello");
    let outcome = ctl.submit().await;

    assert!(matches!(outcome, SubmitOutcome::Failed { error: ChatError::MissingAnswer, .. }));
    let last = ctl.transcript().last().unwrap();
    assert_eq!(last.sender, Sender::Bot);
    assert!(last.text.contains("did not contain an answer"));
}

#[tokio::test]
async fn test_malformed_body_is_a_decode_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let mut ctl = controller_for(&server);
    ctl.set_draft("hello");
    let outcome = ctl.submit().await;

    assert!(matches!(outcome, SubmitOutcome::Failed { error: ChatError::Decode(_), .. }));
    assert_eq!(ctl.state(), RequestState::Idle);
}

#[tokio::test]
async fn test_unreachable_endpoint_is_a_transport_failure() {
    // Bind and drop a listener so the port is known to be closed.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    let config = ClientConfig::new(format!("http://127.0.0.1:{port}/chat")).unwrap();

    let mut ctl = ChatController::new(config, HttpTransport::new());
    ctl.set_draft("anyone there?");
    let outcome = ctl.submit().await;

    match outcome {
        SubmitOutcome::Failed { error, message } => {
            assert!(error.is_transport());
            assert!(message.text.starts_with("Error: Could not connect to AI. "));
        }
        other => panic!("expected transport failure, got {other:?}"),
    }
    assert_eq!(ctl.state(), RequestState::Idle);

    // The session stays usable after a failure.
    ctl.set_draft("again");
    assert!(ctl.begin_submit().is_some());
}

#[tokio::test]
async fn test_whitespace_submission_is_ignored() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "answer": "x" })))
        .expect(0)
        .mount(&server)
        .await;

    let mut ctl = controller_for(&server);
    ctl.set_draft("   ");

    assert_eq!(ctl.submit().await, SubmitOutcome::Rejected);
    assert!(ctl.transcript().is_empty());
    assert_eq!(ctl.state(), RequestState::Idle);
}

#[tokio::test]
async fn test_many_submissions_stay_ordered() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_json(json!({ "message": "bad" })))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "answer": "ok" })))
        .mount(&server)
        .await;

    let mut ctl = controller_for(&server);
    let inputs = ["first", "bad", "third", "fourth"];
    for text in inputs {
        ctl.set_draft(text);
        ctl.submit().await;
    }

    let transcript = pairs(&ctl);
    assert_eq!(transcript.len(), inputs.len() * 2);
    for (i, text) in inputs.iter().enumerate() {
        assert_eq!(transcript[2 * i], (Sender::User, text.to_string()));
        assert_eq!(transcript[2 * i + 1].0, Sender::Bot);
    }
    assert!(transcript[3].1.contains("502"));
    assert_eq!(transcript[7].1, "ok");
}

#[tokio::test]
async fn test_reset_clears_transcript_only() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "answer": "hi" })))
        .mount(&server)
        .await;

    let mut ctl = controller_for(&server);
    ctl.set_draft("hello");
    ctl.submit().await;
    assert_eq!(ctl.transcript().len(), 2);

    for _ in 0..3 {
        ctl.reset();
        assert!(ctl.transcript().is_empty());
        assert_eq!(ctl.state(), RequestState::Idle);
    }

    ctl.set_draft("again");
    ctl.submit().await;
    assert_eq!(ctl.transcript().len(), 2);
}
