use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use rishort_core::{FailureReason, RequestErrorKind, SubmissionResult};
use rishort_engine::{
    NullSignalSink, ReqwestTransport, ResilientSubmitter, ShortenResponse, SubmitSettings,
    TrackingSleeper, Transport,
};
use serde_json::json;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn posts_json_and_decodes_success() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/shorten"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({ "long_url": "https://example.com/very/long/url" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "short_url": "http://sho.rt/abc123",
            "long_url": "https://example.com/very/long/url",
            "expires_in": 86400,
        })))
        .expect(1)
        .mount(&server)
        .await;

    let transport = ReqwestTransport::new(SubmitSettings::new(server.uri()));
    let response = transport
        .shorten("https://example.com/very/long/url")
        .await
        .expect("shorten ok");

    assert_eq!(
        response,
        ShortenResponse {
            short_url: "http://sho.rt/abc123".to_string(),
            expires_in: Some(86_400),
        }
    );
}

#[tokio::test]
async fn missing_or_null_expiration_means_none() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/shorten"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "short_url": "http://sho.rt/x", "expires_in": null })),
        )
        .mount(&server)
        .await;

    let transport = ReqwestTransport::new(SubmitSettings::new(server.uri()));
    let response = transport.shorten("https://example.com").await.unwrap();
    assert_eq!(response.expires_in, None);
}

#[tokio::test]
async fn trailing_slash_in_base_is_tolerated() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/shorten"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "short_url": "s" })))
        .expect(1)
        .mount(&server)
        .await;

    let settings = SubmitSettings::new(format!("{}/", server.uri()));
    assert_eq!(settings.shorten_endpoint(), format!("{}/shorten", server.uri()));
    let transport = ReqwestTransport::new(settings);
    assert!(transport.shorten("https://example.com").await.is_ok());
}

#[tokio::test]
async fn non_success_status_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/shorten"))
        .respond_with(ResponseTemplate::new(422))
        .mount(&server)
        .await;

    let transport = ReqwestTransport::new(SubmitSettings::new(server.uri()));
    let err = transport.shorten("https://example.com").await.unwrap_err();
    assert_eq!(err.kind, RequestErrorKind::HttpStatus(422));
    assert!(err.kind.is_retryable());
}

#[tokio::test]
async fn slow_response_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/shorten"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_json(json!({ "short_url": "s" })),
        )
        .mount(&server)
        .await;

    let settings = SubmitSettings {
        request_timeout: Duration::from_millis(50),
        ..SubmitSettings::new(server.uri())
    };
    let transport = ReqwestTransport::new(settings);
    let err = transport.shorten("https://example.com").await.unwrap_err();
    assert_eq!(err.kind, RequestErrorKind::Timeout);
}

#[tokio::test]
async fn unreadable_success_body_is_not_retryable() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/shorten"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let transport = ReqwestTransport::new(SubmitSettings::new(server.uri()));
    let err = transport.shorten("https://example.com").await.unwrap_err();
    assert_eq!(err.kind, RequestErrorKind::InvalidResponse);
    assert!(!err.kind.is_retryable());
}

async fn shorten_with_expiration(expires_in: serde_json::Value) -> Option<u64> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/shorten"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "short_url": "http://sho.rt/x", "expires_in": expires_in })),
        )
        .mount(&server)
        .await;

    let transport = ReqwestTransport::new(SubmitSettings::new(server.uri()));
    transport
        .shorten("https://example.com")
        .await
        .expect("shorten ok")
        .expires_in
}

#[tokio::test]
async fn fractional_expiration_is_floored() {
    assert_eq!(shorten_with_expiration(json!(86400.0)).await, Some(86_400));
    assert_eq!(shorten_with_expiration(json!(7199.9)).await, Some(7_199));
}

#[tokio::test]
async fn negative_expiration_means_none() {
    assert_eq!(shorten_with_expiration(json!(-3600)).await, None);
    assert_eq!(shorten_with_expiration(json!(-0.5)).await, None);
}

/// Answers every connection with a 200 whose body is cut short of its
/// declared length. Returns the base URL and the number of connections seen.
async fn serve_truncated_success() -> (String, Arc<AtomicUsize>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let connections = Arc::new(AtomicUsize::new(0));
    let seen = connections.clone();
    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            seen.fetch_add(1, Ordering::SeqCst);
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            // The JSON request body is the last thing on the wire.
            while !request.ends_with(b"}") {
                match socket.read(&mut buf).await {
                    Ok(0) | Err(_) => break,
                    Ok(n) => request.extend_from_slice(&buf[..n]),
                }
            }
            let _ = socket
                .write_all(
                    b"HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: 100\r\n\r\n{\"short_url\":",
                )
                .await;
            let _ = socket.shutdown().await;
        }
    });
    (format!("http://{addr}"), connections)
}

#[tokio::test]
async fn truncated_success_body_is_not_retryable() {
    let (base, connections) = serve_truncated_success().await;

    let transport = ReqwestTransport::new(SubmitSettings::new(base));
    let err = transport.shorten("https://example.com").await.unwrap_err();
    assert_eq!(err.kind, RequestErrorKind::InvalidResponse);
    assert!(!err.kind.is_retryable());
    assert_eq!(connections.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn truncated_success_body_is_posted_once() {
    let (base, connections) = serve_truncated_success().await;
    let settings = SubmitSettings::new(base);
    let policy = settings.retry;
    let sleeper = TrackingSleeper::new();
    let submitter = ResilientSubmitter::new(
        Arc::new(ReqwestTransport::new(settings)),
        Arc::new(sleeper.clone()),
        policy,
    );

    let result = submitter
        .submit("https://example.com", &NullSignalSink)
        .await;

    match result {
        SubmissionResult::Failure {
            reason: FailureReason::RequestFailed { last_error },
        } => {
            assert_eq!(last_error.kind, RequestErrorKind::InvalidResponse);
        }
        other => panic!("expected RequestFailed, got {other:?}"),
    }
    assert_eq!(connections.load(Ordering::SeqCst), 1);
    assert!(sleeper.delays().is_empty());
}
