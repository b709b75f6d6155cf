//! Gemini client against a local HTTP listener.
//!
//! Each test serves one canned response on a loopback port, so the real
//! status handling and body decoding in `GeminiClient` run end to end.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

use beeper_core::pager::driver;
use beeper_core::{
    GeminiClient, Pager, PagerStatus, RephraseResolution, RewriteCollaborator, RewriteConfig,
    RewriteError, Rewriter, SilentSink,
};

// ============================================================================
// Helpers
// ============================================================================

/// Read one HTTP request (headers plus Content-Length body) off the socket
async fn read_request(socket: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        let n = socket.read(&mut chunk).await.unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);

        let text = String::from_utf8_lossy(&buf);
        let Some(header_end) = text.find("\r\n\r\n") else {
            continue;
        };
        let body_len = text[..header_end]
            .lines()
            .find_map(|line| {
                let (name, value) = line.split_once(':')?;
                name.eq_ignore_ascii_case("content-length")
                    .then(|| value.trim().parse::<usize>().ok())
                    .flatten()
            })
            .unwrap_or(0);
        if buf.len() >= header_end + 4 + body_len {
            break;
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}

/// Serve a single canned response; returns the base URL and the captured request
async fn serve_once(
    status: &'static str,
    body: &'static str,
) -> (String, tokio::task::JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let request = read_request(&mut socket).await;
        let response = format!(
            "HTTP/1.1 {status}\r\n\
             Content-Type: application/json\r\n\
             Content-Length: {}\r\n\
             Connection: close\r\n\
             \r\n\
             {body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        let _ = socket.shutdown().await;
        request
    });

    (format!("http://{addr}"), handle)
}

fn client_for(endpoint: &str) -> GeminiClient {
    let config = RewriteConfig::default()
        .with_api_key(Some("test-key".to_string()))
        .with_endpoint(endpoint);
    GeminiClient::new(&config).unwrap()
}

// ============================================================================
// Client
// ============================================================================

#[tokio::test]
async fn valid_candidate_returns_trimmed_text() {
    let (url, server) = serve_once(
        "200 OK",
        r#"{"candidates":[{"content":{"parts":[{"text":"  07734 \n"}]}}]}"#,
    )
    .await;

    let text = client_for(&url).rewrite("hello").await.unwrap();
    assert_eq!(text, "07734");

    let request = server.await.unwrap();
    assert!(request.starts_with("POST /models/gemini-2.5-flash:generateContent"));
    assert!(request.to_ascii_lowercase().contains("x-goog-api-key: test-key"));
    assert!(request.contains("Input: \\\"hello\\\""));
}

#[tokio::test]
async fn non_success_status_is_api_error() {
    let (url, _server) = serve_once("429 Too Many Requests", "quota").await;

    let err = client_for(&url).rewrite("hello").await.unwrap_err();
    match err {
        RewriteError::Api { status, message } => {
            assert_eq!(status, 429);
            assert_eq!(message, "quota");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn undecodable_body_is_malformed() {
    let (url, _server) = serve_once("200 OK", "nope!").await;

    let err = client_for(&url).rewrite("hello").await.unwrap_err();
    assert!(matches!(err, RewriteError::Malformed(_)), "got {err:?}");
}

#[tokio::test]
async fn candidate_without_text_is_empty_response() {
    let (url, _server) = serve_once("200 OK", r#"{"candidates":[{"content":{"parts":[]}}]}"#).await;

    let err = client_for(&url).rewrite("hello").await.unwrap_err();
    assert!(matches!(err, RewriteError::EmptyResponse), "got {err:?}");
}

// ============================================================================
// Pager with a real client
// ============================================================================

#[tokio::test]
async fn unreachable_service_shows_error_then_recovers() {
    let mut pager = Pager::new();
    pager.edit("hello there");
    let cell = Arc::new(Mutex::new(pager));

    let config = RewriteConfig::default()
        .with_api_key(Some("test-key".to_string()))
        .with_endpoint("http://127.0.0.1:1");
    let rewriter = Rewriter::new(GeminiClient::new(&config).unwrap());

    let mut flow_cell = cell.clone();
    let flow = tokio::spawn(async move {
        driver::rephrase(&mut flow_cell, &rewriter, &SilentSink).await
    });

    // Wait for the connection failure to land
    let mut status = cell.lock().status();
    for _ in 0..100 {
        if status != PagerStatus::Processing {
            break;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
        status = cell.lock().status();
    }
    assert_eq!(status, PagerStatus::Error);
    assert_eq!(cell.lock().draft().as_str(), "hello there");

    let resolution = flow.await.unwrap().unwrap();
    assert!(matches!(resolution, RephraseResolution::Failed(_)));
    assert_eq!(cell.lock().status(), PagerStatus::Idle);
    assert_eq!(cell.lock().draft().as_str(), "hello there");
}
