//! Integration tests for `StatsClient` against a local canned HTTP server.

use std::net::SocketAddr;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use leetcard_shared::{FetchError, StatsClient};

/// Serve exactly one request with a canned response, then close.
async fn spawn_one_shot_server(status_line: &'static str, body: &'static str) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        if let Ok((mut stream, _)) = listener.accept().await {
            // Drain the request head; GET carries no body.
            let mut buf = [0u8; 2048];
            let _ = stream.read(&mut buf).await;

            let response = format!(
                "{status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = stream.write_all(response.as_bytes()).await;
        }
    });

    addr
}

#[tokio::test]
async fn success_response_parses_into_snapshot() {
    let addr = spawn_one_shot_server(
        "HTTP/1.1 200 OK",
        r#"{"totalSolved":120,"totalQuestions":2000,"easySolved":60,"totalEasy":575,"mediumSolved":50,"totalMedium":1217,"hardSolved":10,"totalHard":499,"ranking":12345}"#,
    )
    .await;

    let client = StatsClient::with_base_url(format!("http://{addr}"));
    let snapshot = client.fetch_stats().await.unwrap();

    assert_eq!(snapshot.solved(), 120);
    assert_eq!(snapshot.rank(), Some(12345));
}

#[tokio::test]
async fn sparse_response_is_not_an_error() {
    let addr = spawn_one_shot_server("HTTP/1.1 200 OK", r#"{"totalSolved":3}"#).await;

    let client = StatsClient::with_base_url(format!("http://{addr}"));
    let snapshot = client.fetch_stats().await.unwrap();

    assert_eq!(snapshot.solved(), 3);
    let [easy, _, _] = snapshot.breakdown();
    assert_eq!(easy.total, 575);
}

#[tokio::test]
async fn non_ok_status_maps_to_status_error() {
    let addr = spawn_one_shot_server("HTTP/1.1 500 Internal Server Error", "{}").await;

    let client = StatsClient::with_base_url(format!("http://{addr}"));
    let err = client.fetch_stats().await.unwrap_err();

    assert!(matches!(err, FetchError::Status(code) if code.as_u16() == 500));
}

#[tokio::test]
async fn undecodable_body_maps_to_transport_error() {
    let addr = spawn_one_shot_server("HTTP/1.1 200 OK", "not json at all").await;

    let client = StatsClient::with_base_url(format!("http://{addr}"));
    let err = client.fetch_stats().await.unwrap_err();

    assert!(matches!(err, FetchError::Transport(_)));
}

#[tokio::test]
async fn connection_refused_maps_to_transport_error() {
    // Bind then drop to get a port with nothing listening on it.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = StatsClient::with_base_url(format!("http://{addr}"));
    let err = client.fetch_stats().await.unwrap_err();

    assert!(matches!(err, FetchError::Transport(_)));
}
