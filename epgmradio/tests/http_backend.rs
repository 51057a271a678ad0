//! Integration tests for the HTTP streaming backend

use std::time::Duration;

use epgmradio::{AudioBackend, Error, HttpStreamBackend};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Serve an endless live stream: 200 headers, then a body chunk every 50ms
/// until the client disconnects.
async fn spawn_endless_stream_server() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        loop {
            let Ok((mut socket, _)) = listener.accept().await else {
                break;
            };
            tokio::spawn(async move {
                let mut request = [0u8; 1024];
                let _ = socket.read(&mut request).await;
                if socket
                    .write_all(
                        b"HTTP/1.1 200 OK\r\nContent-Type: audio/mpeg\r\nConnection: close\r\n\r\n",
                    )
                    .await
                    .is_err()
                {
                    return;
                }
                loop {
                    if socket.write_all(&[0u8; 64]).await.is_err() {
                        break;
                    }
                    let _ = socket.flush().await;
                    tokio::time::sleep(Duration::from_millis(50)).await;
                }
            });
        }
    });
    format!("http://{addr}/live")
}

#[tokio::test]
async fn test_open_checks_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/live"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![0u8; 4096]))
        .mount(&mock_server)
        .await;

    let backend = HttpStreamBackend::new().unwrap();
    let mut handle = backend
        .open(&format!("{}/live", mock_server.uri()))
        .await
        .unwrap();

    handle.play().await.unwrap();
    handle.stop().await.unwrap();
    handle.release().await.unwrap();
}

#[tokio::test]
async fn test_open_rejects_http_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/live"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let backend = HttpStreamBackend::new().unwrap();
    let err = backend
        .open(&format!("{}/live", mock_server.uri()))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::StreamOpen { .. }));
}

#[tokio::test]
async fn test_connect_timeout_does_not_cut_live_stream() {
    let url = spawn_endless_stream_server().await;

    let backend = HttpStreamBackend::new()
        .unwrap()
        .with_connect_timeout(Duration::from_millis(300));
    let mut handle = backend.open(&url).await.unwrap();
    handle.play().await.unwrap();

    // Stay connected well past the connect timeout, with the server still
    // sending. The transport must remain controllable.
    tokio::time::sleep(Duration::from_millis(1200)).await;

    handle.pause().await.unwrap();
    handle.resume().await.unwrap();
    handle.release().await.unwrap();
}

#[tokio::test]
async fn test_open_times_out_when_headers_never_arrive() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    // Accept connections, then stay silent.
    tokio::spawn(async move {
        let mut held = Vec::new();
        loop {
            let Ok((socket, _)) = listener.accept().await else {
                break;
            };
            held.push(socket);
        }
    });

    let backend = HttpStreamBackend::new()
        .unwrap()
        .with_connect_timeout(Duration::from_millis(200));
    let err = backend
        .open(&format!("http://{addr}/live"))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::StreamOpen { .. }));
}

#[tokio::test]
async fn test_open_rejects_unreachable_host() {
    // Nothing listens on this port.
    let backend = HttpStreamBackend::new().unwrap();
    let err = backend
        .open("http://127.0.0.1:9/live")
        .await
        .unwrap_err();

    assert!(matches!(err, Error::StreamOpen { .. }));
}
