//! Integration tests for the binary stream relay.

use std::net::SocketAddr;
use std::time::Duration;

use futures::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async};

use crate::helpers::{TestApp, test_config};

type Client = WebSocketStream<MaybeTlsStream<TcpStream>>;

async fn connect(addr: SocketAddr) -> Client {
    let (client, _) = connect_async(format!("ws://{addr}/ws/stream"))
        .await
        .expect("WebSocket handshake failed");
    client
}

/// Next data frame, skipping control frames.
async fn next_payload(client: &mut Client) -> Vec<u8> {
    loop {
        let frame = tokio::time::timeout(Duration::from_secs(5), client.next())
            .await
            .expect("timed out waiting for a frame")
            .expect("stream ended")
            .expect("read failed");
        match frame {
            Message::Binary(data) => return data.to_vec(),
            Message::Ping(_) | Message::Pong(_) => continue,
            other => panic!("unexpected frame {other:?}"),
        }
    }
}

async fn expect_close(client: &mut Client) {
    loop {
        let frame = tokio::time::timeout(Duration::from_secs(5), client.next())
            .await
            .expect("timed out waiting for close")
            .expect("stream ended without a Close frame")
            .expect("read failed");
        match frame {
            Message::Close(_) => return,
            Message::Ping(_) | Message::Pong(_) => continue,
            other => panic!("expected Close, got {other:?}"),
        }
    }
}

async fn assert_silent(client: &mut Client) {
    let frame = tokio::time::timeout(Duration::from_millis(200), client.next()).await;
    assert!(frame.is_err(), "expected no frame, got {frame:?}");
}

#[tokio::test]
async fn test_single_client_receives_echo() {
    let app = TestApp::new();
    let addr = app.spawn().await;

    let mut client = connect(addr).await;
    app.wait_for_connections(1).await;

    client
        .send(Message::binary(vec![0x00, 0x01, 0xff]))
        .await
        .expect("send failed");

    assert_eq!(next_payload(&mut client).await, vec![0x00, 0x01, 0xff]);
}

#[tokio::test]
async fn test_frame_relayed_to_every_peer() {
    let app = TestApp::new();
    let addr = app.spawn().await;

    let mut a = connect(addr).await;
    let mut b = connect(addr).await;
    app.wait_for_connections(2).await;

    a.send(Message::binary(b"chunk-1".to_vec()))
        .await
        .expect("send failed");

    assert_eq!(next_payload(&mut b).await, b"chunk-1".to_vec());
    assert_eq!(next_payload(&mut a).await, b"chunk-1".to_vec());
}

#[tokio::test]
async fn test_sender_skipped_when_echo_disabled() {
    let mut config = test_config();
    config.realtime.echo_to_sender = false;
    let app = TestApp::with_config(config);
    let addr = app.spawn().await;

    let mut a = connect(addr).await;
    let mut b = connect(addr).await;
    app.wait_for_connections(2).await;

    a.send(Message::binary(b"only-b".to_vec()))
        .await
        .expect("send failed");

    assert_eq!(next_payload(&mut b).await, b"only-b".to_vec());
    assert_silent(&mut a).await;
}

#[tokio::test]
async fn test_text_frame_relayed_as_binary() {
    let app = TestApp::new();
    let addr = app.spawn().await;

    let mut a = connect(addr).await;
    let mut b = connect(addr).await;
    app.wait_for_connections(2).await;

    a.send(Message::text("hello")).await.expect("send failed");

    assert_eq!(next_payload(&mut b).await, b"hello".to_vec());
}

#[tokio::test]
async fn test_frames_arrive_in_order() {
    let app = TestApp::new();
    let addr = app.spawn().await;

    let mut a = connect(addr).await;
    let mut b = connect(addr).await;
    app.wait_for_connections(2).await;

    for i in 0u8..10 {
        a.send(Message::binary(vec![i])).await.expect("send failed");
    }

    for i in 0u8..10 {
        assert_eq!(next_payload(&mut b).await, vec![i]);
    }
}

#[tokio::test]
async fn test_closed_client_leaves_registry() {
    let app = TestApp::new();
    let addr = app.spawn().await;

    let mut a = connect(addr).await;
    let mut b = connect(addr).await;
    app.wait_for_connections(2).await;

    a.close(None).await.expect("close failed");
    app.wait_for_connections(1).await;

    b.send(Message::binary(b"still-here".to_vec()))
        .await
        .expect("send failed");
    assert_eq!(next_payload(&mut b).await, b"still-here".to_vec());
}

#[tokio::test]
async fn test_dropped_client_leaves_registry() {
    let app = TestApp::new();
    let addr = app.spawn().await;

    let a = connect(addr).await;
    app.wait_for_connections(1).await;

    drop(a);
    app.wait_for_connections(0).await;
}

#[tokio::test]
async fn test_shutdown_closes_connections() {
    let app = TestApp::new();
    let addr = app.spawn().await;

    let mut a = connect(addr).await;
    let mut b = connect(addr).await;
    app.wait_for_connections(2).await;

    app.realtime.shutdown().await;
    app.wait_for_connections(0).await;

    expect_close(&mut a).await;
    expect_close(&mut b).await;
}

#[tokio::test]
async fn test_connection_removed_from_registry_is_closed() {
    let app = TestApp::new();
    let addr = app.spawn().await;

    let mut a = connect(addr).await;
    app.wait_for_connections(1).await;
    let mut b = connect(addr).await;
    app.wait_for_connections(2).await;

    // Same path a failed send takes: removed and marked closed.
    let a_id = app.realtime.registry.connection_ids().await[0];
    assert!(app.realtime.registry.disconnect(&a_id).await);

    expect_close(&mut a).await;

    // Anything it still manages to send is not relayed.
    let _ = a.send(Message::binary(b"late".to_vec())).await;
    assert_silent(&mut b).await;
    assert_eq!(app.realtime.registry.len().await, 1);
    assert!(!app.realtime.registry.contains(&a_id).await);
}
