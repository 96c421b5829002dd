//! Tests for the HTTP transport against a real (mock) server
//!
//! Each test spins up a `tiny_http` server on an ephemeral port, handles a
//! fixed number of requests on a background thread, and asserts on both what
//! the server received and what the transport returned.

mod common;

use std::net::SocketAddr;
use std::sync::Arc;
use std::thread;

use common::runtime::setup_may_runtime;
use emotion_dispatch::config::ClientConfig;
use emotion_dispatch::dispatcher::{DispatchOutcome, Dispatcher, IgnoreReason};
use emotion_dispatch::transport::{HttpTransport, Transport};
use emotion_dispatch::ui::{DisplaySink, InMemoryField, InMemoryPanel};

/// Serve `count` requests, answering each with the given status and body.
/// Returns the server's address and a handle yielding the request lines seen.
fn mock_detector(
    status: u16,
    body: &'static str,
    count: usize,
) -> (SocketAddr, thread::JoinHandle<Vec<String>>) {
    let server = tiny_http::Server::http("127.0.0.1:0").unwrap();
    let addr = server
        .server_addr()
        .to_ip()
        .expect("tcp listener has an ip address");
    let handle = thread::spawn(move || {
        let mut seen = Vec::new();
        for _ in 0..count {
            let request = server.recv().unwrap();
            seen.push(format!("{} {}", request.method(), request.url()));
            let response = tiny_http::Response::from_string(body).with_status_code(status);
            request.respond(response).unwrap();
        }
        seen
    });
    (addr, handle)
}

fn config_for(addr: SocketAddr) -> ClientConfig {
    ClientConfig {
        endpoint: format!("http://{addr}"),
        ..ClientConfig::default()
    }
}

#[test]
fn test_fetch_returns_status_and_raw_body() {
    let (addr, server) = mock_detector(200, "joy", 1);
    let cfg = config_for(addr);
    let transport = HttpTransport::new(&cfg).unwrap();

    let reply = transport.fetch("emotionDetector?inputText=happy").unwrap();
    assert_eq!(reply.status, 200);
    assert_eq!(reply.body, "joy");
    assert!(reply.is_success());

    let seen = server.join().unwrap();
    assert_eq!(seen, vec!["GET /emotionDetector?inputText=happy".to_string()]);
}

#[test]
fn test_fetch_reports_non_success_status_without_error() {
    // A non-200 answer is a terminal state, not a transport failure; the
    // policy decision belongs to the dispatcher.
    let (addr, server) = mock_detector(500, "boom", 1);
    let cfg = config_for(addr);
    let transport = HttpTransport::new(&cfg).unwrap();

    let reply = transport.fetch("emotionDetector?inputText=x").unwrap();
    assert_eq!(reply.status, 500);
    assert_eq!(reply.body, "boom");
    assert!(!reply.is_success());
    server.join().unwrap();
}

#[test]
fn test_fetch_fails_when_nothing_listens() {
    // Bind then drop a listener to get a port that refuses connections.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let cfg = config_for(addr);
    let transport = HttpTransport::new(&cfg).unwrap();
    assert!(transport.fetch("emotionDetector?inputText=x").is_err());
}

#[test]
fn test_full_round_trip_through_dispatcher() {
    setup_may_runtime();
    let (addr, server) = mock_detector(
        200,
        "For the given statement, the dominant emotion is joy.",
        1,
    );
    let cfg = config_for(addr);

    let transport = Arc::new(HttpTransport::new(&cfg).unwrap());
    let display = Arc::new(InMemoryPanel::new());
    let dispatcher = Dispatcher::new(
        transport,
        Arc::clone(&display) as Arc<dyn DisplaySink>,
        cfg,
    );

    let field = InMemoryField::new("happy");
    let outcome = dispatcher.dispatch(&field).wait().unwrap();

    assert!(matches!(outcome, DispatchOutcome::Displayed { status: 200, .. }));
    assert_eq!(
        display.content(),
        "For the given statement, the dominant emotion is joy."
    );
    let seen = server.join().unwrap();
    assert_eq!(seen.len(), 1);
    assert!(seen[0].starts_with("GET /emotionDetector?inputText="));
}

#[test]
fn test_dispatcher_ignores_server_error() {
    setup_may_runtime();
    let (addr, server) = mock_detector(500, "internal", 1);
    let cfg = config_for(addr);

    let transport = Arc::new(HttpTransport::new(&cfg).unwrap());
    let display = Arc::new(InMemoryPanel::new());
    display.set_content("earlier".to_string());
    let dispatcher = Dispatcher::new(
        transport,
        Arc::clone(&display) as Arc<dyn DisplaySink>,
        cfg,
    );

    let field = InMemoryField::new("text");
    let outcome = dispatcher.dispatch(&field).wait().unwrap();

    assert_eq!(
        outcome,
        DispatchOutcome::Ignored {
            reason: IgnoreReason::NonSuccess { status: 500 }
        }
    );
    assert_eq!(display.content(), "earlier");
    server.join().unwrap();
}
