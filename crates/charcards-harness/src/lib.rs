//! Loopback HTTP fixtures for charcards tests.
//!
//! [`serve_once`] answers exactly one request with a canned HTTP/1.1
//! response, so request code runs through the real transport without
//! touching the network. The status line is written verbatim, which lets
//! tests send reason phrases a well-behaved server never would.

#![allow(clippy::expect_used, reason = "Fixture failures should abort the test")]

use std::net::SocketAddr;

use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::TcpListener,
};

/// Path the fixture URLs point at.
pub const CHARACTER_PATH: &str = "/api/character";

/// Serve a single response and return the URL to request.
///
/// `status_line` is everything after `HTTP/1.1 `, e.g. `"404 Not Found"`.
///
/// # Panics
///
/// Panics if the listener cannot bind or the socket fails mid-exchange.
pub async fn serve_once(status_line: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind loopback listener");
    let addr = listener.local_addr().expect("listener address");

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("accept connection");

        // Drain the request head before answering
        let mut request = Vec::new();
        let mut chunk = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut chunk).await.expect("read request");
            if n == 0 {
                break;
            }
            request.extend_from_slice(&chunk[..n]);
        }

        let response = format!(
            "HTTP/1.1 {status_line}\r\n\
             Content-Type: application/json\r\n\
             Content-Length: {}\r\n\
             Connection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.expect("write response");
        socket.shutdown().await.expect("close socket");
    });

    character_url(addr)
}

/// URL of a port nothing listens on.
///
/// # Panics
///
/// Panics if no loopback port can be reserved.
pub async fn refused_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind loopback listener");
    let addr = listener.local_addr().expect("listener address");
    drop(listener);

    character_url(addr)
}

/// HTTP client that ignores any proxy configured in the environment.
///
/// # Panics
///
/// Panics if the client cannot be built.
pub fn loopback_http() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().expect("build loopback client")
}

fn character_url(addr: SocketAddr) -> String {
    format!("http://{addr}{CHARACTER_PATH}")
}
