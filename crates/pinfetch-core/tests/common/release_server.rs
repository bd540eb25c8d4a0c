//! Minimal HTTP/1.1 server for integration tests.
//!
//! Serves a single static body for any GET path, with options to force an
//! error status or answer the first request with a redirect (GitHub release
//! downloads redirect to object storage).

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

#[derive(Debug, Clone, Copy)]
pub struct ReleaseServerOptions {
    /// Status line to answer GETs with (e.g. "404 Not Found"). None = 200.
    pub fail_status: Option<&'static str>,
    /// If true, the first GET is answered with a 302 to `/asset`.
    pub redirect_first: bool,
}

impl Default for ReleaseServerOptions {
    fn default() -> Self {
        Self {
            fail_status: None,
            redirect_first: false,
        }
    }
}

/// Starts a server in a background thread serving `body`. Returns the base URL
/// (e.g. "http://127.0.0.1:12345"). The server runs until the process exits.
pub fn start(body: Vec<u8>) -> String {
    start_with_options(body, ReleaseServerOptions::default())
}

/// Like `start` but allows forcing error statuses or a leading redirect.
pub fn start_with_options(body: Vec<u8>, opts: ReleaseServerOptions) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let body = Arc::new(body);
    let redirected = Arc::new(AtomicBool::new(false));
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let body = Arc::clone(&body);
            let redirected = Arc::clone(&redirected);
            thread::spawn(move || handle(stream, &body, opts, &redirected));
        }
    });
    format!("http://127.0.0.1:{}", port)
}

fn handle(
    mut stream: std::net::TcpStream,
    body: &[u8],
    opts: ReleaseServerOptions,
    redirected: &AtomicBool,
) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) => return,
        Ok(n) => n,
        Err(_) => return,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s,
        Err(_) => return,
    };
    let method = request.split_whitespace().next().unwrap_or("");
    if !method.eq_ignore_ascii_case("GET") {
        let _ = stream.write_all(b"HTTP/1.1 405 Method Not Allowed\r\n\r\n");
        return;
    }

    if let Some(status) = opts.fail_status {
        let response = format!("HTTP/1.1 {}\r\nContent-Length: 0\r\n\r\n", status);
        let _ = stream.write_all(response.as_bytes());
        return;
    }

    if opts.redirect_first && !redirected.swap(true, Ordering::SeqCst) {
        let _ = stream.write_all(
            b"HTTP/1.1 302 Found\r\nLocation: /asset\r\nContent-Length: 0\r\n\r\n",
        );
        return;
    }

    let response = format!("HTTP/1.1 200 OK\r\nContent-Length: {}\r\n\r\n", body.len());
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.write_all(body);
}
