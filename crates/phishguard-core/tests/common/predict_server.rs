//! Minimal HTTP/1.1 server standing in for the prediction API in integration tests.
//!
//! Answers `POST /predict` and `GET /health` with a fixed status and body, and
//! records each request body so tests can check what the client sent.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct CannedResponse {
    pub status: &'static str,
    pub body: String,
    pub location: Option<String>,
}

impl CannedResponse {
    pub fn ok(body: &str) -> Self {
        Self {
            status: "200 OK",
            body: body.to_string(),
            location: None,
        }
    }

    pub fn status(status: &'static str) -> Self {
        Self {
            status,
            body: r#"{"detail":"error"}"#.to_string(),
            location: None,
        }
    }

    /// `307 Temporary Redirect` to `location`.
    pub fn redirect(location: &str) -> Self {
        Self {
            status: "307 Temporary Redirect",
            body: String::new(),
            location: Some(location.to_string()),
        }
    }
}

/// A recorded request: method, path and body.
#[derive(Debug, Clone)]
pub struct SeenRequest {
    pub method: String,
    pub path: String,
    pub content_type: Option<String>,
    pub body: String,
}

pub struct PredictServer {
    pub base_url: String,
    pub seen: Arc<Mutex<Vec<SeenRequest>>>,
}

/// Starts a server in a background thread that answers every request with
/// `response`. The server runs until the process exits.
pub fn start(response: CannedResponse) -> PredictServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let seen_srv = Arc::clone(&seen);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let response = response.clone();
            let seen = Arc::clone(&seen_srv);
            thread::spawn(move || handle(stream, &response, &seen));
        }
    });
    PredictServer {
        base_url: format!("http://127.0.0.1:{}", port),
        seen,
    }
}

fn handle(mut stream: TcpStream, response: &CannedResponse, seen: &Mutex<Vec<SeenRequest>>) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));

    let request = match read_request(&mut stream) {
        Some(r) => r,
        None => return,
    };
    seen.lock().unwrap().push(request);

    let location = response
        .location
        .as_deref()
        .map(|l| format!("Location: {l}\r\n"))
        .unwrap_or_default();
    let reply = format!(
        "HTTP/1.1 {}\r\n{}Content-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        response.status,
        location,
        response.body.len(),
        response.body
    );
    let _ = stream.write_all(reply.as_bytes());
}

/// Reads headers, then exactly Content-Length body bytes.
fn read_request(stream: &mut TcpStream) -> Option<SeenRequest> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    let header_end = loop {
        let n = stream.read(&mut chunk).ok()?;
        if n == 0 {
            return None;
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = find(&buf, b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let head = std::str::from_utf8(&buf[..header_end]).ok()?.to_string();
    let mut lines = head.lines();
    let mut request_line = lines.next()?.split_whitespace();
    let method = request_line.next()?.to_string();
    let path = request_line.next()?.to_string();

    let mut content_length = 0usize;
    let mut content_type = None;
    for line in lines {
        if let Some((name, value)) = line.split_once(':') {
            let name = name.trim();
            if name.eq_ignore_ascii_case("content-length") {
                content_length = value.trim().parse().unwrap_or(0);
            } else if name.eq_ignore_ascii_case("content-type") {
                content_type = Some(value.trim().to_string());
            }
        }
    }

    while buf.len() < header_end + content_length {
        let n = stream.read(&mut chunk).ok()?;
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
    }
    let end = (header_end + content_length).min(buf.len());
    let body = String::from_utf8_lossy(&buf[header_end..end]).into_owned();

    Some(SeenRequest {
        method,
        path,
        content_type,
        body,
    })
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}
