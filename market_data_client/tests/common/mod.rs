#![allow(dead_code)]

use std::{
    io::{Read, Write},
    net::TcpListener,
    sync::Mutex,
    thread,
};

use async_trait::async_trait;
use market_data_client::{
    Client, ClientConfig,
    request::RequestParams,
    transport::{Transport, TransportError},
};
use reqwest::StatusCode;

pub const BASE_URL: &str = "https://av.test/query";

/// In-memory transport that records every request URL and answers with a
/// fixed reply.
pub struct RecordingTransport {
    reply: Reply,
    calls: Mutex<Vec<String>>,
}

enum Reply {
    Body(Vec<u8>),
    Status(StatusCode, String),
}

impl RecordingTransport {
    pub fn ok(body: impl Into<Vec<u8>>) -> Self {
        Self {
            reply: Reply::Body(body.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn status(status: StatusCode, body: &str) -> Self {
        Self {
            reply: Reply::Status(status, body.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn get(&self, base_url: &str, params: &RequestParams) -> Result<Vec<u8>, TransportError> {
        let url = params.to_url(base_url).expect("valid base url");
        self.calls.lock().unwrap().push(url.to_string());
        match &self.reply {
            Reply::Body(body) => Ok(body.clone()),
            Reply::Status(status, body) => Err(TransportError::Status {
                status: *status,
                body: body.clone(),
            }),
        }
    }
}

pub fn client(transport: RecordingTransport) -> Client<RecordingTransport> {
    Client::with_transport(ClientConfig::new("demo").with_base_url(BASE_URL), transport)
}

/// Answers exactly one HTTP request on a loopback port with `status` and
/// `body`.
///
/// Returns the base URL to query and a handle yielding the request line the
/// server received.
pub fn serve_once(status: &str, body: &str) -> (String, thread::JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback");
    let addr = listener.local_addr().expect("local addr");
    let response = format!(
        "HTTP/1.1 {status}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().expect("accept");
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|window| window == b"\r\n\r\n") {
            let read = stream.read(&mut buf).expect("read request");
            if read == 0 {
                break;
            }
            request.extend_from_slice(&buf[..read]);
        }
        stream.write_all(response.as_bytes()).expect("write response");
        String::from_utf8_lossy(&request)
            .lines()
            .next()
            .unwrap_or_default()
            .to_string()
    });

    (format!("http://{addr}/query"), handle)
}
