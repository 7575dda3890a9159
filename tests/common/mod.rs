//! Loopback HTTP responder shared by the fetch and CLI tests (no external network).
#![allow(dead_code)]

use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};

pub const GDP_BODY: &str = r#"[{"page":1,"pages":1,"per_page":60,"total":3},
  [{"date":"2021","value":300.0},{"date":"2020","value":null},{"date":"2019","value":100.0}]]"#;
pub const INF_BODY: &str = r#"[{"page":1,"pages":1,"per_page":"60","total":2},
  [{"date":"2021","value":7.25},{"date":"2020","value":5.0}]]"#;

/// Serve the given (status, body) responses, one per connection, in order.
/// Returns the base URL and a handle yielding the request lines seen.
pub fn serve(responses: Vec<(u16, &'static str)>) -> (String, JoinHandle<Vec<String>>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = thread::spawn(move || {
        let mut seen = Vec::new();
        for (status, body) in responses {
            let (mut stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream.try_clone().unwrap());
            let mut request_line = String::new();
            reader.read_line(&mut request_line).unwrap();
            seen.push(request_line.trim_end().to_string());
            loop {
                let mut line = String::new();
                if reader.read_line(&mut line).unwrap() == 0 || line == "\r\n" {
                    break;
                }
            }
            let reason = if status == 200 { "OK" } else { "Error" };
            write!(
                stream,
                "HTTP/1.1 {status} {reason}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            )
            .unwrap();
            stream.flush().unwrap();
        }
        seen
    });
    (format!("http://{}/v2", addr), handle)
}

/// A loopback port with nothing listening on it.
pub fn closed_port() -> u16 {
    TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port()
}
