//! The real `Client` against a local listener that replays canned HTTP responses, one per
//! connection: error statuses and malformed bodies are lookup errors, a valid body yields
//! its `paging.total`.

use jobcount_rs::api::{Client, CountLookup, LookupError};
use jobcount_rs::collector::collect;
use jobcount_rs::{Config, CountryEntry};
use reqwest::StatusCode;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};

fn response(status: &str, body: &str) -> String {
    format!(
        "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    )
}

/// Serve `responses` in order, one connection each. Returns the base URL and the request
/// lines that were received.
fn serve(responses: Vec<String>) -> (String, JoinHandle<Vec<String>>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base_url = format!("http://{}/v2", listener.local_addr().unwrap());
    let handle = thread::spawn(move || {
        let mut seen = Vec::new();
        for resp in responses {
            let (mut stream, _) = listener.accept().unwrap();
            let mut buf = Vec::new();
            let mut chunk = [0u8; 1024];
            while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut chunk).unwrap();
                if n == 0 {
                    break;
                }
                buf.extend_from_slice(&chunk[..n]);
            }
            let head = String::from_utf8_lossy(&buf);
            seen.push(head.lines().next().unwrap_or_default().to_string());
            stream.write_all(resp.as_bytes()).unwrap();
            stream.flush().unwrap();
        }
        seen
    });
    (base_url, handle)
}

#[test]
fn status_decode_and_success_paths() {
    let (base_url, server) = serve(vec![
        response("401 Unauthorized", r#"{"message":"Invalid access token"}"#),
        response("200 OK", "<html>not json</html>"),
        response("200 OK", r#"{"paging":{"start":0,"count":1,"total":77}}"#),
    ]);
    let client = Client::with_base_url(&Config::new("tok"), base_url).unwrap();

    match client.lookup("US") {
        Err(LookupError::Status(s)) => assert_eq!(s, StatusCode::UNAUTHORIZED),
        other => panic!("expected HTTP status error, got {other:?}"),
    }
    match client.lookup("DE") {
        Err(LookupError::Decode(_)) => {}
        other => panic!("expected decode error, got {other:?}"),
    }
    assert_eq!(client.lookup("FR").unwrap(), 77);

    let requests = server.join().unwrap();
    assert_eq!(requests.len(), 3);
    assert!(requests[0].starts_with("GET /v2/jobSearch?"));
    assert!(requests[0].contains("locationCode=US"));
    assert!(requests[2].contains("locationCode=FR"));
}

#[test]
fn missing_total_in_success_body_is_zero() {
    let (base_url, server) = serve(vec![response("200 OK", r#"{"elements":[]}"#)]);
    let client = Client::with_base_url(&Config::new("tok"), base_url).unwrap();
    assert_eq!(client.lookup("SG").unwrap(), 0);
    server.join().unwrap();
}

#[test]
fn http_failures_become_zero_counts_in_the_table() {
    let (base_url, server) = serve(vec![
        response("401 Unauthorized", "{}"),
        response("200 OK", "not json"),
        response("500 Internal Server Error", ""),
        response("200 OK", r#"{"paging":{"total":"1500"}}"#),
    ]);
    let client = Client::with_base_url(&Config::default(), base_url).unwrap();
    let entries = [
        CountryEntry::new("United States", "US"),
        CountryEntry::new("Germany", "DE"),
        CountryEntry::new("France", "FR"),
        CountryEntry::new("India", "IN"),
    ];

    let table = collect(&entries, &client);
    let counts: Vec<u64> = table.iter().map(|r| r.count).collect();
    assert_eq!(counts, vec![0, 0, 0, 1500]);
    assert_eq!(table.countries(), vec!["United States", "Germany", "France", "India"]);
    server.join().unwrap();
}
