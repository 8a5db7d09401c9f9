//! Shared helpers for integration tests: a tiny one-shot HTTP server and
//! temp-directory bookkeeping.

use std::collections::BTreeSet;
use std::io::{Read, Write};
use std::net::{SocketAddr, TcpListener};
use std::path::PathBuf;
use std::thread;

/// Serves exactly one HTTP response on an ephemeral local port.
///
/// The spawned thread answers the first connection with the given status
/// line and body, then exits.
pub fn serve_once(status_line: &'static str, body: Vec<u8>) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind test listener");
    let addr = listener.local_addr().expect("listener address");
    thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            // Drain the request head; a GET fits comfortably in one read.
            let mut buf = [0u8; 4096];
            let _ = stream.read(&mut buf);
            let header = format!(
                "HTTP/1.1 {status_line}\r\nContent-Type: application/octet-stream\r\n\
                 Content-Length: {}\r\nConnection: close\r\n\r\n",
                body.len()
            );
            let _ = stream.write_all(header.as_bytes());
            let _ = stream.write_all(&body);
            let _ = stream.flush();
        }
    });
    addr
}

/// Snapshot of temp-directory entries whose names match the given filter.
#[allow(dead_code)]
pub fn temp_dir_entries(filter: impl Fn(&str) -> bool) -> BTreeSet<PathBuf> {
    std::fs::read_dir(std::env::temp_dir())
        .map(|entries| {
            entries
                .flatten()
                .filter(|entry| {
                    entry
                        .file_name()
                        .to_str()
                        .is_some_and(|name| filter(name))
                })
                .map(|entry| entry.path())
                .collect()
        })
        .unwrap_or_default()
}
