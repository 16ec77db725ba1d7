#![allow(dead_code)]

use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};

/// Serve one connection with a canned raw HTTP response, then hang up.
///
/// Covers framing that a well-behaved server never produces, such as a body
/// shorter than its `Content-Length` or a body with no length at all.
pub struct OneShotServer {
    pub url: String,
    handle: JoinHandle<()>,
}

impl OneShotServer {
    pub fn start(head: &str, body: &[u8]) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        let mut response = head.as_bytes().to_vec();
        response.extend_from_slice(body);

        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();

            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf).unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }

            stream.write_all(&response).unwrap();
            stream.flush().unwrap();
        });

        OneShotServer {
            url: format!("http://{}/payload.bin", addr),
            handle,
        }
    }

    pub fn join(self) {
        self.handle.join().unwrap();
    }
}

/// A URL on which nothing is listening.
pub fn refused_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/gone", addr)
}

pub fn patterned_bytes(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i % 251) as u8).collect()
}
