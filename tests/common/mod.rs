//! Shared fake-device helper for integration tests
//!
//! Binds a listener on an ephemeral port and plays a script: one
//! accepted connection per script entry, matching the protocol's
//! one-frame-per-connection shape.

#![allow(dead_code)]

use std::io::{Read, Write};
use std::net::{SocketAddr, TcpListener};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use pjlink::protocol::vocab::CommandCode;
use pjlink::protocol::{encode_response, Response};
use pjlink::Endpoint;

/// What the fake device does with one accepted connection
pub enum Script {
    /// Read the request, write these bytes, then wait for client EOF
    Reply(Vec<u8>),
    /// Read the request, then close without writing anything
    CloseSilently,
    /// Read the request, then sit on the connection this long before
    /// checking for client EOF
    Stall(Duration),
}

/// What the fake device observed, per connection
pub struct DeviceLog {
    /// Raw request bytes received
    pub requests: Vec<Vec<u8>>,
    /// Whether the client closed its end (device read returned EOF)
    pub client_closed: Vec<bool>,
}

/// Spawn a fake device serving the script; join the handle for the log
pub fn spawn_device(script: Vec<Script>) -> (SocketAddr, JoinHandle<DeviceLog>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind fake device");
    let addr = listener.local_addr().expect("local addr");

    let handle = thread::spawn(move || {
        let mut log = DeviceLog {
            requests: Vec::new(),
            client_closed: Vec::new(),
        };

        for step in script {
            let (mut stream, _) = listener.accept().expect("accept");
            stream
                .set_read_timeout(Some(Duration::from_secs(5)))
                .expect("set read timeout");

            let mut buf = [0u8; 512];
            let n = stream.read(&mut buf).expect("read request");
            log.requests.push(buf[..n].to_vec());

            match step {
                Script::Reply(reply) => {
                    stream.write_all(&reply).expect("write reply");
                    let closed = matches!(stream.read(&mut buf), Ok(0));
                    log.client_closed.push(closed);
                }
                Script::CloseSilently => {
                    // Dropping the stream closes without a reply.
                    log.client_closed.push(true);
                }
                Script::Stall(duration) => {
                    thread::sleep(duration);
                    let closed = matches!(stream.read(&mut buf), Ok(0));
                    log.client_closed.push(closed);
                }
            }
        }

        log
    });

    (addr, handle)
}

/// Build the wire bytes of one reply frame
pub fn reply(code: CommandCode, data: &str) -> Vec<u8> {
    encode_response(&Response {
        code,
        version: 1,
        data: data.to_string(),
    })
}

/// An endpoint dialing the fake device, with a test-friendly timeout
pub fn endpoint(addr: SocketAddr) -> Endpoint {
    Endpoint::builder(addr.ip().to_string())
        .port(addr.port())
        .timeout(Duration::from_secs(2))
        .build()
}
