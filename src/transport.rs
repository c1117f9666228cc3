//! Transport
//!
//! One connect-write-read-close cycle per command. The protocol keeps
//! no session state on the wire, so there is no pooling and no
//! keep-alive; most projectors reject overlapping sessions, and a fresh
//! connection per command is the behavior they expect.

use std::io::{ErrorKind, Read, Write};
use std::net::{Shutdown, TcpStream, ToSocketAddrs};

use crate::config::Endpoint;
use crate::error::{PjlinkError, Result};

/// Upper bound on one reply read; ample for this protocol's short lines
pub const MAX_REPLY_LEN: usize = 512;

/// Send one encoded frame to the endpoint and return the raw reply line
///
/// Opens a new TCP connection, applies the endpoint's timeout to
/// connect, read, and write, writes the frame in full, reads at most
/// one bounded reply, and closes the socket on every exit path (the
/// stream is scoped to this call, so the descriptor is released even
/// when an I/O step fails).
///
/// A peer that closes without sending anything yields
/// [`PjlinkError::EmptyReply`]; everything else I/O-shaped surfaces as
/// [`PjlinkError::Transport`]. No retries at this layer.
pub fn round_trip(endpoint: &Endpoint, frame: &[u8]) -> Result<Vec<u8>> {
    let addr = endpoint.addr();
    let socket_addr = addr
        .to_socket_addrs()?
        .next()
        .ok_or_else(|| {
            PjlinkError::Transport(std::io::Error::new(
                ErrorKind::AddrNotAvailable,
                format!("no address resolved for {addr}"),
            ))
        })?;

    tracing::debug!("connecting to {}", addr);
    let mut stream = TcpStream::connect_timeout(&socket_addr, endpoint.timeout)?;
    stream.set_read_timeout(Some(endpoint.timeout))?;
    stream.set_write_timeout(Some(endpoint.timeout))?;

    stream.write_all(frame)?;
    tracing::trace!("sent {} bytes to {}", frame.len(), addr);

    // One bounded read; replies are single short lines.
    let mut buf = [0u8; MAX_REPLY_LEN];
    let n = stream.read(&mut buf)?;

    // Orderly close; drop still releases the descriptor if this fails.
    let _ = stream.shutdown(Shutdown::Both);

    if n == 0 {
        tracing::debug!("{} closed without replying", addr);
        return Err(PjlinkError::EmptyReply);
    }

    tracing::trace!("received {} bytes from {}", n, addr);
    Ok(buf[..n].to_vec())
}
