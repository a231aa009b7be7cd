//! Blocking TCP message transport.
//!
//! Messages are framed with a u32 big-endian length prefix. The grid is
//! tiny and every exchange is a handful of bytes, so the socket runs with
//! Nagle disabled; the lockstep protocol would otherwise stall on every
//! send/receive turnaround.

use std::io::{self, Read, Write};
use std::net::{TcpListener, TcpStream};

use log::info;

use super::{MessageReceiver, MessageSender, TransportError, MAX_MESSAGE_LEN};

/// One established connection, usable as both sender and receiver.
pub struct TcpConnection {
    stream: TcpStream,
}

impl TcpConnection {
    /// Dial a listening host. `host` may be a name or an address.
    pub fn connect(host: &str, port: u16) -> Result<Self, TransportError> {
        let stream = TcpStream::connect((host, port))?;
        Self::from_stream(stream)
    }

    fn from_stream(stream: TcpStream) -> Result<Self, TransportError> {
        stream.set_nodelay(true)?;
        Ok(Self { stream })
    }
}

impl MessageSender for TcpConnection {
    fn send(&mut self, message: &[u8]) -> Result<(), TransportError> {
        if message.len() > MAX_MESSAGE_LEN {
            return Err(TransportError::OversizedMessage {
                len: message.len(),
            });
        }
        let prefix = (message.len() as u32).to_be_bytes();
        self.stream.write_all(&prefix).map_err(map_closed)?;
        self.stream.write_all(message).map_err(map_closed)?;
        Ok(())
    }
}

impl MessageReceiver for TcpConnection {
    fn receive(&mut self) -> Result<Vec<u8>, TransportError> {
        let mut prefix = [0u8; 4];
        self.stream.read_exact(&mut prefix).map_err(map_closed)?;
        let len = u32::from_be_bytes(prefix) as usize;
        if len > MAX_MESSAGE_LEN {
            return Err(TransportError::OversizedMessage { len });
        }
        let mut message = vec![0u8; len];
        self.stream.read_exact(&mut message).map_err(map_closed)?;
        Ok(message)
    }
}

/// Listening half of connection establishment. Binds an ephemeral local
/// port; the assigned port is read back for the user to hand to the
/// peer.
pub struct Listener {
    inner: TcpListener,
    port: u16,
}

impl Listener {
    /// Bind an ephemeral port on all interfaces.
    pub fn bind() -> Result<Self, TransportError> {
        let inner = TcpListener::bind(("0.0.0.0", 0))?;
        let port = inner.local_addr()?.port();
        info!("listening on port {port}");
        Ok(Self { inner, port })
    }

    /// The OS-assigned port.
    pub fn local_port(&self) -> u16 {
        self.port
    }

    /// Block until one peer dials in.
    pub fn accept(&self) -> Result<TcpConnection, TransportError> {
        let (stream, remote) = self.inner.accept()?;
        info!("accepted peer connection from {remote}");
        TcpConnection::from_stream(stream)
    }
}

/// Distinguish "the other side went away" from every other I/O failure;
/// the session layer treats the former as its own fatal case.
fn map_closed(err: io::Error) -> TransportError {
    match err.kind() {
        io::ErrorKind::UnexpectedEof
        | io::ErrorKind::ConnectionReset
        | io::ErrorKind::ConnectionAborted
        | io::ErrorKind::BrokenPipe => TransportError::ConnectionLost,
        _ => TransportError::Io(err),
    }
}
