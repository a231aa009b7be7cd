//! The message transport seam.
//!
//! Everything above this layer exchanges opaque whole messages: one send
//! delivers one byte string, one receive yields one byte string or the
//! distinguished connection-lost result. Delivery is reliable and
//! ordered; framing is an implementation detail of the transport.
//!
//! The protocol is fully synchronous, so both traits block. There are no
//! timeouts anywhere: a silent remote blocks its counterpart
//! indefinitely, and a lost connection is always fatal to the session.

pub mod tcp;

use thiserror::Error;

/// Errors surfaced by a message transport.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The remote side closed or reset the connection.
    #[error("connection lost")]
    ConnectionLost,

    /// A frame announced an implausible length.
    #[error("oversized message of {len} bytes (limit {MAX_MESSAGE_LEN})")]
    OversizedMessage { len: usize },

    /// Any other I/O failure on the underlying stream.
    #[error("transport i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// The largest message this protocol ever produces is a control token;
/// anything bigger than this is a framing bug or a hostile stream, and
/// refusing it beats allocating whatever a corrupt length prefix asks
/// for.
pub const MAX_MESSAGE_LEN: usize = 1024;

/// Blocking, whole-message sender half.
pub trait MessageSender {
    /// Send one message. Blocks until the bytes are handed off.
    fn send(&mut self, message: &[u8]) -> Result<(), TransportError>;
}

/// Blocking, whole-message receiver half.
pub trait MessageReceiver {
    /// Receive the next message. Blocks until one arrives or the
    /// connection is lost.
    fn receive(&mut self) -> Result<Vec<u8>, TransportError>;
}
