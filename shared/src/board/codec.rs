//! Wire codec for board transfers.
//!
//! A board crosses the wire as one 3-byte message per live cell,
//! `[color, row, col]` in row-major scan order, terminated by the
//! sentinel message `"000"`. There is no length prefix and no checksum at
//! this layer; whole-message delivery is the transport's job.
//!
//! The sentinel's bytes (`0x30 0x30 0x30`) cannot arise from a real
//! record: no color serializes to `0x30`, so the first byte alone tells
//! the two apart. The scheme still mixes a text sentinel into an
//! otherwise binary stream and survives on that coincidence.

use thiserror::Error;

use crate::transport::{MessageReceiver, MessageSender, TransportError};

use super::{Board, Color};

/// The reserved record terminating a board transfer.
pub const SENTINEL: [u8; 3] = *b"000";

const RECORD_LEN: usize = 3;

const COLOR_RED: u8 = 1;
const COLOR_BLUE: u8 = 2;

/// Errors raised while receiving a board.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The underlying transport failed (connection loss included).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// A cell record of the wrong size arrived.
    #[error("bad cell record length {len}, expected {RECORD_LEN} bytes")]
    BadRecordLength { len: usize },

    /// A cell record carried an unknown color byte.
    #[error("unknown cell color byte {byte}")]
    UnknownColor { byte: u8 },
}

fn color_to_wire(color: Color) -> u8 {
    match color {
        Color::Red => COLOR_RED,
        Color::Blue => COLOR_BLUE,
    }
}

fn color_from_wire(byte: u8) -> Result<Color, CodecError> {
    match byte {
        COLOR_RED => Ok(Color::Red),
        COLOR_BLUE => Ok(Color::Blue),
        byte => Err(CodecError::UnknownColor { byte }),
    }
}

/// Encode one live cell as its wire record.
pub fn encode_record(row: u8, col: u8, color: Color) -> [u8; 3] {
    [color_to_wire(color), row, col]
}

/// Send every live cell of a board, then the sentinel.
pub fn send_board<S: MessageSender>(sender: &mut S, board: &Board) -> Result<(), TransportError> {
    for (row, col, color) in board.live_cells() {
        sender.send(&encode_record(row, col, color))?;
    }
    sender.send(&SENTINEL)
}

/// Receive cell records until the sentinel and build a fresh board from
/// them. Each record lands as an unlocked live cell; coordinates outside
/// the board are discarded by the engine's out-of-bounds no-op.
pub fn recv_board<R: MessageReceiver>(receiver: &mut R) -> Result<Board, CodecError> {
    let mut board = Board::new();

    loop {
        let message = receiver.receive()?;

        if message == SENTINEL {
            return Ok(board);
        }
        if message.len() != RECORD_LEN {
            return Err(CodecError::BadRecordLength { len: message.len() });
        }

        let color = color_from_wire(message[0])?;
        board.place(i32::from(message[1]), i32::from(message[2]), color);
    }
}
