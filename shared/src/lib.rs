//! # Lifewar Shared
//! Common functionality shared between lifewar-server & lifewar-client
//! crates: the board engine, the placement merge, the wire codec & control
//! tokens, the blocking message transport, and the terminal frontend.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

pub mod board;
pub mod frontend;
pub mod protocol;
pub mod session;
pub mod transport;

pub use board::{
    codec::{recv_board, send_board, CodecError},
    Board, Cell, Color, Score, BOARD_SIZE,
};
pub use frontend::{run_placement, Frontend, FrontendError, PlacementOutcome};
pub use protocol::ControlToken;
pub use session::{
    next_bonus, Outcome, Role, SessionError, SetState, GENERATIONS_PER_MATCH, LOSS_BONUS,
    MATCHES_PER_SET, PLACEMENT_BUDGET,
};
pub use transport::{
    tcp::{Listener, TcpConnection},
    MessageReceiver, MessageSender, TransportError,
};
