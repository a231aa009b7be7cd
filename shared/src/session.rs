//! Session state shared by both roles: match/set bookkeeping, the
//! placement budget, and the session-level error type.
//!
//! All of it is explicit values owned by the role's session struct and
//! threaded through by parameter, never process-wide state.

use thiserror::Error;

use crate::board::codec::CodecError;
use crate::frontend::FrontendError;
use crate::protocol::ControlToken;
use crate::transport::TransportError;

/// Matches in one set.
pub const MATCHES_PER_SET: i32 = 5;

/// Generations simulated per match.
pub const GENERATIONS_PER_MATCH: u32 = 75;

/// Base number of cells each side may place per match.
pub const PLACEMENT_BUDGET: i32 = 10;

/// Extra placement cells granted for losing the previous match.
pub const LOSS_BONUS: i32 = 15;

/// Which side of the protocol this process is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Initiates, drives the match loop, and is authoritative for board
    /// progression.
    Host,
    /// Mirrors the host, driven entirely by received tokens.
    Peer,
}

/// Result of a match, or at set end of the whole set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    HostWin,
    PeerWin,
    Tie,
}

impl Outcome {
    /// Judge a final score difference (`red - blue`).
    pub fn from_diff(diff: i32) -> Self {
        match diff {
            d if d > 0 => Self::HostWin,
            d if d < 0 => Self::PeerWin,
            _ => Self::Tie,
        }
    }

    /// The token announcing this outcome.
    pub fn token(self) -> ControlToken {
        match self {
            Self::HostWin => ControlToken::HostWin,
            Self::PeerWin => ControlToken::PeerWin,
            Self::Tie => ControlToken::Tie,
        }
    }

    /// Whether the given role lost.
    pub fn is_loss_for(self, role: Role) -> bool {
        matches!(
            (self, role),
            (Self::HostWin, Role::Peer) | (Self::PeerWin, Role::Host)
        )
    }
}

/// The loser bonus for the match after `outcome`, from `role`'s point of
/// view. Non-cumulative: the bonus is re-earned by losing again, so it is
/// recomputed from scratch after every match.
pub fn next_bonus(outcome: Outcome, role: Role) -> i32 {
    if outcome.is_loss_for(role) {
        LOSS_BONUS
    } else {
        0
    }
}

/// Win/loss bookkeeping for one best-of-five set, owned by the host's
/// set controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetState {
    pub rounds_remaining: i32,
    pub host_wins: i32,
    pub peer_wins: i32,
}

impl Default for SetState {
    fn default() -> Self {
        Self::new()
    }
}

impl SetState {
    pub fn new() -> Self {
        Self {
            rounds_remaining: MATCHES_PER_SET,
            host_wins: 0,
            peer_wins: 0,
        }
    }

    /// Record a completed match. Every match consumes a round, ties
    /// included; only decisive matches move a win counter.
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::HostWin => self.host_wins += 1,
            Outcome::PeerWin => self.peer_wins += 1,
            Outcome::Tie => {}
        }
        self.rounds_remaining -= 1;
    }

    pub fn finished(&self) -> bool {
        self.rounds_remaining <= 0
    }

    /// The set result by strict comparison of win counts; equal counts
    /// are an explicit drawn set.
    pub fn outcome(&self) -> Outcome {
        match self.host_wins.cmp(&self.peer_wins) {
            std::cmp::Ordering::Greater => Outcome::HostWin,
            std::cmp::Ordering::Less => Outcome::PeerWin,
            std::cmp::Ordering::Equal => Outcome::Tie,
        }
    }
}

/// A fatal session failure. There is no local recovery anywhere: every
/// variant surfaces to the binary, which reports it and exits.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("board transfer failed: {0}")]
    Codec(#[from] CodecError),

    #[error("frontend error: {0}")]
    Frontend(#[from] FrontendError),

    /// The lockstep acknowledgment check failed (never under a conforming
    /// remote; the acknowledgment is a fixed placeholder).
    #[error("boards desynchronized")]
    Desynced,
}

impl SessionError {
    /// Whether this failure is a lost connection, whatever layer noticed
    /// it.
    pub fn is_connection_loss(&self) -> bool {
        matches!(
            self,
            Self::Transport(TransportError::ConnectionLost)
                | Self::Codec(CodecError::Transport(TransportError::ConnectionLost))
        )
    }
}
