//! Control tokens exchanged between host and peer.
//!
//! Tokens are short UTF-8 strings, one per message, case-sensitive. The
//! state machines on both sides are phase-implicit: a receiver interprets
//! whatever token arrives against its current loop position and silently
//! ignores the rest, so `from_bytes` hands unknown bytes back as `None`
//! instead of erroring.

/// One control token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlToken {
    /// `setboard`: the host opens a match; both sides begin placement.
    SetBoard,
    /// `ready`: the sender is done looking at a board and the match may
    /// proceed.
    Ready,
    /// `update`: the host stepped its board; the peer must step its copy.
    Update,
    /// `hash`: the peer's per-generation acknowledgment. A fixed
    /// placeholder, not a content checksum: desynchronization is never
    /// actually detected.
    Ack,
    /// `desynced`: the host saw a bad acknowledgment and is giving up.
    /// Unreachable as long as every peer acknowledges with the
    /// placeholder.
    Desynced,
    /// `swin`: the host side won (the match, or at set end the set).
    HostWin,
    /// `cwin`: the peer side won (the match, or at set end the set).
    PeerWin,
    /// `tie`: a drawn match, or at set end a drawn set.
    Tie,
}

impl ControlToken {
    /// The exact wire form of this token.
    pub fn as_bytes(self) -> &'static [u8] {
        match self {
            Self::SetBoard => b"setboard",
            Self::Ready => b"ready",
            Self::Update => b"update",
            Self::Ack => b"hash",
            Self::Desynced => b"desynced",
            Self::HostWin => b"swin",
            Self::PeerWin => b"cwin",
            Self::Tie => b"tie",
        }
    }

    /// Parse a received message; `None` for anything unrecognized.
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        match bytes {
            b"setboard" => Some(Self::SetBoard),
            b"ready" => Some(Self::Ready),
            b"update" => Some(Self::Update),
            b"hash" => Some(Self::Ack),
            b"desynced" => Some(Self::Desynced),
            b"swin" => Some(Self::HostWin),
            b"cwin" => Some(Self::PeerWin),
            b"tie" => Some(Self::Tie),
            _ => None,
        }
    }
}
