//! # Lifewar Client
//! The peer side of a lifewar session: mirrors the host's match loop,
//! driven entirely by received control tokens.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

mod session;

pub use session::PeerSession;
