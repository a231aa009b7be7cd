//! # Lifewar Server
//! The host side of a lifewar session: drives the set controller and the
//! match state machine, and is authoritative for board progression.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

mod session;

pub use session::HostSession;
