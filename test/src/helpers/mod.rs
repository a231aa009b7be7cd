mod scripted_frontend;

pub use local_transport::{pair, LocalTransport};
pub use scripted_frontend::{ScriptedFrontend, ScriptedPlacement};
