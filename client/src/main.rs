//! Peer launcher: connect to a host and follow its match loop.

use std::process::ExitCode;

use clap::Parser;

use lifewar_client::PeerSession;
use lifewar_shared::{
    frontend::{set_result_line, terminal::TerminalFrontend},
    Role, SessionError, TcpConnection,
};

/// Connect to a lifewar server and play a set as the peer.
#[derive(Parser, Debug)]
#[command(name = "lifewar-client")]
struct Args {
    /// Server host name or address
    server_address: String,

    /// Server port
    port: u16,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();
    match run(&args) {
        Ok(result) => {
            println!("{result}");
            ExitCode::SUCCESS
        }
        Err(err) => report(err),
    }
}

fn run(args: &Args) -> Result<&'static str, SessionError> {
    let connection = TcpConnection::connect(&args.server_address, args.port)?;

    let frontend = TerminalFrontend::new()?;
    let mut session = PeerSession::new(connection, frontend);
    let outcome = session.run()?;

    // Restore the terminal before printing the set result.
    drop(session);
    Ok(set_result_line(outcome, Role::Peer))
}

fn report(err: SessionError) -> ExitCode {
    if err.is_connection_loss() {
        eprintln!("Connection lost.");
        return ExitCode::from(2);
    }
    if matches!(err, SessionError::Desynced) {
        eprintln!("Desynced, giving up.");
        return ExitCode::from(3);
    }
    eprintln!("{err}");
    ExitCode::from(1)
}
