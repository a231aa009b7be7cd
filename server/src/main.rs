//! Host launcher: bind an ephemeral port, print it, accept one peer,
//! play a best-of-five set.

use std::process::ExitCode;

use lifewar_server::HostSession;
use lifewar_shared::{
    frontend::{set_result_line, terminal::TerminalFrontend},
    Listener, Role, SessionError,
};

fn main() -> ExitCode {
    env_logger::init();
    match run() {
        Ok(result) => {
            println!("{result}");
            ExitCode::SUCCESS
        }
        Err(err) => report(err),
    }
}

fn run() -> Result<&'static str, SessionError> {
    let listener = Listener::bind()?;
    println!("Server listening on port {}", listener.local_port());

    let connection = listener.accept()?;
    println!("Found opponent!");

    let frontend = TerminalFrontend::new()?;
    let mut session = HostSession::new(connection, frontend);
    let outcome = session.run()?;

    // Restore the terminal before printing the set result.
    drop(session);
    Ok(set_result_line(outcome, Role::Host))
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
