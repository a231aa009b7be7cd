//! The peer's mirror of the match loop.
//!
//! The peer never decides anything: it reads one token at a time and
//! reacts. The outer loop starts matches (`setboard`) or ends the set
//! (`swin`/`cwin`/`tie`); the inner loop runs one match
//! (`update`/`desynced` and the match outcomes). A token that makes no
//! sense for the current loop is silently ignored: the state machine
//! accepts whatever arrives next, with no phase validation anywhere.

use log::debug;

use lifewar_shared::{
    frontend::{outcome_line, score_line},
    next_bonus, recv_board, run_placement, send_board, Board, Color, ControlToken, Frontend,
    MessageReceiver, MessageSender, Outcome, Role, SessionError, PLACEMENT_BUDGET,
};

/// The peer side of one session against one host.
pub struct PeerSession<C, F> {
    connection: C,
    frontend: F,
    board: Board,
    bonus: i32,
}

impl<C, F> PeerSession<C, F>
where
    C: MessageSender + MessageReceiver,
    F: Frontend,
{
    pub fn new(connection: C, frontend: F) -> Self {
        Self {
            connection,
            frontend,
            board: Board::new(),
            bonus: 0,
        }
    }

    /// Follow the host until it announces the set result.
    pub fn run(&mut self) -> Result<Outcome, SessionError> {
        loop {
            let message = self.connection.receive()?;
            match ControlToken::from_bytes(&message) {
                Some(ControlToken::SetBoard) => self.play_match()?,
                Some(ControlToken::HostWin) => return Ok(Outcome::HostWin),
                Some(ControlToken::PeerWin) => return Ok(Outcome::PeerWin),
                Some(ControlToken::Tie) => return Ok(Outcome::Tie),
                other => debug!("ignoring message between matches: {other:?}"),
            }
        }
    }

    fn play_match(&mut self) -> Result<(), SessionError> {
        // Place on the local board (still holding the previous match's
        // final state), submit it, then adopt the host's merged board
        // wholesale; after this both copies are identical.
        self.frontend.display_board(&self.board)?;
        run_placement(
            &mut self.frontend,
            &mut self.board,
            Color::Blue,
            PLACEMENT_BUDGET + self.bonus,
        )?;
        self.frontend.display_status("Waiting on opponent...")?;
        send_board(&mut self.connection, &self.board)?;
        self.board = recv_board(&mut self.connection)?;

        self.frontend.display_board(&self.board)?;
        self.frontend.display_status("Hit any key to begin.")?;
        self.frontend.wait_for_key()?;
        self.frontend.display_status("Waiting on opponent...")?;
        self.connection.send(ControlToken::Ready.as_bytes())?;

        loop {
            let message = self.connection.receive()?;
            match ControlToken::from_bytes(&message) {
                Some(ControlToken::Update) => {
                    // The host already stepped its copy; determinism is
                    // the only thing keeping the two boards identical.
                    self.board.step();
                    self.frontend.display_board(&self.board)?;
                    self.frontend.display_status(&score_line(&self.board.score()))?;
                    self.connection.send(ControlToken::Ack.as_bytes())?;
                }
                Some(ControlToken::Desynced) => return Err(SessionError::Desynced),
                Some(token @ (ControlToken::HostWin | ControlToken::PeerWin | ControlToken::Tie)) => {
                    let outcome = match token {
                        ControlToken::HostWin => Outcome::HostWin,
                        ControlToken::PeerWin => Outcome::PeerWin,
                        _ => Outcome::Tie,
                    };
                    self.bonus = next_bonus(outcome, Role::Peer);
                    self.frontend
                        .display_status(outcome_line(outcome, Role::Peer))?;
                    self.frontend.wait_for_key()?;
                    self.frontend.display_status("Waiting on opponent...")?;
                    self.connection.send(ControlToken::Ready.as_bytes())?;
                    return Ok(());
                }
                other => debug!("ignoring mid-match message: {other:?}"),
            }
        }
    }

    /// The final board state, for inspection.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The frontend, for inspection.
    pub fn frontend(&self) -> &F {
        &self.frontend
    }
}
