//! The host's match state machine and set controller.
//!
//! One match runs placement → merge → display-ready handshake → 75
//! lockstep generations → scoring → outcome; the set controller repeats
//! that until the rounds run out, then announces the set result. Every
//! phase boundary is a blocking send followed by a blocking receive on
//! the other side, so the two processes advance in strict lockstep.

use log::{debug, warn};

use lifewar_shared::{
    frontend::{outcome_line, score_line},
    next_bonus, recv_board, run_placement, send_board, Board, Color, ControlToken, Frontend,
    MessageReceiver, MessageSender, Outcome, Role, SessionError, SetState, GENERATIONS_PER_MATCH,
    PLACEMENT_BUDGET,
};

/// The host side of one session against one peer.
///
/// The board is created once and never cleared: each match's placement
/// phase starts from the final board of the previous match.
pub struct HostSession<C, F> {
    connection: C,
    frontend: F,
    board: Board,
    set: SetState,
    bonus: i32,
}

impl<C, F> HostSession<C, F>
where
    C: MessageSender + MessageReceiver,
    F: Frontend,
{
    pub fn new(connection: C, frontend: F) -> Self {
        Self {
            connection,
            frontend,
            board: Board::new(),
            set: SetState::new(),
            bonus: 0,
        }
    }

    /// Play the whole set and announce its result to the peer.
    pub fn run(&mut self) -> Result<Outcome, SessionError> {
        while !self.set.finished() {
            let outcome = self.play_match()?;
            self.set.record(outcome);
            self.bonus = next_bonus(outcome, Role::Host);
            debug!(
                "match done: {outcome:?}, set now {}-{} with {} rounds left",
                self.set.host_wins, self.set.peer_wins, self.set.rounds_remaining
            );
        }

        let outcome = self.set.outcome();
        self.connection.send(outcome.token().as_bytes())?;
        Ok(outcome)
    }

    fn play_match(&mut self) -> Result<Outcome, SessionError> {
        self.placement_phase()?;
        self.merge_phase()?;
        self.ready_phase()?;
        let diff = self.simulation_phase()?;
        let outcome = Outcome::from_diff(diff);
        self.outcome_phase(outcome)?;
        Ok(outcome)
    }

    /// Tell the peer to start placing, then place locally. Both sides
    /// place concurrently; nothing crosses the wire per placement.
    fn placement_phase(&mut self) -> Result<(), SessionError> {
        self.connection.send(ControlToken::SetBoard.as_bytes())?;
        self.frontend.display_board(&self.board)?;
        run_placement(
            &mut self.frontend,
            &mut self.board,
            Color::Red,
            PLACEMENT_BUDGET + self.bonus,
        )?;
        self.frontend.display_status("Waiting on opponent...")?;
        Ok(())
    }

    /// Fold the peer's layout into the local board and send the merged
    /// board back, so both sides enter simulation with identical state.
    fn merge_phase(&mut self) -> Result<(), SessionError> {
        let incoming = recv_board(&mut self.connection)?;
        self.board.merge_from(&incoming);
        send_board(&mut self.connection, &self.board)?;
        Ok(())
    }

    /// Show the merged board, wait for the local human, then block until
    /// the peer reports ready. The content of the peer's message is
    /// deliberately not inspected: any message unblocks this phase.
    fn ready_phase(&mut self) -> Result<(), SessionError> {
        self.frontend.display_board(&self.board)?;
        self.frontend.display_status("Hit any key to begin.")?;
        self.frontend.wait_for_key()?;
        self.frontend.display_status("Waiting on opponent...")?;

        let message = self.connection.receive()?;
        if ControlToken::from_bytes(&message) != Some(ControlToken::Ready) {
            debug!("treating unexpected pre-match message as ready");
        }
        Ok(())
    }

    /// Drive the lockstep simulation; returns the final score
    /// difference.
    fn simulation_phase(&mut self) -> Result<i32, SessionError> {
        let mut diff = 0;
        for _ in 0..GENERATIONS_PER_MATCH {
            self.board.step();
            let score = self.board.score();
            diff = score.diff;
            self.frontend.display_board(&self.board)?;
            self.frontend.display_status(&score_line(&score))?;

            self.connection.send(ControlToken::Update.as_bytes())?;

            // The acknowledgment is the fixed placeholder token, not a
            // board checksum, so this check can only fail against a
            // non-conforming peer; real desynchronization sails through.
            let ack = self.connection.receive()?;
            if ControlToken::from_bytes(&ack) != Some(ControlToken::Ack) {
                warn!("bad generation acknowledgment, giving up");
                self.connection.send(ControlToken::Desynced.as_bytes())?;
                return Err(SessionError::Desynced);
            }
        }
        Ok(diff)
    }

    /// Announce the match result, let the local human read it, and wait
    /// for the peer to do the same before the next round.
    fn outcome_phase(&mut self, outcome: Outcome) -> Result<(), SessionError> {
        self.connection.send(outcome.token().as_bytes())?;
        self.frontend
            .display_status(outcome_line(outcome, Role::Host))?;
        self.frontend.wait_for_key()?;
        self.frontend.display_status("Waiting on opponent...")?;

        // As in the ready phase, any message counts as the peer's ready.
        self.connection.receive()?;
        Ok(())
    }

    /// The final board state, for inspection.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The set bookkeeping, for inspection.
    pub fn set(&self) -> &SetState {
        &self.set
    }

    /// The frontend, for inspection.
    pub fn frontend(&self) -> &F {
        &self.frontend
    }
}
