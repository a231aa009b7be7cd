//! The rendering/input seam.
//!
//! Sessions talk to a [`Frontend`] trait so the protocol loops can run
//! against the real terminal or against a scripted double in tests. The
//! placement loop lives here because both roles run it identically; only
//! the color and the budget differ.

pub mod terminal;

use std::io;

use thiserror::Error;

use crate::board::{Board, Color, Score};
use crate::session::{Outcome, Role};

/// Errors from a frontend implementation.
#[derive(Debug, Error)]
pub enum FrontendError {
    #[error("terminal i/o error: {0}")]
    Io(#[from] io::Error),

    /// The local player hit Ctrl+C.
    #[error("interrupted by the user")]
    Interrupted,
}

/// What one placement interaction did to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementOutcome {
    /// A new cell of the player's color was placed.
    Placed,
    /// One of the player's own unlocked cells was taken back off.
    Retracted,
    /// The player ended the placement phase early.
    Aborted,
}

/// Rendering and local input, one per process.
pub trait Frontend {
    fn display_board(&mut self, board: &Board) -> Result<(), FrontendError>;

    fn display_status(&mut self, text: &str) -> Result<(), FrontendError>;

    /// Block until the local human presses any key.
    fn wait_for_key(&mut self) -> Result<(), FrontendError>;

    /// Run one cursor interaction: move around until the player places a
    /// cell, retracts one, or quits the phase.
    fn place_cell(
        &mut self,
        color: Color,
        board: &mut Board,
    ) -> Result<PlacementOutcome, FrontendError>;
}

/// Drive one side's whole placement phase.
///
/// The counter is signed and a retraction rewinds it by one net slot:
/// the freed budget comes back, and the counter can go negative when the
/// player retracts cells left over from an earlier match.
pub fn run_placement<F: Frontend + ?Sized>(
    frontend: &mut F,
    board: &mut Board,
    color: Color,
    budget: i32,
) -> Result<(), FrontendError> {
    let mut placed: i32 = 0;
    while placed < budget {
        frontend.display_status(&format!("{} cells remaining.", budget - placed))?;
        match frontend.place_cell(color, board)? {
            PlacementOutcome::Placed => placed += 1,
            PlacementOutcome::Retracted => placed -= 1,
            PlacementOutcome::Aborted => break,
        }
    }
    Ok(())
}

/// The running-score status line shown during simulation.
pub fn score_line(score: &Score) -> String {
    if score.diff > 0 {
        format!("Red is up by {}.", score.diff)
    } else if score.diff < 0 {
        format!("Blue is up by {}.", -score.diff)
    } else {
        "Red and Blue are tied!".to_owned()
    }
}

/// The status line announcing a match outcome to one side.
pub fn outcome_line(outcome: Outcome, role: Role) -> &'static str {
    match outcome {
        Outcome::Tie => "It's a tie! Hit any key.",
        _ if outcome.is_loss_for(role) => "You lost! Hit any key.",
        _ => "You won! Hit any key.",
    }
}

/// The final line printed (on the restored terminal) for a set result.
pub fn set_result_line(outcome: Outcome, role: Role) -> &'static str {
    match outcome {
        Outcome::Tie => "The set is a draw.",
        _ if outcome.is_loss_for(role) => "You lost the set. Better luck next time!",
        _ => "You won the set!",
    }
}
