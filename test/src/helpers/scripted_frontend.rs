use std::collections::VecDeque;

use lifewar_shared::{Board, Color, Frontend, FrontendError, PlacementOutcome};

/// One scripted placement interaction.
#[derive(Debug, Clone, Copy)]
pub enum ScriptedPlacement {
    Place(i32, i32),
    Retract(i32, i32),
    Abort,
}

/// A frontend that never blocks: placements play back from a fixed
/// script (ending the phase once the script runs dry), key waits return
/// immediately, and everything displayed is recorded for assertions.
pub struct ScriptedFrontend {
    script: VecDeque<ScriptedPlacement>,
    pub statuses: Vec<String>,
    pub boards_displayed: usize,
    pub last_board: Option<Board>,
}

impl ScriptedFrontend {
    pub fn new(script: Vec<ScriptedPlacement>) -> Self {
        Self {
            script: script.into(),
            statuses: Vec::new(),
            boards_displayed: 0,
            last_board: None,
        }
    }

    /// The placement-budget status lines, in order; the first one of
    /// each match announces that match's budget.
    pub fn budget_lines(&self) -> Vec<&str> {
        self.statuses
            .iter()
            .filter(|status| status.ends_with("cells remaining."))
            .map(String::as_str)
            .collect()
    }

    pub fn status_count(&self, needle: &str) -> usize {
        self.statuses.iter().filter(|status| *status == needle).count()
    }
}

impl Frontend for ScriptedFrontend {
    fn display_board(&mut self, board: &Board) -> Result<(), FrontendError> {
        self.boards_displayed += 1;
        self.last_board = Some(board.clone());
        Ok(())
    }

    fn display_status(&mut self, text: &str) -> Result<(), FrontendError> {
        self.statuses.push(text.to_owned());
        Ok(())
    }

    fn wait_for_key(&mut self) -> Result<(), FrontendError> {
        Ok(())
    }

    fn place_cell(
        &mut self,
        color: Color,
        board: &mut Board,
    ) -> Result<PlacementOutcome, FrontendError> {
        match self.script.pop_front() {
            Some(ScriptedPlacement::Place(row, col)) => {
                assert!(
                    board.place(row, col, color),
                    "scripted placement at ({row},{col}) hit an occupied cell"
                );
                Ok(PlacementOutcome::Placed)
            }
            Some(ScriptedPlacement::Retract(row, col)) => {
                assert!(
                    board.retract(row, col, color),
                    "scripted retraction at ({row},{col}) had nothing to take back"
                );
                Ok(PlacementOutcome::Retracted)
            }
            Some(ScriptedPlacement::Abort) | None => Ok(PlacementOutcome::Aborted),
        }
    }
}
