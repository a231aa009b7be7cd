//! Placement merge: folds the peer's submitted layout into the host board.

use super::{Board, BOARD_SIZE};

impl Board {
    /// Merge another board's live cells into this one, producing the
    /// canonical starting board for a match.
    ///
    /// For every live cell of `incoming`: a live cell already here with a
    /// different color cancels both sides (simultaneous mutual
    /// destruction); otherwise the incoming cell's color is adopted and
    /// the cell marked alive. Cells alive here but absent from `incoming`
    /// are kept untouched, so the merge is union-biased.
    ///
    /// The two roles place with fixed, distinct colors, so a same-color
    /// conflict only arises for cells both boards already agreed on and
    /// is a no-op.
    pub fn merge_from(&mut self, incoming: &Board) {
        for row in 0..BOARD_SIZE as i32 {
            for col in 0..BOARD_SIZE as i32 {
                let theirs = incoming.get(row, col);
                if !theirs.alive {
                    continue;
                }
                let ours = self.get(row, col);
                if ours.alive && ours.color != theirs.color {
                    self.clear(row, col);
                } else {
                    self.adopt(row, col, theirs.color);
                }
            }
        }
    }
}
