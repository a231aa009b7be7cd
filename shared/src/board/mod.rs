//! The board engine: cell model and the two-color Conway update rule.
//!
//! The automaton is deterministic and pure: given identical boards, two
//! independent processes stepping in lockstep stay bit-identical, which is
//! what the whole synchronization protocol rests on.

pub mod codec;
mod merge;

/// Width and height of the (square) board.
pub const BOARD_SIZE: usize = 50;

/// A player's cell color. The host places Red, the peer places Blue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Blue,
}

/// A single board cell.
///
/// `pending` holds the next generation's liveness during the two-phase
/// step (compute, then commit), so that no mid-generation state is ever
/// readable. `locked` is set only when the automaton births a cell; a
/// player may not retract a locked cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cell {
    pub alive: bool,
    pub pending: bool,
    pub color: Option<Color>,
    pub locked: bool,
}

/// Live-cell totals for one board, derived by scanning it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    pub red: i32,
    pub blue: i32,
    /// `red - blue`; positive means the host side is ahead.
    pub diff: i32,
}

/// A fixed-size grid of cells, addressed `(row, col)`.
///
/// Out-of-bounds reads return a synthetic dead cell: the boundary is
/// permanently dead, not wrap-around. Boards are owned by one process and
/// never shared; only their alive cells cross the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: Vec<Cell>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create a blank board.
    pub fn new() -> Self {
        Self {
            cells: vec![Cell::default(); BOARD_SIZE * BOARD_SIZE],
        }
    }

    fn in_bounds(row: i32, col: i32) -> bool {
        (0..BOARD_SIZE as i32).contains(&row) && (0..BOARD_SIZE as i32).contains(&col)
    }

    fn index(row: i32, col: i32) -> usize {
        row as usize * BOARD_SIZE + col as usize
    }

    /// Return a copy of the cell at a location, or a synthetic dead cell
    /// when the location is out of bounds.
    pub fn get(&self, row: i32, col: i32) -> Cell {
        if Self::in_bounds(row, col) {
            self.cells[Self::index(row, col)]
        } else {
            Cell::default()
        }
    }

    /// Mark a cell to be made alive at the next commit, as an automaton
    /// birth. No-op out of bounds.
    pub fn spawn(&mut self, row: i32, col: i32, color: Color) {
        if !Self::in_bounds(row, col) {
            return;
        }
        let cell = &mut self.cells[Self::index(row, col)];
        cell.pending = true;
        cell.locked = true;
        cell.color = Some(color);
    }

    /// Mark a cell to be killed at the next commit. No-op out of bounds.
    ///
    /// The color is left in place until the commit pass: clearing it here
    /// would corrupt neighbor color counts for cells evaluated later in
    /// the same generation.
    pub fn kill(&mut self, row: i32, col: i32) {
        if !Self::in_bounds(row, col) {
            return;
        }
        let cell = &mut self.cells[Self::index(row, col)];
        cell.pending = false;
        cell.locked = false;
    }

    /// A player placement: only a dead cell can be taken. Returns whether
    /// the cell was placed. Player-placed cells are unlocked until the
    /// automaton births a cell there.
    pub fn place(&mut self, row: i32, col: i32, color: Color) -> bool {
        if !Self::in_bounds(row, col) {
            return false;
        }
        let cell = &mut self.cells[Self::index(row, col)];
        if cell.alive {
            return false;
        }
        *cell = Cell {
            alive: true,
            pending: true,
            color: Some(color),
            locked: false,
        };
        true
    }

    /// Take back one of the player's own placements. Only an alive,
    /// unlocked cell of the player's own color can be retracted.
    pub fn retract(&mut self, row: i32, col: i32, color: Color) -> bool {
        if !Self::in_bounds(row, col) {
            return false;
        }
        let cell = &mut self.cells[Self::index(row, col)];
        if !cell.alive || cell.locked || cell.color != Some(color) {
            return false;
        }
        *cell = Cell::default();
        true
    }

    /// Advance the board one generation.
    ///
    /// Two full passes: first every cell is evaluated against pre-step
    /// state only (deaths and births land in `pending`), then the commit
    /// pass makes `pending` current. Never mutates liveness in place
    /// during the compute pass, so the result is independent of scan
    /// order.
    pub fn step(&mut self) {
        for row in 0..BOARD_SIZE as i32 {
            for col in 0..BOARD_SIZE as i32 {
                self.step_cell(row, col);
            }
        }
        for cell in &mut self.cells {
            cell.alive = cell.pending;
            if !cell.alive {
                cell.color = None;
            }
        }
    }

    fn step_cell(&mut self, row: i32, col: i32) {
        let mut neighbors = 0;
        let mut reds = 0;
        let mut blues = 0;
        for r in row - 1..=row + 1 {
            for c in col - 1..=col + 1 {
                if r == row && c == col {
                    continue;
                }
                let neighbor = self.get(r, c);
                if neighbor.alive {
                    neighbors += 1;
                    match neighbor.color {
                        Some(Color::Red) => reds += 1,
                        Some(Color::Blue) => blues += 1,
                        None => {}
                    }
                }
            }
        }

        let target = self.get(row, col);

        if target.alive && neighbors != 2 && neighbors != 3 {
            self.kill(row, col);
        }

        if !target.alive && neighbors == 3 {
            // Births take the strict majority color. An even split would
            // yield no birth, but with exactly 3 live neighbors and two
            // colors it cannot happen, so births are always determinate.
            if reds > blues {
                self.spawn(row, col, Color::Red);
            } else if blues > reds {
                self.spawn(row, col, Color::Blue);
            }
        }
    }

    /// Count live cells per color.
    pub fn score(&self) -> Score {
        let mut red = 0;
        let mut blue = 0;
        for cell in &self.cells {
            if cell.alive {
                match cell.color {
                    Some(Color::Red) => red += 1,
                    Some(Color::Blue) => blue += 1,
                    None => {}
                }
            }
        }
        Score {
            red,
            blue,
            diff: red - blue,
        }
    }

    /// Iterate over live cells in row-major order, the canonical scan
    /// order for the wire codec and the merge.
    pub fn live_cells(&self) -> impl Iterator<Item = (u8, u8, Color)> + '_ {
        self.cells.iter().enumerate().filter_map(|(index, cell)| {
            match (cell.alive, cell.color) {
                (true, Some(color)) => Some((
                    (index / BOARD_SIZE) as u8,
                    (index % BOARD_SIZE) as u8,
                    color,
                )),
                _ => None,
            }
        })
    }

    fn clear(&mut self, row: i32, col: i32) {
        if Self::in_bounds(row, col) {
            self.cells[Self::index(row, col)] = Cell::default();
        }
    }

    fn adopt(&mut self, row: i32, col: i32, color: Option<Color>) {
        if !Self::in_bounds(row, col) {
            return;
        }
        let cell = &mut self.cells[Self::index(row, col)];
        cell.alive = true;
        cell.pending = true;
        cell.color = color;
    }
}
