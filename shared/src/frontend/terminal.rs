//! Crossterm implementation of the [`Frontend`] trait.
//!
//! Layout: one status line at the top, then the board inside a `*`
//! border. Red cells draw as `#` on a red background, blue cells as `@`
//! on cyan. Placement moves a visible cursor with the arrow keys or
//! `h j k l` (plus `y u b n` diagonals); `Enter`, `z` or `.` places or
//! retracts, `q` ends the phase early.

use std::io::{self, Stdout, Write};

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue,
    style::{Color as TermColor, Colors, Print, ResetColor, SetColors},
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::debug;

use crate::board::{Board, Color, BOARD_SIZE};

use super::{Frontend, FrontendError, PlacementOutcome};

const STATUS_ROW: u16 = 0;
const BOARD_TOP: u16 = 2;
const BOARD_LEFT: u16 = 1;

/// The real terminal frontend. Construction switches the terminal to raw
/// mode on the alternate screen; dropping it restores everything.
pub struct TerminalFrontend {
    out: Stdout,
    cursor_row: i32,
    cursor_col: i32,
}

impl TerminalFrontend {
    pub fn new() -> Result<Self, FrontendError> {
        let mut out = io::stdout();
        terminal::enable_raw_mode()?;
        execute!(out, EnterAlternateScreen, cursor::Hide)?;

        let mut frontend = Self {
            out,
            cursor_row: 0,
            cursor_col: 0,
        };
        frontend.draw_border()?;
        Ok(frontend)
    }

    fn draw_border(&mut self) -> Result<(), FrontendError> {
        let size = BOARD_SIZE as u16;
        queue!(self.out, Clear(ClearType::All))?;
        for col in 0..size + 2 {
            queue!(
                self.out,
                cursor::MoveTo(BOARD_LEFT - 1 + col, BOARD_TOP - 1),
                Print('*'),
                cursor::MoveTo(BOARD_LEFT - 1 + col, BOARD_TOP + size),
                Print('*'),
            )?;
        }
        for row in 0..size {
            queue!(
                self.out,
                cursor::MoveTo(BOARD_LEFT - 1, BOARD_TOP + row),
                Print('*'),
                cursor::MoveTo(BOARD_LEFT + size, BOARD_TOP + row),
                Print('*'),
            )?;
        }
        self.out.flush()?;
        Ok(())
    }

    fn move_to_cell(&mut self) -> Result<(), FrontendError> {
        queue!(
            self.out,
            cursor::MoveTo(
                BOARD_LEFT + self.cursor_col as u16,
                BOARD_TOP + self.cursor_row as u16,
            )
        )?;
        Ok(())
    }

    /// Block for the next key press, folding Ctrl+C into a frontend
    /// error so raw mode cannot trap the user.
    fn next_key(&mut self) -> Result<KeyEvent, FrontendError> {
        loop {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                    debug!("placement interrupted by Ctrl+C");
                    return Err(FrontendError::Interrupted);
                }
                return Ok(key);
            }
        }
    }
}

impl Drop for TerminalFrontend {
    fn drop(&mut self) {
        let _ = execute!(self.out, ResetColor, cursor::Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

impl Frontend for TerminalFrontend {
    fn display_board(&mut self, board: &Board) -> Result<(), FrontendError> {
        for row in 0..BOARD_SIZE as i32 {
            queue!(
                self.out,
                cursor::MoveTo(BOARD_LEFT, BOARD_TOP + row as u16)
            )?;
            for col in 0..BOARD_SIZE as i32 {
                let cell = board.get(row, col);
                match (cell.alive, cell.color) {
                    (true, Some(Color::Red)) => queue!(
                        self.out,
                        SetColors(Colors::new(TermColor::Black, TermColor::DarkRed)),
                        Print('#'),
                        ResetColor,
                    )?,
                    (true, Some(Color::Blue)) => queue!(
                        self.out,
                        SetColors(Colors::new(TermColor::Black, TermColor::DarkCyan)),
                        Print('@'),
                        ResetColor,
                    )?,
                    _ => queue!(self.out, Print(' '))?,
                }
            }
        }
        self.out.flush()?;
        Ok(())
    }

    fn display_status(&mut self, text: &str) -> Result<(), FrontendError> {
        queue!(
            self.out,
            cursor::MoveTo(0, STATUS_ROW),
            Clear(ClearType::CurrentLine),
            Print(text),
        )?;
        self.out.flush()?;
        Ok(())
    }

    fn wait_for_key(&mut self) -> Result<(), FrontendError> {
        self.next_key().map(|_| ())
    }

    fn place_cell(
        &mut self,
        color: Color,
        board: &mut Board,
    ) -> Result<PlacementOutcome, FrontendError> {
        execute!(self.out, cursor::Show)?;
        loop {
            self.move_to_cell()?;
            self.out.flush()?;

            let key = self.next_key()?;
            match key.code {
                KeyCode::Left | KeyCode::Char('h') => self.cursor_col -= 1,
                KeyCode::Right | KeyCode::Char('l') => self.cursor_col += 1,
                KeyCode::Up | KeyCode::Char('k') => self.cursor_row -= 1,
                KeyCode::Down | KeyCode::Char('j') => self.cursor_row += 1,
                KeyCode::Char('y') => {
                    self.cursor_row -= 1;
                    self.cursor_col -= 1;
                }
                KeyCode::Char('u') => {
                    self.cursor_row -= 1;
                    self.cursor_col += 1;
                }
                KeyCode::Char('b') => {
                    self.cursor_row += 1;
                    self.cursor_col -= 1;
                }
                KeyCode::Char('n') => {
                    self.cursor_row += 1;
                    self.cursor_col += 1;
                }
                KeyCode::Enter | KeyCode::Char('z') | KeyCode::Char('.') => {
                    if board.retract(self.cursor_row, self.cursor_col, color) {
                        self.display_board(board)?;
                        execute!(self.out, cursor::Hide)?;
                        return Ok(PlacementOutcome::Retracted);
                    }
                    if board.place(self.cursor_row, self.cursor_col, color) {
                        self.display_board(board)?;
                        execute!(self.out, cursor::Hide)?;
                        return Ok(PlacementOutcome::Placed);
                    }
                    // Occupied by the opponent or locked: nothing happens.
                }
                KeyCode::Char('q') => {
                    execute!(self.out, cursor::Hide)?;
                    return Ok(PlacementOutcome::Aborted);
                }
                _ => {}
            }

            self.cursor_row = self.cursor_row.clamp(0, BOARD_SIZE as i32 - 1);
            self.cursor_col = self.cursor_col.clamp(0, BOARD_SIZE as i32 - 1);
        }
    }
}
