//! Tic-tac-toe with an exhaustive minimax opponent
//!
//! The human always plays X; the computer answers as O. The board is small
//! enough that the search enumerates every continuation with no pruning.
//!
//! ```text
//! 0 | 1 | 2
//! ---------
//! 3 | 4 | 5
//! ---------
//! 6 | 7 | 8
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::WIN_SCORE;
use crate::error::{ArcadeError, Result};

/// All eight winning lines
const LINES: [[usize; 3]; 8] = [
    [0, 1, 2], // top row
    [3, 4, 5], // middle row
    [6, 7, 8], // bottom row
    [0, 3, 6], // left column
    [1, 4, 7], // center column
    [2, 5, 8], // right column
    [0, 4, 8], // main diagonal
    [2, 4, 6], // anti-diagonal
];

/// A player's mark
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// Get the opposing mark.
    pub fn opposite(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

/// How a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Win(Mark),
    Draw,
}

/// Nine cells, row-major
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [Option<Mark>; 9],
}

impl Board {
    /// Empty board
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Option<Mark>; 9]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Option<Mark>; 9] {
        &self.cells
    }

    /// Mark at a cell, if any (out-of-range cells read as empty)
    pub fn get(&self, cell: usize) -> Option<Mark> {
        self.cells.get(cell).copied().flatten()
    }

    /// Place a mark into an empty cell
    pub fn place(&mut self, cell: usize, mark: Mark) -> Result<()> {
        match self.cells.get(cell) {
            None => Err(ArcadeError::CellOutOfRange(cell)),
            Some(Some(_)) => Err(ArcadeError::CellOccupied(cell)),
            Some(None) => {
                self.cells[cell] = Some(mark);
                Ok(())
            }
        }
    }

    /// Empty cell indices in ascending order
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_none())
            .map(|(i, _)| i)
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| c.is_some())
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&c| c == Some(mark)).count()
    }

    /// Mark owning a completed line, checked in `LINES` order
    pub fn winner(&self) -> Option<Mark> {
        self.winning_line().and_then(|line| self.cells[line[0]])
    }

    /// First completed line, if any
    pub fn winning_line(&self) -> Option<[usize; 3]> {
        LINES.into_iter().find(|&[a, b, c]| {
            self.cells[a].is_some() && self.cells[a] == self.cells[b] && self.cells[a] == self.cells[c]
        })
    }

    /// Terminal classification: a line wins even on a full board
    pub fn outcome(&self) -> Option<Outcome> {
        if let Some(mark) = self.winner() {
            Some(Outcome::Win(mark))
        } else if self.is_full() {
            Some(Outcome::Draw)
        } else {
            None
        }
    }

    /// Same shape with X and O exchanged
    pub fn swapped(&self) -> Self {
        let mut cells = self.cells;
        for cell in cells.iter_mut() {
            *cell = cell.map(Mark::opposite);
        }
        Self { cells }
    }
}

impl FromStr for Board {
    type Err = ArcadeError;

    /// Parse nine cells from `X`, `O` and `.`/`_`/`-` (whitespace and `|` ignored)
    fn from_str(s: &str) -> Result<Self> {
        let mut cells = [None; 9];
        let mut n = 0;
        for ch in s.chars().filter(|c| !c.is_whitespace() && *c != '|') {
            let cell = match ch {
                'X' | 'x' => Some(Mark::X),
                'O' | 'o' => Some(Mark::O),
                '.' | '_' | '-' => None,
                other => return Err(ArcadeError::InvalidBoard(format!("unexpected '{other}'"))),
            };
            if n == 9 {
                return Err(ArcadeError::InvalidBoard("more than 9 cells".into()));
            }
            cells[n] = cell;
            n += 1;
        }
        if n != 9 {
            return Err(ArcadeError::InvalidBoard(format!("expected 9 cells, got {n}")));
        }
        Ok(Self { cells })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            if row > 0 {
                writeln!(f, "-----------")?;
            }
            for col in 0..3 {
                if col > 0 {
                    write!(f, "|")?;
                }
                match self.cells[row * 3 + col] {
                    Some(mark) => write!(f, " {mark} ")?,
                    None => write!(f, "   ")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Score `board` for `player` (the maximizing side)
///
/// A `player` line scores `WIN_SCORE - depth`, an opponent line
/// `depth - WIN_SCORE`, a full board 0. On a maximizing ply `player` moves,
/// otherwise the opponent does. The board is restored before returning.
pub fn minimax(board: &mut Board, depth: i32, maximizing: bool, player: Mark) -> i32 {
    match board.outcome() {
        Some(Outcome::Win(mark)) if mark == player => return WIN_SCORE - depth,
        Some(Outcome::Win(_)) => return depth - WIN_SCORE,
        Some(Outcome::Draw) => return 0,
        None => {}
    }

    let mover = if maximizing { player } else { player.opposite() };
    let mut best = if maximizing { i32::MIN } else { i32::MAX };

    for cell in 0..9 {
        if board.cells[cell].is_some() {
            continue;
        }
        board.cells[cell] = Some(mover);
        let score = minimax(board, depth + 1, !maximizing, player);
        board.cells[cell] = None;

        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }

    best
}

/// Optimal move for `player`, or `None` when no cell is empty
///
/// Ties go to the lowest cell index.
pub fn best_move(board: &Board, player: Mark) -> Option<usize> {
    let mut scratch = *board;
    let mut best_score = i32::MIN;
    let mut best = None;

    for cell in 0..9 {
        if scratch.cells[cell].is_some() {
            continue;
        }
        scratch.cells[cell] = Some(player);
        let score = minimax(&mut scratch, 0, false, player);
        scratch.cells[cell] = None;

        if score > best_score {
            best_score = score;
            best = Some(cell);
        }
    }

    best
}

/// [`best_move`] with `-1` standing in for "no move"
pub fn best_move_index(board: &Board, player: Mark) -> i32 {
    best_move(board, player).map_or(-1, |cell| cell as i32)
}

/// Human (X) versus computer (O) session
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TicTacToeGame {
    board: Board,
}

impl TicTacToeGame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.board.outcome()
    }

    /// Play X at `cell`, then let the computer answer
    ///
    /// Returns the computer's reply, or `None` if X's move ended the game.
    pub fn play(&mut self, cell: usize) -> Result<Option<usize>> {
        if self.board.outcome().is_some() {
            return Err(ArcadeError::GameOver);
        }
        self.board.place(cell, Mark::X)?;

        if let Some(outcome) = self.board.outcome() {
            log::info!("Tic-tac-toe over after X: {:?}", outcome);
            return Ok(None);
        }

        let reply = best_move(&self.board, Mark::O);
        if let Some(reply) = reply {
            self.board.place(reply, Mark::O)?;
            log::debug!("Computer plays O at {}", reply);
            if let Some(outcome) = self.board.outcome() {
                log::info!("Tic-tac-toe over after O: {:?}", outcome);
            }
        }
        Ok(reply)
    }

    /// [`play`](Self::play) for page clicks: an occupied cell or a finished
    /// game is ignored instead of being an error
    pub fn click(&mut self, cell: usize) -> Result<Option<usize>> {
        match self.play(cell) {
            Err(ArcadeError::CellOccupied(_) | ArcadeError::GameOver) => Ok(None),
            other => other,
        }
    }

    /// Status line for the page
    pub fn status(&self) -> String {
        match self.board.outcome() {
            Some(Outcome::Draw) => "It's a draw!".to_string(),
            Some(Outcome::Win(mark)) => format!("Winner: {mark}"),
            None => format!("Your turn: {}", Mark::X),
        }
    }

    pub fn reset(&mut self) {
        self.board = Board::new();
    }
}
