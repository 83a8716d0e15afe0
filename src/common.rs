//! Common types for tic-tac-toe: marks, cells, lines, outcomes and errors.

use crate::bitboard::BitBoardError;
use crate::config::{BOARD_SIZE, LINES};
use core::fmt;

/// A player's mark. X always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// The other mark.
    pub fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A `(row, col)` coordinate on the board, zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Row-major index of the cell, `row * 3 + col`.
    pub fn index(self) -> usize {
        self.row * BOARD_SIZE as usize + self.col
    }

    /// True for the four corner cells.
    pub fn is_corner(self) -> bool {
        let last = BOARD_SIZE as usize - 1;
        (self.row == 0 || self.row == last) && (self.col == 0 || self.col == last)
    }
}

impl From<(usize, usize)> for Cell {
    fn from((row, col): (usize, usize)) -> Self {
        Cell::new(row, col)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One of the eight winning lines, by position in [`LINES`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Line(usize);

impl Line {
    pub const TOP_ROW: Line = Line(0);
    pub const MIDDLE_ROW: Line = Line(1);
    pub const BOTTOM_ROW: Line = Line(2);
    pub const LEFT_COLUMN: Line = Line(3);
    pub const MIDDLE_COLUMN: Line = Line(4);
    pub const RIGHT_COLUMN: Line = Line(5);
    pub const DIAGONAL: Line = Line(6);
    pub const ANTI_DIAGONAL: Line = Line(7);

    /// All lines in evaluation order.
    pub fn all() -> impl Iterator<Item = Line> {
        (0..LINES.len()).map(Line)
    }

    pub fn index(self) -> usize {
        self.0
    }

    pub fn cells(self) -> [Cell; 3] {
        LINES[self.0]
    }

    pub fn name(self) -> &'static str {
        match self.0 {
            0 => "top row",
            1 => "middle row",
            2 => "bottom row",
            3 => "left column",
            4 => "middle column",
            5 => "right column",
            6 => "diagonal",
            _ => "anti-diagonal",
        }
    }
}

/// Result of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    InProgress,
    /// `mark` completed `line`; the first completed line in check order.
    Win { mark: Mark, line: Line },
    /// Board is full and no line is complete.
    Draw,
}

impl GameOutcome {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameOutcome::InProgress)
    }

    pub fn winner(&self) -> Option<Mark> {
        match self {
            GameOutcome::Win { mark, .. } => Some(*mark),
            _ => None,
        }
    }
}

/// Errors returned by board, engine and session operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Row or column outside `[0, 2]`.
    OutOfRange { row: usize, col: usize },
    /// The target cell already holds a mark.
    CellOccupied { row: usize, col: usize },
    /// The engine was asked to move on a full or finished board.
    NoMoveAvailable,
    /// A move was attempted after the game ended.
    GameOver,
    /// A human move was attempted while the computer is to play.
    OutOfTurn,
    /// A board picture could not be parsed.
    ParseError,
}

impl From<BitBoardError> for BoardError {
    fn from(err: BitBoardError) -> Self {
        let BitBoardError::IndexOutOfBounds { row, col } = err;
        BoardError::OutOfRange { row, col }
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfRange { row, col } => {
                write!(f, "Cell ({}, {}) is outside the board", row, col)
            }
            BoardError::CellOccupied { row, col } => {
                write!(f, "Cell ({}, {}) is already taken", row, col)
            }
            BoardError::NoMoveAvailable => write!(f, "No move available on a finished board"),
            BoardError::GameOver => write!(f, "The game is already over"),
            BoardError::OutOfTurn => write!(f, "It is not your turn"),
            BoardError::ParseError => write!(f, "Board picture could not be parsed"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
