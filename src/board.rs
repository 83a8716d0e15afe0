//! Game board state: one bitboard per mark.

use crate::bitboard::BitBoard;
use crate::common::{BoardError, Cell, GameOutcome, Line, Mark};
use crate::config::{BOARD_SIZE, NUM_CELLS};
use core::fmt;
use core::str::FromStr;

type BB = BitBoard<u16, { BOARD_SIZE as usize }>;

/// A 3×3 tic-tac-toe board.
///
/// The board is `Copy`: search code takes hypothetical moves on copies
/// (see [`Board::with_mark`]) instead of mutating and reverting a shared
/// board.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Board {
    x: BB,
    o: BB,
}

fn line_mask(line: Line) -> BB {
    let raw = line
        .cells()
        .iter()
        .fold(0u16, |acc, cell| acc | (1u16 << cell.index()));
    BB::from_raw(raw)
}

impl Board {
    /// Create an empty board.
    pub fn new() -> Self {
        Board {
            x: BB::new(),
            o: BB::new(),
        }
    }

    /// Remove every mark.
    pub fn reset(&mut self) {
        self.x.clear_all();
        self.o.clear_all();
    }

    /// Bitboard of the cells holding `mark`.
    pub fn marks(&self, mark: Mark) -> BB {
        match mark {
            Mark::X => self.x,
            Mark::O => self.o,
        }
    }

    fn marks_mut(&mut self, mark: Mark) -> &mut BB {
        match mark {
            Mark::X => &mut self.x,
            Mark::O => &mut self.o,
        }
    }

    /// Bitboard of all occupied cells.
    pub fn occupied(&self) -> BB {
        self.x | self.o
    }

    /// Number of cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.marks(mark).count_ones()
    }

    /// Mark to play next: X when both sides have played equally often.
    pub fn turn(&self) -> Mark {
        if self.count(Mark::X) > self.count(Mark::O) {
            Mark::O
        } else {
            Mark::X
        }
    }

    /// Whether the mark counts could come from alternating play with X first.
    pub fn is_consistent(&self) -> bool {
        let (x, o) = (self.count(Mark::X), self.count(Mark::O));
        x == o || x == o + 1
    }

    /// The mark at (row, col), if any.
    pub fn get(&self, row: usize, col: usize) -> Result<Option<Mark>, BoardError> {
        if self.x.get(row, col)? {
            Ok(Some(Mark::X))
        } else if self.o.get(row, col)? {
            Ok(Some(Mark::O))
        } else {
            Ok(None)
        }
    }

    /// True if (row, col) is on the board and unmarked.
    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        matches!(self.get(row, col), Ok(None))
    }

    /// True when no empty cell remains.
    pub fn is_full(&self) -> bool {
        self.occupied().count_ones() == NUM_CELLS
    }

    /// Empty cells in row-major order, recomputed on every call.
    pub fn empty_cells(&self) -> impl ExactSizeIterator<Item = Cell> + Clone {
        (!self.occupied()).iter_set_bits().map(Cell::from)
    }

    /// Put `mark` on (row, col).
    ///
    /// Fails without touching the board if the coordinates are off the
    /// board or the cell is already taken. Turn order is not checked here.
    pub fn place(&mut self, row: usize, col: usize, mark: Mark) -> Result<(), BoardError> {
        if self.get(row, col)?.is_some() {
            return Err(BoardError::CellOccupied { row, col });
        }
        self.marks_mut(mark).set(row, col)?;
        Ok(())
    }

    /// Remove the mark on (row, col), returning what was there.
    pub fn clear(&mut self, row: usize, col: usize) -> Result<Option<Mark>, BoardError> {
        let previous = self.get(row, col)?;
        if let Some(mark) = previous {
            self.marks_mut(mark).clear(row, col)?;
        }
        Ok(previous)
    }

    /// A copy of this board with `mark` placed on `cell`.
    pub fn with_mark(&self, cell: Cell, mark: Mark) -> Result<Board, BoardError> {
        let mut next = *self;
        next.place(cell.row, cell.col, mark)?;
        Ok(next)
    }

    /// Every board reachable by `mark` playing one empty cell, row-major.
    pub fn successors(&self, mark: Mark) -> impl Iterator<Item = (Cell, Board)> {
        let board = *self;
        self.empty_cells()
            .filter_map(move |cell| board.with_mark(cell, mark).ok().map(|next| (cell, next)))
    }

    /// True if placing `mark` on the empty `cell` completes a line for it.
    pub fn completes_line(&self, cell: Cell, mark: Mark) -> bool {
        match self.with_mark(cell, mark) {
            Ok(next) => next.evaluate().winner() == Some(mark),
            Err(_) => false,
        }
    }

    /// Check all lines in fixed order, then fullness.
    pub fn evaluate(&self) -> GameOutcome {
        for line in Line::all() {
            let mask = line_mask(line);
            for mark in [Mark::X, Mark::O] {
                if self.marks(mark).contains(mask) {
                    return GameOutcome::Win { mark, line };
                }
            }
        }
        if self.is_full() {
            GameOutcome::Draw
        } else {
            GameOutcome::InProgress
        }
    }

    fn symbol_at(&self, row: usize, col: usize) -> char {
        match self.get(row, col) {
            Ok(Some(mark)) => mark.symbol(),
            _ => '_',
        }
    }
}

/// Compact picture, e.g. `XX_/OO_/___`. Parses back with [`str::parse`].
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = BOARD_SIZE as usize;
        for r in 0..size {
            for c in 0..size {
                write!(f, "{}", self.symbol_at(r, c))?;
            }
            if r + 1 < size {
                write!(f, "/")?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({})", self)
    }
}

impl FromStr for Board {
    type Err = BoardError;

    /// Accepts `X`, `O`, and `_`, `.` or `-` for empty cells. Whitespace,
    /// `/` and `|` are ignored. Mark counts are not validated.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut board = Board::new();
        let mut idx = 0usize;
        for ch in s.chars() {
            if ch.is_whitespace() || ch == '/' || ch == '|' {
                continue;
            }
            if idx >= NUM_CELLS {
                return Err(BoardError::ParseError);
            }
            let (row, col) = (idx / BOARD_SIZE as usize, idx % BOARD_SIZE as usize);
            match ch {
                'X' | 'x' => board.place(row, col, Mark::X)?,
                'O' | 'o' => board.place(row, col, Mark::O)?,
                '_' | '.' | '-' => {}
                _ => return Err(BoardError::ParseError),
            }
            idx += 1;
        }
        if idx != NUM_CELLS {
            return Err(BoardError::ParseError);
        }
        Ok(board)
    }
}
