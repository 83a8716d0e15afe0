use crate::common::Cell;

pub const BOARD_SIZE: u8 = 3;
pub const NUM_CELLS: usize = (BOARD_SIZE as usize) * (BOARD_SIZE as usize);
pub const NUM_LINES: usize = 8;

/// Winning lines in the order they are checked: rows top to bottom,
/// columns left to right, main diagonal, anti-diagonal.
pub const LINES: [[Cell; 3]; NUM_LINES] = [
    [Cell::new(0, 0), Cell::new(0, 1), Cell::new(0, 2)],
    [Cell::new(1, 0), Cell::new(1, 1), Cell::new(1, 2)],
    [Cell::new(2, 0), Cell::new(2, 1), Cell::new(2, 2)],
    [Cell::new(0, 0), Cell::new(1, 0), Cell::new(2, 0)],
    [Cell::new(0, 1), Cell::new(1, 1), Cell::new(2, 1)],
    [Cell::new(0, 2), Cell::new(1, 2), Cell::new(2, 2)],
    [Cell::new(0, 0), Cell::new(1, 1), Cell::new(2, 2)],
    [Cell::new(0, 2), Cell::new(1, 1), Cell::new(2, 0)],
];

pub const CENTER: Cell = Cell::new(1, 1);
pub const CORNERS: [Cell; 4] = [
    Cell::new(0, 0),
    Cell::new(0, 2),
    Cell::new(2, 0),
    Cell::new(2, 2),
];

/// Minimax score of a completed line, positive for the maximizing side.
pub const WIN_SCORE: i32 = 10;

/// Pause before the computer answers in the terminal game, in milliseconds.
pub const DEFAULT_AI_DELAY_MS: u64 = 600;
