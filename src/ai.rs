// Move selection for the computer opponent.
// Works on board copies and never allocates, so it runs without std.

use crate::{
    board::Board,
    common::{BoardError, Cell, GameOutcome, Mark},
    config::{CENTER, CORNERS, WIN_SCORE},
};
use core::fmt;
use log::debug;
use rand::seq::IteratorRandom;
use rand::Rng;

/// Strength of the computer opponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "std",
    derive(serde::Serialize, serde::Deserialize, clap::ValueEnum),
    serde(rename_all = "lowercase")
)]
pub enum Difficulty {
    /// Uniformly random empty cell.
    Easy,
    /// Win, block, center, corner, then random.
    #[default]
    Medium,
    /// Exhaustive minimax; never loses.
    Hard,
}

impl Difficulty {
    /// Next level in the Easy → Medium → Hard → Easy cycle.
    pub fn next(self) -> Difficulty {
        match self {
            Difficulty::Easy => Difficulty::Medium,
            Difficulty::Medium => Difficulty::Hard,
            Difficulty::Hard => Difficulty::Easy,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Choose a move for the side to play on `board`.
pub fn select_move<R: Rng + ?Sized>(
    board: &Board,
    difficulty: Difficulty,
    rng: &mut R,
) -> Result<Cell, BoardError> {
    select_move_for(board, board.turn(), difficulty, rng)
}

/// Choose a move for `mark` on `board`, regardless of whose turn it is.
///
/// Fails with [`BoardError::NoMoveAvailable`] when the board is full or
/// already won.
pub fn select_move_for<R: Rng + ?Sized>(
    board: &Board,
    mark: Mark,
    difficulty: Difficulty,
    rng: &mut R,
) -> Result<Cell, BoardError> {
    if board.evaluate().is_terminal() {
        return Err(BoardError::NoMoveAvailable);
    }
    let cell = match difficulty {
        Difficulty::Easy => easy_move(board, rng)?,
        Difficulty::Medium => medium_move(board, mark, rng)?,
        Difficulty::Hard => hard_move(board, mark)?,
    };
    debug!("{} ({}) plays {} on {}", mark, difficulty, cell, board);
    Ok(cell)
}

/// Uniformly random empty cell.
pub fn easy_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Result<Cell, BoardError> {
    board
        .empty_cells()
        .choose(rng)
        .ok_or(BoardError::NoMoveAvailable)
}

/// Rule-based move: first rule that applies wins, ties go to row-major order.
pub fn medium_move<R: Rng + ?Sized>(
    board: &Board,
    mark: Mark,
    rng: &mut R,
) -> Result<Cell, BoardError> {
    if let Some(cell) = board.empty_cells().find(|&c| board.completes_line(c, mark)) {
        debug!("medium: winning at {}", cell);
        return Ok(cell);
    }
    let opponent = mark.opponent();
    if let Some(cell) = board.empty_cells().find(|&c| board.completes_line(c, opponent)) {
        debug!("medium: blocking at {}", cell);
        return Ok(cell);
    }
    if board.is_empty(CENTER.row, CENTER.col) {
        return Ok(CENTER);
    }
    if let Some(corner) = CORNERS
        .iter()
        .copied()
        .filter(|c| board.is_empty(c.row, c.col))
        .choose(rng)
    {
        return Ok(corner);
    }
    easy_move(board, rng)
}

/// Minimax move: first cell, row-major, with the highest score.
pub fn hard_move(board: &Board, mark: Mark) -> Result<Cell, BoardError> {
    let mut best: Option<(Cell, i32)> = None;
    for (cell, score) in move_scores(board, mark) {
        if best.map_or(true, |(_, top)| score > top) {
            best = Some((cell, score));
        }
    }
    let (cell, score) = best.ok_or(BoardError::NoMoveAvailable)?;
    debug!("hard: best score {} at {}", score, cell);
    Ok(cell)
}

/// Minimax score of every empty cell as `mark`'s next move, row-major.
///
/// `+WIN_SCORE` means `mark` forces a win, `-WIN_SCORE` a forced loss and
/// `0` a draw with best play.
pub fn move_scores(board: &Board, mark: Mark) -> impl Iterator<Item = (Cell, i32)> {
    board
        .successors(mark)
        .map(move |(cell, next)| (cell, minimax(&next, mark, mark.opponent())))
}

/// Full-depth minimax without pruning. `maximizer` is fixed for the whole
/// search; `active` is the mark about to play on `board`.
pub fn minimax(board: &Board, maximizer: Mark, active: Mark) -> i32 {
    match board.evaluate() {
        GameOutcome::Win { mark, .. } if mark == maximizer => WIN_SCORE,
        GameOutcome::Win { .. } => -WIN_SCORE,
        GameOutcome::Draw => 0,
        GameOutcome::InProgress => {
            let scores = board
                .successors(active)
                .map(|(_, next)| minimax(&next, maximizer, active.opponent()));
            let best = if active == maximizer {
                scores.max()
            } else {
                scores.min()
            };
            best.unwrap_or(0)
        }
    }
}
