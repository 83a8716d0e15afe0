//! Commonly used types and utilities for ease of import.

pub use crate::{
    select_move, AiPlayer, Board, BoardError, Cell, Difficulty, GameOutcome, GameSession, Mark,
    Mode, Player, Score,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, print_board, print_status, CliPlayer};
