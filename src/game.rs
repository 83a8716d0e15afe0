use crate::{
    ai::{self, Difficulty},
    board::Board,
    common::{BoardError, Cell, GameOutcome, Mark},
};
use core::fmt;
use log::{debug, info};
use rand::Rng;

/// Who plays O. In `PlayerVsAi` the human is always X.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(clap::ValueEnum))]
pub enum Mode {
    /// Two humans share the board.
    #[default]
    #[cfg_attr(feature = "std", value(name = "pvp"))]
    PlayerVsPlayer,
    /// The computer answers every human move.
    #[cfg_attr(feature = "std", value(name = "pvai"))]
    PlayerVsAi,
}

impl Mode {
    pub fn toggle(self) -> Mode {
        match self {
            Mode::PlayerVsPlayer => Mode::PlayerVsAi,
            Mode::PlayerVsAi => Mode::PlayerVsPlayer,
        }
    }

    /// Mark played by the computer in this mode, if any.
    pub fn computer_mark(self) -> Option<Mark> {
        match self {
            Mode::PlayerVsPlayer => None,
            Mode::PlayerVsAi => Some(Mark::O),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::PlayerVsPlayer => f.write_str("player vs player"),
            Mode::PlayerVsAi => f.write_str("player vs computer"),
        }
    }
}

/// Running totals across games. Survives board resets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Score {
    pub wins_x: u32,
    pub wins_o: u32,
    pub draws: u32,
}

impl Score {
    /// Count a finished game. `InProgress` is ignored.
    pub fn record(&mut self, outcome: GameOutcome) {
        match outcome {
            GameOutcome::Win { mark: Mark::X, .. } => self.wins_x += 1,
            GameOutcome::Win { mark: Mark::O, .. } => self.wins_o += 1,
            GameOutcome::Draw => self.draws += 1,
            GameOutcome::InProgress => {}
        }
    }

    pub fn total(&self) -> u32 {
        self.wins_x + self.wins_o + self.draws
    }

    pub fn as_tuple(&self) -> (u32, u32, u32) {
        (self.wins_x, self.wins_o, self.draws)
    }
}

/// One player's session: the live board plus score, difficulty and mode.
///
/// Every method runs to completion before returning, so a caller that
/// awaits each call cannot interleave a human move with a computer move.
#[derive(Debug, Clone, Default)]
pub struct GameSession {
    board: Board,
    score: Score,
    difficulty: Difficulty,
    mode: Mode,
}

impl GameSession {
    /// Empty board, zero score, medium difficulty, player vs player.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(mode: Mode, difficulty: Difficulty) -> Self {
        Self {
            board: Board::new(),
            score: Score::default(),
            difficulty,
            mode,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Mark to play next.
    pub fn turn(&self) -> Mark {
        self.board.turn()
    }

    pub fn outcome(&self) -> GameOutcome {
        self.board.evaluate()
    }

    /// True when the session is waiting on the computer.
    pub fn is_computer_turn(&self) -> bool {
        self.mode.computer_mark() == Some(self.board.turn()) && !self.outcome().is_terminal()
    }

    /// Place the current turn's mark on (row, col) for a human player.
    ///
    /// Terminal outcomes are added to the score before returning.
    pub fn apply_human_move(&mut self, row: usize, col: usize) -> Result<GameOutcome, BoardError> {
        if self.is_computer_turn() {
            return Err(BoardError::OutOfTurn);
        }
        self.play(Cell::new(row, col))
    }

    /// The engine's choice for the side to move. Does not touch the board.
    pub fn request_computer_move<R: Rng + ?Sized>(
        &self,
        difficulty: Difficulty,
        rng: &mut R,
    ) -> Result<Cell, BoardError> {
        ai::select_move(&self.board, difficulty, rng)
    }

    /// Ask the engine for a move at the session difficulty and play it.
    pub fn play_computer_move<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<(Cell, GameOutcome), BoardError> {
        let cell = self.request_computer_move(self.difficulty, rng)?;
        let outcome = self.play(cell)?;
        Ok((cell, outcome))
    }

    /// Place the current turn's mark on `cell` without any mode check.
    pub fn play(&mut self, cell: Cell) -> Result<GameOutcome, BoardError> {
        if self.outcome().is_terminal() {
            return Err(BoardError::GameOver);
        }
        let mark = self.board.turn();
        self.board.place(cell.row, cell.col, mark)?;
        debug!("{} played {}: {}", mark, cell, self.board);
        let outcome = self.board.evaluate();
        if outcome.is_terminal() {
            self.increment_score(outcome);
        }
        Ok(outcome)
    }

    /// Clear the board for a new game. The score is kept.
    pub fn reset_board(&mut self) {
        self.board.reset();
        debug!("board reset");
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn increment_score(&mut self, outcome: GameOutcome) {
        self.score.record(outcome);
        debug!(
            "game over: {:?}; score X {} / O {} / draws {}",
            outcome, self.score.wins_x, self.score.wins_o, self.score.draws
        );
    }

    /// Zero the score and start a new game.
    pub fn reset_score(&mut self) {
        self.score = Score::default();
        self.reset_board();
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        info!("difficulty set to {}", difficulty);
        self.reset_board();
    }

    pub fn cycle_difficulty(&mut self) -> Difficulty {
        self.set_difficulty(self.difficulty.next());
        self.difficulty
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
        info!("mode set to {}", mode);
        self.reset_board();
    }

    pub fn toggle_mode(&mut self) -> Mode {
        self.set_mode(self.mode.toggle());
        self.mode
    }
}
