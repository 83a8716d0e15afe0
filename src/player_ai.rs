use crate::{
    ai::{self, Difficulty},
    common::BoardError,
    game::GameSession,
};
use rand::rngs::SmallRng;

use crate::player::{Action, Player};

/// Computer player driven by the move engine at a fixed difficulty.
#[derive(Debug, Clone, Copy, Default)]
pub struct AiPlayer {
    difficulty: Difficulty,
}

impl AiPlayer {
    pub fn new(difficulty: Difficulty) -> Self {
        Self { difficulty }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
}

impl Player for AiPlayer {
    fn next_action(
        &mut self,
        rng: &mut SmallRng,
        session: &GameSession,
    ) -> Result<Action, BoardError> {
        ai::select_move(session.board(), self.difficulty, rng).map(Action::Move)
    }
}
