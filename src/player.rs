use crate::{
    common::{BoardError, Cell, GameOutcome, Mark},
    game::GameSession,
};
use rand::rngs::SmallRng;

/// What a player wants to do on its turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Place the current mark on a cell.
    Move(Cell),
    /// Clear the board and start over, keeping the score.
    NewGame,
    /// Advance to the next difficulty (resets the board).
    CycleDifficulty,
    /// Switch between two humans and human vs computer (resets the board).
    ToggleMode,
    /// Zero the score and start over.
    ResetScore,
    ShowScore,
    /// Print the engine's suggested move.
    Hint,
    /// Turn sound cues on or off.
    ToggleSound,
    Quit,
}

/// Interface implemented by different player types.
pub trait Player {
    /// Decide the next action for the side to move in `session`.
    fn next_action(
        &mut self,
        rng: &mut SmallRng,
        session: &GameSession,
    ) -> Result<Action, BoardError>;

    /// Inform the player of a move that was played, by either side.
    fn handle_move(&mut self, _mark: Mark, _cell: Cell, _outcome: GameOutcome) {}

    /// Inform the player that its last action was rejected.
    fn handle_rejected(&mut self, _error: &BoardError) {}
}

/// Let `x` and `o` alternate on `session` until the game ends.
///
/// A player returning anything other than [`Action::Move`] leaves the game,
/// in which case the unfinished outcome is returned.
pub fn play_game(
    session: &mut GameSession,
    x: &mut dyn Player,
    o: &mut dyn Player,
    rng: &mut SmallRng,
) -> Result<GameOutcome, BoardError> {
    loop {
        let outcome = session.outcome();
        if outcome.is_terminal() {
            return Ok(outcome);
        }
        let mark = session.turn();
        let player: &mut dyn Player = match mark {
            Mark::X => &mut *x,
            Mark::O => &mut *o,
        };
        let cell = match player.next_action(rng, session)? {
            Action::Move(cell) => cell,
            _ => return Ok(outcome),
        };
        let outcome = session.play(cell)?;
        x.handle_move(mark, cell, outcome);
        o.handle_move(mark, cell, outcome);
    }
}
