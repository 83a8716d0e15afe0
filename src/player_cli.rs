#![cfg(feature = "std")]

use std::io::{self, BufRead, StdinLock, Write};
use std::string::String;

use crate::{
    ai::{self, Difficulty},
    board::Board,
    common::{BoardError, Cell, GameOutcome, Mark},
    config::BOARD_SIZE,
    game::{GameSession, Score},
};
use log::warn;
use rand::rngs::SmallRng;

use crate::player::{Action, Player};

/// Audible feedback, played as terminal bells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    GameStart,
    Move,
    Error,
    Win,
    Draw,
}

impl Cue {
    fn bells(self) -> usize {
        match self {
            Cue::Move | Cue::Error => 1,
            Cue::GameStart | Cue::Draw => 2,
            Cue::Win => 3,
        }
    }
}

/// Ring the terminal bell for `cue` when sound is enabled.
pub fn play_cue(cue: Cue, enabled: bool) {
    if !enabled {
        return;
    }
    let mut out = io::stdout();
    let _ = write!(out, "{}", "\x07".repeat(cue.bells()));
    let _ = out.flush();
}

/// Cue matching a game outcome, if any.
pub fn outcome_cue(outcome: GameOutcome) -> Option<Cue> {
    match outcome {
        GameOutcome::Win { .. } => Some(Cue::Win),
        GameOutcome::Draw => Some(Cue::Draw),
        GameOutcome::InProgress => None,
    }
}

/// `A1`-style name of a cell: column letter, then 1-based row.
pub fn coord_to_string(cell: Cell) -> String {
    let col = (b'A' + cell.col as u8) as char;
    std::format!("{}{}", col, cell.row + 1)
}

/// Parse `B2` (column letter, 1-based row) or `2 2` / `2,2` (1-based row
/// and column). Coordinates past the board are returned as-is so the board
/// can reject them.
pub fn parse_coord(input: &str) -> Option<Cell> {
    let input = input.trim();
    let mut chars = input.chars();
    let first = chars.next()?;
    if first.is_ascii_alphabetic() {
        let col = (first.to_ascii_uppercase() as u8).checked_sub(b'A')? as usize;
        let row: usize = chars.as_str().trim().parse().ok()?;
        return row.checked_sub(1).map(|row| Cell::new(row, col));
    }
    let mut parts = input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|p| !p.is_empty());
    let row: usize = parts.next()?.parse().ok()?;
    let col: usize = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(Cell::new(row.checked_sub(1)?, col.checked_sub(1)?))
}

/// Parse one line of player input into an action.
pub fn parse_action(input: &str) -> Option<Action> {
    match input.trim().to_ascii_lowercase().as_str() {
        "n" | "new" => Some(Action::NewGame),
        "d" | "difficulty" => Some(Action::CycleDifficulty),
        "m" | "mode" => Some(Action::ToggleMode),
        "r" | "reset" => Some(Action::ResetScore),
        "s" | "score" => Some(Action::ShowScore),
        "h" | "hint" => Some(Action::Hint),
        "v" | "sound" => Some(Action::ToggleSound),
        "q" | "quit" | "exit" => Some(Action::Quit),
        other => parse_coord(other).map(Action::Move),
    }
}

/// Print the board with column letters and row numbers. Cells of the
/// winning line are bracketed.
pub fn print_board(board: &Board) {
    let winning = match board.evaluate() {
        GameOutcome::Win { line, .. } => Some(line.cells()),
        _ => None,
    };
    print!("   ");
    for c in 0..BOARD_SIZE as usize {
        let ch = (b'A' + c as u8) as char;
        print!(" {} ", ch);
    }
    println!();
    for r in 0..BOARD_SIZE as usize {
        print!("{:2} ", r + 1);
        for c in 0..BOARD_SIZE as usize {
            let ch = match board.get(r, c) {
                Ok(Some(mark)) => mark.symbol(),
                _ => '.',
            };
            let cell = Cell::new(r, c);
            if winning.is_some_and(|cells| cells.contains(&cell)) {
                print!("[{}]", ch);
            } else {
                print!(" {} ", ch);
            }
        }
        println!();
    }
}

pub fn print_score(score: &Score) {
    println!(
        "Score  X: {}  O: {}  Draws: {}",
        score.wins_x, score.wins_o, score.draws
    );
}

/// One-line status: whose turn it is, or how the game ended.
pub fn print_status(session: &GameSession) {
    match session.outcome() {
        GameOutcome::Win { mark, line } => {
            println!("{} wins on the {}!", mark, line.name());
        }
        GameOutcome::Draw => println!("Draw, the board is full."),
        GameOutcome::InProgress if session.is_computer_turn() => {
            println!("Computer ({}) is thinking...", session.difficulty());
        }
        GameOutcome::InProgress => println!("{} to move.", session.turn()),
    }
}

pub fn print_help() {
    println!("Enter a cell as B2 or \"2 2\" (row column).");
    println!(
        "Commands: n new game, d difficulty, m mode, r reset score, s score, h hint, v sound, q quit."
    );
}

/// Human player typing on a terminal (or any line-based reader).
pub struct CliPlayer<R = StdinLock<'static>> {
    input: R,
    sound: bool,
}

impl CliPlayer {
    pub fn new(sound: bool) -> Self {
        Self {
            input: io::stdin().lock(),
            sound,
        }
    }
}

impl<R: BufRead> CliPlayer<R> {
    pub fn with_input(input: R, sound: bool) -> Self {
        Self { input, sound }
    }

    pub fn sound_enabled(&self) -> bool {
        self.sound
    }

    /// Flip sound cues and return the new setting.
    pub fn toggle_sound(&mut self) -> bool {
        self.sound = !self.sound;
        self.sound
    }

    fn read_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line),
            Err(e) => {
                warn!("failed to read input: {}", e);
                None
            }
        }
    }
}

impl<R: BufRead> Player for CliPlayer<R> {
    fn next_action(
        &mut self,
        rng: &mut SmallRng,
        session: &GameSession,
    ) -> Result<Action, BoardError> {
        let suggestion = ai::select_move(session.board(), Difficulty::Medium, rng).ok();
        loop {
            match suggestion {
                Some(cell) => print!("{} [{}]> ", session.turn(), coord_to_string(cell)),
                None => print!("> "),
            }
            let _ = io::stdout().flush();
            let Some(line) = self.read_line() else {
                return Ok(Action::Quit);
            };
            if line.trim().is_empty() {
                if let Some(cell) = suggestion {
                    return Ok(Action::Move(cell));
                }
                continue;
            }
            match parse_action(&line) {
                Some(action) => return Ok(action),
                None => {
                    println!("Invalid input");
                    play_cue(Cue::Error, self.sound);
                }
            }
        }
    }

    fn handle_move(&mut self, mark: Mark, cell: Cell, _outcome: GameOutcome) {
        println!("{} plays {}", mark, coord_to_string(cell));
    }

    fn handle_rejected(&mut self, error: &BoardError) {
        println!("Error: {}", error);
        play_cue(Cue::Error, self.sound);
    }
}
