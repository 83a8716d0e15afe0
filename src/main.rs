#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use tictactoe::{
    coord_to_string, init_logging, outcome_cue, play_cue, print_board, print_help, print_score,
    print_status, Action, AiPlayer, CliPlayer, Cue, Difficulty, GameSession, Mark, Mode, Player,
    DEFAULT_AI_DELAY_MS,
};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use tokio::time::{sleep, Duration};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play on this terminal, against a friend or the computer.
    Play {
        #[arg(long, value_enum, default_value_t = Mode::PlayerVsPlayer)]
        mode: Mode,
        #[arg(long, value_enum, default_value_t = Difficulty::Medium)]
        difficulty: Difficulty,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = DEFAULT_AI_DELAY_MS, help = "Pause before the computer moves")]
        ai_delay_ms: u64,
        #[arg(long, help = "Disable terminal bell cues")]
        no_sound: bool,
    },
    /// Watch the computer play itself.
    Watch {
        #[arg(long, value_enum, default_value_t = Difficulty::Hard)]
        x_difficulty: Difficulty,
        #[arg(long, value_enum, default_value_t = Difficulty::Hard)]
        o_difficulty: Difficulty,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = DEFAULT_AI_DELAY_MS, help = "Pause between moves")]
        ai_delay_ms: u64,
    },
}

#[cfg(feature = "std")]
fn make_rng(seed: Option<u64>) -> SmallRng {
    if let Some(s) = seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    }
}

#[cfg(feature = "std")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            mode,
            difficulty,
            seed,
            ai_delay_ms,
            no_sound,
        } => {
            let rng = make_rng(seed);
            let session = GameSession::with_settings(mode, difficulty);
            run_play(session, rng, Duration::from_millis(ai_delay_ms), !no_sound).await?;
        }
        Commands::Watch {
            x_difficulty,
            o_difficulty,
            seed,
            ai_delay_ms,
        } => {
            let rng = make_rng(seed);
            run_watch(
                AiPlayer::new(x_difficulty),
                AiPlayer::new(o_difficulty),
                rng,
                Duration::from_millis(ai_delay_ms),
            )
            .await?;
        }
    }
    Ok(())
}

/// Interactive loop. Human input and computer moves are strictly
/// sequential: the computer's pause is awaited before the next prompt.
#[cfg(feature = "std")]
async fn run_play(
    mut session: GameSession,
    mut rng: SmallRng,
    delay: Duration,
    sound: bool,
) -> anyhow::Result<()> {
    let mut human = CliPlayer::new(sound);
    println!("Tic-tac-toe: {} ({})", session.mode(), session.difficulty());
    print_help();
    play_cue(Cue::GameStart, human.sound_enabled());

    loop {
        println!();
        print_board(session.board());
        print_status(&session);

        if session.is_computer_turn() {
            sleep(delay).await;
            let mark = session.turn();
            let (cell, outcome) = session
                .play_computer_move(&mut rng)
                .map_err(|e| anyhow::anyhow!(e))?;
            human.handle_move(mark, cell, outcome);
            play_cue(
                outcome_cue(outcome).unwrap_or(Cue::Move),
                human.sound_enabled(),
            );
            continue;
        }

        if session.outcome().is_terminal() {
            print_score(&session.score());
            println!("Press n for a new game or q to quit.");
        }

        let action = human
            .next_action(&mut rng, &session)
            .map_err(|e| anyhow::anyhow!(e))?;
        match action {
            Action::Move(cell) => {
                let mark = session.turn();
                match session.apply_human_move(cell.row, cell.col) {
                    Ok(outcome) => {
                        human.handle_move(mark, cell, outcome);
                        play_cue(
                            outcome_cue(outcome).unwrap_or(Cue::Move),
                            human.sound_enabled(),
                        );
                    }
                    Err(e) => human.handle_rejected(&e),
                }
            }
            Action::NewGame => {
                session.reset_board();
                play_cue(Cue::GameStart, human.sound_enabled());
            }
            Action::CycleDifficulty => {
                println!("Difficulty: {}", session.cycle_difficulty());
            }
            Action::ToggleMode => {
                println!("Mode: {}", session.toggle_mode());
            }
            Action::ResetScore => {
                session.reset_score();
                print_score(&session.score());
            }
            Action::ShowScore => print_score(&session.score()),
            Action::Hint => match session.request_computer_move(Difficulty::Hard, &mut rng) {
                Ok(cell) => println!("Hint: {}", coord_to_string(cell)),
                Err(e) => println!("No hint: {}", e),
            },
            Action::ToggleSound => {
                let on = human.toggle_sound();
                println!("Sound: {}", if on { "on" } else { "off" });
                play_cue(Cue::Move, on);
            }
            Action::Quit => break,
        }
    }

    print_score(&session.score());
    Ok(())
}

#[cfg(feature = "std")]
async fn run_watch(
    mut x: AiPlayer,
    mut o: AiPlayer,
    mut rng: SmallRng,
    delay: Duration,
) -> anyhow::Result<()> {
    let mut session = GameSession::new();
    println!("X ({}) vs O ({})", x.difficulty(), o.difficulty());
    print_board(session.board());

    while !session.outcome().is_terminal() {
        sleep(delay).await;
        let mark = session.turn();
        let player: &mut dyn Player = match mark {
            Mark::X => &mut x,
            Mark::O => &mut o,
        };
        let action = player
            .next_action(&mut rng, &session)
            .map_err(|e| anyhow::anyhow!(e))?;
        let Action::Move(cell) = action else {
            break;
        };
        session.play(cell).map_err(|e| anyhow::anyhow!(e))?;
        println!("\n{} plays {}", mark, coord_to_string(cell));
        print_board(session.board());
    }

    print_status(&session);
    Ok(())
}
