use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;
use tictactoe::{init_logging, play_game, AiPlayer, Difficulty, GameSession, Mode};

fn parse_difficulty(arg: &str) -> anyhow::Result<Difficulty> {
    match arg.to_ascii_lowercase().as_str() {
        "easy" => Ok(Difficulty::Easy),
        "medium" => Ok(Difficulty::Medium),
        "hard" => Ok(Difficulty::Hard),
        other => Err(anyhow::anyhow!("unknown difficulty: {}", other)),
    }
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 4 || args.len() > 5 {
        eprintln!(
            "Usage: {} <x-difficulty> <o-difficulty> <games> [seed]",
            args[0]
        );
        std::process::exit(1);
    }
    let x_difficulty = parse_difficulty(&args[1])?;
    let o_difficulty = parse_difficulty(&args[2])?;
    let games: u32 = args[3].parse()?;
    let seed: u64 = match args.get(4) {
        Some(s) => s.parse()?,
        None => 0,
    };

    let mut rng = SmallRng::seed_from_u64(seed);
    let mut x = AiPlayer::new(x_difficulty);
    let mut o = AiPlayer::new(o_difficulty);
    let mut session = GameSession::with_settings(Mode::PlayerVsPlayer, x_difficulty);

    for _ in 0..games {
        session.reset_board();
        play_game(&mut session, &mut x, &mut o, &mut rng).map_err(|e| anyhow::anyhow!(e))?;
    }

    let result = json!({
        "x": x_difficulty,
        "o": o_difficulty,
        "games": games,
        "seed": seed,
        "score": session.score(),
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
