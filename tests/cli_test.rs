#[cfg(feature = "std")]
#[cfg(test)]
mod cli_tests {
    use std::io::Cursor;

    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use tictactoe::{
        coord_to_string, outcome_cue, parse_action, parse_coord, Action, Cell, CliPlayer, Cue,
        GameOutcome, GameSession, Player,
    };

    #[test]
    fn test_parse_coord_letter_number() {
        assert_eq!(parse_coord("A1"), Some(Cell::new(0, 0)));
        assert_eq!(parse_coord("b2"), Some(Cell::new(1, 1)));
        assert_eq!(parse_coord(" C3 "), Some(Cell::new(2, 2)));
        assert_eq!(parse_coord("C1"), Some(Cell::new(0, 2)));
    }

    #[test]
    fn test_parse_coord_row_col() {
        assert_eq!(parse_coord("1 3"), Some(Cell::new(0, 2)));
        assert_eq!(parse_coord("3,1"), Some(Cell::new(2, 0)));
        assert_eq!(parse_coord("2, 2"), Some(Cell::new(1, 1)));
    }

    #[test]
    fn test_parse_coord_rejects_garbage() {
        assert_eq!(parse_coord(""), None);
        assert_eq!(parse_coord("A0"), None);
        assert_eq!(parse_coord("0 1"), None);
        assert_eq!(parse_coord("1 2 3"), None);
        assert_eq!(parse_coord("xyz"), None);
    }

    #[test]
    fn test_parse_coord_keeps_far_cells_for_board_to_reject() {
        assert_eq!(parse_coord("D1"), Some(Cell::new(0, 3)));
        assert_eq!(parse_coord("4 4"), Some(Cell::new(3, 3)));
    }

    #[test]
    fn test_coord_to_string() {
        assert_eq!(coord_to_string(Cell::new(0, 0)), "A1");
        assert_eq!(coord_to_string(Cell::new(1, 2)), "C2");
        assert_eq!(parse_coord(&coord_to_string(Cell::new(2, 1))), Some(Cell::new(2, 1)));
    }

    #[test]
    fn test_parse_action_commands() {
        assert_eq!(parse_action("n"), Some(Action::NewGame));
        assert_eq!(parse_action("difficulty"), Some(Action::CycleDifficulty));
        assert_eq!(parse_action("M"), Some(Action::ToggleMode));
        assert_eq!(parse_action("r"), Some(Action::ResetScore));
        assert_eq!(parse_action("score"), Some(Action::ShowScore));
        assert_eq!(parse_action("h"), Some(Action::Hint));
        assert_eq!(parse_action("v"), Some(Action::ToggleSound));
        assert_eq!(parse_action("Sound"), Some(Action::ToggleSound));
        assert_eq!(parse_action("quit\n"), Some(Action::Quit));
        assert_eq!(parse_action("a3"), Some(Action::Move(Cell::new(2, 0))));
        assert_eq!(parse_action("???"), None);
    }

    #[test]
    fn test_outcome_cue() {
        assert_eq!(outcome_cue(GameOutcome::Draw), Some(Cue::Draw));
        assert_eq!(outcome_cue(GameOutcome::InProgress), None);
    }

    #[test]
    fn test_cli_player_reads_move() {
        let mut rng = SmallRng::seed_from_u64(1);
        let session = GameSession::new();
        let mut player = CliPlayer::with_input(Cursor::new("b3\n"), false);
        let action = player.next_action(&mut rng, &session).unwrap();
        assert_eq!(action, Action::Move(Cell::new(2, 1)));
    }

    #[test]
    fn test_cli_player_skips_invalid_input() {
        let mut rng = SmallRng::seed_from_u64(1);
        let session = GameSession::new();
        let mut player = CliPlayer::with_input(Cursor::new("banana\nq\n"), false);
        assert_eq!(player.next_action(&mut rng, &session).unwrap(), Action::Quit);
    }

    #[test]
    fn test_cli_player_empty_line_takes_suggestion() {
        let mut rng = SmallRng::seed_from_u64(1);
        let mut session = GameSession::new();
        session.apply_human_move(0, 0).unwrap();
        let mut player = CliPlayer::with_input(Cursor::new("\n"), false);
        // Medium answers a corner opening with the center.
        assert_eq!(
            player.next_action(&mut rng, &session).unwrap(),
            Action::Move(Cell::new(1, 1))
        );
    }

    #[test]
    fn test_cli_player_toggles_sound_at_runtime() {
        let mut rng = SmallRng::seed_from_u64(1);
        let session = GameSession::new();
        let mut player = CliPlayer::with_input(Cursor::new("v\nv\n"), false);
        assert!(!player.sound_enabled());

        assert_eq!(
            player.next_action(&mut rng, &session).unwrap(),
            Action::ToggleSound
        );
        assert!(player.toggle_sound());
        assert!(player.sound_enabled());

        assert_eq!(
            player.next_action(&mut rng, &session).unwrap(),
            Action::ToggleSound
        );
        assert!(!player.toggle_sound());
    }

    #[test]
    fn test_cli_player_quits_on_eof() {
        let mut rng = SmallRng::seed_from_u64(1);
        let session = GameSession::new();
        let mut player = CliPlayer::with_input(Cursor::new(""), false);
        assert_eq!(player.next_action(&mut rng, &session).unwrap(), Action::Quit);
    }
}
