use proptest::prelude::*;
use tictactoe::{Board, BoardError, Cell, GameOutcome, Mark};

/// Play alternating moves, each picked by index among the empty cells,
/// stopping early once the game is decided.
fn reachable_board(choices: &[usize]) -> Board {
    let mut board = Board::new();
    for &choice in choices {
        if board.evaluate().is_terminal() {
            break;
        }
        let empty: Vec<Cell> = board.empty_cells().collect();
        let cell = empty[choice % empty.len()];
        board.place(cell.row, cell.col, board.turn()).unwrap();
    }
    board
}

fn completed_lines(board: &Board, mark: Mark) -> usize {
    tictactoe::Line::all()
        .filter(|line| {
            line.cells()
                .iter()
                .all(|c| board.get(c.row, c.col).unwrap() == Some(mark))
        })
        .count()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn reachable_boards_are_consistent(choices in prop::collection::vec(0usize..9, 0..9)) {
        let board = reachable_board(&choices);
        prop_assert!(board.is_consistent());
        let x = board.count(Mark::X);
        let o = board.count(Mark::O);
        prop_assert_eq!(board.empty_cells().count(), 9 - x - o);
    }

    #[test]
    fn at_most_one_winning_mark(choices in prop::collection::vec(0usize..9, 0..9)) {
        let board = reachable_board(&choices);
        let x_lines = completed_lines(&board, Mark::X);
        let o_lines = completed_lines(&board, Mark::O);
        prop_assert!(x_lines == 0 || o_lines == 0);
        match board.evaluate() {
            GameOutcome::Win { mark: Mark::X, .. } => prop_assert!(x_lines > 0),
            GameOutcome::Win { mark: Mark::O, .. } => prop_assert!(o_lines > 0),
            _ => prop_assert_eq!(x_lines + o_lines, 0),
        }
    }

    #[test]
    fn place_on_occupied_never_mutates(
        choices in prop::collection::vec(0usize..9, 1..9),
        pick in 0usize..9,
        as_x in any::<bool>(),
    ) {
        let mut board = reachable_board(&choices);
        let occupied: Vec<Cell> = (0..9)
            .map(|i| Cell::new(i / 3, i % 3))
            .filter(|c| !board.is_empty(c.row, c.col))
            .collect();
        let cell = occupied[pick % occupied.len()];
        let before = board;
        let mark = if as_x { Mark::X } else { Mark::O };
        let err = board.place(cell.row, cell.col, mark).unwrap_err();
        prop_assert_eq!(err, BoardError::CellOccupied { row: cell.row, col: cell.col });
        prop_assert_eq!(board, before);
    }

    #[test]
    fn hypothetical_move_then_clear_is_identity(
        choices in prop::collection::vec(0usize..9, 0..8),
        pick in 0usize..9,
    ) {
        let mut board = reachable_board(&choices);
        prop_assume!(!board.is_full());
        let empty: Vec<Cell> = board.empty_cells().collect();
        let cell = empty[pick % empty.len()];
        let before = board;
        board.place(cell.row, cell.col, board.turn()).unwrap();
        board.clear(cell.row, cell.col).unwrap();
        prop_assert_eq!(board, before);
        prop_assert_eq!(board.to_string(), before.to_string());
    }

}
