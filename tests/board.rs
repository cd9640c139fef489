use tictactoe_console::board::{Board, NUM_COLS, NUM_ROWS, Player, Position};

fn pos(p: u8) -> Position {
    Position::new(p).expect("test position out of range")
}

/// Board with the given positions occupied by the given player
fn board_with(positions: &[u8], player: Player) -> Board {
    let mut board = Board::new();
    for &p in positions {
        board.apply_move(pos(p), player);
    }
    board
}

#[test]
fn new_board_is_empty() {
    let board = Board::new();
    for p in 1..=9 {
        assert_eq!(board[pos(p)], None);
    }
    assert!(!board.has_won());
    assert!(!board.has_drawn());
    assert_eq!(board.empty_positions().count(), NUM_ROWS * NUM_COLS);
}

#[test]
fn position_rejects_out_of_range() {
    assert!(Position::new(0).is_err());
    assert!(Position::new(10).is_err());
    assert!(Position::new(255).is_err());
    for p in 1..=9 {
        assert!(Position::new(p).is_ok());
    }
}

#[test]
fn position_maps_to_row_and_column() {
    // Linear positions run left to right, top to bottom
    assert_eq!((pos(1).row(), pos(1).col()), (0, 0));
    assert_eq!((pos(3).row(), pos(3).col()), (0, 2));
    assert_eq!((pos(5).row(), pos(5).col()), (1, 1));
    assert_eq!((pos(7).row(), pos(7).col()), (2, 0));
    assert_eq!((pos(9).row(), pos(9).col()), (2, 2));
}

#[test]
fn move_on_empty_cell_changes_only_that_cell() {
    for p in 1..=9 {
        let mut board = Board::new();
        board.apply_move(pos(p), Player::Cross);
        assert_eq!(board[pos(p)], Some(Player::Cross));
        for other in (1..=9).filter(|&other| other != p) {
            assert_eq!(board[pos(other)], None);
        }
    }
}

#[test]
fn move_on_occupied_cell_is_a_silent_no_op() {
    for player in Player::variants() {
        let mut board = board_with(&[5], player);
        let before = board.clone();
        board.apply_move(pos(5), player.opposite());
        assert_eq!(board, before);
        assert_eq!(board[pos(5)], Some(player));
    }
}

#[test]
fn all_eight_lines_win() {
    let lines: [[u8; 3]; 8] = [
        // Rows
        [1, 2, 3],
        [4, 5, 6],
        [7, 8, 9],
        // Columns
        [1, 4, 7],
        [2, 5, 8],
        [3, 6, 9],
        // Diagonals
        [1, 5, 9],
        [3, 5, 7],
    ];
    for line in lines {
        for player in Player::variants() {
            let board = board_with(&line, player);
            assert!(board.has_won(), "{line:?} should win for {player}");
        }
    }
}

#[test]
fn two_in_a_row_is_not_a_win() {
    let board = board_with(&[1, 2], Player::Cross);
    assert!(!board.has_won());
}

#[test]
fn mixed_line_is_not_a_win() {
    let mut board = board_with(&[1, 3], Player::Cross);
    board.apply_move(pos(2), Player::Nought);
    assert!(!board.has_won());
}

#[test]
fn full_board_without_a_line_is_a_draw() {
    // X O X / X O O / O X X
    let mut board = board_with(&[1, 3, 4, 8, 9], Player::Cross);
    for p in [2, 5, 6, 7] {
        board.apply_move(pos(p), Player::Nought);
    }
    assert!(!board.has_won());
    assert!(board.has_drawn());
    assert_eq!(board.empty_positions().count(), 0);
}

#[test]
fn board_with_an_empty_cell_is_not_drawn() {
    // Winning board that is not yet full: drawn stays occupancy-only
    let board = board_with(&[1, 2, 3], Player::Cross);
    assert!(board.has_won());
    assert!(!board.has_drawn());
}

#[test]
fn rendered_board_shows_position_hints_and_markers() {
    let mut board = board_with(&[5], Player::Cross);
    board.apply_move(pos(9), Player::Nought);
    let rendered = board.to_string();
    // Occupied cells show the marker, empty cells their linear position
    assert!(rendered.contains('X'));
    assert!(rendered.contains('O'));
    for hint in ["1", "2", "3", "4", "6", "7", "8"] {
        assert!(rendered.contains(hint), "missing placement hint {hint}");
    }
    assert!(!rendered.contains('5'));
    assert!(!rendered.contains('9'));
}

#[test]
fn player_serializes_to_short_markers() {
    assert_eq!(serde_json::to_string(&Player::Cross).unwrap(), r#""x""#);
    assert_eq!(serde_json::to_string(&Player::Nought).unwrap(), r#""o""#);
    let parsed: Player = serde_json::from_str(r#""o""#).unwrap();
    assert_eq!(parsed, Player::Nought);
}
