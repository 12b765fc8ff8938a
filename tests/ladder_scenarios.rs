//! End-to-end scenarios on the diamond and ladder boards through the public API.

use graphboard::board::{ladder, ladder_board, Board, Field, Move, MoveError, Position};

fn indices(positions: &[Position]) -> Vec<usize> {
    positions.iter().map(Position::index).collect()
}

#[test]
fn diamond_neighbors_in_adjacency_order() {
    let board = Board::new(vec![vec![1, 2, 3], vec![0, 3], vec![0, 3], vec![0, 1, 2]], &[], &[]);
    assert_eq!(board.node_neighbors(&board[0]), vec![Position::empty(1), Position::empty(2), Position::empty(3)]);
    assert_eq!(indices(&board.node_neighbors(&board[1])), vec![0, 3]);
}

#[test]
fn ladder_reachability() {
    let board = ladder_board();
    assert!(board.breadth_first_search(0, 11, |_| true));
    assert!(board.breadth_first_search(2, 6, Position::is_empty));
    assert!(!board.breadth_first_search(0, 11, Position::is_empty));
}

#[test]
fn ladder_reachability_after_move() {
    let mut board = ladder_board();
    board.do_move(&Move::new(2, 5));
    assert!(!board.breadth_first_search(1, 5, Position::is_empty));
    assert!(board.breadth_first_search(1, 4, Position::is_empty));
}

#[test]
fn ladder_initial_moves() {
    let moves: Vec<(usize, usize)> = ladder_board()
        .possible_moves()
        .iter()
        .map(|m| (m.source, m.destination))
        .collect();
    assert_eq!(moves, vec![(2, 4), (2, 5), (2, 6), (2, 7), (8, 4), (8, 5), (8, 6), (8, 7)]);
}

#[test]
fn ladder_invalid_moves() {
    let board = ladder_board();
    assert_eq!(board.invalid_move(&Move::new(4, 2)), Some(MoveError::SourceEmpty));
    assert_eq!(board.invalid_move(&Move::new(2, 3)), Some(MoveError::DestinationOccupied));
}

#[test]
fn markers_can_pass_each_other_only_through_gaps() {
    let mut board = ladder_board();
    board.do_move(&Move::new(2, 6));
    board.do_move(&Move::new(8, 4));
    // A on the spur at 6 is cut off: 5 is empty but 4 holds B.
    assert_eq!(board.invalid_move(&Move::new(6, 2)), Some(MoveError::Unreachable));
    assert_eq!(board.invalid_move(&Move::new(6, 8)), None);
    board.do_move(&Move::new(6, 8));
    assert_eq!(board[8].field(), Field::PlayerA);
    assert_eq!(board[6].field(), Field::Empty);
}

#[test]
fn replaying_inverse_restores_board() {
    let mut board = ladder_board();
    let mv = Move::new(8, 6);
    board.do_move(&mv);
    assert_ne!(board, ladder_board());
    let back = mv.inverse();
    assert!(mv.is_inverse(&back));
    assert_eq!(board.invalid_move(&back), None);
    board.do_move(&back);
    assert_eq!(board, ladder_board());
}

#[test]
fn equality_is_not_isomorphism() {
    // Same shape, reversed labels.
    let mut reversed = ladder();
    reversed.reverse();
    for neighbors in &mut reversed {
        for n in neighbors.iter_mut() {
            *n = 11 - *n;
        }
    }
    let mirrored = Board::new(reversed, &[8, 9, 10, 11], &[0, 1, 2, 3]);
    assert_ne!(mirrored, ladder_board());
    assert_eq!(mirrored.possible_moves().len(), ladder_board().possible_moves().len());
}
