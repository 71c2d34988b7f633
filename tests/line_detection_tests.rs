//! Line detection tests - directions, roles and canonical keys

use sos_game::core::{find_new_lines, Board, DiscoveredLines, GameState, LineKey};
use sos_game::types::{Coord, Letter, Mode, Player};

fn board_with(size: usize, cells: &[(usize, usize, Letter)]) -> Board {
    let mut board = Board::new(size).unwrap();
    for &(r, c, l) in cells {
        board.set(r, c, l).unwrap();
    }
    board
}

fn key(cells: [(usize, usize); 3]) -> LineKey {
    LineKey::new(cells.map(Coord::from))
}

#[test]
fn test_all_four_axes() {
    let cases = [
        [(2, 1), (2, 2), (2, 3)], // horizontal
        [(1, 2), (2, 2), (3, 2)], // vertical
        [(1, 1), (2, 2), (3, 3)], // diagonal
        [(3, 1), (2, 2), (1, 3)], // anti-diagonal
    ];

    for cells in cases {
        let board = board_with(
            5,
            &[
                (cells[0].0, cells[0].1, Letter::S),
                (cells[1].0, cells[1].1, Letter::O),
                (cells[2].0, cells[2].1, Letter::S),
            ],
        );
        for probe in cells {
            let found = find_new_lines(&board, Coord::from(probe), &DiscoveredLines::new());
            assert_eq!(found.as_slice(), &[key(cells)], "probe {probe:?} of {cells:?}");
        }
    }
}

#[test]
fn test_wrong_pattern_is_not_a_line() {
    let known = DiscoveredLines::new();
    let sss = board_with(3, &[(0, 0, Letter::S), (0, 1, Letter::S), (0, 2, Letter::S)]);
    let oso = board_with(3, &[(0, 0, Letter::O), (0, 1, Letter::S), (0, 2, Letter::O)]);
    for col in 0..3 {
        assert!(find_new_lines(&sss, Coord::new(0, col), &known).is_empty());
        assert!(find_new_lines(&oso, Coord::new(0, col), &known).is_empty());
    }
}

#[test]
fn test_lines_do_not_wrap_around_edges() {
    // S at the end of row 0, O and S at the start of row 1 are not adjacent.
    let board = board_with(3, &[(0, 2, Letter::S), (1, 0, Letter::O), (1, 1, Letter::S)]);
    assert!(find_new_lines(&board, Coord::new(1, 0), &DiscoveredLines::new()).is_empty());
}

#[test]
fn test_middle_o_completes_two_lines() {
    let board = board_with(
        3,
        &[
            (1, 0, Letter::S),
            (1, 2, Letter::S),
            (0, 1, Letter::S),
            (2, 1, Letter::S),
            (1, 1, Letter::O),
        ],
    );
    let found = find_new_lines(&board, Coord::new(1, 1), &DiscoveredLines::new());
    assert_eq!(found.len(), 2);
    assert!(found.contains(&key([(1, 0), (1, 1), (1, 2)])));
    assert!(found.contains(&key([(0, 1), (1, 1), (2, 1)])));
}

#[test]
fn test_shared_endpoint_lines_are_distinct() {
    let mut game = GameState::new(5, Mode::General).unwrap();
    game.apply_move(0, 0, Some(Letter::S)).unwrap(); // Blue
    game.apply_move(0, 1, Some(Letter::O)).unwrap(); // Red
    game.apply_move(0, 2, Some(Letter::S)).unwrap(); // Blue, line, keeps turn
    assert_eq!(game.lines().len(), 1);

    game.apply_move(0, 3, Some(Letter::O)).unwrap(); // Blue
    game.apply_move(0, 4, Some(Letter::S)).unwrap(); // Red, second line via (0,2)

    assert_eq!(game.lines().len(), 2);
    assert_eq!(game.lines().count_for(Player::Blue), 1);
    assert_eq!(game.lines().count_for(Player::Red), 1);
    assert_eq!(game.scores(), [1, 1]);

    let owners: Vec<(LineKey, Player)> = game.lines().iter().map(|l| (l.key, l.owner)).collect();
    assert_eq!(
        owners,
        vec![
            (key([(0, 0), (0, 1), (0, 2)]), Player::Blue),
            (key([(0, 2), (0, 3), (0, 4)]), Player::Red),
        ]
    );
}

#[test]
fn test_line_endpoints_for_drawing() {
    let k = key([(2, 0), (1, 1), (0, 2)]);
    assert_eq!(k.start(), Coord::new(0, 2));
    assert_eq!(k.end(), Coord::new(2, 0));
    assert!(k.contains(Coord::new(1, 1)));
}
