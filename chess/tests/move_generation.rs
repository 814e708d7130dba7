use chess::{generate, Board, Coordinate, Piece, PieceColor, PieceKind};
use proptest::prelude::*;

const KINDS: [PieceKind; 6] = [
    PieceKind::Pawn,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Rook,
    PieceKind::Queen,
    PieceKind::King,
];

const ORTHOGONAL: [(i8, i8); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];
const DIAGONAL: [(i8, i8); 4] = [(-1, -1), (1, -1), (-1, 1), (1, 1)];

fn at(file: u8, rank: u8) -> Coordinate {
    Coordinate::new(file, rank).unwrap()
}

fn arb_board() -> impl Strategy<Value = Board> {
    prop::collection::vec((0usize..64, any::<bool>(), 0usize..6), 1..24).prop_map(|pieces| {
        let mut board = Board::empty();
        for (index, white, kind) in pieces {
            let color = if white {
                PieceColor::White
            } else {
                PieceColor::Black
            };
            board.spawn(color, KINDS[kind], Coordinate::from_index(index).unwrap());
        }
        board
    })
}

fn directions(kind: PieceKind) -> Vec<(i8, i8)> {
    match kind {
        PieceKind::Rook => ORTHOGONAL.to_vec(),
        PieceKind::Bishop => DIAGONAL.to_vec(),
        PieceKind::Queen => ORTHOGONAL.iter().chain(DIAGONAL.iter()).copied().collect(),
        _ => Vec::new(),
    }
}

fn offsets(kind: PieceKind) -> Vec<(i8, i8)> {
    match kind {
        PieceKind::King => (-1..=1)
            .flat_map(|df| (-1..=1).map(move |dr| (df, dr)))
            .filter(|&d| d != (0, 0))
            .collect(),
        PieceKind::Knight => vec![
            (1, 2),
            (2, 1),
            (2, -1),
            (1, -2),
            (-1, -2),
            (-2, -1),
            (-2, 1),
            (-1, 2),
        ],
        _ => Vec::new(),
    }
}

fn live_pieces(board: &Board) -> Vec<Piece> {
    board.pieces().cloned().collect()
}

proptest! {
    #[test]
    fn generated_moves_are_on_board_and_never_hit_allies(board in arb_board()) {
        for piece in live_pieces(&board) {
            for target in generate(&piece, &board).iter() {
                prop_assert!(target.file() < 8 && target.rank() < 8);
                prop_assert_ne!(target, piece.coordinate());
                if let Some(occupant) = board.piece_at(target) {
                    prop_assert_ne!(occupant.color(), piece.color());
                }
            }
        }
    }

    #[test]
    fn sliding_rays_stop_at_first_occupied_square(board in arb_board()) {
        for piece in live_pieces(&board) {
            let moves = generate(&piece, &board);
            for (df, dr) in directions(piece.kind()) {
                let mut cursor = piece.coordinate();
                let mut blocked = false;
                while let Some(next) = cursor.offset(df, dr) {
                    if blocked {
                        prop_assert!(!moves.contains(next));
                    } else if let Some(occupant) = board.piece_at(next) {
                        prop_assert_eq!(moves.contains(next), occupant.color() != piece.color());
                        blocked = true;
                    } else {
                        prop_assert!(moves.contains(next));
                    }
                    cursor = next;
                }
            }
        }
    }

    #[test]
    fn stepping_moves_equal_filtered_offset_table(board in arb_board()) {
        for piece in live_pieces(&board) {
            if !matches!(piece.kind(), PieceKind::King | PieceKind::Knight) {
                continue;
            }
            let expected: chess::MoveSet = offsets(piece.kind())
                .into_iter()
                .filter_map(|(df, dr)| piece.coordinate().offset(df, dr))
                .filter(|&c| board.piece_at(c).map_or(true, |o| o.color() != piece.color()))
                .collect();
            prop_assert_eq!(generate(&piece, &board), expected);
        }
    }

    #[test]
    fn rejected_moves_leave_board_identical(board in arb_board(), target in 0usize..64) {
        let target = Coordinate::from_index(target).unwrap();
        for piece in live_pieces(&board) {
            if generate(&piece, &board).contains(target) {
                continue;
            }
            let mut scratch = board.clone();
            prop_assert!(scratch.move_piece(piece.coordinate(), target).is_err());
            prop_assert_eq!(scratch.snapshot(), board.snapshot());
            prop_assert_eq!(&scratch, &board);
        }
    }

    #[test]
    fn accepted_moves_keep_board_consistent(board in arb_board()) {
        for piece in live_pieces(&board) {
            for target in generate(&piece, &board).iter() {
                let mut scratch = board.clone();
                let captured = scratch.move_piece(piece.coordinate(), target).unwrap();
                prop_assert!(scratch.is_consistent());
                prop_assert!(scratch.is_empty_at(piece.coordinate()));
                let moved = scratch.piece_at(target).unwrap();
                prop_assert_eq!(moved.kind(), piece.kind());
                prop_assert_eq!(moved.coordinate(), target);
                let expected = board.pieces().count() - usize::from(captured.is_some());
                prop_assert_eq!(scratch.pieces().count(), expected);
                if let Some(victim) = captured {
                    prop_assert_ne!(victim.color(), piece.color());
                }
            }
        }
    }
}

#[test]
fn pawn_loses_double_advance_after_moving() {
    let mut board = Board::standard();
    let home = at(4, 6);
    let moves = generate(board.piece_at(home).unwrap(), &board);
    assert!(moves.contains(at(4, 5)));
    assert!(moves.contains(at(4, 4)));

    board.move_piece(home, at(4, 5)).unwrap();
    let pawn = board.piece_at(at(4, 5)).unwrap();
    let moves = generate(pawn, &board);
    assert_eq!(moves.iter().collect::<Vec<_>>(), vec![at(4, 4)]);

    // Put the moved pawn back on its starting square by hand.
    let pawn = board.clear(at(4, 5)).unwrap();
    board.place(pawn, home);
    let moves = generate(board.piece_at(home).unwrap(), &board);
    assert_eq!(moves.iter().collect::<Vec<_>>(), vec![at(4, 5)]);
}

#[test]
fn rook_blocked_by_allied_pawn_has_no_forward_moves() {
    let board = Board::standard();
    let rook = board.piece_at(at(0, 7)).unwrap();
    assert!(generate(rook, &board).is_empty());

    let mut board = Board::empty();
    board.spawn(PieceColor::White, PieceKind::Rook, at(3, 5));
    board.spawn(PieceColor::White, PieceKind::Pawn, at(3, 4));
    let moves = generate(board.piece_at(at(3, 5)).unwrap(), &board);
    assert!((0..5).all(|rank| !moves.contains(at(3, rank))));
    assert!(moves.contains(at(3, 6)));
}

#[test]
fn pawn_captures_only_occupied_enemy_diagonal() {
    let mut board = Board::empty();
    board.spawn(PieceColor::White, PieceKind::Pawn, at(4, 4));
    board.spawn(PieceColor::Black, PieceKind::Bishop, at(3, 3));

    let moves = generate(board.piece_at(at(4, 4)).unwrap(), &board);
    assert!(moves.contains(at(3, 3)));
    assert!(moves.contains(at(4, 3)));
    assert!(!moves.contains(at(5, 3)));
}
