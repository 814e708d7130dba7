//! Pseudo-legal destination generation.
//!
//! Each piece kind has its own generator, picked by a single match in
//! [`generate`]. Generators read the board they are handed and never mutate
//! it. Every produced square is on the board and never holds an ally; king
//! safety is not considered.

use std::fmt;

use crate::board::Board;
use crate::coordinate::Coordinate;
use crate::piece::Piece;
use crate::types::PieceKind;

const ORTHOGONAL: [(i8, i8); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];
const DIAGONAL: [(i8, i8); 4] = [(-1, -1), (1, -1), (-1, 1), (1, 1)];

const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

/// An unordered set of destination squares.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MoveSet(u64);

impl MoveSet {
    pub fn new() -> Self {
        Self(0)
    }

    pub fn insert(&mut self, c: Coordinate) {
        self.0 |= 1 << c.index();
    }

    pub fn contains(&self, c: Coordinate) -> bool {
        self.0 & (1 << c.index()) != 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Squares in rank-major order.
    pub fn iter(&self) -> impl Iterator<Item = Coordinate> + '_ {
        Coordinate::all().filter(move |c| self.contains(*c))
    }
}

impl FromIterator<Coordinate> for MoveSet {
    fn from_iter<I: IntoIterator<Item = Coordinate>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl Extend<Coordinate> for MoveSet {
    fn extend<I: IntoIterator<Item = Coordinate>>(&mut self, iter: I) {
        for c in iter {
            self.insert(c);
        }
    }
}

impl fmt::Debug for MoveSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set()
            .entries(self.iter().map(|c| c.to_string()))
            .finish()
    }
}

/// Candidate destinations for `piece` on `board`.
pub fn generate(piece: &Piece, board: &Board) -> MoveSet {
    let moves = match piece.kind() {
        PieceKind::Rook => sliding(piece, board, &ORTHOGONAL),
        PieceKind::Bishop => sliding(piece, board, &DIAGONAL),
        PieceKind::Queen => {
            let mut moves = sliding(piece, board, &ORTHOGONAL);
            moves.extend(sliding(piece, board, &DIAGONAL).iter());
            moves
        }
        PieceKind::King => stepping(piece, board, &KING_OFFSETS),
        PieceKind::Knight => stepping(piece, board, &KNIGHT_OFFSETS),
        PieceKind::Pawn => pawn(piece, board),
    };
    tracing::trace!(
        piece = %piece.name(),
        from = %piece.coordinate(),
        count = moves.len(),
        "Generated moves"
    );
    moves
}

/// Walk each ray until the edge or the first occupied square, which is kept
/// only when it holds an enemy.
fn sliding(piece: &Piece, board: &Board, directions: &[(i8, i8)]) -> MoveSet {
    let mut moves = MoveSet::new();
    for &(df, dr) in directions {
        let mut cursor = piece.coordinate();
        while let Some(next) = cursor.offset(df, dr) {
            match board.piece_at(next) {
                None => moves.insert(next),
                Some(occupant) => {
                    if !occupant.is_ally_of(piece) {
                        moves.insert(next);
                    }
                    break;
                }
            }
            cursor = next;
        }
    }
    moves
}

fn stepping(piece: &Piece, board: &Board, offsets: &[(i8, i8)]) -> MoveSet {
    offsets
        .iter()
        .filter_map(|&(df, dr)| piece.coordinate().offset(df, dr))
        .filter(|&target| {
            board
                .piece_at(target)
                .map_or(true, |occupant| !occupant.is_ally_of(piece))
        })
        .collect()
}

fn pawn(piece: &Piece, board: &Board) -> MoveSet {
    let mut moves = MoveSet::new();
    let from = piece.coordinate();
    let forward = piece.color().forward();

    if let Some(one) = from.offset(0, forward).filter(|&c| board.is_empty_at(c)) {
        moves.insert(one);
        if !piece.has_moved() {
            if let Some(two) = one.offset(0, forward).filter(|&c| board.is_empty_at(c)) {
                moves.insert(two);
            }
        }
    }

    for df in [-1, 1] {
        let Some(target) = from.offset(df, forward) else {
            continue;
        };
        if board
            .piece_at(target)
            .is_some_and(|occupant| !occupant.is_ally_of(piece))
        {
            moves.insert(target);
        }
    }

    moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceColor;

    fn at(file: u8, rank: u8) -> Coordinate {
        Coordinate::new(file, rank).unwrap()
    }

    fn moves_of(board: &Board, c: Coordinate) -> MoveSet {
        generate(board.piece_at(c).unwrap(), board)
    }

    fn set(squares: &[(u8, u8)]) -> MoveSet {
        squares.iter().map(|&(f, r)| at(f, r)).collect()
    }

    #[test]
    fn test_move_set_basics() {
        let mut moves = MoveSet::new();
        assert!(moves.is_empty());
        moves.insert(at(0, 0));
        moves.insert(at(7, 7));
        moves.insert(at(0, 0));
        assert_eq!(moves.len(), 2);
        assert!(moves.contains(at(7, 7)));
        assert!(!moves.contains(at(3, 3)));
        assert_eq!(moves.iter().collect::<Vec<_>>(), vec![at(0, 0), at(7, 7)]);
        assert_eq!(format!("{moves:?}"), r#"{"a8", "h1"}"#);
    }

    #[test]
    fn test_rook_on_empty_board() {
        let mut board = Board::empty();
        board.spawn(PieceColor::White, PieceKind::Rook, at(3, 4));
        let moves = moves_of(&board, at(3, 4));
        assert_eq!(moves.len(), 14);
        assert!(moves.contains(at(3, 0)));
        assert!(moves.contains(at(0, 4)));
        assert!(!moves.contains(at(4, 5)));
    }

    #[test]
    fn test_rook_stops_at_first_blocker() {
        let mut board = Board::empty();
        board.spawn(PieceColor::White, PieceKind::Rook, at(0, 7));
        board.spawn(PieceColor::Black, PieceKind::Pawn, at(0, 4));
        board.spawn(PieceColor::White, PieceKind::Knight, at(3, 7));

        let moves = moves_of(&board, at(0, 7));
        assert_eq!(moves, set(&[(0, 6), (0, 5), (0, 4), (1, 7), (2, 7)]));
    }

    #[test]
    fn test_bishop_diagonals() {
        let mut board = Board::empty();
        board.spawn(PieceColor::Black, PieceKind::Bishop, at(2, 0));
        board.spawn(PieceColor::Black, PieceKind::Pawn, at(1, 1));
        board.spawn(PieceColor::White, PieceKind::Pawn, at(5, 3));

        let moves = moves_of(&board, at(2, 0));
        assert_eq!(moves, set(&[(3, 1), (4, 2), (5, 3)]));
    }

    #[test]
    fn test_queen_combines_rook_and_bishop() {
        let mut board = Board::empty();
        board.spawn(PieceColor::White, PieceKind::Queen, at(3, 3));
        let queen = moves_of(&board, at(3, 3));

        let mut rook_board = Board::empty();
        rook_board.spawn(PieceColor::White, PieceKind::Rook, at(3, 3));
        let mut bishop_board = Board::empty();
        bishop_board.spawn(PieceColor::White, PieceKind::Bishop, at(3, 3));

        let mut union = moves_of(&rook_board, at(3, 3));
        union.extend(moves_of(&bishop_board, at(3, 3)).iter());
        assert_eq!(queen, union);
        assert_eq!(queen.len(), 27);
    }

    #[test]
    fn test_king_in_corner() {
        let mut board = Board::empty();
        board.spawn(PieceColor::White, PieceKind::King, at(0, 0));
        board.spawn(PieceColor::White, PieceKind::Pawn, at(1, 1));
        assert_eq!(moves_of(&board, at(0, 0)), set(&[(1, 0), (0, 1)]));
    }

    #[test]
    fn test_knight_jumps_over_pieces() {
        let board = Board::standard();
        assert_eq!(moves_of(&board, at(6, 7)), set(&[(5, 5), (7, 5)]));
        assert_eq!(moves_of(&board, at(1, 0)), set(&[(0, 2), (2, 2)]));
    }

    #[test]
    fn test_knight_in_center() {
        let mut board = Board::empty();
        board.spawn(PieceColor::Black, PieceKind::Knight, at(4, 4));
        board.spawn(PieceColor::White, PieceKind::Rook, at(5, 6));
        board.spawn(PieceColor::Black, PieceKind::Rook, at(6, 5));

        let moves = moves_of(&board, at(4, 4));
        assert_eq!(moves.len(), 7);
        assert!(moves.contains(at(5, 6)));
        assert!(!moves.contains(at(6, 5)));
    }

    #[test]
    fn test_pawn_first_move_advances_one_or_two() {
        let board = Board::standard();
        assert_eq!(moves_of(&board, at(4, 6)), set(&[(4, 5), (4, 4)]));
        assert_eq!(moves_of(&board, at(4, 1)), set(&[(4, 2), (4, 3)]));
    }

    #[test]
    fn test_pawn_blocked() {
        let mut board = Board::empty();
        board.spawn(PieceColor::White, PieceKind::Pawn, at(2, 6));
        board.spawn(PieceColor::Black, PieceKind::Knight, at(2, 5));
        assert!(moves_of(&board, at(2, 6)).is_empty());

        board.clear(at(2, 5));
        board.spawn(PieceColor::Black, PieceKind::Knight, at(2, 4));
        assert_eq!(moves_of(&board, at(2, 6)), set(&[(2, 5)]));
    }

    #[test]
    fn test_pawn_never_moves_diagonally_onto_empty_or_ally() {
        let mut board = Board::empty();
        board.spawn(PieceColor::Black, PieceKind::Pawn, at(3, 3));
        board.spawn(PieceColor::Black, PieceKind::Pawn, at(4, 4));
        assert_eq!(moves_of(&board, at(3, 3)), set(&[(3, 4), (3, 5)]));
    }

    #[test]
    fn test_pawn_double_move_uses_counter_not_rank() {
        let mut board = Board::empty();
        board.spawn(PieceColor::White, PieceKind::Pawn, at(0, 4));
        assert_eq!(moves_of(&board, at(0, 4)), set(&[(0, 3), (0, 2)]));
    }

    #[test]
    fn test_pawn_on_last_rank_has_no_moves() {
        let mut board = Board::empty();
        board.spawn(PieceColor::White, PieceKind::Pawn, at(5, 0));
        board.spawn(PieceColor::Black, PieceKind::Pawn, at(5, 7));
        assert!(moves_of(&board, at(5, 0)).is_empty());
        assert!(moves_of(&board, at(5, 7)).is_empty());
    }
}
