//! Piece-placement strings, the first field of a FEN record.
//!
//! Rows are listed from rank 0 (top) to rank 7 (bottom), separated by `/`.
//! Uppercase letters are White, lowercase are Black, digits count empty
//! squares. Any fields after the first whitespace are ignored, so a full FEN
//! record is accepted as well.

use crate::board::Board;
use crate::coordinate::Coordinate;
use crate::types::{PieceColor, PieceKind};

/// Placement of the standard starting position.
pub const STANDARD_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlacementError {
    #[error("empty placement string")]
    Empty,
    #[error("expected 8 rows, found {0}")]
    RowCount(usize),
    #[error("row {row} does not describe exactly 8 squares")]
    RowLength { row: usize },
    #[error("invalid piece character: {0}")]
    InvalidPiece(char),
}

impl Board {
    /// Build a board from a placement string. Every piece starts unmoved.
    pub fn from_placement(placement: &str) -> Result<Self, PlacementError> {
        let field = placement
            .split_whitespace()
            .next()
            .ok_or(PlacementError::Empty)?;

        let rows: Vec<&str> = field.split('/').collect();
        if rows.len() != 8 {
            return Err(PlacementError::RowCount(rows.len()));
        }

        let mut board = Board::empty();
        for (rank, row) in rows.iter().enumerate() {
            let mut file = 0usize;
            for c in row.chars() {
                if let Some(skip) = c.to_digit(10) {
                    if skip == 0 {
                        return Err(PlacementError::InvalidPiece(c));
                    }
                    file += skip as usize;
                    continue;
                }
                let kind = PieceKind::from_char(c).ok_or(PlacementError::InvalidPiece(c))?;
                let color = if c.is_ascii_uppercase() {
                    PieceColor::White
                } else {
                    PieceColor::Black
                };
                let square = Coordinate::from_index(rank * 8 + file)
                    .filter(|_| file < 8)
                    .ok_or(PlacementError::RowLength { row: rank })?;
                board.spawn(color, kind, square);
                file += 1;
            }
            if file != 8 {
                return Err(PlacementError::RowLength { row: rank });
            }
        }

        Ok(board)
    }

    /// Format the board as a placement string.
    pub fn to_placement(&self) -> String {
        let mut out = String::new();
        for rank in 0..8 {
            if rank > 0 {
                out.push('/');
            }
            let mut empty = 0;
            for file in 0..8 {
                let piece = Coordinate::from_index(rank * 8 + file).and_then(|c| self.piece_at(c));
                match piece {
                    Some(piece) => {
                        if empty > 0 {
                            out.push_str(&empty.to_string());
                            empty = 0;
                        }
                        out.push(piece.symbol());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                out.push_str(&empty.to_string());
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_placement_matches_setup() {
        let parsed = Board::from_placement(STANDARD_PLACEMENT).unwrap();
        assert_eq!(parsed, Board::standard());
        assert_eq!(Board::standard().to_placement(), STANDARD_PLACEMENT);
    }

    #[test]
    fn test_full_fen_record_accepted() {
        let board =
            Board::from_placement("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1")
                .unwrap();
        assert_eq!(board.pieces().count(), 32);
    }

    #[test]
    fn test_sparse_placement() {
        let board = Board::from_placement("8/8/8/3q4/8/8/8/4K3").unwrap();
        let queen = board.piece_at(Coordinate::new(3, 3).unwrap()).unwrap();
        assert_eq!(queen.kind(), PieceKind::Queen);
        assert_eq!(queen.color(), PieceColor::Black);
        assert_eq!(board.to_placement(), "8/8/8/3q4/8/8/8/4K3");
    }

    #[test]
    fn test_errors() {
        assert_eq!(Board::from_placement("   "), Err(PlacementError::Empty));
        assert_eq!(
            Board::from_placement("8/8/8"),
            Err(PlacementError::RowCount(3))
        );
        assert_eq!(
            Board::from_placement("9/8/8/8/8/8/8/8"),
            Err(PlacementError::RowLength { row: 0 })
        );
        assert_eq!(
            Board::from_placement("8/8/7/8/8/8/8/8"),
            Err(PlacementError::RowLength { row: 2 })
        );
        assert_eq!(
            Board::from_placement("8/8/8/8/8/8/8/ppppppppp"),
            Err(PlacementError::RowLength { row: 7 })
        );
        assert_eq!(
            Board::from_placement("8/8/8/8/3x4/8/8/8"),
            Err(PlacementError::InvalidPiece('x'))
        );
    }
}
