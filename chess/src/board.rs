use crate::coordinate::Coordinate;
use crate::movegen;
use crate::piece::Piece;
use crate::snapshot::BoardSnapshot;
use crate::types::{PieceColor, PieceKind};

/// The 8x8 grid. Every live piece is owned by exactly one cell, so capturing
/// is just dropping the previous occupant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [Option<Piece>; 64],
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("{piece} cannot move from {from} to {to}")]
    InvalidMove {
        piece: String,
        from: Coordinate,
        to: Coordinate,
    },
    #[error("no piece on {0}")]
    EmptySquare(Coordinate),
}

impl Board {
    /// A board with no pieces.
    pub fn empty() -> Self {
        Self {
            squares: std::array::from_fn(|_| None),
        }
    }

    /// Each color's back row on its home rank with pawns on its pawn rank.
    pub fn standard() -> Self {
        let mut board = Self::empty();
        for color in [PieceColor::White, PieceColor::Black] {
            for c in Coordinate::all() {
                let kind = if c.rank() == color.home_rank() {
                    PieceKind::BACK_ROW[usize::from(c.file())]
                } else if c.rank() == color.pawn_rank() {
                    PieceKind::Pawn
                } else {
                    continue;
                };
                board.spawn(color, kind, c);
            }
        }
        board
    }

    pub fn piece_at(&self, c: Coordinate) -> Option<&Piece> {
        self.squares[c.index()].as_ref()
    }

    pub fn is_empty_at(&self, c: Coordinate) -> bool {
        self.piece_at(c).is_none()
    }

    /// Put `piece` on `c`, overwriting any occupant, and return the occupant.
    /// Setup only; gameplay goes through [`Board::move_piece`].
    pub fn place(&mut self, mut piece: Piece, c: Coordinate) -> Option<Piece> {
        piece.relocate(c);
        self.squares[c.index()].replace(piece)
    }

    /// Create a fresh, unmoved piece on `c`.
    pub fn spawn(&mut self, color: PieceColor, kind: PieceKind, c: Coordinate) -> Option<Piece> {
        self.place(Piece::new(color, kind, c), c)
    }

    /// Remove and return the occupant of `c`. Setup only.
    pub fn clear(&mut self, c: Coordinate) -> Option<Piece> {
        self.squares[c.index()].take()
    }

    /// Move the piece on `origin` to `target`, returning the captured piece if
    /// any. Fails without touching the board unless `target` is one of the
    /// generated candidate moves.
    pub fn move_piece(
        &mut self,
        origin: Coordinate,
        target: Coordinate,
    ) -> Result<Option<Piece>, BoardError> {
        let piece = self
            .piece_at(origin)
            .ok_or(BoardError::EmptySquare(origin))?;

        if !movegen::generate(piece, self).contains(target) {
            return Err(BoardError::InvalidMove {
                piece: piece.name(),
                from: origin,
                to: target,
            });
        }

        let mut piece = self
            .clear(origin)
            .ok_or(BoardError::EmptySquare(origin))?;
        piece.record_move();
        let captured = self.place(piece, target);

        match &captured {
            Some(victim) => tracing::debug!(
                from = %origin,
                to = %target,
                captured = %victim.name(),
                "Piece moved with capture"
            ),
            None => tracing::debug!(from = %origin, to = %target, "Piece moved"),
        }

        Ok(captured)
    }

    /// All live pieces, rank 0 first.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.squares.iter().flatten()
    }

    /// True when every piece's cached coordinate matches its cell.
    pub fn is_consistent(&self) -> bool {
        Coordinate::all().all(|c| {
            self.piece_at(c)
                .map_or(true, |piece| piece.coordinate() == c)
        })
    }

    /// Read-only occupancy grid for rendering and comparison.
    pub fn snapshot(&self) -> BoardSnapshot {
        let mut snapshot = BoardSnapshot::default();
        for piece in self.pieces() {
            snapshot.set(piece.coordinate(), Some((piece.kind(), piece.color())));
        }
        snapshot
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}
