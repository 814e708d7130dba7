use crate::coordinate::Coordinate;
use crate::types::{PieceColor, PieceKind};

/// A live piece. Owned by exactly one board cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    color: PieceColor,
    kind: PieceKind,
    coordinate: Coordinate,
    move_count: u32,
}

impl Piece {
    pub fn new(color: PieceColor, kind: PieceKind, coordinate: Coordinate) -> Self {
        Self {
            color,
            kind,
            coordinate,
            move_count: 0,
        }
    }

    pub fn color(&self) -> PieceColor {
        self.color
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    /// Cached position, kept in sync with the owning cell by [`crate::Board`].
    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    /// Completed moves. Pawns may only double-advance while this is zero.
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn has_moved(&self) -> bool {
        self.move_count > 0
    }

    /// Human readable name, e.g. `White Knight`.
    pub fn name(&self) -> String {
        format!("{} {}", self.color, self.kind)
    }

    /// FEN-style letter: uppercase for White, lowercase for Black.
    pub fn symbol(&self) -> char {
        match self.color {
            PieceColor::White => self.kind.to_char_upper(),
            PieceColor::Black => self.kind.to_char_lower(),
        }
    }

    pub fn is_ally_of(&self, other: &Piece) -> bool {
        self.color == other.color
    }

    pub(crate) fn relocate(&mut self, coordinate: Coordinate) {
        self.coordinate = coordinate;
    }

    pub(crate) fn record_move(&mut self) {
        self.move_count = self.move_count.saturating_add(1);
    }
}
