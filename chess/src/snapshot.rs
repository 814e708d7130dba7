//! Plain occupancy grid handed to renderers.

use crate::coordinate::Coordinate;
use crate::types::{PieceColor, PieceKind};

/// An 8x8 board for display and comparison purposes only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct BoardSnapshot {
    squares: [[Option<(PieceKind, PieceColor)>; 8]; 8],
}

impl BoardSnapshot {
    pub fn piece_at(&self, c: Coordinate) -> Option<(PieceKind, PieceColor)> {
        self.squares[usize::from(c.rank())][usize::from(c.file())]
    }

    pub(crate) fn set(&mut self, c: Coordinate, occupant: Option<(PieceKind, PieceColor)>) {
        self.squares[usize::from(c.rank())][usize::from(c.file())] = occupant;
    }

    /// Occupied squares, rank 0 first.
    pub fn occupied(&self) -> impl Iterator<Item = (Coordinate, PieceKind, PieceColor)> + '_ {
        Coordinate::all().filter_map(move |c| self.piece_at(c).map(|(kind, color)| (c, kind, color)))
    }
}
