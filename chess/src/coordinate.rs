//! Validated board addressing.

use std::fmt;

/// Number of files and ranks on the board.
pub const BOARD_SIZE: u8 = 8;

/// A square on the board. Both components are always in `0..8`.
///
/// Rank 0 is the top row as rendered; rank 7 is the bottom row where the
/// White back row starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    file: u8,
    rank: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoordinateError {
    #[error("coordinate ({file}, {rank}) is off the board")]
    OutOfRange { file: i16, rank: i16 },
    #[error("invalid square name: {0}")]
    InvalidName(String),
}

impl Coordinate {
    /// File 0, rank 0: the top-left square as rendered.
    pub const TOP_LEFT: Self = Self { file: 0, rank: 0 };

    pub fn new(file: u8, rank: u8) -> Result<Self, CoordinateError> {
        if file < BOARD_SIZE && rank < BOARD_SIZE {
            Ok(Self { file, rank })
        } else {
            Err(CoordinateError::OutOfRange {
                file: file.into(),
                rank: rank.into(),
            })
        }
    }

    /// Build a coordinate from a flat `0..64` index, rank-major.
    pub fn from_index(index: usize) -> Option<Self> {
        if index >= 64 {
            return None;
        }
        Some(Self {
            file: (index % 8) as u8,
            rank: (index / 8) as u8,
        })
    }

    pub fn file(self) -> u8 {
        self.file
    }

    pub fn rank(self) -> u8 {
        self.rank
    }

    pub fn index(self) -> usize {
        usize::from(self.rank) * 8 + usize::from(self.file)
    }

    /// Shift by a relative offset. Returns `None` when the result would leave
    /// the board, so no out-of-range value can ever be constructed.
    pub fn offset(self, file_delta: i8, rank_delta: i8) -> Option<Self> {
        let file = i16::from(self.file) + i16::from(file_delta);
        let rank = i16::from(self.rank) + i16::from(rank_delta);
        let range = 0..i16::from(BOARD_SIZE);
        if range.contains(&file) && range.contains(&rank) {
            Some(Self {
                file: file as u8,
                rank: rank as u8,
            })
        } else {
            None
        }
    }

    /// Shift by a relative offset, pinning each component to the board edge.
    pub fn clamped_offset(self, file_delta: i8, rank_delta: i8) -> Self {
        let max = i16::from(BOARD_SIZE - 1);
        let file = (i16::from(self.file) + i16::from(file_delta)).clamp(0, max);
        let rank = (i16::from(self.rank) + i16::from(rank_delta)).clamp(0, max);
        Self {
            file: file as u8,
            rank: rank as u8,
        }
    }

    /// All 64 squares, rank 0 first.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..64).filter_map(Self::from_index)
    }

    /// Parse algebraic notation such as `b1`.
    pub fn parse_algebraic(name: &str) -> Result<Self, CoordinateError> {
        let invalid = || CoordinateError::InvalidName(name.to_string());
        let mut chars = name.chars();
        let (Some(f), Some(r), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };
        if !('a'..='h').contains(&f) || !('1'..='8').contains(&r) {
            return Err(invalid());
        }
        let file = f as u8 - b'a';
        let rank = b'8' - r as u8;
        Self::new(file, rank)
    }
}

/// Formats as algebraic notation: file 0 is `a`, rank 0 is `8`.
impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.file) as char, BOARD_SIZE - self.rank)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_out_of_range() {
        assert!(Coordinate::new(7, 7).is_ok());
        assert_eq!(
            Coordinate::new(8, 0),
            Err(CoordinateError::OutOfRange { file: 8, rank: 0 })
        );
        assert!(Coordinate::new(0, 8).is_err());
    }

    #[test]
    fn test_offset_filters_edges() {
        let corner = Coordinate::new(0, 0).unwrap();
        assert_eq!(corner.offset(-1, 0), None);
        assert_eq!(corner.offset(0, -1), None);
        assert_eq!(corner.offset(1, 2), Some(Coordinate::new(1, 2).unwrap()));

        let far = Coordinate::new(7, 7).unwrap();
        assert_eq!(far.offset(1, 0), None);
        assert_eq!(far.offset(-7, -7), Some(corner));
    }

    #[test]
    fn test_clamped_offset_pins_to_edge() {
        let corner = Coordinate::new(0, 0).unwrap();
        assert_eq!(corner.clamped_offset(-1, -1), corner);
        let edge = Coordinate::new(7, 3).unwrap();
        assert_eq!(edge.clamped_offset(1, 1), Coordinate::new(7, 4).unwrap());
    }

    #[test]
    fn test_index_roundtrip() {
        for (i, c) in Coordinate::all().enumerate() {
            assert_eq!(c.index(), i);
        }
        assert_eq!(Coordinate::all().count(), 64);
        assert_eq!(Coordinate::from_index(64), None);
    }

    #[test]
    fn test_algebraic_names() {
        let knight_home = Coordinate::new(1, 7).unwrap();
        assert_eq!(knight_home.to_string(), "b1");
        assert_eq!(Coordinate::parse_algebraic("b1"), Ok(knight_home));
        assert_eq!(
            Coordinate::parse_algebraic("h8"),
            Ok(Coordinate::new(7, 0).unwrap())
        );
        assert!(Coordinate::parse_algebraic("i1").is_err());
        assert!(Coordinate::parse_algebraic("a9").is_err());
        assert!(Coordinate::parse_algebraic("a10").is_err());
    }
}
