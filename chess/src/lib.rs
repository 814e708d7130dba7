//! Board model, pseudo-legal move generation and the cursor/selection state
//! machine behind the terminal chessboard.

pub mod board;
pub mod coordinate;
pub mod movegen;
pub mod piece;
pub mod placement;
pub mod selection;
pub mod snapshot;
pub mod types;

pub use board::{Board, BoardError};
pub use coordinate::{Coordinate, CoordinateError, BOARD_SIZE};
pub use movegen::{generate, MoveSet};
pub use piece::Piece;
pub use placement::{PlacementError, STANDARD_PLACEMENT};
pub use selection::{Command, ControllerView, Direction, Flow, Selection, SelectionController, Status};
pub use snapshot::BoardSnapshot;
pub use types::{PieceColor, PieceKind};
