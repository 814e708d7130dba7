//! Cursor and selection state machine driving the board.
//!
//! The controller owns the [`Board`] and is the only caller of
//! [`Board::move_piece`]. It is fed one [`Command`] at a time and fully applies
//! it before returning, so every transition is observable through
//! [`SelectionController::view`].

use std::fmt;

use crate::board::{Board, BoardError};
use crate::coordinate::Coordinate;
use crate::movegen::{self, MoveSet};
use crate::piece::Piece;
use crate::snapshot::BoardSnapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// `(file, rank)` delta. Up moves toward rank 0.
    pub fn delta(self) -> (i8, i8) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MoveCursor(Direction),
    Activate,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Idle,
    /// A piece is picked up. `moves` was generated at selection time.
    Selected { origin: Coordinate, moves: MoveSet },
}

/// Outcome of the last command, shown to the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Ready,
    EmptySquare,
    Selected(String),
    Moved(String),
    Deselected,
    InvalidMove(BoardError),
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ready => f.write_str("Ready"),
            Self::EmptySquare => f.write_str("Empty square selected"),
            Self::Selected(name) => write!(f, "{name} selected"),
            Self::Moved(name) => write!(f, "Moved {name}"),
            Self::Deselected => f.write_str("Deselected"),
            Self::InvalidMove(err) => write!(f, "Invalid move: {err}"),
        }
    }
}

/// Whether the interaction loop should keep running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Read-only state handed to renderers after each command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerView<'a> {
    pub board: BoardSnapshot,
    pub cursor: Coordinate,
    pub selected: Option<(&'a Piece, MoveSet)>,
    pub status: &'a Status,
}

#[derive(Debug, Clone)]
pub struct SelectionController {
    board: Board,
    cursor: Coordinate,
    selection: Selection,
    status: Status,
    finished: bool,
}

impl SelectionController {
    /// Start idle with the cursor in the top-left corner.
    pub fn new(board: Board) -> Self {
        Self {
            board,
            cursor: Coordinate::TOP_LEFT,
            selection: Selection::Idle,
            status: Status::Ready,
            finished: false,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn cursor(&self) -> Coordinate {
        self.cursor
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Apply one command. Once [`Command::Quit`] has been seen every further
    /// command is ignored.
    pub fn apply(&mut self, command: Command) -> Flow {
        if self.finished {
            return Flow::Quit;
        }
        match command {
            Command::MoveCursor(direction) => self.move_cursor(direction),
            Command::Activate => self.activate(),
            Command::Quit => {
                tracing::debug!("Quit requested");
                self.finished = true;
                return Flow::Quit;
            }
        }
        Flow::Continue
    }

    pub fn view(&self) -> ControllerView<'_> {
        let selected = match &self.selection {
            Selection::Idle => None,
            Selection::Selected { origin, moves } => {
                self.board.piece_at(*origin).map(|piece| (piece, *moves))
            }
        };
        ControllerView {
            board: self.board.snapshot(),
            cursor: self.cursor,
            selected,
            status: &self.status,
        }
    }

    fn move_cursor(&mut self, direction: Direction) {
        let (df, dr) = direction.delta();
        self.cursor = self.cursor.clamped_offset(df, dr);
        self.status = match &self.selection {
            Selection::Idle => Status::Ready,
            Selection::Selected { origin, .. } => match self.board.piece_at(*origin) {
                Some(piece) => Status::Selected(piece.name()),
                None => Status::Ready,
            },
        };
    }

    fn activate(&mut self) {
        match std::mem::replace(&mut self.selection, Selection::Idle) {
            Selection::Idle => self.select_at_cursor(),
            Selection::Selected { origin, moves } => {
                self.status = if moves.contains(self.cursor) {
                    self.execute(origin)
                } else {
                    tracing::debug!(origin = %origin, "Deselected");
                    Status::Deselected
                };
            }
        }
    }

    fn select_at_cursor(&mut self) {
        let Some(piece) = self.board.piece_at(self.cursor) else {
            self.status = Status::EmptySquare;
            return;
        };
        let moves = movegen::generate(piece, &self.board);
        tracing::debug!(
            piece = %piece.name(),
            at = %self.cursor,
            candidates = moves.len(),
            "Piece selected"
        );
        self.status = Status::Selected(piece.name());
        self.selection = Selection::Selected {
            origin: self.cursor,
            moves,
        };
    }

    fn execute(&mut self, origin: Coordinate) -> Status {
        let name = self
            .board
            .piece_at(origin)
            .map(Piece::name)
            .unwrap_or_default();
        match self.board.move_piece(origin, self.cursor) {
            Ok(_) => Status::Moved(name),
            Err(err) => {
                tracing::debug!(error = %err, "Move rejected");
                Status::InvalidMove(err)
            }
        }
    }
}

impl Default for SelectionController {
    fn default() -> Self {
        Self::new(Board::standard())
    }
}
