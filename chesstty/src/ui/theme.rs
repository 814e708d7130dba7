use chess::{PieceColor, PieceKind};
use ratatui::style::Color;

use crate::config::{GlyphStyle, ThemeKind};

/// All colors used by the TUI, grouped by purpose.
/// Swap between presets (Dark / Light) to adapt to the terminal background.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    // ── Board ──────────────────────────────────────────────────────
    pub light_square: Color,
    pub dark_square: Color,
    pub white_piece: Color,
    pub black_piece: Color,
    pub board_border: Color,
    pub board_label: Color,

    // ── Overlays (light-square variant, dark-square variant) ──────
    pub overlay_cursor: (Color, Color),
    pub overlay_selected: (Color, Color),
    pub overlay_candidate: (Color, Color),

    // ── Panel chrome ──────────────────────────────────────────────
    pub panel_border: Color,

    // ── Semantic status ───────────────────────────────────────────
    pub positive: Color,
    pub warning: Color,
    pub negative: Color,
    pub info: Color,
    pub muted: Color,

    // ── Text ──────────────────────────────────────────────────────
    pub text_primary: Color,
    pub text_secondary: Color,
}

impl Theme {
    /// Designed for terminals with a dark background.
    pub fn dark() -> Self {
        Self {
            light_square: Color::Rgb(240, 217, 181),
            dark_square: Color::Rgb(181, 136, 99),
            // Explicit RGB instead of ANSI White/Black: many terminals
            // remap ANSI colors, causing pieces to blend into the board.
            white_piece: Color::Rgb(255, 255, 255),
            black_piece: Color::Rgb(0, 0, 0),
            board_border: Color::Cyan,
            board_label: Color::Yellow,

            overlay_cursor: (Color::Rgb(170, 170, 170), Color::Rgb(120, 120, 120)),
            overlay_selected: (Color::LightGreen, Color::Green),
            overlay_candidate: (Color::LightRed, Color::Red),

            panel_border: Color::Cyan,

            positive: Color::Green,
            warning: Color::Yellow,
            negative: Color::Red,
            info: Color::Cyan,
            muted: Color::DarkGray,

            text_primary: Color::White,
            text_secondary: Color::Gray,
        }
    }

    /// Designed for terminals with a light background.
    pub fn light() -> Self {
        Self {
            light_square: Color::Rgb(238, 238, 210),
            dark_square: Color::Rgb(118, 150, 86),
            white_piece: Color::Rgb(255, 255, 255),
            black_piece: Color::Rgb(20, 20, 20),
            board_border: Color::Blue,
            board_label: Color::Rgb(120, 80, 0),

            overlay_cursor: (Color::Rgb(200, 200, 200), Color::Rgb(150, 150, 150)),
            overlay_selected: (Color::Rgb(170, 220, 120), Color::Rgb(100, 170, 60)),
            overlay_candidate: (Color::Rgb(255, 170, 170), Color::Rgb(210, 90, 90)),

            panel_border: Color::Blue,

            positive: Color::Rgb(0, 130, 0),
            warning: Color::Rgb(160, 110, 0),
            negative: Color::Rgb(180, 0, 0),
            info: Color::Blue,
            muted: Color::Gray,

            text_primary: Color::Black,
            text_secondary: Color::DarkGray,
        }
    }

    pub fn from_kind(kind: ThemeKind) -> Self {
        match kind {
            ThemeKind::Dark => Self::dark(),
            ThemeKind::Light => Self::light(),
        }
    }

    pub fn piece_color(&self, color: PieceColor) -> Color {
        match color {
            PieceColor::White => self.white_piece,
            PieceColor::Black => self.black_piece,
        }
    }
}

/// Glyph for a piece. White uses the filled symbols, Black the outlined ones.
pub fn piece_glyph(kind: PieceKind, color: PieceColor, style: GlyphStyle) -> char {
    match style {
        GlyphStyle::Ascii => match color {
            PieceColor::White => kind.to_char_upper(),
            PieceColor::Black => kind.to_char_lower(),
        },
        GlyphStyle::Unicode => match (color, kind) {
            (PieceColor::White, PieceKind::King) => '♚',
            (PieceColor::White, PieceKind::Queen) => '♛',
            (PieceColor::White, PieceKind::Rook) => '♜',
            (PieceColor::White, PieceKind::Bishop) => '♝',
            (PieceColor::White, PieceKind::Knight) => '♞',
            (PieceColor::White, PieceKind::Pawn) => '♟',
            (PieceColor::Black, PieceKind::King) => '♔',
            (PieceColor::Black, PieceKind::Queen) => '♕',
            (PieceColor::Black, PieceKind::Rook) => '♖',
            (PieceColor::Black, PieceKind::Bishop) => '♗',
            (PieceColor::Black, PieceKind::Knight) => '♘',
            (PieceColor::Black, PieceKind::Pawn) => '♙',
        },
    }
}
