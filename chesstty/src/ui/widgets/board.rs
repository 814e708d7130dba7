use chess::{Coordinate, ControllerView};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Widget},
};

use crate::config::GlyphStyle;
use crate::ui::theme::{piece_glyph, Theme};

/// Columns reserved left of the board for rank labels.
const RANK_LABEL_WIDTH: u16 = 3;
/// Rows reserved under the board for file labels.
const FILE_LABEL_HEIGHT: u16 = 1;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct BoardSize {
    square_width: u16,
    square_height: u16,
}

impl BoardSize {
    const COMPACT: Self = Self {
        square_width: 3,
        square_height: 1,
    };

    const ROOMY: Self = Self {
        square_width: 7,
        square_height: 3,
    };

    /// Calculate the best board size for the given area
    fn for_area(area: Rect) -> Self {
        let available_width = area.width.saturating_sub(RANK_LABEL_WIDTH);
        let available_height = area.height.saturating_sub(FILE_LABEL_HEIGHT);

        if available_width >= Self::ROOMY.square_width * 8
            && available_height >= Self::ROOMY.square_height * 8
        {
            Self::ROOMY
        } else {
            Self::COMPACT
        }
    }
}

/// Where the 8x8 grid lands inside the widget's inner area.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct BoardGeometry {
    x: u16,
    y: u16,
    size: BoardSize,
}

impl BoardGeometry {
    /// Center the board (plus labels) within `inner`.
    fn new(inner: Rect) -> Self {
        let size = BoardSize::for_area(inner);
        let total_width = size.square_width * 8 + RANK_LABEL_WIDTH;
        let total_height = size.square_height * 8 + FILE_LABEL_HEIGHT;
        let offset_x = inner.width.saturating_sub(total_width) / 2;
        let offset_y = inner.height.saturating_sub(total_height) / 2;
        Self {
            x: inner.x + offset_x + RANK_LABEL_WIDTH,
            y: inner.y + offset_y,
            size,
        }
    }

    /// Rank 0 is drawn as the top row.
    fn square_rect(&self, c: Coordinate) -> Rect {
        Rect::new(
            self.x + u16::from(c.file()) * self.size.square_width,
            self.y + u16::from(c.rank()) * self.size.square_height,
            self.size.square_width,
            self.size.square_height,
        )
    }

    fn center(&self, c: Coordinate) -> (u16, u16) {
        let rect = self.square_rect(c);
        (rect.x + rect.width / 2, rect.y + rect.height / 2)
    }
}

/// Background layer for a square. When several apply, the cursor wins over
/// the selected piece, which wins over a candidate move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SquareHighlight {
    Cursor,
    Selected,
    Candidate,
    None,
}

impl SquareHighlight {
    pub fn for_square(view: &ControllerView<'_>, c: Coordinate) -> Self {
        let selected = view.selected.as_ref();
        if view.cursor == c {
            Self::Cursor
        } else if selected.is_some_and(|(piece, _)| piece.coordinate() == c) {
            Self::Selected
        } else if selected.is_some_and(|(_, moves)| moves.contains(c)) {
            Self::Candidate
        } else {
            Self::None
        }
    }

    fn bg_color(self, theme: &Theme, is_light_square: bool) -> Color {
        let (light, dark) = match self {
            Self::Cursor => theme.overlay_cursor,
            Self::Selected => theme.overlay_selected,
            Self::Candidate => theme.overlay_candidate,
            Self::None => (theme.light_square, theme.dark_square),
        };
        if is_light_square {
            light
        } else {
            dark
        }
    }
}

pub struct BoardWidget<'a> {
    pub view: &'a ControllerView<'a>,
    pub theme: &'a Theme,
    pub glyphs: GlyphStyle,
}

impl<'a> BoardWidget<'a> {
    pub fn new(view: &'a ControllerView<'a>, theme: &'a Theme, glyphs: GlyphStyle) -> Self {
        Self {
            view,
            theme,
            glyphs,
        }
    }
}

impl Widget for BoardWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title("♟ Chess Board ♟")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.board_border));
        let inner = block.inner(area);
        block.render(area, buf);

        let geometry = BoardGeometry::new(inner);
        let label_style = Style::default().fg(self.theme.board_label);

        for c in Coordinate::all() {
            let rect = geometry.square_rect(c);
            let is_light_square = (c.file() + c.rank()) % 2 == 0;
            let bg_color = SquareHighlight::for_square(self.view, c)
                .bg_color(self.theme, is_light_square);

            fill_square(buf, rect, bg_color, inner);

            if let Some((kind, color)) = self.view.board.piece_at(c) {
                let (x, y) = geometry.center(c);
                if x < inner.right() && y < inner.bottom() {
                    let style = Style::default()
                        .bg(bg_color)
                        .fg(self.theme.piece_color(color))
                        .add_modifier(Modifier::BOLD);
                    let glyph = piece_glyph(kind, color, self.glyphs);
                    buf.set_string(x, y, glyph.to_string(), style);
                }
            }

            // Labels come from the algebraic name, e.g. `b1` → `b` and `1`.
            let name = c.to_string();
            let (file_label, rank_label) = name.split_at(1);
            if c.file() == 0 {
                let (_, y) = geometry.center(c);
                let x = geometry.x.saturating_sub(2);
                if y < inner.bottom() {
                    buf.set_string(x, y, rank_label, label_style);
                }
            }
            if c.rank() == 7 {
                let (x, _) = geometry.center(c);
                let y = rect.bottom();
                if x < inner.right() && y < inner.bottom() {
                    buf.set_string(x, y, file_label, label_style);
                }
            }
        }
    }
}

fn fill_square(buf: &mut Buffer, rect: Rect, bg_color: Color, bounds: Rect) {
    let style = Style::default().bg(bg_color);
    for py in rect.top()..rect.bottom() {
        for px in rect.left()..rect.right() {
            if px < bounds.right() && py < bounds.bottom() {
                buf[(px, py)].set_style(style);
            }
        }
    }
}
