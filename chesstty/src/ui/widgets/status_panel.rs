use chess::{ControllerView, Status};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::ui::theme::Theme;

/// Cursor square, current selection and the last status message.
pub struct StatusPanel<'a> {
    pub view: &'a ControllerView<'a>,
    pub theme: &'a Theme,
}

impl<'a> StatusPanel<'a> {
    pub fn new(view: &'a ControllerView<'a>, theme: &'a Theme) -> Self {
        Self { view, theme }
    }

    fn status_style(&self) -> Style {
        let color = match self.view.status {
            Status::Ready => self.theme.text_secondary,
            Status::Moved(_) => self.theme.positive,
            Status::Selected(_) => self.theme.info,
            Status::EmptySquare | Status::Deselected => self.theme.warning,
            Status::InvalidMove(_) => self.theme.negative,
        };
        Style::default().fg(color)
    }
}

impl Widget for StatusPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title("Status")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.panel_border));
        let inner = block.inner(area);
        block.render(area, buf);

        let label = Style::default()
            .fg(self.theme.warning)
            .add_modifier(Modifier::BOLD);
        let value = Style::default().fg(self.theme.text_primary);

        let cursor_line = Line::from(vec![
            Span::styled("Cursor: ", label),
            Span::styled(self.view.cursor.to_string(), value),
        ]);

        let selection_line = match &self.view.selected {
            Some((piece, moves)) => Line::from(vec![
                Span::styled("Selected: ", label),
                Span::styled(format!("{} on {}", piece.name(), piece.coordinate()), value),
                Span::styled(
                    format!(" ({} moves)", moves.len()),
                    Style::default().fg(self.theme.muted),
                ),
            ]),
            None => Line::from(vec![
                Span::styled("Selected: ", label),
                Span::styled("none", Style::default().fg(self.theme.muted)),
            ]),
        };

        let status_line = Line::from(Span::styled(
            self.view.status.to_string(),
            self.status_style(),
        ));

        Paragraph::new(vec![cursor_line, selection_line, Line::raw(""), status_line])
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}
