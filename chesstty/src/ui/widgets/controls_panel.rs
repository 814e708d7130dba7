use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::ui::theme::Theme;

pub struct ControlsPanel<'a> {
    pub theme: &'a Theme,
}

impl<'a> ControlsPanel<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }
}

impl Widget for ControlsPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title("⌨ Controls ⌨")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.panel_border));

        let inner = block.inner(area);
        block.render(area, buf);

        let key = |color: Color| Style::default().fg(color).add_modifier(Modifier::BOLD);

        let lines = vec![
            Line::from(vec![
                Span::styled("←↑↓→ / hjkl ", key(self.theme.info)),
                Span::raw("Move Cursor"),
            ]),
            Line::from(vec![
                Span::styled("Space/Enter ", key(self.theme.positive)),
                Span::raw("Select / Move"),
            ]),
            Line::raw(""),
            Line::from(vec![
                Span::styled("q / Ctrl+C ", key(self.theme.negative)),
                Span::raw("Quit"),
            ]),
        ];

        Paragraph::new(lines).render(inner, buf);
    }
}
