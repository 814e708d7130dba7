use chess::{Board, ControllerView, Flow, SelectionController};
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io::{self, Stdout};

use crate::config::Settings;
use crate::ui::input::command_for_key;
use crate::ui::theme::Theme;
use crate::ui::widgets::{BoardWidget, ControlsPanel, StatusPanel};

/// Width of the side column holding the status and controls panels.
const SIDE_PANEL_WIDTH: u16 = 38;

/// Take over the terminal, run the board until the player quits, and restore
/// the terminal even when the loop fails.
pub fn run_app(settings: &Settings, board: Board) -> anyhow::Result<()> {
    enable_raw_mode()?;
    let mut terminal = undo_on_error(open_alternate_screen(), || {
        let _ = disable_raw_mode();
    })?;

    let mut controller = SelectionController::new(board);
    let result = run_ui_loop(&mut terminal, &mut controller, settings);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn open_alternate_screen() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    undo_on_error(Terminal::new(CrosstermBackend::new(stdout)), || {
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    })
}

/// Run `undo` when `result` failed, then hand `result` back unchanged.
fn undo_on_error<T, E>(result: Result<T, E>, undo: impl FnOnce()) -> Result<T, E> {
    if result.is_err() {
        undo();
    }
    result
}

fn run_ui_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    controller: &mut SelectionController,
    settings: &Settings,
) -> anyhow::Result<()> {
    let theme = Theme::from_kind(settings.theme);

    loop {
        terminal.draw(|f| draw(f, &controller.view(), &theme, settings))?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        let Some(command) = command_for_key(key) else {
            tracing::trace!(?key, "Ignored key");
            continue;
        };

        tracing::debug!(?command, "Applying command");
        if controller.apply(command) == Flow::Quit {
            tracing::info!("Player quit");
            break;
        }
    }

    Ok(())
}

/// Lay out the board on the left and the status/controls column on the right.
pub fn draw(f: &mut Frame<'_>, view: &ControllerView<'_>, theme: &Theme, settings: &Settings) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(30), Constraint::Length(SIDE_PANEL_WIDTH)])
        .split(f.area());

    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(8), Constraint::Min(6)])
        .split(columns[1]);

    f.render_widget(BoardWidget::new(view, theme, settings.glyphs), columns[0]);
    f.render_widget(StatusPanel::new(view, theme), side[0]);
    f.render_widget(ControlsPanel::new(theme), side[1]);
}
