//! ChessTTY - a chessboard in the terminal.
//!
//! Move the cursor with the arrow keys, press Space or Enter to pick up a
//! piece, and press it again on a highlighted square to move there. Either
//! side may move at any time.

use std::path::PathBuf;

use anyhow::Context;
use chess::Board;
use chesstty::config::{GlyphStyle, Settings, ThemeKind};
use clap::Parser;

/// Command-line arguments. Unset flags fall back to the `CHESSTTY_*`
/// environment variables and then to built-in defaults.
#[derive(Parser)]
#[command(name = "chesstty", about = "Terminal chessboard with cursor selection")]
struct Cli {
    /// Color theme.
    #[arg(long, value_enum)]
    theme: Option<ThemeKind>,

    /// Piece glyphs.
    #[arg(long, value_enum)]
    glyphs: Option<GlyphStyle>,

    /// Start from a FEN piece-placement field instead of the standard setup.
    #[arg(long)]
    position: Option<String>,

    /// Directory for rolling log files.
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let settings = Settings::resolve(cli.theme, cli.glyphs, cli.log_dir, cli.position);

    let _guard = chesstty::logging::init(&settings.log_dir).with_context(|| {
        format!("failed to set up logging in {}", settings.log_dir.display())
    })?;

    tracing::info!(
        theme = %settings.theme,
        glyphs = ?settings.glyphs,
        "ChessTTY starting up"
    );

    let board = match settings.position.as_deref() {
        Some(placement) => Board::from_placement(placement)
            .with_context(|| format!("invalid --position '{placement}'"))?,
        None => Board::standard(),
    };

    chesstty::ui::run_app(&settings, board)?;

    tracing::info!("ChessTTY shutting down");
    Ok(())
}
