//! Configuration for the ChessTTY terminal board.
//!
//! Every tunable has a compile-time default and can be overridden through a
//! dedicated environment variable. Command-line flags win over both.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Default directory for rolling log files.
const DEFAULT_LOG_DIR: &str = "logs";

/// Default color theme.
const DEFAULT_THEME: ThemeKind = ThemeKind::Dark;

/// Default piece glyph set.
const DEFAULT_GLYPHS: GlyphStyle = GlyphStyle::Unicode;

/// Color palette preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ThemeKind {
    Dark,
    Light,
}

/// How pieces are drawn on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum GlyphStyle {
    /// Chess symbols such as `♞`.
    Unicode,
    /// Letters: uppercase White, lowercase Black.
    Ascii,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} '{value}'")]
pub struct ParseSettingError {
    kind: &'static str,
    value: String,
}

impl FromStr for ThemeKind {
    type Err = ParseSettingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            _ => Err(ParseSettingError {
                kind: "theme",
                value: s.to_string(),
            }),
        }
    }
}

impl FromStr for GlyphStyle {
    type Err = ParseSettingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "unicode" => Ok(Self::Unicode),
            "ascii" => Ok(Self::Ascii),
            _ => Err(ParseSettingError {
                kind: "glyph style",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for ThemeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Dark => "dark",
            Self::Light => "light",
        })
    }
}

/// Get the directory for log files.
///
/// Priority:
/// 1. `CHESSTTY_LOG_DIR` env variable if set
/// 2. `logs` as fallback
pub fn get_log_dir() -> PathBuf {
    if let Ok(path) = std::env::var("CHESSTTY_LOG_DIR") {
        return PathBuf::from(path);
    }

    PathBuf::from(DEFAULT_LOG_DIR)
}

/// Get the color theme.
///
/// Priority:
/// 1. `CHESSTTY_THEME` env variable if set (falls back to the default if the
///    value is not a known theme)
/// 2. `dark` as fallback
pub fn get_theme() -> ThemeKind {
    parse_or(std::env::var("CHESSTTY_THEME").ok(), DEFAULT_THEME)
}

/// Get the piece glyph style.
///
/// Priority:
/// 1. `CHESSTTY_GLYPHS` env variable if set (falls back to the default if the
///    value is not a known style)
/// 2. `unicode` as fallback
pub fn get_glyphs() -> GlyphStyle {
    parse_or(std::env::var("CHESSTTY_GLYPHS").ok(), DEFAULT_GLYPHS)
}

fn parse_or<T: FromStr>(value: Option<String>, default: T) -> T {
    value.and_then(|v| v.parse().ok()).unwrap_or(default)
}

/// Fully resolved runtime settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub theme: ThemeKind,
    pub glyphs: GlyphStyle,
    pub log_dir: PathBuf,
    /// Optional placement string to start from instead of the standard setup.
    pub position: Option<String>,
}

impl Settings {
    /// Merge command-line overrides over environment/default values.
    pub fn resolve(
        theme: Option<ThemeKind>,
        glyphs: Option<GlyphStyle>,
        log_dir: Option<PathBuf>,
        position: Option<String>,
    ) -> Self {
        Self {
            theme: theme.unwrap_or_else(get_theme),
            glyphs: glyphs.unwrap_or_else(get_glyphs),
            log_dir: log_dir.unwrap_or_else(get_log_dir),
            position,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::resolve(None, None, None, None)
    }
}
