pub mod board;
pub mod controls_panel;
pub mod status_panel;

pub use board::{BoardWidget, SquareHighlight};
pub use controls_panel::ControlsPanel;
pub use status_panel::StatusPanel;
