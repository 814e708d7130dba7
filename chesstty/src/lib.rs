pub mod config;
pub mod logging;
pub mod ui;

pub use config::Settings;
