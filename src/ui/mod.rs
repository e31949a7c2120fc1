//! GUI module for the Gobang game
//!
//! egui/eframe front end. [`Screen`] implements the engine's render and
//! notification ports; the app turns clicks and keys into commands.

mod app;
mod board_view;
mod screen;
mod theme;

pub use app::GobangApp;
pub use screen::{Banner, Screen};
