//! Turn orchestration for Gobang
//!
//! [`GameState`] owns everything that changes during play. The
//! [`GameController`] feeds it typed [`Command`]s and reports every change
//! through the [`RenderPort`] and [`NotificationPort`] it was built with.

mod controller;
mod state;

pub use controller::GameController;
pub use state::GameState;

use serde::{Deserialize, Serialize};

use crate::board::{Board, Pos, Stone};
use crate::history::Move;

/// Input events accepted by the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Place the current color at grid coordinate `(x, y)`
    PlaceStone { x: i32, y: i32 },
    Undo,
    Redo,
    Reset,
    ToggleMode,
}

/// How the presentation layer should draw the board.
/// Not interpreted by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    /// Stones painted on grid intersections
    #[default]
    Canvas,
    /// One tile per coordinate
    #[serde(alias = "dom")]
    Cells,
}

impl RenderMode {
    pub fn toggled(self) -> Self {
        match self {
            RenderMode::Canvas => RenderMode::Cells,
            RenderMode::Cells => RenderMode::Canvas,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            RenderMode::Canvas => "canvas",
            RenderMode::Cells => "cells",
        }
    }
}

impl std::str::FromStr for RenderMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "canvas" => Ok(RenderMode::Canvas),
            "cells" | "dom" => Ok(RenderMode::Cells),
            other => Err(format!("unknown render mode '{other}' (expected 'canvas' or 'cells')")),
        }
    }
}

/// Everything a renderer needs to redraw from scratch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub board: Board,
    pub next_turn: Stone,
    pub render_mode: RenderMode,
    pub last_move: Option<Move>,
    /// Moves currently on the board
    pub move_count: usize,
    pub can_undo: bool,
    pub can_redo: bool,
}

/// Terminal game events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    Won { winner: Stone, line: Vec<Pos> },
}

/// Receives a full snapshot after every state change. Fire-and-forget.
pub trait RenderPort {
    fn render(&mut self, snapshot: Snapshot);
}

/// Receives win announcements.
pub trait NotificationPort {
    fn notify(&mut self, notification: Notification);
}
