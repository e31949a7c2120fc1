//! Gobang (five-in-a-row) rule and state engine
//!
//! Two players alternate placing Black and White stones on an N x N grid
//! (15 x 15 by default). Black moves first; five or more in an unbroken
//! horizontal, vertical or diagonal line wins and starts a new game.
//!
//! # Architecture
//!
//! - [`board`]: the grid of cells, bounds-checked
//! - [`history`]: linear move log with undo/redo
//! - [`rules`]: five-in-a-row detection around the last move
//! - [`game`]: game state, typed commands, output ports and the controller
//! - [`config`]: board size and initial presentation mode from TOML
//! - [`ui`]: egui front end implementing the output ports
//!
//! # Quick Start
//!
//! ```
//! use gobang::{Command, GameConfig, GameController, Notification, NotificationPort, RenderPort, Snapshot};
//!
//! #[derive(Default)]
//! struct Log {
//!     frames: usize,
//!     wins: Vec<Notification>,
//! }
//!
//! impl RenderPort for Log {
//!     fn render(&mut self, _snapshot: Snapshot) {
//!         self.frames += 1;
//!     }
//! }
//!
//! impl NotificationPort for Log {
//!     fn notify(&mut self, notification: Notification) {
//!         self.wins.push(notification);
//!     }
//! }
//!
//! let mut game = GameController::new(&GameConfig::default(), Log::default()).unwrap();
//! game.execute(Command::PlaceStone { x: 7, y: 7 });
//! game.execute(Command::Undo);
//! game.execute(Command::Redo);
//! assert_eq!(game.state().history.applied(), 1);
//! assert!(game.ports().wins.is_empty());
//! ```

pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod history;
pub mod rules;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Pos, Stone, DEFAULT_BOARD_SIZE};
pub use config::GameConfig;
pub use error::{BoardError, ConfigError};
pub use game::{
    Command, GameController, GameState, Notification, NotificationPort, RenderMode, RenderPort,
    Snapshot,
};
pub use history::{Move, MoveHistory};
