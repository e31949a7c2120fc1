//! Command dispatch and the two-phase turn protocol
//!
//! A placed stone is applied and rendered first; the win check is queued as
//! a follow-up and only runs on [`GameController::settle`]. The next
//! [`GameController::dispatch`] settles anything still queued before it
//! touches the state, so commands never interleave with a pending check.

use std::collections::VecDeque;

use tracing::{debug, error, info, instrument};

use super::{Command, GameState, Notification, NotificationPort, RenderMode, RenderPort};
use crate::config::GameConfig;
use crate::error::ConfigError;
use crate::history::Move;
use crate::rules::{winning_line, MIN_MOVES_FOR_WIN};

/// Work queued behind an applied command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FollowUp {
    EvaluateWin(Move),
}

/// Owns the game state and the output ports
pub struct GameController<P> {
    state: GameState,
    ports: P,
    pending: VecDeque<FollowUp>,
}

impl<P: RenderPort + NotificationPort> GameController<P> {
    /// Build a fresh game and push the initial empty board to the renderer.
    pub fn new(config: &GameConfig, ports: P) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut controller = Self {
            state: GameState::new(config.board_size, config.render_mode),
            ports,
            pending: VecDeque::new(),
        };
        controller.render();
        Ok(controller)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn ports(&self) -> &P {
        &self.ports
    }

    pub fn ports_mut(&mut self) -> &mut P {
        &mut self.ports
    }

    /// Whether a follow-up step is waiting for [`Self::settle`]
    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Apply one command and render the result. Follow-up work is queued.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, command: Command) {
        self.settle();

        match command {
            Command::PlaceStone { x, y } => self.apply_move(x, y),
            Command::Undo => self.apply_undo(),
            Command::Redo => self.apply_redo(),
            Command::Reset => self.apply_reset(),
            Command::ToggleMode => self.apply_toggle(),
        }
    }

    /// Run queued follow-ups in order.
    pub fn settle(&mut self) {
        while let Some(step) = self.pending.pop_front() {
            match step {
                FollowUp::EvaluateWin(mv) => self.evaluate_win(mv),
            }
        }
    }

    /// Dispatch and settle in one call.
    pub fn execute(&mut self, command: Command) {
        self.dispatch(command);
        self.settle();
    }

    pub fn attempt_move(&mut self, x: i32, y: i32) {
        self.dispatch(Command::PlaceStone { x, y });
    }

    pub fn undo(&mut self) {
        self.dispatch(Command::Undo);
    }

    pub fn redo(&mut self) {
        self.dispatch(Command::Redo);
    }

    pub fn reset(&mut self) {
        self.dispatch(Command::Reset);
    }

    pub fn toggle_render_mode(&mut self) {
        self.dispatch(Command::ToggleMode);
    }

    pub fn render_mode(&self) -> RenderMode {
        self.state.render_mode
    }

    fn apply_move(&mut self, x: i32, y: i32) {
        if let Some(mv) = self.state.place_stone(x, y) {
            self.render();
            self.pending.push_back(FollowUp::EvaluateWin(mv));
        }
    }

    fn apply_undo(&mut self) {
        match self.state.undo() {
            Ok(Some(mv)) => {
                debug!(x = mv.pos.x, y = mv.pos.y, "undo");
                self.render();
            }
            Ok(None) => debug!("nothing to undo"),
            Err(e) => error!(error = %e, "undo touched an invalid cell"),
        }
    }

    fn apply_redo(&mut self) {
        match self.state.redo() {
            Ok(Some(mv)) => {
                debug!(x = mv.pos.x, y = mv.pos.y, "redo");
                self.render();
            }
            Ok(None) => debug!("nothing to redo"),
            Err(e) => error!(error = %e, "redo touched an invalid cell"),
        }
    }

    fn apply_reset(&mut self) {
        info!("new game");
        self.state.reset();
        self.pending.clear();
        self.render();
    }

    fn apply_toggle(&mut self) {
        let mode = self.state.toggle_render_mode();
        debug!(mode = mode.name(), "render mode changed");
        self.render();
    }

    fn evaluate_win(&mut self, mv: Move) {
        if self.state.history.applied() < MIN_MOVES_FOR_WIN {
            return;
        }
        if self.state.history.last_applied() != Some(mv) {
            return;
        }
        if let Some(line) = winning_line(&self.state.board, mv) {
            info!(winner = %mv.color, moves = self.state.history.applied(), "five in a row");
            self.ports.notify(Notification::Won {
                winner: mv.color,
                line,
            });
            self.apply_reset();
        }
    }

    fn render(&mut self) {
        let snapshot = self.state.snapshot();
        self.ports.render(snapshot);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Pos, Stone};
    use crate::game::Snapshot;

    #[derive(Default)]
    struct Recorder {
        frames: Vec<Snapshot>,
        notifications: Vec<Notification>,
    }

    impl RenderPort for Recorder {
        fn render(&mut self, snapshot: Snapshot) {
            self.frames.push(snapshot);
        }
    }

    impl NotificationPort for Recorder {
        fn notify(&mut self, notification: Notification) {
            self.notifications.push(notification);
        }
    }

    fn controller() -> GameController<Recorder> {
        GameController::new(&GameConfig::default(), Recorder::default()).unwrap()
    }

    #[test]
    fn test_rejects_unusable_board_size() {
        for board_size in [0, 1, 4, 27, 1 << 33] {
            let config = GameConfig {
                board_size,
                ..GameConfig::default()
            };
            let err = GameController::new(&config, Recorder::default()).err();
            assert!(
                matches!(err, Some(ConfigError::Validation(_))),
                "board_size {board_size} should be rejected"
            );
        }
    }

    #[test]
    fn test_initial_render() {
        let game = controller();
        assert_eq!(game.ports().frames.len(), 1);
        assert!(game.ports().frames[0].board.is_board_empty());
        assert_eq!(game.ports().frames[0].next_turn, Stone::Black);
    }

    #[test]
    fn test_move_renders_then_queues_check() {
        let mut game = controller();
        game.attempt_move(7, 7);
        assert_eq!(game.ports().frames.len(), 2);
        assert!(game.has_pending());
        game.settle();
        assert!(!game.has_pending());
        assert!(game.ports().notifications.is_empty());
    }

    #[test]
    fn test_rejected_move_is_silent() {
        let mut game = controller();
        game.execute(Command::PlaceStone { x: 7, y: 7 });
        game.execute(Command::PlaceStone { x: 7, y: 7 });
        game.execute(Command::PlaceStone { x: 15, y: 0 });
        game.execute(Command::PlaceStone { x: 0, y: -3 });
        assert_eq!(game.ports().frames.len(), 2);
        assert_eq!(game.state().history.len(), 1);
        assert_eq!(game.state().current_turn, Stone::White);
        assert!(!game.has_pending());
    }

    #[test]
    fn test_empty_undo_redo_do_not_render() {
        let mut game = controller();
        game.undo();
        game.redo();
        assert_eq!(game.ports().frames.len(), 1);
    }

    #[test]
    fn test_toggle_mode_renders_without_touching_board() {
        let mut game = controller();
        game.execute(Command::PlaceStone { x: 1, y: 1 });
        game.toggle_render_mode();
        let last = game.ports().frames.last().unwrap();
        assert_eq!(last.render_mode, RenderMode::Cells);
        assert_eq!(last.move_count, 1);
        assert_eq!(game.render_mode(), RenderMode::Cells);
    }

    #[test]
    fn test_win_announced_after_render_then_reset() {
        let mut game = controller();
        // Black along row 0, White along row 2
        for x in 0..4 {
            game.execute(Command::PlaceStone { x, y: 0 });
            game.execute(Command::PlaceStone { x, y: 2 });
        }
        game.dispatch(Command::PlaceStone { x: 4, y: 0 });

        // Winning stone rendered, nothing announced yet
        let frame = game.ports().frames.last().unwrap();
        assert_eq!(frame.board.get(Pos::new(4, 0)).unwrap(), Stone::Black);
        assert!(game.ports().notifications.is_empty());

        game.settle();
        assert_eq!(
            game.ports().notifications,
            vec![Notification::Won {
                winner: Stone::Black,
                line: (0..5).map(|x| Pos::new(x, 0)).collect(),
            }]
        );
        let frame = game.ports().frames.last().unwrap();
        assert!(frame.board.is_board_empty());
        assert_eq!(frame.next_turn, Stone::Black);
        assert_eq!(game.state().history.pointer(), None);
    }

    #[test]
    fn test_next_dispatch_settles_pending_win() {
        let mut game = controller();
        for x in 0..4 {
            game.execute(Command::PlaceStone { x, y: 0 });
            game.execute(Command::PlaceStone { x, y: 2 });
        }
        game.dispatch(Command::PlaceStone { x: 4, y: 0 });
        game.dispatch(Command::PlaceStone { x: 7, y: 7 });

        assert_eq!(game.ports().notifications.len(), 1);
        assert_eq!(game.state().history.len(), 1);
        assert_eq!(
            game.state().board.get(Pos::new(7, 7)).unwrap(),
            Stone::Black
        );
    }

    #[test]
    fn test_reset_settles_pending_first() {
        let mut game = controller();
        game.dispatch(Command::PlaceStone { x: 0, y: 0 });
        assert!(game.has_pending());
        game.settle();
        game.dispatch(Command::PlaceStone { x: 1, y: 0 });
        game.dispatch(Command::Reset);
        assert!(!game.has_pending());
        assert!(game.state().board.is_board_empty());
    }
}
