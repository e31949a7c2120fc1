//! Port implementations backing the GUI

use crate::game::{GameController, Notification, NotificationPort, RenderPort, Snapshot};
use crate::{Pos, Stone};

/// Win announcement held until the players dismiss it
#[derive(Debug, Clone)]
pub struct Banner {
    pub winner: Stone,
    pub line: Vec<Pos>,
    /// Board as it looked when the winning stone landed
    pub final_frame: Option<Snapshot>,
}

/// Latest frame pushed by the engine plus any pending announcement
#[derive(Debug, Default)]
pub struct Screen {
    pub frame: Option<Snapshot>,
    pub banner: Option<Banner>,
    /// `frame` changed and has not been drawn yet
    unpainted: bool,
}

impl Screen {
    pub fn dismiss_banner(&mut self) {
        self.banner = None;
    }

    /// Record that `frame` has been drawn to the window.
    pub fn mark_painted(&mut self) {
        self.unpainted = false;
    }

    pub fn is_painted(&self) -> bool {
        !self.unpainted
    }
}

impl RenderPort for Screen {
    fn render(&mut self, snapshot: Snapshot) {
        self.frame = Some(snapshot);
        self.unpainted = true;
    }
}

impl NotificationPort for Screen {
    fn notify(&mut self, notification: Notification) {
        match notification {
            Notification::Won { winner, line } => {
                self.banner = Some(Banner {
                    winner,
                    line,
                    final_frame: self.frame.clone(),
                });
            }
        }
    }
}

impl GameController<Screen> {
    /// Run queued follow-ups only once the frame they follow is on screen.
    /// Returns true if anything was settled.
    pub fn settle_after_paint(&mut self) -> bool {
        if !self.has_pending() || !self.ports().is_painted() {
            return false;
        }
        self.settle();
        true
    }
}
