//! Board rendering for the Gobang GUI

use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::game::{RenderMode, Snapshot};
use crate::{Pos, Stone};

use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
    /// Grid dimension of the last drawn frame
    size: usize,
    mode: RenderMode,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 30.0,
            board_rect: Rect::NOTHING,
            size: crate::DEFAULT_BOARD_SIZE,
            mode: RenderMode::Canvas,
        }
    }
}

impl BoardView {
    /// Render a frame and return the clicked grid position, if any.
    ///
    /// `interactive == false` draws the frame without hover or clicks.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        frame: &Snapshot,
        highlight: Option<&[Pos]>,
        interactive: bool,
    ) -> Option<Pos> {
        let available_size = ui.available_size();
        let board_px = (available_size.x.min(available_size.y) - 20.0).max(100.0);

        self.size = frame.board.size();
        self.mode = frame.render_mode;
        self.cell_size = match self.mode {
            RenderMode::Canvas => (board_px - 2.0 * BOARD_MARGIN) / (self.size as f32 - 1.0),
            RenderMode::Cells => (board_px - 2.0 * BOARD_MARGIN) / self.size as f32,
        };

        let (response, painter) =
            ui.allocate_painter(Vec2::new(board_px, board_px), Sense::click());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BG);

        match self.mode {
            RenderMode::Canvas => {
                self.draw_grid(&painter);
                self.draw_star_points(&painter);
            }
            RenderMode::Cells => self.draw_cells(&painter),
        }
        self.draw_coordinates(&painter);

        for (pos, stone) in frame.board.stones() {
            self.draw_stone(&painter, pos, stone);
        }

        if let Some(mv) = frame.last_move {
            self.draw_last_move_marker(&painter, mv.pos);
        }

        if let Some(line) = highlight {
            self.draw_winning_line(&painter, line);
        }

        if !interactive {
            return None;
        }

        let board_pos = response.hover_pos().and_then(|p| self.screen_to_board(p))?;
        if !frame.board.is_empty(board_pos) {
            return None;
        }
        self.draw_hover_preview(&painter, board_pos, frame.next_turn);

        if response.clicked() {
            Some(board_pos)
        } else {
            None
        }
    }

    /// Draw the grid lines stones sit on
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let span = (self.size as f32 - 1.0) * self.cell_size;

        for i in 0..self.size {
            let offset = BOARD_MARGIN + i as f32 * self.cell_size;

            // Vertical line
            let start = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN);
            let end = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN + span);
            painter.line_segment([start, end], stroke);

            // Horizontal line
            let start = self.board_rect.min + Vec2::new(BOARD_MARGIN, offset);
            let end = self.board_rect.min + Vec2::new(BOARD_MARGIN + span, offset);
            painter.line_segment([start, end], stroke);
        }
    }

    fn draw_star_points(&self, painter: &Painter) {
        for (x, y) in star_points(self.size) {
            let center = self.board_to_screen(Pos::new(x, y));
            painter.circle_filled(center, STAR_POINT_RADIUS, STAR_POINT);
        }
    }

    /// Draw one tile per coordinate
    fn draw_cells(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, CELL_BORDER);
        for y in 0..self.size {
            for x in 0..self.size {
                let center = self.board_to_screen(Pos::new(x, y));
                let rect = Rect::from_center_size(center, Vec2::splat(self.cell_size - 2.0));
                painter.rect_filled(rect, CornerRadius::same(2), CELL_BG);
                painter.rect_stroke(rect, CornerRadius::same(2), stroke, egui::StrokeKind::Inside);
            }
        }
    }

    /// Draw coordinate labels (A.., N..1)
    fn draw_coordinates(&self, painter: &Painter) {
        let font = egui::FontId::proportional(12.0);

        for col in 0..self.size {
            let letter = (b'A' + col as u8) as char;
            let x = self.board_to_screen(Pos::new(col, 0)).x;

            let top = Pos2::new(x, self.board_rect.min.y + 12.0);
            painter.text(top, egui::Align2::CENTER_CENTER, letter, font.clone(), GRID_LINE);

            let bottom = Pos2::new(x, self.board_rect.max.y - 12.0);
            painter.text(bottom, egui::Align2::CENTER_CENTER, letter, font.clone(), GRID_LINE);
        }

        for row in 0..self.size {
            let num = self.size - row;
            let y = self.board_to_screen(Pos::new(0, row)).y;

            let left = Pos2::new(self.board_rect.min.x + 14.0, y);
            painter.text(left, egui::Align2::CENTER_CENTER, num.to_string(), font.clone(), GRID_LINE);

            let right = Pos2::new(self.board_rect.max.x - 14.0, y);
            painter.text(right, egui::Align2::CENTER_CENTER, num.to_string(), font.clone(), GRID_LINE);
        }
    }

    fn stone_radius(&self) -> f32 {
        match self.mode {
            RenderMode::Canvas => self.cell_size * STONE_RADIUS_RATIO,
            RenderMode::Cells => self.cell_size * CELL_STONE_RATIO,
        }
    }

    fn draw_stone(&self, painter: &Painter, pos: Pos, stone: Stone) {
        let center = self.board_to_screen(pos);
        let radius = self.stone_radius();

        if self.mode == RenderMode::Cells {
            let fill = match stone {
                Stone::Black => BLACK_STONE,
                Stone::White => WHITE_STONE,
                Stone::Empty => return,
            };
            painter.circle_filled(center, radius, fill);
            return;
        }

        match stone {
            Stone::Black => {
                painter.circle_filled(
                    center + Vec2::new(2.0, 2.0),
                    radius,
                    Color32::from_rgba_unmultiplied(0, 0, 0, 60),
                );
                painter.circle_filled(center, radius, BLACK_STONE);
                painter.circle_filled(
                    center + Vec2::new(-radius * 0.3, -radius * 0.3),
                    radius * 0.2,
                    BLACK_STONE_HIGHLIGHT,
                );
            }
            Stone::White => {
                painter.circle_filled(
                    center + Vec2::new(2.0, 2.0),
                    radius,
                    Color32::from_rgba_unmultiplied(0, 0, 0, 40),
                );
                painter.circle_filled(center, radius, WHITE_STONE);
                painter.circle_stroke(
                    center,
                    radius * 0.85,
                    Stroke::new(radius * 0.1, WHITE_STONE_SHADOW),
                );
            }
            Stone::Empty => {}
        }
    }

    fn draw_last_move_marker(&self, painter: &Painter, pos: Pos) {
        let center = self.board_to_screen(pos);
        painter.circle_filled(center, LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    fn draw_winning_line(&self, painter: &Painter, line: &[Pos]) {
        let stroke = Stroke::new(4.0, WIN_HIGHLIGHT);

        for pair in line.windows(2) {
            let start = self.board_to_screen(pair[0]);
            let end = self.board_to_screen(pair[1]);
            painter.line_segment([start, end], stroke);
        }

        let radius = self.stone_radius() + 3.0;
        for &pos in line {
            painter.circle_stroke(self.board_to_screen(pos), radius, stroke);
        }
    }

    fn draw_hover_preview(&self, painter: &Painter, pos: Pos, turn: Stone) {
        let color = match turn {
            Stone::Black => hover_black(),
            Stone::White => hover_white(),
            Stone::Empty => return,
        };
        painter.circle_filled(self.board_to_screen(pos), self.stone_radius(), color);
    }

    /// Convert screen coordinates to a grid position: nearest intersection
    /// on the canvas, containing tile in cell mode.
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min;
        let shift = match self.mode {
            RenderMode::Canvas => self.cell_size * 0.5,
            RenderMode::Cells => 0.0,
        };
        let x = ((relative.x - BOARD_MARGIN + shift) / self.cell_size).floor();
        let y = ((relative.y - BOARD_MARGIN + shift) / self.cell_size).floor();

        let limit = self.size as f32;
        if x >= 0.0 && x < limit && y >= 0.0 && y < limit {
            Some(Pos::new(x as usize, y as usize))
        } else {
            None
        }
    }

    /// Center of a grid position in screen coordinates
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        let shift = match self.mode {
            RenderMode::Canvas => 0.0,
            RenderMode::Cells => self.cell_size * 0.5,
        };
        let x = self.board_rect.min.x + BOARD_MARGIN + shift + pos.x as f32 * self.cell_size;
        let y = self.board_rect.min.y + BOARD_MARGIN + shift + pos.y as f32 * self.cell_size;
        Pos2::new(x, y)
    }
}
