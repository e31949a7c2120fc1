//! Main application for the Gobang GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};

use super::board_view::BoardView;
use super::screen::{Banner, Screen};
use super::theme::*;
use crate::game::{Command, GameController, RenderMode, Snapshot};
use crate::{ConfigError, GameConfig, Stone};

/// Main Gobang application
pub struct GobangApp {
    game: GameController<Screen>,
    board_view: BoardView,
}

impl GobangApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: &GameConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            game: GameController::new(config, Screen::default())?,
            board_view: BoardView::default(),
        })
    }

    fn banner(&self) -> Option<&Banner> {
        self.game.ports().banner.as_ref()
    }

    /// Forward a command unless a win announcement is waiting or the last
    /// move has not been checked yet
    fn send(&mut self, command: Command) {
        if self.banner().is_none() && !self.game.has_pending() {
            self.game.dispatch(command);
        }
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (N)").clicked() {
                        self.send(Command::Reset);
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Undo (U)").clicked() {
                        self.send(Command::Undo);
                        ui.close_menu();
                    }
                    if ui.button("Redo (R)").clicked() {
                        self.send(Command::Redo);
                        ui.close_menu();
                    }
                });
                ui.menu_button("View", |ui| {
                    if ui.button("Toggle Board Style (T)").clicked() {
                        self.send(Command::ToggleMode);
                        ui.close_menu();
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let mode = match self.game.render_mode() {
                        RenderMode::Canvas => "Stones on lines",
                        RenderMode::Cells => "Tiles",
                    };
                    ui.label(mode);
                });
            });
        });
    }

    /// Render the side panel with game info
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                self.render_title_card(ui);
                ui.add_space(12.0);

                if let Some(frame) = self.game.ports().frame.clone() {
                    self.render_turn_card(ui, &frame);
                    ui.add_space(10.0);
                    self.render_actions_card(ui, &frame);
                }

                if let Some(banner) = self.banner().cloned() {
                    ui.add_space(10.0);
                    self.render_banner_card(ui, &banner);
                }
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("●○").size(20.0).color(egui::Color32::from_rgb(180, 180, 185)));
            ui.add_space(4.0);
            ui.label(RichText::new("GOBANG").size(22.0).strong().color(TEXT_PRIMARY));
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("五子棋").size(11.0).color(TEXT_MUTED));
        });
    }

    /// Render turn indicator card
    fn render_turn_card(&self, ui: &mut egui::Ui, frame: &Snapshot) {
        Self::card_frame().show(ui, |ui| {
            let is_black = frame.next_turn == Stone::Black;
            let (stone_char, accent, glyph) = if is_black {
                ("●", egui::Color32::from_rgb(70, 70, 75), TEXT_PRIMARY)
            } else {
                ("○", egui::Color32::from_rgb(220, 220, 225), egui::Color32::from_rgb(30, 30, 35))
            };

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 22.0, accent);
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    stone_char,
                    egui::FontId::proportional(28.0),
                    glyph,
                );

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(
                        RichText::new(frame.next_turn.name().to_uppercase())
                            .size(18.0)
                            .strong()
                            .color(TEXT_PRIMARY),
                    );
                    ui.label(RichText::new("to move").size(12.0).color(TEXT_SECONDARY));
                });
            });
        });
    }

    /// Render actions card
    fn render_actions_card(&mut self, ui: &mut egui::Ui, frame: &Snapshot) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                if Self::action_button(ui, "↩ Undo", frame.can_undo) {
                    self.send(Command::Undo);
                }
                ui.add_space(4.0);
                if Self::action_button(ui, "↪ Redo", frame.can_redo) {
                    self.send(Command::Redo);
                }
            });
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                if Self::action_button(ui, "⟲ Restart", true) {
                    self.send(Command::Reset);
                }
                ui.add_space(4.0);
                if Self::action_button(ui, "◫ Toggle view", true) {
                    self.send(Command::ToggleMode);
                }
            });

            ui.add_space(8.0);
            ui.label(
                RichText::new(format!("Move #{}", frame.move_count))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    /// Clickable label in a button frame; returns true when clicked
    fn action_button(ui: &mut egui::Ui, text: &str, enabled: bool) -> bool {
        let (fill, color) = if enabled {
            (BUTTON_BG, TEXT_PRIMARY)
        } else {
            (BUTTON_DISABLED, TEXT_MUTED)
        };
        let mut clicked = false;
        Frame::new()
            .fill(fill)
            .corner_radius(CornerRadius::same(6))
            .inner_margin(8.0)
            .show(ui, |ui| {
                let label = egui::Label::new(RichText::new(text).size(12.0).color(color))
                    .sense(egui::Sense::click());
                clicked = ui.add(label).clicked() && enabled;
            });
        clicked
    }

    /// Render the win announcement
    fn render_banner_card(&mut self, ui: &mut egui::Ui, banner: &Banner) {
        let (symbol, accent) = if banner.winner == Stone::Black {
            ("●", egui::Color32::from_rgb(70, 70, 75))
        } else {
            ("○", egui::Color32::from_rgb(220, 220, 225))
        };

        Frame::new()
            .fill(BANNER_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(egui::Color32::from_rgb(180, 255, 180)));
                    ui.add_space(8.0);

                    ui.horizontal(|ui| {
                        ui.add_space(ui.available_width() / 2.0 - 60.0);
                        ui.label(RichText::new(symbol).size(32.0).color(accent));
                        ui.add_space(8.0);
                        ui.vertical(|ui| {
                            ui.label(
                                RichText::new(banner.winner.name().to_uppercase())
                                    .size(18.0)
                                    .strong()
                                    .color(TEXT_PRIMARY),
                            );
                            ui.label(RichText::new("WINS!").size(14.0).color(WIN_HIGHLIGHT));
                        });
                    });

                    ui.add_space(12.0);

                    Frame::new()
                        .fill(BANNER_BUTTON)
                        .corner_radius(CornerRadius::same(6))
                        .inner_margin(10.0)
                        .show(ui, |ui| {
                            let label = egui::Label::new(
                                RichText::new("Next Game").size(14.0).strong().color(TEXT_PRIMARY),
                            )
                            .sense(egui::Sense::click());
                            if ui.add(label).clicked() {
                                self.game.ports_mut().dismiss_banner();
                            }
                        });
                });
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            ui.style_mut().visuals.panel_fill = egui::Color32::from_rgb(40, 42, 46);

            // Hold the winning position on screen until the banner is dismissed
            let (frame, line, interactive) = match self.banner() {
                Some(banner) => (banner.final_frame.clone(), Some(banner.line.clone()), false),
                None => (self.game.ports().frame.clone(), None, true),
            };
            let Some(frame) = frame else {
                return;
            };

            let clicked = self
                .board_view
                .show(ui, &frame, line.as_deref(), interactive);
            if interactive {
                self.game.ports_mut().mark_painted();
            }

            if let Some(pos) = clicked {
                self.send(Command::PlaceStone {
                    x: pos.x as i32,
                    y: pos.y as i32,
                });
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        let mut commands = Vec::new();
        let mut dismiss = false;
        ctx.input(|i| {
            if i.key_pressed(egui::Key::U) {
                commands.push(Command::Undo);
            }
            if i.key_pressed(egui::Key::R) {
                commands.push(Command::Redo);
            }
            if i.key_pressed(egui::Key::N) {
                commands.push(Command::Reset);
            }
            if i.key_pressed(egui::Key::T) {
                commands.push(Command::ToggleMode);
            }
            if i.key_pressed(egui::Key::Enter) || i.key_pressed(egui::Key::Escape) {
                dismiss = true;
            }
        });

        if dismiss {
            self.game.ports_mut().dismiss_banner();
        }
        for command in commands {
            self.send(command);
        }
    }
}

impl eframe::App for GobangApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        // Win check for a stone placed earlier, once a pass has drawn it
        self.game.settle_after_paint();

        self.handle_input(ctx);

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        if self.game.has_pending() {
            ctx.request_repaint();
        }
    }
}
