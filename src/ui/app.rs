//! Main application for the tic-tac-toe GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, Sense, SidePanel, Vec2};

use super::board_view::BoardView;
use super::theme::*;
use crate::game::{GameState, GameStatus, MoveOrder};

/// Main tic-tac-toe application
pub struct TicTacToeApp {
    state: GameState,
    board_view: BoardView,
}

impl Default for TicTacToeApp {
    fn default() -> Self {
        Self {
            state: GameState::new(),
            board_view: BoardView::default(),
        }
    }
}

impl TicTacToeApp {
    /// Create a new app
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    /// Render the side panel with status and move history
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(250.0)
            .max_width(300.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);

                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_status_card(ui);
                ui.add_space(10.0);

                self.render_order_card(ui);
                ui.add_space(10.0);

                self.render_move_list_card(ui);
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12)
    }

    /// Render title card
    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("X").size(20.0).strong().color(X_MARK));
            ui.label(RichText::new("O").size(20.0).strong().color(O_MARK));
            ui.add_space(4.0);
            ui.label(
                RichText::new("TIC-TAC-TOE")
                    .size(22.0)
                    .strong()
                    .color(TEXT_PRIMARY),
            );
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(
                RichText::new("with time travel")
                    .size(11.0)
                    .color(TEXT_MUTED),
            );
        });
    }

    /// Render the status card with the derived status line
    fn render_status_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let status = self.state.status();
            let (glyph, accent) = match &status {
                GameStatus::Won(line) => (line.mark.letter(), WIN_HIGHLIGHT),
                GameStatus::Draw => ('=', TEXT_SECONDARY),
                GameStatus::InProgress { next } => (next.letter(), mark_color(*next)),
            };

            ui.horizontal(|ui| {
                // Large mark indicator
                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), Sense::hover());
                ui.painter().circle_filled(rect.center(), 22.0, BUTTON_BG);
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    glyph,
                    egui::FontId::proportional(28.0),
                    accent,
                );

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(
                        RichText::new(status.to_string())
                            .size(16.0)
                            .strong()
                            .color(TEXT_PRIMARY),
                    );

                    let detail = match &status {
                        GameStatus::InProgress { .. } => "Click an empty cell",
                        GameStatus::Won(_) | GameStatus::Draw => "Game over",
                    };
                    ui.label(RichText::new(detail).size(12.0).color(TEXT_SECONDARY));
                });
            });
        });
    }

    /// Render the move-order card with the toggle control
    fn render_order_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("MOVE ORDER").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(self.state.order.label())
                        .size(13.0)
                        .color(TEXT_PRIMARY),
                );

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let btn_frame = Frame::new()
                        .fill(BUTTON_BG)
                        .corner_radius(CornerRadius::same(6))
                        .inner_margin(8);

                    btn_frame.show(ui, |ui| {
                        if ui
                            .add(
                                egui::Label::new(
                                    RichText::new("Change (O)").size(12.0).color(TEXT_PRIMARY),
                                )
                                .sense(Sense::click()),
                            )
                            .clicked()
                        {
                            self.state.toggle_order();
                        }
                    });
                });
            });
        });
    }

    /// Render the move list with one clickable entry per snapshot
    fn render_move_list_card(&mut self, ui: &mut egui::Ui) {
        let mut jump_target = None;

        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("MOVES").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            let steps: Vec<usize> = match self.state.order {
                MoveOrder::Ascending => (0..self.state.history.len()).collect(),
                MoveOrder::Descending => (0..self.state.history.len()).rev().collect(),
            };

            for step in steps {
                let snapshot = &self.state.history[step];
                let coords = match snapshot.last_move {
                    Some(pos) => {
                        let (col, row) = pos.to_display();
                        format!("({}, {})", col, row)
                    }
                    None => "None".to_string(),
                };
                let label = if step == 0 {
                    "Go to game start".to_string()
                } else {
                    format!("Go to move #{}", step)
                };

                ui.horizontal(|ui| {
                    // The entry for the displayed step is shown bold.
                    let coord_text = if step == self.state.step {
                        RichText::new(coords).size(12.0).strong().color(TEXT_PRIMARY)
                    } else {
                        RichText::new(coords).size(12.0).color(TEXT_SECONDARY)
                    };
                    ui.label(coord_text);

                    if ui.button(RichText::new(label).size(12.0)).clicked() {
                        jump_target = Some(step);
                    }
                });
            }
        });

        if let Some(step) = jump_target {
            self.state.jump_to(step);
        }
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            ui.style_mut().visuals.panel_fill = BOARD_BG;

            let status = self.state.status();
            let winning_line = match &status {
                GameStatus::Won(line) => Some(line),
                _ => None,
            };
            let game_over = !matches!(status, GameStatus::InProgress { .. });

            let clicked = self.board_view.show(
                ui,
                &self.state.current().board,
                self.state.next_mark(),
                winning_line,
                game_over,
            );

            // Handle click
            if let Some(pos) = clicked {
                self.state.apply_move(pos);
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        ctx.input(|i| {
            // O - toggle move order
            if i.key_pressed(egui::Key::O) {
                self.state.toggle_order();
            }
        });
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        // Handle keyboard input
        self.handle_input(ctx);

        // Render UI
        self.render_side_panel(ctx);
        self.render_board(ctx);
    }
}
