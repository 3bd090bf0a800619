use common::games::tictactoe::{GameOutcome, Mark, Position, WinningLine};
use common::log_debug;

use crate::session::{GameSession, TapResult};

pub enum GameScreenAction {
    None,
    BackToStart,
}

pub struct GameScreen {
    session: GameSession,
    hover: Option<Position>,
}

impl GameScreen {
    const BOARD_PADDING: f32 = 40.0;
    const MIN_CELL_SIZE: f32 = 40.0;
    const MAX_CELL_SIZE: f32 = 100.0;
    const LINE_WIDTH: f32 = 2.0;

    pub fn new(session: GameSession) -> Self {
        Self {
            session,
            hover: None,
        }
    }

    fn calculate_cell_size(available_width: f32, available_height: f32, size: usize) -> f32 {
        let cell_width = (available_width - Self::BOARD_PADDING * 2.0) / size as f32;
        let cell_height = (available_height - Self::BOARD_PADDING * 4.0) / size as f32;
        cell_width
            .min(cell_height)
            .clamp(Self::MIN_CELL_SIZE, Self::MAX_CELL_SIZE)
    }

    pub fn show(&mut self, ui: &mut egui::Ui) -> GameScreenAction {
        let mut action = GameScreenAction::None;

        ui.vertical_centered(|ui| {
            ui.add_space(16.0);
            let status = self.session.status_line();
            match self.session.game().outcome() {
                GameOutcome::InProgress => {
                    ui.heading(egui::RichText::new(status).size(20.0).strong());
                }
                GameOutcome::Win(_) | GameOutcome::Draw => {
                    ui.heading(
                        egui::RichText::new(status)
                            .size(22.0)
                            .strong()
                            .color(egui::Color32::from_rgb(40, 160, 40)),
                    );
                }
            }
            ui.add_space(16.0);

            let size = self.session.game().size();
            let cell_size =
                Self::calculate_cell_size(ui.available_width(), ui.available_height(), size);
            self.render_board(ui, cell_size);

            ui.add_space(16.0);
            ui.horizontal(|ui| {
                if ui.button("New game").clicked() {
                    self.session.restart();
                    self.hover = None;
                }
                if ui.button("Back").clicked() {
                    action = GameScreenAction::BackToStart;
                }
            });
        });

        action
    }

    fn render_board(&mut self, ui: &mut egui::Ui, cell_size: f32) {
        let size = self.session.game().size();
        let board_side = cell_size * size as f32;

        let (rect, response) =
            ui.allocate_exact_size(egui::vec2(board_side, board_side), egui::Sense::click());

        self.hover = None;
        if !self.session.is_frozen()
            && let Some(pointer) = response.hover_pos()
        {
            self.hover = cell_at(rect, cell_size, size, pointer);
        }

        if response.clicked()
            && let Some(pos) = response.interact_pointer_pos()
            && let Some(cell) = cell_at(rect, cell_size, size, pos)
        {
            if let TapResult::Frozen(outcome) = self.session.tap(cell.row, cell.col) {
                log_debug!("Board frozen: {:?}", outcome);
            }
        }

        let painter = ui.painter();
        painter.rect_filled(rect, 0.0, egui::Color32::from_rgb(240, 240, 240));

        if let Some(hover) = self.hover
            && self.session.game().board().get(hover) == Some(None)
        {
            painter.rect_filled(
                cell_rect(rect, cell_size, hover),
                0.0,
                egui::Color32::from_rgba_unmultiplied(100, 150, 255, 50),
            );
        }

        for i in 0..=size {
            let offset = i as f32 * cell_size;
            let stroke = egui::Stroke::new(Self::LINE_WIDTH, egui::Color32::BLACK);
            painter.line_segment(
                [
                    egui::pos2(rect.left() + offset, rect.top()),
                    egui::pos2(rect.left() + offset, rect.bottom()),
                ],
                stroke,
            );
            painter.line_segment(
                [
                    egui::pos2(rect.left(), rect.top() + offset),
                    egui::pos2(rect.right(), rect.top() + offset),
                ],
                stroke,
            );
        }

        for (row, cells) in self.session.game().board().rows().iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                let target = cell_rect(rect, cell_size, Position::new(row, col));
                match cell {
                    Some(Mark::X) => draw_x(painter, target),
                    Some(Mark::O) => draw_o(painter, target),
                    None => {}
                }
            }
        }

        if let Some(line) = self.session.winning_line() {
            draw_winning_line(painter, rect, cell_size, line);
        }
    }
}

fn cell_at(rect: egui::Rect, cell_size: f32, size: usize, pointer: egui::Pos2) -> Option<Position> {
    if !rect.contains(pointer) {
        return None;
    }
    let col = ((pointer.x - rect.left()) / cell_size) as usize;
    let row = ((pointer.y - rect.top()) / cell_size) as usize;
    (row < size && col < size).then(|| Position::new(row, col))
}

fn cell_rect(rect: egui::Rect, cell_size: f32, pos: Position) -> egui::Rect {
    egui::Rect::from_min_size(
        egui::pos2(
            rect.left() + pos.col as f32 * cell_size,
            rect.top() + pos.row as f32 * cell_size,
        ),
        egui::vec2(cell_size, cell_size),
    )
}

fn cell_center(rect: egui::Rect, cell_size: f32, pos: Position) -> egui::Pos2 {
    cell_rect(rect, cell_size, pos).center()
}

fn draw_x(painter: &egui::Painter, rect: egui::Rect) {
    let padding = rect.width() * 0.2;
    let stroke = egui::Stroke::new(4.0, egui::Color32::from_rgb(220, 50, 50));

    painter.line_segment(
        [
            egui::pos2(rect.left() + padding, rect.top() + padding),
            egui::pos2(rect.right() - padding, rect.bottom() - padding),
        ],
        stroke,
    );
    painter.line_segment(
        [
            egui::pos2(rect.right() - padding, rect.top() + padding),
            egui::pos2(rect.left() + padding, rect.bottom() - padding),
        ],
        stroke,
    );
}

fn draw_o(painter: &egui::Painter, rect: egui::Rect) {
    let radius = rect.width() / 2.0 - rect.width() * 0.2;
    let stroke = egui::Stroke::new(4.0, egui::Color32::from_rgb(50, 50, 220));
    painter.circle_stroke(rect.center(), radius, stroke);
}

fn draw_winning_line(
    painter: &egui::Painter,
    rect: egui::Rect,
    cell_size: f32,
    line: WinningLine,
) {
    painter.line_segment(
        [
            cell_center(rect, cell_size, line.start),
            cell_center(rect, cell_size, line.end),
        ],
        egui::Stroke::new(6.0, egui::Color32::from_rgba_unmultiplied(50, 200, 50, 200)),
    );
}
