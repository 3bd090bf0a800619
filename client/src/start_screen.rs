use common::PlayerName;
use common::games::tictactoe::{BoardSize, FirstPlayerMode};

use crate::config::Config;
use crate::session::MatchSetup;

pub struct StartScreen {
    player_x_name: String,
    player_o_name: String,
    default_x_name: String,
    default_o_name: String,
    board_size: BoardSize,
    first_player: FirstPlayerMode,
    focus_requested: bool,
}

impl StartScreen {
    pub fn new(config: &Config) -> Self {
        Self {
            player_x_name: String::new(),
            player_o_name: String::new(),
            default_x_name: config.player_x_name.clone(),
            default_o_name: config.player_o_name.clone(),
            board_size: config.board_size,
            first_player: config.first_player,
            focus_requested: false,
        }
    }

    pub fn with_names(mut self, player_x_name: String, player_o_name: String) -> Self {
        self.player_x_name = player_x_name;
        self.player_o_name = player_o_name;
        self
    }

    pub fn match_setup(&self) -> MatchSetup {
        MatchSetup {
            player_x: PlayerName::new_or(&self.player_x_name, &self.default_x_name),
            player_o: PlayerName::new_or(&self.player_o_name, &self.default_o_name),
            board_size: self.board_size,
            starting_mark: self.first_player.fixed_mark(),
        }
    }

    /// Draws the screen; returns the setup once the player presses Start.
    pub fn show(&mut self, ui: &mut egui::Ui) -> Option<MatchSetup> {
        let mut start = false;

        ui.vertical_centered(|ui| {
            ui.add_space(30.0);
            ui.heading(egui::RichText::new("Tic-Tac-Toe").size(32.0).strong());
            ui.add_space(20.0);

            ui.label("Player 1 (X)");
            let response = ui.add(
                egui::TextEdit::singleline(&mut self.player_x_name)
                    .hint_text(self.default_x_name.as_str())
                    .desired_width(220.0),
            );
            if !self.focus_requested {
                response.request_focus();
                self.focus_requested = true;
            }

            ui.add_space(8.0);
            ui.label("Player 2 (O)");
            let response = ui.add(
                egui::TextEdit::singleline(&mut self.player_o_name)
                    .hint_text(self.default_o_name.as_str())
                    .desired_width(220.0),
            );
            let enter_pressed =
                response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

            ui.add_space(16.0);
            ui.label(egui::RichText::new("Select the board size").size(20.0).strong());
            ui.horizontal(|ui| {
                for size in BoardSize::ALL {
                    ui.selectable_value(&mut self.board_size, size, size.to_string());
                }
            });

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                ui.label("First move:");
                ui.selectable_value(&mut self.first_player, FirstPlayerMode::Random, "Random");
                ui.selectable_value(&mut self.first_player, FirstPlayerMode::X, "X");
                ui.selectable_value(&mut self.first_player, FirstPlayerMode::O, "O");
            });

            ui.add_space(16.0);
            if ui.button("Start game").clicked() || enter_pressed {
                start = true;
            }
        });

        start.then(|| self.match_setup())
    }
}
