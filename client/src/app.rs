use common::games::SessionRng;
use eframe::egui;

use crate::game_screen::{GameScreen, GameScreenAction};
use crate::session::{GameSession, MatchSetup};
use crate::start_screen::StartScreen;

/// The start screen stays alive under a running game so "Back" returns to
/// whatever was entered there.
pub struct TotitoApp {
    start_screen: StartScreen,
    game_screen: Option<GameScreen>,
    seed: Option<u64>,
}

impl TotitoApp {
    pub fn new(start_screen: StartScreen, seed: Option<u64>) -> Self {
        Self {
            start_screen,
            game_screen: None,
            seed,
        }
    }

    pub fn with_game(start_screen: StartScreen, seed: Option<u64>) -> Self {
        let mut app = Self::new(start_screen, seed);
        let setup = app.start_screen.match_setup();
        app.start_game(setup);
        app
    }

    fn start_game(&mut self, setup: MatchSetup) {
        let session = GameSession::start(setup, session_rng(self.seed));
        self.game_screen = Some(GameScreen::new(session));
    }

    fn back_to_start(&mut self) {
        self.game_screen = None;
    }
}

/// A fixed seed replays the same starting marks every game.
fn session_rng(seed: Option<u64>) -> SessionRng {
    match seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    }
}

impl eframe::App for TotitoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| match &mut self.game_screen {
            Some(game) => {
                if let GameScreenAction::BackToStart = game.show(ui) {
                    self.back_to_start();
                }
            }
            None => {
                if let Some(setup) = self.start_screen.show(ui) {
                    self.start_game(setup);
                }
            }
        });
    }
}
