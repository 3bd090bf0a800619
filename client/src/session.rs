use common::PlayerName;
use common::games::SessionRng;
use common::games::tictactoe::{
    BoardSize, GameError, GameOutcome, GameSnapshot, Mark, TicTacToeGame, WinningLine,
};
use common::{log, log_debug};

/// Everything the start screen hands over to the game screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchSetup {
    pub player_x: PlayerName,
    pub player_o: PlayerName,
    pub board_size: BoardSize,
    pub starting_mark: Option<Mark>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TapResult {
    Applied(GameSnapshot),
    /// The tap had no effect (occupied cell or outside the board).
    Ignored(GameError),
    /// The game is over; input stays frozen until a restart.
    Frozen(GameOutcome),
}

pub struct GameSession {
    setup: MatchSetup,
    game: TicTacToeGame,
    rng: SessionRng,
}

impl GameSession {
    pub fn start(setup: MatchSetup, mut rng: SessionRng) -> Self {
        let game = TicTacToeGame::from_board_size(
            setup.board_size,
            setup.starting_mark.unwrap_or_else(|| rng.random_mark()),
        );
        log!(
            "New {} game: {} (X) vs {} (O), {} starts, seed {}",
            setup.board_size,
            setup.player_x,
            setup.player_o,
            game.current_mark(),
            rng.seed()
        );
        Self {
            setup,
            game,
            rng,
        }
    }

    pub fn tap(&mut self, row: usize, col: usize) -> TapResult {
        match self.game.apply_move(row, col) {
            Ok(snapshot) => {
                let mover = self.name_of(self.mark_of_last_move(&snapshot));
                log_debug!("{} played ({}, {})", mover, row, col);
                if snapshot.outcome.is_over() {
                    log!("{}", self.status_line());
                }
                TapResult::Applied(snapshot)
            }
            Err(GameError::GameAlreadyOver) => TapResult::Frozen(self.game.outcome()),
            Err(err) => {
                log_debug!("Ignored tap at ({}, {}): {}", row, col, err);
                TapResult::Ignored(err)
            }
        }
    }

    /// Starts a fresh game with the same players and board size.
    pub fn restart(&mut self) {
        let starting_mark = self
            .setup
            .starting_mark
            .unwrap_or_else(|| self.rng.random_mark());
        self.game = TicTacToeGame::from_board_size(self.setup.board_size, starting_mark);
        log!("Restarted {} game, {} starts", self.setup.board_size, starting_mark);
    }

    fn mark_of_last_move(&self, snapshot: &GameSnapshot) -> Mark {
        if snapshot.outcome.is_over() {
            snapshot.current_mark
        } else {
            snapshot.current_mark.opponent()
        }
    }

    pub fn name_of(&self, mark: Mark) -> &PlayerName {
        match mark {
            Mark::X => &self.setup.player_x,
            Mark::O => &self.setup.player_o,
        }
    }

    pub fn current_player_name(&self) -> &PlayerName {
        self.name_of(self.game.current_mark())
    }

    pub fn winner_name(&self) -> Option<&PlayerName> {
        self.game.outcome().winner().map(|mark| self.name_of(mark))
    }

    pub fn status_line(&self) -> String {
        match (self.game.outcome(), self.winner_name()) {
            (GameOutcome::Win(mark), Some(name)) => format!("{} ({}) wins!", name, mark),
            (GameOutcome::Draw, _) => "It's a draw!".to_string(),
            _ => format!(
                "Current player: {} ({})",
                self.current_player_name(),
                self.game.current_mark()
            ),
        }
    }

    /// Input is frozen once the game has an outcome, until `restart`.
    pub fn is_frozen(&self) -> bool {
        self.game.is_over()
    }

    pub fn game(&self) -> &TicTacToeGame {
        &self.game
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        self.game.winning_line()
    }
}
