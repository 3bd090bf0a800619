use crate::games::SessionRng;
use super::board::Board;
use super::error::GameError;
use super::types::{BoardSize, GameOutcome, Mark, Position, WinningLine};
use super::win_detector::check_win_with_line;

pub type GameResult<T> = Result<T, GameError>;

/// Read-only view of a game after a call, detached from the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub board: Board,
    pub current_mark: Mark,
    pub outcome: GameOutcome,
    pub last_move: Option<Position>,
    pub moves_played: usize,
}

#[derive(Debug, Clone)]
pub struct TicTacToeGame {
    board: Board,
    current_mark: Mark,
    outcome: GameOutcome,
    winning_line: Option<WinningLine>,
    last_move: Option<Position>,
    moves_played: usize,
}

impl TicTacToeGame {
    /// Creates an empty game. Without `starting_mark` the first mark is drawn from `rng`.
    pub fn new(
        size: usize,
        starting_mark: Option<Mark>,
        rng: &mut SessionRng,
    ) -> GameResult<Self> {
        let size = BoardSize::new(size)?;
        let starting_mark = starting_mark.unwrap_or_else(|| rng.random_mark());
        Ok(Self::from_board_size(size, starting_mark))
    }

    pub fn with_starting_mark(size: usize, starting_mark: Mark) -> GameResult<Self> {
        let size = BoardSize::new(size)?;
        Ok(Self::from_board_size(size, starting_mark))
    }

    pub fn from_board_size(size: BoardSize, starting_mark: Mark) -> Self {
        Self {
            board: Board::new(size),
            current_mark: starting_mark,
            outcome: GameOutcome::InProgress,
            winning_line: None,
            last_move: None,
            moves_played: 0,
        }
    }

    pub fn apply_move(&mut self, row: usize, col: usize) -> GameResult<GameSnapshot> {
        if self.outcome.is_over() {
            return Err(GameError::GameAlreadyOver);
        }

        let pos = Position::new(row, col);
        if !self.board.contains(pos) {
            return Err(GameError::out_of_bounds(row, col, self.board.size()));
        }

        if self.board.get(pos).flatten().is_some() {
            return Err(GameError::cell_occupied(row, col));
        }

        self.board.set(pos, self.current_mark);
        self.last_move = Some(pos);
        self.moves_played += 1;

        self.check_game_over();

        if self.outcome == GameOutcome::InProgress {
            self.current_mark = self.current_mark.opponent();
        }

        Ok(self.snapshot())
    }

    fn check_game_over(&mut self) {
        if let Some(line) = check_win_with_line(&self.board) {
            self.outcome = GameOutcome::Win(line.mark);
            self.winning_line = Some(line);
            return;
        }

        if self.board.is_full() {
            self.outcome = GameOutcome::Draw;
        }
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board.clone(),
            current_mark: self.current_mark,
            outcome: self.outcome,
            last_move: self.last_move,
            moves_played: self.moves_played,
        }
    }

    pub fn size(&self) -> usize {
        self.board.size()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_over()
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        self.winning_line
    }

    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }

    pub fn moves_played(&self) -> usize {
        self.moves_played
    }

    pub fn available_moves(&self) -> Vec<Position> {
        if self.is_over() {
            return Vec::new();
        }
        self.board.available_moves()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(game: &mut TicTacToeGame, moves: &[(usize, usize)]) -> GameSnapshot {
        let mut snapshot = game.snapshot();
        for &(row, col) in moves {
            snapshot = game.apply_move(row, col).unwrap();
        }
        snapshot
    }

    fn rows(snapshot: &GameSnapshot) -> Vec<String> {
        snapshot.board.to_string().lines().map(str::to_string).collect()
    }

    #[test]
    fn test_new_game_is_empty_and_in_progress() {
        for size in 3..=5 {
            for mark in [Mark::X, Mark::O] {
                let game = TicTacToeGame::with_starting_mark(size, mark).unwrap();
                assert_eq!(game.size(), size);
                assert_eq!(game.board().marked_count(), 0);
                assert_eq!(game.outcome(), GameOutcome::InProgress);
                assert_eq!(game.current_mark(), mark);
                assert_eq!(game.moves_played(), 0);
                assert_eq!(game.last_move(), None);
            }
        }
    }

    #[test]
    fn test_new_rejects_unsupported_sizes() {
        let mut rng = SessionRng::new(1);
        for size in [0, 2, 6, 9] {
            let result = TicTacToeGame::new(size, None, &mut rng);
            assert_eq!(result.err(), Some(GameError::InvalidConfiguration { size }));
        }
    }

    #[test]
    fn test_random_starting_mark_follows_seed() {
        let mut rng_a = SessionRng::new(1234);
        let mut rng_b = SessionRng::new(1234);
        for _ in 0..10 {
            let a = TicTacToeGame::new(3, None, &mut rng_a).unwrap();
            let b = TicTacToeGame::new(3, None, &mut rng_b).unwrap();
            assert_eq!(a.current_mark(), b.current_mark());
        }
    }

    #[test]
    fn test_supplied_starting_mark_wins_over_rng() {
        let mut rng = SessionRng::new(99);
        for _ in 0..10 {
            let game = TicTacToeGame::new(4, Some(Mark::O), &mut rng).unwrap();
            assert_eq!(game.current_mark(), Mark::O);
        }
    }

    #[test]
    fn test_turns_alternate_while_no_line_is_complete() {
        let mut game = TicTacToeGame::with_starting_mark(5, Mark::O).unwrap();
        let moves = [(0, 0), (0, 1), (1, 0), (1, 1), (2, 3), (3, 2)];
        let mut expected = Mark::O;
        for (i, &(row, col)) in moves.iter().enumerate() {
            assert_eq!(game.current_mark(), expected);
            let snapshot = game.apply_move(row, col).unwrap();
            expected = expected.opponent();
            assert_eq!(snapshot.outcome, GameOutcome::InProgress);
            assert_eq!(snapshot.current_mark, expected);
            assert_eq!(snapshot.moves_played, i + 1);
            assert_eq!(snapshot.board.marked_count(), i + 1);
            assert_eq!(snapshot.last_move, Some(Position::new(row, col)));
        }
    }

    #[test]
    fn test_occupied_cell_is_rejected_without_change() {
        let mut game = TicTacToeGame::with_starting_mark(3, Mark::X).unwrap();
        game.apply_move(1, 1).unwrap();
        let before = game.snapshot();

        assert_eq!(game.apply_move(1, 1), Err(GameError::CellOccupied { row: 1, col: 1 }));
        assert_eq!(game.snapshot(), before);
        assert_eq!(game.current_mark(), Mark::O);
    }

    #[test]
    fn test_out_of_bounds_is_rejected_without_change() {
        for size in 3..=5 {
            let mut game = TicTacToeGame::with_starting_mark(size, Mark::X).unwrap();
            game.apply_move(0, 0).unwrap();
            let before = game.snapshot();

            for (row, col) in [(size, 0), (0, size), (size + 3, size + 3), (usize::MAX, 0)] {
                assert_eq!(
                    game.apply_move(row, col),
                    Err(GameError::OutOfBounds { row, col, size })
                );
            }
            assert_eq!(game.snapshot(), before);
        }
    }

    #[test]
    fn test_row_win_scenario() {
        let mut game = TicTacToeGame::with_starting_mark(3, Mark::X).unwrap();
        let snapshot = play(&mut game, &[(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)]);

        assert_eq!(snapshot.outcome, GameOutcome::Win(Mark::X));
        assert_eq!(rows(&snapshot), ["XXX", "_O_", "__O"]);
        // the winner's mark stays current once the game is over
        assert_eq!(snapshot.current_mark, Mark::X);

        let line = game.winning_line().unwrap();
        assert_eq!(line.start, Position::new(0, 0));
        assert_eq!(line.end, Position::new(0, 2));

        assert_eq!(game.apply_move(2, 0), Err(GameError::GameAlreadyOver));
        assert_eq!(game.apply_move(0, 0), Err(GameError::GameAlreadyOver));
        assert_eq!(game.apply_move(7, 7), Err(GameError::GameAlreadyOver));
        assert_eq!(game.snapshot(), snapshot);
        assert!(game.available_moves().is_empty());
    }

    #[test]
    fn test_draw_scenario() {
        let mut game = TicTacToeGame::with_starting_mark(3, Mark::X).unwrap();
        let snapshot = play(
            &mut game,
            &[(0, 0), (0, 1), (0, 2), (1, 1), (1, 0), (1, 2), (2, 1), (2, 0), (2, 2)],
        );

        assert_eq!(snapshot.outcome, GameOutcome::Draw);
        assert!(snapshot.board.is_full());
        assert_eq!(rows(&snapshot), ["XOX", "XOO", "OXX"]);
        assert_eq!(game.winning_line(), None);
        assert_eq!(game.apply_move(0, 0), Err(GameError::GameAlreadyOver));
    }

    #[test]
    fn test_win_on_last_cell_is_not_a_draw() {
        let mut game = TicTacToeGame::with_starting_mark(3, Mark::X).unwrap();
        let snapshot = play(
            &mut game,
            &[(0, 0), (0, 1), (0, 2), (1, 1), (1, 0), (1, 2), (2, 1), (2, 2), (2, 0)],
        );

        assert!(snapshot.board.is_full());
        assert_eq!(snapshot.outcome, GameOutcome::Win(Mark::X));
    }

    #[test]
    fn test_column_win_on_four_by_four() {
        let mut game = TicTacToeGame::with_starting_mark(4, Mark::O).unwrap();
        let snapshot = play(
            &mut game,
            &[(0, 3), (0, 0), (1, 3), (1, 0), (2, 3), (2, 0), (3, 3)],
        );
        assert_eq!(snapshot.outcome, GameOutcome::Win(Mark::O));
        assert_eq!(snapshot.moves_played, 7);
    }

    #[test]
    fn test_anti_diagonal_win_on_five_by_five() {
        let mut game = TicTacToeGame::with_starting_mark(5, Mark::X).unwrap();
        let snapshot = play(
            &mut game,
            &[
                (0, 4),
                (0, 0),
                (1, 3),
                (0, 1),
                (2, 2),
                (0, 2),
                (3, 1),
                (1, 0),
                (4, 0),
            ],
        );
        assert_eq!(snapshot.outcome, GameOutcome::Win(Mark::X));
        let line = game.winning_line().unwrap();
        assert_eq!(line.start, Position::new(0, 4));
        assert_eq!(line.end, Position::new(4, 0));
    }

    #[test]
    fn test_snapshot_is_detached_from_game() {
        let mut game = TicTacToeGame::with_starting_mark(3, Mark::X).unwrap();
        let first = game.apply_move(0, 0).unwrap();
        game.apply_move(2, 2).unwrap();
        assert_eq!(first.board.marked_count(), 1);
        assert_eq!(game.board().marked_count(), 2);
    }
}
