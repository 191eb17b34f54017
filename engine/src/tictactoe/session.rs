use crate::{log, log_debug, log_warn};
use super::board::{BOARD_SIZE, Board, CELL_COUNT, index_to_move, move_to_index};
use super::error::GameError;
use super::search::best_move;
use super::types::{GameOutcome, GameStatus, Player};
use super::win_detector::game_outcome;

pub type GameOverCallback = Box<dyn FnMut(GameOutcome)>;

/// One live game between a human and the computer.
///
/// Callers drive the turns: a human move followed by a computer move, never
/// interleaved. Registered callbacks survive [`TicTacToeSession::reset`].
#[derive(Default)]
pub struct TicTacToeSession {
    board: Board,
    game_over_callbacks: Vec<GameOverCallback>,
}

impl TicTacToeSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from an existing position, e.g. a puzzle or a resumed game.
    pub fn with_board(board: Board) -> Self {
        Self {
            board,
            game_over_callbacks: Vec::new(),
        }
    }

    pub fn reset(&mut self) {
        self.board = Board::new();
        log_debug!("Board reset");
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        game_outcome(&self.board)
    }

    pub fn status(&self) -> GameStatus {
        GameStatus::from(self.outcome())
    }

    pub fn register_game_over_callback<F>(&mut self, callback: F)
    where
        F: FnMut(GameOutcome) + 'static,
    {
        self.game_over_callbacks.push(Box::new(callback));
    }

    pub fn human_move_at_index(&mut self, index: usize) -> Result<(), GameError> {
        if let Err(err) = self.validate_human_move(index) {
            log_warn!("Rejected human move at {}: {}", index, err);
            return Err(err);
        }

        let mv = index_to_move(index, BOARD_SIZE);
        self.board.set(mv, Player::Human);
        log_debug!("Human marked cell {}", index);

        self.check_game_over();
        Ok(())
    }

    /// Plays the computer's best move and returns its index, or `None` when
    /// the game is already decided and nothing was played.
    pub fn computer_move(&mut self) -> Option<usize> {
        let mv = best_move(&self.board, Player::Computer).best_move?;

        self.board.set(mv, Player::Computer);
        let index = move_to_index(mv, BOARD_SIZE);
        log_debug!("Computer marked cell {}", index);

        self.check_game_over();
        Some(index)
    }

    /// Suggests the human's best move without touching the board.
    pub fn hint(&self) -> Option<usize> {
        best_move(&self.board, Player::Human)
            .best_move
            .map(|mv| move_to_index(mv, BOARD_SIZE))
    }

    fn validate_human_move(&self, index: usize) -> Result<(), GameError> {
        if index >= CELL_COUNT {
            return Err(GameError::InvalidIndex { index });
        }
        if let Some(outcome) = self.outcome() {
            return Err(GameError::MoveAfterGameOver { outcome });
        }
        if !self.board.is_empty_at(index_to_move(index, BOARD_SIZE)) {
            return Err(GameError::CellOccupied { index });
        }
        Ok(())
    }

    fn check_game_over(&mut self) {
        let Some(outcome) = self.outcome() else {
            return;
        };

        log!("Game over: {} ({})", outcome, outcome.value());
        for callback in self.game_over_callbacks.iter_mut() {
            callback(outcome);
        }
    }
}
