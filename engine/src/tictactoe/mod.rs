mod board;
mod error;
mod search;
mod session;
mod types;
mod win_detector;

pub use board::{
    BOARD_SIZE, Board, CELL_COUNT, get_available_moves, index_to_move, move_to_index,
};
pub use error::GameError;
pub use search::{ALPHA_MIN, BETA_MAX, SearchResult, best_move, search};
pub use session::{GameOverCallback, TicTacToeSession};
pub use types::{Cell, GameOutcome, GameStatus, LineKind, Move, Player, WinningLine};
pub use win_detector::{WIN_LENGTH, check_win, check_win_with_line, game_outcome};
