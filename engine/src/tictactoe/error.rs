use super::board::CELL_COUNT;
use super::types::GameOutcome;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    InvalidIndex { index: usize },
    CellOccupied { index: usize },
    MoveAfterGameOver { outcome: GameOutcome },
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameError::InvalidIndex { index } => {
                write!(f, "Invalid cell index {}: expected 0..{}", index, CELL_COUNT)
            }
            GameError::CellOccupied { index } => write!(f, "Cell {} is already marked", index),
            GameError::MoveAfterGameOver { outcome } => {
                write!(f, "Game is already over ({})", outcome)
            }
        }
    }
}

impl std::error::Error for GameError {}
