use std::fmt;

use super::types::{Cell, Move, Player};

pub const BOARD_SIZE: usize = 3;
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

pub fn move_to_index(mv: Move, size: usize) -> usize {
    mv.row * size + mv.col
}

pub fn index_to_move(index: usize, size: usize) -> Move {
    Move::new(index / size, index % size)
}

/// Empty cells in row-major order. Search tie-breaking depends on this order.
pub fn get_available_moves(board: &Board) -> Vec<Move> {
    let mut moves = Vec::with_capacity(CELL_COUNT);
    for (row, cells) in board.cells.iter().enumerate() {
        for (col, &cell) in cells.iter().enumerate() {
            if cell.is_empty() {
                moves.push(Move::new(row, col));
            }
        }
    }
    moves
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from the `+1` computer / `-1` human encoding. Anything
    /// else is treated as an empty cell.
    pub fn from_markers(markers: [[i8; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        let mut board = Self::new();
        for (row, values) in markers.iter().enumerate() {
            for (col, &value) in values.iter().enumerate() {
                if let Some(player) = Player::from_marker(value) {
                    board.cells[row][col] = Cell::Occupied(player);
                }
            }
        }
        board
    }

    pub fn markers(&self) -> [[i8; BOARD_SIZE]; BOARD_SIZE] {
        self.cells.map(|row| row.map(Cell::marker))
    }

    pub fn size(&self) -> usize {
        BOARD_SIZE
    }

    pub fn get(&self, mv: Move) -> Option<Cell> {
        self.cells.get(mv.row)?.get(mv.col).copied()
    }

    /// Panics if `mv` is off the board; callers validate coordinates first.
    pub fn set(&mut self, mv: Move, player: Player) {
        self.cells[mv.row][mv.col] = Cell::Occupied(player);
    }

    pub fn is_empty_at(&self, mv: Move) -> bool {
        self.get(mv).is_some_and(Cell::is_empty)
    }

    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|&cell| !cell.is_empty()))
    }

    pub fn occupied_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| !cell.is_empty())
            .count()
    }

    pub fn count_of(&self, player: Player) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell == Cell::Occupied(player))
            .count()
    }

    pub fn rows(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    pub fn render(&self, computer: char, human: char) -> String {
        let mut out = String::with_capacity(CELL_COUNT * 2);
        for (row, cells) in self.cells.iter().enumerate() {
            if row > 0 {
                out.push('\n');
            }
            for (col, cell) in cells.iter().enumerate() {
                if col > 0 {
                    out.push(' ');
                }
                out.push(match cell {
                    Cell::Empty => '.',
                    Cell::Occupied(Player::Computer) => computer,
                    Cell::Occupied(Player::Human) => human,
                });
            }
        }
        out
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render('X', 'O'))
    }
}
