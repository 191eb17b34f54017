use super::board::{BOARD_SIZE, Board};
use super::types::{GameOutcome, LineKind, Move, Player, WinningLine};

/// Marks in a row needed to win.
pub const WIN_LENGTH: usize = 3;

// Line sums are compared against the win length, which only holds when every
// line spans the whole board.
const _: () = assert!(BOARD_SIZE == WIN_LENGTH);

const WIN_SUM: i32 = WIN_LENGTH as i32;

fn line_cells(kind: LineKind) -> [Move; BOARD_SIZE] {
    std::array::from_fn(|i| match kind {
        LineKind::Row(row) => Move::new(row, i),
        LineKind::Column(col) => Move::new(i, col),
        LineKind::MainDiagonal => Move::new(i, i),
        LineKind::AntiDiagonal => Move::new(i, BOARD_SIZE - 1 - i),
    })
}

/// Rows, then columns, then both diagonals.
fn all_lines() -> impl Iterator<Item = LineKind> {
    (0..BOARD_SIZE)
        .map(LineKind::Row)
        .chain((0..BOARD_SIZE).map(LineKind::Column))
        .chain([LineKind::MainDiagonal, LineKind::AntiDiagonal])
}

fn line_sum(board: &Board, cells: &[Move; BOARD_SIZE]) -> i32 {
    cells
        .iter()
        .filter_map(|&mv| board.get(mv))
        .map(|cell| i32::from(cell.marker()))
        .sum()
}

/// First line whose marks all belong to one player. Assumes the board came
/// from legal alternating play, so at most one player can own a line.
pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    all_lines().find_map(|kind| {
        let cells = line_cells(kind);
        let player = match line_sum(board, &cells) {
            WIN_SUM => Player::Computer,
            sum if sum == -WIN_SUM => Player::Human,
            _ => return None,
        };
        Some(WinningLine::new(player, kind, cells[0], cells[BOARD_SIZE - 1]))
    })
}

pub fn check_win(board: &Board) -> Option<Player> {
    check_win_with_line(board).map(|line| line.player)
}

/// `None` while the game is still undecided.
pub fn game_outcome(board: &Board) -> Option<GameOutcome> {
    if let Some(winner) = check_win(board) {
        return Some(GameOutcome::from_winner(winner));
    }
    if board.is_full() {
        Some(GameOutcome::Draw)
    } else {
        None
    }
}
