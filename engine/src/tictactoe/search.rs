use crate::log_debug;
use super::board::{Board, get_available_moves};
use super::types::{Move, Player};
use super::win_detector::check_win;

/// Open window bounds for a root search.
pub const ALPHA_MIN: i32 = i32::MIN;
pub const BETA_MAX: i32 = i32::MAX;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Predicted outcome under optimal play: `1` computer wins, `-1` human
    /// wins, `0` draw.
    pub score: i32,
    /// `None` when the position is already won or no candidate moves remain.
    pub best_move: Option<Move>,
    pub nodes_visited: u64,
}

struct SearchNode {
    board: Board,
    moves: Vec<Move>,
}

impl SearchNode {
    fn child(&self, index: usize, turn: Player) -> SearchNode {
        let mut board = self.board.clone();
        board.set(self.moves[index], turn);

        let mut moves = Vec::with_capacity(self.moves.len().saturating_sub(1));
        moves.extend_from_slice(&self.moves[..index]);
        moves.extend_from_slice(&self.moves[index + 1..]);

        SearchNode { board, moves }
    }
}

/// Minimax with alpha-beta pruning over clones of `board`; the caller's board
/// is never touched.
///
/// `turn` is the side to move: the computer maximizes, the human minimizes.
/// When `candidates` is `None` every empty cell is tried in row-major order.
/// Among moves with equal scores the first one enumerated wins.
pub fn search(
    board: &Board,
    turn: Player,
    candidates: Option<Vec<Move>>,
    alpha: i32,
    beta: i32,
) -> SearchResult {
    let root = SearchNode {
        board: board.clone(),
        moves: candidates.unwrap_or_else(|| get_available_moves(board)),
    };

    let mut nodes_visited = 0;
    let (score, best_move) = alpha_beta(&root, turn, alpha, beta, &mut nodes_visited);

    log_debug!(
        "Search for {} finished: score {}, best move {:?}, {} nodes",
        turn,
        score,
        best_move,
        nodes_visited
    );

    SearchResult {
        score,
        best_move,
        nodes_visited,
    }
}

pub fn best_move(board: &Board, turn: Player) -> SearchResult {
    search(board, turn, None, ALPHA_MIN, BETA_MAX)
}

fn alpha_beta(
    node: &SearchNode,
    turn: Player,
    mut alpha: i32,
    mut beta: i32,
    nodes_visited: &mut u64,
) -> (i32, Option<Move>) {
    *nodes_visited += 1;

    if let Some(winner) = check_win(&node.board) {
        return (i32::from(winner.marker()), None);
    }

    let maximizing = turn.is_maximizing();
    let mut best: Option<(i32, Move)> = None;

    for index in 0..node.moves.len() {
        let child = node.child(index, turn);
        let (child_score, _) = alpha_beta(&child, turn.opponent(), alpha, beta, nodes_visited);

        let improves = match best {
            None => true,
            Some((score, _)) if maximizing => child_score > score,
            Some((score, _)) => child_score < score,
        };
        if improves {
            best = Some((child_score, node.moves[index]));
        }

        let Some((score, _)) = best else { continue };
        if maximizing {
            alpha = alpha.max(score);
        } else {
            beta = beta.min(score);
        }
        if alpha >= beta {
            break;
        }
    }

    // No child explored: no winner and nothing left to play is a draw.
    match best {
        Some((score, mv)) => (score, Some(mv)),
        None => (0, None),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::tictactoe::board::{BOARD_SIZE, move_to_index};

    fn plain_minimax(board: &Board, turn: Player, moves: &[Move]) -> (i32, Option<Move>) {
        if let Some(winner) = check_win(board) {
            return (i32::from(winner.marker()), None);
        }

        let mut best: Option<(i32, Move)> = None;
        for (index, &mv) in moves.iter().enumerate() {
            let mut child = board.clone();
            child.set(mv, turn);
            let remaining: Vec<Move> = moves
                .iter()
                .enumerate()
                .filter(|&(other, _)| other != index)
                .map(|(_, &m)| m)
                .collect();
            let (score, _) = plain_minimax(&child, turn.opponent(), &remaining);

            let improves = match best {
                None => true,
                Some((current, _)) if turn.is_maximizing() => score > current,
                Some((current, _)) => score < current,
            };
            if improves {
                best = Some((score, mv));
            }
        }

        match best {
            Some((score, mv)) => (score, Some(mv)),
            None => (0, None),
        }
    }

    fn collect_reachable(board: Board, turn: Player, seen: &mut HashSet<([[i8; 3]; 3], Player)>) {
        if !seen.insert((board.markers(), turn)) {
            return;
        }
        if check_win(&board).is_some() {
            return;
        }
        for mv in get_available_moves(&board) {
            let mut next = board.clone();
            next.set(mv, turn);
            collect_reachable(next, turn.opponent(), seen);
        }
    }

    fn index_of(result: &SearchResult) -> Option<usize> {
        result.best_move.map(|mv| move_to_index(mv, BOARD_SIZE))
    }

    #[test]
    fn test_empty_board_is_a_draw() {
        let result = best_move(&Board::new(), Player::Computer);

        assert_eq!(result.score, 0);
        let index = index_of(&result).unwrap();
        assert!([0, 2, 4, 6, 8].contains(&index), "unexpected opening {}", index);
    }

    #[test]
    fn test_takes_immediate_win() {
        let board = Board::from_markers([[1, 1, 0], [-1, -1, 0], [0, 0, 0]]);
        let result = best_move(&board, Player::Computer);

        assert_eq!(result.score, 1);
        assert_eq!(index_of(&result), Some(2));
    }

    #[test]
    fn test_blocks_threat_that_is_not_first_in_order() {
        let board = Board::from_markers([[-1, 0, 0], [0, -1, 0], [1, 0, 0]]);
        let result = best_move(&board, Player::Computer);

        assert_eq!(result.score, 0);
        assert_eq!(index_of(&result), Some(8));
    }

    #[test]
    fn test_human_side_prefers_first_winning_move() {
        let board = Board::from_markers([[1, 1, 0], [-1, -1, 0], [0, 0, 0]]);
        let result = best_move(&board, Player::Human);

        assert_eq!(result.score, -1);
        assert_eq!(index_of(&result), Some(2));
    }

    #[test]
    fn test_won_board_returns_winner_without_move() {
        let board = Board::from_markers([[-1, -1, -1], [1, 1, 0], [1, 0, 0]]);
        let result = best_move(&board, Player::Computer);

        assert_eq!(result.score, -1);
        assert_eq!(result.best_move, None);
        assert_eq!(result.nodes_visited, 1);
    }

    #[test]
    fn test_full_board_draw_returns_zero_without_move() {
        let board = Board::from_markers([[1, -1, 1], [1, -1, -1], [-1, 1, 1]]);
        let result = best_move(&board, Player::Human);

        assert_eq!(result.score, 0);
        assert_eq!(result.best_move, None);
    }

    #[test]
    fn test_restricted_candidates() {
        // Neither side can reach its winning cell when only the bottom row is
        // on offer.
        let board = Board::from_markers([[1, 1, 0], [-1, -1, 0], [0, 0, 0]]);
        let candidates = vec![Move::new(2, 0), Move::new(2, 1)];
        let result = search(&board, Player::Computer, Some(candidates), ALPHA_MIN, BETA_MAX);

        assert_eq!(result.best_move, Some(Move::new(2, 0)));
        assert_eq!(result.score, 0);
    }

    #[test]
    fn test_search_does_not_mutate_board() {
        let board = Board::from_markers([[0, 0, 0], [0, -1, 0], [0, 0, 0]]);
        let before = board.clone();
        let _ = best_move(&board, Player::Computer);
        assert_eq!(board, before);
    }

    #[test]
    fn test_pruning_visits_fewer_nodes_than_full_tree() {
        // Plain minimax expands 549946 nodes from the empty board.
        let result = best_move(&Board::new(), Player::Computer);
        assert!(result.nodes_visited < 549_946);
    }

    #[test]
    fn test_alpha_beta_matches_plain_minimax_everywhere() {
        let mut seen = HashSet::new();
        collect_reachable(Board::new(), Player::Computer, &mut seen);
        collect_reachable(Board::new(), Player::Human, &mut seen);

        let boards: HashSet<[[i8; 3]; 3]> = seen.into_iter().map(|(markers, _)| markers).collect();
        for markers in boards {
            let board = Board::from_markers(markers);
            let moves = get_available_moves(&board);
            for turn in [Player::Computer, Player::Human] {
                let pruned = best_move(&board, turn);
                let full = plain_minimax(&board, turn, &moves);
                assert_eq!(
                    (pruned.score, pruned.best_move),
                    full,
                    "mismatch for {:?} to move on\n{}",
                    turn,
                    board
                );
            }
        }
    }
}
