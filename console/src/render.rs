use tictactoe_engine::tictactoe::{
    BOARD_SIZE, Board, GameOutcome, LineKind, WinningLine, move_to_index,
};

use crate::config::SymbolsConfig;

pub fn render_board(board: &Board, symbols: &SymbolsConfig) -> String {
    board.render(symbols.computer, symbols.human)
}

pub fn index_guide() -> String {
    (0..BOARD_SIZE)
        .map(|row| {
            (0..BOARD_SIZE)
                .map(|col| (row * BOARD_SIZE + col).to_string())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn outcome_message(outcome: GameOutcome) -> &'static str {
    match outcome {
        GameOutcome::ComputerWins => "Computer wins.",
        GameOutcome::HumanWins => "You win!",
        GameOutcome::Draw => "Draw.",
    }
}

pub fn describe_line(line: &WinningLine) -> String {
    let kind = match line.kind {
        LineKind::Row(row) => format!("row {}", row),
        LineKind::Column(col) => format!("column {}", col),
        LineKind::MainDiagonal => "main diagonal".to_string(),
        LineKind::AntiDiagonal => "anti-diagonal".to_string(),
    };
    format!(
        "{} completed the {} (cells {} to {})",
        line.player,
        kind,
        move_to_index(line.start, BOARD_SIZE),
        move_to_index(line.end, BOARD_SIZE)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_engine::tictactoe::check_win_with_line;

    #[test]
    fn test_index_guide() {
        assert_eq!(index_guide(), "0 1 2\n3 4 5\n6 7 8");
    }

    #[test]
    fn test_render_board_uses_symbols() {
        let board = Board::from_markers([[1, 0, 0], [0, -1, 0], [0, 0, 0]]);
        let symbols = SymbolsConfig {
            computer: 'C',
            human: 'H',
        };
        assert_eq!(render_board(&board, &symbols), "C . .\n. H .\n. . .");
    }

    #[test]
    fn test_describe_anti_diagonal() {
        let board = Board::from_markers([[-1, -1, 1], [0, 1, 0], [1, 0, -1]]);
        let line = check_win_with_line(&board).unwrap();
        assert_eq!(
            describe_line(&line),
            "computer completed the anti-diagonal (cells 2 to 6)"
        );
    }
}
