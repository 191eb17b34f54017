use std::cell::Cell;
use std::io::{self, BufRead, Write};
use std::rc::Rc;

use tictactoe_engine::log;
use tictactoe_engine::tictactoe::{GameOutcome, TicTacToeSession, check_win_with_line};

use crate::config::{FirstPlayerMode, GameConfig};
use crate::render::{describe_line, index_guide, outcome_message, render_board};

enum Command {
    Place(usize),
    Hint,
    Quit,
}

fn parse_command(line: &str) -> Option<Command> {
    match line.trim() {
        "q" | "quit" => Some(Command::Quit),
        "h" | "hint" => Some(Command::Hint),
        other => other.parse().ok().map(Command::Place),
    }
}

fn computer_starts(mode: FirstPlayerMode) -> bool {
    match mode {
        FirstPlayerMode::Human => false,
        FirstPlayerMode::Computer => true,
        FirstPlayerMode::Random => rand::random(),
    }
}

/// `None` on end of input.
fn read_line(input: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

/// Plays games until the player quits, declines a rematch or input ends.
pub fn run(
    config: &GameConfig,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> io::Result<()> {
    let finished: Rc<Cell<Option<GameOutcome>>> = Rc::new(Cell::new(None));
    let mut session = TicTacToeSession::new();
    let sink = finished.clone();
    session.register_game_over_callback(move |outcome| sink.set(Some(outcome)));

    writeln!(output, "Cells are numbered:\n{}\n", index_guide())?;

    let mut games_played = 0u32;
    loop {
        session.reset();
        finished.set(None);
        games_played += 1;

        let mut computer_turn = computer_starts(config.first_player);
        let opener = if computer_turn { "computer" } else { "human" };
        log!("Starting game {} ({} moves first)", games_played, opener);

        while finished.get().is_none() {
            if computer_turn {
                if let Some(index) = session.computer_move() {
                    writeln!(output, "Computer plays {}", index)?;
                }
                computer_turn = false;
                continue;
            }

            writeln!(output, "{}", render_board(session.board(), &config.symbols))?;
            if config.show_hints {
                write!(output, "Your move (0-8, h for hint, q to quit): ")?;
            } else {
                write!(output, "Your move (0-8, q to quit): ")?;
            }
            output.flush()?;

            let Some(line) = read_line(input)? else {
                return Ok(());
            };
            match parse_command(&line) {
                Some(Command::Quit) => return Ok(()),
                Some(Command::Hint) if config.show_hints => match session.hint() {
                    Some(index) => writeln!(output, "Hint: {}", index)?,
                    None => writeln!(output, "No moves left")?,
                },
                Some(Command::Place(index)) => match session.human_move_at_index(index) {
                    Ok(()) => computer_turn = true,
                    Err(err) => writeln!(output, "{}", err)?,
                },
                Some(Command::Hint) | None => {
                    writeln!(output, "Enter a cell index from 0 to 8")?;
                }
            }
        }

        writeln!(output, "{}", render_board(session.board(), &config.symbols))?;
        if let Some(outcome) = finished.get() {
            writeln!(output, "{}", outcome_message(outcome))?;
        }
        if let Some(line) = check_win_with_line(session.board()) {
            writeln!(output, "{}", describe_line(&line))?;
        }

        write!(output, "Play again? [y/N]: ")?;
        output.flush()?;
        let again = read_line(input)?
            .map(|line| line.trim().eq_ignore_ascii_case("y"))
            .unwrap_or(false);
        if !again {
            return Ok(());
        }
    }
}
