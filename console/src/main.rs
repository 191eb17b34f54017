mod config;
mod game_loop;
mod render;

use std::io;
use std::path::PathBuf;

use clap::Parser;
use tictactoe_engine::config::ConfigManager;
use tictactoe_engine::logger::{self, LogLevel};
use tictactoe_engine::log;

use config::{FirstPlayerMode, get_config_manager, parse_log_level};

#[derive(Parser)]
#[command(name = "tictactoe_console", about = "Play tic-tac-toe against an unbeatable computer")]
struct Args {
    /// YAML config file; defaults to tictactoe_console.yaml next to the executable
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, value_enum)]
    first_player: Option<FirstPlayerMode>,

    /// Allow asking for hints with `h`
    #[arg(long)]
    hints: bool,

    #[arg(long)]
    use_log_prefix: bool,

    #[arg(long, value_parser = parse_log_level)]
    log_level: Option<LogLevel>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config_manager = match args.config {
        Some(path) => ConfigManager::from_yaml_file(path),
        None => get_config_manager(),
    };
    let mut config = config_manager.get_config()?;

    if let Some(first_player) = args.first_player {
        config.first_player = first_player;
    }
    if args.hints {
        config.show_hints = true;
    }
    if args.use_log_prefix {
        config.logging.use_prefix = true;
    }
    if let Some(level) = args.log_level {
        config.logging.level = level;
    }

    let prefix = config.logging.use_prefix.then(|| "Console".to_string());
    logger::init_logger(prefix, config.logging.level);
    log!("Starting with first player {:?}, hints {}", config.first_player, config.show_hints);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    game_loop::run(&config, &mut input, &mut output)?;

    log!("Goodbye");
    Ok(())
}
