//! Tic-tac-toe engine: board model, win detection, alpha-beta search and a
//! human-vs-computer game session.

pub mod config;
pub mod logger;
pub mod tictactoe;
