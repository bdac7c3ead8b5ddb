//! Terminal front end: argument parsing, the command loop, and plain-text
//! rendering of the board.

pub mod args;
pub mod render;
pub mod repl;

pub use args::{Args, Mode};
pub use repl::{parse_command, run, Command, Game};
