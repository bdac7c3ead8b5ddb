use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use scorekeeper::cli::{self, render, Args};
use scorekeeper::{AppError, GameConfig};

mod telemetry;

fn main() -> ExitCode {
    let args = Args::parse();
    telemetry::init_tracing(args.verbose, args.log_json);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}: {}", e.code(), e.detail());
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), AppError> {
    let config = GameConfig::from_env()?;
    let game = args.mode.start(&config)?;

    let stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();
    let final_board = cli::run(game, stdin, &mut stdout)?;

    write!(stdout, "{}", render::standings(&final_board))?;
    stdout.flush()?;
    Ok(())
}
