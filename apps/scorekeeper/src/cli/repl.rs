//! Line-oriented command loop over one scoring session.
//!
//! Players are addressed by their 1-based position on the board. Each line
//! is parsed with clap, so `help` and `<command> --help` work as usual.

use std::collections::HashMap;
use std::io::{BufRead, Write};

use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use tracing::debug;

use crate::cli::render;
use crate::domain::entries::BidEntry;
use crate::domain::player::PlayerId;
use crate::domain::round_cycle::RoundOutcome;
use crate::domain::snapshot::GameSnapshot;
use crate::error::AppError;
use crate::errors::domain::{DomainError, StateKind};
use crate::services::{BidGame, ScoreSheet, SimpleGame};

/// The session a REPL drives.
#[derive(Debug, Clone)]
pub enum Game {
    Bid(BidGame),
    Simple(SimpleGame),
}

impl Game {
    pub fn sheet(&self) -> &dyn ScoreSheet {
        match self {
            Game::Bid(g) => g,
            Game::Simple(g) => g,
        }
    }

    pub fn sheet_mut(&mut self) -> &mut dyn ScoreSheet {
        match self {
            Game::Bid(g) => g,
            Game::Simple(g) => g,
        }
    }

    pub fn submit_round(&mut self) -> Result<RoundOutcome, DomainError> {
        match self {
            Game::Bid(g) => g.submit_round(),
            Game::Simple(g) => g.submit_round(),
        }
    }

    pub fn finish(self) -> GameSnapshot {
        match self {
            Game::Bid(g) => g.finish(),
            Game::Simple(g) => g.finish(),
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "scorekeeper", no_binary_name = true, disable_version_flag = true)]
struct Line {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Stage a bid-game entry for this round
    Enter {
        player: usize,
        bid: String,
        tricks: String,
        /// Bonus points; blank counts as zero
        #[arg(allow_hyphen_values = true)]
        bonus: Option<String>,
    },
    /// Stage simple-game points for this round
    Points {
        player: usize,
        #[arg(allow_hyphen_values = true)]
        points: String,
    },
    /// Score the staged entries and move to the next round
    Submit,
    /// Overwrite one player's total
    Score {
        player: usize,
        #[arg(allow_negative_numbers = true)]
        value: i64,
    },
    /// Overwrite totals in board order; a non-number (e.g. `_`) keeps a total
    Edit {
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        totals: Vec<String>,
    },
    /// Add a player at the end of the board
    Add {
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
    },
    /// Remove a player
    Remove { player: usize },
    /// Rename a player, keeping their total
    Rename {
        player: usize,
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
    },
    /// Rank players by total
    Standings,
    /// Print the board
    Show {
        /// Print the full session snapshot as JSON
        #[arg(long)]
        json: bool,
    },
    /// Zero every total and return to round 1
    Reset,
    /// End the session and print final standings
    #[command(aliases = ["quit", "exit"])]
    Finish,
}

enum Flow {
    Continue,
    Finish,
}

/// Parse one input line. Help requests come back as `Err` with the rendered
/// help text, like any other clap error.
pub fn parse_command(line: &str) -> Result<Command, clap::Error> {
    Line::try_parse_from(line.split_whitespace()).map(|l| l.command)
}

/// Drive `game` from `input` until `finish` or end of input, writing every
/// response to `out`. Errors the user can correct are reported and the loop
/// continues; I/O failures end it.
pub fn run<R: BufRead, W: Write>(
    mut game: Game,
    input: R,
    out: &mut W,
) -> Result<GameSnapshot, AppError> {
    write!(out, "{}", render::board(&game.sheet().snapshot()))?;

    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let command = match parse_command(line) {
            Ok(command) => command,
            Err(e) if is_help(&e) => {
                write!(out, "{e}")?;
                continue;
            }
            Err(e) => {
                report(out, &usage_error(&e))?;
                continue;
            }
        };
        debug!(?command, "Command");

        match execute(&mut game, command, out) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Finish) => break,
            Err(e) if e.is_recoverable() => report(out, &e)?,
            Err(e) => return Err(e),
        }
    }

    out.flush()?;
    Ok(game.finish())
}

fn execute<W: Write>(game: &mut Game, command: Command, out: &mut W) -> Result<Flow, AppError> {
    match command {
        Command::Enter {
            player,
            bid,
            tricks,
            bonus,
        } => {
            let Game::Bid(bid_game) = game else {
                return Err(AppError::usage("`enter` is for the bid game; use `points`"));
            };
            let (id, name) = resolve(&*bid_game, player)?;
            bid_game.stage_entry(id, BidEntry::new(bid, tricks, bonus.unwrap_or_default()))?;
            writeln!(out, "Entry staged for {name}")?;
        }
        Command::Points { player, points } => {
            let Game::Simple(simple_game) = game else {
                return Err(AppError::usage("`points` is for the simple game; use `enter`"));
            };
            let (id, name) = resolve(&*simple_game, player)?;
            simple_game.stage_points(id, points)?;
            writeln!(out, "Points staged for {name}")?;
        }
        Command::Submit => match game.submit_round()? {
            RoundOutcome::Advanced { .. } => {
                write!(out, "{}", render::board(&game.sheet().snapshot()))?;
            }
            RoundOutcome::Completed { final_round } => {
                writeln!(out, "Game over after round {final_round}")?;
                write!(out, "{}", render::standings(&game.sheet().snapshot()))?;
            }
        },
        Command::Score { player, value } => {
            let sheet = game.sheet_mut();
            let (id, name) = resolve(&*sheet, player)?;
            sheet.set_score(id, value)?;
            writeln!(out, "{name} now has {value}")?;
        }
        Command::Edit { totals } => {
            let sheet = game.sheet_mut();
            if totals.len() > sheet.players().len() {
                return Err(AppError::usage(format!(
                    "{} totals given for {} players",
                    totals.len(),
                    sheet.players().len()
                )));
            }
            let edits: HashMap<PlayerId, String> = sheet
                .players()
                .iter()
                .map(|p| p.id)
                .zip(totals)
                .collect();
            let changed = sheet.apply_score_edits(&edits)?;
            writeln!(out, "Updated {changed} total(s)")?;
            write!(out, "{}", render::board(&sheet.snapshot()))?;
        }
        Command::Add { name } => {
            let name = name.join(" ");
            match game.sheet_mut().join(&name)? {
                Some(_) => writeln!(out, "Added {}", name.trim())?,
                None => writeln!(out, "Roster is full; {} was not added", name.trim())?,
            }
        }
        Command::Remove { player } => {
            let sheet = game.sheet_mut();
            let (id, _) = resolve(&*sheet, player)?;
            let removed = sheet.remove_player(id)?;
            writeln!(out, "Removed {}", removed.name)?;
        }
        Command::Rename { player, name } => {
            let sheet = game.sheet_mut();
            let (id, old) = resolve(&*sheet, player)?;
            let name = name.join(" ");
            sheet.rename_player(id, &name)?;
            writeln!(out, "{old} is now {}", name.trim())?;
        }
        Command::Standings => {
            write!(out, "{}", render::standings(&game.sheet().snapshot()))?;
        }
        Command::Show { json } => {
            let snapshot = game.sheet().snapshot();
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&snapshot)?)?;
            } else {
                write!(out, "{}", render::board(&snapshot))?;
            }
        }
        Command::Reset => {
            let sheet = game.sheet_mut();
            sheet.reset_game();
            write!(out, "{}", render::board(&sheet.snapshot()))?;
        }
        Command::Finish => return Ok(Flow::Finish),
    }
    Ok(Flow::Continue)
}

fn resolve<S: ScoreSheet + ?Sized>(
    sheet: &S,
    position: usize,
) -> Result<(PlayerId, String), AppError> {
    position
        .checked_sub(1)
        .and_then(|i| sheet.players().get(i))
        .map(|p| (p.id, p.name.clone()))
        .ok_or_else(|| {
            DomainError::state(
                StateKind::UnknownPlayer,
                format!("No player at position {position}"),
            )
            .into()
        })
}

fn is_help(e: &clap::Error) -> bool {
    matches!(
        e.kind(),
        ErrorKind::DisplayHelp | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
    )
}

fn usage_error(e: &clap::Error) -> AppError {
    let text = e.to_string();
    let first = text.lines().next().unwrap_or_default();
    AppError::usage(first.trim_start_matches("error: ").trim())
}

fn report<W: Write>(out: &mut W, e: &AppError) -> Result<(), AppError> {
    writeln!(out, "{}: {}", e.code(), e.detail())?;
    Ok(())
}
