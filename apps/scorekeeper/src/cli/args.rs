use clap::{Parser, Subcommand};

use crate::cli::repl::Game;
use crate::config::GameConfig;
use crate::domain::round_cycle::RoundLimit;
use crate::domain::rules::SHORT_BID_ROUNDS;
use crate::error::AppError;
use crate::services::{BidGame, SimpleGame};

#[derive(Parser, Debug)]
#[command(name = "scorekeeper")]
#[command(about = "Round-by-round score keeping for bidding card games")]
pub struct Args {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub mode: Mode,
}

#[derive(Subcommand, Debug)]
pub enum Mode {
    /// Bid / tricks / bonus scoring with a fixed number of rounds
    Bid {
        /// Player name, in seating order (repeat 2-8 times)
        #[arg(short = 'p', long = "player", required = true)]
        players: Vec<String>,

        /// Number of rounds (defaults to SCOREKEEPER_DEFAULT_ROUNDS or 10)
        #[arg(short, long, conflicts_with = "short")]
        rounds: Option<u32>,

        /// Play the short five-round game
        #[arg(long)]
        short: bool,
    },
    /// Free-form points per round
    Simple {
        /// Player name (repeatable; players can also be added later)
        #[arg(short = 'p', long = "player")]
        players: Vec<String>,

        /// Number of rounds; a single round when neither this nor --indefinite is given
        #[arg(short, long, conflicts_with = "indefinite")]
        rounds: Option<u32>,

        /// Keep going until you finish the session
        #[arg(long)]
        indefinite: bool,
    },
}

impl Mode {
    pub fn start(&self, config: &GameConfig) -> Result<Game, AppError> {
        let game = match self {
            Mode::Bid {
                players,
                rounds,
                short,
            } => {
                let rounds = match (rounds, short) {
                    (Some(n), _) => *n,
                    (None, true) => SHORT_BID_ROUNDS,
                    (None, false) => config.default_rounds,
                };
                let limit = RoundLimit::fixed(rounds)?;
                Game::Bid(BidGame::start(players, limit, config)?)
            }
            Mode::Simple {
                players,
                rounds,
                indefinite,
            } => {
                let limit = if *indefinite {
                    RoundLimit::Indefinite
                } else {
                    RoundLimit::fixed(rounds.unwrap_or(1))?
                };
                Game::Simple(SimpleGame::start(players, limit, config)?)
            }
        };
        Ok(game)
    }
}
