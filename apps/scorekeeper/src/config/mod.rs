//! Configuration loaded from the environment.

pub mod game;

pub use game::GameConfig;
