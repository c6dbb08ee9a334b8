//! Core types: players, dice, configuration, game state.

pub mod player;
pub mod rng;
pub mod config;
pub mod state;

pub use player::{Player, PlayerId, PlayerMap};
pub use rng::{Dice, GameRng, LoadedDice, DIE_FACES};
pub use config::{ConfigError, GameConfig, Settings, MAX_PLAYERS, MIN_PLAYERS};
pub use state::GameState;
