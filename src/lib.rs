//! # snakes-ladders
//!
//! A two-to-five player Snakes & Ladders game with a headless core.
//!
//! ## Design Principles
//!
//! 1. **Headless Core**: The turn engine and leaderboard work without any
//!    window, image or sound. Presentation is layered on top.
//!
//! 2. **Single Owner**: `TurnEngine` owns the `GameState`. Each roll resolves
//!    in one `&mut self` call into a `MoveResult`; renderers and animations
//!    only read snapshots and results.
//!
//! 3. **Deterministic**: Dice come from a seedable ChaCha8 stream, so any game
//!    can be replayed from its seed.
//!
//! ## Modules
//!
//! - `core`: Players, dice, configuration, game state
//! - `board`: Static jump tables and boustrophedon layout
//! - `rules`: Turn engine and roll resolution
//! - `leaderboard`: Persisted top-5 completion times
//! - `animation`: Cosmetic frame sequences and sound cues
//! - `render`: Plain-text rendering for terminal front ends

pub mod core;
pub mod board;
pub mod rules;
pub mod leaderboard;
pub mod animation;
pub mod render;

// Re-export commonly used types
pub use crate::core::{
    ConfigError, Dice, GameConfig, GameRng, GameState, LoadedDice, Player,
    PlayerId, PlayerMap, Settings,
};

pub use crate::board::{Board, Cell, Jump, JumpKind, FINISH, START};

pub use crate::rules::{resolve, GameResult, MoveResult, TurnEngine, TurnRecord};

pub use crate::leaderboard::{LeaderboardEntry, LeaderboardError, LeaderboardStore};

pub use crate::animation::{Frame, SoundCue};
