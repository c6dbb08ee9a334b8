//! Turn resolution.
//!
//! `TurnEngine` owns the `GameState` and is the only thing that mutates it.
//! Each roll resolves atomically into a `MoveResult`; presentation code reacts
//! to that value and never touches state.

pub mod engine;

pub use engine::{resolve, GameResult, MoveResult, TurnEngine, TurnRecord};
