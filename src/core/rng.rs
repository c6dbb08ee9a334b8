//! Dice: deterministic, seedable random number generation.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces the identical roll sequence
//! - **Replayable**: The seed is kept, so any game can be rerun from it
//! - **Context streams**: Independent sequences for cosmetic randomness
//!   (dice spin faces) that never perturb the game's rolls
//!
//! The engine draws rolls through the [`Dice`] trait, so tests can script
//! exact roll sequences with [`LoadedDice`].
//!
//! ```
//! use snakes_ladders::core::{Dice, GameRng};
//!
//! let mut rng = GameRng::new(42);
//! let roll = rng.roll();
//! assert!((1..=6).contains(&roll));
//!
//! let mut replay = GameRng::new(42);
//! assert_eq!(replay.roll(), roll);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::VecDeque;
use std::hash::{Hash, Hasher};

/// Number of faces on the die.
pub const DIE_FACES: u8 = 6;

/// Source of die rolls consumed by the turn engine.
///
/// Implementations must return a value in `1..=DIE_FACES`.
pub trait Dice {
    fn roll(&mut self) -> u8;
}

/// Seedable ChaCha8 generator.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG from a fresh OS-derived seed.
    ///
    /// The seed is still recorded, so the game can be replayed from it.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this generator started from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Create an independent stream for a specific context.
    ///
    /// The same context always produces the same stream from the same seed.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;

        let mut hasher = DefaultHasher::new();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Roll a fair die: uniform over `1..=6`.
    pub fn roll_die(&mut self) -> u8 {
        self.inner.gen_range(1..=DIE_FACES)
    }
}

impl Dice for GameRng {
    fn roll(&mut self) -> u8 {
        self.roll_die()
    }
}

/// Scripted dice that replay a fixed sequence of faces, cycling when exhausted.
#[derive(Clone, Debug)]
pub struct LoadedDice {
    faces: VecDeque<u8>,
}

impl LoadedDice {
    pub fn new(faces: impl IntoIterator<Item = u8>) -> Self {
        let faces: VecDeque<u8> = faces.into_iter().collect();
        assert!(!faces.is_empty(), "Loaded dice need at least one face");
        assert!(
            faces.iter().all(|f| (1..=DIE_FACES).contains(f)),
            "Die faces must be in 1..=6"
        );
        Self { faces }
    }
}

impl Dice for LoadedDice {
    fn roll(&mut self) -> u8 {
        // Non-empty by construction.
        let face = self.faces[0];
        self.faces.rotate_left(1);
        face
    }
}
