//! The turn engine.
//!
//! One roll resolves in a single step:
//!
//! 1. `position + roll > 100` is an overshoot; nothing moves and the turn passes.
//! 2. `position + roll == 100` wins.
//! 3. Landing on a snake head or ladder foot jumps once to its destination.
//!    The destination is never checked for a further jump. A ladder that
//!    tops out on 100 also wins.
//! 4. Anything else is a plain move.
//!
//! [`resolve`] is the pure rule; [`TurnEngine`] applies it to the state it owns.

use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

use crate::board::{Board, Cell, JumpKind, FINISH};
use crate::core::{Dice, GameConfig, GameRng, GameState, PlayerId, DIE_FACES};

/// Outcome of applying one roll to one player's position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveResult {
    /// The roll would pass 100; the token stays where it is.
    Overshoot { position: Cell },
    /// Exact landing on 100.
    Win { from: Cell },
    /// Landed on a jump source and moved to its destination.
    Redirected {
        from: Cell,
        landed: Cell,
        to: Cell,
        kind: JumpKind,
    },
    /// Landed on a plain cell.
    Moved { from: Cell, to: Cell },
}

impl MoveResult {
    /// Position after the roll is fully resolved.
    #[must_use]
    pub fn final_position(&self) -> Cell {
        match *self {
            MoveResult::Overshoot { position } => position,
            MoveResult::Win { .. } => FINISH,
            MoveResult::Redirected { to, .. } => to,
            MoveResult::Moved { to, .. } => to,
        }
    }

    /// Position before the roll.
    #[must_use]
    pub fn start_position(&self) -> Cell {
        match *self {
            MoveResult::Overshoot { position } => position,
            MoveResult::Win { from }
            | MoveResult::Redirected { from, .. }
            | MoveResult::Moved { from, .. } => from,
        }
    }

    /// Whether this roll ended the game.
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.final_position() == FINISH
    }
}

/// Resolve a roll from `position` against `board`.
///
/// Pure function of its inputs. `roll` must be in `1..=6` and `position`
/// below 100.
#[must_use]
pub fn resolve(board: &Board, position: Cell, roll: u8) -> MoveResult {
    debug_assert!((1..=DIE_FACES).contains(&roll));
    debug_assert!(position < FINISH);

    let target = u16::from(position) + u16::from(roll);
    if target > u16::from(FINISH) {
        return MoveResult::Overshoot { position };
    }

    let target = target as Cell;
    if target == FINISH {
        return MoveResult::Win { from: position };
    }

    match board.jump_at(target) {
        Some(jump) => MoveResult::Redirected {
            from: position,
            landed: target,
            to: jump.to,
            kind: jump.kind,
        },
        None => MoveResult::Moved {
            from: position,
            to: target,
        },
    }
}

/// One resolved roll, as recorded in the game's history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    pub turn: u32,
    pub player: PlayerId,
    pub roll: u8,
    pub result: MoveResult,
}

/// Result of a completed game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameResult {
    pub winner: PlayerId,
    pub name: String,
    pub duration: Duration,
}

impl GameResult {
    /// Completion time in whole seconds, as stored on the leaderboard.
    #[must_use]
    pub fn seconds(&self) -> u64 {
        self.duration.as_secs()
    }
}

/// Owns the game state and advances it one roll at a time.
///
/// ```
/// use snakes_ladders::board::Board;
/// use snakes_ladders::core::LoadedDice;
/// use snakes_ladders::rules::{MoveResult, TurnEngine};
///
/// let mut engine = TurnEngine::with_dice(Board::standard(), &["Ada", "Grace"], LoadedDice::new([3]));
/// let turn = engine.play_turn();
/// assert_eq!(turn.result, MoveResult::Moved { from: 0, to: 3 });
/// assert_eq!(engine.state().current_name(), "Grace");
/// ```
pub struct TurnEngine<D: Dice = GameRng> {
    board: Board,
    state: GameState,
    dice: D,
}

impl TurnEngine<GameRng> {
    /// Build an engine on the standard board from a finalized configuration.
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        let dice = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        info!(
            "New game with {} players, seed {}",
            config.player_count(),
            dice.seed()
        );
        Self::with_dice(Board::standard(), &config.players, dice)
    }

    /// Seed of the engine's dice, for replaying a game.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.dice.seed()
    }
}

impl<D: Dice> TurnEngine<D> {
    pub fn with_dice<S: AsRef<str>>(board: Board, names: &[S], dice: D) -> Self {
        Self::from_state(board, GameState::new(names), dice)
    }

    /// Resume from an existing state.
    pub fn from_state(board: Board, state: GameState, dice: D) -> Self {
        Self { board, state, dice }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Owned copy of the current state for a renderer.
    #[must_use]
    pub fn snapshot(&self) -> GameState {
        self.state.clone()
    }

    #[must_use]
    pub fn result(&self) -> Option<&GameResult> {
        self.state.result()
    }

    /// Roll the die: uniform over `1..=6`.
    pub fn roll_die(&mut self) -> u8 {
        let roll = self.dice.roll();
        assert!((1..=DIE_FACES).contains(&roll), "Die rolled {roll}");
        roll
    }

    /// Apply a roll for the current player, timing a win against now.
    pub fn apply_roll(&mut self, roll: u8) -> MoveResult {
        self.apply_roll_at(roll, Instant::now())
    }

    /// Apply a roll for the current player; `now` timestamps a win.
    ///
    /// Does not advance the turn. Panics if the game is already over or the
    /// roll is not a die face.
    pub fn apply_roll_at(&mut self, roll: u8, now: Instant) -> MoveResult {
        assert!(!self.state.is_over(), "Game is already over");
        assert!((1..=DIE_FACES).contains(&roll), "Roll must be 1-6, got {roll}");

        let player = self.state.current_player();
        let result = resolve(&self.board, self.state.position(player), roll);
        self.state.set_position(player, result.final_position());

        debug!(
            "Turn {}: {} rolled {} -> {:?}",
            self.state.turn_number(),
            self.state.player(player).name,
            roll,
            result
        );

        self.state.record(TurnRecord {
            turn: self.state.turn_number(),
            player,
            roll,
            result,
        });

        if result.is_win() {
            let finish = GameResult {
                winner: player,
                name: self.state.player(player).name.clone(),
                duration: now.saturating_duration_since(self.state.started_at()),
            };
            info!("{} won in {}s", finish.name, finish.seconds());
            self.state.finish(finish);
        }

        result
    }

    /// Pass the turn to the next seat.
    pub fn advance_turn(&mut self) {
        debug_assert!(!self.state.is_over(), "no turns after a win");
        self.state.advance();
    }

    /// Roll, apply, and pass the turn unless the roll won.
    pub fn play_turn(&mut self) -> TurnRecord {
        let roll = self.roll_die();
        self.play_roll(roll)
    }

    /// Apply a roll already shown to the players, then pass the turn unless
    /// it won.
    pub fn play_roll(&mut self, roll: u8) -> TurnRecord {
        let turn = self.state.turn_number();
        let player = self.state.current_player();
        let result = self.apply_roll(roll);
        if !result.is_win() {
            self.advance_turn();
        }
        TurnRecord {
            turn,
            player,
            roll,
            result,
        }
    }
}
