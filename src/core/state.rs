//! Game state: seated players, whose turn it is, and what has happened so far.
//!
//! `GameState` is owned and mutated only by the turn engine. Renderers get a
//! read-only reference or a cheap clone: turn history lives in a persistent
//! `im::Vector`, so snapshots are O(1) regardless of game length.

use im::Vector;
use std::time::Instant;

use super::config::{MAX_PLAYERS, MIN_PLAYERS};
use super::player::{Player, PlayerId, PlayerMap};
use crate::board::{Cell, FINISH};
use crate::rules::{GameResult, TurnRecord};

#[derive(Clone, Debug)]
pub struct GameState {
    players: PlayerMap<Player>,

    /// Seat whose turn it is.
    current: PlayerId,

    /// Turn number (starts at 1, counts every roll).
    turn_number: u32,

    started_at: Instant,

    history: Vector<TurnRecord>,

    /// Set exactly once, when a player reaches the finish.
    result: Option<GameResult>,
}

impl GameState {
    /// Seat the roster, starting the clock now.
    #[must_use]
    pub fn new<S: AsRef<str>>(names: &[S]) -> Self {
        Self::with_start_time(names, Instant::now())
    }

    /// Seat the roster with an explicit start time.
    #[must_use]
    pub fn with_start_time<S: AsRef<str>>(names: &[S], started_at: Instant) -> Self {
        assert!(
            (MIN_PLAYERS..=MAX_PLAYERS).contains(&names.len()),
            "Player count must be 2-5"
        );

        let players = names.iter().map(|n| Player::new(n.as_ref())).collect();

        Self {
            players: PlayerMap::from_vec(players),
            current: PlayerId::new(0),
            turn_number: 1,
            started_at,
            history: Vector::new(),
            result: None,
        }
    }

    // === Queries ===

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    pub fn players(&self) -> impl Iterator<Item = (PlayerId, &Player)> {
        self.players.iter()
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id]
    }

    #[must_use]
    pub fn position(&self, id: PlayerId) -> Cell {
        self.players[id].position
    }

    /// Seat whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current
    }

    #[must_use]
    pub fn current_player_index(&self) -> usize {
        self.current.index()
    }

    #[must_use]
    pub fn current_name(&self) -> &str {
        &self.players[self.current].name
    }

    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    #[must_use]
    pub fn started_at(&self) -> Instant {
        self.started_at
    }

    /// Resolved turns, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<TurnRecord> {
        &self.history
    }

    #[must_use]
    pub fn result(&self) -> Option<&GameResult> {
        self.result.as_ref()
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.result.is_some()
    }

    /// Seats sharing `cell`, used to draw stacked tokens.
    pub fn players_at(&self, cell: Cell) -> impl Iterator<Item = PlayerId> + '_ {
        self.players
            .iter()
            .filter(move |(_, p)| p.position == cell)
            .map(|(id, _)| id)
    }

    // === Engine-only mutation ===

    pub(crate) fn set_position(&mut self, id: PlayerId, cell: Cell) {
        debug_assert!(cell <= FINISH);
        self.players[id].position = cell;
    }

    pub(crate) fn advance(&mut self) {
        self.current = self.current.next(self.player_count());
        self.turn_number += 1;
    }

    pub(crate) fn record(&mut self, record: TurnRecord) {
        self.history.push_back(record);
    }

    pub(crate) fn finish(&mut self, result: GameResult) {
        debug_assert!(self.result.is_none(), "game finished twice");
        self.result = Some(result);
    }
}
