//! Whole-game tests.
//!
//! These drive seeded games to completion for every supported table size
//! and check the game-level invariants on the way.

use snakes_ladders::animation::{move_frames, sound_cues, Frame, SoundCue};
use snakes_ladders::board::{Board, FINISH};
use snakes_ladders::core::{GameConfig, LoadedDice, PlayerId};
use snakes_ladders::rules::{MoveResult, TurnEngine};

const MAX_TURNS: usize = 10_000;

fn roster(count: usize) -> Vec<String> {
    (1..=count).map(|i| format!("Player{i}")).collect()
}

/// Play a seeded game to completion, checking invariants after every roll.
fn play_to_completion(players: usize, seed: u64) -> TurnEngine {
    let config = GameConfig::new(&roster(players)).unwrap().with_seed(seed);
    let mut engine = TurnEngine::new(&config);

    let mut turns = 0;
    while engine.result().is_none() && turns < MAX_TURNS {
        let expected = engine.state().current_player();
        let turn = engine.play_turn();

        assert_eq!(turn.player, expected);
        assert!((1..=6).contains(&turn.roll));

        let at_finish = engine
            .state()
            .players()
            .filter(|(_, p)| p.position == FINISH)
            .count();
        assert!(at_finish <= 1, "more than one player reached the finish");
        assert!(engine.state().current_player_index() < players);

        turns += 1;
    }

    assert!(engine.result().is_some(), "game should end within {MAX_TURNS} turns");
    engine
}

#[test]
fn test_games_finish_for_every_table_size() {
    for players in 2..=5 {
        for seed in [1, 7, 42, 1234] {
            let engine = play_to_completion(players, seed);
            let result = engine.result().unwrap();

            assert_eq!(engine.state().position(result.winner), FINISH);
            assert_eq!(engine.state().player(result.winner).name, result.name);

            // The last roll is the winning one and belongs to the winner.
            let last = engine.state().history().back().copied().unwrap();
            assert!(last.result.is_win());
            assert_eq!(last.player, result.winner);
            assert_eq!(engine.state().current_player(), result.winner);
        }
    }
}

#[test]
fn test_history_matches_positions() {
    let engine = play_to_completion(3, 99);
    let state = engine.state();

    // Replaying each player's last recorded result gives their position.
    for (id, player) in state.players() {
        let last = state
            .history()
            .iter()
            .filter(|t| t.player == id)
            .last()
            .map(|t| t.result.final_position())
            .unwrap_or(0);
        assert_eq!(last, player.position, "{} out of sync", player.name);
    }
}

#[test]
fn test_same_seed_same_game() {
    let a = play_to_completion(4, 2024);
    let b = play_to_completion(4, 2024);

    assert_eq!(a.state().history(), b.state().history());
    assert_eq!(a.result().unwrap().winner, b.result().unwrap().winner);
}

#[test]
fn test_snapshot_is_detached() {
    let mut engine = TurnEngine::with_dice(Board::standard(), &["a", "b"], LoadedDice::new([2]));
    let before = engine.snapshot();

    engine.play_turn();

    assert_eq!(before.position(PlayerId::new(0)), 0);
    assert!(before.history().is_empty());
    assert_eq!(engine.state().position(PlayerId::new(0)), 2);
}

#[test]
fn test_scripted_race_to_ladder_win() {
    // Seat 0 rolls 5s: 5, 10, ..., 75, then 80 climbs to 100 on its 16th roll.
    // Seat 1 rolls 1s and has had 15 turns by then.
    let mut engine = TurnEngine::with_dice(
        Board::from_tables(&[], &[(80, 100)]),
        &["runner", "idle"],
        LoadedDice::new([5, 1]),
    );

    let mut last = None;
    while engine.result().is_none() {
        last = Some(engine.play_turn());
    }

    let last = last.unwrap();
    assert_eq!(last.player, PlayerId::new(0));
    assert!(matches!(last.result, MoveResult::Redirected { landed: 80, to: 100, .. }));
    assert_eq!(engine.result().unwrap().name, "runner");
    assert_eq!(engine.state().position(PlayerId::new(1)), 15);

    assert_eq!(
        sound_cues(&last.result).as_slice(),
        &[SoundCue::Climb, SoundCue::Fanfare]
    );
    let frames = move_frames(last.player, &last.result);
    assert_eq!(frames.last(), Some(&Frame::Sound(SoundCue::Fanfare)));
}
