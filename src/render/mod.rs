//! Plain-text rendering for terminal front ends.
//!
//! Every function reads a `GameState` snapshot or a resolved result and
//! returns a string; nothing here mutates game state.

use std::fmt::Write;

use crate::board::{cell_at, Board, Cell, JumpKind, BOARD_SIZE};
use crate::core::{GameState, PlayerId};
use crate::leaderboard::LeaderboardEntry;
use crate::rules::{MoveResult, TurnRecord};

/// Token colours by seat.
pub const TOKEN_COLORS: [&str; 5] = ["red", "blue", "green", "orange", "purple"];

/// Colour name of a seat's token.
#[must_use]
pub fn token_color(player: PlayerId) -> &'static str {
    TOKEN_COLORS[player.index() % TOKEN_COLORS.len()]
}

/// Single-character token for a seat: `1`..`5`.
fn token_char(player: PlayerId) -> char {
    char::from_digit(u32::from(player.0) + 1, 10).unwrap_or('?')
}

/// Marker drawn after a cell number: `v` for a snake head, `^` for a ladder foot.
fn jump_marker(board: &Board, cell: Cell) -> char {
    match board.jump_at(cell).map(|j| j.kind) {
        Some(JumpKind::Snake) => 'v',
        Some(JumpKind::Ladder) => '^',
        None => ' ',
    }
}

/// The 10x10 board, top row first, with tokens on their cells.
#[must_use]
pub fn board(board: &Board, state: &GameState) -> String {
    let width = usize::from(BOARD_SIZE);
    let divider = format!("+{}\n", "---------+".repeat(width));
    let mut out = String::new();

    out.push_str(&divider);
    for row in (0..BOARD_SIZE).rev() {
        out.push('|');
        for col in 0..BOARD_SIZE {
            let cell = cell_at(row, col);
            let tokens: String = state.players_at(cell).map(token_char).collect();
            let _ = write!(out, "{:>3}{}{:<5}|", cell, jump_marker(board, cell), tokens);
        }
        out.push('\n');
        out.push_str(&divider);
    }

    let waiting: String = state.players_at(0).map(token_char).collect();
    if !waiting.is_empty() {
        let _ = writeln!(out, "Waiting to enter: {}", waiting);
    }
    out
}

/// Snake and ladder listing, standing in for drawn connectors.
#[must_use]
pub fn connectors(board: &Board) -> String {
    let list = |jumps: &[crate::board::Jump]| {
        jumps
            .iter()
            .map(|j| format!("{}->{}", j.from, j.to))
            .collect::<Vec<_>>()
            .join(" ")
    };
    format!(
        "Ladders (green): {}\nSnakes (red):    {}\n",
        list(board.ladders()),
        list(board.snakes())
    )
}

/// Legend mapping token digits to players and colours.
#[must_use]
pub fn legend(state: &GameState) -> String {
    state
        .players()
        .map(|(id, p)| format!("{}={} ({}) @{}", token_char(id), p.name, token_color(id), p.position))
        .collect::<Vec<_>>()
        .join("  ")
}

/// `"<name>'s turn"`.
#[must_use]
pub fn turn_banner(state: &GameState) -> String {
    format!("{}'s turn", state.current_name())
}

/// One-line description of a resolved turn.
#[must_use]
pub fn describe(state: &GameState, record: &TurnRecord) -> String {
    let name = &state.player(record.player).name;
    match record.result {
        MoveResult::Overshoot { position } => format!(
            "{} rolled {} but needs exactly {} to finish; stays on {}",
            name,
            record.roll,
            100 - position,
            position
        ),
        MoveResult::Moved { to, .. } => format!("{} rolled {} and moves to {}", name, record.roll, to),
        MoveResult::Win { .. } => format!("{} rolled {} and reaches 100!", name, record.roll),
        MoveResult::Redirected {
            landed, to, kind, ..
        } => {
            let what = match kind {
                JumpKind::Snake => "was bitten by a snake",
                JumpKind::Ladder => "climbed a ladder",
            };
            format!(
                "{} rolled {}, landed on {} and {} to {}",
                name, record.roll, landed, what, to
            )
        }
    }
}

/// Leaderboard listing: `1. Ada — 42s`.
#[must_use]
pub fn leaderboard(entries: &[LeaderboardEntry]) -> String {
    let mut out = String::from("Leaderboard\n\n");
    if entries.is_empty() {
        out.push_str("(no finished games yet)\n");
    }
    for (i, entry) in entries.iter().enumerate() {
        let _ = writeln!(out, "{}. {} — {}s", i + 1, entry.player, entry.time);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_shape() {
        let state = GameState::new(&["Ada", "Grace"]);
        let text = board(&Board::standard(), &state);
        let lines: Vec<_> = text.lines().collect();

        // 10 rows, 11 dividers, 1 waiting line.
        assert_eq!(lines.len(), 22);
        assert!(lines[1].starts_with("|100"));
        assert!(lines[19].starts_with("|  1^"));
        assert_eq!(lines[21], "Waiting to enter: 12");
    }

    #[test]
    fn test_board_places_tokens() {
        let mut state = GameState::new(&["Ada", "Grace"]);
        state.set_position(PlayerId::new(1), 59);
        let text = board(&Board::standard(), &state);

        assert!(text.contains(" 59 2    |"));
        assert!(text.contains("Waiting to enter: 1\n"));
    }

    #[test]
    fn test_describe_snake() {
        let state = GameState::new(&["Ada", "Grace"]);
        let record = TurnRecord {
            turn: 1,
            player: PlayerId::new(0),
            roll: 2,
            result: MoveResult::Redirected {
                from: 62,
                landed: 64,
                to: 60,
                kind: JumpKind::Snake,
            },
        };
        assert_eq!(
            describe(&state, &record),
            "Ada rolled 2, landed on 64 and was bitten by a snake to 60"
        );
    }

    #[test]
    fn test_turn_banner_and_legend() {
        let state = GameState::new(&["Ada", "Grace"]);
        assert_eq!(turn_banner(&state), "Ada's turn");
        assert_eq!(legend(&state), "1=Ada (red) @0  2=Grace (blue) @0");
    }

    #[test]
    fn test_leaderboard_listing() {
        let text = leaderboard(&[LeaderboardEntry::new("Ada", 42), LeaderboardEntry::new("Grace", 50)]);
        assert_eq!(text, "Leaderboard\n\n1. Ada — 42s\n2. Grace — 50s\n");
    }

    #[test]
    fn test_connectors_listing() {
        let text = connectors(&Board::standard());
        assert!(text.starts_with("Ladders (green): 1->38 4->14"));
        assert!(text.contains("Snakes (red):    16->6"));
    }
}
