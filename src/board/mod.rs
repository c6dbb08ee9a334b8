//! The static board: 100 numbered cells and the snake/ladder jump tables.
//!
//! The board is immutable configuration. The turn engine looks up jumps by
//! the landed cell; renderers read the tables to draw connectors.

pub mod layout;

pub use layout::{cell_at, cell_center, grid_position, GridPosition, Point, CELL_HEIGHT, CELL_WIDTH};

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A board cell. `1..=100` are on the board, `0` is off-board (not yet entered).
pub type Cell = u8;

/// Off-board starting position.
pub const START: Cell = 0;
/// The winning cell.
pub const FINISH: Cell = 100;
/// Cells per row and rows per board.
pub const BOARD_SIZE: u8 = 10;

/// Standard snakes: head → tail.
pub const SNAKES: [(Cell, Cell); 10] = [
    (16, 6),
    (47, 26),
    (49, 11),
    (56, 53),
    (62, 19),
    (64, 60),
    (87, 24),
    (93, 73),
    (95, 75),
    (98, 78),
];

/// Standard ladders: foot → top.
pub const LADDERS: [(Cell, Cell); 9] = [
    (1, 38),
    (4, 14),
    (9, 31),
    (21, 42),
    (28, 84),
    (36, 44),
    (51, 67),
    (71, 91),
    (80, 100),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JumpKind {
    Snake,
    Ladder,
}

/// A single redirection: landing on `from` moves the token to `to`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Jump {
    pub from: Cell,
    pub to: Cell,
    pub kind: JumpKind,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("cell {0} is outside the board")]
    OutOfRange(Cell),
    #[error("jump from {0} leads back to itself")]
    SelfLoop(Cell),
    #[error("cell {0} is the source of more than one jump")]
    DuplicateSource(Cell),
    #[error("snake {from}->{to} does not go down")]
    SnakeGoesUp { from: Cell, to: Cell },
    #[error("ladder {from}->{to} does not go up")]
    LadderGoesDown { from: Cell, to: Cell },
}

/// Immutable board configuration.
#[derive(Clone, Debug)]
pub struct Board {
    jumps: FxHashMap<Cell, Jump>,
    snakes: Vec<Jump>,
    ladders: Vec<Jump>,
}

impl Board {
    /// The standard board.
    #[must_use]
    pub fn standard() -> Self {
        Self::from_tables(&SNAKES, &LADDERS)
    }

    /// Build a board from explicit tables.
    ///
    /// Tables are not validated here; see [`Board::validate`]. If a cell is
    /// listed twice the first entry (snakes before ladders) wins the lookup.
    #[must_use]
    pub fn from_tables(snakes: &[(Cell, Cell)], ladders: &[(Cell, Cell)]) -> Self {
        let to_jumps = |table: &[(Cell, Cell)], kind| {
            table
                .iter()
                .map(|&(from, to)| Jump { from, to, kind })
                .collect::<Vec<_>>()
        };
        let snakes = to_jumps(snakes, JumpKind::Snake);
        let ladders = to_jumps(ladders, JumpKind::Ladder);

        let mut jumps = FxHashMap::default();
        for jump in snakes.iter().chain(ladders.iter()) {
            jumps.entry(jump.from).or_insert(*jump);
        }

        Self {
            jumps,
            snakes,
            ladders,
        }
    }

    /// The jump triggered by landing on `cell`, if any.
    #[must_use]
    pub fn jump_at(&self, cell: Cell) -> Option<Jump> {
        self.jumps.get(&cell).copied()
    }

    #[must_use]
    pub fn snakes(&self) -> &[Jump] {
        &self.snakes
    }

    #[must_use]
    pub fn ladders(&self) -> &[Jump] {
        &self.ladders
    }

    /// All jumps, ladders first, in table order.
    pub fn connectors(&self) -> impl Iterator<Item = &Jump> {
        self.ladders.iter().chain(self.snakes.iter())
    }

    /// Check the tables against the board's structural rules.
    pub fn validate(&self) -> Result<(), BoardError> {
        let mut seen = rustc_hash::FxHashSet::default();

        for jump in self.connectors() {
            for cell in [jump.from, jump.to] {
                if !(1..=FINISH).contains(&cell) {
                    return Err(BoardError::OutOfRange(cell));
                }
            }
            if jump.from == jump.to {
                return Err(BoardError::SelfLoop(jump.from));
            }
            if !seen.insert(jump.from) {
                return Err(BoardError::DuplicateSource(jump.from));
            }
            match jump.kind {
                JumpKind::Snake if jump.to > jump.from => {
                    return Err(BoardError::SnakeGoesUp {
                        from: jump.from,
                        to: jump.to,
                    })
                }
                JumpKind::Ladder if jump.to < jump.from => {
                    return Err(BoardError::LadderGoesDown {
                        from: jump.from,
                        to: jump.to,
                    })
                }
                _ => {}
            }
        }

        Ok(())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_board_is_valid() {
        assert_eq!(Board::standard().validate(), Ok(()));
    }

    #[test]
    fn test_jump_lookup() {
        let board = Board::standard();

        assert_eq!(
            board.jump_at(64),
            Some(Jump {
                from: 64,
                to: 60,
                kind: JumpKind::Snake
            })
        );
        assert_eq!(board.jump_at(9).map(|j| j.to), Some(31));
        assert_eq!(board.jump_at(59), None);
        assert_eq!(board.jump_at(FINISH), None);
    }

    #[test]
    fn test_connectors_cover_both_tables() {
        let board = Board::standard();
        assert_eq!(board.connectors().count(), SNAKES.len() + LADDERS.len());
        assert_eq!(board.snakes().len(), 10);
        assert_eq!(board.ladders().len(), 9);
    }

    #[test]
    fn test_validate_rejects_shared_source() {
        let board = Board::from_tables(&[(30, 10)], &[(30, 50)]);
        assert_eq!(board.validate(), Err(BoardError::DuplicateSource(30)));
        // Snake listed first wins the lookup.
        assert_eq!(board.jump_at(30).map(|j| j.kind), Some(JumpKind::Snake));
    }

    #[test]
    fn test_validate_rejects_bad_directions() {
        assert_eq!(
            Board::from_tables(&[(10, 20)], &[]).validate(),
            Err(BoardError::SnakeGoesUp { from: 10, to: 20 })
        );
        assert_eq!(
            Board::from_tables(&[], &[(20, 10)]).validate(),
            Err(BoardError::LadderGoesDown { from: 20, to: 10 })
        );
        assert_eq!(
            Board::from_tables(&[(5, 5)], &[]).validate(),
            Err(BoardError::SelfLoop(5))
        );
        assert_eq!(
            Board::from_tables(&[], &[(0, 10)]).validate(),
            Err(BoardError::OutOfRange(0))
        );
    }
}
