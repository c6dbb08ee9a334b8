//! Cosmetic animation frames derived from already-resolved rolls.
//!
//! Nothing here touches game state. A front end plays a frame list in order,
//! holding each frame for its `hold` duration; the game has already moved on
//! by the time the first frame is shown.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::time::Duration;

use crate::board::{cell_center, Cell, JumpKind, Point};
use crate::core::{GameRng, PlayerId, DIE_FACES};
use crate::rules::MoveResult;

/// Random faces shown before the real roll.
pub const SPIN_FACES: usize = 10;
/// Hold per spin face.
pub const SPIN_DELAY: Duration = Duration::from_millis(100);
/// Hold per cell while walking.
pub const STEP_DELAY: Duration = Duration::from_millis(150);
/// Interpolation steps along a snake or ladder.
pub const JUMP_STEPS: u16 = 10;
/// Hold per jump step.
pub const JUMP_DELAY: Duration = Duration::from_millis(100);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoundCue {
    /// Landed on a snake.
    Hiss,
    /// Landed on a ladder.
    Climb,
    /// Reached 100.
    Fanfare,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Frame {
    /// Show a die face.
    Dice { face: u8, hold: Duration },
    /// Place a token on a cell.
    Token {
        player: PlayerId,
        cell: Cell,
        hold: Duration,
    },
    /// Place a token between cells, mid-jump.
    Glide {
        player: PlayerId,
        at: Point,
        hold: Duration,
    },
    /// Play a sound; takes no time.
    Sound(SoundCue),
}

impl Frame {
    #[must_use]
    pub fn hold(&self) -> Duration {
        match *self {
            Frame::Dice { hold, .. } | Frame::Token { hold, .. } | Frame::Glide { hold, .. } => {
                hold
            }
            Frame::Sound(_) => Duration::ZERO,
        }
    }
}

/// Sounds a result triggers, in play order.
#[must_use]
pub fn sound_cues(result: &MoveResult) -> SmallVec<[SoundCue; 2]> {
    let mut cues = SmallVec::new();
    if let MoveResult::Redirected { kind, .. } = *result {
        cues.push(match kind {
            JumpKind::Snake => SoundCue::Hiss,
            JumpKind::Ladder => SoundCue::Climb,
        });
    }
    if result.is_win() {
        cues.push(SoundCue::Fanfare);
    }
    cues
}

/// Dice spin: `SPIN_FACES` faces from a cosmetic stream, then the real face.
///
/// `spin` should be a context stream (see [`GameRng::for_context`]) so the
/// decoy faces never consume the game's rolls.
pub fn dice_spin(spin: &mut GameRng, face: u8) -> Vec<Frame> {
    debug_assert!((1..=DIE_FACES).contains(&face));
    (0..SPIN_FACES)
        .map(|_| Frame::Dice {
            face: spin.roll_die(),
            hold: SPIN_DELAY,
        })
        .chain(std::iter::once(Frame::Dice {
            face,
            hold: SPIN_DELAY,
        }))
        .collect()
}

/// Cells a token steps through from `from` to `to`, excluding `from`.
#[must_use]
pub fn walk_path(from: Cell, to: Cell) -> SmallVec<[Cell; 6]> {
    (from.saturating_add(1)..=to).collect()
}

/// Frames for one resolved roll.
///
/// - Overshoot: nothing moves.
/// - Plain move or win: one frame per cell walked.
/// - Jump: walk to the landed cell, the jump sound, a straight glide between
///   cell centres, then the token settles on the destination.
/// - The fanfare closes any winning roll.
#[must_use]
pub fn move_frames(player: PlayerId, result: &MoveResult) -> Vec<Frame> {
    let mut frames = Vec::new();
    let step = |cell| Frame::Token {
        player,
        cell,
        hold: STEP_DELAY,
    };

    match *result {
        MoveResult::Overshoot { .. } => return frames,
        MoveResult::Moved { from, to } => frames.extend(walk_path(from, to).into_iter().map(step)),
        MoveResult::Win { from } => {
            frames.extend(walk_path(from, result.final_position()).into_iter().map(step))
        }
        MoveResult::Redirected {
            from, landed, to, ..
        } => {
            frames.extend(walk_path(from, landed).into_iter().map(step));
            frames.extend(sound_cues(result).into_iter().take(1).map(Frame::Sound));
            frames.extend(glide(player, landed, to));
            frames.push(Frame::Token {
                player,
                cell: to,
                hold: Duration::ZERO,
            });
        }
    }

    if result.is_win() {
        frames.push(Frame::Sound(SoundCue::Fanfare));
    }
    frames
}

/// `JUMP_STEPS + 1` points from the centre of `from` to the centre of `to`.
fn glide(player: PlayerId, from: Cell, to: Cell) -> Vec<Frame> {
    let (Some(start), Some(end)) = (cell_center(from), cell_center(to)) else {
        return Vec::new();
    };

    (0..=JUMP_STEPS)
        .map(|i| Frame::Glide {
            player,
            at: start.lerp(end, f32::from(i) / f32::from(JUMP_STEPS)),
            hold: JUMP_DELAY,
        })
        .collect()
}

/// Total playback time of a frame list.
#[must_use]
pub fn duration(frames: &[Frame]) -> Duration {
    frames.iter().map(Frame::hold).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    const P: PlayerId = PlayerId::new(0);

    #[test]
    fn test_overshoot_has_no_frames() {
        assert!(move_frames(P, &MoveResult::Overshoot { position: 99 }).is_empty());
    }

    #[test]
    fn test_walk_one_frame_per_cell() {
        let frames = move_frames(P, &MoveResult::Moved { from: 56, to: 59 });
        let cells: Vec<_> = frames
            .iter()
            .map(|f| match f {
                Frame::Token { cell, .. } => *cell,
                other => panic!("unexpected frame {other:?}"),
            })
            .collect();

        assert_eq!(cells, vec![57, 58, 59]);
        assert_eq!(duration(&frames), STEP_DELAY * 3);
    }

    #[test]
    fn test_snake_frames() {
        let result = MoveResult::Redirected {
            from: 62,
            landed: 64,
            to: 60,
            kind: JumpKind::Snake,
        };
        let frames = move_frames(P, &result);

        // 2 steps, hiss, 11 glide points, settle.
        assert_eq!(frames.len(), 2 + 1 + 11 + 1);
        assert_eq!(frames[2], Frame::Sound(SoundCue::Hiss));
        assert!(matches!(frames[3], Frame::Glide { at, .. } if Some(at) == cell_center(64)));
        assert!(matches!(frames[13], Frame::Glide { at, .. } if Some(at) == cell_center(60)));
        assert_eq!(
            frames.last(),
            Some(&Frame::Token {
                player: P,
                cell: 60,
                hold: Duration::ZERO
            })
        );
    }

    #[test]
    fn test_ladder_to_finish_ends_with_fanfare() {
        let result = MoveResult::Redirected {
            from: 77,
            landed: 80,
            to: 100,
            kind: JumpKind::Ladder,
        };

        assert_eq!(
            sound_cues(&result).as_slice(),
            &[SoundCue::Climb, SoundCue::Fanfare]
        );

        let frames = move_frames(P, &result);
        assert_eq!(frames[3], Frame::Sound(SoundCue::Climb));
        assert_eq!(frames.last(), Some(&Frame::Sound(SoundCue::Fanfare)));
        let sounds = frames.iter().filter(|f| matches!(f, Frame::Sound(_))).count();
        assert_eq!(sounds, 2);
    }

    #[test]
    fn test_win_walk() {
        let frames = move_frames(P, &MoveResult::Win { from: 96 });
        assert_eq!(frames.len(), 5);
        assert_eq!(frames.last(), Some(&Frame::Sound(SoundCue::Fanfare)));
    }

    #[test]
    fn test_dice_spin_ends_on_roll() {
        let mut spin = GameRng::new(1).for_context("spin");
        let frames = dice_spin(&mut spin, 4);

        assert_eq!(frames.len(), SPIN_FACES + 1);
        assert_eq!(
            frames.last(),
            Some(&Frame::Dice {
                face: 4,
                hold: SPIN_DELAY
            })
        );
        assert!(frames
            .iter()
            .all(|f| matches!(f, Frame::Dice { face, .. } if (1..=6).contains(face))));
    }

    #[test]
    fn test_walk_path_from_start() {
        assert_eq!(walk_path(0, 3).as_slice(), &[1, 2, 3]);
        assert!(walk_path(5, 5).is_empty());
    }
}
