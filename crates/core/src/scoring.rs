//! Scoring module - score and speed progression
//!
//! Rows are awarded per unbroken streak found by one clearing scan:
//! a streak of 1-3 rows is worth a small award, 4 or more a big one.
//! Each award also shortens the gravity interval, down to a floor.

use crate::types::{
    BIG_CLEAR_ROWS, BIG_CLEAR_SCORE, BIG_CLEAR_SPEEDUP_MS, MIN_SPEED_MS, SMALL_CLEAR_SCORE,
    SMALL_CLEAR_SPEEDUP_MS,
};

/// Award for one cleared streak
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Award {
    pub score: u32,
    pub speedup_ms: u32,
}

/// Award for a streak of `rows` contiguous full rows
pub fn award_for_streak(rows: u32) -> Award {
    match rows {
        0 => Award::default(),
        r if r >= BIG_CLEAR_ROWS => Award {
            score: BIG_CLEAR_SCORE,
            speedup_ms: BIG_CLEAR_SPEEDUP_MS,
        },
        _ => Award {
            score: SMALL_CLEAR_SCORE,
            speedup_ms: SMALL_CLEAR_SPEEDUP_MS,
        },
    }
}

/// Shorten the gravity interval by `speedup_ms`, never below the floor.
///
/// A speed already at or below the floor is returned unchanged.
pub fn apply_speedup(speed_ms: u32, speedup_ms: u32) -> u32 {
    if speed_ms <= MIN_SPEED_MS {
        return speed_ms;
    }
    speed_ms.saturating_sub(speedup_ms).max(MIN_SPEED_MS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_streak_awards() {
        assert_eq!(award_for_streak(0), Award::default());
        for rows in 1..=3 {
            assert_eq!(
                award_for_streak(rows),
                Award {
                    score: 10,
                    speedup_ms: 5
                }
            );
        }
        for rows in 4..=6 {
            assert_eq!(
                award_for_streak(rows),
                Award {
                    score: 100,
                    speedup_ms: 10
                }
            );
        }
    }

    #[test]
    fn test_speedup_floor() {
        assert_eq!(apply_speedup(500, 5), 495);
        assert_eq!(apply_speedup(155, 10), 150);
        assert_eq!(apply_speedup(152, 5), 150);
        assert_eq!(apply_speedup(150, 5), 150);
        assert_eq!(apply_speedup(150, 10), 150);
    }
}
