//! Mine floor attributes.
//!
//! One fresh generator per floor, at most four draws each, which is what
//! the lite RNG construction exists for. Infestation is gated on
//! `level % 40` before any draw happens; the mushroom check sits in the
//! infestation's else-branch, so an infested floor can never also be a
//! mushroom floor.

use crate::rng::{hashed_seed, Rng};
use crate::version::GameVersion;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct MineFloor {
    pub level: u32,
    /// Monster- or slime-infested; queries treat both the same.
    pub is_monster: bool,
    pub is_dark: bool,
    pub is_mushroom: bool,
}

/// Levels whose position within the 40-floor cycle can be infested.
fn infestable(level: u32) -> bool {
    let m = level % 40;
    (6..=29).contains(&m) && m != 19
}

fn floor_rng(seed: i32, day: u32, level: u32, version: GameVersion) -> Rng {
    if version >= GameVersion::V1_4 {
        Rng::new_lite(hashed_seed(
            day as i32,
            seed / 2,
            (level as i32).wrapping_mul(100),
            0,
            0,
        ))
    } else {
        Rng::new_lite((day as i32).wrapping_add(level as i32).wrapping_add(seed / 2))
    }
}

fn predict_floor(seed: i32, day: u32, level: u32, version: GameVersion) -> MineFloor {
    let mut rng = floor_rng(seed, day, level, version);

    let mut infested = false;
    if infestable(level) && rng.next_double() < 0.044 {
        // Monster floor on the low half, slime floor on the high half.
        rng.next_double();
        infested = true;
    }
    let mut is_mushroom = false;
    if !infested && rng.next_double() < 0.044 && level >= 81 {
        is_mushroom = true;
    }
    let is_dark = rng.next_double() < 0.15 && level % 5 != 0;

    MineFloor { level, is_monster: infested, is_dark, is_mushroom }
}

/// Floor records for `floor_lo..=floor_hi` on `day`.
pub fn predict_mine_floors(
    seed: i32,
    day: u32,
    floor_lo: u32,
    floor_hi: u32,
    version: GameVersion,
) -> Vec<MineFloor> {
    (floor_lo.max(1)..=floor_hi)
        .map(|level| predict_floor(seed, day, level, version))
        .collect()
}

/// Levels in range that are monster- or slime-infested.
pub fn find_monster_floors(
    seed: i32,
    day: u32,
    floor_lo: u32,
    floor_hi: u32,
    version: GameVersion,
) -> Vec<u32> {
    predict_mine_floors(seed, day, floor_lo, floor_hi, version)
        .into_iter()
        .filter(|f| f.is_monster)
        .map(|f| f.level)
        .collect()
}

/// Levels in range with dark lighting.
pub fn find_dark_floors(
    seed: i32,
    day: u32,
    floor_lo: u32,
    floor_hi: u32,
    version: GameVersion,
) -> Vec<u32> {
    predict_mine_floors(seed, day, floor_lo, floor_hi, version)
        .into_iter()
        .filter(|f| f.is_dark)
        .map(|f| f.level)
        .collect()
}

/// Mushroom levels in range; only levels 81 and deeper qualify.
pub fn find_mushroom_floors(
    seed: i32,
    day: u32,
    floor_lo: u32,
    floor_hi: u32,
    version: GameVersion,
) -> Vec<u32> {
    predict_mine_floors(seed, day, floor_lo, floor_hi, version)
        .into_iter()
        .filter(|f| f.is_mushroom)
        .map(|f| f.level)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floor_scans_match_reference() {
        assert_eq!(
            find_monster_floors(12345, 5, 1, 120, GameVersion::V1_3),
            [12, 56, 102]
        );
        assert_eq!(
            find_dark_floors(12345, 5, 1, 120, GameVersion::V1_3),
            [3, 8, 11, 21, 37, 51, 61, 71, 81, 91, 94, 101, 104, 112]
        );
        assert_eq!(find_mushroom_floors(12345, 5, 1, 120, GameVersion::V1_3), [98]);

        assert_eq!(
            find_monster_floors(12345, 5, 1, 120, GameVersion::V1_6),
            [52, 57, 96]
        );
        assert_eq!(
            find_dark_floors(12345, 5, 1, 120, GameVersion::V1_6),
            [3, 4, 12, 16, 23, 53, 54, 68, 82, 83, 93, 108, 109, 113, 114, 119]
        );
        assert_eq!(
            find_mushroom_floors(12345, 5, 1, 120, GameVersion::V1_6),
            [88, 91, 108]
        );
    }

    #[test]
    fn monsters_only_on_infestable_levels() {
        for seed in [0, 12345, -999] {
            for day in [1, 5, 30] {
                for floor in find_monster_floors(seed, day, 1, 200, GameVersion::V1_6) {
                    let m = floor % 40;
                    assert!((6..=29).contains(&m) && m != 19, "floor {floor}");
                }
            }
        }
    }

    #[test]
    fn mushrooms_only_below_eighty() {
        for seed in [0, 77, 12345] {
            for floor in find_mushroom_floors(seed, 9, 1, 200, GameVersion::V1_5) {
                assert!(floor >= 81);
            }
            assert!(find_mushroom_floors(seed, 9, 1, 80, GameVersion::V1_5).is_empty());
        }
    }

    #[test]
    fn dark_floors_skip_elevator_levels() {
        for floor in find_dark_floors(4242, 3, 1, 300, GameVersion::V1_6) {
            assert_ne!(floor % 5, 0);
        }
    }

    #[test]
    fn inverted_range_is_empty() {
        assert!(predict_mine_floors(1, 1, 50, 10, GameVersion::V1_6).is_empty());
    }
}
