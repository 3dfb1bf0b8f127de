//! Calendar arithmetic over the flat in-game day counter.
//!
//! Days count from 1 (Year 1, Spring 1) and never reset. A week is 7 days
//! starting Monday, a season 28 days, a year 4 seasons. Day 0 clamps to
//! day 1, keeping every helper (and the mechanics built on them) total
//! over `u32`.

use strum::{Display, EnumIter, EnumString};

use crate::version::GameVersion;

#[derive(Clone, Copy, Debug, Display, EnumIter, EnumString, Eq, PartialEq)]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

/// Day of week in 1..=7; Monday is 1, Friday 5, Sunday 7.
pub const fn day_of_week(day: u32) -> u32 {
    day.saturating_sub(1) % 7 + 1
}

pub const fn season(day: u32) -> Season {
    match (day.saturating_sub(1) / 28) % 4 {
        0 => Season::Spring,
        1 => Season::Summer,
        2 => Season::Fall,
        _ => Season::Winter,
    }
}

pub const fn year(day: u32) -> u32 {
    day.saturating_sub(1) / 112 + 1
}

pub const fn day_of_month(day: u32) -> u32 {
    day.saturating_sub(1) % 28 + 1
}

pub const fn day_of_year(day: u32) -> u32 {
    day.saturating_sub(1) % 112 + 1
}

/// Whether the traveling cart sets up on `day`.
///
/// Fridays and Sundays always; 1.6 additionally parks it at the spring
/// festival market on days 15..=17 of each year.
pub fn is_cart_day(day: u32, version: GameVersion) -> bool {
    let dow = day_of_week(day);
    if dow == 5 || dow == 7 {
        return true;
    }
    version >= GameVersion::V1_6 && (15..=17).contains(&day_of_year(day))
}

const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Human form of a day counter, e.g. `"Mon, Spring 1, Year 1"`.
pub fn format_day(day: u32) -> String {
    format!(
        "{}, {} {}, Year {}",
        WEEKDAYS[(day_of_week(day) - 1) as usize],
        season(day),
        day_of_month(day),
        year(day),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn week_starts_monday() {
        assert_eq!(day_of_week(1), 1);
        assert_eq!(day_of_week(5), 5);
        assert_eq!(day_of_week(7), 7);
        assert_eq!(day_of_week(8), 1);
    }

    #[test]
    fn seasons_and_years_roll_over() {
        assert_eq!(season(1), Season::Spring);
        assert_eq!(season(28), Season::Spring);
        assert_eq!(season(29), Season::Summer);
        assert_eq!(season(112), Season::Winter);
        assert_eq!(season(113), Season::Spring);
        assert_eq!(year(112), 1);
        assert_eq!(year(113), 2);
        assert_eq!(day_of_year(113), 1);
        assert_eq!(day_of_month(29), 1);
    }

    #[test]
    fn formats_day_info() {
        assert_eq!(format_day(1), "Mon, Spring 1, Year 1");
        assert_eq!(format_day(113), "Mon, Spring 1, Year 2");
        assert_eq!(format_day(5), "Fri, Spring 5, Year 1");
    }

    #[test]
    fn day_zero_clamps_to_day_one() {
        assert_eq!(day_of_week(0), day_of_week(1));
        assert_eq!(season(0), Season::Spring);
        assert_eq!(year(0), 1);
        assert_eq!(day_of_month(0), 1);
        assert_eq!(day_of_year(0), 1);
        assert_eq!(format_day(0), format_day(1));
        assert!(!is_cart_day(0, GameVersion::V1_6));
    }

    #[test]
    fn cart_days() {
        assert!(is_cart_day(5, GameVersion::V1_5));
        assert!(is_cart_day(7, GameVersion::V1_5));
        assert!(!is_cart_day(1, GameVersion::V1_5));
        // Spring festival market days only count under 1.6.
        assert!(is_cart_day(15, GameVersion::V1_6));
        assert!(!is_cart_day(15, GameVersion::V1_5_3));
        // Summer day 15 is day-of-year 43, not an exemption day.
        assert!(!is_cart_day(43, GameVersion::V1_6));
    }
}
