//! Tomorrow's-weather prediction.
//!
//! Weather is settled in the same new-day roll sequence as luck and the
//! dish, so this continues the generator returned by the luck prefix
//! rather than seeding its own.

use strum::{Display, EnumIter, EnumString};

use crate::date::{day_of_month, season, year, Season};
use crate::rng::{hashed_seed, Rng};
use crate::version::GameVersion;

use super::luck::new_day_prefix;

#[derive(Clone, Copy, Debug, Display, EnumIter, EnumString, Eq, PartialEq)]
pub enum Weather {
    Sun,
    Rain,
    Wind,
    Storm,
    Snow,
    GreenRain,
}

/// Summer days a green-rain year can land on.
const GREEN_RAIN_DAYS: [u32; 7] = [5, 6, 7, 14, 15, 16, 18];

/// The one summer day per year that gets green rain under 1.6.
pub fn green_rain_day(seed: i32, year: u32) -> u32 {
    let mut rng = Rng::new(hashed_seed(
        (year as i32).wrapping_mul(777),
        seed / 2,
        0,
        0,
        0,
    ));
    GREEN_RAIN_DAYS[rng.next_in(0, 7) as usize]
}

/// Weather on `day`.
pub fn predict_weather(seed: i32, day: u32, version: GameVersion) -> Weather {
    // Season openers are always clear, and Spring 3 always rains.
    if day_of_month(day) == 1 {
        return Weather::Sun;
    }
    if day == 3 {
        return Weather::Rain;
    }
    if version >= GameVersion::V1_6
        && season(day) == Season::Summer
        && day_of_month(day) == green_rain_day(seed, year(day))
    {
        return Weather::GreenRain;
    }

    let (mut rng, _, _) = new_day_prefix(seed, day);
    let sea = season(day);
    let chance = match sea {
        Season::Spring | Season::Fall => 0.183,
        Season::Summer => 0.12 + 0.003 * day_of_month(day) as f64,
        Season::Winter => 0.63,
    };
    if rng.next_double() < chance {
        if sea == Season::Winter {
            return Weather::Snow;
        }
        // No storms during the first month of a save.
        if day > 27 && rng.next_double() < 0.25 {
            return Weather::Storm;
        }
        return Weather::Rain;
    }
    if matches!(sea, Season::Spring | Season::Fall) && rng.next_double() < 0.18 {
        return Weather::Wind;
    }
    Weather::Sun
}
