//! Per-mechanic predictors.
//!
//! Every prediction is a pure function of `(seed, day, version)` plus
//! mechanic-specific parameters. Each call builds its own [`Rng`](crate::rng::Rng)
//! from a derived seed and consumes it in exactly the order the game does;
//! no generator is ever shared between mechanics.

pub mod cart;
pub mod geode;
pub mod luck;
pub mod mines;
pub mod night_event;
pub mod weather;

use anyhow::{ensure, Result};

use crate::date::is_cart_day;
use crate::version::GameVersion;

pub use cart::{find_item_in_cart, predict_cart, CartItem};
pub use geode::{predict_geodes, predict_geodes_for_player, GeodeDrop, GeodeKind};
pub use luck::{predict_dish, predict_luck, Dish};
pub use mines::{
    find_dark_floors, find_monster_floors, find_mushroom_floors, predict_mine_floors, MineFloor,
};
pub use night_event::{predict_night_event, NightEvent};
pub use weather::{predict_weather, Weather};

/// Everything the game decides for a single day.
#[derive(Clone, Debug)]
pub struct DayPrediction {
    pub day: u32,
    pub luck: f64,
    pub dish: Dish,
    pub weather: Weather,
    pub night_event: NightEvent,
    /// Present only when the traveling cart shows up on `day`.
    pub cart: Option<Vec<CartItem>>,
}

/// Predicts the full slate for one day.
pub fn predict_day(seed: i32, day: u32, version: GameVersion) -> Result<DayPrediction> {
    ensure!(day >= 1, "day must be at least 1");
    Ok(DayPrediction {
        day,
        luck: predict_luck(seed, day),
        dish: predict_dish(seed, day),
        weather: predict_weather(seed, day, version),
        night_event: predict_night_event(seed, day, version),
        cart: predict_cart(seed, day, version),
    })
}

fn day_range(day_lo: u32, day_hi: u32) -> impl Iterator<Item = u32> {
    // Inverted ranges normalize to empty rather than erroring.
    day_lo.max(1)..=day_hi
}

/// Daily luck for each day in `day_lo..=day_hi`.
pub fn predict_luck_range(seed: i32, day_lo: u32, day_hi: u32) -> Vec<(u32, f64)> {
    day_range(day_lo, day_hi)
        .map(|day| (day, predict_luck(seed, day)))
        .collect()
}

/// Saloon dish of the day for each day in the range.
pub fn predict_dish_range(seed: i32, day_lo: u32, day_hi: u32) -> Vec<(u32, Dish)> {
    day_range(day_lo, day_hi)
        .map(|day| (day, predict_dish(seed, day)))
        .collect()
}

/// Weather for each day in the range.
pub fn predict_weather_range(
    seed: i32,
    day_lo: u32,
    day_hi: u32,
    version: GameVersion,
) -> Vec<(u32, Weather)> {
    day_range(day_lo, day_hi)
        .map(|day| (day, predict_weather(seed, day, version)))
        .collect()
}

/// Night event rolled on each day in the range (for the following night).
pub fn predict_night_events_range(
    seed: i32,
    day_lo: u32,
    day_hi: u32,
    version: GameVersion,
) -> Vec<(u32, NightEvent)> {
    day_range(day_lo, day_hi)
        .map(|day| (day, predict_night_event(seed, day, version)))
        .collect()
}

/// Cart stock for every cart day in the range.
pub fn predict_cart_range(
    seed: i32,
    day_lo: u32,
    day_hi: u32,
    version: GameVersion,
) -> Vec<(u32, Vec<CartItem>)> {
    day_range(day_lo, day_hi)
        .filter(|&day| is_cart_day(day, version))
        .filter_map(|day| predict_cart(seed, day, version).map(|items| (day, items)))
        .collect()
}
