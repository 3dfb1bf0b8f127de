//! # Seed Seer
//!
//! A library for predicting and searching [Stardew Valley](https://www.stardewvalley.net/)
//! save seeds.
//!
//! `seed-seer` reimplements the slice of the game's random number
//! machinery that day-to-day outcomes hang off of, bit-exactly, and
//! layers a search engine over it. It breaks down into:
//!
//! * **RNG**: The game runtime's subtractive generator and hashed seed
//!   derivation, reproduced draw for draw ([`rng`]).
//! * **Predictors**: Pure functions from `(seed, day, version)` to daily
//!   luck, the saloon dish, weather, night events, traveling cart stock,
//!   geode contents, and mine floor attributes ([`predictor`]).
//! * **Filters**: A [`serde`] JSON filter language over those predictions
//!   ([`filter`]).
//! * **Search**: A cooperative single-threaded scan loop plus a
//!   multi-threaded whole-range engine built on it ([`search`]).
//!
//! ## Example
//! ```no_run
//! use std::sync::Arc;
//!
//! use seed_seer::{Progress, SeedFinder};
//!
//! // Load a search configuration using [`serde_json`].
//! let config_data = std::fs::read_to_string("search-config.json")?;
//! let finder = Arc::new(SeedFinder::from_json(&config_data)?);
//!
//! // Run the search, watching progress on the channel.
//! let events = SeedFinder::find_seeds_async(finder, 1000);
//! for event in events {
//!     match event {
//!         Progress::Searched(n) => eprintln!("checked {n} seeds"),
//!         Progress::Complete(seeds) => {
//!             println!("found: {seeds:?}");
//!             break;
//!         }
//!     }
//! }
//! # seed_seer::Result::<()>::Ok(())
//! ```

pub use anyhow::Result;

pub mod data;
pub mod date;
pub mod filter;
pub mod predictor;
pub mod rng;
pub mod search;
pub mod version;

pub use filter::{Condition, EventTarget, FilterNode, WeatherTarget};
pub use predictor::{
    find_dark_floors, find_item_in_cart, find_monster_floors, find_mushroom_floors, predict_cart,
    predict_cart_range, predict_day, predict_dish, predict_dish_range, predict_geodes,
    predict_geodes_for_player, predict_luck, predict_luck_range, predict_mine_floors,
    predict_night_event, predict_night_events_range, predict_weather, predict_weather_range,
    CartItem, DayPrediction, Dish, GeodeDrop, GeodeKind, MineFloor, NightEvent, Weather,
};
pub use search::{search_range, Progress, SearchConfig, SearchOutcome, SeedFinder};
pub use version::GameVersion;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predict_day_carries_the_cart_only_on_cart_days() {
        let friday = predict_day(12345, 5, GameVersion::V1_6).unwrap();
        assert!(friday.cart.is_some());
        let monday = predict_day(12345, 1, GameVersion::V1_6).unwrap();
        assert!(monday.cart.is_none());
    }

    #[test]
    fn predict_day_is_deterministic() {
        let a = predict_day(98765, 40, GameVersion::V1_5).unwrap();
        let b = predict_day(98765, 40, GameVersion::V1_5).unwrap();
        assert_eq!(a.luck, b.luck);
        assert_eq!(a.dish, b.dish);
        assert_eq!(a.weather, b.weather);
        assert_eq!(a.night_event, b.night_event);
        assert_eq!(a.cart, b.cart);
    }

    #[test]
    fn day_one_reference_snapshot() {
        let p = predict_day(12345, 1, GameVersion::V1_5).unwrap();
        assert_eq!(p.luck, 0.085);
        assert_eq!(p.dish, Dish { id: 203, quantity: 1 });
        assert_eq!(p.weather, Weather::Sun);
        assert_eq!(p.night_event, NightEvent::None);
        assert!(p.cart.is_none());
    }

    #[test]
    fn day_five_reference_snapshot() {
        let p = predict_day(12345, 5, GameVersion::V1_6).unwrap();
        assert_eq!(p.luck, -0.047);
        assert_eq!(p.dish, Dish { id: 205, quantity: 2 });
        assert_eq!(p.weather, Weather::Wind);
        assert_eq!(p.night_event, NightEvent::None);
    }

    #[test]
    fn cart_range_covers_friday_and_sunday() {
        let carts = predict_cart_range(12345, 5, 7, GameVersion::V1_6);
        assert_eq!(carts.len(), 2);
        assert_eq!(carts[0].0, 5);
        assert_eq!(carts[1].0, 7);
        for (_, items) in carts {
            assert_eq!(items.len(), 10);
        }
    }

    #[test]
    fn single_day_mechanics_are_total_at_day_zero() {
        // Day 0 is out of calendar range but must not panic anywhere; the
        // date helpers clamp it to day 1.
        for version in GameVersion::ALL {
            let luck = predict_luck(12345, 0);
            assert!((-0.1..=0.1).contains(&luck));
            assert!((194..240).contains(&predict_dish(12345, 0).id));
            assert_eq!(predict_weather(12345, 0, version), Weather::Sun);
            predict_night_event(12345, 0, version);
            assert!(predict_cart(12345, 0, version).is_none());
        }
    }

    #[test]
    fn range_queries_line_up_with_single_day_queries() {
        for (day, luck) in predict_luck_range(777, 10, 20) {
            assert_eq!(luck, predict_luck(777, day));
        }
        for (day, event) in predict_night_events_range(777, 10, 20, GameVersion::V1_4) {
            assert_eq!(event, predict_night_event(777, day, GameVersion::V1_4));
        }
    }
}
