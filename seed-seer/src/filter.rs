//! The filter language searches are driven by.
//!
//! A filter is a tree of groups and conditions, written in JSON:
//!
//! ```text
//! {
//!     "logic": "and",
//!     "conditions": [
//!         { "logic": "condition", "type": "night_event",
//!           "day_start": 1, "day_end": 28, "event_type": "fairy" },
//!         { "logic": "condition", "type": "cart_item",
//!           "day_start": 1, "day_end": 28, "item_id": 266 }
//!     ]
//! }
//! ```
//!
//! Evaluation is a plain recursive walk with short-circuiting; an `and`
//! with no children is true, an `or` with no children is false.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::date::is_cart_day;
use crate::predictor::{
    find_dark_floors, find_monster_floors, find_mushroom_floors, geode, night_event::NightEvent,
    predict_cart, predict_dish, predict_luck, predict_night_event, predict_weather,
    weather::Weather, GeodeKind,
};
use crate::version::GameVersion;

/// A filter tree node: a group or a leaf condition.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(tag = "logic", rename_all = "snake_case")]
pub enum FilterNode {
    And { conditions: Vec<FilterNode> },
    Or { conditions: Vec<FilterNode> },
    Condition(Condition),
}

/// A leaf condition, tagged by `type`.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Condition {
    DailyLuck {
        day_start: u32,
        day_end: u32,
        min_luck: f64,
        max_luck: f64,
    },
    NightEvent {
        day_start: u32,
        day_end: u32,
        event_type: EventTarget,
    },
    CartItem {
        day_start: u32,
        day_end: u32,
        item_id: i32,
        #[serde(default)]
        max_price: Option<i32>,
    },
    Geode {
        geode_number: u32,
        geode_type: GeodeKind,
        target_items: Vec<i32>,
    },
    DishOfDay {
        day_start: u32,
        day_end: u32,
        dish_id: i32,
    },
    Weather {
        day_start: u32,
        day_end: u32,
        weather_type: WeatherTarget,
    },
    MineFloor {
        day_start: u32,
        day_end: u32,
        floor_start: u32,
        floor_end: u32,
        no_monsters: bool,
        no_dark: bool,
        has_mushroom: bool,
    },
}

/// Night event to search for; `any` means any event at all.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EventTarget {
    Any,
    Fairy,
    Witch,
    Meteor,
    Ufo,
    Owl,
    Earthquake,
}

impl EventTarget {
    fn matches(self, event: NightEvent) -> bool {
        match self {
            EventTarget::Any => event != NightEvent::None,
            EventTarget::Fairy => event == NightEvent::Fairy,
            EventTarget::Witch => event == NightEvent::Witch,
            EventTarget::Meteor => event == NightEvent::Meteor,
            EventTarget::Ufo => event == NightEvent::Ufo,
            EventTarget::Owl => event == NightEvent::Owl,
            EventTarget::Earthquake => event == NightEvent::Earthquake,
        }
    }
}

/// Weather to search for; `any` means anything but clear skies.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherTarget {
    Any,
    Sun,
    Rain,
    Wind,
    Storm,
    Snow,
    GreenRain,
}

impl WeatherTarget {
    fn matches(self, weather: Weather) -> bool {
        match self {
            WeatherTarget::Any => weather != Weather::Sun,
            WeatherTarget::Sun => weather == Weather::Sun,
            WeatherTarget::Rain => weather == Weather::Rain,
            WeatherTarget::Wind => weather == Weather::Wind,
            WeatherTarget::Storm => weather == Weather::Storm,
            WeatherTarget::Snow => weather == Weather::Snow,
            WeatherTarget::GreenRain => weather == Weather::GreenRain,
        }
    }
}

impl FilterNode {
    /// Parses and validates a filter.
    pub fn from_json(json: &str) -> Result<Self> {
        let node: FilterNode =
            serde_json::from_str(json).context("can't parse filter JSON")?;
        node.validate()?;
        Ok(node)
    }

    /// Checks constraints the type system can't express (geode numbering,
    /// non-empty target sets). Parsing through [`FilterNode::from_json`]
    /// already runs this.
    pub fn validate(&self) -> Result<()> {
        match self {
            FilterNode::And { conditions } | FilterNode::Or { conditions } => {
                for child in conditions {
                    child.validate()?;
                }
                Ok(())
            }
            FilterNode::Condition(c) => c.validate(),
        }
    }

    /// Evaluates the tree against one seed.
    pub fn matches(&self, seed: i32, version: GameVersion) -> bool {
        match self {
            FilterNode::And { conditions } => {
                conditions.iter().all(|c| c.matches(seed, version))
            }
            FilterNode::Or { conditions } => {
                conditions.iter().any(|c| c.matches(seed, version))
            }
            FilterNode::Condition(c) => c.matches(seed, version),
        }
    }
}

impl Condition {
    fn validate(&self) -> Result<()> {
        if let Condition::Geode { geode_number, target_items, .. } = self {
            if *geode_number < 1 {
                bail!("geode condition: geode_number must be at least 1");
            }
            if target_items.is_empty() {
                bail!("geode condition: target_items is empty");
            }
        }
        Ok(())
    }

    /// Inclusive day range, normalized: inverted ranges come back empty.
    fn days(day_start: u32, day_end: u32) -> impl Iterator<Item = u32> {
        day_start.max(1)..=day_end
    }

    fn matches(&self, seed: i32, version: GameVersion) -> bool {
        match *self {
            Condition::DailyLuck { day_start, day_end, min_luck, max_luck } => {
                Self::days(day_start, day_end).any(|day| {
                    let luck = predict_luck(seed, day);
                    min_luck <= luck && luck <= max_luck
                })
            }
            Condition::NightEvent { day_start, day_end, event_type } => {
                Self::days(day_start, day_end)
                    .any(|day| event_type.matches(predict_night_event(seed, day, version)))
            }
            Condition::CartItem { day_start, day_end, item_id, max_price } => {
                Self::days(day_start, day_end)
                    .filter(|&day| is_cart_day(day, version))
                    .filter_map(|day| predict_cart(seed, day, version))
                    .any(|items| {
                        items.iter().any(|it| {
                            it.id == item_id && max_price.map_or(true, |cap| it.price <= cap)
                        })
                    })
            }
            Condition::Geode { geode_number, geode_type, ref target_items } => {
                geode::predict_geodes(seed, geode_number, 1, geode_type, version)
                    .ok()
                    .and_then(|drops| drops.first().copied())
                    .is_some_and(|drop| target_items.contains(&drop.id))
            }
            Condition::DishOfDay { day_start, day_end, dish_id } => {
                Self::days(day_start, day_end).any(|day| predict_dish(seed, day).id == dish_id)
            }
            Condition::Weather { day_start, day_end, weather_type } => {
                Self::days(day_start, day_end)
                    .any(|day| weather_type.matches(predict_weather(seed, day, version)))
            }
            Condition::MineFloor {
                day_start,
                day_end,
                floor_start,
                floor_end,
                no_monsters,
                no_dark,
                has_mushroom,
            } => Self::days(day_start, day_end).any(|day| {
                (!no_monsters
                    || find_monster_floors(seed, day, floor_start, floor_end, version).is_empty())
                    && (!no_dark
                        || find_dark_floors(seed, day, floor_start, floor_end, version).is_empty())
                    && (!has_mushroom
                        || !find_mushroom_floors(seed, day, floor_start, floor_end, version)
                            .is_empty())
            }),
        }
    }
}
