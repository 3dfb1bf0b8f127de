//! Traveling cart stock prediction.
//!
//! Three generations of the stocking algorithm coexist:
//! pre-1.4 rolls raw ids through a resolution table and allows repeats;
//! 1.4 walks forward from the roll until it finds an unused legal id;
//! 1.6 shuffles the whole object catalog by drawing a sort key per entry.
//! In every generation each slot's item draw is followed by two price
//! draws and one quantity draw, even when the caller only wants the id.

use std::collections::BTreeMap;

use crate::data::{self, ObjectEntry, CART_ITEMS_1_4, CART_ROLL_TO_ID_PRE14};
use crate::date::is_cart_day;
use crate::rng::{hashed_seed, Rng};
use crate::version::GameVersion;

/// One cart slot.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CartItem {
    pub id: i32,
    pub price: i32,
    pub quantity: i32,
}

const CART_SLOTS: usize = 10;

fn base_price(id: i32) -> i32 {
    data::object(id).map_or(0, |e| e.price)
}

/// Price and quantity draws shared by every algorithm generation.
fn price_and_quantity(rng: &mut Rng, id: i32) -> CartItem {
    let p1 = rng.next_in(1, 11);
    let p2 = rng.next_in(3, 6);
    let price = (p1 * 100).max(p2 * base_price(id));
    let quantity = if rng.next_double() < 0.1 { 5 } else { 1 };
    CartItem { id, price, quantity }
}

fn stock_pre_1_4(rng: &mut Rng) -> Vec<CartItem> {
    (0..CART_SLOTS)
        .map(|_| {
            let roll = rng.next_in(2, 790);
            let id = CART_ROLL_TO_ID_PRE14[(roll - 2) as usize];
            price_and_quantity(rng, id)
        })
        .collect()
}

fn stock_1_4(rng: &mut Rng) -> Vec<CartItem> {
    let mut items: Vec<CartItem> = Vec::with_capacity(CART_SLOTS);
    for _ in 0..CART_SLOTS {
        let mut r = rng.next_in(2, 790);
        // Walk forward (wrapping at 790) until the id is legal and unused.
        while CART_ITEMS_1_4.binary_search(&r).is_err() || items.iter().any(|it| it.id == r) {
            r = (r + 1) % 790;
        }
        items.push(price_and_quantity(rng, r));
    }
    items
}

fn stock_1_6(rng: &mut Rng) -> Vec<CartItem> {
    // One key is drawn per catalog entry, rejected entries included: the
    // game filters only after the draw, so skipping a draw here would
    // desynchronize every key that follows.
    let mut keyed: BTreeMap<i32, &'static ObjectEntry> = BTreeMap::new();
    for entry in data::OBJECTS.iter() {
        let key = rng.next();
        if entry.price > 0 && !entry.offlimits {
            // Key collisions keep the later entry, as the game's
            // dictionary insert does.
            keyed.insert(key, entry);
        }
    }
    let picks: Vec<i32> = keyed
        .values()
        .filter(|e| e.category < 0 && e.category != -999 && !e.type_excluded)
        .take(CART_SLOTS)
        .map(|e| e.id)
        .collect();
    picks
        .into_iter()
        .map(|id| price_and_quantity(rng, id))
        .collect()
}

/// The cart's ten slots for `day`, or `None` when the cart is absent.
pub fn predict_cart(seed: i32, day: u32, version: GameVersion) -> Option<Vec<CartItem>> {
    if !is_cart_day(day, version) {
        return None;
    }
    let items = if version >= GameVersion::V1_6 {
        let mut rng = Rng::new(hashed_seed(day as i32, seed / 2, 0, 0, 0));
        stock_1_6(&mut rng)
    } else if version >= GameVersion::V1_4 {
        let mut rng = Rng::new(seed.wrapping_add(day as i32));
        stock_1_4(&mut rng)
    } else {
        let mut rng = Rng::new(seed.wrapping_add(day as i32));
        stock_pre_1_4(&mut rng)
    };
    Some(items)
}

/// First day within `1..=max_days` the cart sells `item_id`, with its
/// price that day.
pub fn find_item_in_cart(
    seed: i32,
    item_id: i32,
    max_days: u32,
    version: GameVersion,
) -> Option<(u32, i32)> {
    (1..=max_days).find_map(|day| {
        predict_cart(seed, day, version)?
            .iter()
            .find(|it| it.id == item_id)
            .map(|it| (day, it.price))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cart(seed: i32, day: u32, version: GameVersion) -> Vec<CartItem> {
        predict_cart(seed, day, version).expect("cart day")
    }

    #[test]
    fn pre_1_4_stock_matches_reference_and_allows_repeats() {
        let items = cart(12345, 5, GameVersion::V1_3);
        let ids: Vec<i32> = items.iter().map(|it| it.id).collect();
        assert_eq!(ids, [538, 60, 694, 538, 235, 607, 60, 614, 418, 128]);
        assert_eq!(items[0], CartItem { id: 538, price: 600, quantity: 1 });
        assert_eq!(items[4], CartItem { id: 235, price: 1500, quantity: 1 });
    }

    #[test]
    fn stock_1_4_matches_reference() {
        let items = cart(12345, 5, GameVersion::V1_4);
        let expected = [
            (591, 600, 1),
            (78, 200, 1),
            (694, 1000, 1),
            (593, 700, 1),
            (235, 1500, 1),
            (607, 810, 1),
            (88, 900, 1),
            (614, 400, 1),
            (418, 700, 1),
            (128, 900, 1),
        ];
        for (item, (id, price, quantity)) in items.iter().zip(expected) {
            assert_eq!(*item, CartItem { id, price, quantity });
        }
        // 1.5 kept the 1.4 stocking algorithm.
        assert_eq!(items, cart(12345, 5, GameVersion::V1_5));
    }

    #[test]
    fn stock_1_6_matches_reference() {
        let day5: Vec<(i32, i32, i32)> = cart(12345, 5, GameVersion::V1_6)
            .iter()
            .map(|it| (it.id, it.price, it.quantity))
            .collect();
        assert_eq!(
            day5,
            [
                (184, 600, 1),
                (479, 600, 1),
                (302, 900, 1),
                (830, 500, 1),
                (132, 500, 1),
                (176, 500, 5),
                (243, 500, 1),
                (497, 600, 5),
                (399, 500, 5),
                (488, 300, 5),
            ]
        );
        let day7: Vec<i32> = cart(12345, 7, GameVersion::V1_6).iter().map(|it| it.id).collect();
        assert_eq!(day7, [766, 649, 337, 209, 150, 607, 706, 944, 725, 614]);
    }

    #[test]
    fn festival_market_day_is_1_6_only() {
        let ids: Vec<i32> = cart(12345, 15, GameVersion::V1_6).iter().map(|it| it.id).collect();
        assert_eq!(ids, [276, 194, 250, 412, 621, 348, 287, 140, 213, 692]);
        assert!(predict_cart(12345, 15, GameVersion::V1_5).is_none());
    }

    #[test]
    fn modern_stock_is_distinct_and_filtered() {
        for seed in [1, 7, 5000, -12345] {
            for (version, day) in [
                (GameVersion::V1_4, 5),
                (GameVersion::V1_5, 7),
                (GameVersion::V1_6, 5),
                (GameVersion::V1_6, 7),
            ] {
                let items = cart(seed, day, version);
                assert_eq!(items.len(), 10);
                for (i, a) in items.iter().enumerate() {
                    for b in &items[i + 1..] {
                        assert_ne!(a.id, b.id, "seed {seed} {version} day {day}");
                    }
                }
                if version >= GameVersion::V1_6 {
                    for it in &items {
                        let e = data::object(it.id).expect("catalog entry");
                        assert!(e.category < 0 && e.category != -999);
                        assert!(!e.type_excluded && !e.offlimits && e.price > 0);
                    }
                }
            }
        }
    }

    #[test]
    fn quantities_are_one_or_five_and_prices_cover_base() {
        for seed in [3, 42, 90001] {
            for version in GameVersion::ALL {
                let items = cart(seed, 5, version);
                for it in items {
                    assert!(it.quantity == 1 || it.quantity == 5);
                    assert!(it.price >= 100);
                }
            }
        }
    }

    #[test]
    fn finds_item_in_cart() {
        assert_eq!(find_item_in_cart(12345, 266, 112, GameVersion::V1_6), Some((61, 1300)));
        assert_eq!(find_item_in_cart(12345, 266, 10, GameVersion::V1_6), None);
    }

    #[test]
    fn no_cart_off_schedule() {
        assert!(predict_cart(12345, 1, GameVersion::V1_6).is_none());
        assert!(predict_cart(12345, 4, GameVersion::V1_3).is_none());
    }
}
