//! Night event prediction.
//!
//! The event is rolled for the *following* night: querying day `d`
//! answers what happens while the player sleeps into day `d + 1`. Each
//! candidate event consumes one draw whether or not its side conditions
//! hold, so the test order below is part of the contract and differs
//! between versions.

use strum::{Display, EnumIter, EnumString};

use crate::rng::{hashed_seed, Rng};
use crate::version::GameVersion;

#[derive(Clone, Copy, Debug, Display, EnumIter, EnumString, Eq, PartialEq)]
#[strum(serialize_all = "snake_case")]
pub enum NightEvent {
    None,
    Fairy,
    Witch,
    Meteor,
    /// The strange capsule.
    Ufo,
    Owl,
    Earthquake,
}

/// Predicts the event for the night after `day`.
pub fn predict_night_event(seed: i32, day: u32, version: GameVersion) -> NightEvent {
    let ed = day.saturating_add(1);
    if ed == 30 {
        return NightEvent::Earthquake;
    }
    let month = ((ed - 1) / 28) % 4;
    let year = (ed - 1) / 112 + 1;

    if version >= GameVersion::V1_6 {
        let mut rng = Rng::new(hashed_seed(ed as i32, seed / 2, 0, 0, 0));
        for _ in 0..10 {
            rng.next_double();
        }
        if rng.next_double() < 0.01 && month < 3 {
            return NightEvent::Fairy;
        }
        if rng.next_double() < 0.01 && ed > 20 {
            return NightEvent::Witch;
        }
        if rng.next_double() < 0.01 && ed > 5 {
            return NightEvent::Meteor;
        }
        if rng.next_double() < 0.005 {
            return NightEvent::Owl;
        }
        if rng.next_double() < 0.008 && year > 1 {
            return NightEvent::Ufo;
        }
        return NightEvent::None;
    }

    let mut rng = Rng::new((seed / 2).wrapping_add(ed as i32));
    if rng.next_double() < 0.01 && month < 3 {
        return NightEvent::Fairy;
    }
    if rng.next_double() < 0.01 {
        return NightEvent::Witch;
    }
    if rng.next_double() < 0.01 {
        return NightEvent::Meteor;
    }
    if version < GameVersion::V1_5 {
        if rng.next_double() < 0.01 && year > 1 {
            return NightEvent::Ufo;
        }
        if rng.next_double() < 0.01 {
            return NightEvent::Owl;
        }
    } else if version < GameVersion::V1_5_3 {
        if rng.next_double() < 0.008 && year > 1 {
            return NightEvent::Ufo;
        }
        if rng.next_double() < 0.008 {
            return NightEvent::Owl;
        }
    } else {
        // 1.5.3 swapped the owl ahead of the capsule.
        if rng.next_double() < 0.005 {
            return NightEvent::Owl;
        }
        if rng.next_double() < 0.008 && year > 1 {
            return NightEvent::Ufo;
        }
    }
    NightEvent::None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn earthquake_closes_the_first_month() {
        for seed in [-1000, 0, 1, 12345, i32::MAX] {
            for v in GameVersion::ALL {
                assert_eq!(predict_night_event(seed, 29, v), NightEvent::Earthquake);
            }
        }
    }

    #[test]
    fn night_event_prediction_returns_correct_results() {
        use NightEvent::*;
        for (version, expected) in [
            (GameVersion::V1_3, &[(12, Meteor), (29, Earthquake), (44, Witch), (60, Fairy)][..]),
            (GameVersion::V1_4, &[(12, Meteor), (29, Earthquake), (44, Witch), (60, Fairy)][..]),
            (GameVersion::V1_5, &[(12, Meteor), (29, Earthquake), (44, Witch), (60, Fairy)][..]),
            (
                GameVersion::V1_5_3,
                &[(12, Meteor), (29, Earthquake), (44, Witch), (60, Fairy), (79, Owl)][..],
            ),
            (
                GameVersion::V1_6,
                &[
                    (11, Meteor),
                    (16, Meteor),
                    (29, Earthquake),
                    (64, Witch),
                    (81, Owl),
                    (96, Meteor),
                ][..],
            ),
        ] {
            for day in 1..=112u32 {
                let want = expected
                    .iter()
                    .find(|(d, _)| *d == day)
                    .map(|(_, e)| *e)
                    .unwrap_or(NightEvent::None);
                let got = predict_night_event(12345, day, version);
                assert_eq!(got, want, "version {version}, day {day}");
            }
        }
    }

    #[test]
    fn event_names_parse() {
        assert_eq!("fairy".parse::<NightEvent>().unwrap(), NightEvent::Fairy);
        assert_eq!("ufo".parse::<NightEvent>().unwrap(), NightEvent::Ufo);
        assert!("dragon".parse::<NightEvent>().is_err());
    }
}
