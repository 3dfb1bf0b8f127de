//! Seed search: a single-threaded cooperative loop, and a rayon engine
//! layered on top of it for whole-range scans.
//!
//! [`search_range`] owns no threads and suspends only at its two callback
//! points, so a host can drive it from any runtime and cancel by
//! returning `false`. Parallelism comes from partitioning the seed
//! interval across workers; the workers share nothing but the match
//! budget, so there is no locking anywhere in the hot path.

use std::sync::{
    atomic::{AtomicU64, AtomicUsize, Ordering},
    mpsc::{self, Receiver},
    Arc,
};

use anyhow::{ensure, Result};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::filter::FilterNode;
use crate::version::GameVersion;

/// Seeds evaluated between progress callbacks.
pub const CHUNK: u64 = 10_000;

/// Final counters of one search call. Whether the range was exhausted,
/// a callback cancelled, or the cap was hit is deliberately not exposed;
/// the counts say everything the caller may rely on.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SearchOutcome {
    pub checked: u64,
    pub found: u64,
}

/// Searches `seed_lo..=seed_hi` for seeds matching `filter_json`.
///
/// `on_match` runs once per matching seed and `on_progress` every
/// [`CHUNK`] seeds and once at the end; either cancels the search by
/// returning `false`. `max_results` caps matches for this call
/// (0 = uncapped); hosts running several partitions coordinate a global
/// cap themselves.
pub fn search_range(
    filter_json: &str,
    seed_lo: i32,
    seed_hi: i32,
    max_results: usize,
    version: GameVersion,
    on_progress: impl FnMut(u64, u64) -> bool,
    on_match: impl FnMut(i32) -> bool,
) -> Result<SearchOutcome> {
    let filter = FilterNode::from_json(filter_json)?;
    Ok(search_parsed(
        &filter,
        seed_lo,
        seed_hi,
        max_results,
        version,
        on_progress,
        on_match,
    ))
}

/// The loop behind [`search_range`], for callers that parse once and
/// search many partitions.
pub fn search_parsed(
    filter: &FilterNode,
    seed_lo: i32,
    seed_hi: i32,
    max_results: usize,
    version: GameVersion,
    mut on_progress: impl FnMut(u64, u64) -> bool,
    mut on_match: impl FnMut(i32) -> bool,
) -> SearchOutcome {
    let mut checked = 0u64;
    let mut found = 0u64;
    for seed in seed_lo..=seed_hi {
        let matched = filter.matches(seed, version);
        checked += 1;
        if matched {
            found += 1;
            if !on_match(seed) {
                break;
            }
            if max_results > 0 && found >= max_results as u64 {
                break;
            }
        }
        if checked % CHUNK == 0 && !on_progress(checked, found) {
            break;
        }
    }
    on_progress(checked, found);
    SearchOutcome { checked, found }
}

fn default_seed_start() -> i32 {
    0
}

fn default_seed_end() -> i32 {
    i32::MAX
}

/// Declarative search description, loadable from a JSON file.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SearchConfig {
    /// Game version the predictors emulate.
    #[serde(default)]
    pub version: GameVersion,

    /// First seed to check (inclusive). Defaults to 0.
    #[serde(default = "default_seed_start")]
    pub seed_start: i32,

    /// Last seed to check (inclusive). Defaults to `i32::MAX`.
    #[serde(default = "default_seed_end")]
    pub seed_end: i32,

    /// Stop after this many seeds have been found.
    pub max_seeds: usize,

    /// Conditions a seed must satisfy.
    pub filter: FilterNode,
}

/// Progress event delivered by [`SeedFinder::find_seeds_async`].
#[derive(Debug)]
pub enum Progress {
    /// Seeds searched so far.
    Searched(u64),

    /// The results of a completed search.
    Complete(Vec<i32>),
}

/// Parallel whole-range search engine.
#[derive(Debug)]
pub struct SeedFinder {
    version: GameVersion,
    seed_start: i32,
    seed_end: i32,
    max_seeds: usize,
    filter: FilterNode,
}

impl SeedFinder {
    /// Builds a finder from a validated config.
    pub fn new(config: &SearchConfig) -> Result<Self> {
        ensure!(config.max_seeds > 0, "max_seeds must be at least 1");
        ensure!(
            config.seed_start <= config.seed_end,
            "seed_start must not exceed seed_end"
        );
        Ok(Self {
            version: config.version,
            seed_start: config.seed_start,
            seed_end: config.seed_end,
            max_seeds: config.max_seeds,
            filter: config.filter.clone(),
        })
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: SearchConfig =
            serde_json::from_str(json).map_err(|e| anyhow::anyhow!("can't parse config: {e}"))?;
        config.filter.validate()?;
        Self::new(&config)
    }

    /// Number of seeds in the configured range.
    pub fn total(&self) -> u64 {
        (self.seed_end as i64 - self.seed_start as i64) as u64 + 1
    }

    /// Finds seeds synchronously on the rayon pool.
    pub fn find_seeds(&self) -> Vec<i32> {
        (self.seed_start..=self.seed_end)
            .into_par_iter()
            .filter(|&seed| self.filter.matches(seed, self.version))
            .take_any(self.max_seeds)
            .collect()
    }

    /// Runs the search in the background, reporting through the returned
    /// channel.
    ///
    /// `steps` controls progress granularity. Incrementing a shared
    /// counter on every seed costs real throughput, so workers only touch
    /// it when their seed lands on a step boundary; with ~1000 steps the
    /// updates look smooth and the overhead disappears into noise.
    ///
    /// Note: this does not use futures or async/await.
    pub fn find_seeds_async(finder: Arc<Self>, steps: u64) -> Receiver<Progress> {
        let (tx, rx) = mpsc::channel();
        let step_size = (finder.total() / steps.max(1)).max(1);
        let searched = Arc::new(AtomicU64::new(0));
        let found = Arc::new(AtomicUsize::new(0));

        rayon::spawn(move || {
            let start = finder.seed_start;
            let progress_tx = tx.clone();
            let seeds: Vec<i32> = (finder.seed_start..=finder.seed_end)
                .into_par_iter()
                .filter(|&seed| {
                    let offset = (seed as i64 - start as i64) as u64;
                    if offset % step_size == 0 {
                        let searched = searched.fetch_add(step_size, Ordering::Relaxed) + step_size;
                        let _ = progress_tx.send(Progress::Searched(searched));
                    }
                    // A cheap early-out once the budget is spent; take_any
                    // below enforces the exact cap.
                    if found.load(Ordering::Relaxed) >= finder.max_seeds {
                        return false;
                    }
                    if finder.filter.matches(seed, finder.version) {
                        found.fetch_add(1, Ordering::Relaxed);
                        true
                    } else {
                        false
                    }
                })
                .take_any(finder.max_seeds)
                .collect();
            let _ = tx.send(Progress::Complete(seeds));
        });
        rx
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EARTHQUAKE_FILTER: &str = r#"{
        "logic": "and",
        "conditions": [
            { "logic": "condition", "type": "night_event",
              "day_start": 29, "day_end": 29, "event_type": "earthquake" }
        ]
    }"#;

    const CART_FILTER: &str = r#"{
        "logic": "condition", "type": "cart_item",
        "day_start": 1, "day_end": 28, "item_id": 266
    }"#;

    #[test]
    fn earthquake_filter_matches_the_whole_range() {
        let mut seeds = Vec::new();
        let outcome = search_range(
            EARTHQUAKE_FILTER,
            1,
            1000,
            0,
            GameVersion::V1_6,
            |_, _| true,
            |seed| {
                seeds.push(seed);
                true
            },
        )
        .unwrap();
        assert_eq!(outcome, SearchOutcome { checked: 1000, found: 1000 });
        assert_eq!(seeds, (1..=1000).collect::<Vec<i32>>());
    }

    #[test]
    fn cart_search_matches_reference() {
        let mut seeds = Vec::new();
        let outcome = search_range(
            CART_FILTER,
            1,
            2000,
            0,
            GameVersion::V1_6,
            |_, _| true,
            |seed| {
                seeds.push(seed);
                true
            },
        )
        .unwrap();
        assert_eq!(outcome.found, 516);
        assert_eq!(&seeds[..10], [8, 9, 18, 19, 36, 37, 46, 47, 48, 49]);
    }

    #[test]
    fn max_results_caps_the_scan() {
        let mut seeds = Vec::new();
        let outcome = search_range(
            EARTHQUAKE_FILTER,
            1,
            1000,
            5,
            GameVersion::V1_6,
            |_, _| true,
            |seed| {
                seeds.push(seed);
                true
            },
        )
        .unwrap();
        assert_eq!(seeds, [1, 2, 3, 4, 5]);
        assert_eq!(outcome, SearchOutcome { checked: 5, found: 5 });
    }

    #[test]
    fn match_callback_cancels() {
        let mut calls = 0;
        let outcome = search_range(
            EARTHQUAKE_FILTER,
            1,
            1000,
            0,
            GameVersion::V1_6,
            |_, _| true,
            |_| {
                calls += 1;
                calls < 3
            },
        )
        .unwrap();
        assert_eq!(calls, 3);
        assert_eq!(outcome, SearchOutcome { checked: 3, found: 3 });
    }

    #[test]
    fn progress_callback_cancels_at_chunk_boundary() {
        let never_matches = r#"{
            "logic": "condition", "type": "dish_of_day",
            "day_start": 1, "day_end": 1, "dish_id": -1
        }"#;
        let mut reports = Vec::new();
        let outcome = search_range(
            never_matches,
            0,
            100_000,
            0,
            GameVersion::V1_6,
            |checked, found| {
                reports.push((checked, found));
                reports.len() < 2
            },
            |_| true,
        )
        .unwrap();
        // Two in-loop reports, then the final one.
        assert_eq!(outcome.checked, 2 * CHUNK);
        assert_eq!(reports, [(CHUNK, 0), (2 * CHUNK, 0), (2 * CHUNK, 0)]);
    }

    #[test]
    fn searches_are_deterministic() {
        let collect = || {
            let mut seeds = Vec::new();
            search_range(
                CART_FILTER,
                1,
                500,
                0,
                GameVersion::V1_6,
                |_, _| true,
                |s| {
                    seeds.push(s);
                    true
                },
            )
            .unwrap();
            seeds
        };
        assert_eq!(collect(), collect());
    }

    #[test]
    fn bad_filter_fails_before_iterating() {
        let mut match_calls = 0;
        let result = search_range(
            "{ not json",
            1,
            10,
            0,
            GameVersion::V1_6,
            |_, _| true,
            |_| {
                match_calls += 1;
                true
            },
        );
        assert!(result.is_err());
        assert_eq!(match_calls, 0);
    }

    #[test]
    fn finder_collects_the_same_seeds_as_the_loop() {
        let config = format!(
            r#"{{ "version": "1.6", "seed_start": 1, "seed_end": 2000,
                 "max_seeds": 1000, "filter": {CART_FILTER} }}"#
        );
        let finder = SeedFinder::from_json(&config).unwrap();
        let mut parallel = finder.find_seeds();
        parallel.sort_unstable();
        let mut serial = Vec::new();
        search_range(
            CART_FILTER,
            1,
            2000,
            0,
            GameVersion::V1_6,
            |_, _| true,
            |s| {
                serial.push(s);
                true
            },
        )
        .unwrap();
        assert_eq!(parallel, serial);
    }

    #[test]
    fn async_finder_reports_progress_then_completes() {
        let config = format!(
            r#"{{ "version": "1.6", "seed_start": 1, "seed_end": 50000,
                 "max_seeds": 3, "filter": {CART_FILTER} }}"#
        );
        let finder = Arc::new(SeedFinder::from_json(&config).unwrap());
        let rx = SeedFinder::find_seeds_async(finder, 100);
        let mut completed = None;
        for event in rx {
            match event {
                Progress::Searched(_) => {}
                Progress::Complete(seeds) => {
                    completed = Some(seeds);
                    break;
                }
            }
        }
        let seeds = completed.expect("search completes");
        assert_eq!(seeds.len(), 3);
        let reference: Vec<i32> = [8, 9, 18, 19, 36, 37, 46, 47, 48, 49].to_vec();
        for seed in seeds {
            assert!(reference.contains(&seed) || {
                // Workers race, but anything reported must really match.
                FilterNode::from_json(CART_FILTER).unwrap().matches(seed, GameVersion::V1_6)
            });
        }
    }

    #[test]
    fn rejects_bad_configs() {
        assert!(SeedFinder::from_json("{}").is_err());
        let config = format!(
            r#"{{ "seed_start": 10, "seed_end": 1, "max_seeds": 5, "filter": {CART_FILTER} }}"#
        );
        assert!(SeedFinder::from_json(&config).is_err());
    }
}
