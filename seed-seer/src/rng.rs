//! The game runtime's pseudo-random generator, reproduced bit for bit.
//!
//! The game seeds a subtractive lagged generator (the classic Knuth design
//! the .NET runtime ships) and predictions only hold if every draw here
//! matches the runtime exactly, including its two quirks: the `i32::MAX`
//! decrement inside `sample()` and the position wrap to slot 1, never 0.
//! All integer arithmetic is wrapping, matching unchecked C# semantics.

use xxhash_rust::xxh32::xxh32;

const MBIG: i32 = i32::MAX;
const MSEED: i32 = 161_803_398;
const REAL_UNIT: f64 = 1.0 / MBIG as f64;

/// A value-type RNG owned by the mechanic that created it.
///
/// Never shared and never outlives a prediction call; cloning it forks the
/// sequence, which the mechanics never do.
#[derive(Clone, Debug)]
pub struct Rng {
    seed_array: [i32; 56],
    i_next: usize,
    i_next_p: usize,
}

impl Rng {
    /// Builds the generator exactly as the runtime does.
    pub fn new(seed: i32) -> Self {
        let mut seed_array = Self::fill(seed);
        for _ in 0..4 {
            for i in 1..56 {
                let j = 1 + (i + 30) % 55;
                seed_array[i] = seed_array[i].wrapping_sub(seed_array[j]);
                if seed_array[i] < 0 {
                    seed_array[i] = seed_array[i].wrapping_add(MBIG);
                }
            }
        }
        Self { seed_array, i_next: 0, i_next_p: 21 }
    }

    /// Fast-path construction for callers that draw at most eight times.
    ///
    /// The first 8 draws read slots 1..=8 and 22..=29, whose fourth-pass
    /// inputs are either third-pass values or slots this pass has already
    /// rewritten. Restricting the final pass to those slots keeps the
    /// observable sequence identical while skipping most of its work. The
    /// mine-floor mechanics construct one generator per floor, so this is
    /// the hot path of floor scans.
    pub fn new_lite(seed: i32) -> Self {
        let mut seed_array = Self::fill(seed);
        for _ in 0..3 {
            for i in 1..56 {
                let j = 1 + (i + 30) % 55;
                seed_array[i] = seed_array[i].wrapping_sub(seed_array[j]);
                if seed_array[i] < 0 {
                    seed_array[i] = seed_array[i].wrapping_add(MBIG);
                }
            }
        }
        for i in (1..=8).chain(22..=29) {
            let j = 1 + (i + 30) % 55;
            seed_array[i] = seed_array[i].wrapping_sub(seed_array[j]);
            if seed_array[i] < 0 {
                seed_array[i] = seed_array[i].wrapping_add(MBIG);
            }
        }
        Self { seed_array, i_next: 0, i_next_p: 21 }
    }

    fn fill(seed: i32) -> [i32; 56] {
        let subtraction = if seed == i32::MIN { MBIG } else { seed.wrapping_abs() };
        let mut mj = MSEED.wrapping_sub(subtraction);
        let mut seed_array = [0i32; 56];
        seed_array[55] = mj;
        let mut mk = 1i32;
        for i in 1..55 {
            let ii = (21 * i) % 55;
            seed_array[ii] = mk;
            mk = mj.wrapping_sub(mk);
            if mk < 0 {
                mk = mk.wrapping_add(MBIG);
            }
            mj = seed_array[ii];
        }
        seed_array
    }

    #[inline]
    fn sample(&mut self) -> f64 {
        self.i_next += 1;
        if self.i_next == 56 {
            self.i_next = 1;
        }
        self.i_next_p += 1;
        if self.i_next_p == 56 {
            self.i_next_p = 1;
        }
        let mut r = self.seed_array[self.i_next].wrapping_sub(self.seed_array[self.i_next_p]);
        if r == MBIG {
            r -= 1;
        }
        if r < 0 {
            r = r.wrapping_add(MBIG);
        }
        self.seed_array[self.i_next] = r;
        r as f64 * REAL_UNIT
    }

    /// A double in `[0, 1)`; the game's idiom for probability tests.
    #[inline]
    pub fn next_double(&mut self) -> f64 {
        self.sample()
    }

    /// An i32 in `[0, i32::MAX)`.
    #[inline]
    pub fn next(&mut self) -> i32 {
        (self.sample() * MBIG as f64) as i32
    }

    /// An i32 in `[lo, hi)`. The exclusive upper bound is the runtime's
    /// convention; call sites like `next_in(2, 790)` mean rolls 2..=789.
    #[inline]
    pub fn next_in(&mut self, lo: i32, hi: i32) -> i32 {
        lo + (self.sample() * (hi - lo) as f64) as i32
    }
}

/// Derives an RNG seed from up to five components by hashing their
/// little-endian bytes with XXH32, the seeding the game switched to for
/// most mechanics in later versions. Components are first reduced
/// `% i32::MAX` with truncating (C#) remainder semantics.
pub fn hashed_seed(a: i32, b: i32, c: i32, d: i32, e: i32) -> i32 {
    let mut buf = [0u8; 20];
    for (slot, v) in buf.chunks_exact_mut(4).zip([a, b, c, d, e]) {
        slot.copy_from_slice(&(v % MBIG).to_le_bytes());
    }
    xxh32(&buf, 0) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    // First eight doubles per seed, captured from the reference runtime.
    const FIRST_8: [(i32, [f64; 8]); 6] = [
        (
            0,
            [
                0.7262432699679598,
                0.8173253595909687,
                0.7680226893946634,
                0.5581611914365372,
                0.2060331540210327,
                0.5588847946184151,
                0.9060270660119257,
                0.44217787331071584,
            ],
        ),
        (
            1,
            [
                0.24866858415709278,
                0.11074397718102856,
                0.46701067987224587,
                0.7716041220219825,
                0.657518893786482,
                0.43278260130099144,
                0.3540837636003661,
                0.9438622761256351,
            ],
        ),
        (
            -1,
            [
                0.24866858415709278,
                0.11074397718102856,
                0.46701067987224587,
                0.7716041220219825,
                0.657518893786482,
                0.43278260130099144,
                0.3540837636003661,
                0.9438622761256351,
            ],
        ),
        (
            12345,
            [
                0.06674693481379511,
                0.07015950887937075,
                0.7747651351498278,
                0.5111392687592372,
                0.7974905584927139,
                0.827308291023275,
                0.16595879530811627,
                0.7361306234896792,
            ],
        ),
        (
            i32::MAX,
            [
                0.7262432699679598,
                0.8173253595909687,
                0.7680226921886312,
                0.5581611914365372,
                0.2060331540210327,
                0.5588847936870925,
                0.9060270660119257,
                0.44217787331071584,
            ],
        ),
        (
            i32::MIN,
            [
                0.7262432699679598,
                0.8173253595909687,
                0.7680226921886312,
                0.5581611914365372,
                0.2060331540210327,
                0.5588847936870925,
                0.9060270660119257,
                0.44217787331071584,
            ],
        ),
    ];

    #[test]
    fn first_eight_doubles_match_reference() {
        for (seed, expected) in FIRST_8 {
            let mut rng = Rng::new(seed);
            for (i, want) in expected.iter().enumerate() {
                let got = rng.next_double();
                assert_eq!(got, *want, "seed {seed}, draw {i}");
            }
        }
    }

    #[test]
    fn lite_matches_full_for_first_eight_draws() {
        for seed in [0, 1, -1, 42, -42, 12345, 987654321, i32::MIN, i32::MAX] {
            let mut full = Rng::new(seed);
            let mut lite = Rng::new_lite(seed);
            for i in 0..8 {
                assert_eq!(full.next_double(), lite.next_double(), "seed {seed}, draw {i}");
            }
        }
    }

    #[test]
    fn next_in_matches_reference() {
        let mut rng = Rng::new(12345);
        let rolls: Vec<i32> = (0..10).map(|_| rng.next_in(2, 790)).collect();
        assert_eq!(rolls, [54, 57, 612, 404, 630, 653, 132, 582, 207, 400]);

        let mut rng = Rng::new(-42);
        let rolls: Vec<i32> = (0..6).map(|_| rng.next_in(-100, 101)).collect();
        assert_eq!(rolls, [34, -72, -75, 5, -67, -48]);
    }

    #[test]
    fn next_matches_reference() {
        let mut rng = Rng::new(777);
        let vals: Vec<i32> = (0..5).map(|_| rng.next()).collect();
        assert_eq!(
            vals,
            [1397394227, 1725699019, 1893417628, 866119360, 22447543]
        );
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = Rng::new(555);
        let mut b = Rng::new(555);
        for _ in 0..1000 {
            assert_eq!(a.next(), b.next());
        }
    }

    #[test]
    fn draws_stay_in_bounds() {
        let mut rng = Rng::new(31337);
        for _ in 0..10_000 {
            let d = rng.next_double();
            assert!((0.0..1.0).contains(&d));
        }
        let mut rng = Rng::new(31337);
        for _ in 0..10_000 {
            let v = rng.next_in(2, 790);
            assert!((2..790).contains(&v));
        }
    }

    #[test]
    fn hashed_seed_fixpoints() {
        assert_eq!(hashed_seed(0, 0, 0, 0, 0), 1333457339);
        assert_eq!(hashed_seed(1, 2, 3, 4, 5), 100340316);
        // i32::MAX reduces to 0, colliding with the zero tuple.
        assert_eq!(hashed_seed(i32::MAX, 0, 0, 0, 0), 1333457339);
        assert_eq!(hashed_seed(-1, -2, -3, 0, 0), 647461645);
        assert_eq!(hashed_seed(12345, 6172, 0, 0, 0), 1946479150);
        assert_eq!(hashed_seed(5, 6172, 0, 0, 0), 1127395413);
    }
}
