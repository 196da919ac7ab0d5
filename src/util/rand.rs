// NeonArcade
// copyright agam 2024~2025

use rand::seq::SliceRandom;
use rand_xoshiro::{
    rand_core::{RngCore, SeedableRng},
    Xoshiro256StarStar,
};
use std::time::{SystemTime, UNIX_EPOCH};

/// Seedable RNG handed to the game cores. Deterministic under `srand`,
/// which is what the engine tests rely on.
pub struct Rand {
    rng: Xoshiro256StarStar,
}

impl Default for Rand {
    fn default() -> Self {
        Rand::new()
    }
}

impl Rand {
    pub fn new() -> Self {
        Self {
            rng: Xoshiro256StarStar::seed_from_u64(0),
        }
    }

    pub fn srand(&mut self, seed: u64) {
        self.rng = Xoshiro256StarStar::seed_from_u64(seed);
    }

    pub fn srand_now(&mut self) {
        let start = SystemTime::now();
        let since_the_epoch = start
            .duration_since(UNIX_EPOCH)
            .expect("Time went backwards");
        let seed = since_the_epoch.as_millis();
        self.srand(seed as u64);
    }

    pub fn rand64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    pub fn rand(&mut self) -> u32 {
        self.rng.next_u64() as u32
    }

    /// Uniform draw in [0, n). Used by the food spawner and the
    /// tic-tac-toe machine player.
    pub fn rand_range(&mut self, n: u32) -> u32 {
        (self.rng.next_u64() % n as u64) as u32
    }

    pub fn shuffle<T: Copy>(&mut self, v: &mut [T]) {
        v.shuffle(&mut self.rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_sequence_is_reproducible() {
        let mut a = Rand::new();
        let mut b = Rand::new();
        a.srand(77);
        b.srand(77);
        for _ in 0..100 {
            assert_eq!(a.rand64(), b.rand64());
        }
    }

    #[test]
    fn test_rand_range_stays_in_range() {
        let mut r = Rand::new();
        r.srand(5);
        for _ in 0..1000 {
            assert!(r.rand_range(20) < 20);
        }
    }

    #[test]
    fn test_shuffle_keeps_elements() {
        let mut r = Rand::new();
        r.srand(9);
        let mut v: Vec<u8> = (0..12).collect();
        r.shuffle(&mut v);
        let mut sorted = v.clone();
        sorted.sort();
        assert_eq!(sorted, (0..12).collect::<Vec<u8>>());
    }
}
