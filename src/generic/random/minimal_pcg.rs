//! A simple pseudorandom number generator.
//!
//! A translation of the minimal C PCG32 implementation from <https://www.pcg-random.org/>, satisfying [RngCore] and [SeedableRng].
//!
//! A context holds an instance as its source of randomness, seeded from [Config::random_seed](crate::config::Config::random_seed).
//! So, two contexts built from the same configuration and given the same sequence of operations make the same random choices.

use rand::SeedableRng;
use rand_core::{impls, RngCore};

/// State and increment.
#[derive(Default)]
pub struct MinimalPCG32 {
    state: u64,
    inc: u64,
}

impl RngCore for MinimalPCG32 {
    fn next_u32(&mut self) -> u32 {
        let old_state = self.state;

        self.state = old_state
            .wrapping_mul(6364136223846793005_u64)
            .wrapping_add(self.inc);

        let xorshifted = (((old_state >> 18) ^ old_state) >> 27) as u32;
        let rot = (old_state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }
}

impl SeedableRng for MinimalPCG32 {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        // Any odd increment selects a full period stream.
        const INCREMENT: u64 = 1442695040888963407;
        let mut rng = Self {
            state: 0,
            inc: INCREMENT,
        };
        rng.next_u32();
        rng.state = rng.state.wrapping_add(u64::from_le_bytes(seed));
        rng.next_u32();
        rng
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_stream() {
        let mut a = MinimalPCG32::seed_from_u64(73);
        let mut b = MinimalPCG32::seed_from_u64(73);
        for _ in 0..64 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn different_seed_different_stream() {
        let mut a = MinimalPCG32::from_seed(2_u64.to_le_bytes());
        let mut b = MinimalPCG32::from_seed(3_u64.to_le_bytes());
        let a_stream = (0..8).map(|_| a.next_u32()).collect::<Vec<_>>();
        let b_stream = (0..8).map(|_| b.next_u32()).collect::<Vec<_>>();
        assert_ne!(a_stream, b_stream);
    }

    #[test]
    fn fills_bytes() {
        let mut rng = MinimalPCG32::from_seed(0_u64.to_le_bytes());
        let mut bytes = [0_u8; 13];
        rng.fill_bytes(&mut bytes);
        assert!(bytes.iter().any(|byte| *byte != 0));
    }
}
