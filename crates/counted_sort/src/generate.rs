use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Values stay within the 31-bit range of the classic `random()` generator.
pub const VALUE_MASK: u32 = 0x7FFF_FFFF;

/// Fills a fresh array of `len` pseudorandom values. The same seed always yields the same
/// array, so every algorithm in a comparison run sees identical input.
pub fn random_array(seed: u64, len: usize) -> Vec<u32> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut data = Vec::with_capacity(len);
    for _ in 0..len {
        data.push(rng.random::<u32>() & VALUE_MASK);
    }
    data
}
