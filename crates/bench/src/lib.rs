use std::time::Duration;

use criterion::measurement::Measurement;
use criterion::{BenchmarkGroup, SamplingMode};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SMALL_INPUT_MAX: usize = 4096;
const MEDIUM_INPUT_MAX: usize = 65536;
const SAMPLE_SIZE: usize = 10;
const WARM_UP_MS: u64 = 80;
const SMALL_MEASURE_MS: u64 = 120;
const MEDIUM_MEASURE_MS: u64 = 300;
const LARGE_MEASURE_MS: u64 = 500;
const RNG_SEED: u64 = 0x5EED_2026;

/// Scales criterion's sampling to the input size so quadratic sorts on large inputs
/// still finish in reasonable time.
pub fn apply_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, size: usize) {
    group.sample_size(SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(WARM_UP_MS));
    if size <= SMALL_INPUT_MAX {
        group.sampling_mode(SamplingMode::Auto);
        group.measurement_time(Duration::from_millis(SMALL_MEASURE_MS));
    } else if size <= MEDIUM_INPUT_MAX {
        group.sampling_mode(SamplingMode::Flat);
        group.measurement_time(Duration::from_millis(MEDIUM_MEASURE_MS));
    } else {
        group.sampling_mode(SamplingMode::Flat);
        group.measurement_time(Duration::from_millis(LARGE_MEASURE_MS));
    }
}

pub fn default_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}

/// Ascending `0..size` with `size / 100` random transpositions (at least one).
pub fn nearly_sorted<R: Rng + ?Sized>(rng: &mut R, size: usize) -> Vec<u32> {
    let mut data = (0..size as u32).collect::<Vec<_>>();
    if size == 0 {
        return data;
    }
    for _ in 0..(size / 100).max(1) {
        let a = rng.random_range(0..size);
        let b = rng.random_range(0..size);
        data.swap(a, b);
    }
    data
}
