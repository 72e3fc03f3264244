use log::debug;

use crate::work_list::{BoundedQueue, BoundedStack, Discipline, WorkList};
use crate::{SortError, SortStatistics};

use super::common;

/// Quicksort with the call stack as the implicit work list. `max_ds_size` stays 0.
pub fn sort_recursive(data: &mut [u32]) -> SortStatistics {
    let mut stats = SortStatistics::new(data.len());
    if data.len() >= 2 {
        quick_sort_recursive(data, 0, data.len() as i64 - 1, &mut stats);
    }
    debug!(
        "quicksort (recursive): {} elements, {} compares, {} moves",
        stats.elements, stats.compares, stats.moves
    );
    stats
}

// Recurses into the smaller side and loops on the larger one to keep the native stack
// at O(log n). Ranges are disjoint, so the order does not change any count.
fn quick_sort_recursive(data: &mut [u32], mut lo: i64, mut hi: i64, stats: &mut SortStatistics) {
    while lo < hi {
        let p = common::partition_hoare(data, lo, hi, stats);
        if p - lo < hi - p {
            quick_sort_recursive(data, lo, p, stats);
            lo = p + 1;
        } else {
            quick_sort_recursive(data, p + 1, hi, stats);
            hi = p;
        }
    }
}

pub fn sort_iterative(data: &mut [u32], discipline: Discipline) -> Result<SortStatistics, SortError> {
    match discipline {
        Discipline::Lifo => sort_with::<BoundedStack>(data),
        Discipline::Fifo => sort_with::<BoundedQueue>(data),
    }
}

/// Quicksort driven by an explicit work list of pending ranges.
///
/// The work list is provisioned with `max(len, 2)` entries: pending ranges are disjoint and
/// hold at least two elements each, and a one-element array still needs room for its seed.
pub fn sort_with<W: WorkList>(data: &mut [u32]) -> Result<SortStatistics, SortError> {
    let mut stats = SortStatistics::new(data.len());
    if data.is_empty() {
        return Ok(stats);
    }

    let mut work = W::try_with_capacity(data.len().max(2))?;
    work.push_range(0, data.len() as i64 - 1)?;
    stats.observe_ds_size(work.len());

    while let Some((lo, hi)) = work.pop_range() {
        // Only the seed of a one-element array gets here.
        if lo >= hi {
            continue;
        }

        let p = common::partition_hoare(data, lo, hi, &mut stats);

        if lo < p {
            work.push_range(lo, p)?;
        }
        if hi > p + 1 {
            work.push_range(p + 1, hi)?;
        }

        stats.observe_ds_size(work.len());
    }
    debug_assert!(work.is_empty());

    debug!(
        "quicksort ({:?}): {} elements, {} compares, {} moves, max work list {} of {}",
        W::DISCIPLINE,
        stats.elements,
        stats.compares,
        stats.moves,
        stats.max_ds_size,
        work.capacity()
    );
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;
    use crate::algorithms::common::is_sorted_non_decreasing;

    fn random_data(size: usize, seed: u64, modulo: u32) -> Vec<u32> {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..size).map(|_| rng.random::<u32>() % modulo).collect()
    }

    #[test]
    fn four_elements_both_disciplines() {
        for discipline in [Discipline::Lifo, Discipline::Fifo] {
            let mut data = [5_u32, 3, 8, 1];
            let stats = sort_iterative(&mut data, discipline).unwrap();

            assert_eq!(data, [1, 3, 5, 8]);
            assert_eq!(stats.elements, 4);
            assert_eq!(stats.compares, 12);
            assert_eq!(stats.moves, 6);
            assert_eq!(stats.max_ds_size, 4);
        }

        let mut data = [5_u32, 3, 8, 1];
        let stats = sort_recursive(&mut data);
        assert_eq!(data, [1, 3, 5, 8]);
        assert_eq!((stats.compares, stats.moves, stats.max_ds_size), (12, 6, 0));
    }

    #[test]
    fn single_element_is_never_partitioned() {
        for discipline in [Discipline::Lifo, Discipline::Fifo] {
            let mut data = [42_u32];
            let stats = sort_iterative(&mut data, discipline).unwrap();

            assert_eq!(data, [42]);
            assert_eq!(
                stats,
                SortStatistics {
                    elements: 1,
                    moves: 0,
                    compares: 0,
                    max_ds_size: 2,
                }
            );
        }
    }

    #[test]
    fn empty_input_is_a_no_op() {
        let mut data: [u32; 0] = [];
        assert_eq!(
            sort_iterative(&mut data, Discipline::Lifo).unwrap(),
            SortStatistics::new(0)
        );
        assert_eq!(sort_recursive(&mut data), SortStatistics::new(0));
    }

    #[test]
    fn traversal_order_does_not_change_counts() {
        for &(size, modulo) in &[(2_usize, 10_u32), (17, 4), (100, 1000), (1000, u32::MAX), (4096, 64)] {
            let base = random_data(size, 0x0D15_C1B1 ^ size as u64, modulo);

            let mut by_stack = base.clone();
            let stack_stats = sort_iterative(&mut by_stack, Discipline::Lifo).unwrap();
            let mut by_queue = base.clone();
            let queue_stats = sort_iterative(&mut by_queue, Discipline::Fifo).unwrap();
            let mut by_recursion = base.clone();
            let recursive_stats = sort_recursive(&mut by_recursion);

            let mut expected = base.clone();
            expected.sort_unstable();
            assert_eq!(by_stack, expected, "size={size}");
            assert_eq!(by_queue, expected, "size={size}");
            assert_eq!(by_recursion, expected, "size={size}");

            assert_eq!(stack_stats.compares, queue_stats.compares, "size={size}");
            assert_eq!(stack_stats.moves, queue_stats.moves, "size={size}");
            assert_eq!(recursive_stats.compares, stack_stats.compares, "size={size}");
            assert_eq!(recursive_stats.moves, stack_stats.moves, "size={size}");

            for stats in [stack_stats, queue_stats] {
                assert!(stats.max_ds_size >= 2);
                assert!(stats.max_ds_size <= size.max(2));
            }
        }
    }

    #[test]
    fn queue_grows_wider_than_stack() {
        let base = random_data(4096, 0x0B5F_2026, u32::MAX);

        let mut data = base.clone();
        let stack_stats = sort_iterative(&mut data, Discipline::Lifo).unwrap();
        let mut data = base;
        let queue_stats = sort_iterative(&mut data, Discipline::Fifo).unwrap();

        assert!(
            queue_stats.max_ds_size > stack_stats.max_ds_size,
            "queue={} stack={}",
            queue_stats.max_ds_size,
            stack_stats.max_ds_size
        );
    }

    #[test]
    fn statistics_are_deterministic() {
        let base = random_data(777, 0xDE7E_2026, 5000);
        for discipline in [Discipline::Lifo, Discipline::Fifo] {
            let mut first = base.clone();
            let mut second = base.clone();
            assert_eq!(
                sort_iterative(&mut first, discipline).unwrap(),
                sort_iterative(&mut second, discipline).unwrap()
            );
        }
    }

    #[test]
    fn presorted_and_reversed_inputs() {
        let ascending = (0..513_u32).collect::<Vec<_>>();
        let descending = ascending.iter().rev().copied().collect::<Vec<_>>();

        for base in [ascending.clone(), descending] {
            for discipline in [Discipline::Lifo, Discipline::Fifo] {
                let mut data = base.clone();
                let stats = sort_iterative(&mut data, discipline).unwrap();
                assert!(is_sorted_non_decreasing(&data));
                assert_eq!(data, ascending);
                assert_eq!(stats.elements, 513);
            }
        }
    }

    #[test]
    fn exact_fit_work_list_is_enough() {
        // Equal keys split every range in half, which keeps the most ranges pending at once.
        for size in 2..=64_usize {
            let mut data = vec![3_u32; size];
            let stats = sort_with::<BoundedQueue>(&mut data).unwrap();
            assert!(stats.max_ds_size <= size);
            let stats = sort_with::<BoundedStack>(&mut data).unwrap();
            assert!(stats.max_ds_size <= size);
        }
    }
}
