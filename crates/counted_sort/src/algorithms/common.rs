use crate::SortStatistics;

/// Hoare partition of the inclusive range `[lo, hi]` around its middle element.
///
/// Returns the split point `j`: every element of `[lo, j]` is `<=` every element of
/// `[j + 1, hi]`, and `lo <= j < hi`. Each element-vs-pivot test is charged as one
/// compare, including the test that stops a scan.
pub fn partition_hoare(data: &mut [u32], lo: i64, hi: i64, stats: &mut SortStatistics) -> i64 {
    debug_assert!(0 <= lo && lo < hi && (hi as usize) < data.len());

    let pivot = data[(lo + (hi - lo) / 2) as usize];
    let mut i = lo - 1;
    let mut j = hi + 1;

    while i < j {
        i += 1;
        while stats.compare(data[i as usize] < pivot) {
            i += 1;
        }

        j -= 1;
        while stats.compare(data[j as usize] > pivot) {
            j -= 1;
        }

        if i < j {
            stats.swap(data, i as usize, j as usize);
        }
    }

    j
}

#[inline]
pub fn is_sorted_non_decreasing(data: &[u32]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}
