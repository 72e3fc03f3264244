use crate::SortStatistics;

/// Ciura's sequence, extended by a factor of ~2.25 per step.
pub const CIURA_GAPS_DESC: [usize; 20] = [
    7_860_916, 3_493_740, 1_552_773, 690_121, 306_720, 136_320, 60_587, 26_928, 11_968, 5_319,
    2_364, 1_051, 701, 301, 132, 57, 23, 10, 4, 1,
];

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum GapSequence {
    Ciura,
    /// All 3-smooth numbers `2^p * 3^q`.
    Pratt,
}

impl GapSequence {
    /// Gaps below `len`, largest first. Larger gaps would not move anything.
    pub fn gaps(self, len: usize) -> Vec<usize> {
        match self {
            Self::Ciura => CIURA_GAPS_DESC
                .iter()
                .copied()
                .filter(|&gap| gap < len)
                .collect(),
            Self::Pratt => pratt_gaps(len),
        }
    }
}

fn pratt_gaps(len: usize) -> Vec<usize> {
    let mut gaps = Vec::new();
    let mut pow2 = 1_usize;
    while pow2 < len {
        let mut gap = pow2;
        while gap < len {
            gaps.push(gap);
            match gap.checked_mul(3) {
                Some(next) => gap = next,
                None => break,
            }
        }
        match pow2.checked_mul(2) {
            Some(next) => pow2 = next,
            None => break,
        }
    }
    gaps.sort_unstable_by(|a, b| b.cmp(a));
    gaps
}

pub fn sort(data: &mut [u32], sequence: GapSequence) -> SortStatistics {
    let mut stats = SortStatistics::new(data.len());
    let len = data.len();

    for gap in sequence.gaps(len) {
        for i in gap..len {
            let x = data[i];
            let mut j = i;
            while j >= gap && stats.compare(x < data[j - gap]) {
                data[j] = data[j - gap];
                stats.moves += 1;
                j -= gap;
            }
            // Saving `x` and placing it back.
            data[j] = x;
            stats.moves += 2;
        }
    }

    stats
}
