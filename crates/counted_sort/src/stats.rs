/// Counters threaded through one sort invocation.
///
/// `max_ds_size` stays 0 for algorithms without an explicit work list.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct SortStatistics {
    pub elements: usize,
    pub moves: u64,
    pub compares: u64,
    pub max_ds_size: usize,
}

impl SortStatistics {
    pub fn new(elements: usize) -> Self {
        Self {
            elements,
            ..Self::default()
        }
    }

    /// Charges one compare and passes the comparison result through, so a
    /// loop guard like `while stats.compare(a < b)` counts the failing test
    /// that ends the loop as well.
    #[inline]
    pub fn compare(&mut self, outcome: bool) -> bool {
        self.compares += 1;
        outcome
    }

    /// Charges the three element writes of a swap through a temporary.
    #[inline]
    pub fn swap(&mut self, data: &mut [u32], a: usize, b: usize) {
        data.swap(a, b);
        self.moves += 3;
    }

    #[inline]
    pub fn observe_ds_size(&mut self, size: usize) {
        if size > self.max_ds_size {
            self.max_ds_size = size;
        }
    }
}
