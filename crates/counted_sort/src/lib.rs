mod algorithms;
mod error;
pub mod generate;
mod stats;
pub mod work_list;

pub use algorithms::common::{is_sorted_non_decreasing, partition_hoare};
pub use algorithms::quick_sort::{sort_iterative, sort_recursive, sort_with};
pub use algorithms::shell_sort::{CIURA_GAPS_DESC, GapSequence};
pub use error::SortError;
pub use stats::SortStatistics;
pub use work_list::{BoundedQueue, BoundedStack, Discipline, WorkList};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum SortAlgorithm {
    BubbleSort,
    ShellSortCiura,
    ShellSortPratt,
    QuickSortRecursive,
    QuickSortStack,
    QuickSortQueue,
}

pub const ALL_ALGORITHMS: [SortAlgorithm; 6] = [
    SortAlgorithm::BubbleSort,
    SortAlgorithm::ShellSortCiura,
    SortAlgorithm::ShellSortPratt,
    SortAlgorithm::QuickSortRecursive,
    SortAlgorithm::QuickSortStack,
    SortAlgorithm::QuickSortQueue,
];

pub fn all_algorithms() -> &'static [SortAlgorithm] {
    &ALL_ALGORITHMS
}

pub fn algorithm_name(algo: SortAlgorithm) -> &'static str {
    match algo {
        SortAlgorithm::BubbleSort => "bubble_sort",
        SortAlgorithm::ShellSortCiura => "shell_sort_ciura",
        SortAlgorithm::ShellSortPratt => "shell_sort_pratt",
        SortAlgorithm::QuickSortRecursive => "quick_sort_recursive",
        SortAlgorithm::QuickSortStack => "quick_sort_stack",
        SortAlgorithm::QuickSortQueue => "quick_sort_queue",
    }
}

/// Heading used when reporting results.
pub fn display_name(algo: SortAlgorithm) -> &'static str {
    match algo {
        SortAlgorithm::BubbleSort => "Bubble Sort",
        SortAlgorithm::ShellSortCiura => "Shell Sort (Ciura Gap Sequence)",
        SortAlgorithm::ShellSortPratt => "Shell Sort (Pratt Gap Sequence)",
        SortAlgorithm::QuickSortRecursive => "Quicksort (Recursive)",
        SortAlgorithm::QuickSortStack => "Quicksort (Stack)",
        SortAlgorithm::QuickSortQueue => "Quicksort (Queue)",
    }
}

/// Whether the algorithm drives an explicit work list and so reports `max_ds_size`.
pub fn uses_work_list(algo: SortAlgorithm) -> bool {
    matches!(
        algo,
        SortAlgorithm::QuickSortStack | SortAlgorithm::QuickSortQueue
    )
}

pub fn sort_u32(algo: SortAlgorithm, data: &mut [u32]) -> Result<SortStatistics, SortError> {
    let stats = match algo {
        SortAlgorithm::BubbleSort => algorithms::bubble_sort::sort(data),
        SortAlgorithm::ShellSortCiura => algorithms::shell_sort::sort(data, GapSequence::Ciura),
        SortAlgorithm::ShellSortPratt => algorithms::shell_sort::sort(data, GapSequence::Pratt),
        SortAlgorithm::QuickSortRecursive => algorithms::quick_sort::sort_recursive(data),
        SortAlgorithm::QuickSortStack => sort_iterative(data, Discipline::Lifo)?,
        SortAlgorithm::QuickSortQueue => sort_iterative(data, Discipline::Fifo)?,
    };
    log::debug!(
        "{}: {} elements, {} moves, {} compares",
        algorithm_name(algo),
        stats.elements,
        stats.moves,
        stats.compares
    );
    Ok(stats)
}
