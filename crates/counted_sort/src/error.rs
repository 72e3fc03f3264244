use thiserror::Error;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum SortError {
    /// The work list's backing buffer could not be obtained.
    #[error("failed to allocate a work list with capacity {capacity}")]
    AllocationFailure { capacity: usize },
    /// A push on a full work list. Only reachable when a work list was
    /// provisioned too small for the array it drives.
    #[error("work list is full (capacity {capacity})")]
    CapacityExceeded { capacity: usize },
}
