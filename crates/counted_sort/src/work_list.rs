use log::trace;

use crate::SortError;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Discipline {
    Lifo,
    Fifo,
}

/// Bounded container of pending `(lo, hi)` ranges.
///
/// - Capacity is fixed at construction; `push` on a full list fails without mutating.
/// - `pop` on an empty list returns `None`.
/// - A range occupies two consecutive entries, pushed `lo` then `hi`.
pub trait WorkList: Sized {
    const DISCIPLINE: Discipline;

    fn try_with_capacity(capacity: usize) -> Result<Self, SortError>;
    fn push(&mut self, x: i64) -> Result<(), SortError>;
    fn pop(&mut self) -> Option<i64>;
    fn len(&self) -> usize;
    fn capacity(&self) -> usize;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    fn is_full(&self) -> bool {
        self.len() == self.capacity()
    }

    fn push_range(&mut self, lo: i64, hi: i64) -> Result<(), SortError> {
        // Both halves or neither.
        if self.capacity() - self.len() < 2 {
            return Err(SortError::CapacityExceeded {
                capacity: self.capacity(),
            });
        }
        self.push(lo)?;
        self.push(hi)?;
        trace!("push [{lo}, {hi}], {} entries pending", self.len());
        Ok(())
    }

    fn pop_range(&mut self) -> Option<(i64, i64)> {
        match Self::DISCIPLINE {
            Discipline::Lifo => {
                let hi = self.pop()?;
                let lo = self.pop()?;
                Some((lo, hi))
            }
            Discipline::Fifo => {
                let lo = self.pop()?;
                let hi = self.pop()?;
                Some((lo, hi))
            }
        }
    }
}

fn alloc_slots(capacity: usize) -> Result<Box<[i64]>, SortError> {
    if capacity == 0 {
        return Err(SortError::AllocationFailure { capacity });
    }

    let mut slots = Vec::new();
    slots
        .try_reserve_exact(capacity)
        .map_err(|_| SortError::AllocationFailure { capacity })?;
    slots.resize(capacity, 0);
    Ok(slots.into_boxed_slice())
}

#[derive(Clone, Debug)]
pub struct BoundedStack {
    top: usize,
    items: Box<[i64]>,
}

impl WorkList for BoundedStack {
    const DISCIPLINE: Discipline = Discipline::Lifo;

    fn try_with_capacity(capacity: usize) -> Result<Self, SortError> {
        Ok(Self {
            top: 0,
            items: alloc_slots(capacity)?,
        })
    }

    fn push(&mut self, x: i64) -> Result<(), SortError> {
        if self.is_full() {
            return Err(SortError::CapacityExceeded {
                capacity: self.capacity(),
            });
        }
        self.items[self.top] = x;
        self.top += 1;
        Ok(())
    }

    fn pop(&mut self) -> Option<i64> {
        if self.is_empty() {
            return None;
        }
        self.top -= 1;
        Some(self.items[self.top])
    }

    #[inline]
    fn len(&self) -> usize {
        self.top
    }

    #[inline]
    fn capacity(&self) -> usize {
        self.items.len()
    }
}

/// Circular buffer; `head` and `tail` wrap at `capacity`.
#[derive(Clone, Debug)]
pub struct BoundedQueue {
    head: usize,
    tail: usize,
    len: usize,
    items: Box<[i64]>,
}

impl WorkList for BoundedQueue {
    const DISCIPLINE: Discipline = Discipline::Fifo;

    fn try_with_capacity(capacity: usize) -> Result<Self, SortError> {
        Ok(Self {
            head: 0,
            tail: 0,
            len: 0,
            items: alloc_slots(capacity)?,
        })
    }

    fn push(&mut self, x: i64) -> Result<(), SortError> {
        if self.is_full() {
            return Err(SortError::CapacityExceeded {
                capacity: self.capacity(),
            });
        }
        self.items[self.tail] = x;
        self.tail += 1;
        if self.tail == self.capacity() {
            self.tail = 0;
        }
        self.len += 1;
        Ok(())
    }

    fn pop(&mut self) -> Option<i64> {
        if self.is_empty() {
            return None;
        }
        let x = self.items[self.head];
        self.head += 1;
        if self.head == self.capacity() {
            self.head = 0;
        }
        self.len -= 1;
        Some(x)
    }

    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    #[inline]
    fn capacity(&self) -> usize {
        self.items.len()
    }
}
