//! Short-term memory of recently visited schedules.

use std::collections::VecDeque;

/// Bounded FIFO of recently visited schedules.
///
/// Membership is exact sequence equality, so a check costs O(K·N) for
/// capacity K and N jobs. Once full, each insertion evicts the oldest entry.
#[derive(Debug, Clone)]
pub struct TabuMemory {
    capacity: usize,
    entries: VecDeque<Vec<usize>>,
}

impl TabuMemory {
    /// Creates an empty memory holding at most `capacity` schedules.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: VecDeque::with_capacity(capacity + 1),
        }
    }

    /// Returns `true` if `schedule` is currently tabu.
    pub fn contains(&self, schedule: &[usize]) -> bool {
        self.entries.iter().any(|s| s.as_slice() == schedule)
    }

    /// Records a visited schedule, evicting the oldest beyond capacity.
    pub fn push(&mut self, schedule: Vec<usize>) {
        self.entries.push_back(schedule);
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
    }

    /// Number of schedules held.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is held.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of schedules held.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Held schedules, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &[usize]> {
        self.entries.iter().map(Vec::as_slice)
    }
}
