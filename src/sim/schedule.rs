//! One-shot deferred tasks on a single-threaded clock
//!
//! Tasks fire in (due time, insertion order). A task that wants to repeat
//! schedules its successor when it runs, so two runs of the same chain can
//! never overlap.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Deterministic timer queue
#[derive(Debug, Clone)]
pub struct Scheduler<T: Ord> {
    /// Current clock reading (ms)
    now: u64,
    /// Insertion counter for FIFO order among equal due times
    seq: u64,
    queue: BinaryHeap<Reverse<(u64, u64, T)>>,
}

impl<T: Ord> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> Scheduler<T> {
    pub fn new() -> Self {
        Self {
            now: 0,
            seq: 0,
            queue: BinaryHeap::new(),
        }
    }

    pub fn now(&self) -> u64 {
        self.now
    }

    /// Number of tasks waiting
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Run `task` `delay_ms` after the current clock reading (saturating)
    pub fn schedule(&mut self, delay_ms: u64, task: T) {
        let due = self.now.saturating_add(delay_ms);
        self.queue.push(Reverse((due, self.seq, task)));
        self.seq += 1;
    }

    /// Pop the earliest task due at or before `until`, advancing the clock to
    /// its due time
    pub fn pop_due(&mut self, until: u64) -> Option<(u64, T)> {
        let due = match self.queue.peek() {
            Some(Reverse((due, _, _))) if *due <= until => *due,
            _ => return None,
        };
        let Reverse((_, _, task)) = self.queue.pop()?;
        self.now = self.now.max(due);
        Some((due, task))
    }

    /// Move the clock forward (never backward)
    pub fn advance_to(&mut self, time: u64) {
        self.now = self.now.max(time);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
    enum Task {
        A,
        B,
    }

    #[test]
    fn test_fires_in_due_order() {
        let mut sched = Scheduler::new();
        sched.schedule(1000, Task::A);
        sched.schedule(50, Task::B);

        assert_eq!(sched.pop_due(49), None);
        assert_eq!(sched.pop_due(2000), Some((50, Task::B)));
        assert_eq!(sched.now(), 50);
        assert_eq!(sched.pop_due(2000), Some((1000, Task::A)));
        assert_eq!(sched.pending(), 0);
    }

    #[test]
    fn test_equal_due_times_are_fifo() {
        let mut sched = Scheduler::new();
        sched.schedule(10, Task::B);
        sched.schedule(10, Task::A);
        assert_eq!(sched.pop_due(10), Some((10, Task::B)));
        assert_eq!(sched.pop_due(10), Some((10, Task::A)));
    }

    #[test]
    fn test_delay_is_relative_to_clock() {
        let mut sched = Scheduler::new();
        sched.advance_to(500);
        sched.schedule(50, Task::A);
        assert_eq!(sched.pop_due(549), None);
        assert_eq!(sched.pop_due(550), Some((550, Task::A)));
    }

    #[test]
    fn test_huge_delay_saturates() {
        let mut sched = Scheduler::new();
        sched.advance_to(100);
        sched.schedule(u64::MAX, Task::A);
        assert_eq!(sched.pop_due(u64::MAX - 1), None);
        assert_eq!(sched.pending(), 1);
    }

    #[test]
    fn test_clock_never_goes_back() {
        let mut sched: Scheduler<Task> = Scheduler::new();
        sched.advance_to(100);
        sched.advance_to(20);
        assert_eq!(sched.now(), 100);
    }
}
