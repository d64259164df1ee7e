//! Fixed-capacity timer queue
//!
//! Pending actions live in a min-heap ordered by deadline. Entries with
//! equal deadlines come out in the order they were queued.

use core::cmp::Ordering;

use heapless::binary_heap::{BinaryHeap, Min};
use pulsar_hal::Clock;

use super::{ScheduleError, Scheduler};

/// Pending action with its deadline
#[derive(Debug, Clone, Copy)]
struct Entry<A> {
    deadline_us: u64,
    /// Insertion order, breaks deadline ties
    seq: u64,
    action: A,
}

impl<A> Entry<A> {
    fn key(&self) -> (u64, u64) {
        (self.deadline_us, self.seq)
    }
}

impl<A> PartialEq for Entry<A> {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl<A> Eq for Entry<A> {}

impl<A> PartialOrd for Entry<A> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<A> Ord for Entry<A> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

/// Timer queue holding up to `N` pending actions
///
/// Reads time from `C`. A single pulse controller never has more than
/// one toggle in flight, so `N = 1` is enough for it.
pub struct TimerQueue<C, A, const N: usize> {
    clock: C,
    heap: BinaryHeap<Entry<A>, Min, N>,
    next_seq: u64,
}

impl<C: Clock, A: Copy, const N: usize> TimerQueue<C, A, N> {
    /// Create an empty queue reading time from `clock`
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    /// Deadline of the earliest pending action
    pub fn next_deadline(&self) -> Option<u64> {
        self.heap.peek().map(|e| e.deadline_us)
    }
}

impl<C: Clock, A: Copy, const N: usize> Scheduler for TimerQueue<C, A, N> {
    type Action = A;

    fn run_later(&mut self, delay_us: u64, action: A) -> Result<(), ScheduleError> {
        let entry = Entry {
            deadline_us: self.clock.now_us().saturating_add(delay_us),
            seq: self.next_seq,
            action,
        };
        self.heap
            .push(entry)
            .map_err(|_| ScheduleError::QueueFull)?;
        self.next_seq = self.next_seq.wrapping_add(1);
        Ok(())
    }

    fn now_us(&self) -> u64 {
        self.clock.now_us()
    }

    fn pop_due(&mut self, now_us: u64) -> Option<A> {
        let due = self
            .heap
            .peek()
            .is_some_and(|entry| entry.deadline_us <= now_us);
        if due {
            self.heap.pop().map(|entry| entry.action)
        } else {
            None
        }
    }

    fn pending(&self) -> usize {
        self.heap.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;

    /// Clock advanced by hand
    struct MockClock {
        now: Cell<u64>,
    }

    impl MockClock {
        fn new() -> Self {
            Self { now: Cell::new(0) }
        }

        fn advance(&self, us: u64) {
            self.now.set(self.now.get() + us);
        }
    }

    impl Clock for MockClock {
        fn now_us(&self) -> u64 {
            self.now.get()
        }
    }

    #[test]
    fn test_empty_queue() {
        let clock = MockClock::new();
        let mut queue: TimerQueue<_, u8, 4> = TimerQueue::new(&clock);
        assert_eq!(queue.pending(), 0);
        assert_eq!(queue.next_deadline(), None);
        assert_eq!(queue.pop_due(u64::MAX), None);
    }

    #[test]
    fn test_action_not_due_early() {
        let clock = MockClock::new();
        let mut queue: TimerQueue<_, u8, 4> = TimerQueue::new(&clock);

        clock.advance(100);
        queue.run_later(500, 7).unwrap();
        assert_eq!(queue.next_deadline(), Some(600));

        assert_eq!(queue.pop_due(599), None);
        assert_eq!(queue.pending(), 1);
        assert_eq!(queue.pop_due(600), Some(7));
        assert_eq!(queue.pending(), 0);
    }

    #[test]
    fn test_earliest_deadline_first() {
        let clock = MockClock::new();
        let mut queue: TimerQueue<_, u8, 4> = TimerQueue::new(&clock);

        queue.run_later(300, 3).unwrap();
        queue.run_later(100, 1).unwrap();
        queue.run_later(200, 2).unwrap();

        assert_eq!(queue.pop_due(1000), Some(1));
        assert_eq!(queue.pop_due(1000), Some(2));
        assert_eq!(queue.pop_due(1000), Some(3));
        assert_eq!(queue.pop_due(1000), None);
    }

    #[test]
    fn test_equal_deadlines_are_fifo() {
        let clock = MockClock::new();
        let mut queue: TimerQueue<_, u8, 4> = TimerQueue::new(&clock);

        queue.run_later(50, 10).unwrap();
        queue.run_later(50, 20).unwrap();
        queue.run_later(50, 30).unwrap();

        assert_eq!(queue.pop_due(50), Some(10));
        assert_eq!(queue.pop_due(50), Some(20));
        assert_eq!(queue.pop_due(50), Some(30));
    }

    #[test]
    fn test_full_queue_rejects() {
        let clock = MockClock::new();
        let mut queue: TimerQueue<_, u8, 1> = TimerQueue::new(&clock);

        assert!(queue.run_later(10, 1).is_ok());
        assert_eq!(queue.run_later(10, 2), Err(ScheduleError::QueueFull));
        assert_eq!(queue.pending(), 1);

        // Slot frees once the first action is collected
        assert_eq!(queue.pop_due(10), Some(1));
        assert!(queue.run_later(10, 2).is_ok());
    }

    #[test]
    fn test_deadline_saturates() {
        let clock = MockClock::new();
        let mut queue: TimerQueue<_, u8, 2> = TimerQueue::new(&clock);

        clock.advance(10);
        queue.run_later(u64::MAX, 1).unwrap();
        assert_eq!(queue.next_deadline(), Some(u64::MAX));
        assert_eq!(queue.pop_due(u64::MAX - 1), None);
    }
}
