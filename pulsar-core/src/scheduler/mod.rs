//! Deferred action scheduler
//!
//! A cooperative replacement for timer interrupts: callers ask for an
//! action to run after a delay, and the main loop periodically collects
//! whatever has come due. Timing is advisory. An action never fires early,
//! but it fires only as promptly as the loop polls.

pub mod queue;

pub use queue::TimerQueue;

/// Errors returned when scheduling an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScheduleError {
    /// No free slot for another pending action
    QueueFull,
}

/// Timer queue interface consumed by the pulse controller
///
/// Actions are plain values; the owner of the scheduler dispatches them
/// when [`Scheduler::pop_due`] hands them back.
pub trait Scheduler {
    /// Value handed back when a deadline passes
    type Action: Copy;

    /// Queue `action` to become due `delay_us` from now
    fn run_later(&mut self, delay_us: u64, action: Self::Action) -> Result<(), ScheduleError>;

    /// Current reading of the scheduler's clock
    fn now_us(&self) -> u64;

    /// Remove and return the earliest action due at or before `now_us`
    fn pop_due(&mut self, now_us: u64) -> Option<Self::Action>;

    /// Number of actions still waiting
    fn pending(&self) -> usize;
}
