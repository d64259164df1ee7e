//! Pulse controller
//!
//! Owns one output pin and toggles it from a [`Scheduler`]. The controller
//! does no work on its own: the embedding program must call
//! [`PulseController::tick`] often, and the pin changes only as promptly as
//! those calls arrive. Lateness is not compensated, so error accumulates.
//!
//! # Example
//!
//! ```ignore
//! let queue: TimerQueue<_, Toggle, 1> = TimerQueue::new(clock);
//! let mut blink = PulseController::new(PulseConfig::new(500), led, queue);
//! loop {
//!     blink.tick();
//! }
//! ```

use pulsar_hal::{Level, OutputPin};

use super::state::PulseState;
use crate::config::{PulseConfig, PulseTiming};
use crate::log::{debug, info, warning};
use crate::scheduler::Scheduler;

/// Timer queue action: flip the pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Toggle;

/// Non-blocking pin pulser
pub struct PulseController<P, S> {
    /// Output pin number
    pin: u8,
    output: P,
    scheduler: S,
    timing: PulseTiming,
    /// Logical level, mirrored on `output` after every write
    level: Level,
    state: PulseState,
}

impl<P, S> PulseController<P, S>
where
    P: OutputPin,
    S: Scheduler<Action = Toggle>,
{
    /// Create a controller and start pulsing immediately
    ///
    /// The pin is driven low, then the first toggle runs synchronously,
    /// so the pin is high when this returns. An out-of-range duty cycle
    /// is replaced by 50%.
    pub fn new(config: PulseConfig, output: P, scheduler: S) -> Self {
        let timing = config.timing();
        debug!(
            "pulse pin {}: duty {}%, on {} us, off {} us",
            config.pin,
            config.duty_percent(),
            timing.on_us,
            timing.off_us
        );

        let mut controller = Self {
            pin: config.pin,
            output,
            scheduler,
            timing,
            level: Level::Low,
            state: PulseState::Stopped,
        };
        controller.output.set_level(Level::Low);
        controller.start();
        controller
    }

    /// Service the timer queue
    ///
    /// Runs every toggle that was due when the call began. A toggle queued
    /// during this pass waits for the next call, even with a zero delay.
    pub fn tick(&mut self) {
        let now = self.scheduler.now_us();
        let mut budget = self.scheduler.pending();

        while budget > 0 {
            let Some(Toggle) = self.scheduler.pop_due(now) else {
                break;
            };
            budget -= 1;

            if self.state.has_pending_toggle() {
                self.toggle();
            } else {
                debug!("pulse pin {}: stale toggle ignored", self.pin);
            }
        }
    }

    /// Resume pulsing after a completed stop
    ///
    /// Returns false if the controller is running or a stop is still
    /// pending; nothing changes in that case.
    pub fn start(&mut self) -> bool {
        if self.state != PulseState::Stopped {
            return false;
        }

        info!("pulse pin {}: start", self.pin);
        self.state = PulseState::Running;
        self.toggle();
        true
    }

    /// Request a stop, leaving the pin at `rest`
    ///
    /// The half-period in flight completes first: the pin reaches `rest`
    /// when the queued toggle comes due. Returns false unless running.
    pub fn stop(&mut self, rest: Level) -> bool {
        if self.state != PulseState::Running {
            return false;
        }

        info!("pulse pin {}: stop requested, resting {}", self.pin, rest);
        self.state = PulseState::stopping_at(rest);
        true
    }

    fn toggle(&mut self) {
        self.level = self.level.toggled();
        self.output.set_level(self.level);

        match self.state {
            PulseState::Running => {
                let delay_us = self.timing.duration_for(self.level);
                if let Err(e) = self.scheduler.run_later(delay_us, Toggle) {
                    warning!("pulse pin {}: cannot queue toggle: {}", self.pin, e);
                    self.state = PulseState::Stopped;
                }
            }
            PulseState::StopPendingLow | PulseState::StopPendingHigh => {
                let rest = self.state.rest_level().unwrap_or(Level::Low);
                self.level = rest;
                self.output.set_level(rest);
                self.state = PulseState::Stopped;
                info!("pulse pin {}: stopped", self.pin);
            }
            PulseState::Stopped => {}
        }
    }

    pub fn state(&self) -> PulseState {
        self.state
    }

    /// Logical level last written to the pin
    pub fn level(&self) -> Level {
        self.level
    }

    pub fn pin(&self) -> u8 {
        self.pin
    }

    pub fn timing(&self) -> PulseTiming {
        self.timing
    }

    /// Toggling on schedule (a pending stop counts as no longer running)
    pub fn is_running(&self) -> bool {
        self.state == PulseState::Running
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn output(&self) -> &P {
        &self.output
    }
}
