//! Pulse configuration type definitions

use pulsar_hal::Level;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default period between rising edges (ms)
pub const DEFAULT_PERIOD_MS: u32 = 1000;

/// Default output pin (the on-board LED on most Arduino-style boards)
pub const DEFAULT_PIN: u8 = 13;

/// Duty cycle used when the requested one is out of range (%)
pub const DEFAULT_DUTY_CYCLE: u8 = 50;

/// Smallest accepted duty cycle (%)
pub const MIN_DUTY_CYCLE: u8 = 1;

/// Largest accepted duty cycle (%)
pub const MAX_DUTY_CYCLE: u8 = 99;

/// Microseconds per millisecond of period, per percent of duty
const US_PER_MS_PERCENT: u64 = 10;

/// Requested pulse parameters
///
/// The duty cycle is stored as given; [`PulseConfig::duty_percent`]
/// applies the clamping rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct PulseConfig {
    /// Full on+off period in milliseconds
    pub period_ms: u32,
    /// Output pin number
    pub pin: u8,
    /// Percentage of the period spent high (1-99)
    pub duty_cycle: u8,
}

impl Default for PulseConfig {
    fn default() -> Self {
        Self {
            period_ms: DEFAULT_PERIOD_MS,
            pin: DEFAULT_PIN,
            duty_cycle: DEFAULT_DUTY_CYCLE,
        }
    }
}

impl PulseConfig {
    /// Config with the given period and default pin and duty cycle
    pub const fn new(period_ms: u32) -> Self {
        Self {
            period_ms,
            pin: DEFAULT_PIN,
            duty_cycle: DEFAULT_DUTY_CYCLE,
        }
    }

    pub const fn with_pin(mut self, pin: u8) -> Self {
        self.pin = pin;
        self
    }

    pub const fn with_duty_cycle(mut self, duty_cycle: u8) -> Self {
        self.duty_cycle = duty_cycle;
        self
    }

    /// Check whether the duty cycle is used as given
    pub const fn duty_cycle_valid(&self) -> bool {
        self.duty_cycle >= MIN_DUTY_CYCLE && self.duty_cycle <= MAX_DUTY_CYCLE
    }

    /// Effective duty cycle: out-of-range requests fall back to 50%
    pub const fn duty_percent(&self) -> u8 {
        if self.duty_cycle_valid() {
            self.duty_cycle
        } else {
            DEFAULT_DUTY_CYCLE
        }
    }

    /// On/off durations for this config
    pub const fn timing(&self) -> PulseTiming {
        let duty = self.duty_percent() as u64;
        let period = self.period_ms as u64;
        PulseTiming {
            on_us: duty * period * US_PER_MS_PERCENT,
            off_us: (100 - duty) * period * US_PER_MS_PERCENT,
        }
    }
}

/// Time spent at each level, in microseconds
///
/// Computed in 64 bits: the largest `u32` period at 99% stays far below
/// `u64::MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PulseTiming {
    /// Time the pin is held high
    pub on_us: u64,
    /// Time the pin is held low
    pub off_us: u64,
}

impl PulseTiming {
    pub const fn period_us(&self) -> u64 {
        self.on_us + self.off_us
    }

    /// How long the pin stays at `level` before the next toggle
    pub const fn duration_for(&self, level: Level) -> u64 {
        match level {
            Level::High => self.on_us,
            Level::Low => self.off_us,
        }
    }
}
