//! Board-agnostic core logic for Pulsar firmware
//!
//! This crate contains all pulse logic that does not depend on specific
//! hardware implementations:
//!
//! - Pulse configuration and on/off timing math
//! - Cooperative timer queue (deferred actions serviced from the main loop)
//! - Pulse controller state machine

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

mod log;

pub mod config;
pub mod pulse;
pub mod scheduler;

pub use config::{PulseConfig, PulseTiming};
pub use pulse::{PulseController, PulseState, Toggle};
pub use scheduler::{ScheduleError, Scheduler, TimerQueue};
