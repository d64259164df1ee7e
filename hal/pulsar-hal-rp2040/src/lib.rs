//! RP2040-specific HAL for Pulsar firmware
//!
//! This crate provides RP2040 implementations of the shared `pulsar-hal`
//! traits:
//!
//! - Dynamic pin allocation for config-driven setup
//! - Output pins wrapped as [`pulsar_hal::OutputPin`]
//! - Embassy time driver as [`pulsar_hal::Clock`]

#![no_std]

pub mod pins;
pub mod time;

pub use pins::{PinBank, PinError, RpOutput};
pub use time::EmbassyClock;
