//! Board configuration
//!
//! Generated by build.rs from pulse.toml after validation.

use pulsar_core::PulseConfig;

include!(concat!(env!("OUT_DIR"), "/pulse_config.rs"));
