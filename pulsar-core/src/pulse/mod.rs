//! Pulse generation
//!
//! Drives one output pin through a repeating high/low sequence from the
//! timer queue, with a stop that lets the current half-period finish.

pub mod controller;
pub mod state;

pub use controller::{PulseController, Toggle};
pub use state::PulseState;
