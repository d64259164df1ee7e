//! Configuration types
//!
//! Board-agnostic pulse parameters and the timing derived from them.

pub mod types;

pub use types::*;
