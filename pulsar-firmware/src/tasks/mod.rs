//! Embassy async tasks
//!
//! Tasks communicate with the main loop via signals.

pub mod button;

pub use button::{button_task, BUTTON_SIGNAL};
