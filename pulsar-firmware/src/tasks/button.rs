//! Start/stop button task
//!
//! Watches an active-low button and signals the main loop once per
//! debounced press.

use defmt::*;
use embassy_rp::gpio::Input;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use embassy_time::{Duration, Timer};

/// Time the line must stay low to count as a press
const DEBOUNCE_MS: u64 = 20;

/// Signal to notify the main loop of a press
pub static BUTTON_SIGNAL: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// Button task - one signal per press, released before the next
#[embassy_executor::task]
pub async fn button_task(mut button: Input<'static>) {
    info!("Button task started");

    loop {
        button.wait_for_falling_edge().await;
        Timer::after(Duration::from_millis(DEBOUNCE_MS)).await;

        if button.is_high() {
            trace!("Button bounce ignored");
            continue;
        }

        BUTTON_SIGNAL.signal(());
        button.wait_for_high().await;
    }
}
