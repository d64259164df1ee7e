//! Embassy-backed clock

use embassy_time::Instant;
use pulsar_hal::Clock;

/// [`Clock`] reading the embassy time driver
///
/// Resolution follows the configured embassy tick rate (1 MHz on RP2040).
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbassyClock;

impl Clock for EmbassyClock {
    fn now_us(&self) -> u64 {
        Instant::now().as_micros()
    }
}
