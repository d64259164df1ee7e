//! Pulsar - pin pulsing firmware
//!
//! Main firmware binary for RP2040 boards. Pulses the pin configured in
//! pulse.toml from the main loop, with an optional button to stop and
//! restart the pulse.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_futures::yield_now;
use embassy_rp::gpio::{Input, Pull};
use pulsar_core::{PulseController, TimerQueue, Toggle};
use pulsar_hal::Level;
use pulsar_hal_rp2040::{EmbassyClock, PinBank};
use {defmt_rtt as _, panic_probe as _};

mod config;
mod tasks;

use tasks::BUTTON_SIGNAL;

/// One pulse never has more than one toggle in flight
const QUEUE_DEPTH: usize = 1;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Pulsar firmware starting...");

    let p = embassy_rp::init(Default::default());
    let mut pins = PinBank::new(p);
    info!("Peripherals initialized");

    let pulse_config = config::PULSE;
    let output = unwrap!(pins.take_output(pulse_config.pin, Level::Low));
    let queue: TimerQueue<EmbassyClock, Toggle, QUEUE_DEPTH> = TimerQueue::new(EmbassyClock);
    let mut pulse = PulseController::new(pulse_config, output, queue);

    let timing = pulse.timing();
    info!(
        "Pulsing GPIO{}: {} us on, {} us off",
        pulse.pin(),
        timing.on_us,
        timing.off_us
    );

    if let Some(button_pin) = config::BUTTON_PIN {
        let button = Input::new(unwrap!(pins.take(button_pin)), Pull::Up);
        spawner.spawn(unwrap!(tasks::button_task(button)));
        info!("Button on GPIO{}", button_pin);
    }

    // The controller only advances when ticked, so tick on every pass and
    // let other tasks run in between
    loop {
        if BUTTON_SIGNAL.try_take().is_some() {
            handle_button(&mut pulse);
        }

        pulse.tick();
        yield_now().await;
    }
}

/// Start or stop the pulse from a button press
fn handle_button<P, S>(pulse: &mut PulseController<P, S>)
where
    P: pulsar_hal::OutputPin,
    S: pulsar_core::Scheduler<Action = Toggle>,
{
    if pulse.is_running() {
        if pulse.stop(Level::Low) {
            info!("Pulse stopping");
        }
    } else if pulse.start() {
        info!("Pulse restarted");
    } else {
        // Previous stop still waiting for its half-period
        debug!("Press ignored, pulse state {}", pulse.state());
    }
}
