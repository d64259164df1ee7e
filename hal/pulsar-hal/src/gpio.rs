//! GPIO pin abstractions
//!
//! Provides the digital output trait the pulse controller drives, and an
//! adapter for pins that implement `embedded-hal` 1.0.

use core::convert::Infallible;

/// Logical level of a digital line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    #[default]
    Low,
    High,
}

impl Level {
    /// The opposite level
    pub const fn toggled(self) -> Self {
        match self {
            Level::Low => Level::High,
            Level::High => Level::Low,
        }
    }

    pub const fn is_high(self) -> bool {
        matches!(self, Level::High)
    }
}

impl From<bool> for Level {
    fn from(high: bool) -> Self {
        if high {
            Level::High
        } else {
            Level::Low
        }
    }
}

impl From<Level> for bool {
    fn from(level: Level) -> Self {
        level.is_high()
    }
}

/// Digital output pin
///
/// A value of this type is already configured as an output; acquiring it
/// from a chip HAL is what puts the line into output mode.
pub trait OutputPin {
    /// Set the pin high (logic 1)
    fn set_high(&mut self);

    /// Set the pin low (logic 0)
    fn set_low(&mut self);

    /// Drive the pin to a specific level
    fn set_level(&mut self, level: Level) {
        match level {
            Level::High => self.set_high(),
            Level::Low => self.set_low(),
        }
    }

    /// Check if the pin is currently set high
    fn is_set_high(&self) -> bool;

    /// Check if the pin is currently set low
    fn is_set_low(&self) -> bool {
        !self.is_set_high()
    }

    /// Level the pin is currently driven to
    fn level(&self) -> Level {
        Level::from(self.is_set_high())
    }
}

/// [`OutputPin`] for any infallible `embedded-hal` 1.0 output
///
/// The driven level is remembered here, since `embedded-hal` only exposes
/// readback through `&mut self`.
pub struct EmbeddedHalPin<P> {
    pin: P,
    high: bool,
}

impl<P> EmbeddedHalPin<P>
where
    P: embedded_hal::digital::OutputPin<Error = Infallible>,
{
    /// Wrap a pin, driving it to `initial` so the cached level is exact
    pub fn new(pin: P, initial: Level) -> Self {
        let mut wrapped = Self { pin, high: false };
        wrapped.set_level(initial);
        wrapped
    }

    /// Give the underlying pin back
    pub fn release(self) -> P {
        self.pin
    }
}

impl<P> OutputPin for EmbeddedHalPin<P>
where
    P: embedded_hal::digital::OutputPin<Error = Infallible>,
{
    fn set_high(&mut self) {
        self.pin.set_high().unwrap_or_else(|e| match e {});
        self.high = true;
    }

    fn set_low(&mut self) {
        self.pin.set_low().unwrap_or_else(|e| match e {});
        self.high = false;
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records every write made through embedded-hal
    struct RecordingPin {
        writes: [Option<bool>; 4],
        count: usize,
    }

    impl RecordingPin {
        fn new() -> Self {
            Self {
                writes: [None; 4],
                count: 0,
            }
        }

        fn record(&mut self, high: bool) {
            if self.count < self.writes.len() {
                self.writes[self.count] = Some(high);
            }
            self.count += 1;
        }
    }

    impl embedded_hal::digital::ErrorType for RecordingPin {
        type Error = Infallible;
    }

    impl embedded_hal::digital::OutputPin for RecordingPin {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.record(false);
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.record(true);
            Ok(())
        }
    }

    #[test]
    fn test_level_toggle() {
        assert_eq!(Level::Low.toggled(), Level::High);
        assert_eq!(Level::High.toggled(), Level::Low);
        assert_eq!(Level::default(), Level::Low);
    }

    #[test]
    fn test_level_bool_conversion() {
        assert_eq!(Level::from(true), Level::High);
        assert_eq!(Level::from(false), Level::Low);
        assert!(bool::from(Level::High));
        assert!(!bool::from(Level::Low));
    }

    #[test]
    fn test_adapter_drives_initial_level() {
        let pin = EmbeddedHalPin::new(RecordingPin::new(), Level::Low);
        assert!(pin.is_set_low());

        let inner = pin.release();
        assert_eq!(inner.count, 1);
        assert_eq!(inner.writes[0], Some(false));
    }

    #[test]
    fn test_adapter_tracks_writes() {
        let mut pin = EmbeddedHalPin::new(RecordingPin::new(), Level::Low);

        pin.set_level(Level::High);
        assert!(pin.is_set_high());
        assert_eq!(pin.level(), Level::High);

        pin.set_low();
        assert_eq!(pin.level(), Level::Low);

        let inner = pin.release();
        assert_eq!(inner.count, 3);
        assert_eq!(inner.writes[..3], [Some(false), Some(true), Some(false)]);
    }
}
