//! Pulse controller states

use pulsar_hal::Level;

/// Controller state
///
/// The two pending-stop states only take effect when the toggle already in
/// the timer queue comes due.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PulseState {
    /// No toggle in flight, pin resting
    #[default]
    Stopped,
    /// Toggling on schedule
    Running,
    /// Stop requested, pin will rest low
    StopPendingLow,
    /// Stop requested, pin will rest high
    StopPendingHigh,
}

impl PulseState {
    /// Pending-stop state for the requested resting level
    pub const fn stopping_at(rest: Level) -> Self {
        match rest {
            Level::Low => PulseState::StopPendingLow,
            Level::High => PulseState::StopPendingHigh,
        }
    }

    /// Level the pin will rest at, if a stop is pending
    pub const fn rest_level(&self) -> Option<Level> {
        match self {
            PulseState::StopPendingLow => Some(Level::Low),
            PulseState::StopPendingHigh => Some(Level::High),
            _ => None,
        }
    }

    /// A toggle is still waiting in the timer queue
    pub const fn has_pending_toggle(&self) -> bool {
        !matches!(self, PulseState::Stopped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stopping_at() {
        assert_eq!(PulseState::stopping_at(Level::Low), PulseState::StopPendingLow);
        assert_eq!(PulseState::stopping_at(Level::High), PulseState::StopPendingHigh);
    }

    #[test]
    fn test_rest_level() {
        assert_eq!(PulseState::Stopped.rest_level(), None);
        assert_eq!(PulseState::Running.rest_level(), None);
        assert_eq!(PulseState::StopPendingLow.rest_level(), Some(Level::Low));
        assert_eq!(PulseState::StopPendingHigh.rest_level(), Some(Level::High));
    }

    #[test]
    fn test_pending_toggle() {
        assert!(!PulseState::Stopped.has_pending_toggle());
        assert!(PulseState::Running.has_pending_toggle());
        assert!(PulseState::StopPendingLow.has_pending_toggle());
    }
}
